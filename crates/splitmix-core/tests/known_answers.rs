use splitmix_core::{DeterministicRng, SplitMix64};

#[test]
fn seed_zero_raw_outputs() {
    let mut rng = SplitMix64::new(0);
    let expected = [
        16294208416658607535u64,
        7960286522194355700,
        487617019471545679,
        17909611376780542444,
    ];
    for (i, want) in expected.into_iter().enumerate() {
        assert_eq!(rng.next_u64(), want, "next_u64()[{i}]");
    }
}

#[test]
fn seed_zero_doubles() {
    let mut rng = SplitMix64::new(0);
    let expected = [
        0.883_310_808_213_642_6_f64,
        0.431_527_997_048_509_97,
        0.026_433_771_592_597_743,
        0.970_881_978_153_828_5,
        0.106_346_691_567_212_44,
    ];
    for (i, want) in expected.into_iter().enumerate() {
        let got = rng.next_double();
        assert!(
            (got - want).abs() <= 1e-15,
            "next_double()[{i}] = {got:.20}, expected {want:.20}"
        );
    }
}

#[test]
fn doubles_track_raw_outputs() {
    let mut raw = SplitMix64::new(0);
    let mut doubles = SplitMix64::new(0);
    for _ in 0..64 {
        let r = raw.next_u64();
        assert_eq!(doubles.next_double(), (r >> 11) as f64 / (1u64 << 53) as f64);
    }
}

#[test]
fn zero_seed_is_not_degenerate() {
    let mut rng = SplitMix64::new(0);
    let first: Vec<u64> = (0..16).map(|_| rng.next_u64()).collect();
    assert!(first.iter().all(|&v| v != 0));
    let mut sorted = first.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), first.len());
}

#[test]
fn each_derived_draw_consumes_one_raw_value() {
    let mut rng = SplitMix64::new(42);
    let mut shadow = SplitMix64::new(42);

    rng.next_double();
    rng.random_range(17).unwrap();
    rng.random_int(-3, 3).unwrap();
    rng.random_int(9, 9).unwrap();
    rng.toss();
    rng.random_choice(&[1, 2, 3]).unwrap();
    rng.weighted_choice(&[("x", 1.0), ("y", 2.0)]).unwrap();

    for _ in 0..7 {
        shadow.next_u64();
    }
    assert_eq!(rng, shadow);

    rng.dice(5, 20).unwrap();
    for _ in 0..5 {
        shadow.next_u64();
    }
    assert_eq!(rng, shadow);
}
