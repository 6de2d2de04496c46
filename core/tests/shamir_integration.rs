use itertools::Itertools;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use shamir_core::{
    combine, split, split_with_rng, ParameterError, ShamirError, Share,
};
use test_strategy::proptest;

const SECRET: &[u8] = b"threshold integration test secret";

#[test]
fn every_threshold_subset_recovers_the_secret() {
    let mut rng = StdRng::seed_from_u64(2024);
    let shares = split_with_rng(SECRET, 6, 3, &mut rng)
        .expect("split should succeed");

    for size in 3..=6 {
        for subset in shares.iter().combinations(size) {
            let recovered = combine(&subset).expect("combine should succeed");
            assert_eq!(recovered, SECRET, "subset of {size} shares failed");
        }
    }
}

#[test]
fn share_order_does_not_matter() {
    let shares = split(SECRET, 4, 4).expect("split should succeed");
    let reversed: Vec<Share> = shares.iter().rev().cloned().collect();

    assert_eq!(combine(&shares).unwrap(), SECRET);
    assert_eq!(combine(&reversed).unwrap(), SECRET);
}

#[test]
fn single_byte_three_of_five() {
    let secret = [0x2a];
    let mut rng = StdRng::seed_from_u64(42);
    let shares = split_with_rng(&secret, 5, 3, &mut rng).unwrap();

    for share in &shares {
        assert_eq!(share.len(), 2);
    }
    for subset in shares.iter().combinations(3) {
        assert_eq!(combine(&subset).unwrap(), secret);
    }
}

#[test]
fn two_shares_of_a_three_threshold_do_not_reliably_recover() {
    let secret = [0x2a];
    let mut total = 0;
    let mut matches = 0;

    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let shares = split_with_rng(&secret, 5, 3, &mut rng).unwrap();
        for pair in shares.iter().combinations(2) {
            let recovered =
                combine(&pair).expect("below threshold must not fail");
            assert_eq!(recovered.len(), 1);
            total += 1;
            if recovered == secret {
                matches += 1;
            }
        }
    }

    assert_eq!(total, 200);
    assert!(
        matches < total / 2,
        "{matches} of {total} pairs recovered the secret"
    );
}

#[test]
fn invalid_parameters_are_rejected() {
    assert_eq!(
        split(SECRET, 2, 3).unwrap_err(),
        ShamirError::InvalidParameters(ParameterError::PartsBelowThreshold {
            parts: 2,
            threshold: 3,
        })
    );
    assert_eq!(
        split(SECRET, 256, 2).unwrap_err(),
        ShamirError::InvalidParameters(ParameterError::TooManyParts(256))
    );
    assert_eq!(
        split(&[], 5, 3).unwrap_err(),
        ShamirError::InvalidParameters(ParameterError::EmptySecret)
    );
}

#[test]
fn duplicate_coordinates_are_detected() {
    let shares = split(SECRET, 3, 2).unwrap();
    let mut forged = shares[1].as_bytes().to_vec();
    let last = forged.len() - 1;
    forged[last] = shares[0].x_coordinate();
    forged[0] ^= 0xff;

    let candidates = vec![shares[0].as_bytes().to_vec(), forged];
    assert_eq!(
        combine(&candidates).unwrap_err(),
        ShamirError::DuplicateShare(shares[0].x_coordinate())
    );
}

#[test]
fn tampered_share_changes_the_result_silently() {
    let mut rng = StdRng::seed_from_u64(5);
    let shares = split_with_rng(SECRET, 3, 2, &mut rng).unwrap();
    let mut tampered: Vec<Vec<u8>> =
        shares.iter().take(2).map(|s| s.as_bytes().to_vec()).collect();
    tampered[0][0] ^= 0x01;

    let recovered = combine(&tampered).unwrap();
    assert_eq!(recovered.len(), SECRET.len());
    assert_ne!(recovered[0], SECRET[0]);
    assert_eq!(recovered[1..], SECRET[1..]);
}

#[proptest(ProptestConfig::with_cases(64))]
fn round_trip_through_any_threshold_prefix(
    #[strategy(proptest::collection::vec(any::<u8>(), 1..48))] secret: Vec<u8>,
    #[strategy(2usize..=6)] threshold: usize,
    #[strategy(0usize..4)] extra: usize,
    #[strategy(0usize..16)] offset: usize,
    seed: u64,
) {
    let parts = threshold + extra;
    let mut rng = StdRng::seed_from_u64(seed);
    let shares = split_with_rng(&secret, parts, threshold, &mut rng).unwrap();

    prop_assert_eq!(shares.len(), parts);
    let start = offset % parts;
    let subset: Vec<&Share> =
        shares.iter().cycle().skip(start).take(threshold).collect();
    let subset: Vec<&[u8]> = subset.into_iter().map(Share::as_bytes).collect();
    prop_assert_eq!(combine(&subset).unwrap(), secret);
}
