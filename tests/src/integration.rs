use itertools::Itertools;
use rand::rngs::StdRng;
use rand::{SeedableRng, TryRngCore};
use shamir_core::{
    combine, split, split_with_params, ShamirError, ShamirResult, Share,
    SplitParams, SHARE_OVERHEAD,
};

#[test]
fn test_complete_workflow() -> ShamirResult<()> {
    // 1. Key generation, outside the sharing scheme
    let mut key = [0u8; 32];
    rand::rngs::OsRng
        .try_fill_bytes(&mut key)
        .expect("os randomness available");

    // 2. Split
    let params = SplitParams::new(5, 3)?;
    let shares = split(&key, params.parts(), params.threshold())?;
    assert_eq!(shares.len(), params.parts());
    for share in &shares {
        assert_eq!(share.len(), key.len() + SHARE_OVERHEAD);
    }

    // 3. Every quorum recovers the key
    for quorum in shares.iter().combinations(params.threshold()) {
        let quorum: Vec<&[u8]> = quorum.into_iter().map(Share::as_bytes).collect();
        assert_eq!(combine(&quorum)?, key);
    }

    Ok(())
}

#[test]
fn test_shares_survive_json_transport() -> ShamirResult<()> {
    let secret = b"a secret worth sharing".to_vec();
    let mut rng = StdRng::seed_from_u64(17);
    let params: SplitParams =
        serde_json::from_str(r#"{"parts": 4, "threshold": 2}"#)
            .expect("valid configuration");
    let shares = split_with_params(&secret, params, &mut rng)?;

    let wire = serde_json::to_string(&shares).expect("serialize shares");
    let received: Vec<Share> =
        serde_json::from_str(&wire).expect("deserialize shares");

    assert_eq!(received, shares);
    assert_eq!(combine(&received[2..])?, secret);
    Ok(())
}

#[test]
fn test_malformed_share_is_rejected_on_receipt() {
    let err = serde_json::from_str::<Vec<Share>>("[[1, 2], [3]]").unwrap_err();
    assert!(err.to_string().contains("at least two bytes"));
}

#[test]
fn test_mixing_shares_of_different_secrets() {
    let first = split(b"first", 3, 2).unwrap();
    let second = split(b"second", 3, 2).unwrap();

    assert!(matches!(
        combine(&[first[0].clone(), second[0].clone()]),
        Err(ShamirError::InvalidShares(_))
    ));
}

#[test]
fn test_concurrent_split_and_combine() {
    let secrets: Vec<Vec<u8>> = (0u8..8)
        .map(|i| (0..=i).map(|b| b.wrapping_mul(31) ^ i).collect())
        .collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = secrets
            .iter()
            .enumerate()
            .map(|(i, secret)| {
                scope.spawn(move || {
                    let mut rng = StdRng::seed_from_u64(i as u64);
                    let params = SplitParams::new(4 + i, 2 + i / 2).unwrap();
                    let shares =
                        split_with_params(secret, params, &mut rng).unwrap();
                    combine(&shares[i % 2..][..params.threshold()]).unwrap()
                })
            })
            .collect();

        for (handle, secret) in handles.into_iter().zip(&secrets) {
            assert_eq!(&handle.join().unwrap(), secret);
        }
    });
}

#[test]
fn test_field_level_building_blocks_agree() {
    use shamir_math::prelude::*;

    let mut rng = StdRng::seed_from_u64(3);
    let polynomial = Polynomial::random(gf!(0x7f), 2, &mut rng).unwrap();
    let xs = gf_vec![10, 20, 30];
    let ys: Vec<Gf256> = xs.iter().map(|&x| polynomial.evaluate(x)).collect();

    assert_eq!(interpolate_at_zero(&xs, &ys).unwrap(), gf!(0x7f));
}
