use rand::rngs::OsRng;
use rand::TryRngCore;
use shamir_core::{combine, split, SplitParams};
use tracing_subscriber::EnvFilter;

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// Split a freshly generated 256-bit key into three shares, any two of
/// which recover it. Run with `RUST_LOG=debug` to see the library events.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut key = [0u8; 32];
    OsRng
        .try_fill_bytes(&mut key)
        .expect("operating system randomness should be available");

    let params = SplitParams::new(3, 2).expect("two of three is a valid split");
    let shares = split(&key, params.parts(), params.threshold())
        .expect("split should succeed");

    println!("key:     {}", to_hex(&key));
    for share in &shares {
        println!("share {:>3}: {}", share.x_coordinate(), to_hex(share.as_bytes()));
    }

    let recovered =
        combine(&shares[1..]).expect("two shares meet the threshold");
    assert_eq!(recovered, key, "recovered key must match the original");
    println!("recovered: {}", to_hex(&recovered));
}
