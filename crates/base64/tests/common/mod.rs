//! Shared helpers for integration tests.
#![allow(dead_code)]

use rand::Rng;

/// Installs a test subscriber once; set `RUST_LOG=stream_base64=trace` to see
/// driver events.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn generate_blob(max_len: usize) -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let length = rng.gen_range(0..=max_len);
    (0..length).map(|_| rng.gen::<u8>()).collect()
}
