#![no_main]

use libfuzzer_sys::fuzz_target;
use threp::{decrypt, decrypt06, unlzss};

/// Verifies that the decompressor safely handles arbitrary, potentially malformed input.
///
/// This simulates scenarios involving corrupted replay files, malicious payloads, or random noise.
///
/// # Invariant
/// The decompressor must return either `Ok(_)` or `Err(_)`. It must **never** panic
/// or loop without bound, regardless of the input data.
fn verify_decompression_robustness(data: &[u8]) {
    // We explicitly ignore the result. Whether it succeeds (coincidentally valid)
    // or fails (invalid data) is irrelevant; we only assert that it returns safely.
    let _ = unlzss(data);
}

/// Verifies the length invariant of both ciphers on fuzzer-derived parameters.
///
/// # Invariant
/// `decrypt06` and `decrypt` always return a buffer of exactly the input
/// length, for every key, start offset and (positive) block size.
///
/// # Panics
/// This function panics if either cipher changes the buffer length. Such a
/// panic signals a fuzzing failure.
fn verify_cipher_length_invariants(data: &[u8]) {
    let Some((params, buffer)) = data.split_first_chunk::<4>() else {
        return;
    };

    let key = params[0];
    let start = params[1] as usize;
    let decrypted = decrypt06(buffer, key, start);
    assert_eq!(
        decrypted.len(),
        buffer.len(),
        "stream cipher changed the buffer length"
    );

    let block_size = params[1] as usize + 1;
    let base = params[2];
    let add = params[3];
    let decrypted = decrypt(buffer, block_size, base, add);
    assert_eq!(
        decrypted.len(),
        buffer.len(),
        "block cipher changed the buffer length"
    );
}

fuzz_target!(|data: &[u8]| {
    // 1. Robustness: Ensure random noise doesn't crash the decompressor.
    verify_decompression_robustness(data);

    // 2. Correctness: Ensure the ciphers preserve length on derived parameters.
    verify_cipher_length_invariants(data);
});
