//! Replay cipher routines.
//!
//! Two cipher generations cover the replay formats: the additive stream
//! cipher of the first format revision ([`decrypt06`]) and the
//! block-interleaved XOR cipher used by every later revision ([`decrypt`]).
//! Both operate on fully-buffered input and return a freshly allocated
//! buffer of the same length; the source is never modified.

use alloc::vec::Vec;

/// Key increment applied after every transformed byte of the stream cipher.
const STREAM_KEY_STEP: u8 = 7;

/// Decrypts a buffer encrypted with the first-generation additive stream
/// cipher.
///
/// Bytes before `start` are copied through unchanged and do not advance the
/// key. From `start` on, the running key is subtracted from each byte
/// (wrapping at the byte boundary) and then grows by 7. A `start` at or past
/// the end of the buffer yields an unchanged copy.
#[must_use]
pub fn decrypt06(input: &[u8], key: u8, start: usize) -> Vec<u8> {
    let mut output = input.to_vec();
    let mut key = key;

    for byte in output.iter_mut().skip(start) {
        *byte = byte.wrapping_sub(key);
        key = key.wrapping_add(STREAM_KEY_STEP);
    }

    output
}

/// Decrypts a buffer encrypted with the block-interleaved XOR cipher.
///
/// The buffer is processed in chunks of `block_size` bytes. Within a chunk of
/// size `n`, source bytes are consumed in order and XOR-ed against a key that
/// grows by `add` per byte (wrapping); the first `n.div_ceil(2)` decoded
/// bytes land at chunk-relative positions `n-1, n-3, ...` and the rest at
/// `n-2, n-4, ...`. A final chunk shorter than `block_size` is processed at
/// its own size.
///
/// Two corrective rules bound the processed region: a trailing partial block
/// shorter than a quarter of `block_size` is left untouched, and when the
/// total length is odd the last processed byte is dropped as well. Bytes
/// outside the processed region are copied through unchanged.
///
/// # Panics
///
/// Panics if `block_size` is zero.
#[must_use]
pub fn decrypt(input: &[u8], block_size: usize, base: u8, add: u8) -> Vec<u8> {
    assert!(block_size > 0, "block size must be positive");

    let mut output = input.to_vec();
    let mut key = base;

    let mut left = input.len();
    if left % block_size < block_size / 4 {
        left -= left % block_size;
    }
    if left > 0 {
        left -= input.len() & 1;
    }

    let mut pos = 0;
    while left > 0 {
        let size = left.min(block_size);
        let chunk = &input[pos..pos + size];
        let half = size.div_ceil(2);

        for (i, &byte) in chunk[..half].iter().enumerate() {
            output[pos + size - 1 - 2 * i] = byte ^ key;
            key = key.wrapping_add(add);
        }
        for (i, &byte) in chunk[half..].iter().enumerate() {
            output[pos + size - 2 - 2 * i] = byte ^ key;
            key = key.wrapping_add(add);
        }

        pos += size;
        left -= size;
    }

    debug_assert_eq!(output.len(), input.len());
    output
}
