//! # Touhou Replay Decoding
//!
//! `threp` is a safe, pure-Rust implementation of the transforms needed to
//! recover plaintext data from Touhou replay files: the additive stream
//! cipher of the first format revision, the block-interleaved XOR cipher of
//! later revisions, and the bit-oriented LZSS variant used for payload
//! compression across revisions.
//!
//! Container parsing is out of scope. Callers extract the key, block size
//! and LZSS field widths from their format's header and pass them in; every
//! transform takes a fully-buffered input slice and returns a fresh buffer.
//!
//! ## Example
//!
//! ```rust
//! extern crate alloc;
//! use threp::unlzss;
//!
//! // Two literal bytes ("A", "B") followed by the end-of-stream marker:
//! // 1 01000001  1 01000010  0 00000
//! let compressed = [0xA0, 0xD0, 0x80];
//!
//! let decoded = unlzss(&compressed).expect("Decompression failed");
//! assert_eq!(decoded, b"AB");
//! ```

#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod bits;
pub mod crypto;
pub mod error;
pub mod lzss;

pub use crypto::{decrypt, decrypt06};
pub use error::DecompressionError;
pub use lzss::{LzssParams, unlzss, unlzss_with};

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::{decrypt, decrypt06, unlzss};

    #[test]
    fn test_stream_cipher_round_trip() {
        let plain = b"replay data";

        let mut encrypted = plain.to_vec();
        let mut key = 0x1Bu8;
        for byte in encrypted.iter_mut() {
            *byte = byte.wrapping_add(key);
            key = key.wrapping_add(7);
        }

        assert_eq!(decrypt06(&encrypted, 0x1B, 0), plain);
    }

    #[test]
    fn test_block_cipher_preserves_length() {
        let input: Vec<u8> = (0..100).map(|i| (i * 7) as u8).collect();
        for block_size in [1, 2, 8, 32, 64] {
            assert_eq!(decrypt(&input, block_size, 0xAA, 0x03).len(), input.len());
        }
    }

    #[test]
    fn test_unlzss_literals() {
        let compressed = [0xA0, 0xD0, 0x80];
        assert_eq!(unlzss(&compressed).unwrap(), b"AB");
    }
}
