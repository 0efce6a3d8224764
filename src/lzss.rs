//! Bit-oriented LZSS decompression.
//!
//! Replay payloads are compressed with an LZSS variant that encodes each
//! symbol behind a single control bit: literals are raw 8-bit values, and
//! back-references index into a circular history window rather than into the
//! output directly. The field widths vary per container revision, so they
//! are supplied as [`LzssParams`].

use crate::bits::BitReader;
use crate::error::DecompressionError;
use alloc::vec;
use alloc::vec::Vec;

type Result<T> = core::result::Result<T, DecompressionError>;

/// Field widths and initial window state for an LZSS stream.
///
/// A history offset of zero never addresses data; it is reserved as the
/// end-of-stream sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LzssParams {
    /// Bits per history offset. The history window holds `1 << index_size`
    /// bytes.
    pub index_size: usize,
    /// Bits per match length.
    pub length_size: usize,
    /// Constant added to every decoded match length.
    pub min_length: usize,
    /// Starting position of the history write cursor. Must be smaller than
    /// the window size.
    pub initial_write_index: usize,
}

impl LzssParams {
    /// The parameter set ZUN's games share across format revisions.
    pub const ZUN: Self = Self {
        index_size: 13,
        length_size: 4,
        min_length: 3,
        initial_write_index: 1,
    };
}

impl Default for LzssParams {
    fn default() -> Self {
        Self::ZUN
    }
}

/// Decompresses an LZSS stream using the standard [`LzssParams::ZUN`]
/// widths.
///
/// See [`unlzss_with`] for the stream format and failure conditions.
pub fn unlzss(input: &[u8]) -> Result<Vec<u8>> {
    unlzss_with(input, &LzssParams::ZUN)
}

/// Decompresses an LZSS stream with explicit field widths.
///
/// Each symbol starts with one control bit: `1` is followed by an 8-bit
/// literal, `0` by an offset into the history window. A zero offset is the
/// end-of-stream sentinel; any other offset is followed by a length field,
/// and `length + min_length` bytes are copied from the window. Every emitted
/// byte, literal or copied, is also written back into the window at the
/// write cursor, so copies may overlap the region they are producing.
///
/// # Errors
///
/// Returns [`DecompressionError::InvalidStream`] when the sentinel is
/// reached before every input bit has been consumed. Fields truncated by the
/// physical end of the input read as zero-padded instead of failing, so a
/// stream whose sentinel is cut short by the final byte boundary still
/// decodes successfully.
///
/// # Panics
///
/// Panics if `params.initial_write_index` is not smaller than the history
/// window size.
pub fn unlzss_with(input: &[u8], params: &LzssParams) -> Result<Vec<u8>> {
    let mut bits = BitReader::new(input);

    let mut history = vec![0u8; 1usize << params.index_size];
    let mut write_index = params.initial_write_index;

    // Heuristic capacity reservation to reduce allocation churn.
    let mut output = Vec::with_capacity(input.len() * 2);

    loop {
        if bits.take(1) != 0 {
            let byte = bits.take(8) as u8;
            put_byte(byte, &mut output, &mut history, &mut write_index);
        } else {
            let mut read_from = bits.take(params.index_size);
            if read_from == 0 {
                break;
            }

            let read_count = bits.take(params.length_size) + params.min_length;
            for _ in 0..read_count {
                let byte = history[read_from];
                put_byte(byte, &mut output, &mut history, &mut write_index);
                read_from = (read_from + 1) % history.len();
            }
        }
    }

    if !bits.is_exhausted() {
        return Err(DecompressionError::InvalidStream);
    }

    Ok(output)
}

/// Appends a decoded byte to the output and mirrors it into the history
/// window, advancing the write cursor by one slot.
#[inline]
fn put_byte(byte: u8, output: &mut Vec<u8>, history: &mut [u8], write_index: &mut usize) {
    output.push(byte);
    history[*write_index] = byte;
    *write_index = (*write_index + 1) % history.len();
}
