//! Zlib (deflate) handling for the PKA payload.

use std::io::{self, Write};
use flate2::write::ZlibEncoder;
use flate2::{Compression, Decompress, FlushDecompress, Status};
use log::trace;
use super::error::{PkaError, Result};

/// Output is grown in steps of this many bytes while inflating.
const INFLATE_CHUNK: usize = 32 * 1024;

/// Inflate a zlib-wrapped deflate stream.
///
/// The stream must reach its end marker. Input that stops early is reported
/// as an error rather than returning whatever was inflated so far. Bytes
/// after the end marker are ignored.
pub fn inflate(payload: &[u8]) -> Result<Vec<u8>> {
    if payload.is_empty() {
        return Err(PkaError::DecompressionError("payload is empty".to_string()));
    }

    trace!("Inflating {} bytes of zlib data", payload.len());

    let mut inflater = Decompress::new(true);
    let mut output = Vec::with_capacity(payload.len().saturating_mul(4).max(INFLATE_CHUNK));

    loop {
        if output.len() == output.capacity() {
            output.reserve(INFLATE_CHUNK);
        }

        let consumed = inflater.total_in() as usize;
        let produced = inflater.total_out();
        let status = inflater
            .decompress_vec(&payload[consumed..], &mut output, FlushDecompress::Finish)
            .map_err(|e| PkaError::DecompressionError(format!("zlib inflate failed: {}", e)))?;

        match status {
            Status::StreamEnd => break,
            Status::Ok | Status::BufError => {
                let stalled = inflater.total_in() as usize == consumed
                    && inflater.total_out() == produced
                    && output.len() < output.capacity();
                if stalled {
                    return Err(PkaError::DecompressionError(format!(
                        "zlib stream truncated after {} of {} bytes",
                        consumed,
                        payload.len()
                    )));
                }
            }
        }
    }

    trace!("Inflated {} bytes -> {} bytes", inflater.total_in(), output.len());
    Ok(output)
}

/// Compress `data` into a zlib-wrapped deflate stream at the default level.
pub fn deflate(data: &[u8]) -> io::Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}
