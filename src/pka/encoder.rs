//! Building containers from XML documents.
//!
//! This is the reverse of [`decoder`](super::decoder) and mainly serves to
//! produce fixtures.

use std::io;
use log::debug;
use super::{compression, crypto};
use super::models::{RawContainer, HEADER_LEN};

/// Seal `document` into a container.
///
/// The document is zlib-compressed, `header` is put in front, and the XOR
/// stream is applied with the counter seeded at the final container length.
pub fn seal(document: &str, header: [u8; HEADER_LEN]) -> io::Result<RawContainer> {
    let compressed = compression::deflate(document.as_bytes())?;

    let mut bytes = Vec::with_capacity(HEADER_LEN + compressed.len());
    bytes.extend_from_slice(&header);
    bytes.extend_from_slice(&compressed);
    crypto::xor_stream_in_place(&mut bytes);

    debug!("Sealed {} byte document into {} byte container", document.len(), bytes.len());
    Ok(RawContainer::new(bytes))
}
