//! Container decoding orchestration (deobfuscation + decompression + text decoding)

use log::{debug, trace};
use super::{compression, crypto};
use super::models::{RawContainer, RecoveredDocument, HEADER_LEN};
use super::error::{PkaError, Result};

/// Decode a container into its XML document.
///
/// Container layout after deobfuscation:
/// - Bytes 0-3: Opaque header, discarded
/// - Bytes 4+:  Zlib stream holding the UTF-8 XML document
///
/// Process:
/// 1. Undo the XOR stream seeded with the container length
/// 2. Drop the header
/// 3. Inflate the payload
/// 4. Validate UTF-8
pub fn decode(container: &RawContainer) -> Result<RecoveredDocument> {
    if container.len() < HEADER_LEN {
        return Err(PkaError::DecompressionError(format!(
            "container too short ({} bytes, minimum {} required)",
            container.len(),
            HEADER_LEN
        )));
    }

    let payload = deobfuscate(container);
    trace!("Discarded header: {}", hex::encode(&payload[..HEADER_LEN]));

    let inflated = compression::inflate(&payload[HEADER_LEN..])?;
    let text = String::from_utf8(inflated)?;
    debug!("Recovered {} bytes of XML from {} byte container", text.len(), container.len());

    Ok(RecoveredDocument::new(text))
}

/// Undo the XOR stream. The result has the container's length, header included.
pub fn deobfuscate(container: &RawContainer) -> Vec<u8> {
    crypto::xor_stream(container.as_bytes())
}
