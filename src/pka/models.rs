//! Core data structures passed between the pipeline stages.

use std::path::PathBuf;

/// Number of deobfuscated bytes that precede the zlib stream.
///
/// Their content is never interpreted.
pub const HEADER_LEN: usize = 4;

/// Root element of a recovered activity document.
pub const ROOT_TAG: &str = "PACKETTRACER5_ACTIVITY";

/// Element under the root that carries the activity settings.
pub const ACTIVITY_TAG: &str = "ACTIVITY";

/// Attribute on [`ACTIVITY_TAG`] that stores the password hash.
pub const PASSWORD_ATTR: &str = "PASS";

/// Raw bytes of a PKA container exactly as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawContainer {
    bytes: Vec<u8>,
}

impl RawContainer {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Size of the container in bytes. This is also the seed of the XOR stream.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// XML text recovered from a container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecoveredDocument {
    text: String,
}

impl RecoveredDocument {
    pub fn new(text: String) -> Self {
        Self { text }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// UTF-8 byte length of the document.
    pub fn len(&self) -> usize {
        self.text.len()
    }
}

/// Settings for one extraction run, as collected from the command line.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Path to the container to decode.
    pub pka: PathBuf,
    /// Print sizes alongside the password hash.
    pub verbose: bool,
    /// Where to save the recovered XML, if anywhere.
    pub xml: Option<PathBuf>,
}
