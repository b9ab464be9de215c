//! Custom error types for the pka-reader crate.

use std::path::PathBuf;
use thiserror::Error;

/// The primary error type for all operations in this crate.
///
/// Each variant names the pipeline stage that failed, so the message printed
/// by the binary tells the user where decoding stopped.
#[derive(Debug, Error)]
pub enum PkaError {
    /// The container file could not be opened or read.
    #[error("Can't read PKA file {}: {source}", path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Deobfuscation or inflate failed. A wrong XOR key and a corrupted stream
    /// look the same from here, so both end up in this variant.
    #[error("Can't inflate PKA: {0}")]
    DecompressionError(String),

    /// The inflated payload is not valid UTF-8.
    #[error("Recovered PKA content is not valid UTF-8: {0}")]
    EncodingError(#[from] std::string::FromUtf8Error),

    /// The recovered text is not well-formed XML.
    #[error("Can't parse XML from PKA: {0}")]
    XmlParseError(String),

    /// The XML is well-formed but the expected element or attribute is missing.
    #[error("Unexpected PKA XML structure: {0}")]
    SchemaError(String),

    /// The recovered XML could not be written to the requested output path.
    #[error("Can't write XML output file {}: {source}", path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A convenience `Result` type alias using the crate's `PkaError` type.
pub type Result<T> = std::result::Result<T, PkaError>;
