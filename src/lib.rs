//! # pka-reader
//!
//! Decoder for PKA activity containers.
//!
//! A container is a zlib-compressed XML document behind a 4-byte header,
//! obfuscated with an XOR stream keyed by the container length. This crate
//! recovers the XML and pulls out the password hash stored on its
//! `ACTIVITY` element.
pub mod pka;

// Re-export the main types for convenience
pub use pka::{
    run,
    PkaError,
    PkaFile,
    Result,
    models::{
        Options,
        RawContainer,
        RecoveredDocument,
    },
};
