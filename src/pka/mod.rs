//! Core PKA container module

pub mod models;
pub mod error;
pub mod container;
pub mod crypto;
pub mod compression;
pub mod decoder;
pub mod encoder;
pub mod activity;

use std::fs;
use std::io::Write;
use std::path::Path;
use log::info;
use models::*;
pub use error::{PkaError, Result};

/// A decoded PKA container.
///
/// Holds everything the pipeline produced: the size of the container as it
/// was read, the recovered XML and the password hash stored in it.
#[derive(Debug, Clone)]
pub struct PkaFile {
    pub compressed_size: usize,
    pub document: RecoveredDocument,
    pub password_hash: String,
}

impl PkaFile {
    /// Read and decode a PKA container from the given path.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file cannot be read
    /// - The payload does not deobfuscate into a valid zlib stream
    /// - The recovered text is not UTF-8 or not well-formed XML
    /// - The password attribute is missing
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let container = container::read(path)?;
        Self::from_container(&container)
    }

    /// Decode a container already held in memory.
    pub fn from_container(container: &RawContainer) -> Result<Self> {
        let document = decoder::decode(container)?;
        let password_hash = activity::extract_password_hash(document.as_str())?;

        info!(
            "PKA decoded: {} compressed bytes, {} bytes of XML",
            container.len(),
            document.len()
        );

        Ok(Self {
            compressed_size: container.len(),
            document,
            password_hash,
        })
    }

    /// UTF-8 byte length of the recovered XML.
    pub fn decompressed_size(&self) -> usize {
        self.document.len()
    }

    /// Save the recovered XML verbatim.
    pub fn write_xml(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        info!("Writing recovered XML to {}", path.display());
        fs::write(path, self.document.as_str()).map_err(|source| PkaError::WriteError {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Print the extraction result, either the bare hash or the full report.
    pub fn report(&self, out: &mut impl Write, verbose: bool) -> std::io::Result<()> {
        if verbose {
            writeln!(out, "File size compressed : {} bytes", self.compressed_size)?;
            writeln!(out, "File size uncompressed : {} bytes", self.decompressed_size())?;
            writeln!(out, "MD5 hashed password : {}", self.password_hash)?;
        } else {
            writeln!(out, "{}", self.password_hash)?;
        }
        Ok(())
    }
}

/// Run one extraction as configured by `options`, reporting into `out`.
///
/// The result is reported before the XML is written, so a failed write still
/// leaves the hash on `out`.
pub fn run(options: &Options, out: &mut impl Write) -> Result<PkaFile> {
    let pka = PkaFile::open(&options.pka)?;

    pka.report(out, options.verbose)
        .map_err(|source| PkaError::WriteError {
            path: "<stdout>".into(),
            source,
        })?;

    if let Some(xml_path) = &options.xml {
        pka.write_xml(xml_path)?;
    }

    Ok(pka)
}
