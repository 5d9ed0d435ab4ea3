//! Error types for 3MF encoding and decoding
//!
//! Every failure in this crate is terminal for the current export or import
//! call. Errors carry a code in their message so callers can categorize them
//! from logs alone.
//!
//! # Error Codes
//!
//! Error codes follow the pattern: `E<category><number>`
//!
//! Categories:
//! - **E1xxx**: I/O and archive errors
//! - **E2xxx**: XML parsing and writing errors
//! - **E3xxx**: Model and input errors
//!
//! ## Error Codes
//!
//! - `E1001`: I/O error reading or writing a file
//! - `E1002`: ZIP archive format error
//! - `E1003`: Missing required file in archive
//! - `E1004`: Package write failure
//! - `E2001`: XML parsing error
//! - `E2002`: XML attribute error
//! - `E2003`: Invalid XML structure
//! - `E2004`: Invalid 3MF format
//! - `E2005`: XML writing error
//! - `E3001`: Invalid model
//! - `E3002`: Numeric parse error
//! - `E3003`: Invalid export input

use std::io;
use thiserror::Error;

/// Result type for 3MF operations
pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of an [`Error`]
///
/// Hosts usually only need to know whether the user selected the wrong
/// thing, handed in a broken file, or hit a filesystem problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The caller supplied nothing exportable or malformed scene data
    Input,
    /// The archive or model document is not a readable 3MF package
    Format,
    /// Reading or writing the archive failed at the OS level
    Io,
}

/// Errors that can occur when encoding or decoding 3MF files
#[derive(Error, Debug)]
pub enum Error {
    /// IO error occurred while reading or writing the file
    ///
    /// **Error Code**: E1001
    ///
    /// **Common Causes**:
    /// - File not found
    /// - Insufficient permissions
    /// - Disk full
    #[error("[E1001] I/O error: {0}")]
    Io(#[from] io::Error),

    /// ZIP archive error while reading
    ///
    /// **Error Code**: E1002
    ///
    /// **Common Causes**:
    /// - The file is not a ZIP archive at all
    /// - Corrupted or truncated archive
    /// - Unsupported compression method
    #[error("[E1002] ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Missing required file in the 3MF archive
    ///
    /// **Error Code**: E1003
    ///
    /// **Suggestions**:
    /// - Check that the archive contains `3D/3dmodel.model`
    #[error("[E1003] Missing required file: {0}")]
    MissingFile(String),

    /// Failure while assembling the output archive
    ///
    /// **Error Code**: E1004
    ///
    /// **Common Causes**:
    /// - Disk full
    /// - Destination directory not writable
    #[error("[E1004] Package write error: {0}")]
    PackageWrite(String),

    /// XML parsing error
    ///
    /// **Error Code**: E2001
    ///
    /// **Common Causes**:
    /// - Malformed XML syntax
    /// - Mismatched end tags
    #[error("[E2001] XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// XML attribute error
    ///
    /// **Error Code**: E2002
    ///
    /// **Common Causes**:
    /// - Duplicate attribute
    /// - Unquoted attribute value
    #[error("[E2002] XML attribute error: {0}")]
    XmlAttr(String),

    /// Invalid XML structure
    ///
    /// **Error Code**: E2003
    ///
    /// **Common Causes**:
    /// - Unclosed elements at end of document
    /// - Invalid character encoding
    /// - DTD declarations
    #[error("[E2003] Invalid XML structure: {0}")]
    InvalidXml(String),

    /// Invalid 3MF format
    ///
    /// **Error Code**: E2004
    #[error("[E2004] Invalid 3MF format: {0}")]
    InvalidFormat(String),

    /// XML writing error
    ///
    /// **Error Code**: E2005
    #[error("[E2005] XML writing error: {0}")]
    XmlWrite(String),

    /// Invalid model structure
    ///
    /// **Error Code**: E3001
    ///
    /// **Common Causes**:
    /// - Triangle references a vertex outside the object's vertex list
    ///   (only reported when the import config asks for it)
    #[error("[E3001] Invalid model: {0}")]
    InvalidModel(String),

    /// Parse error for numeric values
    ///
    /// **Error Code**: E3002
    ///
    /// **Suggestions**:
    /// - Verify numeric values use proper format (e.g., "1.5" not "1,5")
    #[error("[E3002] Parse error: {0}")]
    ParseError(String),

    /// The export input cannot be encoded
    ///
    /// **Error Code**: E3003
    ///
    /// **Common Causes**:
    /// - No mesh objects in the selection
    /// - Per-triangle material list does not match the triangle count
    /// - Triangle references a vertex the mesh does not have
    #[error("[E3003] Invalid input: {0}")]
    InvalidInput(String),
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::XmlAttr(format!("Attribute parsing failed: {}", err))
    }
}

impl Error {
    /// Map this error onto the input / format / I/O taxonomy
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::InvalidInput(_) => ErrorCategory::Input,
            Error::Io(_) | Error::PackageWrite(_) | Error::XmlWrite(_) => ErrorCategory::Io,
            Error::Zip(zip::result::ZipError::Io(_)) => ErrorCategory::Io,
            Error::Zip(_)
            | Error::MissingFile(_)
            | Error::Xml(_)
            | Error::XmlAttr(_)
            | Error::InvalidXml(_)
            | Error::InvalidFormat(_)
            | Error::InvalidModel(_)
            | Error::ParseError(_) => ErrorCategory::Format,
        }
    }

    /// Create an InvalidFormat error with context about what structure is invalid
    ///
    /// # Arguments
    /// * `context` - What part of the format is invalid (e.g., "OPC structure")
    /// * `message` - Description of the error
    pub fn invalid_format_context(context: &str, message: &str) -> Self {
        Error::InvalidFormat(format!("{}: {}", context, message))
    }

    /// Create a ParseError with context about what was being parsed
    ///
    /// # Arguments
    /// * `field_name` - The name of the field being parsed (e.g., "vertex x coordinate")
    /// * `value` - The value that failed to parse
    /// * `expected_type` - The expected type (e.g., "floating-point number")
    pub fn parse_error_with_context(field_name: &str, value: &str, expected_type: &str) -> Self {
        Error::ParseError(format!(
            "Failed to parse '{}': expected {}, got '{}'. \
             Verify the value is properly formatted.",
            field_name, expected_type, value
        ))
    }

    /// Create an XmlWrite error
    pub fn xml_write(message: String) -> Self {
        Error::XmlWrite(message)
    }

    /// Create a PackageWrite error naming the part being written
    pub fn package_write(part: &str, err: impl std::fmt::Display) -> Self {
        Error::PackageWrite(format!("Failed to write '{}': {}", part, err))
    }
}
