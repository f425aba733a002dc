//! ÄKTA Export Processor Library
//!
//! A Rust library for converting ÄKTA/UNICORN chromatography export files
//! (tab-delimited curve tables) into a structured, strongly-keyed in-memory
//! dataset suitable for plotting and analysis.
//!
//! This library provides tools for:
//! - Loading export files with UTF-8/UTF-16 encoding fallback
//! - Parsing paired volume/signal columns into typed per-curve series
//! - Tracking column-width and parity diagnostics across every line
//! - Mapping collection-fraction labels to volume ranges for shading
//! - Comprehensive error handling tolerant of real-world instrument exports

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod export_parser;
        pub mod fraction_mapper;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Curve, CurveSet, Value};
pub use app::services::export_parser::{ExportParser, ParseResult};
pub use app::services::fraction_mapper::FractionMap;
pub use config::ParseConfig;

/// Result type alias for the ÄKTA processor
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for export-file processing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// File decoded under neither supported encoding
    #[error("Encoding error in file '{path}': not valid UTF-8 or UTF-16 text")]
    Decode { path: String },

    /// A header line yielded no usable columns
    #[error("Malformed header at line {line}: {reason}")]
    MalformedHeader { line: usize, reason: String },

    /// A requested curve is absent from the dataset
    #[error("Curve '{curve}' not present in the dataset")]
    MissingCurve { curve: String },

    /// A requested fraction number is absent from the Fraction curve
    #[error("Fraction {fraction} not present in the fraction data")]
    FractionNotFound { fraction: u32 },

    /// The Fraction curve exists but carries no numeric labels
    #[error("Fraction labels are not numeric in this dataset; cannot resolve by fraction number")]
    NonNumericFractionLabels,

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a decode error for a file path
    pub fn decode(path: impl Into<String>) -> Self {
        Self::Decode { path: path.into() }
    }

    /// Create a malformed header error
    pub fn malformed_header(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedHeader {
            line,
            reason: reason.into(),
        }
    }

    /// Create a missing curve error
    pub fn missing_curve(curve: impl Into<String>) -> Self {
        Self::MissingCurve {
            curve: curve.into(),
        }
    }

    /// Create a fraction not found error
    pub fn fraction_not_found(fraction: u32) -> Self {
        Self::FractionNotFound { fraction }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
