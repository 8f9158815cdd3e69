//! Error types for the nagarik-core library.

use thiserror::Error;

/// Main error type for the nagarik library.
#[derive(Error, Debug)]
pub enum NagarikError {
    /// Rule catalog construction error.
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised while assembling the rule catalog.
///
/// These are construction-time faults: they surface once, when the catalog
/// is built, never during a labeling call.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A pattern baked into the catalog failed to compile.
    #[error("invalid pattern for {label}: {source}")]
    Pattern {
        label: &'static str,
        #[source]
        source: regex::Error,
    },
}

/// Faults raised by a single rule during matching.
///
/// Recovered locally: the engine logs the fault, abandons the remaining
/// matches of that rule, and continues with the other rules.
#[derive(Error, Debug)]
pub(crate) enum RuleError {
    /// The rule declares a capture group that did not participate in a match.
    #[error("capture group 1 missing in match at byte {at}")]
    MissingCapture { at: usize },
}

/// Result type for the nagarik library.
pub type Result<T> = std::result::Result<T, NagarikError>;
