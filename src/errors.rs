//! Shared error types for converter extraction and registry construction

use thiserror::Error;

/// Main error type for convmap operations
#[derive(Debug, Error)]
pub enum Error {
    /// A declaration does not carry exactly one single-parameter,
    /// value-returning conversion method
    #[error("malformed converter {class_name}: {reason}")]
    MalformedConverter {
        class_name: String,
        reason: MalformedReason,
    },

    /// Two declarations claim the same conversion pair
    #[error("duplicate converter {type_from} -> {type_to}: declared by both {first} and {second}")]
    DuplicateConverter {
        type_from: String,
        type_to: String,
        first: String,
        second: String,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Wrapped external errors
    #[error(transparent)]
    External(#[from] anyhow::Error),
}

/// Why a declaration failed shape validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedReason {
    #[error("no conversion method declared")]
    NoConversionMethod,

    #[error("{0} conversion methods declared, expected exactly one")]
    MultipleConversionMethods(usize),

    #[error("conversion method takes {0} parameters, expected exactly one")]
    WrongParameterCount(usize),

    #[error("conversion method does not return a value")]
    MissingReturnType,

    #[error("`{0}` is not a valid fully-qualified type name")]
    InvalidTypeName(String),

    #[error("identity conversion on `{0}` is disabled")]
    IdentityConversion(String),
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
