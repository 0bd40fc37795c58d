//! Core error types.

use crate::function::valid_function_names;

/// Errors raised while validating core values.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The requested operation name is not in the function registry.
    #[error(
        "'{name}' is not a valid pick-git function (valid functions: {})",
        valid_function_names().join(", ")
    )]
    UnknownFunction {
        /// The name as given on the command line.
        name: String,
    },

    /// A Selection Token was built from an empty string.
    #[error("selection token must not be empty")]
    EmptyToken,
}

/// A specialized `Result` type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
