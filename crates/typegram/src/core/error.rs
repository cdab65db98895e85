//! Core error types for type analysis
//!
//! Rendering never fails; these errors only come out of loading metadata and
//! resolving type signatures.

use thiserror::Error;

/// Core error types for the analysis pipeline
#[derive(Error, Debug)]
pub enum DiagramError {
    #[error("Type '{type_name}' not found")]
    TypeNotFound { type_name: String },

    #[error("Failed to load assembly '{source_name}': {message}")]
    AssemblyLoad {
        source_name: String,
        message: String,
    },

    #[error("Invalid type signature: '{input}'")]
    TypeSyntax { input: String },

    #[error("Generic type '{type_name}' expects {expected} argument(s) but {actual} were given")]
    GenericArity {
        type_name: String,
        expected: usize,
        actual: usize,
    },

    #[error("Failed to {action} '{path}': {source}")]
    Io {
        action: &'static str,
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl DiagramError {
    /// Create a new type-not-found error
    pub fn type_not_found(type_name: impl Into<String>) -> Self {
        Self::TypeNotFound {
            type_name: type_name.into(),
        }
    }

    /// Create a new assembly load error
    pub fn assembly_load(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::AssemblyLoad {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    /// Create a new type signature error
    pub fn type_syntax(input: impl Into<String>) -> Self {
        Self::TypeSyntax {
            input: input.into(),
        }
    }

    /// Create a new generic arity mismatch error
    pub fn generic_arity(type_name: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::GenericArity {
            type_name: type_name.into(),
            expected,
            actual,
        }
    }

    /// Create a new I/O error; `action` reads as "read input file" etc.
    pub fn io(action: &'static str, path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }
}
