//! Type analysis
//!
//! Extracts members and methods from a [`crate::core::TypeDescriptor`],
//! normalizes type names and assembles [`crate::model::ClassDiagram`]s.

mod analyzer;
mod cache;
mod members;
mod methods;
mod type_name;

pub use analyzer::TypeAnalyzer;
pub use cache::DiagramCache;
pub use members::{access_modifier, extract_members, SYNTHETIC_NAME_MARKER};
pub use methods::extract_methods;
pub use type_name::normalize_type_name;
