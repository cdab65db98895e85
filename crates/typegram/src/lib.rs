//! Typegram - Class diagrams from type metadata
//!
//! A library for turning type descriptions (fields, properties, methods,
//! inheritance) into class diagrams rendered as bordered ASCII boxes or
//! PlantUML scripts.
//!
//! # Quick Start
//!
//! ```rust
//! use typegram::{render_type, OutputFormat};
//!
//! let json = r#"{
//!   "name": "Zoo",
//!   "types": [{
//!     "name": "Animal",
//!     "abstract": true,
//!     "methods": [{ "name": "Speak", "access": "public", "return_type": "void" }]
//!   }]
//! }"#;
//!
//! let uml = render_type(json, "Animal", OutputFormat::PlantUml).unwrap();
//! assert!(uml.contains("class Animal {"));
//! ```
//!
//! # Advanced Usage
//!
//! For more control, use the individual components:
//!
//! ```rust
//! use typegram::prelude::*;
//!
//! let animal = TypeMetadata::new("Animal").with_abstract().with_method(
//!     MethodDescriptor::new("Speak", TypeRef::named("void")).with_access(DeclaredAccess::Public),
//! );
//!
//! // Analyze into a diagram model
//! let diagram = TypeAnalyzer::new().analyze_type(&animal);
//! assert_eq!(diagram.stereotype(), Some("<<abstract>>"));
//!
//! // Render as a box
//! let ascii = AsciiFormatter::new().format(&diagram);
//! assert!(ascii.contains("+ Speak(): void"));
//! ```

pub mod analysis;
pub mod core;
pub mod formatters;
pub mod metadata;
pub mod model;

pub use crate::core::*;
pub use formatters::OutputFormat;

use analysis::TypeAnalyzer;
use metadata::AssemblyMetadata;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::analysis::{normalize_type_name, DiagramCache, TypeAnalyzer};
    pub use crate::core::{
        AccessModifier, AccessorDescriptor, CharacterSet, DeclaredAccess, DiagramConfig,
        DiagramError, FieldDescriptor, MethodDescriptor, ParameterDescriptor,
        PropertyDescriptor, TypeDescriptor, TypeRef, TypeVisibility,
    };
    pub use crate::formatters::{
        sanitize_plantuml, AsciiFormatter, DiagramFormatter, InfoFormatter, OutputFormat,
        PlantUmlFormatter,
    };
    pub use crate::metadata::{AssemblyMetadata, TypeMetadata};
    pub use crate::model::{ClassDiagram, ClassMember, ClassMethod, DisplayList, MethodParameter};
}

/// Render one type from a JSON metadata table
///
/// The type is looked up by `Namespace.Name` or bare name and rendered with
/// the default configuration.
///
/// # Returns
/// * `Ok(String)` - The rendered diagram
/// * `Err` - If the table cannot be parsed or the type is missing
pub fn render_type(json: &str, type_name: &str, format: OutputFormat) -> anyhow::Result<String> {
    let assembly = AssemblyMetadata::from_json("<input>", json)?;
    render_from_assembly(&assembly, type_name, format, DiagramConfig::default())
}

/// Render one type from an already loaded metadata table
///
/// # Example
/// ```rust
/// use typegram::metadata::{AssemblyMetadata, TypeMetadata};
/// use typegram::{render_from_assembly, DiagramConfig, OutputFormat};
///
/// let assembly = AssemblyMetadata::new("Shapes").with_type(TypeMetadata::new("Circle"));
/// let ascii =
///     render_from_assembly(&assembly, "Circle", OutputFormat::Ascii, DiagramConfig::default())
///         .unwrap();
/// assert!(ascii.contains("Circle"));
///
/// let missing =
///     render_from_assembly(&assembly, "Square", OutputFormat::Ascii, DiagramConfig::default());
/// assert_eq!(missing.unwrap_err().to_string(), "Type 'Square' not found");
/// ```
pub fn render_from_assembly(
    assembly: &AssemblyMetadata,
    type_name: &str,
    format: OutputFormat,
    config: DiagramConfig,
) -> anyhow::Result<String> {
    let ty = assembly
        .find_type(type_name)
        .ok_or_else(|| DiagramError::type_not_found(type_name))?;
    let diagram = TypeAnalyzer::new().analyze_type(ty);
    Ok(format.formatter(config).format(&diagram))
}

/// Render every exported type of a metadata table as one document
pub fn render_assembly(
    assembly: &AssemblyMetadata,
    format: OutputFormat,
    config: DiagramConfig,
) -> String {
    let diagrams = TypeAnalyzer::new().analyze_types(assembly.types());
    format.formatter(config).format_multiple(&diagrams)
}
