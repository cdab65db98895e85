//! JSON metadata tables
//!
//! A metadata table stands in for a compiled assembly: a list of type
//! descriptions produced offline by whatever tool can read the binary. The
//! table implements [`TypeDescriptor`] so it feeds straight into the
//! analyzer.
//!
//! ```json
//! {
//!   "name": "Zoo",
//!   "types": [
//!     {
//!       "name": "Animal",
//!       "namespace": "Zoo.Core",
//!       "abstract": true,
//!       "fields": [{ "name": "_name", "type": "String", "readonly": true }],
//!       "methods": [{ "name": "Speak", "access": "public", "abstract": true }]
//!     }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info, span, Level};

use crate::core::{
    DiagramError, FieldDescriptor, MethodDescriptor, PropertyDescriptor, TypeDescriptor, TypeRef,
    TypeVisibility,
};

/// One type entry of a metadata table
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TypeMetadata {
    pub name: String,
    #[serde(default)]
    pub namespace: Option<String>,
    #[serde(default)]
    pub visibility: TypeVisibility,
    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,
    #[serde(default, rename = "interface")]
    pub is_interface: bool,
    #[serde(default, rename = "sealed")]
    pub is_sealed: bool,
    #[serde(default)]
    pub base_type: Option<TypeRef>,
    #[serde(default)]
    pub interfaces: Vec<TypeRef>,
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
    #[serde(default)]
    pub properties: Vec<PropertyDescriptor>,
    #[serde(default)]
    pub methods: Vec<MethodDescriptor>,
}

impl TypeMetadata {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            visibility: TypeVisibility::default(),
            is_abstract: false,
            is_interface: false,
            is_sealed: false,
            base_type: None,
            interfaces: Vec::new(),
            fields: Vec::new(),
            properties: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn with_visibility(mut self, visibility: TypeVisibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_abstract(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    pub fn with_sealed(mut self) -> Self {
        self.is_sealed = true;
        self
    }

    pub fn with_interface_kind(mut self) -> Self {
        self.is_interface = true;
        self
    }

    pub fn with_base_type(mut self, base_type: TypeRef) -> Self {
        self.base_type = Some(base_type);
        self
    }

    pub fn with_interface(mut self, interface: TypeRef) -> Self {
        self.interfaces.push(interface);
        self
    }

    pub fn with_field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_property(mut self, property: PropertyDescriptor) -> Self {
        self.properties.push(property);
        self
    }

    pub fn with_method(mut self, method: MethodDescriptor) -> Self {
        self.methods.push(method);
        self
    }
}

impl TypeDescriptor for TypeMetadata {
    fn name(&self) -> &str {
        &self.name
    }

    fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    fn is_interface(&self) -> bool {
        self.is_interface
    }

    fn is_sealed(&self) -> bool {
        self.is_sealed
    }

    fn visibility(&self) -> TypeVisibility {
        self.visibility
    }

    fn base_type(&self) -> Option<&TypeRef> {
        self.base_type.as_ref()
    }

    fn interfaces(&self) -> impl Iterator<Item = &TypeRef> {
        self.interfaces.iter()
    }

    fn fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter()
    }

    fn properties(&self) -> impl Iterator<Item = &PropertyDescriptor> {
        self.properties.iter()
    }

    fn methods(&self) -> impl Iterator<Item = &MethodDescriptor> {
        self.methods.iter()
    }
}

/// A whole metadata table, the equivalent of one loaded assembly
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct AssemblyMetadata {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub types: Vec<TypeMetadata>,
}

impl AssemblyMetadata {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            types: Vec::new(),
        }
    }

    pub fn with_type(mut self, ty: TypeMetadata) -> Self {
        self.types.push(ty);
        self
    }

    /// Parse a metadata table from JSON text.
    ///
    /// `source_name` only labels the error. Any JSON or signature problem
    /// fails the whole table.
    pub fn from_json(source_name: &str, json: &str) -> Result<Self, DiagramError> {
        let assembly: AssemblyMetadata = serde_json::from_str(json)
            .map_err(|e| DiagramError::assembly_load(source_name, e.to_string()))?;
        debug!(
            source = source_name,
            type_count = assembly.types.len(),
            "Parsed metadata table"
        );
        Ok(assembly)
    }

    /// Load a metadata table from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DiagramError> {
        let path = path.as_ref();
        let load_span = span!(Level::INFO, "load_assembly", path = %path.display());
        let _enter = load_span.enter();

        let source_name = path.display().to_string();
        let json = fs::read_to_string(path)
            .map_err(|e| DiagramError::assembly_load(source_name.as_str(), e.to_string()))?;
        let assembly = Self::from_json(&source_name, &json)?;

        info!(
            assembly = assembly.name.as_str(),
            type_count = assembly.types.len(),
            "Loaded metadata table"
        );
        Ok(assembly)
    }

    pub fn types(&self) -> &[TypeMetadata] {
        &self.types
    }

    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    /// Look a type up by `Namespace.Name` or by bare name.
    ///
    /// A qualified match wins over a bare-name match.
    pub fn find_type(&self, name: &str) -> Option<&TypeMetadata> {
        let name = name.trim();
        self.types
            .iter()
            .find(|ty| ty.full_name() == name)
            .or_else(|| self.types.iter().find(|ty| ty.name == name))
    }
}
