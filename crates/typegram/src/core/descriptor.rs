//! Type descriptor abstraction
//!
//! [`TypeDescriptor`] is the only thing the analyzer knows about a type. Any
//! introspection source can implement it: a live reflection bridge, a
//! metadata reader for compiled binaries, or the JSON metadata table in
//! [`crate::metadata`]. The analyzer never mutates a descriptor.

use serde::Deserialize;

use super::TypeRef;

/// Declared accessibility of a field, accessor or method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclaredAccess {
    Public,
    #[default]
    Private,
    /// Visible to subclasses (family)
    Protected,
    /// Visible within the declaring assembly
    Internal,
    /// Family or assembly
    ProtectedInternal,
    /// Family and assembly
    PrivateProtected,
}

/// Visibility of a type within its assembly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeVisibility {
    #[default]
    Public,
    NotPublic,
    NestedPublic,
    NestedPrivate,
    NestedProtected,
    NestedInternal,
    NestedProtectedInternal,
    NestedPrivateProtected,
}

impl TypeVisibility {
    /// Reachable from outside the assembly
    pub fn is_exported(self) -> bool {
        matches!(self, TypeVisibility::Public | TypeVisibility::NestedPublic)
    }
}

/// A field declared on a type
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: TypeRef,
    #[serde(default)]
    pub access: DeclaredAccess,
    #[serde(default, rename = "static")]
    pub is_static: bool,
    /// Assignable only during construction
    #[serde(default, rename = "readonly")]
    pub is_init_only: bool,
    #[serde(default, rename = "special_name")]
    pub is_special_name: bool,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, field_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            field_type,
            access: DeclaredAccess::default(),
            is_static: false,
            is_init_only: false,
            is_special_name: false,
        }
    }

    pub fn with_access(mut self, access: DeclaredAccess) -> Self {
        self.access = access;
        self
    }

    pub fn with_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn with_init_only(mut self) -> Self {
        self.is_init_only = true;
        self
    }

    pub fn with_special_name(mut self) -> Self {
        self.is_special_name = true;
        self
    }
}

/// A property getter or setter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct AccessorDescriptor {
    #[serde(default)]
    pub access: DeclaredAccess,
    #[serde(default, rename = "static")]
    pub is_static: bool,
}

impl AccessorDescriptor {
    pub fn new(access: DeclaredAccess) -> Self {
        Self {
            access,
            is_static: false,
        }
    }

    pub fn with_static(mut self) -> Self {
        self.is_static = true;
        self
    }
}

/// A property declared on a type
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PropertyDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub property_type: TypeRef,
    #[serde(default)]
    pub getter: Option<AccessorDescriptor>,
    #[serde(default)]
    pub setter: Option<AccessorDescriptor>,
    #[serde(default, rename = "special_name")]
    pub is_special_name: bool,
}

impl PropertyDescriptor {
    pub fn new(name: impl Into<String>, property_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            property_type,
            getter: None,
            setter: None,
            is_special_name: false,
        }
    }

    pub fn with_getter(mut self, getter: AccessorDescriptor) -> Self {
        self.getter = Some(getter);
        self
    }

    pub fn with_setter(mut self, setter: AccessorDescriptor) -> Self {
        self.setter = Some(setter);
        self
    }

    pub fn with_special_name(mut self) -> Self {
        self.is_special_name = true;
        self
    }
}

/// A method parameter; metadata may omit the name
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ParameterDescriptor {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub parameter_type: TypeRef,
}

impl ParameterDescriptor {
    pub fn new(name: impl Into<String>, parameter_type: TypeRef) -> Self {
        Self {
            name: Some(name.into()),
            parameter_type,
        }
    }

    pub fn unnamed(parameter_type: TypeRef) -> Self {
        Self {
            name: None,
            parameter_type,
        }
    }
}

fn void() -> TypeRef {
    TypeRef::named("Void")
}

/// A method visible on a type
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MethodDescriptor {
    pub name: String,
    #[serde(default = "void")]
    pub return_type: TypeRef,
    #[serde(default)]
    pub parameters: Vec<ParameterDescriptor>,
    #[serde(default)]
    pub access: DeclaredAccess,
    #[serde(default, rename = "static")]
    pub is_static: bool,
    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,
    /// Overridable slot (includes sealed overrides)
    #[serde(default, rename = "virtual")]
    pub is_virtual: bool,
    /// Sealed against further overriding
    #[serde(default, rename = "final")]
    pub is_final: bool,
    #[serde(default, rename = "special_name")]
    pub is_special_name: bool,
    /// Declared on a base type rather than this one
    #[serde(default, rename = "inherited")]
    pub is_inherited: bool,
}

impl MethodDescriptor {
    pub fn new(name: impl Into<String>, return_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            return_type,
            parameters: Vec::new(),
            access: DeclaredAccess::default(),
            is_static: false,
            is_abstract: false,
            is_virtual: false,
            is_final: false,
            is_special_name: false,
            is_inherited: false,
        }
    }

    pub fn with_access(mut self, access: DeclaredAccess) -> Self {
        self.access = access;
        self
    }

    pub fn with_parameter(mut self, parameter: ParameterDescriptor) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn with_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn with_abstract(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    pub fn with_virtual(mut self) -> Self {
        self.is_virtual = true;
        self
    }

    pub fn with_final(mut self) -> Self {
        self.is_final = true;
        self
    }

    pub fn with_special_name(mut self) -> Self {
        self.is_special_name = true;
        self
    }

    pub fn with_inherited(mut self) -> Self {
        self.is_inherited = true;
        self
    }
}

/// Introspectable view of one type
///
/// Iteration order of fields, properties and methods is discovery order and
/// is preserved by the analyzer.
pub trait TypeDescriptor {
    /// Simple (unqualified) type name, arity marker included
    fn name(&self) -> &str;

    fn namespace(&self) -> Option<&str>;

    fn is_abstract(&self) -> bool;

    fn is_interface(&self) -> bool;

    fn is_sealed(&self) -> bool;

    fn visibility(&self) -> TypeVisibility;

    /// Direct base type, if the type system reports one
    fn base_type(&self) -> Option<&TypeRef>;

    /// Every interface the type implements
    fn interfaces(&self) -> impl Iterator<Item = &TypeRef>;

    fn fields(&self) -> impl Iterator<Item = &FieldDescriptor>;

    fn properties(&self) -> impl Iterator<Item = &PropertyDescriptor>;

    /// Declared and inherited methods; see [`MethodDescriptor::is_inherited`]
    fn methods(&self) -> impl Iterator<Item = &MethodDescriptor>;

    /// `"{Namespace}.{Name}"`, or the bare name without a namespace
    fn full_name(&self) -> String {
        match self.namespace() {
            Some(ns) if !ns.is_empty() => format!("{}.{}", ns, self.name()),
            _ => self.name().to_string(),
        }
    }
}
