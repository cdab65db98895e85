//! Members, methods and parameters of a class diagram
//!
//! The textual forms used by every formatter come from the `Display` impls
//! here; nothing rendered is stored.

use std::fmt;

use crate::core::AccessModifier;

/// A field or property
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassMember {
    pub name: String,
    /// Normalized type name
    pub type_name: String,
    pub access: AccessModifier,
    pub is_static: bool,
    pub is_read_only: bool,
}

impl ClassMember {
    pub fn new(
        name: impl Into<String>,
        type_name: impl Into<String>,
        access: AccessModifier,
    ) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            access,
            is_static: false,
            is_read_only: false,
        }
    }

    pub fn with_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn with_read_only(mut self) -> Self {
        self.is_read_only = true;
        self
    }
}

impl fmt::Display for ClassMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.access.glyph())?;
        if self.is_static {
            f.write_str("[static] ")?;
        }
        if self.is_read_only {
            f.write_str("[readonly] ")?;
        }
        write!(f, "{}: {}", self.name, self.type_name)
    }
}

/// A method parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodParameter {
    pub name: String,
    pub type_name: String,
}

impl MethodParameter {
    /// Name used when the metadata carries none
    pub const PLACEHOLDER_NAME: &'static str = "param";

    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

impl fmt::Display for MethodParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.type_name)
    }
}

/// A method declared on a class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassMethod {
    pub name: String,
    /// Normalized return type name
    pub return_type: String,
    pub parameters: Vec<MethodParameter>,
    pub access: AccessModifier,
    pub is_static: bool,
    pub is_abstract: bool,
    /// Overridable and not sealed
    pub is_virtual: bool,
}

impl ClassMethod {
    pub fn new(
        name: impl Into<String>,
        return_type: impl Into<String>,
        access: AccessModifier,
    ) -> Self {
        Self {
            name: name.into(),
            return_type: return_type.into(),
            parameters: Vec::new(),
            access,
            is_static: false,
            is_abstract: false,
            is_virtual: false,
        }
    }

    pub fn with_parameter(mut self, parameter: MethodParameter) -> Self {
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
}

impl fmt::Display for ClassMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.access.glyph())?;
        if self.is_abstract {
            f.write_str("[abstract] ")?;
        }
        if self.is_static {
            f.write_str("[static] ")?;
        }
        if self.is_virtual {
            f.write_str("[virtual] ")?;
        }
        write!(f, "{}(", self.name)?;
        for (i, parameter) in self.parameters.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", parameter)?;
        }
        write!(f, "): {}", self.return_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_display() {
        let member = ClassMember::new("name", "String", AccessModifier::Public);
        assert_eq!(member.to_string(), "+ name: String");
    }

    #[test]
    fn test_member_tags_in_fixed_order() {
        let member = ClassMember::new("Instance", "Registry", AccessModifier::Private)
            .with_read_only()
            .with_static();
        assert_eq!(member.to_string(), "- [static] [readonly] Instance: Registry");
    }

    #[test]
    fn test_member_glyphs() {
        let protected = ClassMember::new("a", "Int32", AccessModifier::Protected);
        let internal = ClassMember::new("b", "Int32", AccessModifier::Internal);
        assert_eq!(protected.to_string(), "# a: Int32");
        assert_eq!(internal.to_string(), "~ b: Int32");
    }

    #[test]
    fn test_method_display_without_parameters() {
        let method = ClassMethod::new("Speak", "void", AccessModifier::Public);
        assert_eq!(method.to_string(), "+ Speak(): void");
    }

    #[test]
    fn test_method_display_with_parameters() {
        let method = ClassMethod::new("Move", "Boolean", AccessModifier::Protected)
            .with_parameter(MethodParameter::new("x", "Int32"))
            .with_parameter(MethodParameter::new("y", "Int32"));
        assert_eq!(method.to_string(), "# Move(x: Int32, y: Int32): Boolean");
    }

    #[test]
    fn test_method_tags_in_fixed_order() {
        let method = ClassMethod::new("Create", "Widget", AccessModifier::Internal)
            .with_virtual()
            .with_static()
            .with_abstract();
        assert_eq!(
            method.to_string(),
            "~ [abstract] [static] [virtual] Create(): Widget"
        );
    }
}
