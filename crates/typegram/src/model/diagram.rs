//! Class diagram model
//!
//! One [`ClassDiagram`] per analyzed type. Formatters never read the raw
//! member lists directly; they go through [`ClassDiagram::display_members`]
//! and [`ClassDiagram::display_methods`], which order entries by access level
//! and cut them down to a display limit.

use std::fmt;

use super::{ClassMember, ClassMethod};
use crate::core::{AccessModifier, DiagramConfig};

/// Entries selected for display plus the number left out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayList<'a, T> {
    pub items: Vec<&'a T>,
    pub hidden: usize,
}

impl<'a, T> DisplayList<'a, T> {
    pub fn is_truncated(&self) -> bool {
        self.hidden > 0
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A single analyzed class or interface
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClassDiagram {
    pub class_name: String,
    pub namespace: Option<String>,
    pub is_abstract: bool,
    pub is_interface: bool,
    /// Abstract and sealed at once
    pub is_static: bool,
    pub base_class: Option<String>,
    pub interfaces: Vec<String>,
    pub members: Vec<ClassMember>,
    pub methods: Vec<ClassMethod>,
}

impl ClassDiagram {
    pub const MAX_DISPLAY_MEMBERS: usize = DiagramConfig::DEFAULT_MAX_MEMBERS;
    pub const MAX_DISPLAY_METHODS: usize = DiagramConfig::DEFAULT_MAX_METHODS;

    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            ..Self::default()
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn with_abstract(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    pub fn with_interface_kind(mut self) -> Self {
        self.is_interface = true;
        self.is_abstract = true;
        self
    }

    pub fn with_base_class(mut self, base_class: impl Into<String>) -> Self {
        self.base_class = Some(base_class.into());
        self
    }

    pub fn implementing(mut self, interface: impl Into<String>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    pub fn add_member(&mut self, member: ClassMember) {
        self.members.push(member);
    }

    pub fn add_method(&mut self, method: ClassMethod) {
        self.methods.push(method);
    }

    /// Lookup key used by hosts: `"{ClassName} ({Namespace})"`
    pub fn key(&self) -> String {
        format!(
            "{} ({})",
            self.class_name,
            self.namespace.as_deref().unwrap_or_default()
        )
    }

    /// `<<interface>>` or `<<abstract>>` when either applies
    pub fn stereotype(&self) -> Option<&'static str> {
        if self.is_interface {
            Some("<<interface>>")
        } else if self.is_abstract {
            Some("<<abstract>>")
        } else {
            None
        }
    }

    /// Members ordered Public, Private, Protected, Internal and cut to
    /// `limit` (default [`Self::MAX_DISPLAY_MEMBERS`]).
    pub fn display_members(&self, limit: Option<usize>) -> DisplayList<'_, ClassMember> {
        let max_items = limit.unwrap_or(Self::MAX_DISPLAY_MEMBERS);
        prioritize(&self.members, max_items, |m| m.access)
    }

    /// Methods ordered Public, Private, Protected, Internal and cut to
    /// `limit` (default [`Self::MAX_DISPLAY_METHODS`]).
    pub fn display_methods(&self, limit: Option<usize>) -> DisplayList<'_, ClassMethod> {
        let max_items = limit.unwrap_or(Self::MAX_DISPLAY_METHODS);
        prioritize(&self.methods, max_items, |m| m.access)
    }
}

impl fmt::Display for ClassDiagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.stereotype() {
            Some(stereotype) => write!(f, "{} {}", stereotype, self.class_name),
            None => write!(f, "{}", self.class_name),
        }
    }
}

// `sort_by_key` is stable, so equal access levels keep discovery order.
fn prioritize<'a, T>(
    items: &'a [T],
    max_items: usize,
    access: impl Fn(&T) -> AccessModifier,
) -> DisplayList<'a, T> {
    let mut sorted: Vec<&'a T> = items.iter().collect();
    sorted.sort_by_key(|item| access(*item).priority());

    let hidden = sorted.len().saturating_sub(max_items);
    sorted.truncate(max_items);

    DisplayList {
        items: sorted,
        hidden,
    }
}
