//! Referenced types and their textual signature syntax
//!
//! A [`TypeRef`] describes the type of a field, property, parameter or return
//! value, as well as base types and implemented interfaces. Signatures use a
//! compact grammar:
//!
//! ```text
//! type := name ('<' type (',' type)* '>')? '?'?
//! ```
//!
//! Names may be namespace-qualified and may carry a generic arity marker
//! (``Dictionary`2``). A name with an arity marker but no arguments is an
//! open generic definition.

use std::fmt;
use std::str::FromStr;

use chumsky::prelude::*;
use serde::Deserialize;

use super::DiagramError;

/// A type referenced from a type descriptor
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum TypeRef {
    /// A plain or open-generic type name
    Named(String),
    /// A nullable wrapper around a value type
    Nullable(Box<TypeRef>),
    /// A closed generic instantiation
    Generic { name: String, arguments: Vec<TypeRef> },
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named(name.into())
    }

    pub fn nullable(inner: TypeRef) -> Self {
        TypeRef::Nullable(Box::new(inner))
    }

    pub fn generic(name: impl Into<String>, arguments: Vec<TypeRef>) -> Self {
        TypeRef::Generic {
            name: name.into(),
            arguments,
        }
    }

    /// Unqualified name, arity marker included
    pub fn simple_name(&self) -> &str {
        match self {
            TypeRef::Named(name) | TypeRef::Generic { name, .. } => unqualified(name),
            TypeRef::Nullable(_) => "Nullable`1",
        }
    }

    /// Namespace prefix of a qualified name
    pub fn namespace(&self) -> Option<&str> {
        match self {
            TypeRef::Named(name) | TypeRef::Generic { name, .. } => {
                name.rsplit_once('.').map(|(ns, _)| ns)
            }
            TypeRef::Nullable(_) => Some("System"),
        }
    }

    /// The wrapped type when this is a nullable wrapper
    pub fn nullable_underlying(&self) -> Option<&TypeRef> {
        match self {
            TypeRef::Nullable(inner) => Some(inner),
            _ => None,
        }
    }

    /// True for a generic instantiation with concrete arguments
    pub fn is_closed_generic(&self) -> bool {
        matches!(self, TypeRef::Generic { arguments, .. } if !arguments.is_empty())
    }

    /// Generic arguments of a closed generic.
    ///
    /// Fails when the arity marker in the name disagrees with the number of
    /// arguments actually supplied.
    pub fn generic_arguments(&self) -> Result<&[TypeRef], DiagramError> {
        match self {
            TypeRef::Generic { name, arguments } => match arity_marker(name) {
                Some(expected) if expected != arguments.len() => Err(
                    DiagramError::generic_arity(name.clone(), expected, arguments.len()),
                ),
                _ => Ok(arguments),
            },
            TypeRef::Nullable(inner) => Ok(std::slice::from_ref(inner.as_ref())),
            TypeRef::Named(_) => Ok(&[]),
        }
    }

    /// Parse a type signature
    pub fn parse(input: &str) -> Result<Self, DiagramError> {
        type_ref_parser()
            .padded()
            .then_ignore(end())
            .parse(input)
            .into_result()
            .map_err(|_| DiagramError::type_syntax(input))
    }
}

impl FromStr for TypeRef {
    type Err = DiagramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypeRef::parse(s)
    }
}

impl TryFrom<String> for TypeRef {
    type Error = DiagramError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        TypeRef::parse(&value)
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Named(name) => write!(f, "{}", name),
            TypeRef::Nullable(inner) => write!(f, "{}?", inner),
            TypeRef::Generic { name, arguments } => {
                write!(f, "{}<", name)?;
                for (i, arg) in arguments.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ">")
            }
        }
    }
}

/// Strip any namespace qualification
fn unqualified(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or(name)
}

/// Name with the generic arity marker removed (``List`1`` -> `List`)
pub fn strip_arity(name: &str) -> &str {
    name.split('`').next().unwrap_or(name)
}

/// Arity declared by a trailing ``` `N ``` marker
fn arity_marker(name: &str) -> Option<usize> {
    name.rsplit_once('`')
        .and_then(|(_, digits)| digits.parse().ok())
}

fn is_nullable_name(name: &str) -> bool {
    matches!(strip_arity(unqualified(name)), "Nullable")
}

fn type_ref_parser<'src>() -> impl Parser<'src, &'src str, TypeRef> {
    recursive(|type_ref| {
        let name = none_of("<>,? \t\r\n")
            .repeated()
            .at_least(1)
            .to_slice()
            .map(|s: &str| s.to_string());

        let arguments = type_ref
            .separated_by(just(',').padded())
            .at_least(1)
            .collect::<Vec<_>>()
            .delimited_by(just('<').padded(), just('>').padded());

        name.then(arguments.or_not())
            .then(just('?').or_not())
            .map(|((name, arguments), question)| {
                let base = match arguments {
                    Some(mut args) if args.len() == 1 && is_nullable_name(&name) => {
                        TypeRef::Nullable(Box::new(args.remove(0)))
                    }
                    Some(args) => TypeRef::Generic {
                        name,
                        arguments: args,
                    },
                    None => TypeRef::Named(name),
                };
                if question.is_some() {
                    TypeRef::Nullable(Box::new(base))
                } else {
                    base
                }
            })
    })
}
