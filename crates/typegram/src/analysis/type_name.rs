//! Type name normalization
//!
//! Turns a [`TypeRef`] into the string shown in diagrams: nullable wrappers
//! become a trailing `?` and closed generics drop their arity marker in
//! favour of an argument list.

use tracing::debug;

use crate::core::{strip_arity, TypeRef};

/// Display string for a referenced type.
///
/// Never fails. A generic whose arguments cannot be enumerated falls back to
/// its bare simple name.
///
/// # Example
/// ```
/// use typegram::analysis::normalize_type_name;
/// use typegram::core::TypeRef;
///
/// let ty: TypeRef = "Dictionary`2<String, List`1<Int32>>".parse().unwrap();
/// assert_eq!(normalize_type_name(&ty), "Dictionary<String, List<Int32>>");
/// ```
pub fn normalize_type_name(ty: &TypeRef) -> String {
    if let Some(underlying) = ty.nullable_underlying() {
        return format!("{}?", normalize_type_name(underlying));
    }

    if ty.is_closed_generic() {
        return match ty.generic_arguments() {
            Ok(arguments) => {
                let arguments = arguments
                    .iter()
                    .map(normalize_type_name)
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{}<{}>", strip_arity(ty.simple_name()), arguments)
            }
            Err(error) => {
                debug!(type_name = %ty, %error, "Generic arguments unavailable, using bare name");
                ty.simple_name().to_string()
            }
        };
    }

    ty.simple_name().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(signature: &str) -> String {
        normalize_type_name(&TypeRef::parse(signature).unwrap())
    }

    #[test]
    fn test_plain_name() {
        assert_eq!(normalize("Int32"), "Int32");
        assert_eq!(normalize("System.String"), "String");
    }

    #[test]
    fn test_nullable() {
        assert_eq!(normalize("Int32?"), "Int32?");
        assert_eq!(normalize("Nullable`1<DateTime>"), "DateTime?");
    }

    #[test]
    fn test_closed_generic() {
        assert_eq!(normalize("List`1<String>"), "List<String>");
        assert_eq!(
            normalize("System.Collections.Generic.Dictionary`2<System.String, Int32>"),
            "Dictionary<String, Int32>"
        );
    }

    #[test]
    fn test_nested_generics() {
        assert_eq!(
            normalize("Task`1<IEnumerable`1<KeyValuePair`2<String, Int32?>>>"),
            "Task<IEnumerable<KeyValuePair<String, Int32?>>>"
        );
    }

    #[test]
    fn test_nullable_of_two_argument_generic() {
        assert_eq!(normalize("Pair`2<Left, Right>?"), "Pair<Left, Right>?");
    }

    #[test]
    fn test_open_generic_definition_keeps_marker() {
        assert_eq!(normalize("List`1"), "List`1");
    }

    #[test]
    fn test_arity_mismatch_falls_back_to_simple_name() {
        let ty = TypeRef::generic("Dictionary`2", vec![TypeRef::named("String")]);
        assert_eq!(normalize_type_name(&ty), "Dictionary`2");
    }

    #[test]
    fn test_generic_without_marker() {
        assert_eq!(normalize("Result<Value, Error>"), "Result<Value, Error>");
    }
}
