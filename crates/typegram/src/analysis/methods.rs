//! Method extraction

use tracing::trace;

use super::members::{access_modifier, is_synthetic_name};
use super::normalize_type_name;
use crate::core::TypeDescriptor;
use crate::model::{ClassMethod, MethodParameter};

/// Methods declared directly on `ty`, in discovery order.
///
/// Inherited methods and compiler plumbing (accessors, operators, event
/// add/remove, lambdas) are skipped.
pub fn extract_methods(ty: &impl TypeDescriptor) -> Vec<ClassMethod> {
    let mut methods = Vec::new();

    for method in ty.methods() {
        if method.is_inherited {
            continue;
        }
        if method.is_special_name || is_synthetic_name(&method.name) {
            trace!(method = method.name.as_str(), "Skipping synthesized method");
            continue;
        }

        let parameters = method
            .parameters
            .iter()
            .map(|p| MethodParameter {
                name: p
                    .name
                    .clone()
                    .unwrap_or_else(|| MethodParameter::PLACEHOLDER_NAME.to_string()),
                type_name: normalize_type_name(&p.parameter_type),
            })
            .collect();

        methods.push(ClassMethod {
            name: method.name.clone(),
            return_type: normalize_type_name(&method.return_type),
            parameters,
            access: access_modifier(method.access),
            is_static: method.is_static,
            is_abstract: method.is_abstract,
            // Abstract slots are always overridable
            is_virtual: (method.is_virtual || method.is_abstract) && !method.is_final,
        });
    }

    methods
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AccessModifier, DeclaredAccess, MethodDescriptor, ParameterDescriptor, TypeRef};
    use crate::metadata::TypeMetadata;

    fn void() -> TypeRef {
        TypeRef::named("Void")
    }

    #[test]
    fn test_declared_only() {
        let ty = TypeMetadata::new("Dog")
            .with_method(MethodDescriptor::new("Bark", void()).with_access(DeclaredAccess::Public))
            .with_method(
                MethodDescriptor::new("ToString", TypeRef::named("String"))
                    .with_virtual()
                    .with_inherited(),
            );

        let methods = extract_methods(&ty);
        assert_eq!(methods.len(), 1);
        assert_eq!(methods[0].name, "Bark");
    }

    #[test]
    fn test_skips_accessors_and_lambdas() {
        let ty = TypeMetadata::new("Widget")
            .with_method(MethodDescriptor::new("get_Size", TypeRef::named("Int32")).with_special_name())
            .with_method(MethodDescriptor::new("op_Addition", TypeRef::named("Widget")).with_special_name())
            .with_method(MethodDescriptor::new("<Render>b__0_0", void()))
            .with_method(MethodDescriptor::new("Render", void()));

        let methods = extract_methods(&ty);
        let names: Vec<_> = methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Render"]);
    }

    #[test]
    fn test_parameters_in_order_with_placeholder() {
        let ty = TypeMetadata::new("Math").with_method(
            MethodDescriptor::new("Clamp", TypeRef::named("Int32"))
                .with_access(DeclaredAccess::Public)
                .with_static()
                .with_parameter(ParameterDescriptor::new("value", TypeRef::named("Int32")))
                .with_parameter(ParameterDescriptor::unnamed(TypeRef::named("Int32")))
                .with_parameter(ParameterDescriptor::new("max", TypeRef::named("Int32?"))),
        );

        let method = &extract_methods(&ty)[0];
        let names: Vec<_> = method.parameters.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["value", "param", "max"]);
        assert_eq!(
            method.to_string(),
            "+ [static] Clamp(value: Int32, param: Int32, max: Int32?): Int32"
        );
    }

    #[test]
    fn test_sealed_override_is_not_virtual() {
        let ty = TypeMetadata::new("Leaf")
            .with_method(MethodDescriptor::new("Open", void()).with_virtual())
            .with_method(MethodDescriptor::new("Closed", void()).with_virtual().with_final())
            .with_method(MethodDescriptor::new("Plain", void()));

        let methods = extract_methods(&ty);
        assert!(methods[0].is_virtual);
        assert!(!methods[1].is_virtual);
        assert!(!methods[2].is_virtual);
    }

    #[test]
    fn test_abstract_and_access() {
        let ty = TypeMetadata::new("Shape").with_method(
            MethodDescriptor::new("Area", TypeRef::named("Double"))
                .with_access(DeclaredAccess::Protected)
                .with_abstract(),
        );

        let method = &extract_methods(&ty)[0];
        assert_eq!(method.access, AccessModifier::Protected);
        assert!(method.is_abstract);
        assert!(method.is_virtual);
        assert_eq!(method.to_string(), "# [abstract] [virtual] Area(): Double");
    }

    #[test]
    fn test_abstract_from_json_is_virtual() {
        let ty: TypeMetadata = serde_json::from_str(
            r#"{
                "name": "Animal",
                "methods": [
                    { "name": "Speak", "access": "public", "abstract": true },
                    { "name": "Eat", "access": "public", "abstract": true, "final": true }
                ]
            }"#,
        )
        .unwrap();
        let built = TypeMetadata::new("Animal").with_method(
            MethodDescriptor::new("Speak", void())
                .with_access(DeclaredAccess::Public)
                .with_abstract(),
        );

        let from_json = extract_methods(&ty);
        assert_eq!(from_json[0].to_string(), "+ [abstract] [virtual] Speak(): Void");
        assert_eq!(from_json[0], extract_methods(&built)[0]);
        assert!(!from_json[1].is_virtual);
    }

    #[test]
    fn test_return_type_normalized() {
        let ty = TypeMetadata::new("Repo").with_method(MethodDescriptor::new(
            "FindAll",
            TypeRef::parse("Task`1<List`1<User>>").unwrap(),
        ));

        assert_eq!(extract_methods(&ty)[0].return_type, "Task<List<User>>");
    }
}
