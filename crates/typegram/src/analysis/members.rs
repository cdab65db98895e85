//! Field and property extraction

use tracing::trace;

use super::normalize_type_name;
use crate::core::{AccessModifier, DeclaredAccess, TypeDescriptor};
use crate::model::ClassMember;

/// First character of compiler-generated names such as `<Name>k__BackingField`
pub const SYNTHETIC_NAME_MARKER: char = '<';

/// Map a declared accessibility onto the four diagram access levels
pub fn access_modifier(access: DeclaredAccess) -> AccessModifier {
    match access {
        DeclaredAccess::Public => AccessModifier::Public,
        DeclaredAccess::Private => AccessModifier::Private,
        DeclaredAccess::Protected => AccessModifier::Protected,
        DeclaredAccess::Internal
        | DeclaredAccess::ProtectedInternal
        | DeclaredAccess::PrivateProtected => AccessModifier::Internal,
    }
}

pub(crate) fn is_synthetic_name(name: &str) -> bool {
    name.starts_with(SYNTHETIC_NAME_MARKER)
}

/// Fields followed by properties, in discovery order.
///
/// Special-name members and compiler-generated backing fields are skipped.
pub fn extract_members(ty: &impl TypeDescriptor) -> Vec<ClassMember> {
    let mut members = Vec::new();

    for field in ty.fields() {
        if field.is_special_name || is_synthetic_name(&field.name) {
            trace!(field = field.name.as_str(), "Skipping synthesized field");
            continue;
        }

        members.push(ClassMember {
            name: field.name.clone(),
            type_name: normalize_type_name(&field.field_type),
            access: access_modifier(field.access),
            is_static: field.is_static,
            is_read_only: field.is_init_only,
        });
    }

    for property in ty.properties() {
        if property.is_special_name {
            trace!(property = property.name.as_str(), "Skipping special-name property");
            continue;
        }

        // Without a getter there is nothing to classify by
        let access = property
            .getter
            .map(|getter| access_modifier(getter.access))
            .unwrap_or(AccessModifier::Internal);
        let is_static = property.getter.is_some_and(|g| g.is_static)
            || property.setter.is_some_and(|s| s.is_static);

        members.push(ClassMember {
            name: property.name.clone(),
            type_name: normalize_type_name(&property.property_type),
            access,
            is_static,
            is_read_only: false,
        });
    }

    members
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AccessorDescriptor, FieldDescriptor, PropertyDescriptor, TypeRef};
    use crate::metadata::TypeMetadata;

    fn int() -> TypeRef {
        TypeRef::named("Int32")
    }

    #[test]
    fn test_access_mapping() {
        assert_eq!(access_modifier(DeclaredAccess::Public), AccessModifier::Public);
        assert_eq!(access_modifier(DeclaredAccess::Private), AccessModifier::Private);
        assert_eq!(access_modifier(DeclaredAccess::Protected), AccessModifier::Protected);
        assert_eq!(access_modifier(DeclaredAccess::Internal), AccessModifier::Internal);
        assert_eq!(
            access_modifier(DeclaredAccess::ProtectedInternal),
            AccessModifier::Internal
        );
        assert_eq!(
            access_modifier(DeclaredAccess::PrivateProtected),
            AccessModifier::Internal
        );
    }

    #[test]
    fn test_fields_then_properties_in_discovery_order() {
        let ty = TypeMetadata::new("Point")
            .with_field(FieldDescriptor::new("_y", int()))
            .with_field(FieldDescriptor::new("_x", int()).with_access(DeclaredAccess::Public))
            .with_property(
                PropertyDescriptor::new("Length", TypeRef::named("Double"))
                    .with_getter(AccessorDescriptor::new(DeclaredAccess::Public)),
            );

        let members = extract_members(&ty);
        let names: Vec<_> = members.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["_y", "_x", "Length"]);
        assert_eq!(members[2].type_name, "Double");
    }

    #[test]
    fn test_skips_synthesized_members() {
        let ty = TypeMetadata::new("Person")
            .with_field(FieldDescriptor::new("<Name>k__BackingField", int()))
            .with_field(FieldDescriptor::new("value__", int()).with_special_name())
            .with_field(FieldDescriptor::new("age", int()))
            .with_property(PropertyDescriptor::new("Item", int()).with_special_name());

        let members = extract_members(&ty);
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].name, "age");
    }

    #[test]
    fn test_field_flags() {
        let ty = TypeMetadata::new("Config").with_field(
            FieldDescriptor::new("Default", TypeRef::named("Config"))
                .with_access(DeclaredAccess::Public)
                .with_static()
                .with_init_only(),
        );

        let member = &extract_members(&ty)[0];
        assert_eq!(member.access, AccessModifier::Public);
        assert!(member.is_static);
        assert!(member.is_read_only);
        assert_eq!(member.to_string(), "+ [static] [readonly] Default: Config");
    }

    #[test]
    fn test_property_access_comes_from_getter() {
        let ty = TypeMetadata::new("Account").with_property(
            PropertyDescriptor::new("Balance", TypeRef::named("Decimal"))
                .with_getter(AccessorDescriptor::new(DeclaredAccess::Protected))
                .with_setter(AccessorDescriptor::new(DeclaredAccess::Private)),
        );

        assert_eq!(extract_members(&ty)[0].access, AccessModifier::Protected);
    }

    #[test]
    fn test_write_only_property_is_internal() {
        let ty = TypeMetadata::new("Sink").with_property(
            PropertyDescriptor::new("Target", int())
                .with_setter(AccessorDescriptor::new(DeclaredAccess::Public)),
        );

        let member = &extract_members(&ty)[0];
        assert_eq!(member.access, AccessModifier::Internal);
        assert!(!member.is_read_only);
    }

    #[test]
    fn test_property_static_from_either_accessor() {
        let ty = TypeMetadata::new("Counter").with_property(
            PropertyDescriptor::new("Total", int())
                .with_getter(AccessorDescriptor::new(DeclaredAccess::Public))
                .with_setter(AccessorDescriptor::new(DeclaredAccess::Private).with_static()),
        );

        assert!(extract_members(&ty)[0].is_static);
    }

    #[test]
    fn test_member_types_are_normalized() {
        let ty = TypeMetadata::new("Cache").with_field(FieldDescriptor::new(
            "_entries",
            TypeRef::parse("Dictionary`2<String, Int32?>").unwrap(),
        ));

        assert_eq!(
            extract_members(&ty)[0].type_name,
            "Dictionary<String, Int32?>"
        );
    }
}
