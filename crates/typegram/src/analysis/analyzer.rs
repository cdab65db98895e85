//! Type analyzer
//!
//! Builds a [`ClassDiagram`] from a [`TypeDescriptor`]:
//! descriptor → members/methods extraction → diagram model.

use tracing::{debug, info, span, trace, warn, Level};

use super::{extract_members, extract_methods};
use crate::core::{TypeDescriptor, TypeRef};
use crate::model::ClassDiagram;

/// Simple name of the root object type every class implicitly derives from
const ROOT_TYPE_NAME: &str = "Object";

/// Turns type descriptors into diagram models
///
/// The analyzer holds no state; one instance can be shared freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeAnalyzer;

impl TypeAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Analyze a single type
    pub fn analyze_type(&self, ty: &impl TypeDescriptor) -> ClassDiagram {
        let analyze_span = span!(Level::DEBUG, "analyze_type", type_name = ty.name());
        let _enter = analyze_span.enter();

        let base_class = match ty.base_type() {
            Some(base) if ty.is_interface() => {
                warn!(
                    type_name = ty.name(),
                    base = %base,
                    "Interface reports a base type, ignoring it"
                );
                None
            }
            Some(base) if is_root_type(base) => None,
            Some(base) => Some(base.simple_name().to_string()),
            None => None,
        };

        let diagram = ClassDiagram {
            class_name: ty.name().to_string(),
            namespace: ty.namespace().map(str::to_string),
            is_abstract: ty.is_abstract() || ty.is_interface(),
            is_interface: ty.is_interface(),
            is_static: ty.is_abstract() && ty.is_sealed(),
            base_class,
            interfaces: ty.interfaces().map(|i| i.simple_name().to_string()).collect(),
            members: extract_members(ty),
            methods: extract_methods(ty),
        };

        debug!(
            class = diagram.class_name.as_str(),
            members = diagram.members.len(),
            methods = diagram.methods.len(),
            "Type analyzed"
        );
        diagram
    }

    /// Analyze every exported type in input order.
    ///
    /// Non-public and non-public nested types are skipped.
    pub fn analyze_types<'a, T>(&self, types: impl IntoIterator<Item = &'a T>) -> Vec<ClassDiagram>
    where
        T: TypeDescriptor + 'a,
    {
        let analyze_span = span!(Level::INFO, "analyze_types");
        let _enter = analyze_span.enter();

        let mut skipped = 0usize;
        let diagrams: Vec<ClassDiagram> = types
            .into_iter()
            .filter(|ty| {
                let exported = ty.visibility().is_exported();
                if !exported {
                    trace!(type_name = ty.name(), visibility = ?ty.visibility(), "Skipping non-exported type");
                    skipped += 1;
                }
                exported
            })
            .map(|ty| self.analyze_type(ty))
            .collect();

        info!(analyzed = diagrams.len(), skipped, "Types analyzed");
        diagrams
    }
}

fn is_root_type(ty: &TypeRef) -> bool {
    ty.simple_name() == ROOT_TYPE_NAME && matches!(ty.namespace(), None | Some("System"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DeclaredAccess, FieldDescriptor, MethodDescriptor, TypeVisibility};
    use crate::metadata::TypeMetadata;

    #[test]
    fn test_analyze_abstract_class() {
        let ty = TypeMetadata::new("Animal")
            .with_namespace("Zoo.Core")
            .with_abstract()
            .with_base_type(TypeRef::named("System.Object"))
            .with_method(
                MethodDescriptor::new("Speak", TypeRef::named("void"))
                    .with_access(DeclaredAccess::Public)
                    .with_abstract(),
            );

        let diagram = TypeAnalyzer::new().analyze_type(&ty);
        assert_eq!(diagram.class_name, "Animal");
        assert_eq!(diagram.namespace.as_deref(), Some("Zoo.Core"));
        assert!(diagram.is_abstract);
        assert!(!diagram.is_static);
        assert_eq!(diagram.base_class, None);
        assert_eq!(diagram.methods.len(), 1);
        assert_eq!(diagram.key(), "Animal (Zoo.Core)");
    }

    #[test]
    fn test_static_class_is_abstract_and_sealed() {
        let ty = TypeMetadata::new("MathHelpers").with_abstract().with_sealed();
        assert!(TypeAnalyzer::new().analyze_type(&ty).is_static);

        let sealed_only = TypeMetadata::new("Leaf").with_sealed();
        assert!(!TypeAnalyzer::new().analyze_type(&sealed_only).is_static);
    }

    #[test]
    fn test_base_class_and_interfaces_use_simple_names() {
        let ty = TypeMetadata::new("Dog")
            .with_base_type(TypeRef::named("Zoo.Core.Animal"))
            .with_interface(TypeRef::parse("System.IComparable`1<Zoo.Core.Dog>").unwrap())
            .with_interface(TypeRef::named("System.IDisposable"));

        let diagram = TypeAnalyzer::new().analyze_type(&ty);
        assert_eq!(diagram.base_class.as_deref(), Some("Animal"));
        assert_eq!(diagram.interfaces, vec!["IComparable`1", "IDisposable"]);
    }

    #[test]
    fn test_user_type_named_object_is_kept() {
        let ty = TypeMetadata::new("Widget").with_base_type(TypeRef::named("Game.Object"));
        let diagram = TypeAnalyzer::new().analyze_type(&ty);
        assert_eq!(diagram.base_class.as_deref(), Some("Object"));
    }

    #[test]
    fn test_interface_never_has_base_class() {
        let ty = TypeMetadata::new("IShape")
            .with_interface_kind()
            .with_base_type(TypeRef::named("Shapes.Base"));

        let diagram = TypeAnalyzer::new().analyze_type(&ty);
        assert!(diagram.is_interface);
        assert!(diagram.is_abstract);
        assert_eq!(diagram.base_class, None);
    }

    #[test]
    fn test_interface_from_json_is_abstract() {
        let ty: TypeMetadata =
            serde_json::from_str(r#"{ "name": "IFeedable", "interface": true }"#).unwrap();
        assert!(!ty.is_abstract);

        let diagram = TypeAnalyzer::new().analyze_type(&ty);
        assert!(diagram.is_abstract);
        assert!(!diagram.is_static);
        let built = TypeMetadata::new("IFeedable").with_interface_kind();
        assert_eq!(diagram, TypeAnalyzer::new().analyze_type(&built));
    }

    #[test]
    fn test_analyze_types_filters_non_exported() {
        let types = vec![
            TypeMetadata::new("Public"),
            TypeMetadata::new("Hidden").with_visibility(TypeVisibility::NotPublic),
            TypeMetadata::new("Inner").with_visibility(TypeVisibility::NestedPublic),
            TypeMetadata::new("Secret").with_visibility(TypeVisibility::NestedPrivate),
            TypeMetadata::new("Friend").with_visibility(TypeVisibility::NestedInternal),
            TypeMetadata::new("Last").with_field(FieldDescriptor::new("x", TypeRef::named("Int32"))),
        ];

        let diagrams = TypeAnalyzer::new().analyze_types(&types);
        let names: Vec<_> = diagrams.iter().map(|d| d.class_name.as_str()).collect();
        assert_eq!(names, vec!["Public", "Inner", "Last"]);
        assert_eq!(diagrams[2].members.len(), 1);
    }
}
