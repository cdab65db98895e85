//! Plain-text class summary
//!
//! Lists every member and method in discovery order, without the display
//! limits the diagram formatters apply.

use super::DiagramFormatter;
use crate::model::ClassDiagram;

#[derive(Debug, Clone, Copy, Default)]
pub struct InfoFormatter;

impl InfoFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl DiagramFormatter for InfoFormatter {
    fn format(&self, diagram: &ClassDiagram) -> String {
        let mut lines = vec![
            format!("Class Name: {}", diagram.class_name),
            format!("Namespace: {}", diagram.namespace.as_deref().unwrap_or_default()),
            format!("Is Abstract: {}", diagram.is_abstract),
            format!("Is Interface: {}", diagram.is_interface),
            format!("Is Static: {}", diagram.is_static),
        ];

        if let Some(base) = &diagram.base_class {
            lines.push(format!("Extends: {}", base));
        }
        if !diagram.interfaces.is_empty() {
            lines.push(format!("Implements: {}", diagram.interfaces.join(", ")));
        }

        lines.push(String::new());
        lines.push(format!("Members ({}):", diagram.members.len()));
        lines.extend(diagram.members.iter().map(|m| format!("  {}", m)));

        lines.push(String::new());
        lines.push(format!("Methods ({}):", diagram.methods.len()));
        lines.extend(diagram.methods.iter().map(|m| format!("  {}", m)));

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    fn format_multiple(&self, diagrams: &[ClassDiagram]) -> String {
        diagrams
            .iter()
            .map(|diagram| self.format(diagram))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn name(&self) -> &'static str {
        "info"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AccessModifier;
    use crate::model::{ClassMember, ClassMethod};

    #[test]
    fn test_info_block() {
        let mut diagram = ClassDiagram::new("Dog")
            .with_namespace("Zoo")
            .with_base_class("Animal")
            .implementing("IPet");
        diagram.add_member(ClassMember::new("_age", "Int32", AccessModifier::Private));
        diagram.add_method(ClassMethod::new("Bark", "Void", AccessModifier::Public));

        let expected = "\
Class Name: Dog
Namespace: Zoo
Is Abstract: false
Is Interface: false
Is Static: false
Extends: Animal
Implements: IPet

Members (1):
  - _age: Int32

Methods (1):
  + Bark(): Void
";
        assert_eq!(InfoFormatter::new().format(&diagram), expected);
    }

    #[test]
    fn test_info_lists_everything() {
        let mut diagram = ClassDiagram::new("Big");
        for i in 0..20 {
            diagram.add_member(ClassMember::new(format!("f{}", i), "Int32", AccessModifier::Internal));
        }

        let output = InfoFormatter::new().format(&diagram);
        assert!(output.contains("Members (20):"));
        assert!(output.contains("  ~ f19: Int32"));
        assert!(output.contains("Namespace: \n"));
        assert!(!output.contains("more fields"));
    }
}
