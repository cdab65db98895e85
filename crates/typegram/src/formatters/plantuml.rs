//! PlantUML formatter and sanitizer

use std::sync::OnceLock;

use regex::Regex;
use tracing::trace;

use super::DiagramFormatter;
use crate::core::DiagramConfig;
use crate::model::ClassDiagram;

/// Renders diagrams as a PlantUML class diagram script
#[derive(Debug, Clone, Default)]
pub struct PlantUmlFormatter {
    config: DiagramConfig,
}

impl PlantUmlFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DiagramConfig) -> Self {
        Self { config }
    }

    /// Class block followed by its relationship lines
    fn write_class(&self, out: &mut String, diagram: &ClassDiagram) {
        trace!(class = diagram.class_name.as_str(), "Rendering PlantUML class");
        out.push_str(&format!("class {} {{\n", diagram.class_name));

        let members = diagram.display_members(Some(self.config.max_members));
        for member in &members.items {
            out.push_str(&format!("  {}\n", member));
        }
        if members.is_truncated() {
            out.push_str(&format!("  .. +{} more fields ..\n", members.hidden));
        }

        let methods = diagram.display_methods(Some(self.config.max_methods));
        for method in &methods.items {
            out.push_str(&format!("  {}\n", method));
        }
        if methods.is_truncated() {
            out.push_str(&format!("  .. +{} more methods ..\n", methods.hidden));
        }

        out.push_str("}\n");

        if let Some(base) = &diagram.base_class {
            out.push_str(&format!("{} --|> {}\n", diagram.class_name, base));
        }
        for interface in &diagram.interfaces {
            out.push_str(&format!("{} ..|> {}\n", diagram.class_name, interface));
        }
    }
}

impl DiagramFormatter for PlantUmlFormatter {
    fn format(&self, diagram: &ClassDiagram) -> String {
        self.format_multiple(std::slice::from_ref(diagram))
    }

    fn format_multiple(&self, diagrams: &[ClassDiagram]) -> String {
        let mut out = String::from("@startuml\n");
        for diagram in diagrams {
            self.write_class(&mut out, diagram);
        }
        out.push_str("@enduml\n");
        out
    }

    fn name(&self) -> &'static str {
        "plantuml"
    }
}

fn arity_marker_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"`\d+").expect("arity marker pattern is valid"))
}

/// Remove generic arity markers (a backtick followed by digits) from
/// PlantUML text; PlantUML does not accept them in identifiers.
///
/// ```
/// use typegram::formatters::sanitize_plantuml;
///
/// assert_eq!(
///     sanitize_plantuml("Dog ..|> IComparable`1\n"),
///     "Dog ..|> IComparable\n"
/// );
/// ```
pub fn sanitize_plantuml(text: &str) -> String {
    arity_marker_pattern().replace_all(text, "").into_owned()
}
