//! Fixed-width box formatter
//!
//! Layout of one class:
//!
//! ```text
//! ┌────────────────────┐
//! │    <<abstract>>    │   stereotype, when any
//! │       Animal       │
//! ├────────────────────┤
//! │ extends: Base      │   when a base class exists
//! │ implements: I, J   │   when interfaces exist
//! ├────────────────────┤   only with members
//! │ - _name: String    │
//! │ ... +2 more fields │
//! ├────────────────────┤   only with methods
//! │ + Speak(): Void    │
//! └────────────────────┘
//! ```
//!
//! Every line is exactly `box_width` columns wide.

use tracing::trace;

use super::DiagramFormatter;
use crate::core::{center_in_width, pad_to_width, truncate_with_ellipsis, BoxChars, DiagramConfig};
use crate::model::ClassDiagram;

/// Renders diagrams as bordered boxes
#[derive(Debug, Clone)]
pub struct AsciiFormatter {
    config: DiagramConfig,
    chars: BoxChars,
}

impl AsciiFormatter {
    pub fn new() -> Self {
        Self::with_config(DiagramConfig::default())
    }

    /// The box width is clamped the same way as [`DiagramConfig::with_box_width`]
    pub fn with_config(mut config: DiagramConfig) -> Self {
        config.box_width = DiagramConfig::clamp_box_width(config.box_width);
        Self {
            chars: BoxChars::for_style(config.character_set),
            config,
        }
    }

    pub fn config(&self) -> &DiagramConfig {
        &self.config
    }

    fn width(&self) -> usize {
        self.config.box_width
    }

    fn push_centered(&self, out: &mut String, text: &str) {
        let inner = self.width().saturating_sub(2);
        out.push(self.chars.vertical);
        out.push_str(&center_in_width(text, inner));
        out.push(self.chars.vertical);
        out.push('\n');
    }

    /// `"│ " + text + padding + "│"`; at least one space before the right border
    fn push_text(&self, out: &mut String, text: &str) {
        let max_text = self.width().saturating_sub(4);
        let fitted = truncate_with_ellipsis(text, max_text);
        out.push(self.chars.vertical);
        out.push(' ');
        out.push_str(&pad_to_width(&fitted, self.width().saturating_sub(3)));
        out.push(self.chars.vertical);
        out.push('\n');
    }

    fn push_rule(&self, out: &mut String, rule: String) {
        out.push_str(&rule);
        out.push('\n');
    }
}

impl Default for AsciiFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagramFormatter for AsciiFormatter {
    fn format(&self, diagram: &ClassDiagram) -> String {
        trace!(class = diagram.class_name.as_str(), "Rendering ASCII box");
        let width = self.width();
        let mut out = String::new();

        self.push_rule(&mut out, self.chars.top(width));
        if let Some(stereotype) = diagram.stereotype() {
            self.push_centered(&mut out, stereotype);
        }
        self.push_centered(&mut out, &diagram.class_name);
        self.push_rule(&mut out, self.chars.separator(width));

        if let Some(base) = &diagram.base_class {
            self.push_text(&mut out, &format!("extends: {}", base));
        }
        if !diagram.interfaces.is_empty() {
            self.push_text(
                &mut out,
                &format!("implements: {}", diagram.interfaces.join(", ")),
            );
        }

        if !diagram.members.is_empty() {
            self.push_rule(&mut out, self.chars.separator(width));
            let members = diagram.display_members(Some(self.config.max_members));
            for member in &members.items {
                self.push_text(&mut out, &member.to_string());
            }
            if members.is_truncated() {
                self.push_text(&mut out, &format!("... +{} more fields", members.hidden));
            }
        }

        if !diagram.methods.is_empty() {
            self.push_rule(&mut out, self.chars.separator(width));
            let methods = diagram.display_methods(Some(self.config.max_methods));
            for method in &methods.items {
                self.push_text(&mut out, &method.to_string());
            }
            if methods.is_truncated() {
                self.push_text(&mut out, &format!("... +{} more methods", methods.hidden));
            }
        }

        self.push_rule(&mut out, self.chars.bottom(width));
        out
    }

    /// Boxes separated by one blank line
    fn format_multiple(&self, diagrams: &[ClassDiagram]) -> String {
        diagrams
            .iter()
            .map(|diagram| self.format(diagram))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn name(&self) -> &'static str {
        "ascii"
    }
}
