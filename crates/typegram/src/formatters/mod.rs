//! Diagram formatters
//!
//! Every formatter reads a [`ClassDiagram`] and produces text. Formatting
//! never fails: oversized or empty content is handled by truncation and
//! padding.

mod ascii;
mod info;
mod plantuml;

use std::fmt;
use std::str::FromStr;

pub use ascii::AsciiFormatter;
pub use info::InfoFormatter;
pub use plantuml::{sanitize_plantuml, PlantUmlFormatter};

use crate::core::DiagramConfig;
use crate::model::ClassDiagram;

/// Turns diagram models into text
pub trait DiagramFormatter: Send + Sync {
    /// Render a single diagram
    fn format(&self, diagram: &ClassDiagram) -> String;

    /// Render several diagrams as one document
    fn format_multiple(&self, diagrams: &[ClassDiagram]) -> String;

    /// Short name of the output notation
    fn name(&self) -> &'static str;
}

/// Available output notations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// Bordered box diagram
    #[default]
    Ascii,
    /// PlantUML class diagram script
    PlantUml,
    /// Plain-text class summary, untruncated
    Info,
}

impl OutputFormat {
    /// Build a formatter for this notation
    pub fn formatter(self, config: DiagramConfig) -> Box<dyn DiagramFormatter> {
        match self {
            OutputFormat::Ascii => Box::new(AsciiFormatter::with_config(config)),
            OutputFormat::PlantUml => Box::new(PlantUmlFormatter::with_config(config)),
            OutputFormat::Info => Box::new(InfoFormatter::new()),
        }
    }

    pub fn variants() -> &'static [&'static str] {
        &["ascii", "plantuml", "info"]
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ascii" | "text" => Ok(OutputFormat::Ascii),
            "plantuml" | "puml" | "uml" => Ok(OutputFormat::PlantUml),
            "info" => Ok(OutputFormat::Info),
            _ => Err(format!(
                "Unknown output format: {}. Valid options: {}",
                s,
                Self::variants().join(", ")
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Ascii => "ascii",
            OutputFormat::PlantUml => "plantuml",
            OutputFormat::Info => "info",
        };
        write!(f, "{}", name)
    }
}
