//! Command-line interface for the typegram utility
//!
//! Loads JSON metadata tables, analyzes their types and writes class
//! diagrams as ASCII boxes, PlantUML or plain-text summaries.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing::{info, warn};

use typegram::analysis::{DiagramCache, TypeAnalyzer};
use typegram::core::logging::init_logging;
use typegram::formatters::sanitize_plantuml;
use typegram::metadata::AssemblyMetadata;
use typegram::model::ClassDiagram;
use typegram::{CharacterSet, DiagramConfig, DiagramError, OutputFormat};

/// Typegram - Class diagrams from type metadata
#[derive(Parser)]
#[command(name = "typegram")]
#[command(about = "Render class diagrams from type metadata as ASCII boxes or PlantUML")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn, global = true)]
    pub log_level: LogLevel,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact, global = true)]
    pub log_format: LogFormat,
}

/// Log level options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render one type, or every exported type, as a diagram
    Render {
        /// JSON metadata table to read (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Type to render, as Namespace.Name or bare name (all exported types if omitted)
        #[arg(short = 't', long = "type")]
        type_name: Option<String>,

        /// Output notation
        #[arg(short, long, value_enum, default_value_t = FormatChoice::Ascii)]
        format: FormatChoice,

        /// Output file for the diagram (use - for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Strip generic arity markers from PlantUML output
        #[arg(long)]
        sanitize: bool,

        /// Character set for ASCII boxes
        #[arg(long, value_enum, default_value_t = StyleChoice::Unicode)]
        style: StyleChoice,

        /// Box width in columns, borders included
        #[arg(long, default_value_t = DiagramConfig::DEFAULT_BOX_WIDTH)]
        width: usize,

        /// Members shown before a "+K more fields" line
        #[arg(long, default_value_t = DiagramConfig::DEFAULT_MAX_MEMBERS)]
        max_members: usize,

        /// Methods shown before a "+K more methods" line
        #[arg(long, default_value_t = DiagramConfig::DEFAULT_MAX_METHODS)]
        max_methods: usize,
    },

    /// List the lookup keys of every exported type
    List {
        /// JSON metadata table to read (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Show in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Remove generic arity markers from PlantUML text
    Sanitize {
        /// PlantUML input (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file (use - for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check that a metadata table loads
    Validate {
        /// JSON metadata table to validate (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

/// Supported output notations
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum FormatChoice {
    Ascii,
    #[value(name = "plantuml")]
    PlantUml,
    Info,
}

impl From<FormatChoice> for OutputFormat {
    fn from(value: FormatChoice) -> Self {
        match value {
            FormatChoice::Ascii => OutputFormat::Ascii,
            FormatChoice::PlantUml => OutputFormat::PlantUml,
            FormatChoice::Info => OutputFormat::Info,
        }
    }
}

/// Supported box character sets
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum StyleChoice {
    Ascii,
    Unicode,
}

impl From<StyleChoice> for CharacterSet {
    fn from(value: StyleChoice) -> Self {
        match value {
            StyleChoice::Ascii => CharacterSet::Ascii,
            StyleChoice::Unicode => CharacterSet::Unicode,
        }
    }
}

/// Main CLI application
///
/// Holds the analyzed types of the most recently loaded table, keyed by
/// `"{ClassName} ({Namespace})"`.
pub struct TypegramApp {
    analyzer: TypeAnalyzer,
    cache: DiagramCache,
}

impl TypegramApp {
    /// Create a new application instance with an empty cache
    pub fn new() -> Self {
        Self {
            analyzer: TypeAnalyzer::new(),
            cache: DiagramCache::new(),
        }
    }

    fn build_config(
        style: StyleChoice,
        width: usize,
        max_members: usize,
        max_methods: usize,
    ) -> DiagramConfig {
        DiagramConfig::new()
            .with_character_set(style.into())
            .with_box_width(width)
            .with_max_members(max_members)
            .with_max_methods(max_methods)
    }

    /// Run the application with the given CLI arguments
    pub fn run(&mut self, cli: Cli) -> Result<()> {
        // Environment variables take precedence over flags
        let log_level_str = std::env::var("TYPEGRAM_LOG_LEVEL")
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .or_else(|| Some(cli.log_level.as_str().to_string()));

        let log_format_str = std::env::var("TYPEGRAM_LOG_FORMAT")
            .ok()
            .or_else(|| Some(cli.log_format.as_str().to_string()));

        if let Err(e) = init_logging(log_level_str.as_deref(), log_format_str.as_deref()) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("Typegram v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            Commands::Render {
                input,
                type_name,
                format,
                output,
                sanitize,
                style,
                width,
                max_members,
                max_methods,
            } => {
                let config = Self::build_config(style, width, max_members, max_methods);
                self.render_command(
                    input,
                    type_name,
                    format.into(),
                    output,
                    sanitize,
                    config,
                    cli.verbose,
                )
            }
            Commands::List { input, json } => self.list_command(input, json, cli.verbose),
            Commands::Sanitize { input, output } => self.sanitize_command(input, output),
            Commands::Validate { input } => self.validate_command(input, cli.verbose),
        }
    }

    /// Load a metadata table and refill the cache with its exported types
    pub fn load_assembly(&mut self, input: Option<PathBuf>) -> Result<AssemblyMetadata> {
        let assembly = match input {
            Some(path) if path.to_string_lossy() != "-" => AssemblyMetadata::load(&path)?,
            _ => {
                let content = self.read_input(None)?;
                AssemblyMetadata::from_json("<stdin>", &content)?
            }
        };

        self.cache
            .replace_all(self.analyzer.analyze_types(assembly.types()));
        info!(
            assembly = assembly.name.as_str(),
            cached = self.cache.len(),
            "Assembly loaded"
        );
        Ok(assembly)
    }

    /// Handle the render command
    #[allow(clippy::too_many_arguments)]
    fn render_command(
        &mut self,
        input: Option<PathBuf>,
        type_name: Option<String>,
        format: OutputFormat,
        output: Option<PathBuf>,
        sanitize: bool,
        config: DiagramConfig,
        verbose: bool,
    ) -> Result<()> {
        let assembly = self.load_assembly(input)?;

        if verbose {
            eprintln!(
                "Loaded '{}' with {} exported types",
                assembly.name,
                self.cache.len()
            );
        }

        let diagrams: Vec<ClassDiagram> = match type_name {
            Some(name) => {
                let ty = assembly
                    .find_type(&name)
                    .ok_or_else(|| DiagramError::type_not_found(name.as_str()))?;
                let diagram = self.analyzer.analyze_type(ty);
                self.cache.insert(diagram.clone());
                vec![diagram]
            }
            None => self.cache.iter().cloned().collect(),
        };

        let formatter = format.formatter(config);
        let mut text = formatter.format_multiple(&diagrams);

        if sanitize {
            if format == OutputFormat::PlantUml {
                text = sanitize_plantuml(&text);
            } else {
                warn!(%format, "--sanitize only applies to PlantUML output");
            }
        }

        if verbose {
            eprintln!("Rendered {} diagram(s) as {}", diagrams.len(), format);
        }

        self.write_output(output, &text)
    }

    /// Handle the list command
    fn list_command(&mut self, input: Option<PathBuf>, json: bool, verbose: bool) -> Result<()> {
        let assembly = self.load_assembly(input)?;

        if verbose {
            eprintln!("Listing types of '{}'", assembly.name);
        }

        if json {
            let listing = serde_json::json!({
                "assembly": assembly.name,
                "types": self.cache.keys().collect::<Vec<_>>(),
                "total": self.cache.len()
            });
            println!("{}", serde_json::to_string_pretty(&listing)?);
        } else {
            for key in self.cache.keys() {
                println!("{}", key);
            }
            println!();
            println!("Total: {} type(s)", self.cache.len());
        }

        Ok(())
    }

    /// Handle the sanitize command
    fn sanitize_command(&self, input: Option<PathBuf>, output: Option<PathBuf>) -> Result<()> {
        let content = self.read_input(input)?;
        self.write_output(output, &sanitize_plantuml(&content))
    }

    /// Handle the validate command
    fn validate_command(&mut self, input: Option<PathBuf>, verbose: bool) -> Result<()> {
        match self.load_assembly(input) {
            Ok(assembly) => {
                if verbose {
                    eprintln!("Parsed {} type entries", assembly.type_count());
                }
                println!(
                    "✓ Valid metadata table '{}': {} types ({} exported)",
                    assembly.name,
                    assembly.type_count(),
                    self.cache.len()
                );
                Ok(())
            }
            Err(e) => {
                println!("✗ Invalid metadata table: {}", e);
                Err(e)
            }
        }
    }

    /// Analyzed types of the most recently loaded table
    pub fn cache(&self) -> &DiagramCache {
        &self.cache
    }

    /// Read input from file or stdin
    pub fn read_input(&self, input: Option<PathBuf>) -> Result<String> {
        match input {
            Some(path) if path.to_string_lossy() != "-" => {
                let content = fs::read_to_string(&path).map_err(|e| {
                    DiagramError::io("read input file", path.display().to_string(), e)
                })?;
                Ok(content)
            }
            _ => {
                let mut content = String::new();
                io::stdin()
                    .read_to_string(&mut content)
                    .map_err(|e| DiagramError::io("read", "<stdin>", e))?;
                Ok(content)
            }
        }
    }

    /// Write output to file or stdout
    pub fn write_output(&self, output: Option<PathBuf>, content: &str) -> Result<()> {
        match output {
            Some(path) if path.to_string_lossy() != "-" => {
                fs::write(&path, content).map_err(|e| {
                    DiagramError::io("write output file", path.display().to_string(), e)
                })?;
            }
            _ => {
                if content.is_empty() || content.ends_with('\n') {
                    print!("{}", content);
                } else {
                    println!("{}", content);
                }
                io::stdout()
                    .flush()
                    .map_err(|e| DiagramError::io("write", "<stdout>", e))?;
            }
        }
        Ok(())
    }
}

impl Default for TypegramApp {
    fn default() -> Self {
        Self::new()
    }
}
