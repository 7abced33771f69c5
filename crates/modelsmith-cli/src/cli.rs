//! Command-line interface for the modelsmith utility
//!
//! Provides a CLI over the two pipelines: Java skeleton generation from a
//! class diagram, and model-project packaging from a PHP source archive.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use modelsmith::core::logging::init_logging;
use modelsmith::core::{ClassModel, DiskWorkspace, Extractor};
use modelsmith::pipelines::project::PhpExtractor;
use modelsmith::pipelines::skeleton::DiagramExtractor;
use modelsmith::pipelines::{
    detect_source_kind, ProjectConfig, ProjectPipeline, SkeletonPipeline, SourceKind,
};

/// Modelsmith - class-model extraction and code generation
#[derive(Parser)]
#[command(name = "modelsmith")]
#[command(about = "Extract class models from textual sources and regenerate them as code or XML")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error)
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
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
    /// Generate Java skeleton classes from a class diagram
    Generate {
        /// Diagram file to read
        #[arg(short, long, default_value = "company.puml")]
        input: PathBuf,

        /// Directory the .java files are written into
        #[arg(long, default_value = "generated_java")]
        out_dir: PathBuf,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Package a PHP source archive into a UML model project
    Package {
        /// Source zip archive to read
        #[arg(short, long, default_value = "Apps.zip")]
        input: PathBuf,

        /// Output project archive
        #[arg(short, long, default_value = "GeneratedProject.vpp")]
        output: PathBuf,
    },

    /// Extract a class model from one source file and print it as JSON
    Inspect {
        /// Input file to analyze (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

/// Main CLI application
pub struct ModelsmithApp;

impl ModelsmithApp {
    /// Create a new application instance
    pub fn new() -> Self {
        Self
    }

    /// Run the application with the given CLI arguments
    pub fn run(&self, cli: Cli) -> Result<()> {
        // Environment variables take precedence over CLI flags
        let log_level_str = std::env::var("MODELSMITH_LOG_LEVEL")
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .or_else(|| Some(cli.log_level.as_str().to_string()));

        let log_format_str = std::env::var("MODELSMITH_LOG_FORMAT")
            .ok()
            .or_else(|| Some(cli.log_format.as_str().to_string()));

        if let Err(e) = init_logging(log_level_str.as_deref(), log_format_str.as_deref()) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("Modelsmith v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            Commands::Generate {
                input,
                out_dir,
                json,
            } => self.generate_command(input, out_dir, json, cli.verbose),
            Commands::Package { input, output } => {
                self.package_command(input, output, cli.verbose)
            }
            Commands::Inspect { input } => self.inspect_command(input, cli.verbose),
        }
    }

    /// Handle the generate command
    fn generate_command(
        &self,
        input: PathBuf,
        out_dir: PathBuf,
        json: bool,
        verbose: bool,
    ) -> Result<()> {
        let content = self.read_input(Some(input))?;

        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        fs::create_dir_all(&out_dir)
            .map_err(|e| anyhow!("Failed to create '{}': {}", out_dir.display(), e))?;
        let mut workspace = DiskWorkspace::new(&out_dir);
        let report = SkeletonPipeline::new().run(&content, &mut workspace)?;

        if json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!(
                "Generated {} Java classes in folder '{}'",
                report.class_count,
                out_dir.display()
            );
        }
        Ok(())
    }

    /// Handle the package command
    fn package_command(&self, input: PathBuf, output: PathBuf, verbose: bool) -> Result<()> {
        let config = ProjectConfig {
            output,
            ..Default::default()
        };
        let pipeline = ProjectPipeline::with_config(config);
        let report = pipeline.run(&input)?;

        if verbose {
            eprintln!(
                "Scanned {} source files, {} classes",
                report.source_files, report.class_count
            );
        }

        println!("Model project generated: {}", report.output.display());
        Ok(())
    }

    /// Handle the inspect command
    fn inspect_command(&self, input: Option<PathBuf>, verbose: bool) -> Result<()> {
        let content = self.read_input(input)?;

        let kind = detect_source_kind(&content);
        if verbose {
            eprintln!("Detected source kind: {}", kind);
        }

        let extractor: Box<dyn Extractor> = match kind {
            SourceKind::Diagram => Box::new(DiagramExtractor::new()),
            SourceKind::PhpSource => Box::new(PhpExtractor::new()),
        };

        let mut model = ClassModel::new();
        extractor.extract(&content, &mut model)?;

        println!("{}", serde_json::to_string_pretty(&model)?);
        Ok(())
    }

    /// Read input from file or stdin, tolerating malformed encodings
    pub fn read_input(&self, input: Option<PathBuf>) -> Result<String> {
        match input {
            Some(path) => {
                if path.to_string_lossy() == "-" {
                    let mut bytes = Vec::new();
                    io::stdin().read_to_end(&mut bytes)?;
                    Ok(String::from_utf8_lossy(&bytes).into_owned())
                } else {
                    let bytes = fs::read(&path).map_err(|e| {
                        anyhow!("Failed to read input file '{}': {}", path.display(), e)
                    })?;
                    Ok(String::from_utf8_lossy(&bytes).into_owned())
                }
            }
            None => {
                let mut bytes = Vec::new();
                io::stdin().read_to_end(&mut bytes)?;
                Ok(String::from_utf8_lossy(&bytes).into_owned())
            }
        }
    }
}

impl Default for ModelsmithApp {
    fn default() -> Self {
        Self::new()
    }
}
