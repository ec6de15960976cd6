//! Trisynk CLI entry point.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;
use trisynk_core::{BatchOptions, Frontend, FrontendRegistry, run_batch};
use trisynk_ir::{Module, SchemaDefinition};
use trisynk_syntax_cpp::CppFrontend;
use trisynk_syntax_rust::RustFrontend;

#[derive(Parser)]
#[command(name = "trisynk")]
#[command(about = "Multi-language source-to-IR extraction pipeline")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract an IR document from a Rust source file
    Rust {
        /// Input file
        input: PathBuf,

        /// Output path (stdout if absent)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Extract an IR document from a C++ source file
    Cpp {
        /// Input file
        input: PathBuf,

        /// Output path (stdout if absent)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Extract and validate a batch of source files
    Batch {
        /// Input file(s)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Schema file (built-in schema if absent)
        #[arg(long)]
        schema: Option<PathBuf>,

        /// Output directory for IR documents
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("trisynk=info".parse()?))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Rust { input, output } => {
            run_frontend(&RustFrontend::new(), &input, output.as_deref())?;
        }

        Commands::Cpp { input, output } => {
            run_frontend(&CppFrontend::new(), &input, output.as_deref())?;
        }

        Commands::Batch { files, schema, out } => {
            // Schema problems are fatal before any file is scheduled.
            let schema = match schema {
                Some(path) => SchemaDefinition::from_file(&path)?,
                None => SchemaDefinition::default(),
            };

            let registry = FrontendRegistry::new()
                .register(Box::new(RustFrontend::new()))
                .register(Box::new(CppFrontend::new()));
            let options = BatchOptions { out_dir: out };

            info!("processing {} file(s)", files.len());
            let report = run_batch(&files, &registry, &schema, &options);

            for (path, failure) in report.failures() {
                eprintln!("{}: {}", path.display(), failure);
            }
            println!(
                "processed {} artifact(s), {} failed",
                report.processed(),
                report.failed()
            );

            if !report.all_passed() {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn run_frontend(
    frontend: &dyn Frontend,
    input: &Path,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let module = Module::read(input, frontend.language())?;
    let doc = frontend.extract(&module)?;
    let payload = serde_json::to_string_pretty(&doc)?;

    match output {
        Some(path) => std::fs::write(path, payload)?,
        None => println!("{payload}"),
    }
    Ok(())
}
