//! gradecalc CLI — serve the grade form or compute grades from a sheet.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "gradecalc", version, about = "Term grade calculator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the grade form over HTTP
    Serve {
        /// Address to listen on (overrides config)
        #[arg(long)]
        bind: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Compute grades from a TOML grade sheet
    Compute {
        /// Path to the grade sheet
        #[arg(long)]
        sheet: PathBuf,

        /// Output format: text, json, html
        #[arg(long, default_value = "text")]
        format: String,

        /// Write output to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Final exam score needed to reach target overall grades
    Required {
        /// Prelim term grade
        #[arg(long, allow_negative_numbers = true)]
        prelim: f64,

        /// Midterm term grade
        #[arg(long, allow_negative_numbers = true)]
        midterm: f64,

        /// Target overall grades (comma-separated)
        #[arg(long, default_value = "75,90")]
        target: String,
    },

    /// Create a starter config and example grade sheet
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gradecalc=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve { bind, config } => commands::serve::execute(bind, config).await,
        Commands::Compute {
            sheet,
            format,
            output,
        } => commands::compute::execute(sheet, format, output),
        Commands::Required {
            prelim,
            midterm,
            target,
        } => commands::required::execute(prelim, midterm, target),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
