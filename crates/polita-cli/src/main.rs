mod commands;
mod output;

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand};
use tracing_subscriber::{filter::Directive, EnvFilter};

#[derive(Parser)]
#[command(
    name = "polita",
    version,
    about = "Field extraction tool for Romanian vehicle insurance policies"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract policy fields (name, VIN, plate, validity dates) from a PDF
    Extract {
        /// Path to the policy PDF
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write extracted fields to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Print the reconstructed document text (without extracting fields)
    Text {
        /// Path to the policy PDF
        input_file: PathBuf,
    },
    /// Show the extraction rules: labels, windows and patterns per field
    Rules {
        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Validate hand-entered policy data against the expected formats
    Validate {
        /// Plate number, e.g. "IS 12 ABC"
        #[arg(long, value_name = "VALUE")]
        plate: Option<String>,

        /// VIN, 17 characters
        #[arg(long, value_name = "VALUE")]
        vin: Option<String>,

        /// Phone number in international form, e.g. "+40712345678"
        #[arg(long, value_name = "VALUE")]
        phone: Option<String>,
    },
}

fn init_tracing() {
    let directive = Directive::from_str("warn").expect("built-in directive should be valid");
    let env_filter = EnvFilter::builder()
        .with_default_directive(directive)
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            input_file,
            output,
            out,
        } => commands::extract::run(input_file, &output, out),
        Commands::Text { input_file } => commands::text::run(input_file),
        Commands::Rules { output } => commands::rules::run(&output),
        Commands::Validate { plate, vin, phone } => commands::validate::run(plate, vin, phone),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
