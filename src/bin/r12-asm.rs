use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use r12_rs::compile;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Assemble R12 source into 12-bit binary instruction words"
)]
struct Opts {
    /// Input assembly file (one instruction per line)
    #[arg(value_name = "SOURCE")]
    input: PathBuf,
    /// Output format for the encoded instructions
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Write output to file instead of stdout
    #[arg(long, value_name = "FILE")]
    out: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let opts = Opts::parse();
    let text = fs::read_to_string(&opts.input)?;
    let output = compile(text.lines());

    for d in &output.diagnostics {
        eprintln!("{d}");
    }

    let rendered = match opts.format {
        OutputFormat::Text => {
            let mut s = output.instructions.join("\n");
            if !s.is_empty() {
                s.push('\n');
            }
            s
        }
        OutputFormat::Json => serde_json::to_string_pretty(&output)?,
    };

    if let Some(path) = opts.out {
        fs::write(path, rendered)?;
    } else {
        print!("{rendered}");
    }

    if !output.is_clean() {
        std::process::exit(1);
    }
    Ok(())
}
