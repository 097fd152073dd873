//! CLI Application logic
//!
//! Contains the command-line interface implementation: compile a report
//! once, render it to either or both output formats.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use ecorep_core::{compile, REPORT_TITLE};
use ecorep_docx::render_docx;
use ecorep_pdf::render_pdf;

use crate::delivery::{download_link, DeliveryFormat};

/// Which output formats to render
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum RenderFormat {
    /// Render both PDF and DOCX
    #[default]
    Both,
    /// Render only the PDF output
    Pdf,
    /// Render only the DOCX output
    Docx,
}

#[derive(Parser)]
#[command(name = "ecorep")]
#[command(author, version, about = "Compile climate reports to PDF and DOCX", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a Markdown report and render it to the output formats
    Report {
        /// Input report file ("-" reads from stdin)
        input: PathBuf,

        /// Output directory for the rendered files
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// Which formats to render
        #[arg(short, long, value_enum, default_value = "both")]
        format: RenderFormat,

        /// Emit HTML download links instead of writing files
        #[arg(long)]
        links: bool,
    },

    /// Compile a report and dump its Document Model as JSON
    Inspect {
        /// Input report file ("-" reads from stdin)
        input: PathBuf,
    },
}

/// Run the CLI application
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Report {
            input,
            output,
            format,
            links,
        } => report_command(&input, &output, format, links),
        Commands::Inspect { input } => inspect_command(&input),
    }
}

/// Read report text from a file or stdin
fn read_report(input: &Path) -> Result<String> {
    if input == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read report from stdin")?;
        Ok(text)
    } else {
        fs::read_to_string(input)
            .with_context(|| format!("Failed to read report file {}", input.display()))
    }
}

fn report_command(
    input: &Path,
    output: &Path,
    format: RenderFormat,
    links: bool,
) -> Result<()> {
    let text = read_report(input)?;

    let mut doc = compile(&text);
    doc.metadata.title = Some(REPORT_TITLE.to_string());

    let render_pdf_output = matches!(format, RenderFormat::Both | RenderFormat::Pdf);
    let render_docx_output = matches!(format, RenderFormat::Both | RenderFormat::Docx);

    if render_pdf_output {
        let bytes = render_pdf(&doc).context("PDF rendering failed")?;
        deliver(&bytes, DeliveryFormat::Pdf, output, links)?;
    }

    if render_docx_output {
        let bytes = render_docx(&doc).context("DOCX rendering failed")?;
        deliver(&bytes, DeliveryFormat::Docx, output, links)?;
    }

    Ok(())
}

fn deliver(bytes: &[u8], format: DeliveryFormat, output: &Path, links: bool) -> Result<()> {
    if links {
        println!("{}", download_link(bytes, format));
        return Ok(());
    }

    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory {}", output.display()))?;
    let path = output.join(format.filename());
    fs::write(&path, bytes)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(())
}

fn inspect_command(input: &Path) -> Result<()> {
    let text = read_report(input)?;
    let doc = compile(&text);
    let json = serde_json::to_string_pretty(&doc).context("Failed to serialize document")?;
    println!("{json}");
    Ok(())
}
