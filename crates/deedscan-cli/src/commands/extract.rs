//! Extract command - pull the five fields from one agreement's transcript.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::Args;
use console::style;
use tracing::{debug, info};

use deedscan_core::{
    AgreementParser, DeedscanConfig, DeedscanError, ExtractionResult, PurchaseAgreementParser,
    RecognizedText,
};

use super::output::{format_record, resolve_format, FormatArg, SellerPhraseArg};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Transcript files of one document, in page order ("-" reads stdin)
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format (default: from config)
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Seller introduction phrase to look for
    #[arg(long, value_enum)]
    seller_phrase: Option<SellerPhraseArg>,

    /// Show which rule produced each field
    #[arg(long)]
    show_rules: bool,
}

pub async fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::config::load(config_path)?;

    let transcript = read_transcript(&args.inputs, &config)?;
    info!(
        "Read {} page(s), {} bytes",
        args.inputs.len(),
        transcript.len()
    );

    let mut parser = PurchaseAgreementParser::from_config(&config.extraction);
    if let Some(phrase) = args.seller_phrase {
        parser = parser.with_seller_phrase(phrase.into());
    }

    let result = parser.parse(transcript.as_str());
    debug!("Extraction took {}ms", result.processing_time_ms);

    let format = resolve_format(args.format, &config);
    let output = format_record(&result.record, format, args.pretty || config.output.pretty)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output.trim_end());
    }

    if args.show_rules {
        print_rules(&result);
    }

    Ok(())
}

/// Read every page and join them into one transcript.
fn read_transcript(inputs: &[PathBuf], config: &DeedscanConfig) -> anyhow::Result<RecognizedText> {
    let mut pages = Vec::with_capacity(inputs.len());

    for input in inputs {
        let page = if input.as_os_str() == "-" {
            read_stdin()?
        } else {
            read_page(input, config.input.max_bytes)?
        };
        pages.push(page);
    }

    let transcript = RecognizedText::from_pages(&pages, &config.input.page_separator);
    if transcript.as_str().trim().is_empty() {
        anyhow::bail!("No text in input");
    }

    Ok(transcript)
}

/// Blank pages are kept so the page count survives; an all-blank document
/// is rejected once the pages are joined.
fn read_page(path: &Path, max_bytes: u64) -> anyhow::Result<String> {
    match RecognizedText::read_from(path, max_bytes) {
        Ok(page) => Ok(page.as_str().to_string()),
        Err(DeedscanError::EmptyTranscript(_)) => {
            debug!("Page {} is blank", path.display());
            Ok(String::new())
        }
        Err(e) => Err(e.into()),
    }
}

fn read_stdin() -> anyhow::Result<String> {
    let mut bytes = Vec::new();
    io::stdin().read_to_end(&mut bytes)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn print_rules(result: &ExtractionResult) {
    eprintln!();
    eprintln!("{}", style("Rules:").bold());
    for resolution in &result.resolutions {
        match resolution.rule {
            Some(rule) => eprintln!(
                "  {} {}: {}",
                style("✓").green(),
                resolution.field.label(),
                rule
            ),
            None => eprintln!(
                "  {} {}: {}",
                style("✗").red(),
                resolution.field.label(),
                style("no rule matched").dim()
            ),
        }
    }
}
