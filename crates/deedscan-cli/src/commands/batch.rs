//! Batch command - extract fields from many transcript files.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, error, warn};

use deedscan_core::{
    AgreementExtractor, ExtractedRecord, Field, OutputFormat, PurchaseAgreementParser,
    RecognizedText,
};

use super::output::{format_record, resolve_format, FormatArg, SellerPhraseArg};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Glob pattern matching transcript files, one document per file
    #[arg(required = true)]
    input: String,

    /// Output directory (default: print each record to stdout)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file (default: from config)
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Number of parallel workers
    #[arg(short = 'j', long, default_value = "4")]
    jobs: usize,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,

    /// Seller introduction phrase to look for
    #[arg(long, value_enum)]
    seller_phrase: Option<SellerPhraseArg>,
}

/// Result of processing a single file.
struct FileResult {
    path: PathBuf,
    /// Path below the glob's base directory; names the output file.
    relative: PathBuf,
    outcome: Result<ExtractedRecord, String>,
    processing_time_ms: u64,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = super::config::load(config_path)?;

    let mut files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file() && config.input.accepts(p))
        .collect();
    files.sort();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    eprintln!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let mut parser = PurchaseAgreementParser::from_config(&config.extraction);
    if let Some(phrase) = args.seller_phrase {
        parser = parser.with_seller_phrase(phrase.into());
    }
    let parser = Arc::new(parser);
    let semaphore = Arc::new(Semaphore::new(args.jobs.max(1)));
    let max_bytes = config.input.max_bytes;

    let mut tasks = JoinSet::new();
    let base = glob_base(&args.input);
    for path in files {
        let relative = relative_to_base(&path, &base);
        let parser = Arc::clone(&parser);
        let semaphore = Arc::clone(&semaphore);

        tasks.spawn(async move {
            let _permit = semaphore.acquire_owned().await?;
            let file_start = Instant::now();

            let task_path = path.clone();
            let outcome =
                tokio::task::spawn_blocking(move || extract_single_file(&task_path, &parser, max_bytes))
                    .await?;

            Ok::<_, anyhow::Error>(FileResult {
                path,
                relative,
                outcome: outcome.map_err(|e| e.to_string()),
                processing_time_ms: file_start.elapsed().as_millis() as u64,
            })
        });
    }

    let mut results = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        let result = joined??;

        if let Err(error_msg) = &result.outcome {
            if args.continue_on_error {
                warn!("Failed to process {}: {}", result.path.display(), error_msg);
            } else {
                error!("Failed to process {}: {}", result.path.display(), error_msg);
                tasks.abort_all();
                pb.abandon();
                anyhow::bail!("Processing failed for {}: {}", result.path.display(), error_msg);
            }
        }

        results.push(result);
        pb.inc(1);
    }

    pb.finish_and_clear();
    results.sort_by(|a, b| a.path.cmp(&b.path));

    let format = resolve_format(args.format, &config);
    for result in &results {
        if let Ok(record) = &result.outcome {
            write_record(result, record, format, config.output.pretty, args.output_dir.as_deref())?;
        }
    }

    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &results)?;
        eprintln!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let failed: Vec<_> = results.iter().filter(|r| r.outcome.is_err()).collect();

    eprintln!();
    eprintln!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    eprintln!(
        "   {} successful, {} failed",
        style(results.len() - failed.len()).green(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        eprintln!();
        eprintln!("{}", style("Failed files:").red());
        for result in &failed {
            if let Err(error_msg) = &result.outcome {
                eprintln!("  - {}: {}", result.path.display(), error_msg);
            }
        }
    }

    Ok(())
}

fn extract_single_file(
    path: &Path,
    parser: &PurchaseAgreementParser,
    max_bytes: u64,
) -> anyhow::Result<ExtractedRecord> {
    let transcript = RecognizedText::read_from(path, max_bytes)?;
    Ok(parser.extract(&transcript))
}

fn write_record(
    result: &FileResult,
    record: &ExtractedRecord,
    format: OutputFormat,
    pretty: bool,
    output_dir: Option<&Path>,
) -> anyhow::Result<()> {
    let content = format_record(record, format, pretty)?;

    match output_dir {
        Some(output_dir) => {
            let output_path = output_dir
                .join(&result.relative)
                .with_extension(format.extension());
            if let Some(parent) = output_path.parent() {
                fs::create_dir_all(parent)?;
            }

            fs::write(&output_path, content)?;
            debug!("Wrote output to {}", output_path.display());
        }
        None => {
            println!("==> {} <==", result.path.display());
            println!("{}", content.trim_end());
        }
    }

    Ok(())
}

/// Directory part of a glob pattern before its first wildcard component.
fn glob_base(pattern: &str) -> PathBuf {
    Path::new(pattern)
        .components()
        .take_while(|c| !c.as_os_str().to_string_lossy().contains(['*', '?', '[']))
        .collect()
}

/// `path` below `base`, or just its file name when it is not under `base`.
fn relative_to_base(path: &Path, base: &Path) -> PathBuf {
    match path.strip_prefix(base) {
        Ok(rel) if !rel.as_os_str().is_empty() => rel.to_path_buf(),
        _ => path
            .file_name()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("agreement")),
    }
}

fn write_summary(path: &Path, results: &[FileResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    let mut header = vec!["filename", "status"];
    header.extend(Field::ALL.iter().map(|f| f.key()));
    header.extend(["processing_time_ms", "error"]);
    wtr.write_record(&header)?;

    for result in results {
        let filename = result.relative.to_string_lossy();
        let time = result.processing_time_ms.to_string();

        let mut row = vec![filename.as_ref()];
        match &result.outcome {
            Ok(record) => {
                row.push("success");
                row.extend(record.fields().map(|(_, value)| value));
                row.extend([time.as_str(), ""]);
            }
            Err(error_msg) => {
                row.push("error");
                row.extend(Field::ALL.iter().map(|_| ""));
                row.extend([time.as_str(), error_msg.as_str()]);
            }
        }
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}
