//! Output formatting shared by the extract and batch commands.

use deedscan_core::{DeedscanConfig, ExtractedRecord, Field, OutputFormat, SellerPhrase};

/// Output format selectable on the command line.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum FormatArg {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Csv => OutputFormat::Csv,
            FormatArg::Text => OutputFormat::Text,
        }
    }
}

/// Seller introduction phrase selectable on the command line.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum SellerPhraseArg {
    /// "The Seller(s) ia/are", as printed on the agreements seen so far
    Observed,
    /// "The Seller(s) is/are"
    Corrected,
    /// Either spelling
    Lenient,
}

impl From<SellerPhraseArg> for SellerPhrase {
    fn from(arg: SellerPhraseArg) -> Self {
        match arg {
            SellerPhraseArg::Observed => SellerPhrase::Observed,
            SellerPhraseArg::Corrected => SellerPhrase::Corrected,
            SellerPhraseArg::Lenient => SellerPhrase::Lenient,
        }
    }
}

/// Resolve the effective format, with the command line taking precedence.
pub fn resolve_format(arg: Option<FormatArg>, config: &DeedscanConfig) -> OutputFormat {
    arg.map(OutputFormat::from).unwrap_or(config.output.format)
}

pub fn format_record(
    record: &ExtractedRecord,
    format: OutputFormat,
    pretty: bool,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json if pretty => Ok(serde_json::to_string_pretty(record)?),
        OutputFormat::Json => Ok(serde_json::to_string(record)?),
        OutputFormat::Csv => format_csv(record),
        OutputFormat::Text => Ok(format_text(record)),
    }
}

fn format_csv(record: &ExtractedRecord) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(Field::ALL.iter().map(|f| f.key()))?;
    wtr.write_record(record.fields().map(|(_, value)| value))?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(record: &ExtractedRecord) -> String {
    let width = Field::ALL
        .iter()
        .map(|f| f.label().len())
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    for (field, value) in record.fields() {
        let label = format!("{}:", field.label());
        output.push_str(&format!("{:<width$} {}\n", label, value, width = width + 1));
    }
    output
}
