//! Extract command - pull resume fields from a single document.

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use cvscan_core::export;
use cvscan_core::{
    CvscanConfig, DocumentDecoder, DocumentFormat, ExtractionResult, HeuristicResumeParser,
    NameRule, ParseOutcome, ResumeParser,
};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input file (PDF, DOCX or plain text)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Override an extracted field before output (repeatable)
    #[arg(long = "set", value_name = "FIELD=VALUE")]
    edits: Vec<String>,

    /// Also write the JSON export file named after the input
    #[arg(long)]
    save: bool,

    /// Directory for the JSON export (default: the input's directory)
    #[arg(long, requires = "save")]
    out_dir: Option<PathBuf>,

    /// Accept single-word and all-uppercase names
    #[arg(long)]
    lenient_names: bool,

    /// List fields that could not be extracted
    #[arg(long)]
    show_missing: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub async fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = super::load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let mut parser = HeuristicResumeParser::from_config(&config);
    if args.lenient_names {
        parser = parser.with_name_rule(NameRule::Lenient);
    }

    let outcome = extract_file(&args.input, &parser).await?;
    let result = outcome.result.with_edits(&args.edits)?;

    let output = format_result(&result, args.format, config.export.pretty)?;

    if let Some(output_path) = &args.output {
        tokio::fs::write(output_path, &output).await?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.save {
        let path = save_export(&args.input, args.out_dir.as_deref(), &result, &config)?;
        eprintln!("{} Saved {}", style("✓").green(), path.display());
    }

    if args.show_missing {
        let missing = result.missing_fields();
        if missing.is_empty() {
            eprintln!("{} All fields extracted", style("ℹ").blue());
        } else {
            let names: Vec<&str> = missing.iter().map(|f| f.as_str()).collect();
            eprintln!(
                "{} Missing fields: {}",
                style("ℹ").blue(),
                names.join(", ")
            );
        }
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Read, decode and parse one document.
pub async fn extract_file(
    path: &Path,
    parser: &HeuristicResumeParser,
) -> anyhow::Result<ParseOutcome> {
    let data = tokio::fs::read(path).await?;
    let decoded = DocumentDecoder::new().decode(&data, DocumentFormat::from_path(path));

    if decoded.fell_back {
        eprintln!(
            "{} Could not decode {} as {}, extracting from raw bytes",
            style("⚠").yellow(),
            path.display(),
            decoded.format.as_str()
        );
    }

    let outcome = parser.parse(&decoded.text);
    debug!(
        "{}: {} lines, {} fields missing",
        path.display(),
        outcome.line_count,
        outcome.missing_fields.len()
    );

    Ok(outcome)
}

/// Write the JSON export for `input` into `out_dir` or next to the input.
pub fn save_export(
    input: &Path,
    out_dir: Option<&Path>,
    result: &ExtractionResult,
    config: &CvscanConfig,
) -> anyhow::Result<PathBuf> {
    let dir = match out_dir {
        Some(dir) => dir.to_path_buf(),
        None => input
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")),
    };
    std::fs::create_dir_all(&dir)?;

    let original = input
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();

    Ok(export::write_json(&dir, original, result, &config.export)?)
}

pub fn format_result(
    result: &ExtractionResult,
    format: OutputFormat,
    pretty: bool,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(export::to_json(result, pretty)?),
        OutputFormat::Csv => format_csv(result),
        OutputFormat::Text => Ok(format_text(result)),
    }
}

pub const CSV_HEADER: [&str; 6] = ["name", "email", "phone", "location", "summary", "skills"];

/// CSV cells in [`CSV_HEADER`] order.
pub fn csv_cells(result: &ExtractionResult) -> [String; 6] {
    [
        result.name.clone().unwrap_or_default(),
        result.email.clone().unwrap_or_default(),
        result.phone.clone().unwrap_or_default(),
        result.location.clone().unwrap_or_default(),
        result.summary.clone().unwrap_or_default(),
        skills_list(result, "; "),
    ]
}

fn format_csv(result: &ExtractionResult) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(CSV_HEADER)?;
    wtr.write_record(csv_cells(result))?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(result: &ExtractionResult) -> String {
    fn or_dash(value: &Option<String>) -> &str {
        value.as_deref().unwrap_or("-")
    }

    let mut output = String::new();

    output.push_str(&format!("Name:     {}\n", or_dash(&result.name)));
    output.push_str(&format!("Email:    {}\n", or_dash(&result.email)));
    output.push_str(&format!("Phone:    {}\n", or_dash(&result.phone)));
    output.push_str(&format!("Location: {}\n", or_dash(&result.location)));
    output.push('\n');

    output.push_str("Summary:\n");
    output.push_str(&format!("  {}\n", or_dash(&result.summary)));
    output.push('\n');

    if result.skills.is_empty() {
        output.push_str("Skills: -\n");
    } else {
        output.push_str(&format!("Skills: {}\n", skills_list(result, ", ")));
    }

    output
}

fn skills_list(result: &ExtractionResult, separator: &str) -> String {
    result
        .skills
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(separator)
}
