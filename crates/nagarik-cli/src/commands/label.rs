//! Label command - extract entities from a single text document.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use nagarik_core::{annotate, Entity, Labeler, LabelerConfig, LanguageMode, WeakLabeler};

/// Arguments for the label command.
#[derive(Args)]
pub struct LabelArgs {
    /// Input text file ("-" for stdin)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Language mode
    #[arg(short, long, value_enum, default_value = "auto")]
    language: Language,

    /// Print the annotated text instead of the entity list
    #[arg(long)]
    annotate: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON entity list
    Json,
    /// CSV entity table
    Csv,
    /// Plain text summary
    Text,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum Language {
    /// Decide from the text
    Auto,
    /// English (force)
    En,
    /// Nepali (force)
    Ne,
}

impl Language {
    fn to_mode(self) -> LanguageMode {
        match self {
            Language::Auto => LanguageMode::Auto,
            Language::En => LanguageMode::English,
            Language::Ne => LanguageMode::Nepali,
        }
    }
}

pub fn run(args: LabelArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    // Load configuration
    let config = if let Some(path) = config_path {
        LabelerConfig::from_file(std::path::Path::new(path))?
    } else {
        LabelerConfig::default()
    };

    // Read input text
    let text = if args.input.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        if !args.input.exists() {
            anyhow::bail!("Input file not found: {}", args.input.display());
        }
        fs::read_to_string(&args.input)?
    };

    let labeler = WeakLabeler::with_config(config)?;
    let mode = args.language.to_mode();
    let resolved = labeler.resolve_language(&text, mode);

    info!(
        "Labeling {} characters ({} mode)",
        text.chars().count(),
        resolved
    );

    let entities = labeler.label_text(&text, mode);

    let output = if args.annotate {
        // Offsets refer to the corrected text, so render over that.
        annotate(&labeler.normalize(&text), &entities)
    } else {
        format_entities(&entities, resolved, args.format)?
    };

    // Write output
    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} {}",
            style("Wrote").green().bold(),
            output_path.display()
        );
    } else {
        println!("{output}");
    }

    Ok(())
}

fn format_entities(
    entities: &[Entity],
    resolved: LanguageMode,
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(entities)?),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer.write_record(["label", "text", "start", "end"])?;
            for entity in entities {
                writer.write_record([
                    entity.label.as_str(),
                    entity.text.as_str(),
                    &entity.start.to_string(),
                    &entity.end.to_string(),
                ])?;
            }
            let bytes = writer
                .into_inner()
                .map_err(|e| anyhow::anyhow!("failed to flush CSV output: {e}"))?;
            Ok(String::from_utf8(bytes)?)
        }
        OutputFormat::Text => {
            let mut out = String::new();
            out.push_str(&format!("Language: {resolved}\n"));
            out.push_str(&format!("Entities: {}\n", entities.len()));
            for entity in entities {
                out.push_str(&format!(
                    "  {:<24} {:<32} [{}..{})\n",
                    entity.label.as_str(),
                    entity.text,
                    entity.start,
                    entity.end
                ));
            }
            Ok(out)
        }
    }
}
