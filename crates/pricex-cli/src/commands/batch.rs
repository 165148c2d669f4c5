//! Batch command - extract one amount per input line.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::{debug, info};

use pricex_core::{AmountExtractor, FieldExtractor};

use super::{build_extractor, load_config};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input file with one text or HTML fragment per line
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: BatchFormat,

    /// Locale hint applied to every line
    #[arg(short, long)]
    locale: Option<String>,

    /// Keep interior whitespace runs during sanitization
    #[arg(long)]
    no_collapse: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum BatchFormat {
    /// One JSON object per line
    Json,
    /// CSV with a header row
    Csv,
}

/// Result of parsing a single line.
#[derive(Debug, Clone, PartialEq, Serialize)]
struct BatchRow {
    line: usize,
    amount: Option<f64>,
    currency_code: Option<&'static str>,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;
    let extractor = build_extractor(&config, args.locale.as_deref(), args.no_collapse)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let content = fs::read_to_string(&args.input)?;
    info!("Processing file: {}", args.input.display());

    let lines: Vec<(usize, &str)> = content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| (i + 1, line))
        .collect();

    let pb = ProgressBar::new(lines.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len}")?
            .progress_chars("##-"),
    );

    let rows = parse_lines(&extractor, &lines, &pb);
    pb.finish_and_clear();

    let parsed = rows.iter().filter(|row| row.amount.is_some()).count();
    let failed = rows.len() - parsed;

    let kept: Vec<&BatchRow> = rows
        .iter()
        .filter(|row| config.output.include_failures || row.amount.is_some())
        .collect();

    let output = match args.format {
        BatchFormat::Json => format_json_lines(&kept)?,
        BatchFormat::Csv => format_csv(&kept)?,
    };

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        eprintln!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        std::io::stdout().write_all(output.as_bytes())?;
    }

    eprintln!(
        "{} {} parsed, {} without amount",
        style("ℹ").blue(),
        style(parsed).green(),
        if failed > 0 {
            style(failed).yellow()
        } else {
            style(failed).dim()
        }
    );

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

fn parse_lines(extractor: &AmountExtractor, lines: &[(usize, &str)], pb: &ProgressBar) -> Vec<BatchRow> {
    lines
        .iter()
        .map(|(line, text)| {
            let result = extractor.extract(text);
            pb.inc(1);
            BatchRow {
                line: *line,
                amount: result.map(|r| r.amount()),
                currency_code: result.and_then(|r| r.currency_code()),
            }
        })
        .collect()
}

fn format_json_lines(rows: &[&BatchRow]) -> anyhow::Result<String> {
    let mut output = String::new();
    for row in rows {
        output.push_str(&serde_json::to_string(row)?);
        output.push('\n');
    }
    Ok(output)
}

fn format_csv(rows: &[&BatchRow]) -> anyhow::Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    // serialize() only writes the header with the first row
    if rows.is_empty() {
        writer.write_record(["line", "amount", "currency_code"])?;
    }
    Ok(String::from_utf8(writer.into_inner()?)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rows() -> Vec<BatchRow> {
        let extractor = AmountExtractor::new().with_locale("fr-FR".parse().unwrap());
        let lines: [(usize, &str); 3] = [
            (1, "<span>16,85&nbsp;€</span>"),
            (3, "100 USD"),
            (4, "rupture de stock"),
        ];
        parse_lines(&extractor, &lines, &ProgressBar::hidden())
    }

    #[test]
    fn test_parse_lines() {
        assert_eq!(
            rows(),
            vec![
                BatchRow { line: 1, amount: Some(16.85), currency_code: Some("EUR") },
                BatchRow { line: 3, amount: Some(100.0), currency_code: Some("USD") },
                BatchRow { line: 4, amount: None, currency_code: None },
            ]
        );
    }

    #[test]
    fn test_format_csv() {
        let rows = rows();
        let refs: Vec<&BatchRow> = rows.iter().collect();
        let csv = format_csv(&refs).unwrap();
        assert_eq!(csv, "line,amount,currency_code\n1,16.85,EUR\n3,100.0,USD\n4,,\n");
    }

    #[test]
    fn test_format_csv_empty() {
        assert_eq!(format_csv(&[]).unwrap(), "line,amount,currency_code\n");
    }

    #[test]
    fn test_format_json_lines() {
        let rows = rows();
        let refs: Vec<&BatchRow> = rows.iter().take(1).collect();
        assert_eq!(
            format_json_lines(&refs).unwrap(),
            "{\"line\":1,\"amount\":16.85,\"currency_code\":\"EUR\"}\n"
        );
    }
}
