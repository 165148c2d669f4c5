//! Parse command - extract the amount from a single text.

use std::io::Read;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use pricex_core::{AmountResult, FieldExtractor};

use super::{build_extractor, load_config};

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Text or HTML fragment to parse ("-" reads stdin)
    #[arg(required = true)]
    text: String,

    /// Locale hint (e.g. "fr-FR", "en_CA", "CH")
    #[arg(short, long)]
    locale: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Keep interior whitespace runs during sanitization
    #[arg(long)]
    no_collapse: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

pub fn run(args: ParseArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;
    let extractor = build_extractor(&config, args.locale.as_deref(), args.no_collapse)?;

    let text = if args.text == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        args.text
    };

    info!("Parsing {} bytes of input", text.len());

    let Some(result) = extractor.extract(&text) else {
        anyhow::bail!("No amount found in input");
    };

    println!("{}", format_result(&result, args.format, config.output.pretty_json)?);

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

fn format_result(result: &AmountResult, format: OutputFormat, pretty: bool) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json if pretty => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Json => Ok(serde_json::to_string(result)?),
        OutputFormat::Text => {
            let currency = match result.currency_code() {
                Some(code) => style(code).green().to_string(),
                None => style("unknown").yellow().to_string(),
            };
            Ok(format!("Amount:   {}\nCurrency: {}", result.amount(), currency))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricex_core::CurrencyCode;

    #[test]
    fn test_format_json() {
        let result = AmountResult::new(16.85, CurrencyCode::new("EUR"));
        let json = format_result(&result, OutputFormat::Json, false).unwrap();
        assert_eq!(json, r#"{"amount":16.85,"currency_code":"EUR"}"#);
    }

    #[test]
    fn test_format_text() {
        console::set_colors_enabled(false);
        let result = AmountResult::new(1000.0, None);
        let text = format_result(&result, OutputFormat::Text, true).unwrap();
        assert_eq!(text, "Amount:   1000\nCurrency: unknown");
    }
}
