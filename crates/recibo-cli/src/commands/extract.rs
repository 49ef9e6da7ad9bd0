//! Extract command - run the pipeline over a raw OCR text dump.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use console::style;

use recibo_core::{ExtractedVoucherData, VoucherParser};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input text file ("-" for stdin)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Show the completeness score
    #[arg(long)]
    show_confidence: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

pub fn run(args: ExtractArgs) -> anyhow::Result<()> {
    let raw = if args.input.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        if !args.input.exists() {
            anyhow::bail!("input file not found: {}", args.input.display());
        }
        fs::read_to_string(&args.input)?
    };

    let parser = VoucherParser::new();
    let outcome = parser.parse(&raw)?;

    let rendered = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&outcome.data)?,
        OutputFormat::Text => render_text(&outcome.data),
    };

    if let Some(path) = &args.output {
        fs::write(path, &rendered)?;
        println!("{} {}", style("Wrote").green(), path.display());
    } else {
        println!("{rendered}");
    }

    for warning in &outcome.warnings {
        eprintln!("{} {}", style("warning:").yellow(), warning);
    }
    if args.show_confidence {
        eprintln!("completeness: {:.1}%", outcome.confidence);
    }

    Ok(())
}

fn render_text(data: &ExtractedVoucherData) -> String {
    let mut lines = Vec::new();

    let optional = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());
    lines.push(format!(
        "Amount:      {}",
        data.amount.map(|a| a.to_string()).unwrap_or_else(|| "-".to_string())
    ));
    lines.push(format!("Date:        {}", optional(&data.transaction_date)));
    lines.push(format!("Number:      {}", optional(&data.transaction_number)));
    lines.push(format!("Merchant:    {}", optional(&data.merchant_name)));
    lines.push(format!("Currency:    {}", data.currency));
    lines.push(format!(
        "Tax (IGV):   {}",
        data.tax_amount.map(|a| a.to_string()).unwrap_or_else(|| "-".to_string())
    ));

    if !data.items.is_empty() {
        lines.push("Items:".to_string());
        for item in &data.items {
            lines.push(format!(
                "  {} x{} @ {} = {}",
                item.description, item.quantity, item.unit_price, item.total_price
            ));
        }
    }

    lines.join("\n")
}
