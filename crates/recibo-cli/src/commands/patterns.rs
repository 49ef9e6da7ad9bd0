//! Patterns command - smoke-test the built-in pattern library.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;

use recibo_core::PatternLibrary;

/// Yape-style receipt used when no sample file is given.
const SAMPLE_TEXT: &str = "10:38 AM
yape
¡Yapeaste!
S/50
Ely F. Leguia O.
21 ene. 2025 - 10:38 am
N° de celular: *** *** 480
Destino: Yape
N° de operación: 06144082";

/// Arguments for the patterns command.
#[derive(Args)]
pub struct PatternsArgs {
    /// Sample text file to match against (default: built-in receipt)
    #[arg(short, long)]
    sample: Option<PathBuf>,
}

pub fn run(args: PatternsArgs) -> anyhow::Result<()> {
    let sample = match &args.sample {
        Some(path) => fs::read_to_string(path)?,
        None => SAMPLE_TEXT.to_string(),
    };

    let library = PatternLibrary::builtin();
    for (category, patterns) in library.all_patterns() {
        println!("{}", style(category.name()).bold());
        for pattern in patterns {
            match pattern.captures(&sample) {
                Some(caps) => {
                    let captured = caps.get(1).map(|m| m.as_str().trim()).unwrap_or("");
                    println!(
                        "  {} {}  ->  {}",
                        style("match").green(),
                        pattern.as_str(),
                        captured
                    );
                }
                None => println!("  {}  {}", style("miss").dim(), pattern.as_str()),
            }
        }
    }

    Ok(())
}
