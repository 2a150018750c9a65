use anyhow::{Context, Result};
use clap::{Arg, Command};
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::Path;

use extract_snippets::Extractor;

fn main() -> Result<()> {
    let matches = Command::new("extract_snippets")
        .version("0.1.0")
        .about("Extracts highlighted regions and referenced code files from markup input")
        .arg(
            Arg::new("inputs")
                .value_name("FILE")
                .num_args(0..)
                .help("Markup files to scan in order; reads standard input when omitted"),
        )
        .get_matches();

    let inputs: Vec<String> = matches
        .get_many::<String>("inputs")
        .unwrap_or_default()
        .cloned()
        .collect();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    // One extractor for the whole run: region state carries across inputs
    // as if they were a single stream.
    let mut extractor = Extractor::new(Path::new("downloads/code"));

    if inputs.is_empty() {
        let stdin = io::stdin();
        extractor.process(stdin.lock(), &mut out)?;
    } else {
        for input in &inputs {
            let file =
                File::open(input).with_context(|| format!("Error opening file {}", input))?;
            extractor.process(BufReader::new(file), &mut out)?;
        }
    }

    Ok(())
}
