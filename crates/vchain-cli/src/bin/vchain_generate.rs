// vchain-generate: Generate auxiliary phrases from grammatical properties.
//
// Each input line is a comma-separated property sequence, e.g.
//   3RD,PRESENT,PROGRESSIVE
//   3RD,,PERFECT PROGRESSIVE
// An empty field is the "unspecified" property. For each line prints:
//   properties <TAB> phrase <TAB> aspect <TAB> person/number
// where the labels come from analyzing the generated phrase again with the
// strict analyzer (ERROR when generation fails).
//
// Usage:
//   vchain-generate [OPTIONS] [PROPERTIES...]
//
// Options:
//   --json          Print one JSON object per line
//   -h, --help      Print help

use std::io::{self, Write};

use vchain_cli::PhraseRow;
use vchain_en::VChainLabels;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if vchain_cli::wants_help(&args) {
        println!("vchain-generate: Generate auxiliary phrases from grammatical properties.");
        println!();
        println!("Usage: vchain-generate [OPTIONS] [PROPERTIES...]");
        println!();
        println!("Reads comma-separated property sequences, one per line, from stdin");
        println!("unless they are given as arguments. Properties:");
        println!("  1ST 3RD SINGULAR PLURAL PAST PRESENT PERFECT");
        println!("  \"PERFECT PROGRESSIVE\" PROGRESSIVE and the empty property");
        println!();
        println!("Prints:");
        println!("  properties <TAB> phrase <TAB> aspect <TAB> person/number");
        println!();
        println!("Options:");
        println!("  --json          Print one JSON object per line");
        println!("  -h, --help      Print this help");
        return;
    }

    vchain_cli::init_logging();
    let options = vchain_cli::parse_options(&args).unwrap_or_else(|e| vchain_cli::fatal(&e));
    let labeler = vchain_cli::load_labeler(&options).unwrap_or_else(|e| vchain_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in vchain_cli::input_lines(&options) {
        let properties: Vec<&str> = line.split(',').map(str::trim).collect();
        let phrase = labeler.generate_phrase(&properties);
        let labels = labeler
            .regenerate(&properties)
            .unwrap_or_else(|_| VChainLabels::error());

        let written = if options.json {
            let row = PhraseRow {
                properties: &properties,
                phrase: &phrase,
                labels: &labels,
            };
            vchain_cli::write_json_line(&mut out, &row)
        } else {
            writeln!(
                out,
                "{}\t{phrase}\t{}\t{}",
                line.trim(),
                labels.aspect,
                labels.person_number
            )
        };
        if let Err(e) = written {
            vchain_cli::fatal(&format!("failed to write output: {e}"));
        }
    }
    let _ = out.flush();
}
