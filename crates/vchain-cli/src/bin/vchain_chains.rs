// vchain-chains: Split tagged sentences into verb chains and label them.
//
// Each input line is one sentence of whitespace-separated `word/lemma/TAG`
// tokens. Every verb chain found in it is printed on its own line:
//   chain <TAB> aspect <TAB> strict-aspect <TAB> person/number
// followed by an empty line after each sentence. With --json, each sentence
// becomes one JSON array of chain objects.
//
// Usage:
//   vchain-chains [OPTIONS] [SENTENCE...]
//
// Options:
//   --strict        Use the strict analyzer for the aspect column
//   --forgiving     Use the forgiving analyzer for the aspect column (default)
//   --json          Print one JSON array per sentence
//   -h, --help      Print help

use std::io::{self, Write};

use vchain_cli::ChainRow;
use vchain_core::Sentence;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if vchain_cli::wants_help(&args) {
        println!("vchain-chains: Split tagged sentences into verb chains and label them.");
        println!();
        println!("Usage: vchain-chains [OPTIONS] [SENTENCE...]");
        println!();
        println!("Reads one sentence per line from stdin unless sentences are given as");
        println!("arguments. Tokens are written word/lemma/TAG. Prints one line per chain:");
        println!("  chain <TAB> aspect <TAB> strict-aspect <TAB> person/number");
        println!();
        println!("Options:");
        println!("  --strict        Use the strict analyzer for the aspect column");
        println!("  --forgiving     Use the forgiving analyzer for the aspect column (default)");
        println!("  --json          Print one JSON array per sentence");
        println!("  -h, --help      Print this help");
        return;
    }

    vchain_cli::init_logging();
    let options = vchain_cli::parse_options(&args).unwrap_or_else(|e| vchain_cli::fatal(&e));
    let labeler = vchain_cli::load_labeler(&options).unwrap_or_else(|e| vchain_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for (n, line) in vchain_cli::input_lines(&options).enumerate() {
        let sentence = match Sentence::from_tagged(&line) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("error: line {}: {e}", n + 1);
                continue;
            }
        };

        let chains = labeler.sentence_labels(&sentence);
        log::debug!("sentence {}: {} chains", n + 1, chains.len());

        let written = if options.json {
            let aspects: Vec<String> =
                chains.iter().map(|(chain, _)| labeler.aspect(chain)).collect();
            let rows: Vec<ChainRow<'_>> = chains
                .iter()
                .zip(&aspects)
                .map(|((chain, labels), aspect)| ChainRow::new(chain, aspect, labels))
                .collect();
            vchain_cli::write_json_line(&mut out, &rows)
        } else {
            chains
                .iter()
                .try_for_each(|(chain, labels)| {
                    let aspect = labeler.aspect(chain);
                    vchain_cli::write_chain(&mut out, false, chain, &aspect, labels)
                })
                .and_then(|()| writeln!(out))
        };
        if let Err(e) = written {
            vchain_cli::fatal(&format!("failed to write output: {e}"));
        }
    }
    let _ = out.flush();
}
