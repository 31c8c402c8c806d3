// vchain-labels: Label verb chains given as tagged tokens.
//
// Each input line is one verb chain written as whitespace-separated
// `word/lemma/TAG` tokens. For each chain prints:
//   chain <TAB> aspect <TAB> strict-aspect <TAB> person/number
//
// Usage:
//   vchain-labels [OPTIONS] [CHAIN...]
//
// Options:
//   --strict        Use the strict analyzer for the aspect column
//   --forgiving     Use the forgiving analyzer for the aspect column (default)
//   --json          Print one JSON object per chain
//   -h, --help      Print help

use std::io::{self, Write};

use vchain_core::{Token, VerbChain};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if vchain_cli::wants_help(&args) {
        println!("vchain-labels: Label verb chains given as tagged tokens.");
        println!();
        println!("Usage: vchain-labels [OPTIONS] [CHAIN...]");
        println!();
        println!("Reads one chain per line from stdin unless chains are given as");
        println!("arguments. Tokens are written word/lemma/TAG. Prints:");
        println!("  chain <TAB> aspect <TAB> strict-aspect <TAB> person/number");
        println!();
        println!("Options:");
        println!("  --strict        Use the strict analyzer for the aspect column");
        println!("  --forgiving     Use the forgiving analyzer for the aspect column (default)");
        println!("  --json          Print one JSON object per chain");
        println!("  -h, --help      Print this help");
        println!();
        println!("Environment:");
        println!("  {}   strict | forgiving", vchain_cli::ANALYZER_ENV);
        println!("  {}        log filter (default: warn)", vchain_cli::LOG_ENV);
        return;
    }

    vchain_cli::init_logging();
    let options = vchain_cli::parse_options(&args).unwrap_or_else(|e| vchain_cli::fatal(&e));
    let labeler = vchain_cli::load_labeler(&options).unwrap_or_else(|e| vchain_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for (n, line) in vchain_cli::input_lines(&options).enumerate() {
        let tokens: Result<Vec<Token>, _> = line.split_whitespace().map(str::parse).collect();
        let chain = match tokens {
            Ok(tokens) => VerbChain::new(tokens),
            Err(e) => {
                eprintln!("error: line {}: {e}", n + 1);
                continue;
            }
        };

        let aspect = labeler.aspect(&chain);
        let labels = labeler.labels(&chain);
        if let Err(e) = vchain_cli::write_chain(&mut out, options.json, &chain, &aspect, &labels) {
            vchain_cli::fatal(&format!("failed to write output: {e}"));
        }
    }
    let _ = out.flush();
}
