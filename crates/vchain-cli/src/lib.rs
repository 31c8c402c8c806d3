// vchain-cli: shared utilities for CLI tools.

use std::io::{self, BufRead, Write};
use std::process;

use vchain_core::VerbChain;
use vchain_en::{AnalyzerKind, LabelerOptions, VChainLabeler, VChainLabels};

/// Environment variable holding the log filter (`env_logger` syntax).
pub const LOG_ENV: &str = "VCHAIN_LOG";

/// Environment variable choosing the aspect analyzer when no flag does.
pub const ANALYZER_ENV: &str = "VCHAIN_ANALYZER";

/// Options shared by every tool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOptions {
    /// Aspect analyzer chosen by `--strict` / `--forgiving`.
    pub analyzer: Option<AnalyzerKind>,
    /// Print one JSON value per input line.
    pub json: bool,
    /// Positional arguments, in order.
    pub inputs: Vec<String>,
}

/// Initialise logging from `VCHAIN_LOG`, defaulting to `warn`.
pub fn init_logging() {
    let env = env_logger::Env::default().filter_or(LOG_ENV, "warn");
    // A second initialisation is a no-op.
    let _ = env_logger::Builder::from_env(env).try_init();
}

/// Parse the shared flags out of the command line.
///
/// Anything that is not a known flag is a positional input. `--` ends flag
/// parsing.
pub fn parse_options(args: &[String]) -> Result<CliOptions, String> {
    let mut options = CliOptions::default();
    let mut flags_done = false;

    for arg in args {
        if flags_done {
            options.inputs.push(arg.clone());
            continue;
        }
        match arg.as_str() {
            "--" => flags_done = true,
            "--json" => options.json = true,
            "--strict" | "--forgiving" => {
                let kind = if arg == "--strict" {
                    AnalyzerKind::Strict
                } else {
                    AnalyzerKind::Forgiving
                };
                if options.analyzer.is_some_and(|k| k != kind) {
                    return Err("--strict and --forgiving are mutually exclusive".to_string());
                }
                options.analyzer = Some(kind);
            }
            a if a.starts_with("--") => return Err(format!("unknown option {a}")),
            _ => options.inputs.push(arg.clone()),
        }
    }

    Ok(options)
}

/// The aspect analyzer: the flag if given, else `VCHAIN_ANALYZER`, else the
/// library default.
pub fn resolve_analyzer(flag: Option<AnalyzerKind>) -> Result<AnalyzerKind, String> {
    if let Some(kind) = flag {
        return Ok(kind);
    }
    match std::env::var(ANALYZER_ENV) {
        Ok(value) if !value.trim().is_empty() => value
            .parse::<AnalyzerKind>()
            .map_err(|e| format!("{ANALYZER_ENV}: {e}")),
        _ => Ok(AnalyzerKind::default()),
    }
}

/// Build a labeler for the resolved aspect analyzer.
pub fn load_labeler(options: &CliOptions) -> Result<VChainLabeler, String> {
    let aspect_analyzer = resolve_analyzer(options.analyzer)?;
    log::debug!("aspect analyzer: {aspect_analyzer}");
    let labeler = VChainLabeler::with_options(LabelerOptions { aspect_analyzer });
    labeler.validate().map_err(|e| e.to_string())?;
    Ok(labeler)
}

/// Input lines: the positional arguments if there are any, else stdin.
///
/// Blank lines are skipped.
pub fn input_lines(options: &CliOptions) -> Box<dyn Iterator<Item = String>> {
    if !options.inputs.is_empty() {
        return Box::new(options.inputs.clone().into_iter());
    }
    let lines = io::stdin().lock().lines().map_while(|line| match line {
        Ok(l) => Some(l),
        Err(e) => {
            eprintln!("error reading stdin: {e}");
            None
        }
    });
    Box::new(lines.filter(|l| !l.trim().is_empty()))
}

/// JSON shape of one labelled chain.
#[derive(Debug, serde::Serialize)]
pub struct ChainRow<'a> {
    pub chain: String,
    /// Aspect from the configured aspect analyzer.
    pub aspect: &'a str,
    /// Label pair from the strict analyzer.
    pub labels: &'a VChainLabels,
}

impl<'a> ChainRow<'a> {
    pub fn new(chain: &VerbChain, aspect: &'a str, labels: &'a VChainLabels) -> Self {
        Self {
            chain: chain.to_string(),
            aspect,
            labels,
        }
    }
}

/// JSON shape of one generated phrase.
#[derive(Debug, serde::Serialize)]
pub struct PhraseRow<'a> {
    pub properties: &'a [&'a str],
    pub phrase: &'a str,
    pub labels: &'a VChainLabels,
}

/// Write any row as one line of JSON.
pub fn write_json_line(out: &mut impl Write, row: &impl serde::Serialize) -> io::Result<()> {
    serde_json::to_writer(&mut *out, row)?;
    writeln!(out)
}

/// Write one chain as a tab-separated row or a JSON object.
///
/// `aspect` comes from the configured aspect analyzer, `labels` from the
/// strict analyzer.
pub fn write_chain(
    out: &mut impl Write,
    json: bool,
    chain: &VerbChain,
    aspect: &str,
    labels: &VChainLabels,
) -> io::Result<()> {
    if json {
        write_json_line(out, &ChainRow::new(chain, aspect, labels))
    } else {
        writeln!(out, "{chain}\t{aspect}\t{}\t{}", labels.aspect, labels.person_number)
    }
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn flags_and_inputs() {
        let options = parse_options(&args(&["--json", "is/be/VBZ", "--strict"])).unwrap();
        assert!(options.json);
        assert_eq!(options.analyzer, Some(AnalyzerKind::Strict));
        assert_eq!(options.inputs, ["is/be/VBZ"]);
    }

    #[test]
    fn double_dash_ends_flags() {
        let options = parse_options(&args(&["--", "--json"])).unwrap();
        assert!(!options.json);
        assert_eq!(options.inputs, ["--json"]);
    }

    #[test]
    fn conflicting_analyzers() {
        assert!(parse_options(&args(&["--strict", "--forgiving"])).is_err());
        assert!(parse_options(&args(&["--strict", "--strict"])).is_ok());
    }

    #[test]
    fn unknown_flag() {
        assert_eq!(
            parse_options(&args(&["--lenient"])),
            Err("unknown option --lenient".to_string())
        );
    }

    #[test]
    fn flag_beats_environment() {
        assert_eq!(
            resolve_analyzer(Some(AnalyzerKind::Strict)),
            Ok(AnalyzerKind::Strict)
        );
    }

    #[test]
    fn tab_separated_row() {
        let chain = VerbChain::new(vec![
            "is/be/VBZ".parse().unwrap(),
            "going/go/VBG".parse().unwrap(),
        ]);
        let labels = VChainLabels::new("PR_PROG", "3RD");
        let mut out = Vec::new();
        write_chain(&mut out, false, &chain, "PR_PROG", &labels).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "is going\tPR_PROG\tPR_PROG\t3RD\n");
    }

    #[test]
    fn json_row() {
        let chain = VerbChain::new(vec!["went/go/VBD".parse().unwrap()]);
        let labels = VChainLabels::new("PA_SIMPLE", "ERROR");
        let mut out = Vec::new();
        write_chain(&mut out, true, &chain, "PA_SIMPLE", &labels).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "chain": "went",
                "aspect": "PA_SIMPLE",
                "labels": { "aspect": "PA_SIMPLE", "person_number": "ERROR" },
            })
        );
        assert!(out.ends_with(b"\n"));
    }

    #[test]
    fn phrase_row_shares_label_shape() {
        let labels = VChainLabels::new("SING_PA_PROG", "");
        let properties = ["SINGULAR", "PAST", "PROGRESSIVE"];
        let row = PhraseRow {
            properties: &properties,
            phrase: "was VBG",
            labels: &labels,
        };
        let mut out = Vec::new();
        write_json_line(&mut out, &row).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["properties"], serde_json::json!(properties));
        assert_eq!(value["labels"], serde_json::to_value(&labels).unwrap());
    }
}
