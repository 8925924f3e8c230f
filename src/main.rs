mod debug_report;

use std::io::{self, BufRead, IsTerminal, Write};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use turkname::{
    ClassificationResult, Context, Options, Partition, classify_batch_parallel_with, classify_verbose_with, full_name,
    rule_catalog,
};

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    if let Err(err) = run(&config) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Report,
    Verbose,
    Json,
    AcceptedOnly,
    ListRules,
}

struct CliConfig {
    names: Vec<String>,
    mode: OutputMode,
    strict_diacritics: bool,
    color: bool,
}

fn run(config: &CliConfig) -> Result<(), String> {
    let ctx = Context::default();
    let opts = Options { strict_diacritics: config.strict_diacritics };

    match config.mode {
        OutputMode::ListRules => debug_report::print_rules(&rule_catalog(), config.color),
        OutputMode::Verbose => {
            let runs: Vec<_> = config.names.iter().map(|n| classify_verbose_with(n, &ctx, &opts)).collect();
            debug_report::print_verbose(&runs, config.color);
        }
        OutputMode::Report => {
            let results = classify_batch_parallel_with(&config.names, &ctx, &opts);
            debug_report::print_batch(&results, config.color);
        }
        OutputMode::Json => {
            let results = classify_batch_parallel_with(&config.names, &ctx, &opts);
            write_json_lines(&results)?;
        }
        OutputMode::AcceptedOnly => {
            let results = classify_batch_parallel_with(&config.names, &ctx, &opts);
            let partition = Partition::from_results(results);
            let mut out = io::stdout().lock();
            for name in &partition.accepted {
                writeln!(out, "{name}").map_err(|err| format!("error: failed to write output: {err}"))?;
            }
            tracing::debug!(accepted = partition.accepted.len(), total = partition.total(), "filtered export");
        }
    }
    Ok(())
}

fn write_json_lines(results: &[ClassificationResult]) -> Result<(), String> {
    let mut out = io::stdout().lock();
    for result in results {
        let line = serde_json::to_string(result).map_err(|err| format!("error: failed to encode result: {err}"))?;
        writeln!(out, "{line}").map_err(|err| format!("error: failed to write output: {err}"))?;
    }
    Ok(())
}

fn parse_args() -> Result<CliConfig, String> {
    let mut names: Vec<String> = Vec::new();
    let mut mode = OutputMode::Report;
    let mut strict_diacritics = false;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    let mut set_mode = |new: OutputMode, flag: &str| -> Result<(), String> {
        if mode != OutputMode::Report && mode != new {
            return Err(format!("error: {flag} cannot be combined with another output mode"));
        }
        mode = new;
        Ok(())
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("turkname {} (lexicon {})", env!("CARGO_PKG_VERSION"), turkname::LEXICON_VERSION);
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--strict-diacritics" => strict_diacritics = true,
            "--json" => set_mode(OutputMode::Json, "--json")?,
            "--accepted-only" => set_mode(OutputMode::AcceptedOnly, "--accepted-only")?,
            "--verbose" | "-v" => set_mode(OutputMode::Verbose, "--verbose")?,
            "--list-rules" => set_mode(OutputMode::ListRules, "--list-rules")?,
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                names.push(value);
            }
            "--" => {
                let rest = args.by_ref().collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    names.push(rest);
                }
                break;
            }
            _ if arg.starts_with("--input=") => {
                names.push(arg.trim_start_matches("--input=").to_string());
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args.by_ref()).collect::<Vec<_>>().join(" ");
                names.push(rest);
                break;
            }
        }
    }

    if names.is_empty() && mode != OutputMode::ListRules {
        if io::stdin().is_terminal() {
            return Err(format!("error: no input provided\n\n{}", help_text()));
        }
        names = read_names(io::stdin().lock())?;
        if names.is_empty() {
            return Err(format!("error: no input provided\n\n{}", help_text()));
        }
    }

    Ok(CliConfig { names, mode, strict_diacritics, color })
}

/// One name per input row; `first<TAB>last` rows are joined with
/// [`full_name`]. Blank rows stay in place (they classify as empty input) and
/// bytes that are not UTF-8 are replaced, so every row yields a result.
fn read_names(reader: impl BufRead) -> Result<Vec<String>, String> {
    let mut names = Vec::new();
    for line in reader.split(b'\n') {
        let line = line.map_err(|err| format!("error: failed to read stdin: {err}"))?;
        let line = line.strip_suffix(b"\r").unwrap_or(&line);
        names.push(parse_input_line(&String::from_utf8_lossy(line)));
    }
    Ok(names)
}

fn parse_input_line(line: &str) -> String {
    match line.split_once('\t') {
        Some((first, last)) => full_name(first, last.split('\t').next().unwrap_or_default()),
        None => line.trim().to_string(),
    }
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "turkname {version}

Rule-based Turkish name-origin classifier.

Usage:
  turkname [OPTIONS] [--] <name...>
  turkname [OPTIONS] --input <name> [--input <name>...]
  turkname [OPTIONS] < names.txt

Input:
  Remaining arguments form a single name. Without arguments, names are read
  from stdin, one per line; a tab separates first-name and last-name columns.

Options:
  -i, --input <name>         Name to classify. May be repeated.
  --json                     Print one JSON object per name.
  --accepted-only            Print only the accepted names, one per line.
  -v, --verbose              Print the normalized forms and rule trace per name.
  --list-rules               Print the rule set in evaluation order.
  --strict-diacritics        Match the surname and first-name lists only in
                             their Turkish spelling.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Environment:
  RUST_LOG                   Log filter for stderr diagnostics (default: warn).

Exit codes:
  0  Success.
  1  Internal error.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
    )
}
