// dmetaphone-match: Compare words by their Double Metaphone codes.
//
// Compares A and B when both are given, otherwise reads tab-separated
// pairs from stdin (one pair per line). Output, one line per pair:
//   level<TAB>a<TAB>codes_a<TAB>b<TAB>codes_b
//
// Levels, strongest first: strong, normal, minimal, none.
//
// Usage:
//   dmetaphone-match [OPTIONS] [A B]
//
// Options:
//   --max-length N    Truncate codes to N characters before comparing
//   --json            Print one JSON object per pair
//   -v, --verbose     More logging on stderr (repeat for trace level)
//   -h, --help        Print help

use std::io::{self, BufRead, Write};

use metaphone_cli::{CliError, CliOptions};
use metaphone_double::Encoder;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if metaphone_cli::wants_help(&args) {
        println!("dmetaphone-match: Compare words by their Double Metaphone codes.");
        println!();
        println!("Usage: dmetaphone-match [OPTIONS] [A B]");
        println!();
        println!("If A and B are given, compares them.");
        println!("Otherwise reads tab-separated pairs from stdin. Prints:");
        println!("  level<TAB>a<TAB>codes_a<TAB>b<TAB>codes_b");
        println!();
        println!("Levels: strong, normal, minimal, none");
        println!();
        println!("Options:");
        println!("  --max-length N    Truncate codes to N characters before comparing");
        println!("  --json            Print one JSON object per pair");
        println!("  -v, --verbose     More logging on stderr (repeat for trace level)");
        println!("  -h, --help        Print this help");
        return;
    }

    let options =
        metaphone_cli::parse_args(&args).unwrap_or_else(|e| metaphone_cli::fatal(&e.to_string()));
    if options.trace {
        metaphone_cli::fatal("--trace is not supported by dmetaphone-match");
    }
    if let Err(e) = metaphone_cli::init_logging(options.verbose) {
        metaphone_cli::fatal(&e.to_string());
    }

    if let Err(e) = run(&options) {
        metaphone_cli::fatal(&e.to_string());
    }
}

fn run(options: &CliOptions) -> Result<(), CliError> {
    let encoder = Encoder::new(options.encoder_options());
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    match options.words.as_slice() {
        [] => {
            for (lineno, line) in io::stdin().lock().lines().enumerate() {
                let line = line?;
                if line.trim().is_empty() {
                    continue;
                }
                match line.split_once('\t') {
                    Some((a, b)) => compare(&encoder, options, a.trim(), b.trim(), &mut out)?,
                    None => log::warn!("line {}: expected two tab-separated words", lineno + 1),
                }
            }
        }
        [a, b] => compare(&encoder, options, a, b, &mut out)?,
        _ => metaphone_cli::fatal("expected exactly two words, or none to read stdin"),
    }

    out.flush()?;
    Ok(())
}

fn compare(
    encoder: &Encoder,
    options: &CliOptions,
    a: &str,
    b: &str,
    out: &mut impl Write,
) -> Result<(), CliError> {
    for word in [a, b] {
        metaphone_cli::check_encodable(word);
    }

    let code_a = encoder.encode(a);
    let code_b = encoder.encode(b);
    let level = code_a.match_level(&code_b);
    log::debug!("{a} ~ {b}: {level}");

    let line = if options.json {
        metaphone_cli::format_match_json(level, (a, &code_a), (b, &code_b))?
    } else {
        metaphone_cli::format_match(level, (a, &code_a), (b, &code_b))
    };
    writeln!(out, "{line}")?;
    Ok(())
}
