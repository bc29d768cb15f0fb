// dmetaphone: Print the Double Metaphone codes of words.
//
// Encodes each WORD argument, or each non-empty stdin line when no words
// are given. Output, one line per word:
//   word<TAB>primary<TAB>secondary
//
// Usage:
//   dmetaphone [OPTIONS] [WORD...]
//
// Options:
//   --max-length N    Truncate both codes to N characters
//   --json            Print one JSON object per word
//   --trace           Print every scan step instead of the codes
//                     (full codes; not combinable with --max-length)
//   -v, --verbose     More logging on stderr (repeat for trace level)
//   -h, --help        Print help

use std::io::{self, BufRead, Write};

use metaphone_cli::{CliError, CliOptions};
use metaphone_double::Encoder;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if metaphone_cli::wants_help(&args) {
        println!("dmetaphone: Print the Double Metaphone codes of words.");
        println!();
        println!("Usage: dmetaphone [OPTIONS] [WORD...]");
        println!();
        println!("If WORD arguments are given, encodes each word.");
        println!("Otherwise reads words from stdin (one per line). Prints:");
        println!("  word<TAB>primary<TAB>secondary");
        println!();
        println!("Options:");
        println!("  --max-length N    Truncate both codes to N characters");
        println!("  --json            Print one JSON object per word");
        println!("  --trace           Print every scan step instead of the codes");
        println!("                    (full codes; not combinable with --max-length)");
        println!("  -v, --verbose     More logging on stderr (repeat for trace level)");
        println!("  -h, --help        Print this help");
        println!();
        println!("Environment:");
        println!(
            "  {}    Log filter (error|warn|info|debug|trace, or module=level)",
            metaphone_cli::LOG_ENV
        );
        return;
    }

    let options =
        metaphone_cli::parse_args(&args).unwrap_or_else(|e| metaphone_cli::fatal(&e.to_string()));
    if let Err(e) = options.check_trace() {
        metaphone_cli::fatal(&e.to_string());
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

    if options.words.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line?;
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            encode_word(&encoder, options, word, &mut out)?;
        }
    } else {
        for word in &options.words {
            encode_word(&encoder, options, word, &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}

fn encode_word(
    encoder: &Encoder,
    options: &CliOptions,
    word: &str,
    out: &mut impl Write,
) -> Result<(), CliError> {
    metaphone_cli::check_encodable(word);

    if options.trace {
        writeln!(out, "# {word}")?;
        for step in encoder.trace(word) {
            writeln!(out, "{}", metaphone_cli::format_step(&step))?;
        }
        return Ok(());
    }

    let code = encoder.encode(word);
    let line = if options.json {
        metaphone_cli::format_code_json(word, &code)?
    } else {
        metaphone_cli::format_code(word, &code)
    };
    writeln!(out, "{line}")?;
    Ok(())
}
