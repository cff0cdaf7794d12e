// chedaka-run: Segment SLP1 Sanskrit text from arguments or stdin.
//
// Prints one line per token: the visible text, then the lemma and part of
// speech when the engine recognized the span.
//
// Usage:
//   chedaka-run [-d DATA_PATH] [TEXT...]
//
// Options:
//   -d, --data-path PATH   Data directory containing kosha/, model/, and
//                          sandhi-rules.csv
//   -h, --help             Print help

use std::io::{self, BufRead, Write};

use chedaka::{Chedaka, Token};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (data_path, args) = chedaka_cli::parse_data_path(&args);

    if chedaka_cli::wants_help(&args) {
        println!("chedaka-run: Segment SLP1 Sanskrit text into tagged words.");
        println!();
        println!("Usage: chedaka-run [-d DATA_PATH] [TEXT...]");
        println!();
        println!("If TEXT arguments are given, segments each one.");
        println!("Otherwise reads lines from stdin.");
        println!();
        println!("Options:");
        println!("  -d, --data-path PATH   Data directory containing kosha/, model/,");
        println!("                         and sandhi-rules.csv");
        println!("  -h, --help             Print this help");
        return;
    }

    let texts: Vec<String> = args.iter().filter(|a| !a.starts_with('-')).cloned().collect();

    let engine =
        chedaka_cli::load_engine(data_path.as_deref()).unwrap_or_else(|e| chedaka_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if texts.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let text = line.trim();
            if text.is_empty() {
                continue;
            }
            segment(text, &engine, &mut out);
        }
    } else {
        for text in &texts {
            segment(text, &engine, &mut out);
        }
    }
}

fn segment(text: &str, engine: &Chedaka, out: &mut io::BufWriter<io::StdoutLock<'_>>) {
    for token in engine.run(text) {
        let _ = writeln!(out, "{}", describe(&token));
    }
    let _ = writeln!(out);
}

fn describe(token: &Token) -> String {
    match &token.info {
        Some(pada) => format!(
            "{}\tlemma={}\tpos={:?}",
            token.text,
            pada.lemma(),
            pada.part_of_speech()
        ),
        None => format!("{}\t(unrecognized)", token.text),
    }
}
