// chedaka-build-kosha: Build a lexicon snapshot from a word list.
//
// Reads tab-separated lines of `form<TAB>pos<TAB>lemma` and writes the
// snapshot into the given output directory. The part of speech is one of
// `avyaya`, `subanta`, or `tinanta`; forms without richer grammatical
// detail get a default reading for their part of speech, which is enough
// for segmentation even though the tagging stays coarse.
//
// Usage:
//   chedaka-build-kosha -o OUT_DIR WORDLIST.tsv
//
// Options:
//   -o, --out DIR   Output directory for the snapshot (required)
//   -h, --help      Print help

use std::fs;

use chedaka_core::pada::{
    Avyaya, Dhatu, Lakara, Linga, Pada, PadaPrayoga, Pratipadika, Purusha, Subanta, Tinanta,
    Vacana, Vibhakti,
};
use chedaka_kosha::Builder;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if chedaka_cli::wants_help(&args) {
        println!("chedaka-build-kosha: Build a lexicon snapshot from a word list.");
        println!();
        println!("Usage: chedaka-build-kosha -o OUT_DIR WORDLIST.tsv");
        println!();
        println!("Each input line is `form<TAB>pos<TAB>lemma` where pos is one of");
        println!("avyaya, subanta, or tinanta. Blank lines and lines starting with");
        println!("`#` are skipped.");
        println!();
        println!("Options:");
        println!("  -o, --out DIR   Output directory for the snapshot (required)");
        println!("  -h, --help      Print this help");
        return;
    }

    let (out_dir, inputs) = parse_out_dir(&args);
    let Some(out_dir) = out_dir else {
        chedaka_cli::fatal("-o/--out is required");
    };
    let [input] = inputs.as_slice() else {
        chedaka_cli::fatal("expected exactly one word list file");
    };

    let text = fs::read_to_string(input)
        .unwrap_or_else(|e| chedaka_cli::fatal(&format!("failed to read {input}: {e}")));

    let mut builder = Builder::new(&out_dir);
    let mut entries = 0usize;
    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut fields = line.splitn(3, '\t');
        let (Some(form), Some(pos), Some(lemma)) = (fields.next(), fields.next(), fields.next())
        else {
            chedaka_cli::fatal(&format!(
                "{input}:{}: expected `form<TAB>pos<TAB>lemma`",
                i + 1
            ));
        };
        if !chedaka_core::sounds::is_sanskrit(form) {
            chedaka_cli::fatal(&format!("{input}:{}: form `{form}` is not SLP1", i + 1));
        }
        let Some(pada) = default_reading(pos, lemma) else {
            chedaka_cli::fatal(&format!("{input}:{}: unknown part of speech `{pos}`", i + 1));
        };
        builder.insert(form, pada);
        entries += 1;
    }

    builder
        .finish()
        .unwrap_or_else(|e| chedaka_cli::fatal(&format!("failed to write snapshot: {e}")));
    eprintln!("wrote {entries} entries to {out_dir}");
}

/// A minimal reading for a word list entry without full grammatical detail.
fn default_reading(pos: &str, lemma: &str) -> Option<Pada> {
    match pos {
        "avyaya" => Some(Pada::Avyaya(Avyaya {
            pratipadika: Pratipadika::new(lemma),
        })),
        "subanta" => Some(Pada::Subanta(Subanta {
            pratipadika: Pratipadika::new(lemma),
            linga: Linga::Pum,
            vibhakti: Vibhakti::V1,
            vacana: Vacana::Eka,
            is_purvapada: false,
        })),
        "tinanta" => Some(Pada::Tinanta(Tinanta {
            dhatu: Dhatu::new(lemma),
            purusha: Purusha::Prathama,
            vacana: Vacana::Eka,
            lakara: Lakara::Lat,
            pada_prayoga: PadaPrayoga::Parasmaipada,
        })),
        _ => None,
    }
}

/// Parse a `--out=DIR` or `-o DIR` argument. Returns `(out_dir, remaining)`.
fn parse_out_dir(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut out_dir = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--out=") {
            out_dir = Some(val.to_string());
        } else if arg == "--out" || arg == "-o" {
            if i + 1 < args.len() {
                out_dir = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                chedaka_cli::fatal(&format!("{arg} requires a value"));
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (out_dir, remaining)
}
