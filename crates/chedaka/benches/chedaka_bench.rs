// Criterion benchmarks for the segmentation engine.
//
// The engine is assembled in memory from a small synthetic lexicon, so the
// benchmarks need no data files on disk.
//
// Run:
//   cargo bench -p chedaka

use criterion::{Criterion, criterion_group, criterion_main};

use chedaka::{Chedaka, Kosha, Model, ModelParams, Pada, Splitter};
use chedaka_core::pada::{
    Avyaya, Dhatu, Lakara, Linga, PadaPrayoga, Pratipadika, Purusha, Subanta, Tinanta, Vacana,
    Vibhakti,
};

// ---------------------------------------------------------------------------
// Engine assembly
// ---------------------------------------------------------------------------

fn tinanta(dhatu: &str) -> Pada {
    Pada::Tinanta(Tinanta {
        dhatu: Dhatu::new(dhatu),
        purusha: Purusha::Prathama,
        vacana: Vacana::Eka,
        lakara: Lakara::Lat,
        pada_prayoga: PadaPrayoga::Parasmaipada,
    })
}

fn subanta(stem: &str) -> Pada {
    Pada::Subanta(Subanta {
        pratipadika: Pratipadika::new(stem),
        linga: Linga::Pum,
        vibhakti: Vibhakti::V1,
        vacana: Vacana::Eka,
        is_purvapada: false,
    })
}

fn avyaya(text: &str) -> Pada {
    Pada::Avyaya(Avyaya {
        pratipadika: Pratipadika::new(text),
    })
}

fn engine() -> Chedaka {
    let kosha = Kosha::from_entries([
        ("arjunas".to_string(), subanta("arjuna")),
        ("rAmas".to_string(), subanta("rAma")),
        ("nfpas".to_string(), subanta("nfpa")),
        ("gacCati".to_string(), tinanta("gam")),
        ("paSyati".to_string(), tinanta("dfS")),
        ("vadati".to_string(), tinanta("vad")),
        ("ca".to_string(), avyaya("ca")),
        ("iti".to_string(), avyaya("iti")),
        ("eva".to_string(), avyaya("eva")),
    ]);
    let splitter = Splitter::from_csv_text(
        "first,second,result\n\
         as,g,o g\n\
         as,p,aH p\n\
         a,i,e\n\
         a,e,E\n",
    )
    .expect("parse rules");
    let model = Model::new(ModelParams::default());
    Chedaka::from_parts(kosha, splitter, model)
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Segment short sentences that the lexicon fully recognizes.
fn bench_run_recognized(c: &mut Criterion) {
    let engine = engine();
    let sentences = [
        "gacCati",
        "arjuno gacCati",
        "rAmaH paSyati",
        "arjunaSca rAmaSca",
        "nfpo gacCati ceti",
    ];

    c.bench_function("run_5_sentences", |b| {
        b.iter(|| {
            for text in &sentences {
                std::hint::black_box(engine.run(text));
            }
        });
    });
}

/// Segment text the lexicon does not recognize at all; exercises the
/// unknown-span fallback edges.
fn bench_run_unrecognized(c: &mut Criterion) {
    let engine = engine();
    let text = "Darmakzetre kurukzetre samavetA yuyutsavaH";

    c.bench_function("run_unrecognized_line", |b| {
        b.iter(|| {
            std::hint::black_box(engine.run(text));
        });
    });
}

/// Segment a longer run of fused words without spaces.
fn bench_run_fused(c: &mut Criterion) {
    let engine = engine();
    let text = "arjunasgacCativadatigacCatitigacCatyarjunasca";

    c.bench_function("run_fused_line", |b| {
        b.iter(|| {
            std::hint::black_box(engine.run(text));
        });
    });
}

criterion_group!(
    benches,
    bench_run_recognized,
    bench_run_unrecognized,
    bench_run_fused,
);
criterion_main!(benches);
