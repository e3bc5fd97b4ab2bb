use criterion::{black_box, criterion_group, criterion_main, Criterion};
use skylog_hangul::{Lexicon, NameTable, Transliterator};

const NAMES: &[&str] = &[
    "Sirius",
    "Rigel Kentaurus",
    "Alpha Centauri",
    "Barnard's Star",
    "Zubenelgenubi",
    "Phecda",
    "Hercules Globular Cluster",
    "61 Cygni",
];

fn bench_transliterate(c: &mut Criterion) {
    let rules = Transliterator::default();
    let lexicon = Transliterator::new(
        NameTable::builtin(),
        Box::new(Lexicon::from_entries([
            ("Kentaurus", "켄타우루스"),
            ("Centauri", "센타우리"),
            ("Cygni", "시그니"),
        ])),
    );

    let mut group = c.benchmark_group("Transliteration");

    group.bench_function("rules", |b| {
        b.iter(|| {
            for name in NAMES {
                black_box(rules.transliterate(black_box(name)));
            }
        })
    });

    group.bench_function("lexicon", |b| {
        b.iter(|| {
            for name in NAMES {
                black_box(lexicon.transliterate(black_box(name)));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_transliterate);
criterion_main!(benches);
