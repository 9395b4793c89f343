#![allow(missing_docs)]

use divan::{Bencher, black_box, counter::CharsCount};
use gramchipper::{
    GramConfig,
    Tokenizer,
    analysis::NonWhitespace,
    config::EngineVersion,
    filters::EdgeNGramTokenFilter,
    source::Utf16Source,
    tokenizers::CharTokenizer,
};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

static WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua",
    "\u{1F600}", "caf\u{e9}", "na\u{ef}ve", "\u{65e5}\u{672c}\u{8a9e}",
];

fn corpus(words: usize) -> String {
    (0..words)
        .map(|i| WORDS[(i * 7) % WORDS.len()])
        .collect::<Vec<_>>()
        .join(" ")
}

/// Tokenize `text`, returning the total term bytes.
fn drain<T: Tokenizer + ?Sized>(
    tokenizer: &mut T,
    text: &str,
) -> usize {
    tokenizer.set_source(Box::new(Utf16Source::from(text)));
    tokenizer.reset().unwrap();
    let mut count = 0;
    while tokenizer.increment_token().unwrap() {
        count += black_box(tokenizer.attributes()).term.len();
    }
    tokenizer.end().unwrap();
    count
}

#[divan::bench(args = [1_000, 10_000])]
fn streaming_grams(
    bencher: Bencher,
    words: usize,
) {
    let text = corpus(words);
    let mut tokenizer = GramConfig::new(1, 3).build().unwrap();
    bencher
        .counter(CharsCount::of(text.as_str()))
        .bench_local(|| drain(&mut tokenizer, black_box(&text)));
}

#[divan::bench(args = [1_000, 10_000])]
fn streaming_word_grams(
    bencher: Bencher,
    words: usize,
) {
    let text = corpus(words);
    let mut tokenizer = GramConfig::new(2, 4)
        .with_predicate(NonWhitespace)
        .build()
        .unwrap();
    bencher
        .counter(CharsCount::of(text.as_str()))
        .bench_local(|| drain(&mut tokenizer, black_box(&text)));
}

#[divan::bench(args = [1_000, 10_000])]
fn edge_filter(
    bencher: Bencher,
    words: usize,
) {
    let text = corpus(words);
    let mut filter = EdgeNGramTokenFilter::new(CharTokenizer::whitespace(), 1, 5).unwrap();
    bencher
        .counter(CharsCount::of(text.as_str()))
        .bench_local(|| drain(&mut filter, black_box(&text)));
}

#[divan::bench]
fn legacy_grams(bencher: Bencher) {
    // The legacy engine caps its input, so only short texts are comparable.
    let text = corpus(150);
    let mut tokenizer = GramConfig::new(1, 3)
        .with_engine(EngineVersion::Legacy)
        .build()
        .unwrap();
    bencher
        .counter(CharsCount::of(text.as_str()))
        .bench_local(|| drain(&mut tokenizer, black_box(&text)));
}
