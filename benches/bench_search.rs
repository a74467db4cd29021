use criterion::{criterion_group, criterion_main, Criterion};
use boggle_solver::{Board, Dictionary, Lexicon, Searcher, Trie};

const WORDFILE: &str = "wordlists/words.txt";
// TODO use generated boards of growing dimension
const BOARDS: &[(usize, &str)] = &[
    (4, "stnerailqtegdops"),
    (5, "stnerailqtegdopsaretsnoil"),
];

fn bench_from_file(c: &mut Criterion) {
    c.bench_function("dictionary.from_file", |b| {
        b.iter(|| Dictionary::from_file(WORDFILE).unwrap())
    });
}

fn bench_lookup(c: &mut Criterion) {
    let dictionary = Dictionary::from_file(WORDFILE).unwrap();
    c.bench_function("dictionary.is_prefix", |b| {
        b.iter(|| dictionary.is_prefix("quil"))
    });
    c.bench_function("dictionary.is_word", |b| b.iter(|| dictionary.is_word("quilts")));
    let mut trie = Trie::new();
    for word in dictionary.trie().keys() {
        trie.insert(&word).unwrap();
    }
    // keys come out sorted, so this trie is unbalanced
    c.bench_function("trie.sorted.contains_exact", |b| {
        b.iter(|| trie.contains_exact("tops").unwrap())
    });
}

fn bench_find_words(c: &mut Criterion) {
    let dictionary = Dictionary::from_file(WORDFILE).unwrap();
    for &(dimension, letters) in BOARDS {
        let board = Board::new(dimension, letters).unwrap();
        let searcher = Searcher::new(&board, &dictionary);
        c.bench_function(&format!("searcher.find_words.{}", dimension), |b| {
            b.iter(|| searcher.find_words())
        });
        c.bench_function(&format!("searcher.find_words_sequential.{}", dimension), |b| {
            b.iter(|| searcher.find_words_sequential())
        });
    }
}

criterion_group!(benches, bench_from_file, bench_lookup, bench_find_words);
criterion_main!(benches);
