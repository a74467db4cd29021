use anyhow::Result;
use boggle_solver::{Board, Dictionary, Searcher};
use std::env;
use std::time::Instant;

const WORDFILE: &str = "wordlists/words.txt";
const DIMENSION: usize = 4;
const BOARD: &str = "stnerailqtegdops";

fn run() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    // solve [dimension board [wordfile]]
    let args: Vec<String> = env::args().skip(1).collect();
    let (dimension, letters) = match args.as_slice() {
        [dimension, letters, ..] => (dimension.parse()?, letters.as_str()),
        _ => (DIMENSION, BOARD),
    };
    let wordfile = args.get(2).map_or(WORDFILE, String::as_str);

    let t0 = Instant::now();
    #[cfg(feature = "bincode")]
    let dictionary = if wordfile.ends_with(".bin") {
        Dictionary::deserialize_from(wordfile)?
    } else {
        Dictionary::from_file(wordfile)?
    };
    #[cfg(not(feature = "bincode"))]
    let dictionary = Dictionary::from_file(wordfile)?;
    println!("Create {} took {:?}", dictionary, t0.elapsed());

    let board = Board::new(dimension, letters)?;
    println!("{}\n", board);

    let t0 = Instant::now();
    let words = Searcher::new(&board, &dictionary).find_words();
    let dt = t0.elapsed();
    if words.is_empty() {
        println!("No words with 3 or more letters found!");
    } else {
        println!("{} words found in {:?}.", words.len(), dt);
        println!("{}", words);
    }
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {:?}", err);
    }
}
