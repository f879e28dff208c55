use std::{
    env,
    fs::File,
    io::{BufReader, Cursor},
    process,
};

use letterbot::{
    strategy::{Basic, ModalLetter, Random, RandomStart},
    BotError, Dictionary, DictionaryError, Harness, Word,
};

static BUNDLED: &str = include_str!("../words.txt");

fn main() {
    env_logger::init();

    let dict = match load_dictionary() {
        Ok(dict) => dict,
        Err(e) => {
            eprintln!("could not load the dictionary: {}", e);
            process::exit(1);
        }
    };
    log::info!("loaded {} words of {} letters", dict.len(), dict.word_len());

    let harness = Harness::new(&dict)
        .verbose()
        .add_baseline(Box::new(Basic::new()))
        .add_strategy(Box::new(
            Basic::new().first_word(Word::new("slate").unwrap()),
        ))
        .add_strategy(Box::new(ModalLetter))
        .add_strategy(Box::new(RandomStart))
        .add_strategy(Box::new(Random))
        .test_all();

    let record = match harness.run() {
        Ok(record) => record,
        Err(e) => {
            eprintln!("harness run failed: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = record.print_report() {
        eprintln!("could not print the report: {}", e);
        process::exit(1);
    }
}

/// Loads the dictionary named on the command line, or the bundled list
/// when no path is given.
fn load_dictionary() -> Result<Dictionary, BotError> {
    match env::args().nth(1) {
        Some(path) => {
            let file = File::open(path).map_err(DictionaryError::Io)?;
            Dictionary::from_reader(BufReader::new(file))
        }
        None => Dictionary::from_reader(Cursor::new(BUNDLED)),
    }
}
