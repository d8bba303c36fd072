extern crate clap;
#[macro_use] extern crate log;
extern crate minheap;

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::num::ParseIntError;

use minheap::{by_less, MinHeap};
use quick_error::quick_error;

quick_error! {
    #[derive(Debug)]
    enum Error {
        Io(e: io::Error) {
            display("I/O error {}", e)
            from()
        }
        Parse(line: usize, word: String, e: ParseIntError) {
            display("Line {}: invalid integer {:?} ({})", line, word, e)
        }
        Heap(e: minheap::Error) {
            display("{}", e)
            from()
        }
    }
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let matches = clap::App::new("minheap-smallest")
        .about("Prints the smallest integers of the input in ascending order")
        .arg(clap::Arg::with_name("path")
            .index(1)
            .value_name("FILE")
            .required(false)
            .help("Input file, whitespace separated integers. Reads stdin if not given"))
        .arg(clap::Arg::with_name("count")
            .short("n")
            .long("count")
            .value_name("N")
            .takes_value(true)
            .default_value("10")
            .help("How many values to print"))
        .get_matches();
    let count = match matches.value_of("count").unwrap_or("10").parse::<usize>() {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Invalid count: {}", e);
            std::process::exit(1);
        }
    };
    let result = match matches.value_of_os("path") {
        Some(path) => File::open(path)
            .map_err(Error::from)
            .and_then(|file| smallest(BufReader::new(file), count)),
        None => {
            let stdin = io::stdin();
            let lock = stdin.lock();
            smallest(lock, count)
        }
    };
    match result {
        Ok(values) => {
            for value in values {
                println!("{}", value);
            }
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

/// Keeps the `count` smallest values seen in a heap ordered by greatest first,
/// so the root is always the one to replace.
fn smallest<R: BufRead>(input: R, count: usize) -> Result<Vec<i64>, Error> {
    let mut storage = vec![0i64; count];
    let mut heap = MinHeap::new(&mut storage[..], by_less(|a: &i64, b: &i64| a > b));
    for (line_idx, line) in input.lines().enumerate() {
        let line = line?;
        for word in line.split_whitespace() {
            let value = word.parse::<i64>()
                .map_err(|e| Error::Parse(line_idx + 1, word.into(), e))?;
            if !heap.is_full() {
                heap.push(value)?;
            } else if heap.peek().map(|&max| value < max).unwrap_or(false) {
                heap.pop_push(value)?;
            }
        }
    }
    let len = heap.len();
    trace!("Kept {} values", len);
    // Each pop moves the current greatest just past the end of the heap.
    while !heap.is_empty() {
        heap.pop()?;
    }
    storage.truncate(len);
    Ok(storage)
}
