// SPDX-License-Identifier: Apache-2.0

//! Parses a JSON document and prints an outline of the resulting value tree.
//!
//! Run with `RUST_LOG=trace` to see the parser's compaction trace.

use std::error::Error;
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::Parser as _;
use scratchjson::{Parser, ScratchConfig, Value};

#[derive(clap::Parser, Debug)]
#[command(about = "Print the structure of a JSON document")]
struct Args {
    /// JSON file to read; stdin when omitted
    file: Option<PathBuf>,

    /// Stop descending below this depth
    #[arg(long, default_value_t = usize::MAX)]
    max_depth: usize,

    /// Start the scratch stacks at 16 bytes instead of 256
    #[arg(long)]
    small_scratch: bool,
}

struct SmallScratch;

impl ScratchConfig for SmallScratch {
    const INITIAL_CAPACITY: usize = 16;
}

fn read_input(file: Option<&PathBuf>) -> io::Result<Vec<u8>> {
    let mut input = Vec::new();
    match file {
        Some(path) => File::open(path)?.read_to_end(&mut input)?,
        None => io::stdin().read_to_end(&mut input)?,
    };
    Ok(input)
}

fn outline(value: &Value, label: &str, depth: usize, max_depth: usize) {
    let indent = "  ".repeat(depth);
    match value {
        Value::Null => println!("{indent}{label}null"),
        Value::False => println!("{indent}{label}false"),
        Value::True => println!("{indent}{label}true"),
        Value::Number(n) => println!("{indent}{label}{n}"),
        Value::String(s) => println!("{indent}{label}string ({} bytes)", s.len()),
        Value::Array(elements) => {
            println!("{indent}{label}array ({} elements)", elements.len());
            if depth < max_depth {
                for (i, element) in elements.iter().enumerate() {
                    outline(element, &format!("[{i}] "), depth + 1, max_depth);
                }
            }
        }
        Value::Object(members) => {
            println!("{indent}{label}object ({} members)", members.len());
            if depth < max_depth {
                for member in members.iter() {
                    let key = String::from_utf8_lossy(member.key());
                    outline(member.value(), &format!("{key:?}: "), depth + 1, max_depth);
                }
            }
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let input = read_input(args.file.as_ref())?;
    log::info!("read {} bytes", input.len());

    let value = if args.small_scratch {
        Parser::<SmallScratch>::with_config(&input).parse()
    } else {
        Parser::new(&input).parse()
    };

    match value {
        Ok(value) => {
            outline(&value, "", 0, args.max_depth);
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: JSON parsing failed: {e} (code {})", e.code());
            std::process::exit(1);
        }
    }
}
