use std::{env, fs::read_to_string, path::PathBuf, process, time::Instant};

use toylang::{display_error, lexer::lexer::tokenize, parser::parser::parse};

const USAGE: &str = "usage: toylang [--tokens] <file>";

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let (show_tokens, file_path) = match args.as_slice() {
        [file] if file != "--tokens" => (false, file),
        [flag, file] if flag == "--tokens" => (true, file),
        _ => {
            eprintln!("{}", USAGE);
            process::exit(2);
        }
    };

    let path = PathBuf::from(file_path);
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_path.clone());

    let source = match read_to_string(&path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Failed to read {}: {}", path.display(), error);
            process::exit(1);
        }
    };

    let start = Instant::now();

    if show_tokens {
        match tokenize(source.clone(), Some(file_name.clone())) {
            Ok(tokens) => {
                for token in &tokens {
                    println!("{}", token);
                }
            }
            Err(error) => {
                display_error(&error, &source);
                process::exit(1);
            }
        }

        println!("Tokenized in {:?}", start.elapsed());
    }

    let parse_start = Instant::now();
    let program = parse(&source, Some(file_name));

    println!("Parsed in {:?}", parse_start.elapsed());

    match program {
        Ok(program) => {
            for stmt in &program.body {
                println!("{}", stmt);
            }
            println!("Total time: {:?}", start.elapsed());
        }
        Err(error) => {
            display_error(&error, &source);
            process::exit(1);
        }
    }
}
