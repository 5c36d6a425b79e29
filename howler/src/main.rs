use console::style;
use howler::has_allowed_extension;
use howler_interp::eval_program;
use howler_parser::{lexer::Lexer, parser::Parser};
use std::io::{self, Write};
use std::{env, fs, process};

fn main() {
    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 => repl(),
        2 => run_file(&args[1]),
        _ => {
            eprintln!("usage: howler [script]");
            process::exit(64);
        }
    }
}

fn repl() {
    println!("This is the Howler programming language!");
    println!("Feel free to type in commands");

    let mut stdout = io::stdout();
    let stdin = io::stdin();
    loop {
        print!("> ");
        stdout.flush().unwrap();

        let mut input = String::new();
        if stdin.read_line(&mut input).unwrap() == 0 {
            break; // reached end of input
        }

        let mut parser = Parser::new(Lexer::new(&input));
        let program = parser.parse_program();

        if !parser.errors().is_empty() {
            eprint!("{}", style(parser.errors()).red());
            continue;
        }

        println!("{}", eval_program(&program));
    }
}

fn run_file(path: &str) {
    if !has_allowed_extension(path) {
        eprintln!("Invalid file extension. Expected .grr | .brr | .hoot | .coo .");
        process::exit(1);
    }

    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("{}: {}", path, err);
            process::exit(1);
        }
    };

    let mut parser = Parser::new(Lexer::new(&source));
    let program = parser.parse_program();

    if !parser.errors().is_empty() {
        eprint!("{}", style(parser.errors()).red());
        process::exit(1);
    }

    println!("{}", eval_program(&program));
}
