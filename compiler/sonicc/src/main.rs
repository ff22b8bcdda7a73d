//! Sonic compiler CLI.
//!
//! Lexer front end: tokenize Sonic source files and report lexical errors.

mod commands;
mod tracing_setup;

use commands::{check_file, lex_file};

fn main() {
    tracing_setup::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: sonicc lex <file.sonic>");
                std::process::exit(1);
            }
            lex_file(&args[2]);
        }
        "check" => {
            if args.len() < 3 {
                eprintln!("Usage: sonicc check <file.sonic>");
                std::process::exit(1);
            }
            check_file(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Sonic compiler");
    println!();
    println!("Usage: sonicc <command> [arguments]");
    println!();
    println!("Commands:");
    println!("  lex <file.sonic>     Tokenize a file and print the token stream");
    println!("  check <file.sonic>   Tokenize a file, reporting only success or failure");
    println!("  help                 Show this help");
    println!();
    println!("Environment:");
    println!("  SONIC_LOG            Log filter (RUST_LOG syntax), default `warn`");
    println!("  SONIC_LOG_TREE       Set to any value for hierarchical log output");
}
