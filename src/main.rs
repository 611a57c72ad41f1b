//! tinted entry point

use std::env;
use std::path::Path;
use std::process;

use tinted::config::Config;
use tinted::editor::Session;
use tinted::error::{EditorError, Result};
use tinted::terminal::Terminal;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("--help") | Some("-h") => {
            print_usage();
            return Ok(());
        }
        Some("--version") | Some("-V") => {
            print_version();
            return Ok(());
        }
        _ => {}
    }

    let path = match args.get(1).filter(|a| !a.starts_with('-')) {
        Some(path) => Path::new(path),
        None => {
            print_usage();
            return Err(EditorError::Message("no file given".to_string()));
        }
    };

    // the file must exist; fail before the terminal takes over the screen
    if !path.exists() {
        return Err(EditorError::FileNotFound(path.display().to_string()));
    }

    let config = Config::load();
    let terminal = Terminal::new()?;
    let mut session = Session::new(terminal, &config, path)?;
    session.run()
}

fn print_usage() {
    println!("tinted {} - a tiny text editor", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: tinted FILE");
    println!();
    println!("Options:");
    println!("  -h, --help     Show this help message");
    println!("  -V, --version  Show version information");
    println!();
    println!("Key bindings:");
    println!("  C-s            Save the file");
    println!("  C-q            Quit");
    println!("  Arrows         Move the caret");
    println!("  Home, End      Start / end of line");
}

fn print_version() {
    println!("tinted {}", env!("CARGO_PKG_VERSION"));
}
