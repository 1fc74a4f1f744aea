//! Entry point: build the registry with the selected demonstrations and run
//! them all. Any failure is fatal, printed to stderr, exit code 1.

use colored::Colorize;
use std::io;

use rust_tour::{demos, register, Registry};

fn main() {
    let mut registry = Registry::new();

    register!(registry, demos::arr);
    register!(registry, demos::map);
    register!(registry, demos::slice);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = registry.run_all(&mut out) {
        drop(out);
        eprintln!("{} {}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}
