//! Generate FORMULAS.md from the formula catalog.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin gen-formulas
//! ```
//!
//! The generated file is written to `physik_core/src/formulas/FORMULAS.md`.

use std::fs;
use std::path::Path;

use physik_core::formulas::generate_formulas_markdown;

fn main() {
    println!("Generating FORMULAS.md...");

    let markdown = generate_formulas_markdown();

    // Output path is relative to the workspace root
    let output_path = Path::new("physik_core/src/formulas/FORMULAS.md");

    match fs::write(output_path, &markdown) {
        Ok(()) => {
            println!(
                "Successfully wrote {} bytes to {}",
                markdown.len(),
                output_path.display()
            );
            println!("FORMULAS.md has been updated.");
        }
        Err(e) => {
            eprintln!("Error writing file: {}", e);
            std::process::exit(1);
        }
    }
}
