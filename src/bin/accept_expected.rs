//! Binary to generate/update the .expected.swift files next to each fixture
//!
//! Usage:
//!   cargo run --bin accept_expected            # Update all
//!   cargo run --bin accept_expected -- cell    # Update only fixtures matching "cell"

use accessibility_generator::{LineBuffer, Registry};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

fn main() {
    let filter: Option<String> = std::env::args().nth(1);
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures");
    let registry = Registry::standard();

    let mut updated = 0;
    let mut skipped = 0;

    for entry in WalkDir::new(&fixtures)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| {
            let name = e.file_name().to_string_lossy();
            name.ends_with(".swift") && !name.ends_with(".expected.swift")
        })
    {
        let path = entry.path();

        if let Some(ref f) = filter {
            if !path.to_string_lossy().contains(f.as_str()) {
                skipped += 1;
                continue;
            }
        }

        process_file(&registry, path);
        updated += 1;
    }

    println!("Updated {} fixtures, skipped {}", updated, skipped);
}

fn process_file(registry: &Registry, path: &Path) {
    let source = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to read {:?}: {}", path, e);
            return;
        }
    };

    for selector in registry.selectors() {
        let mut buffer = LineBuffer::from_text(&source);
        let Some(report) = registry.dispatch(selector, &mut buffer) else {
            continue;
        };
        if let Some(aborted) = report.aborted {
            eprintln!(
                "WARNING: {:?} [{}] stopped at {}: {}",
                path, selector, aborted.stage, aborted.reason
            );
        }

        let expected = path.with_extension(format!("{selector}.expected.swift"));
        if let Err(e) = fs::write(&expected, buffer.to_text()) {
            eprintln!("Failed to write {:?}: {}", expected, e);
        } else {
            println!("  wrote {}", expected.display());
        }
    }
}
