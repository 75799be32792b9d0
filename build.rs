//! Build script to bundle dictionary word lists
//!
//! Scans `data/dict/` for `<length>.txt` files and generates a table of
//! `include_str!` entries keyed by word length.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let dict_dir = Path::new(&manifest_dir).join("data").join("dict");

    generate_dictionary_table(&dict_dir, &Path::new(&out_dir).join("dictionary.rs"));

    // Rebuild if word lists change
    println!("cargo:rerun-if-changed=data/dict");
}

fn generate_dictionary_table(dict_dir: &Path, output_path: &Path) {
    let entries = fs::read_dir(dict_dir)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", dict_dir.display()));

    // Only files named `<length>.txt` count as word lists
    let mut lists: Vec<(usize, String)> = entries
        .filter_map(Result::ok)
        .filter_map(|entry| {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("txt") {
                return None;
            }
            let length = path.file_stem()?.to_str()?.parse::<usize>().ok()?;
            Some((length, path.display().to_string()))
        })
        .collect();
    lists.sort_unstable();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated dictionary table").unwrap();
    writeln!(output).unwrap();
    writeln!(
        output,
        "/// Word lists bundled at build time, keyed by word length"
    )
    .unwrap();
    writeln!(output, "pub const EMBEDDED_LISTS: &[(usize, &str)] = &[").unwrap();

    for (length, path) in &lists {
        println!("cargo:rerun-if-changed={path}");
        writeln!(output, "    ({length}, include_str!({path:?})),").unwrap();
    }

    writeln!(output, "];").unwrap();
}
