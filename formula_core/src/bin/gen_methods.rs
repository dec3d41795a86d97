//! Generate METHODS.md from the method registry.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin gen-methods              # writes formula_core/METHODS.md
//! cargo run --bin gen-methods -- out.md    # writes out.md
//! ```
//!
//! Without an argument the file lands next to this crate's Cargo.toml, so
//! the working directory does not matter.

use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;

use formula_core::methods::{generate_methods_markdown, ALL_METHODS};

fn output_path(arg: Option<OsString>) -> PathBuf {
    match arg {
        Some(path) => PathBuf::from(path),
        None => PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("METHODS.md"),
    }
}

fn main() {
    let path = output_path(env::args_os().nth(1));
    let markdown = generate_methods_markdown();

    if let Err(e) = fs::write(&path, &markdown) {
        eprintln!("Error writing {}: {}", path.display(), e);
        std::process::exit(1);
    }
    println!("Wrote {} methods ({} bytes) to {}", ALL_METHODS.len(), markdown.len(), path.display());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_default_path_is_beside_manifest() {
        let path = output_path(None);
        assert_eq!(path, Path::new(env!("CARGO_MANIFEST_DIR")).join("METHODS.md"));
        assert!(path.is_absolute());
    }

    #[test]
    fn test_argument_overrides_path() {
        assert_eq!(output_path(Some("docs/methods.md".into())), PathBuf::from("docs/methods.md"));
    }
}
