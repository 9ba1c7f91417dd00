//! Build script for the storefront crate.
//!
//! Fingerprints `static/css/main.css` so the stylesheet can be served from a
//! content-addressed path (`/static/css/derived/main.{hash}.css`) with
//! immutable caching.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

/// Hex characters of the SHA-256 digest kept in the file name.
const HASH_LEN: usize = 8;

fn main() {
    let manifest_dir = PathBuf::from(
        env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR must be set by Cargo"),
    );
    let css_dir = manifest_dir.join("static/css");
    let source = css_dir.join("main.css");

    println!("cargo:rerun-if-changed={}", source.display());

    let hash = match fs::read(&source) {
        Ok(content) => fingerprint(&content),
        Err(e) => {
            println!("cargo:warning=Could not read main.css: {e}");
            String::new()
        }
    };
    println!("cargo:rustc-env=CSS_HASH={hash}");

    if !hash.is_empty() {
        publish(&source, &css_dir.join("derived"), &hash);
    }
}

fn fingerprint(content: &[u8]) -> String {
    let digest = format!("{:x}", Sha256::digest(content));
    digest.chars().take(HASH_LEN).collect()
}

/// Copy the stylesheet to its fingerprinted name.
fn publish(source: &Path, derived_dir: &Path, hash: &str) {
    fs::create_dir_all(derived_dir).expect("Failed to create derived CSS directory");
    let target = derived_dir.join(format!("main.{hash}.css"));
    if !target.exists() {
        fs::copy(source, &target).expect("Failed to copy CSS to derived directory");
    }
}
