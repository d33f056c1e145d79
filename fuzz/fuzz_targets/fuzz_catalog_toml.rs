#![no_main]

use libfuzzer_sys::fuzz_target;
use serde::Deserialize;

/// Mirror of TomlCatalog for fuzzing (private in main crate)
#[derive(Deserialize)]
struct TomlCatalog {
    #[allow(dead_code)]
    schema: u32,
    #[serde(default)]
    #[allow(dead_code)]
    active: Option<String>,
    #[serde(default)]
    #[allow(dead_code)]
    previous: Option<String>,
    #[serde(default)]
    #[allow(dead_code)]
    versions: Vec<toml::Value>,
}

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Fuzz catalog TOML parsing - this should never panic
        let _ = toml::from_str::<TomlCatalog>(content);
    }
});
