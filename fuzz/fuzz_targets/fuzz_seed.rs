#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use talent_calc::seed::SeedFormat;
use talent_calc::TreeSeed;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Seed parsing and validation should never panic
        for format in [SeedFormat::Toml, SeedFormat::Json] {
            if let Ok(seed) = TreeSeed::parse(content, format, Path::new("fuzz")) {
                let _ = seed.into_tree();
            }
        }
    }
});
