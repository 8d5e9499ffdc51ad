#![no_main]

use libfuzzer_sys::fuzz_target;
use tablite::Dataset;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if input.len() > 100_000 {
            return;
        }

        // Malformed documents must come back as errors, not panics.
        let _ = Dataset::from_json_str(input);
    }
});
