#![no_main]

use libfuzzer_sys::fuzz_target;
use tablite_core::query::{execute, parse_intent};
use tablite_core::Row;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to string (ignore invalid UTF-8)
    if let Ok(query) = std::str::from_utf8(data) {
        // Limit query length to prevent timeout
        if query.len() > 10_000 {
            return;
        }

        let columns = vec!["region".to_string(), "amount".to_string()];
        let rows = vec![
            Row::new().with("region", "east").with("amount", 10.0),
            Row::new().with("region", "west").with("amount", "n/a"),
            Row::new().with("amount", 3.5),
        ];

        // Intent detection and execution must never panic
        let intent = parse_intent(query, &columns);
        let _ = execute(&rows, &columns, &intent);
    }
});
