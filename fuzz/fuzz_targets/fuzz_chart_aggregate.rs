#![no_main]

use libfuzzer_sys::fuzz_target;
use tablite_core::chart::{aggregate, ChartKind};
use tablite_core::{Row, Value};

fuzz_target!(|values: Vec<f64>| {
    if values.len() > 4_096 {
        return;
    }

    // NaN and infinities are legal inputs; the aggregator must drop them,
    // never panic on them.
    let rows: Vec<Row> = values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            Row::new()
                .with("bucket", ["a", "b", "c"][i % 3])
                .with("v", Value::Number(*v))
        })
        .collect();

    for kind in [
        ChartKind::Bar,
        ChartKind::Line,
        ChartKind::Scatter,
        ChartKind::Pie,
        ChartKind::Histogram,
        ChartKind::Box,
    ] {
        let _ = aggregate(&rows, "v", "v", kind);
        let _ = aggregate(&rows, "bucket", "v", kind);
    }
});
