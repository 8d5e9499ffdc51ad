/// Chart aggregation
///
/// Grouping, binning, and summarization that turn a table into the series a
/// chart consumer can render directly. Axis validation happens at the call
/// boundary; by the time a table reaches this module, aggregation itself
/// cannot fail: rows that don't parse are dropped or zeroed per chart kind.
use super::series::{
    BoxSummary, CategoryPoint, ChartKind, ChartSeries, HistogramBin, PieSlice, ScatterPoint,
};
use crate::stats::nearest_rank;
use crate::table::Row;
use tracing::debug;

/// Upper bound on histogram bin count.
pub const MAX_HISTOGRAM_BINS: usize = 10;

/// Builds the series for `kind` from the table. Histograms ignore `y`.
pub fn aggregate(rows: &[Row], x: &str, y: &str, kind: ChartKind) -> ChartSeries {
    debug!(%kind, rows = rows.len(), "aggregating chart series");

    match kind {
        ChartKind::Bar | ChartKind::Line => ChartSeries::Category(categories(rows, x, y)),
        ChartKind::Scatter => ChartSeries::Scatter(scatter(rows, x, y)),
        ChartKind::Pie => ChartSeries::Pie(pie(rows, x, y)),
        ChartKind::Histogram => ChartSeries::Histogram(histogram(rows, x)),
        ChartKind::Box => ChartSeries::Box(box_plots(rows, x, y)),
    }
}

/// Accumulates values per stringified key, keeping first-seen key order.
fn grouped(pairs: impl Iterator<Item = (String, f64)>) -> Vec<(String, Vec<f64>)> {
    let mut groups: Vec<(String, Vec<f64>)> = Vec::new();
    for (key, value) in pairs {
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, values)) => values.push(value),
            None => groups.push((key, vec![value])),
        }
    }
    groups
}

/// Bar/line: mean of y per distinct x, rows with unparseable y dropped.
fn categories(rows: &[Row], x: &str, y: &str) -> Vec<CategoryPoint> {
    let pairs = rows
        .iter()
        .filter_map(|row| row.number(y).map(|v| (row.label(x), v)));

    grouped(pairs)
        .into_iter()
        .map(|(label, values)| {
            let count = values.len();
            CategoryPoint {
                x: label,
                y: values.iter().sum::<f64>() / count as f64,
                count,
            }
        })
        .collect()
}

/// Scatter: a row contributes only if both axes parse.
fn scatter(rows: &[Row], x: &str, y: &str) -> Vec<ScatterPoint> {
    rows.iter()
        .filter_map(|row| {
            let x = row.number(x)?;
            let y = row.number(y)?;
            Some(ScatterPoint { x, y })
        })
        .collect()
}

/// Pie: sum of y per label. Unparseable y counts as 0 so the row still
/// claims its slice.
fn pie(rows: &[Row], x: &str, y: &str) -> Vec<PieSlice> {
    let pairs = rows
        .iter()
        .map(|row| (row.label(x), row.number(y).unwrap_or(0.0)));

    grouped(pairs)
        .into_iter()
        .map(|(label, values)| PieSlice {
            label,
            value: values.iter().sum(),
        })
        .collect()
}

/// Histogram over parseable x values.
///
/// Bin count is `min(10, ceil(sqrt(n)))`. The top edge folds into the last
/// bin: the maximum value (and any floating-point spillover) is clamped to
/// `bins - 1`. When max == min the width degenerates to 0 and every value
/// lands in bin 0.
fn histogram(rows: &[Row], x: &str) -> Vec<HistogramBin> {
    let values: Vec<f64> = rows.iter().filter_map(|row| row.number(x)).collect();
    if values.is_empty() {
        return Vec::new();
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let bins = ((values.len() as f64).sqrt().ceil() as usize).clamp(1, MAX_HISTOGRAM_BINS);
    let width = (max - min) / bins as f64;

    let mut counts = vec![0usize; bins];
    for value in &values {
        let index = if width > 0.0 {
            (((value - min) / width).floor() as usize).min(bins - 1)
        } else {
            0
        };
        counts[index] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            x: min + (i as f64 + 0.5) * width,
            y: count,
        })
        .collect()
}

/// Box plots: five-number summary per group, nearest-rank quantiles.
/// Groups without a single parseable y are skipped.
fn box_plots(rows: &[Row], x: &str, y: &str) -> Vec<BoxSummary> {
    let pairs = rows
        .iter()
        .filter_map(|row| row.number(y).map(|v| (row.label(x), v)));

    grouped(pairs)
        .into_iter()
        .filter_map(|(label, mut values)| {
            values.sort_by(|a, b| a.total_cmp(b));
            let min = *values.first()?;
            let max = *values.last()?;
            Some(BoxSummary {
                x: label,
                min,
                q1: nearest_rank(&values, 0.25)?,
                median: nearest_rank(&values, 0.5)?,
                q3: nearest_rank(&values, 0.75)?,
                max,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{Row, Value};

    #[test]
    fn test_categories_average_and_count() {
        let rows = vec![
            Row::new().with("region", "east").with("amount", 10.0),
            Row::new().with("region", "west").with("amount", 20.0),
            Row::new().with("region", "east").with("amount", 30.0),
            Row::new().with("region", "east").with("amount", "junk"),
        ];
        let series = aggregate(&rows, "region", "amount", ChartKind::Bar);

        let ChartSeries::Category(points) = series else {
            panic!("expected category series");
        };
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].x, "east");
        assert_eq!(points[0].y, 20.0);
        assert_eq!(points[0].count, 2);
        assert_eq!(points[1].x, "west");
        assert_eq!(points[1].count, 1);
    }

    #[test]
    fn test_categories_missing_x_becomes_unknown() {
        let rows = vec![
            Row::new().with("amount", 4.0),
            Row::new().with("region", Value::Null).with("amount", 6.0),
        ];
        let series = aggregate(&rows, "region", "amount", ChartKind::Line);

        let ChartSeries::Category(points) = series else {
            panic!("expected category series");
        };
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].x, "Unknown");
        assert_eq!(points[0].y, 5.0);
    }

    #[test]
    fn test_scatter_drops_rows_missing_either_axis() {
        let rows = vec![
            Row::new().with("a", 1.0).with("b", 2.0),
            Row::new().with("a", "oops").with("b", 3.0),
            Row::new().with("a", 4.0),
            Row::new().with("a", "5").with("b", "6"),
        ];
        let series = aggregate(&rows, "a", "b", ChartKind::Scatter);

        let ChartSeries::Scatter(points) = series else {
            panic!("expected scatter series");
        };
        assert_eq!(
            points,
            vec![
                ScatterPoint { x: 1.0, y: 2.0 },
                ScatterPoint { x: 5.0, y: 6.0 },
            ]
        );
    }

    #[test]
    fn test_pie_sums_and_keeps_unparseable_rows() {
        let rows = vec![
            Row::new().with("kind", "a").with("n", 1.0),
            Row::new().with("kind", "a").with("n", "bad"),
            Row::new().with("kind", "b").with("n", 2.0),
        ];
        let series = aggregate(&rows, "kind", "n", ChartKind::Pie);

        let ChartSeries::Pie(slices) = series else {
            panic!("expected pie series");
        };
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].label, "a");
        assert_eq!(slices[0].value, 1.0);
        assert_eq!(slices[1].value, 2.0);
    }

    #[test]
    fn test_histogram_bin_counts_sum_to_input() {
        let rows: Vec<Row> = (1..=10).map(|i| Row::new().with("v", i as f64)).collect();
        let series = aggregate(&rows, "v", "", ChartKind::Histogram);

        let ChartSeries::Histogram(bins) = series else {
            panic!("expected histogram series");
        };
        // ceil(sqrt(10)) = 4 equal-width bins over [1, 10].
        assert_eq!(bins.len(), 4);
        assert_eq!(bins.iter().map(|b| b.y).sum::<usize>(), 10);

        let width = 9.0 / 4.0;
        for (i, bin) in bins.iter().enumerate() {
            assert!((bin.x - (1.0 + (i as f64 + 0.5) * width)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_histogram_caps_bins_at_ten() {
        let rows: Vec<Row> = (0..400).map(|i| Row::new().with("v", i as f64)).collect();
        let series = aggregate(&rows, "v", "", ChartKind::Histogram);
        let ChartSeries::Histogram(bins) = series else {
            panic!("expected histogram series");
        };
        assert_eq!(bins.len(), MAX_HISTOGRAM_BINS);
        assert_eq!(bins.iter().map(|b| b.y).sum::<usize>(), 400);
    }

    #[test]
    fn test_histogram_degenerate_single_value() {
        let rows = vec![
            Row::new().with("v", 5.0),
            Row::new().with("v", 5.0),
            Row::new().with("v", 5.0),
        ];
        let series = aggregate(&rows, "v", "", ChartKind::Histogram);
        let ChartSeries::Histogram(bins) = series else {
            panic!("expected histogram series");
        };
        // max == min: width 0, everything in bin 0.
        assert_eq!(bins.len(), 2);
        assert_eq!(bins[0].y, 3);
        assert_eq!(bins[1].y, 0);
        assert_eq!(bins[0].x, 5.0);
    }

    #[test]
    fn test_histogram_empty_when_nothing_parses() {
        let rows = vec![Row::new().with("v", "words")];
        let series = aggregate(&rows, "v", "", ChartKind::Histogram);
        assert!(series.is_empty());
    }

    #[test]
    fn test_box_quantiles_are_nearest_rank() {
        let rows: Vec<Row> = [7.0, 1.0, 5.0, 3.0]
            .iter()
            .map(|v| Row::new().with("g", "all").with("v", *v))
            .collect();
        let series = aggregate(&rows, "g", "v", ChartKind::Box);

        let ChartSeries::Box(groups) = series else {
            panic!("expected box series");
        };
        assert_eq!(groups.len(), 1);
        let b = &groups[0];
        // Sorted: [1, 3, 5, 7]; ranks floor(4p) = 1, 2, 3.
        assert_eq!(b.min, 1.0);
        assert_eq!(b.q1, 3.0);
        assert_eq!(b.median, 5.0);
        assert_eq!(b.q3, 7.0);
        assert_eq!(b.max, 7.0);
    }

    #[test]
    fn test_box_ordering_invariant_per_group() {
        let rows: Vec<Row> = (0..25)
            .map(|i| {
                Row::new()
                    .with("g", if i % 2 == 0 { "even" } else { "odd" })
                    .with("v", (i * 37 % 11) as f64)
            })
            .collect();
        let series = aggregate(&rows, "g", "v", ChartKind::Box);
        let ChartSeries::Box(groups) = series else {
            panic!("expected box series");
        };
        assert_eq!(groups.len(), 2);
        for b in &groups {
            assert!(b.min <= b.q1);
            assert!(b.q1 <= b.median);
            assert!(b.median <= b.q3);
            assert!(b.q3 <= b.max);
        }
    }

    #[test]
    fn test_box_skips_groups_without_numbers() {
        let rows = vec![
            Row::new().with("g", "ok").with("v", 2.0),
            Row::new().with("g", "words").with("v", "nope"),
        ];
        let series = aggregate(&rows, "g", "v", ChartKind::Box);
        let ChartSeries::Box(groups) = series else {
            panic!("expected box series");
        };
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].x, "ok");
    }
}
