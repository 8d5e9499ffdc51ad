//! Chart advisory heuristics
//!
//! Inspects a table together with the chosen chart kind and axes, and emits
//! human-readable advisory strings. Advisories are ordered and cumulative:
//! every applicable heuristic contributes one entry.
//!
//! Numeric-ness here is judged over the whole column, not the sampled window
//! the classifier uses. The two notions can disagree on columns whose
//! numbers only appear late; both behaviors are intentional and kept apart.

use crate::chart::ChartKind;
use crate::stats::{mean, population_std};
use crate::table::Row;

/// Multiple of the standard deviation beyond which a value is an outlier.
const OUTLIER_SIGMA: f64 = 2.0;

/// Runs every heuristic and collects the applicable advisories in order.
pub fn recommend(rows: &[Row], kind: ChartKind, x: &str, y: &str) -> Vec<String> {
    let mut advisories = Vec::new();
    let x_numeric = has_numbers(rows, x);

    if x_numeric && kind == ChartKind::Bar {
        advisories.push(format!(
            "Column '{}' is numeric; a line chart may show its trend better than a bar chart.",
            x
        ));
    }

    if !x_numeric && kind == ChartKind::Line {
        advisories.push(format!(
            "Column '{}' is categorical; a bar chart may be a better fit than a line chart.",
            x
        ));
    }

    if kind == ChartKind::Scatter && (!x_numeric || !has_numbers(rows, y)) {
        advisories.push(format!(
            "Scatter plots need numeric data on both axes; '{}' or '{}' is not numeric.",
            x, y
        ));
    }

    if kind == ChartKind::Pie && rows.len() > 10 {
        advisories.push(format!(
            "Pie chart has more than 10 categories ({} rows); consider a bar chart instead.",
            rows.len()
        ));
    }

    if let Some(count) = outlier_count(rows, y) {
        if count > 0 {
            advisories.push(format!(
                "Found {} outlier value(s) in '{}'; a box plot would show their spread.",
                count, y
            ));
        }
    }

    advisories
}

/// Full-column scan: does any value of `column` parse as a finite number?
fn has_numbers(rows: &[Row], column: &str) -> bool {
    rows.iter().any(|row| row.number(column).is_some())
}

/// Counts values more than [`OUTLIER_SIGMA`] standard deviations from the
/// mean. `None` when the column has no parseable values at all.
fn outlier_count(rows: &[Row], column: &str) -> Option<usize> {
    let values: Vec<f64> = rows.iter().filter_map(|row| row.number(column)).collect();
    let m = mean(&values)?;
    let sd = population_std(&values, m);
    Some(
        values
            .iter()
            .filter(|v| (*v - m).abs() > OUTLIER_SIGMA * sd)
            .count(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Row;

    fn table(xs: &[&str], ys: &[f64]) -> Vec<Row> {
        xs.iter()
            .zip(ys)
            .map(|(x, y)| Row::new().with("x", *x).with("y", *y))
            .collect()
    }

    #[test]
    fn test_numeric_x_on_bar_suggests_line() {
        let rows = vec![
            Row::new().with("x", 1.0).with("y", 2.0),
            Row::new().with("x", 2.0).with("y", 3.0),
        ];
        let advisories = recommend(&rows, ChartKind::Bar, "x", "y");
        assert!(advisories.iter().any(|a| a.contains("line chart")));
    }

    #[test]
    fn test_categorical_x_on_line_suggests_bar() {
        let rows = table(&["a", "b"], &[1.0, 2.0]);
        let advisories = recommend(&rows, ChartKind::Line, "x", "y");
        assert!(advisories.iter().any(|a| a.contains("bar chart")));
    }

    #[test]
    fn test_full_scan_differs_from_sampled_classifier() {
        // Numbers that appear only after the classifier's sample window
        // still make the column numeric for advisory purposes.
        let mut rows: Vec<Row> = (0..12)
            .map(|_| Row::new().with("x", "label").with("y", 1.0))
            .collect();
        rows.push(Row::new().with("x", 3.0).with("y", 1.0));

        let advisories = recommend(&rows, ChartKind::Bar, "x", "y");
        assert!(advisories.iter().any(|a| a.contains("line chart")));
    }

    #[test]
    fn test_scatter_needs_numeric_axes() {
        let rows = table(&["a", "b"], &[1.0, 2.0]);
        let advisories = recommend(&rows, ChartKind::Scatter, "x", "y");
        assert!(advisories.iter().any(|a| a.contains("numeric data")));

        let numeric = vec![Row::new().with("x", 1.0).with("y", 2.0)];
        let advisories = recommend(&numeric, ChartKind::Scatter, "x", "y");
        assert!(advisories.is_empty());
    }

    #[test]
    fn test_pie_advisory_appears_above_ten_rows() {
        let xs: Vec<String> = (0..15).map(|i| format!("c{}", i)).collect();
        let rows: Vec<Row> = xs
            .iter()
            .map(|x| Row::new().with("x", x.as_str()).with("y", 1.0))
            .collect();
        let advisories = recommend(&rows, ChartKind::Pie, "x", "y");
        assert!(advisories
            .iter()
            .any(|a| a.contains("more than 10 categories")));
    }

    #[test]
    fn test_pie_advisory_absent_at_ten_rows_or_fewer() {
        let xs: Vec<String> = (0..10).map(|i| format!("c{}", i)).collect();
        let rows: Vec<Row> = xs
            .iter()
            .map(|x| Row::new().with("x", x.as_str()).with("y", 1.0))
            .collect();
        let advisories = recommend(&rows, ChartKind::Pie, "x", "y");
        assert!(!advisories
            .iter()
            .any(|a| a.contains("more than 10 categories")));
    }

    #[test]
    fn test_outliers_suggest_box_plot() {
        let mut ys = vec![10.0; 20];
        ys.push(1000.0);
        let xs: Vec<&str> = std::iter::repeat("g").take(21).collect();
        let rows = table(&xs, &ys);

        let advisories = recommend(&rows, ChartKind::Bar, "x", "y");
        assert!(advisories.iter().any(|a| a.contains("1 outlier")));
        assert!(advisories.iter().any(|a| a.contains("box plot")));
    }

    #[test]
    fn test_no_outliers_in_uniform_data() {
        let rows = table(&["a", "b", "c"], &[5.0, 5.0, 5.0]);
        let advisories = recommend(&rows, ChartKind::Bar, "x", "y");
        assert!(!advisories.iter().any(|a| a.contains("outlier")));
    }

    #[test]
    fn test_advisory_order_is_stable() {
        // Pie with many rows and outliers: pie advisory precedes outliers.
        let mut ys = vec![1.0; 14];
        ys.push(500.0);
        let xs: Vec<String> = (0..15).map(|i| format!("c{}", i)).collect();
        let rows: Vec<Row> = xs
            .iter()
            .zip(&ys)
            .map(|(x, y)| Row::new().with("x", x.as_str()).with("y", *y))
            .collect();

        let advisories = recommend(&rows, ChartKind::Pie, "x", "y");
        assert_eq!(advisories.len(), 2);
        assert!(advisories[0].contains("more than 10 categories"));
        assert!(advisories[1].contains("outlier"));
    }
}
