/// Chart Aggregation Demo
///
/// Builds chart-ready series and prints advisory hints.
use tablite::{ChartKind, ChartSeries, Dataset};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Tablite Chart Demo ===\n");

    let json = r#"[
        {"team": "red",  "points": 12},
        {"team": "blue", "points": 7},
        {"team": "red",  "points": 18},
        {"team": "blue", "points": 9},
        {"team": "gold", "points": 31},
        {"team": "red",  "points": 15}
    ]"#;
    let dataset = Dataset::from_json_str(json)?;

    println!("1. bar: average points per team");
    if let Some(ChartSeries::Category(points)) =
        dataset.chart(ChartKind::Bar, "team", "points").series
    {
        for p in points {
            println!("   {:6} avg={:.1} count={}", p.x, p.y, p.count);
        }
    }

    println!("\n2. histogram: distribution of points");
    if let Some(ChartSeries::Histogram(bins)) =
        dataset.chart(ChartKind::Histogram, "points", "").series
    {
        for bin in bins {
            println!("   center={:6.2} count={}", bin.x, bin.y);
        }
    }

    println!("\n3. box: five-number summary per team");
    if let Some(ChartSeries::Box(groups)) = dataset.chart(ChartKind::Box, "team", "points").series
    {
        for g in groups {
            println!(
                "   {:6} min={} q1={} median={} q3={} max={}",
                g.x, g.min, g.q1, g.median, g.q3, g.max
            );
        }
    }

    println!("\n4. advisories for a pie chart");
    for hint in dataset.advise(ChartKind::Pie, "team", "points") {
        println!("   - {}", hint);
    }

    println!("\n=== Chart Demo Complete ===");
    Ok(())
}
