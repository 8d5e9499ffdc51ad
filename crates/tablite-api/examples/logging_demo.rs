/// Logging Demo
///
/// Shows engine diagnostics flowing through the tracing subscriber.
use tablite::logging::{LogConfig, LogFormat};
use tablite::{ChartKind, Dataset};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Keep the guard alive for the lifetime of the program.
    let _guard = LogConfig::debug().with_format(LogFormat::Compact).init();

    let dataset = Dataset::from_csv_str("region,amount\neast,10\nwest,20\n")?;
    let _ = dataset.query("group by region");
    let _ = dataset.chart(ChartKind::Histogram, "amount", "");

    println!("Check the logs above to see engine diagnostics!");
    Ok(())
}
