/// Query Engine Demo
///
/// Demonstrates the restricted query language over an in-memory dataset.
use tablite::{Dataset, Row, Value};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Tablite Query Demo ===\n");

    let csv = "\
name,city,age,score
Alice,NYC,30,88
Bob,SF,25,72
Charlie,NYC,35,95
Diana,LA,28,81
Eve,SF,41,67
";
    let dataset = Dataset::from_csv_str(csv)?;

    // Example 1: pass-through SELECT
    println!("1. SELECT * FROM people");
    let response = dataset.query("SELECT * FROM people");
    print_rows(response.rows.as_deref().unwrap_or(&[]), &dataset);

    // Example 2: whole-table aggregate
    println!("\n2. sum of every numeric column");
    let response = dataset.query("sum");
    print_rows(response.rows.as_deref().unwrap_or(&[]), &dataset);

    // Example 3: group by a categorical column
    println!("\n3. group by city");
    let response = dataset.query("group by city");
    print_rows(response.rows.as_deref().unwrap_or(&[]), &dataset);

    // Example 4: equality filter
    println!("\n4. where city = 'NYC'");
    let response = dataset.query("where city = 'NYC'");
    print_rows(response.rows.as_deref().unwrap_or(&[]), &dataset);

    // Example 5: unresolvable queries degrade to a pass-through
    println!("\n5. group by nonexistent (falls back to SELECT)");
    let response = dataset.query("group by nonexistent");
    println!("   query_type = {:?}", response.query_type);

    println!("\n=== Query Demo Complete ===");
    Ok(())
}

fn print_rows(rows: &[Row], dataset: &Dataset) {
    if rows.is_empty() {
        println!("   No results");
        return;
    }

    for row in rows {
        print!("   ");
        for column in dataset.columns() {
            if let Some(value) = row.get(column) {
                print!("{}={} ", column, value);
            }
        }
        // Derived fields (aggregates) are not in the declared columns list.
        for prefix in ["count_", "sum_", "avg_", "min_", "max_"] {
            for column in dataset.columns() {
                let name = format!("{}{}", prefix, column);
                if let Some(Value::Number(n)) = row.get(&name) {
                    print!("{}={} ", name, n);
                }
            }
        }
        println!();
    }
}
