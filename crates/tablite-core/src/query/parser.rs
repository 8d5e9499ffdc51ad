/// Intent pattern-matcher
///
/// Resolves a free-form query string to a [`QueryIntent`] by keyword
/// detection over the uppercased text. The rules form an ordered priority
/// list, first match wins: a query containing both `SELECT ... FROM` and a
/// `WHERE` clause is a SELECT, and the WHERE clause is ignored. Later rules
/// are unreachable once an earlier one matches; the ordering is part of the
/// observable contract.
use super::intent::QueryIntent;

/// Resolves `query` against the table's declared columns.
///
/// Unresolvable constructs degrade to [`QueryIntent::Select`] instead of
/// erroring: an unknown GROUP BY column falls back to a full pass-through.
pub fn parse_intent(query: &str, columns: &[String]) -> QueryIntent {
    let upper = query.to_ascii_uppercase();

    if upper.contains("SELECT") && upper.contains("FROM") {
        return QueryIntent::Select;
    }

    if upper.contains("COUNT") || upper.contains("SUM") || upper.contains("AVG") {
        return QueryIntent::Aggregate;
    }

    if let Some(at) = upper.find("GROUP BY") {
        // Identifier is taken from the original text to keep its casing.
        let rest = &query[at + "GROUP BY".len()..];
        let column: String = rest
            .trim_start()
            .chars()
            .take_while(|c| c.is_alphanumeric() || *c == '_')
            .collect();

        if !column.is_empty() && columns.iter().any(|c| *c == column) {
            return QueryIntent::GroupBy { column };
        }
        return QueryIntent::Select;
    }

    if let Some(at) = upper.find("WHERE") {
        let start = at + "WHERE".len();
        let tail = &upper[start..];
        let end = ["GROUP BY", "ORDER BY"]
            .iter()
            .filter_map(|kw| tail.find(kw))
            .min()
            .unwrap_or(tail.len());
        let clause = query[start..start + end].trim().to_string();
        return QueryIntent::Filter { clause };
    }

    QueryIntent::Select
}
