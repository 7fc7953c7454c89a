use anyhow::Result;
use comodo_api::Normalized;
use serde_json::Value;

/// Prints a normalized result as one JSON document.
pub fn print(result: &Normalized, compact: bool) -> Result<()> {
    let value = match result {
        Normalized::Records(records) => Value::Array(records.clone()),
        Normalized::Single(record) => record.clone(),
    };
    let rendered = if compact {
        serde_json::to_string(&value)?
    } else {
        serde_json::to_string_pretty(&value)?
    };
    println!("{rendered}");
    Ok(())
}
