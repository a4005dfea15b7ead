use serde_json::Value;

/// Print just the key answer value from the output.
///
/// Heuristic: the schedule total if present, then the generated entry
/// count, then the closing dates, then the first field.
pub fn print_minimal(value: &Value) {
    let Value::Object(map) = value else {
        println!("{}", format_minimal(value));
        return;
    };

    if let Some(total) = map.get("total_depreciation") {
        println!("{}", format_minimal(total));
        return;
    }

    if let Some(Value::Array(generated)) = map.get("generated") {
        println!("{}", generated.len());
        return;
    }

    if let Some(Value::Array(dates)) = map.get("closing_dates") {
        for date in dates {
            println!("{}", format_minimal(date));
        }
        return;
    }

    if let Some((key, val)) = map.iter().next() {
        println!("{}: {}", key, format_minimal(val));
    }
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
