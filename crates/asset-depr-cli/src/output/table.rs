use serde_json::Value;
use tabled::{builder::Builder, Table};

/// Format output as a table using the tabled crate.
///
/// Entry arrays become one row per posting leg; diagnostics and totals
/// are printed as trailing sections.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => {
            if let Some(Value::Array(entries)) = map.get("generated").or_else(|| map.get("entries"))
            {
                print_entries_table(entries);
                print_totals(map);
                print_diagnostics(map.get("diagnostics"));
            } else if let Some(Value::Array(dates)) = map.get("closing_dates") {
                print_closing_dates(dates);
            } else {
                print_flat_object(value);
            }
        }
        Value::Array(arr) => {
            print_entries_table(arr);
        }
        _ => {
            println!("{}", value);
        }
    }
}

fn print_entries_table(entries: &[Value]) {
    if entries.is_empty() {
        println!("(no entries)");
        return;
    }

    let mut builder = Builder::default();
    builder.push_record(["Date", "Narration", "Account", "Amount"]);

    for entry in entries {
        let Value::Object(entry) = entry else { continue };
        let date = entry.get("date").and_then(Value::as_str).unwrap_or_default();
        let narration = entry
            .get("narration")
            .and_then(Value::as_str)
            .unwrap_or_default();

        let postings = match entry.get("postings") {
            Some(Value::Array(postings)) => postings.as_slice(),
            _ => &[],
        };
        for (i, posting) in postings.iter().enumerate() {
            let Value::Object(posting) = posting else { continue };
            let account = posting
                .get("account")
                .and_then(Value::as_str)
                .unwrap_or_default();
            // Leading rows carry the entry fields; the other legs are
            // indented blanks, ledger-style.
            let (d, n) = if i == 0 { (date, narration) } else { ("", "") };
            builder.push_record([d, n, account, &format_amount(posting.get("amount"))]);
        }
    }

    println!("{}", Table::from(builder));
}

fn print_totals(map: &serde_json::Map<String, Value>) {
    let currency = map
        .get("currency")
        .and_then(Value::as_str)
        .unwrap_or_default();
    if let Some(total) = map.get("total_depreciation") {
        println!("\nTotal depreciation: {} {}", format_value(total), currency);
    }
    if let Some(residual) = map.get("residual_value") {
        println!("Residual value:     {} {}", format_value(residual), currency);
    }
}

fn print_diagnostics(diagnostics: Option<&Value>) {
    let Some(Value::Array(diagnostics)) = diagnostics else {
        return;
    };
    if diagnostics.is_empty() {
        return;
    }

    println!("\nDiagnostics:");
    for diagnostic in diagnostics {
        if let Value::Object(d) = diagnostic {
            println!(
                "  - {} {}: {}",
                d.get("date").and_then(Value::as_str).unwrap_or_default(),
                d.get("account").and_then(Value::as_str).unwrap_or_default(),
                d.get("error").and_then(Value::as_str).unwrap_or_default(),
            );
        }
    }
}

fn print_closing_dates(dates: &[Value]) {
    if dates.is_empty() {
        println!("(no closing dates)");
        return;
    }
    let mut builder = Builder::default();
    builder.push_record(["Closing Date"]);
    for date in dates {
        builder.push_record([format_value(date)]);
    }
    println!("{}", Table::from(builder));
}

fn print_flat_object(value: &Value) {
    if let Value::Object(map) = value {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in map {
            builder.push_record([key.clone(), format_value(val)]);
        }
        println!("{}", Table::from(builder));
    }
}

fn format_amount(amount: Option<&Value>) -> String {
    let Some(Value::Object(amount)) = amount else {
        return String::new();
    };
    format!(
        "{} {}",
        amount.get("number").map(format_value).unwrap_or_default(),
        amount
            .get("currency")
            .and_then(Value::as_str)
            .unwrap_or_default(),
    )
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(format_value).collect();
            items.join(", ")
        }
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}
