use serde_json::Value;
use std::io;

/// Write output as CSV to stdout.
///
/// Entry arrays become one record per posting leg; other shapes fall
/// back to two-column field/value records.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    match value {
        Value::Object(map) => {
            if let Some(Value::Array(entries)) = map.get("generated").or_else(|| map.get("entries"))
            {
                write_entries_csv(&mut wtr, entries);
            } else if let Some(Value::Array(dates)) = map.get("closing_dates") {
                let _ = wtr.write_record(["closing_date"]);
                for date in dates {
                    let _ = wtr.write_record([format_csv_value(date)]);
                }
            } else {
                let _ = wtr.write_record(["field", "value"]);
                for (key, val) in map {
                    let _ = wtr.write_record([key.as_str(), &format_csv_value(val)]);
                }
            }
        }
        Value::Array(arr) => {
            write_entries_csv(&mut wtr, arr);
        }
        _ => {
            let _ = wtr.write_record([&format_csv_value(value)]);
        }
    }

    let _ = wtr.flush();
}

fn write_entries_csv(wtr: &mut csv::Writer<io::StdoutLock<'_>>, entries: &[Value]) {
    let _ = wtr.write_record(["date", "narration", "account", "number", "currency"]);

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
        for posting in postings {
            let Value::Object(posting) = posting else { continue };
            let account = posting
                .get("account")
                .and_then(Value::as_str)
                .unwrap_or_default();
            let (number, currency) = match posting.get("amount") {
                Some(Value::Object(amount)) => (
                    amount.get("number").map(format_csv_value).unwrap_or_default(),
                    amount
                        .get("currency")
                        .and_then(Value::as_str)
                        .unwrap_or_default()
                        .to_string(),
                ),
                _ => (String::new(), String::new()),
            };
            let _ = wtr.write_record([date, narration, account, &number, &currency]);
        }
    }
}

fn format_csv_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
