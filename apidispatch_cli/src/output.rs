use serde_json::Value;
use tabled::builder::Builder;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Markdown,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Self {
        match s {
            "json" => OutputFormat::Json,
            "markdown" | "md" => OutputFormat::Markdown,
            _ => OutputFormat::Table,
        }
    }
}

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "Field")]
    field: String,
    #[tabled(rename = "Value")]
    value: String,
}

/// One row per top-level field of an object.
fn build_field_rows(object: &serde_json::Map<String, Value>) -> Vec<FieldRow> {
    object
        .iter()
        .map(|(k, v)| FieldRow {
            field: k.clone(),
            value: cell(v),
        })
        .collect()
}

/// Column headers are the union of the objects' keys, in first-seen order.
/// Non-object items land in a single `value` column.
fn build_record_rows(items: &[Value]) -> (Vec<String>, Vec<Vec<String>>) {
    let mut columns: Vec<String> = Vec::new();
    for item in items {
        match item {
            Value::Object(map) => {
                for key in map.keys() {
                    if !columns.contains(key) {
                        columns.push(key.clone());
                    }
                }
            }
            _ => {
                if !columns.iter().any(|c| c == "value") {
                    columns.push("value".to_string());
                }
            }
        }
    }

    let rows = items
        .iter()
        .map(|item| {
            columns
                .iter()
                .map(|col| match item {
                    Value::Object(map) => map.get(col).map(cell).unwrap_or_default(),
                    other if col == "value" => cell(other),
                    _ => String::new(),
                })
                .collect()
        })
        .collect();
    (columns, rows)
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn render_table(value: &Value) -> Option<Table> {
    match value {
        Value::Object(map) => Some(Table::new(build_field_rows(map))),
        Value::Array(items) if !items.is_empty() => {
            let (columns, rows) = build_record_rows(items);
            let mut builder = Builder::default();
            builder.push_record(columns);
            for row in rows {
                builder.push_record(row);
            }
            Some(builder.build())
        }
        _ => None,
    }
}

pub fn print_value(value: &Value, format: &OutputFormat) {
    match format {
        OutputFormat::Json => print_json(value),
        OutputFormat::Table => match render_table(value) {
            Some(table) => println!("{}", table),
            None => println!("{}", cell(value)),
        },
        OutputFormat::Markdown => match render_table(value) {
            Some(mut table) => {
                table.with(Style::markdown());
                println!("{}", table);
            }
            None => println!("{}", cell(value)),
        },
    }
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}
