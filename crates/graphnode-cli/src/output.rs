//! Output formatting utilities

use graphnode_core::Record;
use serde::Serialize;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl From<&str> for OutputFormat {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "table" => Self::Table,
            _ => Self::Json,
        }
    }
}

/// Pretty JSON
pub fn format_json<T: Serialize>(data: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(data)?)
}

/// Plain-text table: one row per node
pub fn format_table(nodes: &[&Record]) -> String {
    const HEADERS: [&str; 4] = ["NODE_ID", "LABELS", "DEGREE", "PROPERTIES"];

    let rows: Vec<[String; 4]> = nodes
        .iter()
        .map(|node| {
            let properties: Vec<String> = node
                .properties
                .iter()
                .map(|(key, value)| format!("{}={}", key, value))
                .collect();
            [
                node.id.to_string(),
                node.labels.join(","),
                format!(
                    "{}/{}/{}",
                    node.degree.incoming, node.degree.outgoing, node.degree.total
                ),
                properties.join("; "),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let render = |cells: [&str; 4]| -> String {
        let line: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect();
        line.join("  ").trim_end().to_string()
    };

    let mut out = vec![render(HEADERS)];
    out.extend(rows.iter().map(|[id, labels, degree, properties]| {
        render([id.as_str(), labels.as_str(), degree.as_str(), properties.as_str()])
    }));
    out.join("\n")
}
