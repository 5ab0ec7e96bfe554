use crate::domain::constants::NODE_COLUMNS;
use crate::domain::models::{Node, Table, TableRow};
use serde_json::{Map, Value};

#[derive(thiserror::Error, Debug)]
pub enum TableError {
    #[error("row {row} is missing column {column}")]
    MissingColumn { row: usize, column: String },
}

/// Map column names and uniform records into a renderable grid.
///
/// Pure and deterministic: column and row order are preserved exactly,
/// inputs are not mutated, and the same inputs always produce the same grid.
/// Every row must supply a value for every column; extra fields are ignored.
pub fn build_table(columns: &[&str], rows: &[Map<String, Value>]) -> Result<Table, TableError> {
    let mut out = Vec::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        let mut cells = Vec::with_capacity(columns.len());
        for column in columns {
            let value = row.get(*column).ok_or_else(|| TableError::MissingColumn {
                row: i,
                column: column.to_string(),
            })?;
            cells.push(value.clone());
        }
        let id = cells.iter().map(cell_text).collect::<String>();
        out.push(TableRow { id, cells });
    }
    Ok(Table {
        columns: columns.iter().map(|c| c.to_string()).collect(),
        rows: out,
    })
}

/// Rows for the node table, keyed by the fixed column set.
pub fn node_rows(nodes: &[Node]) -> Vec<Map<String, Value>> {
    nodes
        .iter()
        .map(|n| {
            let mut row = Map::new();
            row.insert(NODE_COLUMNS[0].to_string(), Value::String(n.key.clone()));
            row.insert(NODE_COLUMNS[1].to_string(), number(n.x));
            row.insert(NODE_COLUMNS[2].to_string(), number(n.y));
            row.insert(NODE_COLUMNS[3].to_string(), number(n.z));
            row
        })
        .collect()
}

fn number(v: f64) -> Value {
    serde_json::Number::from_f64(v).map_or(Value::Null, Value::Number)
}

/// Display text of a single cell. Whole-valued numbers print without a
/// trailing `.0`, matching how the original surface showed coordinates.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_f64() {
            Some(f) => format!("{}", f),
            None => n.to_string(),
        },
        other => other.to_string(),
    }
}

/// Tab-separated header plus rows, one line each.
pub fn render_text(table: &Table) -> String {
    let mut lines = vec![table.columns.join("\t")];
    for row in &table.rows {
        lines.push(
            row.cells
                .iter()
                .map(cell_text)
                .collect::<Vec<_>>()
                .join("\t"),
        );
    }
    lines.join("\n")
}
