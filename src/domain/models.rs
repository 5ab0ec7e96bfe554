use serde::Serialize;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct ErrorOut {
    pub ok: bool,
    pub error: ErrorBody,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

/// A named point returned by the node listing endpoint.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Node {
    pub key: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Renderable grid: column names in display order plus order-correspondent rows.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct TableRow {
    /// Identity derived from the row's own cell values; identical tuples collide.
    pub id: String,
    pub cells: Vec<serde_json::Value>,
}

/// Outcome of reading the credential from an href's query component.
/// Present-but-empty is distinct from absent.
#[derive(Serialize)]
pub struct KeyReport {
    pub present: bool,
    pub value: Option<String>,
}

/// Outcome of applying a credential query string to an href.
#[derive(Serialize)]
pub struct ApplyReport {
    pub applied: bool,
    pub location: String,
}
