use crate::domain::constants::MAPI_KEY_HEADER;
use crate::domain::models::Node;
use serde_json::Value;

/// Fault taxonomy at the gateway boundary. A rejected credential is not a
/// fault: the verification payload is forwarded as-is.
#[derive(thiserror::Error, Debug)]
pub enum GatewayError {
    #[error("network fault")]
    Network(#[source] reqwest::Error),
    #[error("malformed response: body is not valid JSON")]
    Malformed(#[source] serde_json::Error),
    #[error("unexpected response shape: {0}")]
    Shape(String),
}

pub struct Gateway {
    base: String,
    program: String,
    client: reqwest::blocking::Client,
}

impl Gateway {
    /// No explicit timeout is configured; the platform default applies.
    pub fn new(base: &str, program: &str) -> Result<Self, GatewayError> {
        let client = reqwest::blocking::Client::builder()
            .build()
            .map_err(GatewayError::Network)?;
        Ok(Self {
            base: base.trim_end_matches('/').to_string(),
            program: program.to_string(),
            client,
        })
    }

    fn get_json(&self, url: &str, credential: &str) -> Result<Value, GatewayError> {
        let resp = self
            .client
            .get(url)
            .header(MAPI_KEY_HEADER, credential)
            .send()
            .map_err(GatewayError::Network)?;
        let body = resp.text().map_err(GatewayError::Network)?;
        serde_json::from_str(&body).map_err(GatewayError::Malformed)
    }

    /// `GET {base}/mapikey/verify`. The parsed body is returned regardless of
    /// HTTP status; this client does not interpret authentication semantics.
    pub fn verify_key(&self, credential: &str) -> Result<Value, GatewayError> {
        self.get_json(&format!("{}/mapikey/verify", self.base), credential)
    }

    /// `GET {base}/{program}/db/node`, transformed into records in the
    /// mapping's enumeration order.
    pub fn list_nodes(&self, credential: &str) -> Result<Vec<Node>, GatewayError> {
        let body = self.get_json(&format!("{}/{}/db/node", self.base, self.program), credential)?;
        parse_node_map(&body)
    }
}

/// Transform `{"NODE": {key: {"X","Y","Z"}}}` into records. Order is whatever
/// the backend returned; the client does not sort.
pub fn parse_node_map(body: &Value) -> Result<Vec<Node>, GatewayError> {
    let nodes = body
        .get("NODE")
        .ok_or_else(|| GatewayError::Shape("missing NODE mapping".to_string()))?;
    let map = nodes
        .as_object()
        .ok_or_else(|| GatewayError::Shape("NODE is not an object mapping".to_string()))?;

    let mut out = Vec::with_capacity(map.len());
    for (key, entry) in map {
        out.push(Node {
            key: key.clone(),
            x: coordinate(entry, key, "X")?,
            y: coordinate(entry, key, "Y")?,
            z: coordinate(entry, key, "Z")?,
        });
    }
    Ok(out)
}

fn coordinate(entry: &Value, key: &str, axis: &str) -> Result<f64, GatewayError> {
    entry
        .get(axis)
        .and_then(Value::as_f64)
        .ok_or_else(|| GatewayError::Shape(format!("node {}: {} is not a number", key, axis)))
}

#[cfg(test)]
mod tests {
    use super::{parse_node_map, GatewayError};
    use serde_json::json;

    #[test]
    fn parses_records_with_sign_and_fraction() {
        let body = json!({
            "NODE": {
                "N1": {"X": 1, "Y": 2, "Z": 3},
                "N2": {"X": -1, "Y": 0, "Z": 5.5}
            }
        });
        let nodes = parse_node_map(&body).expect("valid node map");
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].key, "N1");
        assert_eq!((nodes[0].x, nodes[0].y, nodes[0].z), (1.0, 2.0, 3.0));
        assert_eq!(nodes[1].key, "N2");
        assert_eq!((nodes[1].x, nodes[1].y, nodes[1].z), (-1.0, 0.0, 5.5));
    }

    #[test]
    fn preserves_backend_enumeration_order() {
        // keys deliberately not in sorted order
        let body: serde_json::Value = serde_json::from_str(
            r#"{"NODE": {"N9": {"X":1,"Y":1,"Z":1}, "N1": {"X":2,"Y":2,"Z":2}}}"#,
        )
        .expect("valid json");
        let nodes = parse_node_map(&body).expect("valid node map");
        assert_eq!(nodes[0].key, "N9");
        assert_eq!(nodes[1].key, "N1");
    }

    #[test]
    fn missing_node_mapping_is_a_shape_fault() {
        let err = parse_node_map(&json!({"ELEM": {}})).unwrap_err();
        assert!(matches!(err, GatewayError::Shape(_)));
        assert!(err.to_string().contains("missing NODE mapping"));
    }

    #[test]
    fn non_object_node_field_is_a_shape_fault() {
        let err = parse_node_map(&json!({"NODE": [1, 2, 3]})).unwrap_err();
        assert!(matches!(err, GatewayError::Shape(_)));
    }

    #[test]
    fn non_numeric_coordinate_is_a_shape_fault() {
        let err =
            parse_node_map(&json!({"NODE": {"N1": {"X": "one", "Y": 2, "Z": 3}}})).unwrap_err();
        assert!(err.to_string().contains("N1"));
        assert!(err.to_string().contains("X"));
    }
}
