//! A rendering-agnostic chart description.
//!
//! Charts are described as Vega-Lite documents: inline data plus marks,
//! encodings and scales. Anything that understands Vega-Lite can draw them;
//! the web app hands them to `vegaEmbed`, the CLI writes them to disk.

use serde::Serialize;
use serde_json::{json, Map, Value};

/// Vega-Lite schema every spec declares.
pub const VEGA_LITE_SCHEMA: &str = "https://vega.github.io/schema/vega-lite/v5.json";

/// A complete Vega-Lite chart document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ChartSpec(Value);

impl ChartSpec {
    /// Wrap a chart body, adding the schema, title and container width.
    pub fn new(title: &str, body: Value) -> Self {
        let mut doc = Map::new();
        doc.insert("$schema".into(), json!(VEGA_LITE_SCHEMA));
        doc.insert("title".into(), json!(title));
        doc.insert("width".into(), json!("container"));
        if let Value::Object(fields) = body {
            doc.extend(fields);
        }
        Self(Value::Object(doc))
    }

    pub fn as_json(&self) -> &Value {
        &self.0
    }

    pub fn title(&self) -> Option<&str> {
        self.0.get("title").and_then(Value::as_str)
    }

    /// The mark type of a single-view chart, e.g. `"bar"`.
    pub fn mark(&self) -> Option<&str> {
        mark_of(&self.0)
    }

    /// Sub-views of a layered chart; empty for single-view charts.
    pub fn layers(&self) -> &[Value] {
        self.0
            .get("layer")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of inline data rows on the top-level view.
    pub fn row_count(&self) -> usize {
        data_rows(&self.0)
    }

    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.0)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.0)
    }
}

pub(crate) fn mark_of(view: &Value) -> Option<&str> {
    match view.get("mark")? {
        Value::String(s) => Some(s),
        Value::Object(m) => m.get("type").and_then(Value::as_str),
        _ => None,
    }
}

pub(crate) fn data_rows(view: &Value) -> usize {
    view.pointer("/data/values")
        .and_then(Value::as_array)
        .map_or(0, Vec::len)
}

/// A quantitative encoding channel.
pub(crate) fn quantitative(field: &str, title: &str) -> Value {
    json!({ "field": field, "type": "quantitative", "title": title })
}

/// Pan/zoom bound to the scales, the Vega-Lite form of an interactive chart.
pub(crate) fn interactive() -> Value {
    json!([{ "name": "grid", "select": "interval", "bind": "scales" }])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_adds_header_fields() {
        let spec = ChartSpec::new(
            "Test chart",
            json!({ "mark": "bar", "data": { "values": [{ "a": 1 }, { "a": 2 }] } }),
        );
        let doc = spec.as_json();
        assert_eq!(doc["$schema"], VEGA_LITE_SCHEMA);
        assert_eq!(doc["width"], "container");
        assert_eq!(spec.title(), Some("Test chart"));
        assert_eq!(spec.mark(), Some("bar"));
        assert_eq!(spec.row_count(), 2);
        assert!(spec.layers().is_empty());
    }

    #[test]
    fn mark_reads_object_form() {
        let spec = ChartSpec::new("t", json!({ "mark": { "type": "circle", "size": 60 } }));
        assert_eq!(spec.mark(), Some("circle"));
    }

    #[test]
    fn serializes_as_plain_document() {
        let spec = ChartSpec::new("t", json!({ "mark": "line" }));
        let text = spec.to_json_string().unwrap();
        let back: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(&back, spec.as_json());
        assert!(text.starts_with('{'));
    }
}
