use serde::Serialize;
use serde_json::{Map, Value, json};

use crate::core::error::Result;

/// A Plotly figure: traces plus layout, serialized as-is for the browser
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Value>,
    pub layout: Value,
}

impl Default for Figure {
    fn default() -> Self {
        Self::new()
    }
}

impl Figure {
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            layout: Value::Object(Map::new()),
        }
    }

    pub fn with_trace(mut self, trace: Value) -> Self {
        self.data.push(trace);
        self
    }

    /// Deep-merge `patch` into the layout; objects merge key by key,
    /// everything else is replaced.
    pub fn update_layout(&mut self, patch: Value) {
        merge(&mut self.layout, patch);
    }

    /// Apply `patch` to every trace
    pub fn update_traces(&mut self, patch: &Value) {
        for trace in &mut self.data {
            merge(trace, patch.clone());
        }
    }

    /// Vertical line spanning the full plot height at `x`
    pub fn add_vline(&mut self, x: &str, line: Value) {
        let shape = json!({
            "type": "line",
            "xref": "x",
            "yref": "paper",
            "x0": x,
            "x1": x,
            "y0": 0,
            "y1": 1,
            "line": line,
        });

        if !self.layout.is_object() {
            self.layout = Value::Object(Map::new());
        }
        if let Some(layout) = self.layout.as_object_mut() {
            let shapes = layout
                .entry("shapes")
                .or_insert_with(|| Value::Array(Vec::new()));
            match shapes {
                Value::Array(items) => items.push(shape),
                other => *other = Value::Array(vec![shape]),
            }
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

fn merge(target: &mut Value, patch: Value) {
    match (target, patch) {
        (Value::Object(target), Value::Object(patch)) => {
            for (key, value) in patch {
                match target.get_mut(&key) {
                    Some(existing) => merge(existing, value),
                    None => {
                        target.insert(key, value);
                    }
                }
            }
        }
        (target, patch) => *target = patch,
    }
}
