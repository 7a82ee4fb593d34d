// src/multipart.rs
//! `multipart/form-data` helpers
//!
//! [`FormFieldSink`] is the one primitive an HTTP body builder has to offer:
//! append raw bytes under a field name. Parameter maps, serializable structs
//! and JSON blobs are layered on top of it. [`MultipartForm`] is a small
//! in-memory builder producing RFC 7578 bodies.

use rand::distr::Alphanumeric;
use rand::Rng;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::consts::MULTIPART_BOUNDARY_PREFIX;
use crate::json::to_json_map;

pub trait FormFieldSink {
    fn append_field(&mut self, name: &str, data: &[u8]);

    /// Append every entry as its own field. Strings are sent raw, any other
    /// value as its JSON text.
    fn append_parameters(&mut self, parameters: &Map<String, Value>) {
        for (key, value) in parameters {
            match value {
                Value::String(text) => self.append_field(key, text.as_bytes()),
                other => self.append_field(key, other.to_string().as_bytes()),
            }
        }
    }

    /// Flatten a serializable struct into fields. Values that do not
    /// serialize to a JSON object append nothing.
    fn append_serializable<T: Serialize + ?Sized>(&mut self, value: &T)
    where
        Self: Sized,
    {
        match to_json_map(value) {
            Ok(map) => self.append_parameters(&map),
            Err(err) => debug!(error = %err, "skipping non-object form value"),
        }
    }

    /// Append the whole map as one compact JSON field
    fn append_as_json(&mut self, name: &str, data: &Map<String, Value>) {
        let json = Value::Object(data.clone()).to_string();
        self.append_field(name, json.as_bytes());
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Part {
    name: String,
    data: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct MultipartForm {
    boundary: String,
    parts: Vec<Part>,
}

impl Default for MultipartForm {
    fn default() -> Self {
        Self::new()
    }
}

impl MultipartForm {
    /// Empty form with a random boundary
    pub fn new() -> Self {
        let suffix: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(16)
            .map(char::from)
            .collect();
        Self::with_boundary(format!("{MULTIPART_BOUNDARY_PREFIX}{suffix}"))
    }

    pub fn with_boundary(boundary: impl Into<String>) -> Self {
        Self {
            boundary: boundary.into(),
            parts: Vec::new(),
        }
    }

    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Value for the `Content-Type` header
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    /// Render the full request body
    pub fn encode(&self) -> Vec<u8> {
        let mut body = Vec::new();
        for part in &self.parts {
            body.extend_from_slice(format!("--{}\r\n", self.boundary).as_bytes());
            body.extend_from_slice(
                format!(
                    "Content-Disposition: form-data; name=\"{}\"\r\n\r\n",
                    escape_field_name(&part.name)
                )
                .as_bytes(),
            );
            body.extend_from_slice(&part.data);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{}--\r\n", self.boundary).as_bytes());
        body
    }
}

impl FormFieldSink for MultipartForm {
    fn append_field(&mut self, name: &str, data: &[u8]) {
        self.parts.push(Part {
            name: name.to_owned(),
            data: data.to_vec(),
        });
    }
}

// RFC 7578 §4.2: quotes and line breaks in names are percent-encoded
fn escape_field_name(name: &str) -> String {
    name.replace('"', "%22")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
