//! Explicit response-schema descriptions.
//!
//! The schema sent to the provider is always an object schema with
//! `additionalProperties: false` and a `required` list covering every
//! declared property; building it from [`ObjectSchema`] makes that invariant
//! structural instead of a convention in hand-written JSON.

use serde_json::{Map, Value};

/// Kind of a declared response field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Boolean,
    Number {
        minimum: Option<f64>,
        maximum: Option<f64>,
    },
    String,
}

impl FieldKind {
    fn to_property_schema(&self) -> Value {
        match self {
            FieldKind::Boolean => serde_json::json!({ "type": "boolean" }),
            FieldKind::Number { minimum, maximum } => {
                let mut property = Map::new();
                property.insert("type".to_string(), Value::from("number"));
                if let Some(minimum) = minimum {
                    property.insert("minimum".to_string(), Value::from(*minimum));
                }
                if let Some(maximum) = maximum {
                    property.insert("maximum".to_string(), Value::from(*maximum));
                }
                Value::Object(property)
            }
            FieldKind::String => serde_json::json!({ "type": "string" }),
        }
    }
}

/// One declared response field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

/// Ordered description of an object response shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectSchema {
    fields: Vec<FieldSpec>,
}

impl ObjectSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a boolean field.
    pub fn boolean(mut self, name: &'static str) -> Self {
        self.fields.push(FieldSpec {
            name,
            kind: FieldKind::Boolean,
        });
        self
    }

    /// Declares a number field bounded to `[minimum, maximum]`.
    pub fn number_in_range(mut self, name: &'static str, minimum: f64, maximum: f64) -> Self {
        self.fields.push(FieldSpec {
            name,
            kind: FieldKind::Number {
                minimum: Some(minimum),
                maximum: Some(maximum),
            },
        });
        self
    }

    /// Declares a string field.
    pub fn string(mut self, name: &'static str) -> Self {
        self.fields.push(FieldSpec {
            name,
            kind: FieldKind::String,
        });
        self
    }

    /// Declared field names, in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|field| field.name)
    }

    /// Renders the strict JSON-schema document sent to the provider.
    pub fn to_request_schema(&self) -> Value {
        let mut properties = Map::new();
        for field in &self.fields {
            properties.insert(field.name.to_string(), field.kind.to_property_schema());
        }

        let required: Vec<&str> = self.fields.iter().map(|field| field.name).collect();

        serde_json::json!({
            "type": "object",
            "additionalProperties": false,
            "properties": properties,
            "required": required,
        })
    }

    /// Checks a parsed payload against the declared shape.
    ///
    /// Undeclared keys are rejected. Presence and kind of individual fields
    /// are left to the caller, whose refinement rules (trim, clamp, default)
    /// are looser than the wire contract.
    pub fn check_object(&self, object: &Map<String, Value>) -> Result<(), String> {
        for key in object.keys() {
            if !self.fields.iter().any(|field| field.name == key) {
                return Err(format!("unexpected key `{}` in model output", key));
            }
        }
        Ok(())
    }
}
