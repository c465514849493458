//! Argument schema derivation and validation
//!
//! Tool parameter blocks arrive in two shapes: a JSON-Schema style object
//! with a `"properties"` key, or a flat map of field name → spec. Both are
//! lowered into an explicit [`ArgsSchema`] — an ordered list of field
//! descriptions interpreted by a generic validator — rather than any kind of
//! runtime type synthesis.
//!
//! The derivation is a best-effort bridge, lossy by design: no enums, no
//! defaults, no nested objects or array item types. Every derived field is
//! required, and unrecognized type names degrade to [`FieldKind::Any`].

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Scalar kind of a schema field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// JSON string
    String,
    /// JSON integer
    Integer,
    /// JSON number
    Number,
    /// JSON boolean
    Boolean,
    /// JSON object (opaque)
    Object,
    /// JSON array (opaque)
    Array,
    /// Untyped placeholder, accepts anything
    Any,
}

impl FieldKind {
    fn from_type_name(name: &str) -> Self {
        match name {
            "string" => FieldKind::String,
            "integer" => FieldKind::Integer,
            "number" => FieldKind::Number,
            "boolean" => FieldKind::Boolean,
            "object" => FieldKind::Object,
            "array" => FieldKind::Array,
            _ => FieldKind::Any,
        }
    }

    fn json_type_name(self) -> Option<&'static str> {
        match self {
            FieldKind::String => Some("string"),
            FieldKind::Integer => Some("integer"),
            FieldKind::Number => Some("number"),
            FieldKind::Boolean => Some("boolean"),
            FieldKind::Object => Some("object"),
            FieldKind::Array => Some("array"),
            FieldKind::Any => None,
        }
    }

    fn matches(self, value: &Value) -> bool {
        match self {
            FieldKind::String => value.is_string(),
            FieldKind::Integer => value.is_i64() || value.is_u64(),
            FieldKind::Number => value.is_number(),
            FieldKind::Boolean => value.is_boolean(),
            FieldKind::Object => value.is_object(),
            FieldKind::Array => value.is_array(),
            FieldKind::Any => true,
        }
    }
}

/// Description of one accepted argument
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Field name
    pub name: String,
    /// Expected kind
    pub kind: FieldKind,
    /// Description carried through from the parameter block
    pub description: Option<String>,
    /// Whether the field must be present
    pub required: bool,
}

/// A problem found while validating arguments against a schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Field the issue applies to
    pub field: String,
    /// Human-readable message
    pub message: String,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Ordered argument schema for one tool
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArgsSchema {
    fields: Vec<FieldSpec>,
}

impl ArgsSchema {
    /// Create an empty schema (tool takes no arguments)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Derive a schema from a tool's parameter block
    ///
    /// Accepts either a `"properties"`-wrapped JSON-Schema object or a flat
    /// field map. Anything that is not a JSON object yields an empty schema.
    pub fn from_parameters(parameters: &Value) -> Self {
        let Some(block) = parameters.as_object() else {
            return Self::empty();
        };

        match block.get("properties").and_then(Value::as_object) {
            Some(properties) => Self::from_field_map(properties, FieldKind::Any),
            None => Self::from_field_map(block, FieldKind::String),
        }
    }

    /// Lower a field map into specs
    ///
    /// `fallback` is the kind used when a field declares no `"type"`: `Any`
    /// for the JSON-Schema shape, `String` for the flat shape.
    fn from_field_map(map: &Map<String, Value>, fallback: FieldKind) -> Self {
        let fields = map
            .iter()
            .map(|(name, spec)| {
                let (kind, description) = match spec.as_object() {
                    Some(spec) => (
                        spec.get("type")
                            .and_then(Value::as_str)
                            .map(FieldKind::from_type_name)
                            .unwrap_or(fallback),
                        spec.get("description")
                            .and_then(Value::as_str)
                            .map(str::to_string),
                    ),
                    None => (fallback, None),
                };
                FieldSpec {
                    name: name.clone(),
                    kind,
                    description,
                    required: true,
                }
            })
            .collect();
        Self { fields }
    }

    /// Fields in declaration order
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Check whether the schema declares no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Render the framework-facing JSON Schema object
    pub fn to_json_schema(&self) -> Value {
        let mut properties = Map::new();
        let mut required = Vec::new();

        for field in &self.fields {
            let mut spec = Map::new();
            if let Some(type_name) = field.kind.json_type_name() {
                spec.insert("type".to_string(), json!(type_name));
            }
            if let Some(ref description) = field.description {
                spec.insert("description".to_string(), json!(description));
            }
            properties.insert(field.name.clone(), Value::Object(spec));
            if field.required {
                required.push(json!(field.name));
            }
        }

        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }

    /// Validate call arguments against the schema
    ///
    /// Checks required-field presence and kind conformance. Extra arguments
    /// are accepted; `Any` fields match everything.
    pub fn validate(&self, args: &Value) -> std::result::Result<(), Vec<ValidationIssue>> {
        let empty = Map::new();
        let args = args.as_object().unwrap_or(&empty);

        let issues: Vec<ValidationIssue> = self
            .fields
            .iter()
            .filter_map(|field| match args.get(&field.name) {
                None if field.required => Some(ValidationIssue {
                    field: field.name.clone(),
                    message: "required field is missing".to_string(),
                }),
                None => None,
                Some(value) if !field.kind.matches(value) => Some(ValidationIssue {
                    field: field.name.clone(),
                    message: format!("expected {:?}", field.kind),
                }),
                Some(_) => None,
            })
            .collect();

        if issues.is_empty() {
            Ok(())
        } else {
            Err(issues)
        }
    }
}

#[cfg(test)]
mod schema_tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_properties_shape() {
        let parameters = json!({
            "type": "object",
            "properties": {
                "query": { "type": "string", "description": "Search query" },
                "limit": { "type": "integer" },
                "blob": { "type": "vendor-custom" }
            }
        });

        let schema = ArgsSchema::from_parameters(&parameters);
        assert_eq!(schema.fields().len(), 3);

        let query = schema.fields().iter().find(|f| f.name == "query").unwrap();
        assert_eq!(query.kind, FieldKind::String);
        assert_eq!(query.description.as_deref(), Some("Search query"));
        assert!(query.required);

        let blob = schema.fields().iter().find(|f| f.name == "blob").unwrap();
        assert_eq!(blob.kind, FieldKind::Any);
    }

    #[test]
    fn test_flat_shape() {
        let parameters = json!({
            "a": { "type": "integer", "description": "First number" },
            "b": "plain entry, no spec"
        });

        let schema = ArgsSchema::from_parameters(&parameters);
        let a = schema.fields().iter().find(|f| f.name == "a").unwrap();
        assert_eq!(a.kind, FieldKind::Integer);
        assert_eq!(a.description.as_deref(), Some("First number"));

        // Flat fields without a spec default to required strings
        let b = schema.fields().iter().find(|f| f.name == "b").unwrap();
        assert_eq!(b.kind, FieldKind::String);
        assert!(b.description.is_none());
        assert!(b.required);
    }

    #[test]
    fn test_non_object_parameters() {
        assert!(ArgsSchema::from_parameters(&json!(null)).is_empty());
        assert!(ArgsSchema::from_parameters(&json!([1, 2])).is_empty());
        assert!(ArgsSchema::from_parameters(&json!({})).is_empty());
    }

    #[test]
    fn test_json_schema_rendering() {
        let parameters = json!({
            "properties": {
                "query": { "type": "string", "description": "Search query" }
            }
        });
        let rendered = ArgsSchema::from_parameters(&parameters).to_json_schema();

        assert_eq!(rendered["type"], json!("object"));
        assert_eq!(rendered["properties"]["query"]["type"], json!("string"));
        assert_eq!(
            rendered["properties"]["query"]["description"],
            json!("Search query")
        );
        assert_eq!(rendered["required"], json!(["query"]));
    }

    #[test]
    fn test_validate_missing_required() {
        let schema = ArgsSchema::from_parameters(&json!({
            "properties": {
                "a": { "type": "integer" },
                "b": { "type": "integer" }
            }
        }));

        let issues = schema.validate(&json!({"a": 3})).unwrap_err();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "b");
    }

    #[test]
    fn test_validate_kind_mismatch() {
        let schema = ArgsSchema::from_parameters(&json!({
            "properties": { "a": { "type": "integer" } }
        }));

        assert!(schema.validate(&json!({"a": 3})).is_ok());
        assert!(schema.validate(&json!({"a": "three"})).is_err());
    }

    #[test]
    fn test_validate_any_accepts_everything() {
        let schema = ArgsSchema::from_parameters(&json!({
            "properties": { "payload": {} }
        }));

        assert!(schema.validate(&json!({"payload": {"nested": true}})).is_ok());
        assert!(schema.validate(&json!({"payload": 17})).is_ok());
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let parameters = json!({
            "properties": {
                "a": { "type": "integer" },
                "b": { "type": "string" }
            }
        });
        let first = ArgsSchema::from_parameters(&parameters);
        let second = ArgsSchema::from_parameters(&parameters);
        assert_eq!(first, second);
    }
}
