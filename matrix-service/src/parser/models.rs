// Document value model
// Order-preserving tagged union over parsed YAML documents

/// A parsed document node.
///
/// Mappings keep their entries in document order, since matrix discovery
/// reports occurrences in the order they appear in the source.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(Vec<(String, Value)>),
}

impl Value {
    /// Human-readable type name used in schema errors
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "sequence",
            Value::Object(_) => "mapping",
        }
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    pub fn as_object(&self) -> Option<&[(String, Value)]> {
        match self {
            Value::Object(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Look up a mapping entry by key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object()?
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// String form of a scalar.
    ///
    /// Numbers and booleans are coerced (`3.8` becomes `"3.8"`); null,
    /// sequences and mappings have no string form.
    pub fn as_scalar_string(&self) -> Option<String> {
        match self {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(format_number(*n)),
            Value::Bool(b) => Some(b.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<&serde_yaml::Value> for Value {
    fn from(yaml: &serde_yaml::Value) -> Self {
        match yaml {
            serde_yaml::Value::Null => Value::Null,
            serde_yaml::Value::Bool(b) => Value::Bool(*b),
            serde_yaml::Value::Number(n) => Value::Number(yaml_number(n)),
            serde_yaml::Value::String(s) => Value::String(s.clone()),
            serde_yaml::Value::Sequence(seq) => Value::Array(seq.iter().map(Value::from).collect()),
            serde_yaml::Value::Mapping(map) => Value::Object(
                map.iter()
                    .filter_map(|(k, v)| yaml_key(k).map(|key| (key, Value::from(v))))
                    .collect(),
            ),
            serde_yaml::Value::Tagged(tagged) => Value::from(&tagged.value),
        }
    }
}

fn yaml_number(n: &serde_yaml::Number) -> f64 {
    if let Some(i) = n.as_i64() {
        i as f64
    } else if let Some(u) = n.as_u64() {
        u as f64
    } else {
        n.as_f64().unwrap_or(f64::NAN)
    }
}

/// Scalar keys are stringified; complex keys have no string form and are dropped
fn yaml_key(key: &serde_yaml::Value) -> Option<String> {
    match key {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Number(n) => Some(format_number(yaml_number(n))),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        serde_yaml::Value::Null => Some("null".to_string()),
        serde_yaml::Value::Tagged(tagged) => yaml_key(&tagged.value),
        serde_yaml::Value::Sequence(_) | serde_yaml::Value::Mapping(_) => None,
    }
}

/// Integral numbers print without a fractional part: `3`, not `3.0`
pub fn format_number(n: f64) -> String {
    format!("{}", n)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> Value {
        let yaml: serde_yaml::Value = serde_yaml::from_str(source).unwrap();
        Value::from(&yaml)
    }

    #[test]
    fn test_mapping_preserves_document_order() {
        let value = parse("zeta: 1\nalpha: 2\nmid: 3\n");
        let keys: Vec<_> = value
            .as_object()
            .unwrap()
            .iter()
            .map(|(k, _)| k.as_str())
            .collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_scalar_string_coercion() {
        assert_eq!(Value::Number(3.8).as_scalar_string(), Some("3.8".to_string()));
        assert_eq!(Value::Number(18.0).as_scalar_string(), Some("18".to_string()));
        assert_eq!(Value::Bool(true).as_scalar_string(), Some("true".to_string()));
        assert_eq!(Value::from("x").as_scalar_string(), Some("x".to_string()));
        assert_eq!(Value::Null.as_scalar_string(), None);
        assert_eq!(Value::Array(vec![]).as_scalar_string(), None);
    }

    #[test]
    fn test_yaml_numbers_and_keys() {
        let value = parse("python: [3.10, 3.9, 12]\n1: one\ntrue: yes\n");
        let python = value.get("python").unwrap().as_array().unwrap();
        let strings: Vec<_> = python.iter().filter_map(Value::as_scalar_string).collect();
        assert_eq!(strings, vec!["3.1", "3.9", "12"]);
        assert_eq!(value.get("1"), Some(&Value::from("one")));
        assert!(value.get("true").is_some());
    }

    #[test]
    fn test_complex_keys_are_dropped() {
        let value = parse("? [a, b]\n: pair\nplain: value\n");
        let entries = value.as_object().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].0, "plain");
    }

    #[test]
    fn test_tagged_values_unwrap() {
        let value = parse("os: !custom [linux]\n");
        assert_eq!(
            value.get("os"),
            Some(&Value::Array(vec![Value::from("linux")]))
        );
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Value::Null.type_name(), "null");
        assert_eq!(Value::Object(vec![]).type_name(), "mapping");
        assert_eq!(Value::Array(vec![]).type_name(), "sequence");
        assert!(Value::Object(vec![]).is_object());
    }
}
