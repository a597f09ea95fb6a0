use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

/// Customer identifier as stored in the exported datasets.
///
/// The exporter does not commit to one key type: some files carry numeric
/// ids, others carry free-form text. Both stored cells and raw request input
/// go through the same parse rule ([`CustomerKey::parse`]), so two keys are
/// equal exactly when their canonical forms are equal and no cross-type
/// coercion can happen at comparison time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CustomerKey {
    Integer(i64),
    Text(String),
}

impl CustomerKey {
    /// Canonicalize a raw cell or query value: integer if it parses as one,
    /// literal text otherwise.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.parse::<i64>() {
            Ok(n) => Self::Integer(n),
            Err(_) => Self::Text(trimmed.to_string()),
        }
    }
}

impl core::fmt::Display for CustomerKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl Serialize for CustomerKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Integer(n) => serializer.serialize_i64(*n),
            Self::Text(s) => serializer.serialize_str(s),
        }
    }
}

impl<'de> Deserialize<'de> for CustomerKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // CSV cells always arrive as strings; canonicalize on the way in.
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_text_canonicalizes_to_integer() {
        assert_eq!(CustomerKey::parse("42"), CustomerKey::Integer(42));
        assert_eq!(CustomerKey::parse(" 42 "), CustomerKey::Integer(42));
        assert_eq!(CustomerKey::parse("-7"), CustomerKey::Integer(-7));
    }

    #[test]
    fn non_numeric_text_stays_text() {
        assert_eq!(
            CustomerKey::parse("CUST-001"),
            CustomerKey::Text("CUST-001".to_string())
        );
        assert_eq!(
            CustomerKey::parse("12.5"),
            CustomerKey::Text("12.5".to_string())
        );
    }

    #[test]
    fn same_rule_for_stored_and_queried_values_makes_them_equal() {
        // Stored "1001" (string cell) must match queried "1001" (raw input).
        assert_eq!(CustomerKey::parse("1001"), CustomerKey::parse("1001"));
        assert_ne!(CustomerKey::parse("1001"), CustomerKey::parse("CUST-1001"));
    }

    #[test]
    fn serializes_integer_as_number_and_text_as_string() {
        assert_eq!(
            serde_json::to_value(CustomerKey::Integer(9)).unwrap(),
            serde_json::json!(9)
        );
        assert_eq!(
            serde_json::to_value(CustomerKey::Text("A1".into())).unwrap(),
            serde_json::json!("A1")
        );
    }
}
