//! Series data and decoding of the endpoint's response body.
//!
//! The endpoint answers either with a falsy JSON value (nothing to draw this
//! tick) or with an envelope `{ "data": [number, ...] }`.

use crate::error::PollError;
use serde_json::Value;

/// Ordered bar heights in data units. Received fresh on every poll.
pub type Series = Vec<f64>;

/// A decoded response body.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Falsy body (`null`, `false`, `0`, `""`): leave the canvas alone.
    Empty,
    /// Envelope carrying a series to draw.
    Series(Series),
    /// Truthy body without a usable `data` array. The renderer clears
    /// before it reads `data`, so this still wipes the surface.
    Malformed(String),
}

impl Payload {
    /// Classify an already-parsed JSON value.
    pub fn from_value(value: Value) -> Self {
        if !is_truthy(&value) {
            return Payload::Empty;
        }

        let Value::Object(mut map) = value else {
            return Payload::Malformed(format!("expected an object, got {}", kind_of(&value)));
        };

        match map.remove("data") {
            Some(Value::Array(items)) => {
                let mut series = Series::with_capacity(items.len());
                for (i, item) in items.iter().enumerate() {
                    match item.as_f64() {
                        Some(n) => series.push(n),
                        None => {
                            return Payload::Malformed(format!(
                                "data[{i}] is {}, not a number",
                                kind_of(item)
                            ));
                        }
                    }
                }
                Payload::Series(series)
            }
            Some(other) => Payload::Malformed(format!("data is {}, not an array", kind_of(&other))),
            None => Payload::Malformed("missing data field".to_string()),
        }
    }
}

/// Parse a response body. Any HTTP status is accepted; only the body matters.
pub fn decode_body(body: &str) -> Result<Payload, PollError> {
    let value: Value = serde_json::from_str(body)?;
    Ok(Payload::from_value(value))
}

/// JavaScript truthiness of a JSON value.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn falsy_bodies_are_empty() {
        for body in ["null", "false", "0", "0.0", "-0", r#""""#] {
            assert_eq!(decode_body(body).unwrap(), Payload::Empty, "body: {body}");
        }
    }

    #[test]
    fn envelope_decodes_series() {
        let payload = decode_body(r#"{"data":[1,2.5,0,-3]}"#).unwrap();
        assert_eq!(payload, Payload::Series(vec![1.0, 2.5, 0.0, -3.0]));
    }

    #[test]
    fn extra_fields_are_ignored() {
        let payload = decode_body(r#"{"data":[4],"source":"mic"}"#).unwrap();
        assert_eq!(payload, Payload::Series(vec![4.0]));
    }

    #[test]
    fn empty_data_array_is_a_series() {
        assert_eq!(decode_body(r#"{"data":[]}"#).unwrap(), Payload::Series(vec![]));
    }

    #[test]
    fn truthy_without_data_is_malformed() {
        assert!(matches!(decode_body("{}").unwrap(), Payload::Malformed(_)));
        assert!(matches!(decode_body("[1,2,3]").unwrap(), Payload::Malformed(_)));
        assert!(matches!(decode_body("7").unwrap(), Payload::Malformed(_)));
        assert!(matches!(decode_body(r#""x""#).unwrap(), Payload::Malformed(_)));
    }

    #[test]
    fn non_numeric_element_is_malformed() {
        let payload = decode_body(r#"{"data":[1,"two",3]}"#).unwrap();
        assert_eq!(
            payload,
            Payload::Malformed("data[1] is a string, not a number".to_string())
        );
    }

    #[test]
    fn null_element_is_malformed() {
        let payload = decode_body(r#"{"data":[1,null,3]}"#).unwrap();
        assert_eq!(
            payload,
            Payload::Malformed("data[1] is null, not a number".to_string())
        );
    }

    #[test]
    fn data_not_array_is_malformed() {
        let payload = decode_body(r#"{"data":{"a":1}}"#).unwrap();
        assert_eq!(
            payload,
            Payload::Malformed("data is an object, not an array".to_string())
        );
    }

    #[test]
    fn invalid_json_is_an_error() {
        let err = decode_body("{data: [1]").unwrap_err();
        assert!(matches!(err, PollError::Json(_)));
    }

    #[test]
    fn empty_containers_are_truthy() {
        assert!(is_truthy(&serde_json::json!([])));
        assert!(is_truthy(&serde_json::json!({})));
        assert!(!is_truthy(&serde_json::json!(0)));
    }
}
