//! Primitive coercions from raw JSON values
//!
//! Every function takes the value and the dotted context path it was found
//! at, and either returns the typed value or a [`SchemaError`] carrying that
//! path. Booleans never pass as numbers.

use serde_json::{Map, Value};
use tilemap_core::Point;

use crate::error::{Result, SchemaError};

pub fn expect_object<'a>(value: &'a Value, context: &str) -> Result<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| SchemaError::wrong_type(context, "object", value))
}

pub fn expect_array<'a>(value: &'a Value, context: &str) -> Result<&'a Vec<Value>> {
    value
        .as_array()
        .ok_or_else(|| SchemaError::wrong_type(context, "array", value))
}

pub fn expect_string<'a>(value: &'a Value, context: &str) -> Result<&'a str> {
    value
        .as_str()
        .ok_or_else(|| SchemaError::wrong_type(context, "string", value))
}

pub fn expect_bool(value: &Value, context: &str) -> Result<bool> {
    value
        .as_bool()
        .ok_or_else(|| SchemaError::wrong_type(context, "boolean", value))
}

/// Strict integer: only integer-kind JSON numbers are accepted
pub fn expect_int(value: &Value, context: &str) -> Result<i64> {
    match value {
        Value::Number(n) if n.is_i64() || n.is_u64() => {
            n.as_i64().ok_or_else(|| SchemaError::OutOfRange {
                context: context.to_string(),
                text: n.to_string(),
            })
        }
        _ => Err(SchemaError::wrong_type(context, "integer", value)),
    }
}

/// Integer or float, widened to `f64`
pub fn expect_float(value: &Value, context: &str) -> Result<f64> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| SchemaError::wrong_type(context, "float", value)),
        _ => Err(SchemaError::wrong_type(context, "float", value)),
    }
}

/// Integer that may also be written as a base-10 string (`5` or `"5"`)
pub fn coerce_int(value: &Value, context: &str) -> Result<i64> {
    match value {
        Value::Number(_) => expect_int(value, context),
        Value::String(text) => parse_int_str(text, context),
        _ => Err(SchemaError::wrong_type(
            context,
            "integer or integer string",
            value,
        )),
    }
}

/// Parse a string that must be a base-10 integer in full; surrounding
/// whitespace is ignored
pub fn parse_int_str(text: &str, context: &str) -> Result<i64> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| SchemaError::MalformedElement {
            context: context.to_string(),
            reason: format!("expected an integer string, found '{}'", text),
        })
}

/// Decode an `"x;y"` token into a [`Point`].
///
/// Each side is read as a float and truncated toward zero, so `"3.9;-2.1"`
/// becomes `(3, -2)`.
pub fn decode_point(text: &str, context: &str) -> Result<Point> {
    let malformed = || SchemaError::MalformedPoint {
        context: context.to_string(),
        text: text.to_string(),
    };

    let mut parts = text.split(';');
    let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(malformed());
    };

    let x = decode_component(x).ok_or_else(malformed)?;
    let y = decode_component(y).ok_or_else(malformed)?;
    Ok(Point::new(x, y))
}

fn decode_component(text: &str) -> Option<i64> {
    let value: f64 = text.trim().parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    let truncated = value.trunc();
    // i64::MAX is not representable as f64; 2^63 is the first value out of range
    if truncated < i64::MIN as f64 || truncated >= 9_223_372_036_854_775_808.0 {
        return None;
    }
    Some(truncated as i64)
}

/// `None` for a missing or null value, otherwise the value must be an object
pub fn optional_object<'a>(
    value: Option<&'a Value>,
    context: &str,
) -> Result<Option<&'a Map<String, Value>>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(v) => expect_object(v, context).map(Some),
    }
}

/// Context path of a named child field
pub(crate) fn join(context: &str, key: &str) -> String {
    format!("{}.{}", context, key)
}

/// Context path of a list element
pub(crate) fn index(context: &str, i: usize) -> String {
    format!("{}[{}]", context, i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_point_integers() {
        assert_eq!(decode_point("0;0", "p").unwrap(), Point::new(0, 0));
        assert_eq!(decode_point("12;-7", "p").unwrap(), Point::new(12, -7));
        assert_eq!(decode_point(" 4 ; 5 ", "p").unwrap(), Point::new(4, 5));
    }

    #[test]
    fn test_decode_point_truncates_toward_zero() {
        assert_eq!(decode_point("3.9;-2.1", "p").unwrap(), Point::new(3, -2));
        assert_eq!(decode_point("-0.9;0.9", "p").unwrap(), Point::new(0, 0));
        assert_eq!(decode_point("1e2;2", "p").unwrap(), Point::new(100, 2));
    }

    #[test]
    fn test_decode_point_malformed() {
        for text in ["", "3", "1;2;3", "a;1", "1;", ";1", "inf;0", "0;NaN", "1e30;0"] {
            let err = decode_point(text, "payload.meta.tile_size").unwrap_err();
            assert_eq!(
                err,
                SchemaError::MalformedPoint {
                    context: "payload.meta.tile_size".to_string(),
                    text: text.to_string(),
                },
                "input {:?}",
                text
            );
        }
    }

    #[test]
    fn test_coerce_int_accepts() {
        assert_eq!(coerce_int(&json!(5), "n").unwrap(), 5);
        assert_eq!(coerce_int(&json!("5"), "n").unwrap(), 5);
        assert_eq!(coerce_int(&json!("-3"), "n").unwrap(), -3);
        assert_eq!(coerce_int(&json!(" 5 "), "n").unwrap(), 5);
        assert_eq!(coerce_int(&json!("\t-3\n"), "n").unwrap(), -3);
    }

    #[test]
    fn test_coerce_int_rejects() {
        for value in [json!(true), json!("5.0"), json!("abc"), json!("  "), json!("5 5"), json!(null), json!(5.5), json!([1])] {
            let err = coerce_int(&value, "payload.x").unwrap_err();
            assert_eq!(err.context(), "payload.x", "input {}", value);
        }
    }

    #[test]
    fn test_expect_int_rejects_bool_and_float() {
        assert_eq!(expect_int(&json!(7), "n").unwrap(), 7);
        assert!(matches!(
            expect_int(&json!(true), "n"),
            Err(SchemaError::WrongType { expected: "integer", .. })
        ));
        assert!(expect_int(&json!(1.0), "n").is_err());
        assert!(expect_int(&json!("7"), "n").is_err());
        assert!(matches!(
            expect_int(&json!(u64::MAX), "n"),
            Err(SchemaError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_expect_float_widens() {
        assert_eq!(expect_float(&json!(2), "f").unwrap(), 2.0);
        assert_eq!(expect_float(&json!(0.5), "f").unwrap(), 0.5);
        assert!(expect_float(&json!(false), "f").is_err());
        assert!(expect_float(&json!("1.0"), "f").is_err());
    }

    #[test]
    fn test_expect_exact_kinds() {
        assert!(expect_object(&json!({}), "o").is_ok());
        assert!(expect_object(&json!([]), "o").is_err());
        assert!(expect_array(&json!([]), "a").is_ok());
        assert!(expect_array(&json!({}), "a").is_err());
        assert_eq!(expect_string(&json!("s"), "s").unwrap(), "s");
        assert!(expect_string(&json!(1), "s").is_err());
        assert!(expect_bool(&json!(true), "b").unwrap());
        assert!(expect_bool(&json!(1), "b").is_err());
    }

    #[test]
    fn test_optional_object() {
        assert!(optional_object(None, "p").unwrap().is_none());
        assert!(optional_object(Some(&json!(null)), "p").unwrap().is_none());
        assert!(optional_object(Some(&json!({"a": 1})), "p").unwrap().is_some());

        let err = optional_object(Some(&json!("x")), "payload.properties").unwrap_err();
        assert_eq!(
            err,
            SchemaError::WrongType {
                context: "payload.properties".to_string(),
                expected: "object",
                found: crate::ValueKind::String,
            }
        );
    }
}
