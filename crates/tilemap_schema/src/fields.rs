//! Field access on a JSON object with context tracking

use serde_json::{Map, Value};
use tilemap_core::{Point, Properties};

use crate::coerce::{
    coerce_int, decode_point, expect_array, expect_bool, expect_float, expect_int,
    expect_object, expect_string, join, optional_object,
};
use crate::error::{Result, SchemaError};

/// Reads typed fields out of one JSON object.
///
/// Required accessors fail with [`SchemaError::MissingField`] when the key is
/// absent; `*_or` accessors fall back to a default only when the key is
/// absent, an explicit `null` is still validated.
#[derive(Clone, Copy)]
pub struct FieldReader<'a> {
    obj: &'a Map<String, Value>,
    context: &'a str,
}

impl<'a> FieldReader<'a> {
    pub fn new(obj: &'a Map<String, Value>, context: &'a str) -> Self {
        Self { obj, context }
    }

    /// Context path of a field of this object
    pub fn context(&self, key: &str) -> String {
        join(self.context, key)
    }

    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.obj.get(key)
    }

    pub fn required(&self, key: &str) -> Result<&'a Value> {
        self.obj.get(key).ok_or_else(|| SchemaError::MissingField {
            context: self.context(key),
        })
    }

    pub fn string(&self, key: &str) -> Result<&'a str> {
        expect_string(self.required(key)?, &self.context(key))
    }

    pub fn string_or(&self, key: &str, default: &'a str) -> Result<&'a str> {
        match self.get(key) {
            Some(v) => expect_string(v, &self.context(key)),
            None => Ok(default),
        }
    }

    pub fn bool(&self, key: &str) -> Result<bool> {
        expect_bool(self.required(key)?, &self.context(key))
    }

    pub fn int(&self, key: &str) -> Result<i64> {
        expect_int(self.required(key)?, &self.context(key))
    }

    /// Strict integer, `None` when the key is absent
    pub fn int_if_present(&self, key: &str) -> Result<Option<i64>> {
        self.get(key)
            .map(|v| expect_int(v, &self.context(key)))
            .transpose()
    }

    /// Integer or integer string
    pub fn coerced_int(&self, key: &str) -> Result<i64> {
        coerce_int(self.required(key)?, &self.context(key))
    }

    /// Integer or integer string, `None` when absent or null
    pub fn optional_coerced_int(&self, key: &str) -> Result<Option<i64>> {
        match self.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(v) => coerce_int(v, &self.context(key)).map(Some),
        }
    }

    pub fn float(&self, key: &str) -> Result<f64> {
        expect_float(self.required(key)?, &self.context(key))
    }

    pub fn float_or(&self, key: &str, default: f64) -> Result<f64> {
        match self.get(key) {
            Some(v) => expect_float(v, &self.context(key)),
            None => Ok(default),
        }
    }

    /// Required `"x;y"` string
    pub fn point(&self, key: &str) -> Result<Point> {
        let context = self.context(key);
        let text = expect_string(self.required(key)?, &context)?;
        decode_point(text, &context)
    }

    pub fn point_or(&self, key: &str, default: Point) -> Result<Point> {
        match self.get(key) {
            Some(v) => {
                let context = self.context(key);
                decode_point(expect_string(v, &context)?, &context)
            }
            None => Ok(default),
        }
    }

    pub fn object(&self, key: &str) -> Result<&'a Map<String, Value>> {
        expect_object(self.required(key)?, &self.context(key))
    }

    /// Object field, `None` when the key is absent
    pub fn object_if_present(&self, key: &str) -> Result<Option<&'a Map<String, Value>>> {
        self.get(key)
            .map(|v| expect_object(v, &self.context(key)))
            .transpose()
    }

    pub fn array(&self, key: &str) -> Result<&'a Vec<Value>> {
        expect_array(self.required(key)?, &self.context(key))
    }

    /// Array field, empty when the key is absent
    pub fn array_or_empty(&self, key: &str) -> Result<&'a [Value]> {
        match self.get(key) {
            Some(v) => expect_array(v, &self.context(key)).map(Vec::as_slice),
            None => Ok(&[]),
        }
    }

    /// Free-form property map; absent and null both mean no properties
    pub fn properties(&self, key: &str) -> Result<Option<Properties>> {
        Ok(optional_object(self.get(key), &self.context(key))?.cloned())
    }
}
