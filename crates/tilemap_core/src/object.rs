//! Object sprites placed on an object layer

use crate::Properties;

/// Axis-aligned rectangle occupied by an object.
///
/// Whether the units are tiles or pixels is up to the producer of the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ObjectArea {
    pub x: i64,
    pub y: i64,
    pub w: i64,
    pub h: i64,
}

impl ObjectArea {
    pub fn new(x: i64, y: i64, w: i64, h: i64) -> Self {
        Self { x, y, w, h }
    }
}

/// An object placed on an object layer, keyed by its integer id
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectSprite {
    pub area: ObjectArea,
    pub ttype: i64,
    /// Which tileset family the sprite comes from (e.g. "trees", "buildings")
    pub tileset_type: String,
    pub variant: i64,
    pub properties: Option<Properties>,
}

impl ObjectSprite {
    /// Create an object sprite without properties
    pub fn new(area: ObjectArea, ttype: i64, tileset_type: String, variant: i64) -> Self {
        Self {
            area,
            ttype,
            tileset_type,
            variant,
            properties: None,
        }
    }

    /// Get a property value by key
    pub fn property(&self, key: &str) -> Option<&serde_json::Value> {
        self.properties.as_ref().and_then(|p| p.get(key))
    }

    /// Get a string property
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.property(key).and_then(|v| v.as_str())
    }

    /// Get an integer property
    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.property(key).and_then(|v| v.as_i64())
    }
}
