//! Tiles placed on a tile layer

use crate::{Point, Properties};

/// A single tile on a tile layer.
///
/// A tile layer stores at most one tile per position; `pos` is the key.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    /// Grid position of this tile
    pub pos: Point,
    /// Tile type, used as the index into the map's tileset list
    pub ttype: i64,
    /// Variant within the tileset (slice index)
    pub variant: i64,
    pub properties: Option<Properties>,
}

impl Tile {
    /// Create a tile without properties
    pub fn new(pos: Point, ttype: i64, variant: i64) -> Self {
        Self {
            pos,
            ttype,
            variant,
            properties: None,
        }
    }

    /// The `(tileset_index, variant_id)` pair an image cache keys slices by
    pub fn cache_key(&self) -> (i64, i64) {
        (self.ttype, self.variant)
    }

    /// Pixel position of this tile after translating by a view offset.
    ///
    /// `None` when the result does not fit in `i64`.
    pub fn screen_position(&self, tile_size: Point, offset: Point) -> Option<Point> {
        self.pos.to_pixels(tile_size)?.checked_sub(offset)
    }

    /// Get a property value by key
    pub fn property(&self, key: &str) -> Option<&serde_json::Value> {
        self.properties.as_ref().and_then(|p| p.get(key))
    }
}
