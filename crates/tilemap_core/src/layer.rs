//! Layer types for tile and object layers

use std::collections::HashMap;

use crate::{ObjectSprite, Point, Properties, Tile};

/// Kind tag of a tile layer as written in documents
pub const TILE_LAYER_KIND: &str = "tile";
/// Kind tag selecting the object variant
pub const OBJECT_LAYER_KIND: &str = "object";

/// A layer (tiles or objects)
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub name: String,
    /// Kind tag exactly as it appeared in the document
    pub kind: String,
    pub visible: bool,
    pub locked: bool,
    pub opacity: f64,
    /// Draw order, lower values are drawn first
    pub z_index: i64,
    pub properties: Option<Properties>,
    pub data: LayerData,
}

impl Layer {
    /// Create a new, empty tile layer
    pub fn new_tile_layer(name: String, z_index: i64) -> Self {
        Self {
            name,
            kind: TILE_LAYER_KIND.to_string(),
            visible: true,
            locked: false,
            opacity: 1.0,
            z_index,
            properties: None,
            data: LayerData::Tiles {
                tiles: HashMap::new(),
            },
        }
    }

    /// Create a new, empty object layer
    pub fn new_object_layer(name: String, z_index: i64) -> Self {
        Self {
            name,
            kind: OBJECT_LAYER_KIND.to_string(),
            visible: true,
            locked: false,
            opacity: 1.0,
            z_index,
            properties: None,
            data: LayerData::Objects {
                objects: HashMap::new(),
                next_object_id: None,
            },
        }
    }

    /// Get the type of this layer
    pub fn layer_type(&self) -> LayerType {
        match &self.data {
            LayerData::Tiles { .. } => LayerType::Tiles,
            LayerData::Objects { .. } => LayerType::Objects,
        }
    }

    pub fn is_tile_layer(&self) -> bool {
        self.layer_type() == LayerType::Tiles
    }

    pub fn is_object_layer(&self) -> bool {
        self.layer_type() == LayerType::Objects
    }

    /// Get the tiles if this is a tile layer
    pub fn tiles(&self) -> Option<&HashMap<Point, Tile>> {
        match &self.data {
            LayerData::Tiles { tiles } => Some(tiles),
            LayerData::Objects { .. } => None,
        }
    }

    /// Get the objects if this is an object layer
    pub fn objects(&self) -> Option<&HashMap<i64, ObjectSprite>> {
        match &self.data {
            LayerData::Tiles { .. } => None,
            LayerData::Objects { objects, .. } => Some(objects),
        }
    }

    /// The advisory next object id, if this is an object layer that declares one
    pub fn next_object_id(&self) -> Option<i64> {
        match &self.data {
            LayerData::Tiles { .. } => None,
            LayerData::Objects { next_object_id, .. } => *next_object_id,
        }
    }

    /// Get a tile by grid position
    pub fn tile_at(&self, pos: Point) -> Option<&Tile> {
        self.tiles().and_then(|tiles| tiles.get(&pos))
    }

    /// Number of tiles or objects in this layer
    pub fn len(&self) -> usize {
        match &self.data {
            LayerData::Tiles { tiles } => tiles.len(),
            LayerData::Objects { objects, .. } => objects.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The type of a layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerType {
    Tiles,
    Objects,
}

/// The data contained in a layer
#[derive(Debug, Clone, PartialEq)]
pub enum LayerData {
    /// Tile layer, one tile per grid position
    Tiles { tiles: HashMap<Point, Tile> },
    /// Object layer, one sprite per object id
    Objects {
        objects: HashMap<i64, ObjectSprite>,
        /// Next id an editor would hand out; not enforced
        next_object_id: Option<i64>,
    },
}
