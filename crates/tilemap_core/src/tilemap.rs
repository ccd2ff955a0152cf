//! Root aggregate of a tilemap document

use crate::{Layer, Point, ProjectState, TilemapResources, TilesetResource};

/// Map-wide metadata
#[derive(Debug, Clone, PartialEq)]
pub struct TilemapMeta {
    /// Tile size in pixels
    pub tile_size: Point,
    /// Current map size in tiles
    pub map_size: Point,
    /// Size the map was created with
    pub initial_map_size: Point,
    pub zoom_level: f64,
    /// Editor scroll offset
    pub scroll: Point,
    /// Document format version
    pub version: String,
}

impl TilemapMeta {
    pub const DEFAULT_VERSION: &'static str = "1.1";
    pub const DEFAULT_ZOOM: f64 = 1.0;

    /// Metadata with every optional field at its default
    pub fn new(tile_size: Point, map_size: Point) -> Self {
        Self {
            tile_size,
            map_size,
            initial_map_size: map_size,
            zoom_level: Self::DEFAULT_ZOOM,
            scroll: Point::ZERO,
            version: Self::DEFAULT_VERSION.to_string(),
        }
    }
}

/// Layer section of a map
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TilemapData {
    /// Layers in document order
    pub layers: Vec<Layer>,
}

/// A complete, typed tilemap document
#[derive(Debug, Clone, PartialEq)]
pub struct Tilemap {
    pub meta: TilemapMeta,
    pub project_state: ProjectState,
    pub data: TilemapData,
    pub resources: TilemapResources,
    /// The whole source document, for fields this model does not cover
    pub raw: serde_json::Map<String, serde_json::Value>,
}

impl Tilemap {
    /// Layers sorted by `z_index`, ties kept in document order
    pub fn layers_in_draw_order(&self) -> Vec<&Layer> {
        let mut layers: Vec<&Layer> = self.data.layers.iter().collect();
        layers.sort_by_key(|l| l.z_index);
        layers
    }

    /// Tile layers only, sorted by `z_index`
    pub fn tile_layers_in_draw_order(&self) -> Vec<&Layer> {
        let mut layers: Vec<&Layer> = self
            .data
            .layers
            .iter()
            .filter(|l| l.is_tile_layer())
            .collect();
        layers.sort_by_key(|l| l.z_index);
        layers
    }

    /// Tileset at a tile's `ttype` index
    pub fn tileset(&self, index: i64) -> Option<&TilesetResource> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.resources.tilesets.get(i))
    }
}
