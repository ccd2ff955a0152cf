//! Core data structures for tilemap documents
//!
//! This crate provides the typed model a tilemap document is parsed into:
//! - `Tilemap` - The root aggregate (meta, project state, layers, resources)
//! - `Layer` - A single layer, either tiles keyed by position or objects keyed by id
//! - `Tile` / `ObjectSprite` - Layer contents
//! - `AutotileRule` / `AutotileGroup` - Neighbor-pattern rules for tile selection
//! - `TilesetResource` - A referenced tileset image and its metadata
//! - `Point` - Integer pair used for positions, sizes and offsets
//!
//! Parsing and validation live in `tilemap_schema`; everything here is plain data.

mod autotile;
mod layer;
mod object;
mod point;
mod tile;
mod tilemap;
mod tileset;

pub use autotile::{AutotileGroup, AutotileRule, ProjectState};
pub use layer::{Layer, LayerData, LayerType, OBJECT_LAYER_KIND, TILE_LAYER_KIND};
pub use object::{ObjectArea, ObjectSprite};
pub use point::Point;
pub use tile::Tile;
pub use tilemap::{Tilemap, TilemapData, TilemapMeta};
pub use tileset::{TilemapResources, TilesetResource};

/// Free-form property mapping attached to tiles, objects, layers and tilesets
pub type Properties = serde_json::Map<String, serde_json::Value>;
