//! Tileset resource records

use std::collections::HashMap;

use crate::Properties;

/// A tileset image referenced by the map
#[derive(Debug, Clone, PartialEq)]
pub struct TilesetResource {
    /// Image path; relative to the map file until paths are resolved
    pub path: String,
    /// Type tag of the tileset (e.g. "tile", "object")
    pub kind: String,
    pub properties: Option<Properties>,
    /// Per-tile metadata keyed by the tile identifier string
    pub tile_properties: Option<HashMap<String, Properties>>,
}

impl TilesetResource {
    pub fn new(path: String, kind: String) -> Self {
        Self {
            path,
            kind,
            properties: None,
            tile_properties: None,
        }
    }

    /// Get the metadata recorded for one tile of this tileset
    pub fn tile_properties_for(&self, tile_id: &str) -> Option<&Properties> {
        self.tile_properties.as_ref().and_then(|m| m.get(tile_id))
    }
}

/// Resources section of a map
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TilemapResources {
    pub tilesets: Vec<TilesetResource>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tile_properties_for() {
        let mut tileset = TilesetResource::new("tiles.png".to_string(), "tile".to_string());
        assert!(tileset.tile_properties_for("0").is_none());

        let mut props = Properties::new();
        props.insert("collision".to_string(), json!(true));
        tileset.tile_properties = Some(HashMap::from([("4".to_string(), props)]));

        assert_eq!(
            tileset
                .tile_properties_for("4")
                .and_then(|p| p.get("collision")),
            Some(&json!(true))
        );
        assert!(tileset.tile_properties_for("5").is_none());
    }
}
