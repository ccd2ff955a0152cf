//! Human and JSON reports over a loaded tilemap

use std::fmt;

use serde::Serialize;
use tilemap_core::{Layer, Tilemap};

use crate::config::InspectConfig;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapSummary {
    pub path: String,
    pub version: String,
    pub tile_size: [i64; 2],
    pub map_size: [i64; 2],
    pub zoom_level: f64,
    pub layers: Vec<LayerSummary>,
    pub rules: usize,
    pub groups: usize,
    pub tilesets: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerSummary {
    pub name: String,
    pub kind: String,
    pub z_index: i64,
    pub visible: bool,
    pub entries: usize,
}

impl LayerSummary {
    fn of(layer: &Layer) -> Self {
        Self {
            name: layer.name.clone(),
            kind: layer.kind.clone(),
            z_index: layer.z_index,
            visible: layer.visible,
            entries: layer.len(),
        }
    }
}

impl MapSummary {
    pub fn new(path: &str, map: &Tilemap) -> Self {
        let meta = &map.meta;
        Self {
            path: path.to_string(),
            version: meta.version.clone(),
            tile_size: [meta.tile_size.x, meta.tile_size.y],
            map_size: [meta.map_size.x, meta.map_size.y],
            zoom_level: meta.zoom_level,
            layers: map.data.layers.iter().map(LayerSummary::of).collect(),
            // counts every rule, nested ones included
            rules: map.project_state.all_rules().count(),
            groups: map.project_state.groups.len(),
            tilesets: map.resources.tilesets.len(),
        }
    }
}

impl fmt::Display for MapSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} (version {})", self.path, self.version)?;
        writeln!(
            f,
            "  tile size {}x{}, map size {}x{}, zoom {}",
            self.tile_size[0], self.tile_size[1], self.map_size[0], self.map_size[1], self.zoom_level
        )?;
        writeln!(f, "  layers: {}", self.layers.len())?;
        for layer in &self.layers {
            writeln!(
                f,
                "    {:<20} {:<6} z={:<4} {:<7} {} entries",
                layer.name,
                layer.kind,
                layer.z_index,
                if layer.visible { "visible" } else { "hidden" },
                layer.entries
            )?;
        }
        write!(
            f,
            "  rules: {}, groups: {}, tilesets: {}",
            self.rules, self.groups, self.tilesets
        )
    }
}

/// Draw-order listing, one line per layer followed by optional tile lines
pub fn draw_order_lines(map: &Tilemap, config: &InspectConfig) -> Vec<String> {
    let layers = if config.tile_layers_only {
        map.tile_layers_in_draw_order()
    } else {
        map.layers_in_draw_order()
    };

    let mut lines = Vec::new();
    for (order, layer) in layers.into_iter().enumerate() {
        lines.push(format!(
            "{order:>3}. {} [{}] z={} ({} entries)",
            layer.name,
            layer.kind,
            layer.z_index,
            layer.len()
        ));

        if !config.list_tiles {
            continue;
        }
        if let Some(tiles) = layer.tiles() {
            let mut tiles: Vec<_> = tiles.values().collect();
            tiles.sort_by_key(|t| (t.pos.y, t.pos.x));
            for tile in tiles.iter().take(config.max_listed) {
                let screen = match tile.screen_position(map.meta.tile_size, map.meta.scroll) {
                    Some(p) => p.to_string(),
                    None => "out of range".to_string(),
                };
                lines.push(format!(
                    "       {} -> {} tileset={} variant={}",
                    tile.pos, screen, tile.ttype, tile.variant
                ));
            }
            if tiles.len() > config.max_listed {
                lines.push(format!("       ... {} more", tiles.len() - config.max_listed));
            }
        }
    }
    lines
}
