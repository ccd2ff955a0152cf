//! Root aggregation of a tilemap document

use serde_json::{Map, Value};
use tilemap_core::{
    Point, ProjectState, Tilemap, TilemapData, TilemapMeta, TilemapResources,
};

use crate::coerce::{expect_object, index};
use crate::error::Result;
use crate::fields::FieldReader;
use crate::layers::parse_layer;
use crate::project::{parse_group_list, parse_rule_list, parse_tilesets};

/// Context label of the document root
pub const ROOT_CONTEXT: &str = "payload";

/// Parse `meta`; every field but `tile_size` and `map_size` has a default
pub fn parse_meta(obj: &Map<String, Value>, context: &str) -> Result<TilemapMeta> {
    let fields = FieldReader::new(obj, context);
    let tile_size = fields.point("tile_size")?;
    let map_size = fields.point("map_size")?;
    Ok(TilemapMeta {
        tile_size,
        map_size,
        initial_map_size: fields.point_or("initial_map_size", map_size)?,
        zoom_level: fields.float_or("zoom_level", TilemapMeta::DEFAULT_ZOOM)?,
        scroll: fields.point_or("scroll", Point::ZERO)?,
        version: fields
            .string_or("version", TilemapMeta::DEFAULT_VERSION)?
            .to_string(),
    })
}

/// Parse `data`; layer order is preserved
pub fn parse_data(obj: &Map<String, Value>, context: &str) -> Result<TilemapData> {
    let fields = FieldReader::new(obj, context);
    let layers_context = fields.context("layers");
    let layers = fields
        .array_or_empty("layers")?
        .iter()
        .enumerate()
        .map(|(i, layer)| {
            let layer_context = index(&layers_context, i);
            parse_layer(expect_object(layer, &layer_context)?, &layer_context)
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(TilemapData { layers })
}

pub fn parse_project_state(obj: &Map<String, Value>, context: &str) -> Result<ProjectState> {
    let fields = FieldReader::new(obj, context);
    Ok(ProjectState {
        rules: parse_rule_list(fields.array_or_empty("rules")?, &fields.context("rules"))?,
        groups: parse_group_list(fields.array_or_empty("groups")?, &fields.context("groups"))?,
    })
}

pub fn parse_resources(obj: &Map<String, Value>, context: &str) -> Result<TilemapResources> {
    let fields = FieldReader::new(obj, context);
    Ok(TilemapResources {
        tilesets: parse_tilesets(
            fields.array_or_empty("tilesets")?,
            &fields.context("tilesets"),
        )?,
    })
}

/// Build the typed tree from a document root.
///
/// The root map is moved into [`Tilemap::raw`] once parsing succeeds.
pub fn parse_tilemap_object(root: Map<String, Value>) -> Result<Tilemap> {
    let fields = FieldReader::new(&root, ROOT_CONTEXT);

    let meta = parse_meta(fields.object("meta")?, &fields.context("meta"))?;
    let data = parse_data(fields.object("data")?, &fields.context("data"))?;
    let project_state = match fields.object_if_present("project_state")? {
        Some(obj) => parse_project_state(obj, &fields.context("project_state"))?,
        None => ProjectState::default(),
    };
    let resources = match fields.object_if_present("resources")? {
        Some(obj) => parse_resources(obj, &fields.context("resources"))?,
        None => TilemapResources::default(),
    };

    Ok(Tilemap {
        meta,
        project_state,
        data,
        resources,
        raw: root,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SchemaError;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_minimal_document_defaults() {
        let root = object(json!({
            "meta": { "tile_size": "16;16", "map_size": "40;30" },
            "data": { "layers": [] }
        }));
        let map = parse_tilemap_object(root).unwrap();

        assert_eq!(map.meta.tile_size, Point::new(16, 16));
        assert_eq!(map.meta.map_size, Point::new(40, 30));
        assert_eq!(map.meta.initial_map_size, Point::new(40, 30));
        assert_eq!(map.meta.zoom_level, 1.0);
        assert_eq!(map.meta.scroll, Point::ZERO);
        assert_eq!(map.meta.version, "1.1");
        assert!(map.data.layers.is_empty());
        assert!(map.project_state.rules.is_empty());
        assert!(map.project_state.groups.is_empty());
        assert!(map.resources.tilesets.is_empty());
    }

    #[test]
    fn test_layers_default_to_empty() {
        let root = object(json!({
            "meta": { "tile_size": "8;8", "map_size": "1;1" },
            "data": {}
        }));
        let map = parse_tilemap_object(root).unwrap();
        assert!(map.data.layers.is_empty());
    }

    #[test]
    fn test_meta_overrides() {
        let root = object(json!({
            "meta": {
                "tile_size": "32;32",
                "map_size": "10;10",
                "initial_map_size": "8;6",
                "zoom_level": 2,
                "scroll": "-12.7;4.2",
                "version": "1.2"
            },
            "data": {}
        }));
        let meta = parse_tilemap_object(root).unwrap().meta;

        assert_eq!(meta.initial_map_size, Point::new(8, 6));
        assert_eq!(meta.zoom_level, 2.0);
        assert_eq!(meta.scroll, Point::new(-12, 4));
        assert_eq!(meta.version, "1.2");
    }

    #[test]
    fn test_missing_sections() {
        let err = parse_tilemap_object(object(json!({ "data": {} }))).unwrap_err();
        assert_eq!(
            err,
            SchemaError::MissingField {
                context: "payload.meta".to_string()
            }
        );

        let err = parse_tilemap_object(object(json!({
            "meta": { "tile_size": "8;8", "map_size": "1;1" }
        })))
        .unwrap_err();
        assert_eq!(err.context(), "payload.data");
    }

    #[test]
    fn test_malformed_tile_size() {
        let err = parse_tilemap_object(object(json!({
            "meta": { "tile_size": "16x16", "map_size": "1;1" },
            "data": {}
        })))
        .unwrap_err();
        assert!(matches!(err, SchemaError::MalformedPoint { .. }));
        assert_eq!(err.context(), "payload.meta.tile_size");
    }

    #[test]
    fn test_deep_error_context() {
        let err = parse_tilemap_object(object(json!({
            "meta": { "tile_size": "16;16", "map_size": "4;4" },
            "data": { "layers": [
                { "name": "a", "type": "tile", "visible": true, "locked": false,
                  "opacity": 1.0, "z_index": 0 },
                { "name": "b", "type": "tile", "visible": true, "locked": false,
                  "opacity": 1.0, "z_index": 1,
                  "tiles": { "0;0": { "pos": "0;0", "ttype": "x", "variant": 0 } } }
            ] }
        })))
        .unwrap_err();
        assert_eq!(err.context(), "payload.data.layers[1].tiles.0;0.ttype");
    }

    #[test]
    fn test_raw_document_is_retained() {
        let root = object(json!({
            "meta": { "tile_size": "16;16", "map_size": "4;4" },
            "data": {},
            "editor": { "grid": true }
        }));
        let map = parse_tilemap_object(root).unwrap();
        assert_eq!(map.raw.get("editor"), Some(&json!({ "grid": true })));
    }

    #[test]
    fn test_project_state_and_resources() {
        let map = parse_tilemap_object(object(json!({
            "meta": { "tile_size": "16;16", "map_size": "4;4" },
            "data": {},
            "project_state": {
                "rules": [{ "name": "top", "neighbors": [[0, -1]] }],
                "groups": [{ "name": "walls", "rules": [{ "name": "inner", "neighbors": [] }] }]
            },
            "resources": { "tilesets": [{ "path": "a.png", "type": "tile" }] }
        })))
        .unwrap();

        assert_eq!(map.project_state.rules.len(), 1);
        assert_eq!(map.project_state.groups[0].rules[0].name, "inner");
        assert_eq!(map.resources.tilesets[0].path, "a.png");

        let map = parse_tilemap_object(object(json!({
            "meta": { "tile_size": "16;16", "map_size": "4;4" },
            "data": {},
            "project_state": {},
            "resources": {}
        })))
        .unwrap();
        assert!(map.project_state.groups.is_empty());
        assert!(map.resources.tilesets.is_empty());
    }
}
