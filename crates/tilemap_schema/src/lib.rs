//! Schema-validating loader for tilemap documents
//!
//! This crate turns an untyped JSON tilemap document into the typed model from
//! `tilemap_core`, checking every field on the way. Failures carry the dotted
//! path of the offending field (e.g. `payload.data.layers[2].tiles.0;0.ttype`).
//!
//! Three entry points are provided:
//! - [`parse_tilemap_object`] / [`parse_tilemap_value`] for an in-memory document
//! - [`parse_tilemap_str`] / [`parse_tilemap_slice`] for JSON text
//! - [`load_tilemap`] for a file; this one also rewrites tileset paths to be
//!   absolute, anchored at the file's directory
//!
//! # Example
//!
//! ```rust,ignore
//! use tilemap_schema::load_tilemap;
//!
//! let map = load_tilemap("maps/0.json")?;
//! for layer in map.tile_layers_in_draw_order() {
//!     println!("{} ({} tiles)", layer.name, layer.len());
//! }
//! ```

pub mod coerce;
mod document;
mod error;
mod fields;
mod layers;
mod project;
mod resolve;

pub use document::{
    parse_data, parse_meta, parse_project_state, parse_resources, parse_tilemap_object,
    ROOT_CONTEXT,
};
pub use error::{DocumentError, LoadError, Result, SchemaError, ValueKind};
pub use fields::FieldReader;
pub use layers::{parse_layer, parse_object, parse_object_area, parse_objects, parse_tile, parse_tiles};
pub use project::{
    parse_group, parse_group_list, parse_rule, parse_rule_list, parse_tileset, parse_tilesets,
};
pub use resolve::resolve_tileset_paths;

use std::path::{Path, PathBuf};

use normalize_path::NormalizePath;
use serde_json::Value;
use tilemap_core::Tilemap;
use tracing::debug;

/// Parse an in-memory JSON value; the top-level value must be an object
pub fn parse_tilemap_value(value: Value) -> Result<Tilemap, LoadError> {
    match value {
        Value::Object(root) => Ok(parse_tilemap_object(root)?),
        other => Err(DocumentError::NotAnObject {
            found: ValueKind::of(&other),
        }
        .into()),
    }
}

/// Parse a tilemap from a JSON string
pub fn parse_tilemap_str(json: &str) -> Result<Tilemap, LoadError> {
    let value: Value = serde_json::from_str(json)?;
    parse_tilemap_value(value)
}

/// Parse a tilemap from JSON bytes
pub fn parse_tilemap_slice(bytes: &[u8]) -> Result<Tilemap, LoadError> {
    let value: Value = serde_json::from_slice(bytes)?;
    parse_tilemap_value(value)
}

/// Load a tilemap file and resolve its tileset paths against the file's directory
pub fn load_tilemap(path: impl AsRef<Path>) -> Result<Tilemap, LoadError> {
    let path = path.as_ref();
    let io_error = |source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    };

    debug!(path = %path.display(), "loading tilemap");
    let bytes = std::fs::read(path).map_err(io_error)?;
    let base_dir = base_directory(path).map_err(io_error)?;

    let mut tilemap = parse_tilemap_slice(&bytes)?;
    resolve_tileset_paths(&mut tilemap, &base_dir)?;

    debug!(
        path = %path.display(),
        layers = tilemap.data.layers.len(),
        rules = tilemap.project_state.rules.len(),
        groups = tilemap.project_state.groups.len(),
        tilesets = tilemap.resources.tilesets.len(),
        "loaded tilemap"
    );
    Ok(tilemap)
}

/// Absolute directory containing `path`
fn base_directory(path: &Path) -> std::io::Result<PathBuf> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if parent.is_absolute() {
        Ok(parent.normalize())
    } else {
        Ok(std::env::current_dir()?.join(parent).normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_str() {
        let json = r#"{
            "meta": { "tile_size": "16;16", "map_size": "20;15" },
            "data": { "layers": [] }
        }"#;

        let map = parse_tilemap_str(json).unwrap();
        assert_eq!(map.meta.version, "1.1");
        assert!(map.data.layers.is_empty());
    }

    #[test]
    fn test_invalid_json() {
        let result = parse_tilemap_str("{ not json");
        assert!(matches!(
            result,
            Err(LoadError::Document(DocumentError::Json(_)))
        ));
    }

    #[test]
    fn test_top_level_must_be_object() {
        let result = parse_tilemap_str("[1, 2, 3]");
        assert!(matches!(
            result,
            Err(LoadError::Document(DocumentError::NotAnObject {
                found: ValueKind::Array
            }))
        ));
    }

    #[test]
    fn test_in_memory_parse_keeps_relative_paths() {
        let json = r#"{
            "meta": { "tile_size": "16;16", "map_size": "20;15" },
            "data": {},
            "resources": { "tilesets": [{ "path": "tiles/a.png", "type": "tile" }] }
        }"#;

        let map = parse_tilemap_slice(json.as_bytes()).unwrap();
        assert_eq!(map.resources.tilesets[0].path, "tiles/a.png");
    }

    #[test]
    fn test_schema_error_passes_through() {
        let result = parse_tilemap_str(r#"{ "meta": {}, "data": {} }"#);
        match result {
            Err(LoadError::Schema(err)) => assert_eq!(err.context(), "payload.meta.tile_size"),
            other => panic!("expected schema error, got {:?}", other),
        }
    }
}
