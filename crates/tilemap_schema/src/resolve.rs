//! Tileset path resolution
//!
//! Documents store tileset paths relative to the map file. After a file load
//! every such path is rewritten against the map's directory.

use std::path::Path;

use normalize_path::NormalizePath;
use tilemap_core::Tilemap;
use tracing::debug;

use crate::error::LoadError;

/// Rewrite every tileset path in `tilemap` relative to `base_dir`.
///
/// Covers tileset resources, top-level rules and rules nested in groups.
/// Empty paths and absolute paths are left alone. Joined paths are
/// normalized lexically, so symlinks are not followed.
///
/// Fails with [`LoadError::InvalidPath`] when a resolved path is not valid
/// UTF-8; the offending field keeps its original value.
pub fn resolve_tileset_paths(tilemap: &mut Tilemap, base_dir: &Path) -> Result<(), LoadError> {
    for tileset in &mut tilemap.resources.tilesets {
        resolve_in_place(&mut tileset.path, base_dir)?;
    }
    for rule in tilemap.project_state.all_rules_mut() {
        resolve_in_place(&mut rule.tileset_path, base_dir)?;
    }
    Ok(())
}

fn resolve_in_place(path: &mut String, base_dir: &Path) -> Result<(), LoadError> {
    if path.is_empty() || Path::new(path.as_str()).is_absolute() {
        return Ok(());
    }
    let normalized = base_dir.join(path.as_str()).normalize();
    let resolved = normalized.to_str().map(str::to_owned);
    let Some(resolved) = resolved else {
        return Err(LoadError::InvalidPath { path: normalized });
    };
    debug!(from = %path, to = %resolved, "resolved tileset path");
    *path = resolved;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilemap_core::{
        AutotileGroup, AutotileRule, Point, ProjectState, TilemapData, TilemapMeta,
        TilemapResources, TilesetResource,
    };

    fn rule_with_path(path: &str) -> AutotileRule {
        let mut rule = AutotileRule::new("rule".to_string(), Vec::new());
        rule.tileset_path = path.to_string();
        rule
    }

    fn tilemap() -> Tilemap {
        let mut group = AutotileGroup::new("walls".to_string());
        group.rules.push(rule_with_path("tiles/walls.png"));

        Tilemap {
            meta: TilemapMeta::new(Point::new(16, 16), Point::new(4, 4)),
            project_state: ProjectState {
                rules: vec![rule_with_path("tiles/a.png"), rule_with_path("")],
                groups: vec![group],
            },
            data: TilemapData::default(),
            resources: TilemapResources {
                tilesets: vec![
                    TilesetResource::new("tiles/a.png".to_string(), "tile".to_string()),
                    TilesetResource::new("/abs/a.png".to_string(), "tile".to_string()),
                    TilesetResource::new(String::new(), "tile".to_string()),
                    TilesetResource::new("../shared/./b.png".to_string(), "tile".to_string()),
                ],
            },
            raw: serde_json::Map::new(),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_tileset_paths() {
        let mut map = tilemap();
        resolve_tileset_paths(&mut map, Path::new("/maps/")).unwrap();

        let paths: Vec<_> = map
            .resources
            .tilesets
            .iter()
            .map(|t| t.path.as_str())
            .collect();
        assert_eq!(
            paths,
            ["/maps/tiles/a.png", "/abs/a.png", "", "/shared/b.png"]
        );

        assert_eq!(map.project_state.rules[0].tileset_path, "/maps/tiles/a.png");
        assert_eq!(map.project_state.rules[1].tileset_path, "");
        assert_eq!(
            map.project_state.groups[0].rules[0].tileset_path,
            "/maps/tiles/walls.png"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_parent_components_stop_at_root() {
        let mut map = tilemap();
        map.resources.tilesets[0].path = "../../../a.png".to_string();
        resolve_tileset_paths(&mut map, Path::new("/maps/./levels")).unwrap();
        assert_eq!(map.resources.tilesets[0].path, "/a.png");
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_base_is_rejected() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let base = Path::new(OsStr::from_bytes(b"/maps/\xff"));
        let mut map = tilemap();

        match resolve_tileset_paths(&mut map, base) {
            Err(LoadError::InvalidPath { path }) => {
                assert!(path.starts_with(base));
            }
            other => panic!("expected invalid path, got {:?}", other),
        }
        assert_eq!(map.resources.tilesets[0].path, "tiles/a.png");
    }
}
