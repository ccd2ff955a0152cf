//! Parsers for layers and their contents

use std::collections::HashMap;

use serde_json::{Map, Value};
use tilemap_core::{
    Layer, LayerData, ObjectArea, ObjectSprite, Point, Tile, OBJECT_LAYER_KIND,
};
use tracing::trace;

use crate::coerce::{decode_point, expect_object, join, parse_int_str};
use crate::error::Result;
use crate::fields::FieldReader;

/// Parse one tile entry (`{pos, ttype, variant, properties?}`)
pub fn parse_tile(obj: &Map<String, Value>, context: &str) -> Result<Tile> {
    let fields = FieldReader::new(obj, context);
    let pos_text = fields.string("pos")?;
    let ttype = fields.coerced_int("ttype")?;
    let variant = fields.int("variant")?;
    let properties = fields.properties("properties")?;
    // the position is decoded only once every field has the right kind
    Ok(Tile {
        pos: decode_point(pos_text, &fields.context("pos"))?,
        ttype,
        variant,
        properties,
    })
}

/// Parse a tile collection, keyed by each tile's own `pos`.
///
/// The raw keys only label diagnostics. When two entries decode to the same
/// position the later one wins.
pub fn parse_tiles(raw: &Map<String, Value>, context: &str) -> Result<HashMap<Point, Tile>> {
    let mut tiles = HashMap::with_capacity(raw.len());
    for (key, value) in raw {
        let entry_context = join(context, key);
        let tile = parse_tile(expect_object(value, &entry_context)?, &entry_context)?;
        tiles.insert(tile.pos, tile);
    }
    Ok(tiles)
}

pub fn parse_object_area(obj: &Map<String, Value>, context: &str) -> Result<ObjectArea> {
    let fields = FieldReader::new(obj, context);
    Ok(ObjectArea {
        x: fields.int("x")?,
        y: fields.int("y")?,
        w: fields.int("w")?,
        h: fields.int("h")?,
    })
}

/// Parse one object entry (`{area, ttype, tileset_type, variant, properties?}`)
pub fn parse_object(obj: &Map<String, Value>, context: &str) -> Result<ObjectSprite> {
    let fields = FieldReader::new(obj, context);
    let area = parse_object_area(fields.object("area")?, &fields.context("area"))?;
    Ok(ObjectSprite {
        area,
        ttype: fields.int("ttype")?,
        tileset_type: fields.string("tileset_type")?.to_string(),
        variant: fields.int("variant")?,
        properties: fields.properties("properties")?,
    })
}

/// Parse an object collection keyed by object id; string ids like `"7"` are accepted
pub fn parse_objects(
    raw: &Map<String, Value>,
    context: &str,
) -> Result<HashMap<i64, ObjectSprite>> {
    let id_context = join(context, "<id>");
    let mut objects = HashMap::with_capacity(raw.len());
    for (key, value) in raw {
        let id = parse_int_str(key, &id_context)?;
        let entry_context = join(context, key);
        let sprite = parse_object(expect_object(value, &entry_context)?, &entry_context)?;
        objects.insert(id, sprite);
    }
    Ok(objects)
}

/// Parse a layer.
///
/// The variant is chosen by the `type` string alone: `"object"` gives an
/// object layer, any other value gives a tile layer. Fields belonging to the
/// other variant are ignored.
pub fn parse_layer(obj: &Map<String, Value>, context: &str) -> Result<Layer> {
    let fields = FieldReader::new(obj, context);
    let name = fields.string("name")?.to_string();
    let kind = fields.string("type")?.to_string();
    let visible = fields.bool("visible")?;
    let locked = fields.bool("locked")?;
    let opacity = fields.float("opacity")?;
    let z_index = fields.int("z_index")?;
    let properties = fields.properties("properties")?;

    let data = if kind == OBJECT_LAYER_KIND {
        let objects = match fields.object_if_present("objects")? {
            Some(raw) => parse_objects(raw, &fields.context("objects"))?,
            None => HashMap::new(),
        };
        LayerData::Objects {
            objects,
            next_object_id: fields.int_if_present("next_object_id")?,
        }
    } else {
        let tiles = match fields.object_if_present("tiles")? {
            Some(raw) => parse_tiles(raw, &fields.context("tiles"))?,
            None => HashMap::new(),
        };
        LayerData::Tiles { tiles }
    };

    let layer = Layer {
        name,
        kind,
        visible,
        locked,
        opacity,
        z_index,
        properties,
        data,
    };
    trace!(
        name = %layer.name,
        kind = %layer.kind,
        entries = layer.len(),
        "parsed layer"
    );
    Ok(layer)
}
