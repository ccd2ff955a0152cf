//! Parsers for autotile rules, rule groups and tileset resources

use std::collections::HashMap;

use serde_json::{Map, Value};
use tilemap_core::{AutotileGroup, AutotileRule, Point, Properties, TilesetResource};

use crate::coerce::{coerce_int, expect_array, expect_object, index, join};
use crate::error::{Result, SchemaError};
use crate::fields::FieldReader;

/// Parse a rule (`{name, neighbors, tileset_path?, tileset_index?, variant_ids?, group_id?}`)
pub fn parse_rule(obj: &Map<String, Value>, context: &str) -> Result<AutotileRule> {
    let fields = FieldReader::new(obj, context);
    let neighbors = parse_neighbors(fields.array("neighbors")?, &fields.context("neighbors"))?;

    let variants_context = fields.context("variant_ids");
    let variant_ids = fields
        .array_or_empty("variant_ids")?
        .iter()
        .enumerate()
        .map(|(i, v)| coerce_int(v, &index(&variants_context, i)))
        .collect::<Result<Vec<_>>>()?;

    let name = fields.string("name")?.to_string();
    let tileset_path = fields.string_or("tileset_path", "")?.to_string();
    let tileset_index = fields.optional_coerced_int("tileset_index")?;
    let group_id = fields.get("group_id").cloned();

    Ok(AutotileRule {
        name,
        neighbors,
        tileset_path,
        tileset_index,
        variant_ids,
        group_id,
    })
}

/// Each neighbor is a two-element `[x, y]` array of integers or integer strings
fn parse_neighbors(raw: &[Value], context: &str) -> Result<Vec<Point>> {
    raw.iter()
        .enumerate()
        .map(|(i, pair)| {
            let pair_context = index(context, i);
            let pair = expect_array(pair, &pair_context)?;
            if pair.len() != 2 {
                return Err(SchemaError::MalformedElement {
                    context: pair_context,
                    reason: format!("expected [x, y], found {} elements", pair.len()),
                });
            }
            Ok(Point::new(
                coerce_int(&pair[0], &index(&pair_context, 0))?,
                coerce_int(&pair[1], &index(&pair_context, 1))?,
            ))
        })
        .collect()
}

/// Parse a group (`{name, rules?}`)
pub fn parse_group(obj: &Map<String, Value>, context: &str) -> Result<AutotileGroup> {
    let fields = FieldReader::new(obj, context);
    let rules = parse_rule_list(fields.array_or_empty("rules")?, &fields.context("rules"))?;
    let name = fields.string("name")?.to_string();
    Ok(AutotileGroup { name, rules })
}

pub fn parse_rule_list(raw: &[Value], context: &str) -> Result<Vec<AutotileRule>> {
    raw.iter()
        .enumerate()
        .map(|(i, rule)| {
            let rule_context = index(context, i);
            parse_rule(expect_object(rule, &rule_context)?, &rule_context)
        })
        .collect()
}

pub fn parse_group_list(raw: &[Value], context: &str) -> Result<Vec<AutotileGroup>> {
    raw.iter()
        .enumerate()
        .map(|(i, group)| {
            let group_context = index(context, i);
            parse_group(expect_object(group, &group_context)?, &group_context)
        })
        .collect()
}

/// Parse a tileset record (`{path, type, properties?, tile_properties?}`)
pub fn parse_tileset(obj: &Map<String, Value>, context: &str) -> Result<TilesetResource> {
    let fields = FieldReader::new(obj, context);
    let path = fields.string("path")?.to_string();
    let kind = fields.string("type")?.to_string();
    let properties = fields.properties("properties")?;
    let tile_properties = match fields.properties("tile_properties")? {
        Some(raw) => Some(parse_tile_properties(raw, &fields.context("tile_properties"))?),
        None => None,
    };

    Ok(TilesetResource {
        path,
        kind,
        properties,
        tile_properties,
    })
}

/// Every value of the per-tile metadata map must itself be an object
fn parse_tile_properties(
    raw: Properties,
    context: &str,
) -> Result<HashMap<String, Properties>> {
    raw.into_iter()
        .map(|(tile_id, value)| match value {
            Value::Object(props) => Ok((tile_id, props)),
            other => Err(SchemaError::wrong_type(
                &join(context, &tile_id),
                "object",
                &other,
            )),
        })
        .collect()
}

pub fn parse_tilesets(raw: &[Value], context: &str) -> Result<Vec<TilesetResource>> {
    raw.iter()
        .enumerate()
        .map(|(i, tileset)| {
            let tileset_context = index(context, i);
            parse_tileset(expect_object(tileset, &tileset_context)?, &tileset_context)
        })
        .collect()
}
