//! Autotile rules and rule groups
//!
//! A rule maps a neighbor adjacency pattern to a set of tile variants from a
//! tileset. Rules live either in the project-wide list or inside a group; the
//! two collections are independent and nothing deduplicates across them.

use crate::Point;

/// A neighbor-pattern rule
#[derive(Debug, Clone, PartialEq)]
pub struct AutotileRule {
    pub name: String,
    /// Offsets of the neighbors this rule matches on, in document order
    pub neighbors: Vec<Point>,
    /// Tileset image path, empty when the rule references no tileset
    pub tileset_path: String,
    pub tileset_index: Option<i64>,
    /// Variants the rule may pick from
    pub variant_ids: Vec<i64>,
    /// Group link, kept verbatim from the document
    pub group_id: Option<serde_json::Value>,
}

impl AutotileRule {
    /// Create a rule with no tileset, variants or group
    pub fn new(name: String, neighbors: Vec<Point>) -> Self {
        Self {
            name,
            neighbors,
            tileset_path: String::new(),
            tileset_index: None,
            variant_ids: Vec::new(),
            group_id: None,
        }
    }

    /// Whether the rule references a tileset image
    pub fn has_tileset(&self) -> bool {
        !self.tileset_path.is_empty()
    }

    /// The group id when it is a string
    pub fn group_name(&self) -> Option<&str> {
        self.group_id.as_ref().and_then(|v| v.as_str())
    }
}

/// A named group of rules
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AutotileGroup {
    pub name: String,
    pub rules: Vec<AutotileRule>,
}

impl AutotileGroup {
    pub fn new(name: String) -> Self {
        Self {
            name,
            rules: Vec::new(),
        }
    }
}

/// Editor project state stored alongside the map
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProjectState {
    pub rules: Vec<AutotileRule>,
    pub groups: Vec<AutotileGroup>,
}

impl ProjectState {
    /// Iterate top-level rules followed by every rule nested in a group
    pub fn all_rules(&self) -> impl Iterator<Item = &AutotileRule> {
        self.rules
            .iter()
            .chain(self.groups.iter().flat_map(|g| g.rules.iter()))
    }

    /// Mutable variant of [`ProjectState::all_rules`]
    pub fn all_rules_mut(&mut self) -> impl Iterator<Item = &mut AutotileRule> {
        self.rules
            .iter_mut()
            .chain(self.groups.iter_mut().flat_map(|g| g.rules.iter_mut()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_group_name() {
        let mut rule = AutotileRule::new("edge".to_string(), vec![Point::new(0, -1)]);
        assert!(rule.group_name().is_none());
        assert!(!rule.has_tileset());

        rule.group_id = Some(json!("walls"));
        assert_eq!(rule.group_name(), Some("walls"));

        rule.group_id = Some(json!(3));
        assert!(rule.group_name().is_none());
    }

    #[test]
    fn test_all_rules_order() {
        let mut group = AutotileGroup::new("walls".to_string());
        group.rules.push(AutotileRule::new("inner".to_string(), Vec::new()));

        let state = ProjectState {
            rules: vec![AutotileRule::new("top".to_string(), Vec::new())],
            groups: vec![group],
        };

        let names: Vec<_> = state.all_rules().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["top", "inner"]);
    }
}
