//! Map levels to the loadout declarations they inherit from.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{CoreError, CoreErrorCode};

/// Ordered map from a level's own loadout decl name to the decl it
/// inherits from. Order controls output file order, nothing else.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelMap {
    entries: Vec<(String, String)>,
}

impl LevelMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// The campaign levels with confirmed decl names. Later levels reuse
    /// these decls through the game's own inheritance chain.
    pub fn builtin() -> Self {
        let mut map = Self::new();
        map.insert("argent_tower", "olympia_surface_1");
        map.insert("bfg_division", "olympia_surface_2");
        map
    }

    /// Adds or overwrites a level entry, keeping first-insertion order.
    pub fn insert(&mut self, level: &str, parent: &str) {
        match self.entries.iter_mut().find(|(l, _)| l == level) {
            Some(entry) => entry.1 = parent.to_string(),
            None => self.entries.push((level.to_string(), parent.to_string())),
        }
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parses a JSON object of `"level": "parent"` pairs, preserving the
    /// document's key order.
    pub fn from_json_str(text: &str) -> Result<Self, CoreError> {
        let value: Value = serde_json::from_str(text).map_err(|e| {
            CoreError::new(CoreErrorCode::Parse, format!("invalid level map: {e}"))
        })?;
        let Value::Object(object) = value else {
            return Err(CoreError::new(
                CoreErrorCode::Parse,
                "level map must be a JSON object".to_string(),
            ));
        };
        let mut map = Self::new();
        for (level, parent) in object {
            let Value::String(parent) = parent else {
                return Err(CoreError::new(
                    CoreErrorCode::Parse,
                    format!("level map entry {level:?} must be a string"),
                ));
            };
            map.insert(&level, &parent);
        }
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_covers_the_known_levels() {
        let map = LevelMap::builtin();
        assert_eq!(
            map.entries(),
            [
                ("argent_tower".to_string(), "olympia_surface_1".to_string()),
                ("bfg_division".to_string(), "olympia_surface_2".to_string()),
            ]
        );
    }

    #[test]
    fn insert_overwrites_without_reordering() {
        let mut map = LevelMap::new();
        map.insert("a", "x");
        map.insert("b", "y");
        map.insert("a", "z");
        assert_eq!(
            map.entries(),
            [
                ("a".to_string(), "z".to_string()),
                ("b".to_string(), "y".to_string()),
            ]
        );
    }

    #[test]
    fn json_parsing_preserves_document_order() {
        let map = LevelMap::from_json_str(r#"{"zeta": "p1", "alpha": "p2"}"#)
            .expect("valid map");
        assert_eq!(map.entries()[0].0, "zeta");
        assert_eq!(map.entries()[1].0, "alpha");
    }

    #[test]
    fn json_rejects_non_object_and_non_string_values() {
        assert!(LevelMap::from_json_str("[1, 2]").is_err());
        assert!(LevelMap::from_json_str(r#"{"a": 3}"#).is_err());
        assert!(LevelMap::from_json_str("not json").is_err());
    }
}
