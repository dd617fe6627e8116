//! Renders an [`Inventory`] into the game's decl text format, plans the
//! mod's output file tree, and produces a JSON summary of the current
//! selections.

use std::fs;
use std::path::Path;

use loadout_core::{CoreError, CoreErrorCode, DeclValue, Inventory, LevelMap, RenderedEntry};
use serde_json::{Map as JsonMap, Value as JsonValue};

const INDENT: &str = "    ";

/// Directory the game expects loadout decls under, relative to the mod
/// archive root.
pub const DECL_DIR: &str = "decls/devinvloadout/devinvloadout/sp";

/// File name of the main loadout decl level files inherit from.
pub const BASE_DECL_FILE: &str = "base.decl;devInvLoadout";

/// Decl reference prefix used by inheritance pointers.
const INHERIT_PREFIX: &str = "devinvloadout/sp/";

const BASE_ITEM: &[(&str, &str)] = &[("researchGroups", "\"main\""), ("equip", "true")];

/// Incrementally builds brace-delimited decl text. Tracks nesting depth
/// so every line lands at the right 4-space indent.
struct DeclBuilder {
    out: String,
    depth: usize,
}

impl DeclBuilder {
    fn new() -> Self {
        Self { out: String::from("{"), depth: 1 }
    }

    fn line(&mut self, text: &str) {
        self.out.push('\n');
        for _ in 0..self.depth {
            self.out.push_str(INDENT);
        }
        self.out.push_str(text);
    }

    fn open(&mut self, label: &str) {
        self.line(&format!("{label} = {{"));
        self.depth += 1;
    }

    fn assign(&mut self, key: &str, value: &str) {
        self.line(&format!("{key} = {value};"));
    }

    fn close(&mut self) {
        self.depth -= 1;
        self.line("}");
    }

    fn finish(mut self) -> String {
        self.out.push_str("\n}");
        self.out
    }
}

/// Renders the main loadout decl: the fixed base item followed by every
/// selected entry, item indices contiguous across module boundaries.
pub fn render_loadout_decl(inventory: &Inventory) -> String {
    let entries = inventory.rendered_entries();
    let mut decl = DeclBuilder::new();
    decl.open("edit");
    decl.open("startingInventory");
    decl.assign("num", &inventory.total_items().to_string());

    decl.open("item[0]");
    for (key, value) in BASE_ITEM {
        decl.assign(key, value);
    }
    decl.close();

    for (index, body) in entries.iter().enumerate() {
        decl.open(&format!("item[{}]", index + 1));
        for (key, value) in body {
            decl.assign(key, &value.to_string());
        }
        decl.close();
    }

    decl.close();
    decl.close();
    decl.finish()
}

/// Renders one level's decl: an inheritance pointer to the parent level's
/// loadout and an empty edit block.
pub fn render_level_inheritance_decl(parent: &str) -> String {
    let mut decl = DeclBuilder::new();
    decl.assign("inherit", &format!("\"{INHERIT_PREFIX}{parent}\""));
    decl.open("edit");
    decl.close();
    decl.finish()
}

/// One file of the planned mod tree. `relative_path` is slash-separated,
/// relative to the mod archive root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclFile {
    pub relative_path: String,
    pub contents: String,
}

/// Plans the complete mod output: the base loadout decl plus one
/// inheritance decl per level-map entry.
pub fn plan_mod_tree(inventory: &Inventory, levels: &LevelMap) -> Vec<DeclFile> {
    let mut files = vec![DeclFile {
        relative_path: format!("{DECL_DIR}/{BASE_DECL_FILE}"),
        contents: render_loadout_decl(inventory),
    }];
    for (level, parent) in levels.entries() {
        files.push(DeclFile {
            relative_path: format!("{DECL_DIR}/{level}.decl;devInvLoadout"),
            contents: render_level_inheritance_decl(parent),
        });
    }
    files
}

/// Writes the planned mod tree under `root`, creating directories as
/// needed. Fails on the first I/O error; partially written output is the
/// caller's to discard before retrying.
pub fn write_mod_tree(
    inventory: &Inventory,
    levels: &LevelMap,
    root: &Path,
) -> Result<usize, CoreError> {
    let files = plan_mod_tree(inventory, levels);
    for file in &files {
        let path = root.join(&file.relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                CoreError::new(
                    CoreErrorCode::Io,
                    format!("creating {}: {e}", parent.display()),
                )
            })?;
        }
        fs::write(&path, &file.contents).map_err(|e| {
            CoreError::new(CoreErrorCode::Io, format!("writing {}: {e}", path.display()))
        })?;
    }
    Ok(files.len())
}

/// JSON summary of the current selections, for scripting against the
/// tool without parsing decl text.
pub fn render_summary_json(inventory: &Inventory) -> JsonValue {
    let mut root = JsonMap::new();
    root.insert("num".to_string(), JsonValue::from(inventory.total_items() as u64));

    let mut modules = JsonMap::new();
    for module in inventory.modules() {
        let selected: Vec<JsonValue> = module
            .available()
            .iter()
            .map(|name| JsonValue::String(name.clone()))
            .collect();
        modules.insert(module.kind().label().to_string(), JsonValue::Array(selected));
    }
    root.insert("modules".to_string(), JsonValue::Object(modules));

    let items: Vec<JsonValue> = inventory
        .rendered_entries()
        .iter()
        .map(rendered_entry_json)
        .collect();
    root.insert("items".to_string(), JsonValue::Array(items));
    JsonValue::Object(root)
}

fn rendered_entry_json(body: &RenderedEntry) -> JsonValue {
    let mut map = JsonMap::new();
    for (key, value) in body {
        let json = match value {
            DeclValue::Str(s) => JsonValue::String(s.trim_matches('"').to_string()),
            DeclValue::Int(n) => JsonValue::from(*n),
            DeclValue::Bool(b) => JsonValue::Bool(*b),
        };
        map.insert((*key).to_string(), json);
    }
    JsonValue::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_edit_block_closes_at_one_indent() {
        let decl = render_level_inheritance_decl("olympia_surface_1");
        assert_eq!(
            decl,
            "{\n    inherit = \"devinvloadout/sp/olympia_surface_1\";\n    edit = {\n    }\n}"
        );
    }

    #[test]
    fn builder_nests_item_bodies_four_deep() {
        let inv = Inventory::new();
        let decl = render_loadout_decl(&inv);
        assert!(decl.contains("\n                researchGroups = \"main\";"));
        assert!(decl.contains("\n            item[0] = {"));
    }
}
