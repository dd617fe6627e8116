//! Module container: a fixed catalog of entries plus the insertion-ordered
//! selection of which entries the generated loadout grants.

use serde::{Deserialize, Serialize};

use crate::elements::{Entry, RenderedEntry};

/// The seven inventory categories, in their fixed serialization order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModuleKind {
    Argent,
    Praetor,
    Equipment,
    Weapons,
    WeaponMods,
    Ammo,
    Runes,
}

impl ModuleKind {
    /// All kinds, in serialization order.
    pub const ALL: [ModuleKind; 7] = [
        ModuleKind::Argent,
        ModuleKind::Praetor,
        ModuleKind::Equipment,
        ModuleKind::Weapons,
        ModuleKind::WeaponMods,
        ModuleKind::Ammo,
        ModuleKind::Runes,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Argent => "argent",
            Self::Praetor => "praetor",
            Self::Equipment => "equipment",
            Self::Weapons => "weapons",
            Self::WeaponMods => "weapon_mods",
            Self::Ammo => "ammo",
            Self::Runes => "runes",
        }
    }
}

/// One category of startable content.
///
/// The catalog is fixed at construction; mutation only ever touches the
/// `available` selection. Selection preserves insertion order, and every
/// operation is a silent no-op when given an unknown name or a redundant
/// request, so callers can wire UI toggles straight through.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Module {
    kind: ModuleKind,
    catalog: Vec<Entry>,
    available: Vec<String>,
}

impl Module {
    pub fn new(kind: ModuleKind, catalog: Vec<Entry>) -> Self {
        Self {
            kind,
            catalog,
            available: Vec::new(),
        }
    }

    pub fn kind(&self) -> ModuleKind {
        self.kind
    }

    /// Every entry this module knows about, selected or not.
    pub fn catalog(&self) -> &[Entry] {
        &self.catalog
    }

    /// Names of the selected entries, in the order they were selected.
    pub fn available(&self) -> &[String] {
        &self.available
    }

    pub fn is_available(&self, name: &str) -> bool {
        self.available.iter().any(|n| n == name)
    }

    pub fn entry(&self, name: &str) -> Option<&Entry> {
        self.catalog.iter().find(|e| e.name() == name)
    }

    pub fn entry_mut(&mut self, name: &str) -> Option<&mut Entry> {
        self.catalog.iter_mut().find(|e| e.name() == name)
    }

    /// Selects `name`. Unknown names and duplicates are ignored.
    pub fn add_to_available(&mut self, name: &str) {
        if self.entry(name).is_none() || self.is_available(name) {
            return;
        }
        self.available.push(name.to_string());
    }

    /// Deselects `name` if selected; otherwise does nothing.
    pub fn remove_from_available(&mut self, name: &str) {
        self.available.retain(|n| n != name);
    }

    pub fn set_available(&mut self, name: &str, selected: bool) {
        if selected {
            self.add_to_available(name);
        } else {
            self.remove_from_available(name);
        }
    }

    /// Selects every catalog entry, keeping the positions of entries that
    /// were already selected.
    pub fn add_all_to_available(&mut self) {
        let names: Vec<String> = self.catalog.iter().map(|e| e.name().to_string()).collect();
        for name in names {
            self.add_to_available(&name);
        }
    }

    pub fn clear_available(&mut self) {
        self.available.clear();
    }

    /// Renders the selected entries, in selection order. Recomputed from
    /// the catalog each call so entry mutations (argent level, rune
    /// permanence, ammo counts) are always reflected.
    pub fn rendered_available(&self) -> Vec<RenderedEntry> {
        self.available
            .iter()
            .filter_map(|name| self.entry(name))
            .map(Entry::render)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::EquipmentItem;

    fn equipment_module() -> Module {
        let catalog = vec![
            Entry::Equipment(EquipmentItem {
                name: "fragGrenade".to_string(),
                path: "\"throwable/zion/player/sp/frag_grenade\"".to_string(),
                title: "Frag Grenade".to_string(),
                equip: true,
            }),
            Entry::Equipment(EquipmentItem {
                name: "decoyHologram".to_string(),
                path: "\"decoyhologram/equipment\"".to_string(),
                title: "Decoy Hologram".to_string(),
                equip: false,
            }),
        ];
        Module::new(ModuleKind::Equipment, catalog)
    }

    #[test]
    fn selection_preserves_insertion_order() {
        let mut module = equipment_module();
        module.add_to_available("decoyHologram");
        module.add_to_available("fragGrenade");
        assert_eq!(module.available(), ["decoyHologram", "fragGrenade"]);
    }

    #[test]
    fn unknown_and_duplicate_names_are_no_ops() {
        let mut module = equipment_module();
        module.add_to_available("fragGrenade");
        module.add_to_available("fragGrenade");
        module.add_to_available("bfg10k");
        module.remove_from_available("bfg10k");
        assert_eq!(module.available(), ["fragGrenade"]);
    }

    #[test]
    fn add_all_keeps_existing_positions() {
        let mut module = equipment_module();
        module.add_to_available("decoyHologram");
        module.add_all_to_available();
        assert_eq!(module.available(), ["decoyHologram", "fragGrenade"]);
        module.clear_available();
        assert!(module.available().is_empty());
        assert_eq!(module.catalog().len(), 2);
    }

    #[test]
    fn rendered_available_matches_selection_order() {
        let mut module = equipment_module();
        module.add_all_to_available();
        let rendered = module.rendered_available();
        assert_eq!(rendered.len(), 2);
        assert_eq!(rendered[0][0].1.to_string(), "\"throwable/zion/player/sp/frag_grenade\"");
        assert_eq!(rendered[1].len(), 1);
    }
}
