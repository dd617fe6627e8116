//! The full starting inventory: one module per category, plus the
//! cross-module rules (argent level caps, weapon/ammo coupling) that no
//! single module can enforce alone.

use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::elements::{Entry, ModParent, RenderedEntry, WeaponModPerk};
use crate::modules::{Module, ModuleKind};

/// Highest argent upgrade tier. Only one capacity may sit at this tier.
pub const ARGENT_MAX_LEVEL: i32 = 4;

/// Registry of all seven modules, held in serialization order.
///
/// All mutation goes through this type. Operations follow the module
/// policy: unknown names, wrong-kind names and redundant requests are
/// silent no-ops.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inventory {
    modules: Vec<Module>,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

impl Inventory {
    /// A fresh campaign start: argent capacities at level zero, fists and
    /// pistol, nothing else.
    pub fn new() -> Self {
        Self {
            modules: vec![
                catalog::argent_module(),
                catalog::praetor_module(),
                catalog::equipment_module(),
                catalog::weapon_module(),
                catalog::weapon_mod_module(),
                catalog::ammo_module(),
                catalog::rune_module(),
            ],
        }
    }

    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    pub fn module(&self, kind: ModuleKind) -> &Module {
        self.modules
            .iter()
            .find(|m| m.kind() == kind)
            .unwrap_or_else(|| unreachable!("module {kind:?} always present"))
    }

    fn module_mut(&mut self, kind: ModuleKind) -> &mut Module {
        self.modules
            .iter_mut()
            .find(|m| m.kind() == kind)
            .unwrap_or_else(|| unreachable!("module {kind:?} always present"))
    }

    /// Total decl item count: the fixed base item plus every selected
    /// entry across all modules.
    pub fn total_items(&self) -> usize {
        1 + self.modules.iter().map(|m| m.available().len()).sum::<usize>()
    }

    /// Rendered bodies of every selected entry, modules in serialization
    /// order, entries in selection order within each module.
    pub fn rendered_entries(&self) -> Vec<RenderedEntry> {
        self.modules
            .iter()
            .flat_map(Module::rendered_available)
            .collect()
    }

    /// Sets an argent capacity's tier and returns the value actually
    /// applied. Input is clamped to `[0, ARGENT_MAX_LEVEL]`; a request
    /// for the top tier is capped one below it when a different capacity
    /// already holds it. Unknown names return the clamped request.
    pub fn set_argent_level(&mut self, name: &str, level: i32) -> i32 {
        let mut applied = level.clamp(0, ARGENT_MAX_LEVEL);
        if applied == ARGENT_MAX_LEVEL && self.argent_maxed_other_than(name) {
            applied = ARGENT_MAX_LEVEL - 1;
        }
        if let Some(Entry::Argent(perk)) = self.module_mut(ModuleKind::Argent).entry_mut(name) {
            perk.count = applied;
        }
        applied
    }

    pub fn argent_level(&self, name: &str) -> Option<i32> {
        match self.module(ModuleKind::Argent).entry(name) {
            Some(Entry::Argent(perk)) => Some(perk.count),
            _ => None,
        }
    }

    fn argent_maxed_other_than(&self, name: &str) -> bool {
        self.module(ModuleKind::Argent).catalog().iter().any(|e| {
            matches!(e, Entry::Argent(perk)
                if perk.name != name && perk.count == ARGENT_MAX_LEVEL)
        })
    }

    pub fn set_praetor_available(&mut self, name: &str, selected: bool) {
        self.module_mut(ModuleKind::Praetor).set_available(name, selected);
    }

    pub fn add_all_praetor(&mut self) {
        self.module_mut(ModuleKind::Praetor).add_all_to_available();
    }

    pub fn set_equipment_available(&mut self, name: &str, selected: bool) {
        self.module_mut(ModuleKind::Equipment).set_available(name, selected);
    }

    pub fn add_all_equipment(&mut self) {
        self.module_mut(ModuleKind::Equipment).add_all_to_available();
    }

    /// Selects or deselects a weapon, keeping the ammo module in step:
    /// selecting a weapon selects its ammo type, and deselecting the last
    /// weapon that uses an ammo type deselects that ammo.
    pub fn set_weapon_available(&mut self, name: &str, selected: bool) {
        let ammo_type = match self.module(ModuleKind::Weapons).entry(name) {
            Some(Entry::Weapon(weapon)) => weapon.ammo_type.clone(),
            _ => return,
        };
        self.module_mut(ModuleKind::Weapons).set_available(name, selected);
        let Some(ammo) = ammo_type else { return };
        if selected {
            self.module_mut(ModuleKind::Ammo).add_to_available(&ammo);
        } else if !self.ammo_type_in_use(&ammo) {
            self.module_mut(ModuleKind::Ammo).remove_from_available(&ammo);
        }
    }

    pub fn add_all_weapons(&mut self) {
        let names: Vec<String> = self
            .module(ModuleKind::Weapons)
            .catalog()
            .iter()
            .map(|e| e.name().to_string())
            .collect();
        for name in names {
            self.set_weapon_available(&name, true);
        }
    }

    fn ammo_type_in_use(&self, ammo: &str) -> bool {
        let weapons = self.module(ModuleKind::Weapons);
        weapons.available().iter().any(|name| {
            matches!(weapons.entry(name), Some(Entry::Weapon(w))
                if w.ammo_type.as_deref() == Some(ammo))
        })
    }

    pub fn set_ammo_count(&mut self, name: &str, count: i32) {
        if let Some(Entry::Ammo(item)) = self.module_mut(ModuleKind::Ammo).entry_mut(name) {
            item.count = count;
        }
    }

    pub fn set_rune_available(&mut self, name: &str, selected: bool) {
        self.module_mut(ModuleKind::Runes).set_available(name, selected);
    }

    pub fn add_all_runes(&mut self) {
        self.module_mut(ModuleKind::Runes).add_all_to_available();
    }

    /// Marks a rune's trial upgrade as completed, so the rune's perk
    /// applies at full strength.
    pub fn set_rune_upgraded(&mut self, name: &str, upgraded: bool) {
        if let Some(Entry::Rune(rune)) = self.module_mut(ModuleKind::Runes).entry_mut(name) {
            rune.apply_upgrades = upgraded;
        }
    }

    pub fn set_all_runes_upgraded(&mut self, upgraded: bool) {
        let names: Vec<String> = self
            .module(ModuleKind::Runes)
            .catalog()
            .iter()
            .map(|e| e.name().to_string())
            .collect();
        for name in names {
            self.set_rune_upgraded(&name, upgraded);
        }
    }

    /// Equips a rune permanently, outside the three slots. Implies
    /// selecting it.
    pub fn set_rune_permanent(&mut self, name: &str, permanent: bool) {
        let runes = self.module_mut(ModuleKind::Runes);
        if permanent {
            runes.add_to_available(name);
        }
        if let Some(Entry::Rune(rune)) = runes.entry_mut(name) {
            rune.permanent_equip = permanent;
        }
    }

    /// Selects or deselects one mod perk, verifying that it belongs to
    /// the named weapon. Mismatches are no-ops.
    pub fn set_weapon_mod_available(&mut self, weapon: &str, mod_name: &str, selected: bool) {
        let belongs = matches!(
            self.module(ModuleKind::WeaponMods).entry(mod_name),
            Some(Entry::WeaponMod(perk)) if perk.weapon == weapon
        );
        if belongs {
            self.module_mut(ModuleKind::WeaponMods).set_available(mod_name, selected);
        }
    }

    /// Selectable base mods for one weapon, catalog order. Weapons whose
    /// upgrades are standalone (pistol, super shotgun) have none.
    pub fn mods_for_weapon(&self, weapon: &str) -> Vec<&WeaponModPerk> {
        self.module(ModuleKind::WeaponMods)
            .catalog()
            .iter()
            .filter_map(|e| match e {
                Entry::WeaponMod(perk)
                    if perk.weapon == weapon && perk.parent == ModParent::BaseMod =>
                {
                    Some(perk)
                }
                _ => None,
            })
            .collect()
    }

    /// Upgrades and the mastery of one base mod, catalog order.
    pub fn upgrades_for_mod(&self, base_mod: &str) -> Vec<&WeaponModPerk> {
        self.module(ModuleKind::WeaponMods)
            .catalog()
            .iter()
            .filter_map(|e| match e {
                Entry::WeaponMod(perk)
                    if perk.parent == ModParent::Mod(base_mod.to_string()) =>
                {
                    Some(perk)
                }
                _ => None,
            })
            .collect()
    }

    pub fn set_all_base_mods(&mut self, selected: bool) {
        self.set_mods_matching(selected, |perk| perk.parent == ModParent::BaseMod);
    }

    /// Toggles every upgrade and mastery, standalone ones included.
    pub fn set_all_mod_upgrades(&mut self, selected: bool) {
        self.set_mods_matching(selected, |perk| perk.parent != ModParent::BaseMod);
    }

    fn set_mods_matching(&mut self, selected: bool, pred: impl Fn(&WeaponModPerk) -> bool) {
        let names: Vec<String> = self
            .module(ModuleKind::WeaponMods)
            .catalog()
            .iter()
            .filter_map(|e| match e {
                Entry::WeaponMod(perk) if pred(perk) => Some(perk.name.clone()),
                _ => None,
            })
            .collect();
        let module = self.module_mut(ModuleKind::WeaponMods);
        for name in names {
            module.set_available(&name, selected);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_inventory_counts_base_item_plus_defaults() {
        let inv = Inventory::new();
        // base + 3 argent + fists + pistol
        assert_eq!(inv.total_items(), 6);
    }

    #[test]
    fn argent_levels_clamp_to_range() {
        let mut inv = Inventory::new();
        assert_eq!(inv.set_argent_level("healthCapacity", -3), 0);
        assert_eq!(inv.set_argent_level("healthCapacity", 9), 4);
        assert_eq!(inv.argent_level("healthCapacity"), Some(4));
    }

    #[test]
    fn only_one_argent_capacity_can_be_maxed() {
        let mut inv = Inventory::new();
        assert_eq!(inv.set_argent_level("healthCapacity", 4), 4);
        assert_eq!(inv.set_argent_level("armorCapacity", 4), 3);
        assert_eq!(inv.argent_level("armorCapacity"), Some(3));
        // Re-requesting on the holder keeps it at the top tier.
        assert_eq!(inv.set_argent_level("healthCapacity", 4), 4);
    }

    #[test]
    fn argent_max_frees_up_when_holder_drops() {
        let mut inv = Inventory::new();
        inv.set_argent_level("healthCapacity", 4);
        inv.set_argent_level("healthCapacity", 2);
        assert_eq!(inv.set_argent_level("ammoCapacity", 4), 4);
    }

    #[test]
    fn adding_a_weapon_pulls_in_its_ammo() {
        let mut inv = Inventory::new();
        inv.set_weapon_available("combatShotgun", true);
        assert!(inv.module(ModuleKind::Ammo).is_available("shells"));
    }

    #[test]
    fn ammo_survives_while_another_weapon_shares_it() {
        let mut inv = Inventory::new();
        inv.set_weapon_available("combatShotgun", true);
        inv.set_weapon_available("superShotgun", true);
        inv.set_weapon_available("combatShotgun", false);
        assert!(inv.module(ModuleKind::Ammo).is_available("shells"));
        inv.set_weapon_available("superShotgun", false);
        assert!(!inv.module(ModuleKind::Ammo).is_available("shells"));
    }

    #[test]
    fn ammoless_weapons_leave_the_ammo_module_alone() {
        let mut inv = Inventory::new();
        inv.set_weapon_available("gaussCannon", true);
        inv.set_weapon_available("gaussCannon", false);
        assert!(inv.module(ModuleKind::Ammo).available().is_empty());
    }

    #[test]
    fn removing_a_weapon_never_touches_other_modules_selections() {
        let mut inv = Inventory::new();
        inv.set_equipment_available("fragGrenade", true);
        inv.set_rune_available("vacuum", true);
        inv.set_weapon_available("chaingun", true);
        inv.set_weapon_available("chaingun", false);
        assert!(inv.module(ModuleKind::Equipment).is_available("fragGrenade"));
        assert!(inv.module(ModuleKind::Runes).is_available("vacuum"));
    }

    #[test]
    fn permanent_rune_implies_selection() {
        let mut inv = Inventory::new();
        inv.set_rune_permanent("savagery", true);
        assert!(inv.module(ModuleKind::Runes).is_available("savagery"));
        let Some(Entry::Rune(rune)) = inv.module(ModuleKind::Runes).entry("savagery") else {
            panic!("savagery missing");
        };
        assert!(rune.permanent_equip);
    }

    #[test]
    fn mod_toggle_checks_weapon_ownership() {
        let mut inv = Inventory::new();
        inv.set_weapon_mod_available("pistol", "chargedBurst", true);
        assert!(!inv.module(ModuleKind::WeaponMods).is_available("chargedBurst"));
        inv.set_weapon_mod_available("combatShotgun", "chargedBurst", true);
        assert!(inv.module(ModuleKind::WeaponMods).is_available("chargedBurst"));
    }

    #[test]
    fn mod_queries_split_bases_from_upgrades() {
        let inv = Inventory::new();
        let shotgun_mods: Vec<&str> = inv
            .mods_for_weapon("combatShotgun")
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(shotgun_mods, ["chargedBurst", "explosiveShot"]);

        let upgrades: Vec<&str> = inv
            .upgrades_for_mod("chargedBurst")
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(
            upgrades,
            [
                "chargedBurst_speedyRecovery",
                "chargedBurst_rapidFire",
                "chargedBurst_quickLoad",
                "chargedBurst_powerShot_mastery"
            ]
        );
    }

    #[test]
    fn bulk_mod_toggles_respect_parent_kind() {
        let mut inv = Inventory::new();
        inv.set_all_base_mods(true);
        let mods = inv.module(ModuleKind::WeaponMods);
        assert!(mods.is_available("heatBlast"));
        assert!(!mods.is_available("heatBlast_improvedVenting"));
        // Standalone upgrades count as upgrades.
        let mut inv = Inventory::new();
        inv.set_all_mod_upgrades(true);
        let mods = inv.module(ModuleKind::WeaponMods);
        assert!(mods.is_available("fasterReload"));
        assert!(mods.is_available("lightWeight"));
        assert!(!mods.is_available("siegeMode"));
    }

    #[test]
    fn rendered_entries_follow_module_order() {
        let mut inv = Inventory::new();
        inv.set_rune_available("vacuum", true);
        inv.set_equipment_available("fragGrenade", true);
        let rendered = inv.rendered_entries();
        // argent x3, equipment, weapons x2, rune
        assert_eq!(rendered.len(), 7);
        let last = &rendered[6];
        assert!(last.iter().any(|(k, _)| *k == "isRune"));
        let equipment = &rendered[3];
        assert_eq!(
            equipment[0].1.to_string(),
            "\"throwable/zion/player/sp/frag_grenade\""
        );
    }
}
