//! Inventory entries: the individual perks and items a player can start
//! the campaign with, and the per-variant rendering rules that turn them
//! into decl key/value pairs.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A literal value on the right-hand side of a decl assignment.
///
/// String values carry their own quote characters verbatim (the catalog
/// stores asset paths pre-quoted, matching the game's decl grammar);
/// booleans render as lowercase `true`/`false`; integers render bare.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeclValue {
    Str(String),
    Int(i32),
    Bool(bool),
}

impl fmt::Display for DeclValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{n}"),
            Self::Bool(b) => f.write_str(if *b { "true" } else { "false" }),
        }
    }
}

/// One rendered decl item body: ordered key/value pairs, exactly the keys
/// the owning variant's shape demands. Optional keys are omitted, never
/// emitted empty.
pub type RenderedEntry = Vec<(&'static str, DeclValue)>;

/// Permanent stat increase to a suit subsystem capacity (health, armor or
/// ammo), granted by Argent Cells. `count` is the upgrade tier in `[0, 4]`;
/// range enforcement lives in the owning module, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgentPerk {
    pub name: String,
    pub path: String,
    pub count: i32,
}

/// Permanent suit upgrade granted by Praetor Tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PraetorPerk {
    pub name: String,
    pub path: String,
    pub title: String,
    pub category: String,
    pub unlockable: Option<String>,
}

/// Demonic sigil granting a unique perk, acquired via Rune Trials.
///
/// A rune normally occupies one of three slots (`isRune` in the output);
/// with `permanent_equip` set it is instead equipped permanently without
/// consuming a slot. The two shapes are mutually exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunePerk {
    pub name: String,
    pub path: String,
    pub title: String,
    pub apply_upgrades: bool,
    pub permanent_equip: bool,
}

/// Position of a weapon-mod perk in its weapon's two-level mod tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModParent {
    /// A selectable base mod (the game's `isBaseMod` sentinel).
    BaseMod,
    /// An upgrade that applies to the weapon directly, with no base mod.
    Standalone,
    /// An upgrade or mastery of the named base mod.
    Mod(String),
}

/// A weapon mod, mod upgrade, or mastery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponModPerk {
    pub name: String,
    pub path: String,
    pub title: String,
    pub weapon: String,
    pub parent: ModParent,
}

impl WeaponModPerk {
    pub fn is_base_mod(&self) -> bool {
        self.parent == ModParent::BaseMod
    }
}

/// Jump boots and throwables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentItem {
    pub name: String,
    pub path: String,
    pub title: String,
    pub equip: bool,
}

/// An armament: fists, chainsaw, guns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponItem {
    pub name: String,
    pub path: String,
    pub title: String,
    pub ammo_type: Option<String>,
    pub equip: bool,
    pub equip_reserve: bool,
}

/// Shared ammo pool stock for one ammunition type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmmoItem {
    pub name: String,
    pub path: String,
    pub count: i32,
}

/// One selectable unit of starting-inventory content.
///
/// Closed set: each variant renders the exact key shape the game's decl
/// grammar demands for that kind of entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Entry {
    Argent(ArgentPerk),
    Praetor(PraetorPerk),
    Rune(RunePerk),
    WeaponMod(WeaponModPerk),
    Equipment(EquipmentItem),
    Weapon(WeaponItem),
    Ammo(AmmoItem),
}

impl Entry {
    /// Stable identifier, unique within the owning module's catalog.
    pub fn name(&self) -> &str {
        match self {
            Self::Argent(e) => &e.name,
            Self::Praetor(e) => &e.name,
            Self::Rune(e) => &e.name,
            Self::WeaponMod(e) => &e.name,
            Self::Equipment(e) => &e.name,
            Self::Weapon(e) => &e.name,
            Self::Ammo(e) => &e.name,
        }
    }

    /// Asset-namespace reference, carried to the output verbatim.
    pub fn path(&self) -> &str {
        match self {
            Self::Argent(e) => &e.path,
            Self::Praetor(e) => &e.path,
            Self::Rune(e) => &e.path,
            Self::WeaponMod(e) => &e.path,
            Self::Equipment(e) => &e.path,
            Self::Weapon(e) => &e.path,
            Self::Ammo(e) => &e.path,
        }
    }

    /// Display title, where the catalog defines one.
    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Argent(_) | Self::Ammo(_) => None,
            Self::Praetor(e) => Some(&e.title),
            Self::Rune(e) => Some(&e.title),
            Self::WeaponMod(e) => Some(&e.title),
            Self::Equipment(e) => Some(&e.title),
            Self::Weapon(e) => Some(&e.title),
        }
    }

    /// Renders this entry into its decl item body. Pure: the same fields
    /// always produce the same pairs.
    pub fn render(&self) -> RenderedEntry {
        match self {
            Self::Argent(perk) => render_argent(perk),
            Self::Praetor(perk) => render_praetor(perk),
            Self::Rune(perk) => render_rune(perk),
            Self::WeaponMod(perk) => render_weapon_mod(perk),
            Self::Equipment(item) => render_equipment(item),
            Self::Weapon(item) => render_weapon(item),
            Self::Ammo(item) => render_ammo(item),
        }
    }
}

fn render_argent(perk: &ArgentPerk) -> RenderedEntry {
    let mut out = vec![
        ("perk", DeclValue::Str(perk.path.clone())),
        ("count", DeclValue::Int(perk.count)),
        ("equip", DeclValue::Bool(true)),
    ];
    // The ammo capacity perk is shape-distinct from its health/armor
    // siblings: the game only applies it correctly after the loadout.
    if perk.name == "ammoCapacity" {
        out.push(("applyAfterLoadout", DeclValue::Bool(true)));
    }
    out.push(("remove_after_equip", DeclValue::Bool(true)));
    out
}

fn render_praetor(perk: &PraetorPerk) -> RenderedEntry {
    let mut out = vec![("perk", DeclValue::Str(perk.path.clone()))];
    if let Some(unlockable) = &perk.unlockable {
        out.push(("unlockable", DeclValue::Str(unlockable.clone())));
    }
    out.push(("equip", DeclValue::Bool(true)));
    out
}

fn render_rune(perk: &RunePerk) -> RenderedEntry {
    let mut out = vec![
        ("perk", DeclValue::Str(perk.path.clone())),
        ("applyUpgradesForPerk", DeclValue::Bool(perk.apply_upgrades)),
    ];
    if perk.permanent_equip {
        out.push(("equip", DeclValue::Bool(true)));
    } else {
        out.push(("isRune", DeclValue::Bool(true)));
    }
    out
}

fn render_weapon_mod(perk: &WeaponModPerk) -> RenderedEntry {
    let mut out = vec![("perk", DeclValue::Str(perk.path.clone()))];
    // Base mods are granted unequipped; upgrades and masteries take
    // effect immediately.
    if !perk.is_base_mod() {
        out.push(("equip", DeclValue::Bool(true)));
    }
    out
}

fn render_equipment(item: &EquipmentItem) -> RenderedEntry {
    let mut out = vec![("item", DeclValue::Str(item.path.clone()))];
    if item.equip {
        out.push(("equip", DeclValue::Bool(true)));
    }
    out
}

fn render_weapon(item: &WeaponItem) -> RenderedEntry {
    let mut out = vec![("item", DeclValue::Str(item.path.clone()))];
    if item.equip {
        out.push(("equip", DeclValue::Bool(true)));
    } else if item.equip_reserve {
        out.push(("equip_reserve", DeclValue::Bool(true)));
    }
    out
}

fn render_ammo(item: &AmmoItem) -> RenderedEntry {
    vec![
        ("item", DeclValue::Str(item.path.clone())),
        ("count", DeclValue::Int(item.count)),
        ("applyAfterLoadout", DeclValue::Bool(true)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(rendered: &RenderedEntry) -> Vec<&'static str> {
        rendered.iter().map(|(k, _)| *k).collect()
    }

    #[test]
    fn argent_health_renders_without_apply_after_loadout() {
        let perk = ArgentPerk {
            name: "healthCapacity".to_string(),
            path: "\"perk/zion/player/sp/enviroment_suit/health_capacity\"".to_string(),
            count: 2,
        };
        let rendered = Entry::Argent(perk).render();
        assert_eq!(
            keys(&rendered),
            vec!["perk", "count", "equip", "remove_after_equip"]
        );
        assert_eq!(rendered[1].1, DeclValue::Int(2));
    }

    #[test]
    fn argent_ammo_capacity_gets_apply_after_loadout() {
        let perk = ArgentPerk {
            name: "ammoCapacity".to_string(),
            path: "\"perk/zion/player/sp/enviroment_suit/ammo_capacity\"".to_string(),
            count: 4,
        };
        let rendered = Entry::Argent(perk).render();
        assert_eq!(
            keys(&rendered),
            vec![
                "perk",
                "count",
                "equip",
                "applyAfterLoadout",
                "remove_after_equip"
            ]
        );
    }

    #[test]
    fn praetor_unlockable_key_is_omitted_when_absent() {
        let base = PraetorPerk {
            name: "secretSense".to_string(),
            path: "\"perk/zion/player/sp/enviroment_suit/automap_2\"".to_string(),
            title: "Secret Sense".to_string(),
            category: "Area-Scanning Technology".to_string(),
            unlockable: None,
        };
        assert_eq!(keys(&Entry::Praetor(base.clone()).render()), vec!["perk", "equip"]);

        let with_unlockable = PraetorPerk {
            unlockable: Some("\"researchprojects/find_collectibles_1\"".to_string()),
            ..base
        };
        assert_eq!(
            keys(&Entry::Praetor(with_unlockable).render()),
            vec!["perk", "unlockable", "equip"]
        );
    }

    #[test]
    fn rune_shapes_are_mutually_exclusive() {
        let mut rune = RunePerk {
            name: "vacuum".to_string(),
            path: "\"perk/zion/player/sp/enviroment_suit/increase_drop_radius\"".to_string(),
            title: "Vacuum".to_string(),
            apply_upgrades: true,
            permanent_equip: false,
        };
        let slotted = Entry::Rune(rune.clone()).render();
        assert_eq!(keys(&slotted), vec!["perk", "applyUpgradesForPerk", "isRune"]);

        rune.permanent_equip = true;
        let permanent = Entry::Rune(rune).render();
        assert_eq!(keys(&permanent), vec!["perk", "applyUpgradesForPerk", "equip"]);
    }

    #[test]
    fn base_mods_render_bare_and_upgrades_render_equipped() {
        let base = WeaponModPerk {
            name: "chargedBurst".to_string(),
            path: "\"perk/zion/player/sp/weapons/shotgun/secondary_charge_burst\"".to_string(),
            title: "Charged Burst".to_string(),
            weapon: "combatShotgun".to_string(),
            parent: ModParent::BaseMod,
        };
        assert_eq!(keys(&Entry::WeaponMod(base).render()), vec!["perk"]);

        let upgrade = WeaponModPerk {
            name: "chargedBurst_rapidFire".to_string(),
            path: "\"perk/zion/player/sp/weapons/shotgun/secondary_charge_burst_faster_fire_rate\""
                .to_string(),
            title: "Rapid Fire".to_string(),
            weapon: "combatShotgun".to_string(),
            parent: ModParent::Mod("chargedBurst".to_string()),
        };
        assert_eq!(keys(&Entry::WeaponMod(upgrade).render()), vec!["perk", "equip"]);
    }

    #[test]
    fn weapon_render_prefers_equip_over_reserve() {
        let mut weapon = WeaponItem {
            name: "heavyAssaultRifle".to_string(),
            path: "\"weapon/zion/player/sp/heavy_rifle_heavy_ar\"".to_string(),
            title: "Heavy Assault Rifle".to_string(),
            ammo_type: Some("bullets".to_string()),
            equip: false,
            equip_reserve: true,
        };
        assert_eq!(
            keys(&Entry::Weapon(weapon.clone()).render()),
            vec!["item", "equip_reserve"]
        );

        weapon.equip = true;
        assert_eq!(keys(&Entry::Weapon(weapon).render()), vec!["item", "equip"]);
    }

    #[test]
    fn render_is_idempotent() {
        let entry = Entry::Ammo(AmmoItem {
            name: "shells".to_string(),
            path: "\"ammo/zion/sharedammopool/shells\"".to_string(),
            count: 99,
        });
        assert_eq!(entry.render(), entry.render());
    }

    #[test]
    fn bool_literals_are_lowercase() {
        assert_eq!(DeclValue::Bool(true).to_string(), "true");
        assert_eq!(DeclValue::Bool(false).to_string(), "false");
        assert_eq!(DeclValue::Int(999).to_string(), "999");
        assert_eq!(DeclValue::Str("\"a/b\"".to_string()).to_string(), "\"a/b\"");
    }
}
