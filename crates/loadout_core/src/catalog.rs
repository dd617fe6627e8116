//! Static catalog data for every module, lifted from the game's decl
//! namespace. Paths are relative to their module's prefix; the constructors
//! compose and quote them.
//!
//! Note: `enviroment_suit` is spelled exactly as it appears in the game
//! assets. Do not correct it.

use crate::elements::{
    AmmoItem, ArgentPerk, Entry, EquipmentItem, ModParent, PraetorPerk, RunePerk, WeaponItem,
    WeaponModPerk,
};
use crate::modules::{Module, ModuleKind};

const SUIT_PERK_PREFIX: &str = "perk/zion/player/sp/enviroment_suit/";
const WEAPON_PERK_PREFIX: &str = "perk/zion/player/sp/weapons/";
const WEAPON_PREFIX: &str = "weapon/zion/player/sp/";
const AMMO_PREFIX: &str = "ammo/zion/sharedammopool/";

fn quoted(prefix: &str, suffix: &str) -> String {
    format!("\"{prefix}{suffix}\"")
}

struct ArgentDef {
    name: &'static str,
    path: &'static str,
}

const ARGENT_DEFS: &[ArgentDef] = &[
    ArgentDef { name: "healthCapacity", path: "health_capacity" },
    ArgentDef { name: "armorCapacity", path: "armor_capacity" },
    ArgentDef { name: "ammoCapacity", path: "ammo_capacity" },
];

struct PraetorDef {
    name: &'static str,
    title: &'static str,
    category: &'static str,
    path: &'static str,
    unlockable: Option<&'static str>,
}

const ENVIRONMENTAL_RESISTANCE: &str = "Environmental Resistance";
const AREA_SCANNING: &str = "Area-Scanning Technology";
const EQUIPMENT_SYSTEM: &str = "Equipment System";
const POWERUP_EFFECTIVENESS: &str = "Powerup Effectiveness";
const DEXTERITY: &str = "Dexterity";

const PRAETOR_DEFS: &[PraetorDef] = &[
    PraetorDef {
        name: "hazardProtection",
        title: "Hazard Protection",
        category: ENVIRONMENTAL_RESISTANCE,
        path: "modify_enviromental_damage_1",
        unlockable: None,
    },
    PraetorDef {
        name: "selfPreservation",
        title: "Self Preservation",
        category: ENVIRONMENTAL_RESISTANCE,
        path: "modify_enviromental_damage_2",
        unlockable: None,
    },
    PraetorDef {
        name: "barrelsOFun",
        title: "Barrels O' Fun",
        category: ENVIRONMENTAL_RESISTANCE,
        path: "modify_enviromental_damage_3",
        unlockable: None,
    },
    PraetorDef {
        name: "itemAwareness",
        title: "Item Awareness",
        category: AREA_SCANNING,
        path: "automap_1",
        unlockable: Some("researchprojects/find_collectibles_1"),
    },
    PraetorDef {
        name: "secretSense",
        title: "Secret Sense",
        category: AREA_SCANNING,
        path: "automap_2",
        unlockable: None,
    },
    PraetorDef {
        name: "fullView",
        title: "Full View",
        category: AREA_SCANNING,
        path: "automap_3",
        unlockable: None,
    },
    PraetorDef {
        name: "quickCharge",
        title: "Quick Charge",
        category: EQUIPMENT_SYSTEM,
        path: "equipment_1",
        unlockable: Some("researchprojects/equipment_1"),
    },
    PraetorDef {
        name: "stockUp",
        title: "Stock Up",
        category: EQUIPMENT_SYSTEM,
        path: "equipment_2",
        unlockable: None,
    },
    PraetorDef {
        name: "rapidCharge",
        title: "Rapid Charge",
        category: EQUIPMENT_SYSTEM,
        path: "equipment_3",
        unlockable: None,
    },
    PraetorDef {
        name: "powerSurge",
        title: "Power Surge",
        category: POWERUP_EFFECTIVENESS,
        path: "powerup_shockwave",
        unlockable: None,
    },
    PraetorDef {
        name: "healingPower",
        title: "Healing Power",
        category: POWERUP_EFFECTIVENESS,
        path: "powerup_health",
        unlockable: None,
    },
    PraetorDef {
        name: "powerExtender",
        title: "Power Extender",
        category: POWERUP_EFFECTIVENESS,
        path: "modify_powerup_duration",
        unlockable: None,
    },
    PraetorDef {
        name: "adept",
        title: "Adept",
        category: DEXTERITY,
        path: "dexterity_increase_1",
        unlockable: None,
    },
    PraetorDef {
        name: "quickHands",
        title: "Quick Hands",
        category: DEXTERITY,
        path: "dexterity_increase_2",
        unlockable: None,
    },
    PraetorDef {
        name: "hotSwap",
        title: "Hot Swap",
        category: DEXTERITY,
        path: "dexterity_increase_3",
        unlockable: None,
    },
];

struct RuneDef {
    name: &'static str,
    title: &'static str,
    path: &'static str,
}

const RUNE_DEFS: &[RuneDef] = &[
    RuneDef { name: "vacuum", title: "Vacuum", path: "increase_drop_radius" },
    RuneDef {
        name: "dazedAndConfused",
        title: "Dazed and Confused",
        path: "modify_enemy_stagger_duration",
    },
    RuneDef { name: "ammoBoost", title: "Ammo Boost", path: "modify_ammo_drops" },
    RuneDef {
        name: "equipmentPower",
        title: "Equipment Power",
        path: "activate_equipment_effectiveness",
    },
    RuneDef { name: "seekAndDestroy", title: "Seek and Destroy", path: "glory_kill_dash" },
    RuneDef { name: "savagery", title: "Savagery", path: "glory_kill_speed" },
    RuneDef {
        name: "inFlightMobility",
        title: "In-Flight Mobility",
        path: "double_jump_air_control",
    },
    RuneDef {
        name: "armoredOffensive",
        title: "Armored Offensive",
        path: "glory_kills_award_armor",
    },
    RuneDef { name: "bloodFueled", title: "Blood Fueled", path: "speed_boost_on_glory_kill" },
    RuneDef {
        name: "intimacyIsBest",
        title: "Intimacy is Best",
        path: "modify_enemy_stagger_toughness",
    },
    RuneDef {
        name: "richGetRicher",
        title: "Rich Get Richer",
        path: "infinite_ammo_on_health_value",
    },
    RuneDef { name: "savingThrow", title: "Saving Throw", path: "activate_focus_on_death_blow" },
];

struct EquipmentDef {
    name: &'static str,
    title: &'static str,
    path: &'static str,
    equip: bool,
}

const EQUIPMENT_DEFS: &[EquipmentDef] = &[
    EquipmentDef {
        name: "doubleJumpThrustBoots",
        title: "Delta V Jump-Boots",
        path: "jumpboots/base",
        equip: true,
    },
    EquipmentDef {
        name: "fragGrenade",
        title: "Frag Grenade",
        path: "throwable/zion/player/sp/frag_grenade",
        equip: true,
    },
    EquipmentDef {
        name: "siphonGrenade",
        title: "Siphon Grenade",
        path: "throwable/zion/player/sp/siphon_grenade",
        equip: false,
    },
    EquipmentDef {
        name: "decoyHologram",
        title: "Decoy Hologram",
        path: "decoyhologram/equipment",
        equip: false,
    },
];

struct WeaponDef {
    name: &'static str,
    title: &'static str,
    path: &'static str,
    ammo: Option<&'static str>,
    equip: bool,
    equip_reserve: bool,
}

const WEAPON_DEFS: &[WeaponDef] = &[
    WeaponDef {
        name: "fists",
        title: "Fists",
        path: "fists",
        ammo: None,
        equip: false,
        equip_reserve: false,
    },
    WeaponDef {
        name: "chainsaw",
        title: "Chainsaw",
        path: "chainsaw",
        ammo: Some("fuel"),
        equip: false,
        equip_reserve: false,
    },
    WeaponDef {
        name: "pistol",
        title: "Pistol",
        path: "pistol",
        ammo: None,
        equip: true,
        equip_reserve: false,
    },
    WeaponDef {
        name: "combatShotgun",
        title: "Combat Shotgun",
        path: "shotgun",
        ammo: Some("shells"),
        equip: false,
        equip_reserve: false,
    },
    WeaponDef {
        name: "heavyAssaultRifle",
        title: "Heavy Assault Rifle",
        path: "heavy_rifle_heavy_ar",
        ammo: Some("bullets"),
        equip: false,
        equip_reserve: true,
    },
    WeaponDef {
        name: "plasmaRifle",
        title: "Plasma Rifle",
        path: "plasma_rifle",
        ammo: Some("cells"),
        equip: false,
        equip_reserve: false,
    },
    WeaponDef {
        name: "rocketLauncher",
        title: "Rocket Launcher",
        path: "rocket_launcher",
        ammo: Some("rockets"),
        equip: false,
        equip_reserve: false,
    },
    WeaponDef {
        name: "superShotgun",
        title: "Super Shotgun",
        path: "double_barrel",
        ammo: Some("shells"),
        equip: false,
        equip_reserve: false,
    },
    WeaponDef {
        name: "gaussCannon",
        title: "Gauss Cannon",
        path: "gauss_rifle",
        ammo: None,
        equip: false,
        equip_reserve: false,
    },
    WeaponDef {
        name: "chaingun",
        title: "Chaingun",
        path: "chaingun",
        ammo: Some("bullets"),
        equip: false,
        equip_reserve: false,
    },
    WeaponDef {
        name: "bfg9000",
        title: "BFG-9000",
        path: "bfg",
        ammo: Some("bfg"),
        equip: false,
        equip_reserve: false,
    },
];

/// Weapons granted at the start of a fresh campaign.
const DEFAULT_WEAPONS: &[&str] = &["fists", "pistol"];

enum ParentDef {
    Base,
    Standalone,
    Of(&'static str),
}

struct ModDef {
    name: &'static str,
    title: &'static str,
    weapon: &'static str,
    path: &'static str,
    parent: ParentDef,
}

const WEAPON_MOD_DEFS: &[ModDef] = &[
    // Pistol upgrades apply to the charge shot directly.
    ModDef {
        name: "chargeEfficiency",
        title: "Charge Efficiency",
        weapon: "pistol",
        path: "pistol/secondary_charge_shot_faster_charge",
        parent: ParentDef::Standalone,
    },
    ModDef {
        name: "quickRecovery",
        title: "Quick Recovery",
        weapon: "pistol",
        path: "pistol/secondary_charge_shot_faster_discharge",
        parent: ParentDef::Standalone,
    },
    ModDef {
        name: "lightWeight",
        title: "Light Weight",
        weapon: "pistol",
        path: "pistol/secondary_charge_shot_no_movement_penalty",
        parent: ParentDef::Standalone,
    },
    ModDef {
        name: "increasedPowerMastery",
        title: "Increased Power",
        weapon: "pistol",
        path: "pistol/secondary_charge_shot_higher_damage",
        parent: ParentDef::Standalone,
    },
    // Combat shotgun.
    ModDef {
        name: "chargedBurst",
        title: "Charged Burst",
        weapon: "combatShotgun",
        path: "shotgun/secondary_charge_burst",
        parent: ParentDef::Base,
    },
    ModDef {
        name: "chargedBurst_speedyRecovery",
        title: "Speedy Recovery",
        weapon: "combatShotgun",
        path: "shotgun/secondary_charge_burst_faster_recharge",
        parent: ParentDef::Of("chargedBurst"),
    },
    ModDef {
        name: "chargedBurst_rapidFire",
        title: "Rapid Fire",
        weapon: "combatShotgun",
        path: "shotgun/secondary_charge_burst_faster_fire_rate",
        parent: ParentDef::Of("chargedBurst"),
    },
    ModDef {
        name: "chargedBurst_quickLoad",
        title: "Quick Load",
        weapon: "combatShotgun",
        path: "shotgun/secondary_charge_burst_faster_charge",
        parent: ParentDef::Of("chargedBurst"),
    },
    ModDef {
        name: "chargedBurst_powerShot_mastery",
        title: "Power Shot",
        weapon: "combatShotgun",
        path: "shotgun/secondary_charge_burst_mastery",
        parent: ParentDef::Of("chargedBurst"),
    },
    ModDef {
        name: "explosiveShot",
        title: "Explosive Shot",
        weapon: "combatShotgun",
        path: "shotgun/pop_rocket",
        parent: ParentDef::Base,
    },
    ModDef {
        name: "explosiveShot_speedyRecovery",
        title: "Speedy Recovery",
        weapon: "combatShotgun",
        path: "shotgun/pop_rocket_faster_recharge",
        parent: ParentDef::Of("explosiveShot"),
    },
    ModDef {
        name: "explosiveShot_biggerBoom",
        title: "Bigger Boom",
        weapon: "combatShotgun",
        path: "shotgun/pop_rocket_larger_explosion",
        parent: ParentDef::Of("explosiveShot"),
    },
    ModDef {
        name: "explosiveShot_instantLoad",
        title: "Instant Load",
        weapon: "combatShotgun",
        path: "shotgun/pop_rocket_faster_charge",
        parent: ParentDef::Of("explosiveShot"),
    },
    ModDef {
        name: "explosiveShot_clusterStrike_mastery",
        title: "Cluster Strike",
        weapon: "combatShotgun",
        path: "shotgun/pop_rocket_mastery",
        parent: ParentDef::Of("explosiveShot"),
    },
    // Super shotgun has upgrades but no mods.
    ModDef {
        name: "fasterReload",
        title: "Faster Reload",
        weapon: "superShotgun",
        path: "double_barrel/default_faster_reload",
        parent: ParentDef::Standalone,
    },
    ModDef {
        name: "uraniumCoating",
        title: "Uranium Coating",
        weapon: "superShotgun",
        path: "double_barrel/default_bullet_penetration",
        parent: ParentDef::Standalone,
    },
    ModDef {
        name: "doubleTrouble_mastery",
        title: "Double Trouble",
        weapon: "superShotgun",
        path: "double_barrel/mastery",
        parent: ParentDef::Standalone,
    },
    // Heavy assault rifle.
    ModDef {
        name: "tacticalScope",
        title: "Tactical Scope",
        weapon: "heavyAssaultRifle",
        path: "heavy_rifle_heavy_ar/zoom",
        parent: ParentDef::Base,
    },
    ModDef {
        name: "tacticalScope_uraniumCoating",
        title: "Uranium Coating",
        weapon: "heavyAssaultRifle",
        path: "heavy_rifle_heavy_ar/zoom_bullet_penetration",
        parent: ParentDef::Of("tacticalScope"),
    },
    ModDef {
        name: "tacticalScope_skullCracker",
        title: "Skull Cracker",
        weapon: "heavyAssaultRifle",
        path: "heavy_rifle_heavy_ar/zoom_more_headshot_damage",
        parent: ParentDef::Of("tacticalScope"),
    },
    ModDef {
        name: "tacticalScope_lightWeight",
        title: "Light Weight",
        weapon: "heavyAssaultRifle",
        path: "heavy_rifle_heavy_ar/zoom_no_movement_penalty",
        parent: ParentDef::Of("tacticalScope"),
    },
    ModDef {
        name: "tacticalScope_devastatorRounds_mastery",
        title: "Devastator Rounds",
        weapon: "heavyAssaultRifle",
        path: "heavy_rifle_heavy_ar/zoom_mastery",
        parent: ParentDef::Of("tacticalScope"),
    },
    ModDef {
        name: "microMissiles",
        title: "Micro Missiles",
        weapon: "heavyAssaultRifle",
        path: "heavy_rifle_heavy_ar/burst_detonate",
        parent: ParentDef::Base,
    },
    ModDef {
        name: "microMissiles_ammoEfficient",
        title: "Ammo Efficient",
        weapon: "heavyAssaultRifle",
        path: "heavy_rifle_heavy_ar/burst_detonate_lower_ammo_cost",
        parent: ParentDef::Of("microMissiles"),
    },
    ModDef {
        name: "microMissiles_advancedLoader",
        title: "Advanced Loader",
        weapon: "heavyAssaultRifle",
        path: "heavy_rifle_heavy_ar/burst_detonate_faster_recharge",
        parent: ParentDef::Of("microMissiles"),
    },
    ModDef {
        name: "microMissiles_quickLauncher",
        title: "Quick Launcher",
        weapon: "heavyAssaultRifle",
        path: "heavy_rifle_heavy_ar/burst_detonate_faster_charge_time",
        parent: ParentDef::Of("microMissiles"),
    },
    ModDef {
        name: "microMissiles_bottomlessMissiles_mastery",
        title: "Bottomless Missiles",
        weapon: "heavyAssaultRifle",
        path: "heavy_rifle_heavy_ar/burst_detonate_mastery",
        parent: ParentDef::Of("microMissiles"),
    },
    // Plasma rifle.
    ModDef {
        name: "heatBlast",
        title: "Heat Blast",
        weapon: "plasmaRifle",
        path: "plasma_rifle/secondary_aoe",
        parent: ParentDef::Base,
    },
    ModDef {
        name: "heatBlast_superHeatedRounds",
        title: "Super Heated Rounds",
        weapon: "plasmaRifle",
        path: "plasma_rifle/secondary_aoe_faster_charge",
        parent: ParentDef::Of("heatBlast"),
    },
    ModDef {
        name: "heatBlast_improvedVenting",
        title: "Improved Venting",
        weapon: "plasmaRifle",
        path: "plasma_rifle/secondary_aoe_faster_recovery",
        parent: ParentDef::Of("heatBlast"),
    },
    ModDef {
        name: "heatBlast_expandedThreshold",
        title: "Expanded Threshold",
        weapon: "plasmaRifle",
        path: "plasma_rifle/secondary_aoe_more_damage",
        parent: ParentDef::Of("heatBlast"),
    },
    ModDef {
        name: "heatBlast_heatedCore_mastery",
        title: "Heated Core",
        weapon: "plasmaRifle",
        path: "plasma_rifle/secondary_aoe_mastery",
        parent: ParentDef::Of("heatBlast"),
    },
    ModDef {
        name: "stunBomb",
        title: "Stun Bomb",
        weapon: "plasmaRifle",
        path: "plasma_rifle/secondary_stun",
        parent: ParentDef::Base,
    },
    ModDef {
        name: "stunBomb_quickRecharge",
        title: "Quick Recharge",
        weapon: "plasmaRifle",
        path: "plasma_rifle/secondary_stun_faster_recharge",
        parent: ParentDef::Of("stunBomb"),
    },
    ModDef {
        name: "stunBomb_bigShock",
        title: "Big Shock",
        weapon: "plasmaRifle",
        path: "plasma_rifle/secondary_stun_larger_radius",
        parent: ParentDef::Of("stunBomb"),
    },
    ModDef {
        name: "stunBomb_largerStun",
        title: "Larger Stun",
        weapon: "plasmaRifle",
        path: "plasma_rifle/secondary_stun_longer_stun",
        parent: ParentDef::Of("stunBomb"),
    },
    ModDef {
        name: "stunBomb_chainStun_mastery",
        title: "Chain Stun",
        weapon: "plasmaRifle",
        path: "plasma_rifle/secondary_stun_mastery",
        parent: ParentDef::Of("stunBomb"),
    },
    // Rocket launcher.
    ModDef {
        name: "lockOnBurst",
        title: "Lock-On Burst",
        weapon: "rocketLauncher",
        path: "rocket_launcher/lock_on",
        parent: ParentDef::Base,
    },
    ModDef {
        name: "lockOnBurst_quickLock",
        title: "Quick Lock",
        weapon: "rocketLauncher",
        path: "rocket_launcher/lockon_decrease_lock_time",
        parent: ParentDef::Of("lockOnBurst"),
    },
    ModDef {
        name: "lockOnBurst_fasterRecovery",
        title: "Faster Recovery",
        weapon: "rocketLauncher",
        path: "rocket_launcher/lockon_faster_recovery",
        parent: ParentDef::Of("lockOnBurst"),
    },
    ModDef {
        name: "lockOnBurst_multiTargeting_mastery",
        title: "Multi-Targeting",
        weapon: "rocketLauncher",
        path: "rocket_launcher/lockon_mastery",
        parent: ParentDef::Of("lockOnBurst"),
    },
    ModDef {
        name: "remoteDetonation",
        title: "Remote Detonation",
        weapon: "rocketLauncher",
        path: "rocket_launcher/detonate",
        parent: ParentDef::Base,
    },
    ModDef {
        name: "remoteDetonation_improvedWarhead",
        title: "Improved Warhead",
        weapon: "rocketLauncher",
        path: "rocket_launcher/detonate_larger_damage_radius",
        parent: ParentDef::Of("remoteDetonation"),
    },
    ModDef {
        name: "remoteDetonation_jaggedShrapnel",
        title: "Jagged Shrapnel",
        weapon: "rocketLauncher",
        path: "rocket_launcher/detonate_dot_undead",
        parent: ParentDef::Of("remoteDetonation"),
    },
    ModDef {
        name: "remoteDetonation_externalPayload_mastery",
        title: "External Payload",
        weapon: "rocketLauncher",
        path: "rocket_launcher/detonate_mastery",
        parent: ParentDef::Of("remoteDetonation"),
    },
    // Gauss cannon.
    ModDef {
        name: "precisionBolt",
        title: "Precision Bolt",
        weapon: "gaussCannon",
        path: "gauss_cannon/charged_sniper",
        parent: ParentDef::Base,
    },
    ModDef {
        name: "precisionBolt_energyEfficient",
        title: "Energy Efficient",
        weapon: "gaussCannon",
        path: "gauss_cannon/charged_sniper_reduced_max_charge",
        parent: ParentDef::Of("precisionBolt"),
    },
    ModDef {
        name: "precisionBolt_lightWeight",
        title: "Light Weight",
        weapon: "gaussCannon",
        path: "gauss_cannon/charged_sniper_no_movement_penalty",
        parent: ParentDef::Of("precisionBolt"),
    },
    ModDef {
        name: "precisionBolt_volatileDischarge_mastery",
        title: "Volatile Discharge",
        weapon: "gaussCannon",
        path: "gauss_cannon/charged_sniper_mastery",
        parent: ParentDef::Of("precisionBolt"),
    },
    ModDef {
        name: "siegeMode",
        title: "Siege Mode",
        weapon: "gaussCannon",
        path: "gauss_cannon/siege_mode",
        parent: ParentDef::Base,
    },
    ModDef {
        name: "siegeMode_outerBeam",
        title: "Outer Beam",
        weapon: "gaussCannon",
        path: "gauss_cannon/siege_mode_outer_beam",
        parent: ParentDef::Of("siegeMode"),
    },
    ModDef {
        name: "siegeMode_reducedCharge",
        title: "Reduced Charge",
        weapon: "gaussCannon",
        path: "gauss_cannon/siege_mode_reduced_charge_time",
        parent: ParentDef::Of("siegeMode"),
    },
    ModDef {
        name: "siegeMode_mobileSiege_mastery",
        title: "Mobile Siege",
        weapon: "gaussCannon",
        path: "gauss_cannon/siege_mode_mastery",
        parent: ParentDef::Of("siegeMode"),
    },
    // Chaingun.
    ModDef {
        name: "gatlingRotator",
        title: "Gatling Rotator",
        weapon: "chaingun",
        path: "chaingun/gatling",
        parent: ParentDef::Base,
    },
    ModDef {
        name: "gatlingRotator_improvedTorque",
        title: "Improved Torque",
        weapon: "chaingun",
        path: "chaingun/gatling_faster_spinup",
        parent: ParentDef::Of("gatlingRotator"),
    },
    ModDef {
        name: "gatlingRotator_uraniumCoating",
        title: "Uranium Coating",
        weapon: "chaingun",
        path: "chaingun/gatling_penetration",
        parent: ParentDef::Of("gatlingRotator"),
    },
    ModDef {
        name: "gatlingRotator_incendiaryRounds_mastery",
        title: "Incendiary Rounds",
        weapon: "chaingun",
        path: "chaingun/gatling_mastery",
        parent: ParentDef::Of("gatlingRotator"),
    },
    ModDef {
        name: "mobileTurret",
        title: "Mobile Turret",
        weapon: "chaingun",
        path: "chaingun/turret",
        parent: ParentDef::Base,
    },
    ModDef {
        name: "mobileTurret_rapidDeployment",
        title: "Rapid Deployment",
        weapon: "chaingun",
        path: "chaingun/turret_faster_equip",
        parent: ParentDef::Of("mobileTurret"),
    },
    ModDef {
        name: "mobileTurret_uraniumCoating",
        title: "Uranium Coating",
        weapon: "chaingun",
        path: "chaingun/turret_penetration",
        parent: ParentDef::Of("mobileTurret"),
    },
    ModDef {
        name: "mobileTurret_ultimateCooling_mastery",
        title: "Ultimate Cooling",
        weapon: "chaingun",
        path: "chaingun/turret_mastery",
        parent: ParentDef::Of("mobileTurret"),
    },
];

struct AmmoDef {
    name: &'static str,
    count: i32,
}

const AMMO_DEFS: &[AmmoDef] = &[
    AmmoDef { name: "fuel", count: 99 },
    AmmoDef { name: "shells", count: 99 },
    AmmoDef { name: "bullets", count: 999 },
    AmmoDef { name: "cells", count: 999 },
    AmmoDef { name: "rockets", count: 99 },
    AmmoDef { name: "bfg", count: 99 },
];

/// Argent capacities start selected at level zero; the loadout always
/// states the suit's tier explicitly.
pub fn argent_module() -> Module {
    let catalog = ARGENT_DEFS
        .iter()
        .map(|d| {
            Entry::Argent(ArgentPerk {
                name: d.name.to_string(),
                path: quoted(SUIT_PERK_PREFIX, d.path),
                count: 0,
            })
        })
        .collect();
    let mut module = Module::new(ModuleKind::Argent, catalog);
    module.add_all_to_available();
    module
}

pub fn praetor_module() -> Module {
    let catalog = PRAETOR_DEFS
        .iter()
        .map(|d| {
            Entry::Praetor(PraetorPerk {
                name: d.name.to_string(),
                path: quoted(SUIT_PERK_PREFIX, d.path),
                title: d.title.to_string(),
                category: d.category.to_string(),
                unlockable: d.unlockable.map(|u| quoted("", u)),
            })
        })
        .collect();
    Module::new(ModuleKind::Praetor, catalog)
}

pub fn rune_module() -> Module {
    let catalog = RUNE_DEFS
        .iter()
        .map(|d| {
            Entry::Rune(RunePerk {
                name: d.name.to_string(),
                path: quoted(SUIT_PERK_PREFIX, d.path),
                title: d.title.to_string(),
                apply_upgrades: false,
                permanent_equip: false,
            })
        })
        .collect();
    Module::new(ModuleKind::Runes, catalog)
}

pub fn equipment_module() -> Module {
    let catalog = EQUIPMENT_DEFS
        .iter()
        .map(|d| {
            Entry::Equipment(EquipmentItem {
                name: d.name.to_string(),
                path: quoted("", d.path),
                title: d.title.to_string(),
                equip: d.equip,
            })
        })
        .collect();
    Module::new(ModuleKind::Equipment, catalog)
}

pub fn weapon_module() -> Module {
    let catalog = WEAPON_DEFS
        .iter()
        .map(|d| {
            Entry::Weapon(WeaponItem {
                name: d.name.to_string(),
                path: quoted(WEAPON_PREFIX, d.path),
                title: d.title.to_string(),
                ammo_type: d.ammo.map(str::to_string),
                equip: d.equip,
                equip_reserve: d.equip_reserve,
            })
        })
        .collect();
    let mut module = Module::new(ModuleKind::Weapons, catalog);
    for name in DEFAULT_WEAPONS {
        module.add_to_available(name);
    }
    module
}

pub fn weapon_mod_module() -> Module {
    let catalog = WEAPON_MOD_DEFS
        .iter()
        .map(|d| {
            Entry::WeaponMod(WeaponModPerk {
                name: d.name.to_string(),
                path: quoted(WEAPON_PERK_PREFIX, d.path),
                title: d.title.to_string(),
                weapon: d.weapon.to_string(),
                parent: match d.parent {
                    ParentDef::Base => ModParent::BaseMod,
                    ParentDef::Standalone => ModParent::Standalone,
                    ParentDef::Of(base) => ModParent::Mod(base.to_string()),
                },
            })
        })
        .collect();
    Module::new(ModuleKind::WeaponMods, catalog)
}

pub fn ammo_module() -> Module {
    let catalog = AMMO_DEFS
        .iter()
        .map(|d| {
            Entry::Ammo(AmmoItem {
                name: d.name.to_string(),
                path: quoted(AMMO_PREFIX, d.name),
                count: d.count,
            })
        })
        .collect();
    Module::new(ModuleKind::Ammo, catalog)
}
