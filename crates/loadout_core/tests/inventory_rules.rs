use loadout_core::{Entry, Inventory, ModuleKind};

#[test]
fn everything_selected_matches_known_totals() {
    let mut inv = Inventory::new();
    inv.add_all_praetor();
    inv.add_all_equipment();
    inv.add_all_weapons();
    inv.set_all_base_mods(true);
    inv.set_all_mod_upgrades(true);
    inv.add_all_runes();

    // All weapons pull in all six ammo types.
    assert_eq!(inv.module(ModuleKind::Ammo).available().len(), 6);
    // base + 3 argent + 15 praetor + 4 equipment + 11 weapons
    // + 61 mods + 6 ammo + 12 runes
    assert_eq!(inv.total_items(), 113);
    assert_eq!(inv.rendered_entries().len(), 112);
}

#[test]
fn shared_ammo_pool_tracks_the_surviving_weapon() {
    let mut inv = Inventory::new();
    inv.set_weapon_available("heavyAssaultRifle", true);
    inv.set_weapon_available("chaingun", true);
    assert_eq!(inv.module(ModuleKind::Ammo).available(), ["bullets"]);

    inv.set_weapon_available("heavyAssaultRifle", false);
    assert_eq!(inv.module(ModuleKind::Ammo).available(), ["bullets"]);

    inv.set_weapon_available("chaingun", false);
    assert!(inv.module(ModuleKind::Ammo).available().is_empty());
}

#[test]
fn ammo_counts_flow_through_to_rendering() {
    let mut inv = Inventory::new();
    inv.set_weapon_available("rocketLauncher", true);
    inv.set_ammo_count("rockets", 25);

    let rendered = inv.rendered_entries();
    let rockets = rendered
        .iter()
        .find(|body| body[0].1.to_string().contains("sharedammopool/rockets"))
        .expect("rockets entry rendered");
    assert_eq!(rockets[1].0, "count");
    assert_eq!(rockets[1].1.to_string(), "25");
    assert_eq!(rockets[2].0, "applyAfterLoadout");
}

#[test]
fn unknown_names_never_disturb_state() {
    let mut inv = Inventory::new();
    let before = inv.total_items();
    inv.set_weapon_available("plasmaCaster", true);
    inv.set_praetor_available("fists", true);
    inv.set_rune_permanent("doubleJumpThrustBoots", true);
    inv.set_ammo_count("plasma", 500);
    inv.set_weapon_mod_available("pistol", "siegeMode", true);
    assert_eq!(inv.total_items(), before);
}

#[test]
fn rune_upgrade_state_is_independent_of_selection() {
    let mut inv = Inventory::new();
    inv.set_all_runes_upgraded(true);
    assert!(inv.module(ModuleKind::Runes).available().is_empty());

    inv.set_rune_available("richGetRicher", true);
    let Some(Entry::Rune(rune)) = inv.module(ModuleKind::Runes).entry("richGetRicher") else {
        panic!("richGetRicher missing");
    };
    assert!(rune.apply_upgrades);
    assert!(!rune.permanent_equip);
}
