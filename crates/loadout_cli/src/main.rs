use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use loadout_core::{ARGENT_MAX_LEVEL, Entry, Inventory, LevelMap, ModuleKind};
use loadout_render::{render_loadout_decl, render_summary_json, write_mod_tree};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    /// Write the generated mod file tree under this directory.
    #[arg(long, value_name = "DIR")]
    output: Option<PathBuf>,
    /// Print the main loadout decl to stdout.
    #[arg(long)]
    print: bool,
    /// Print a JSON summary of the current selections.
    #[arg(long)]
    json: bool,
    /// List every catalog entry with its selection state.
    #[arg(long)]
    list: bool,
    /// JSON file of level-to-parent overrides, replacing the built-in map.
    #[arg(long = "level-map", value_name = "FILE")]
    level_map: Option<PathBuf>,
    /// Health capacity tier, 0 to 4.
    #[arg(long = "argent-health", value_name = "LEVEL")]
    argent_health: Option<i32>,
    /// Armor capacity tier, 0 to 4.
    #[arg(long = "argent-armor", value_name = "LEVEL")]
    argent_armor: Option<i32>,
    /// Ammo capacity tier, 0 to 4.
    #[arg(long = "argent-ammo", value_name = "LEVEL")]
    argent_ammo: Option<i32>,
    /// Add a praetor suit perk by name. Repeatable.
    #[arg(long = "praetor", value_name = "NAME")]
    praetor: Vec<String>,
    #[arg(long = "all-praetor")]
    all_praetor: bool,
    /// Add an equipment item by name. Repeatable.
    #[arg(long = "equipment", value_name = "NAME")]
    equipment: Vec<String>,
    #[arg(long = "all-equipment")]
    all_equipment: bool,
    /// Add a weapon by name; its ammo type comes along. Repeatable.
    #[arg(long = "weapon", value_name = "NAME")]
    weapon: Vec<String>,
    #[arg(long = "all-weapons")]
    all_weapons: bool,
    /// Add a weapon mod as WEAPON:MOD. Repeatable.
    #[arg(long = "weapon-mod", value_name = "WEAPON:MOD", value_parser = parse_weapon_mod)]
    weapon_mod: Vec<(String, String)>,
    #[arg(long = "all-base-mods")]
    all_base_mods: bool,
    #[arg(long = "all-mod-upgrades")]
    all_mod_upgrades: bool,
    /// Override an ammo pool as NAME=COUNT. Repeatable.
    #[arg(long = "ammo", value_name = "NAME=COUNT", value_parser = parse_ammo_count)]
    ammo: Vec<(String, i32)>,
    /// Add a rune in slotted form. Repeatable.
    #[arg(long = "rune", value_name = "NAME")]
    rune: Vec<String>,
    /// Add a rune with its trial upgrade applied. Repeatable.
    #[arg(long = "upgraded-rune", value_name = "NAME")]
    upgraded_rune: Vec<String>,
    /// Add a rune equipped permanently, outside the slots. Repeatable.
    #[arg(long = "permanent-rune", value_name = "NAME")]
    permanent_rune: Vec<String>,
    #[arg(long = "all-runes")]
    all_runes: bool,
    /// Apply trial upgrades to every rune.
    #[arg(long = "upgrade-all-runes")]
    upgrade_all_runes: bool,
}

fn parse_weapon_mod(raw: &str) -> Result<(String, String), String> {
    match raw.split_once(':') {
        Some((weapon, mod_name)) if !weapon.is_empty() && !mod_name.is_empty() => {
            Ok((weapon.to_string(), mod_name.to_string()))
        }
        _ => Err(format!("expected WEAPON:MOD, got {raw:?}")),
    }
}

fn parse_ammo_count(raw: &str) -> Result<(String, i32), String> {
    let Some((name, count)) = raw.split_once('=') else {
        return Err(format!("expected NAME=COUNT, got {raw:?}"));
    };
    if name.is_empty() {
        return Err(format!("expected NAME=COUNT, got {raw:?}"));
    }
    let count: i32 = count
        .parse()
        .map_err(|_| format!("invalid count in {raw:?}"))?;
    Ok((name.to_string(), count))
}

fn apply_selections(cli: &Cli, inventory: &mut Inventory) {
    let argent_edits = [
        ("healthCapacity", cli.argent_health),
        ("armorCapacity", cli.argent_armor),
        ("ammoCapacity", cli.argent_ammo),
    ];
    for (name, requested) in argent_edits {
        let Some(requested) = requested else { continue };
        let applied = inventory.set_argent_level(name, requested);
        if applied != requested {
            eprintln!(
                "note: {name} set to {applied} (requested {requested}, tier range is 0-{ARGENT_MAX_LEVEL} with one maxed capacity)"
            );
        }
    }

    if cli.all_praetor {
        inventory.add_all_praetor();
    }
    for name in &cli.praetor {
        inventory.set_praetor_available(name, true);
    }

    if cli.all_equipment {
        inventory.add_all_equipment();
    }
    for name in &cli.equipment {
        inventory.set_equipment_available(name, true);
    }

    if cli.all_weapons {
        inventory.add_all_weapons();
    }
    for name in &cli.weapon {
        inventory.set_weapon_available(name, true);
    }

    if cli.all_base_mods {
        inventory.set_all_base_mods(true);
    }
    if cli.all_mod_upgrades {
        inventory.set_all_mod_upgrades(true);
    }
    for (weapon, mod_name) in &cli.weapon_mod {
        inventory.set_weapon_mod_available(weapon, mod_name, true);
    }

    for (name, count) in &cli.ammo {
        inventory.set_ammo_count(name, *count);
    }

    if cli.all_runes {
        inventory.add_all_runes();
    }
    if cli.upgrade_all_runes {
        inventory.set_all_runes_upgraded(true);
    }
    for name in &cli.rune {
        inventory.set_rune_available(name, true);
    }
    for name in &cli.upgraded_rune {
        inventory.set_rune_available(name, true);
        inventory.set_rune_upgraded(name, true);
    }
    for name in &cli.permanent_rune {
        inventory.set_rune_permanent(name, true);
    }
}

fn print_catalog_list(inventory: &Inventory) {
    for kind in ModuleKind::ALL {
        let module = inventory.module(kind);
        println!("{}:", kind.label());
        for entry in module.catalog() {
            let marker = if module.is_available(entry.name()) { "x" } else { " " };
            match entry.title() {
                Some(title) => println!("  [{marker}] {} ({title})", entry.name()),
                None => println!("  [{marker}] {}", entry.name()),
            }
        }
    }
}

fn main() {
    let cli = Cli::parse();
    if cli.output.is_none() && !cli.print && !cli.json && !cli.list {
        eprintln!("nothing to do: pass --output, --print, --json and/or --list");
        process::exit(2);
    }

    let levels = match &cli.level_map {
        Some(path) => {
            let text = fs::read_to_string(path).unwrap_or_else(|e| {
                eprintln!("Error reading {}: {e}", path.display());
                process::exit(1);
            });
            LevelMap::from_json_str(&text).unwrap_or_else(|e| {
                eprintln!("Error parsing {}: {e}", path.display());
                process::exit(1);
            })
        }
        None => LevelMap::builtin(),
    };

    let mut inventory = Inventory::new();
    warn_unknown_names(&cli, &inventory);
    apply_selections(&cli, &mut inventory);

    if cli.list {
        print_catalog_list(&inventory);
    }
    if cli.print {
        println!("{}", render_loadout_decl(&inventory));
    }
    if cli.json {
        println!("{}", render_summary_json(&inventory));
    }
    if let Some(root) = &cli.output {
        let written = write_mod_tree(&inventory, &levels, root).unwrap_or_else(|e| {
            eprintln!("Error generating mod tree: {e}");
            process::exit(1);
        });
        println!("wrote {written} decl files under {}", root.display());
    }
}

/// Unknown names are harmless no-ops in the core; on the command line
/// they are almost certainly typos, so flag them without failing.
fn warn_unknown_names(cli: &Cli, inventory: &Inventory) {
    let ammo_names: Vec<String> = cli.ammo.iter().map(|(n, _)| n.clone()).collect();
    let checks: [(ModuleKind, &[String]); 4] = [
        (ModuleKind::Praetor, &cli.praetor),
        (ModuleKind::Equipment, &cli.equipment),
        (ModuleKind::Weapons, &cli.weapon),
        (ModuleKind::Ammo, &ammo_names),
    ];
    for (kind, names) in checks {
        for name in names {
            if inventory.module(kind).entry(name).is_none() {
                eprintln!("note: unknown {} entry {name:?} ignored", kind.label());
            }
        }
    }
    let runes: Vec<&String> = cli
        .rune
        .iter()
        .chain(&cli.upgraded_rune)
        .chain(&cli.permanent_rune)
        .collect();
    for name in runes {
        if inventory.module(ModuleKind::Runes).entry(name).is_none() {
            eprintln!("note: unknown runes entry {name:?} ignored");
        }
    }
    for (weapon, mod_name) in &cli.weapon_mod {
        let belongs = matches!(
            inventory.module(ModuleKind::WeaponMods).entry(mod_name),
            Some(Entry::WeaponMod(perk)) if &perk.weapon == weapon
        );
        if !belongs {
            eprintln!("note: unknown weapon mod {weapon}:{mod_name} ignored");
        }
    }
}
