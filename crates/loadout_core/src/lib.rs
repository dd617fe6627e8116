pub mod catalog;
pub mod elements;
pub mod error;
pub mod inventory;
pub mod levels;
pub mod modules;

pub use elements::{
    AmmoItem, ArgentPerk, DeclValue, Entry, EquipmentItem, ModParent, PraetorPerk, RenderedEntry,
    RunePerk, WeaponItem, WeaponModPerk,
};
pub use error::{CoreError, CoreErrorCode};
pub use inventory::{ARGENT_MAX_LEVEL, Inventory};
pub use levels::LevelMap;
pub use modules::{Module, ModuleKind};
