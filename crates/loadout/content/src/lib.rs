//! Player inventory sources and data-file loaders.
//!
//! This crate sits between wherever armor comes from and the optimizer:
//! - Inventory sources (`ArmorSource`) that hand out a character's pool
//! - Exotic locking, a pre-filter that pins one exotic into the loadout
//! - Armor inventories (data-driven via RON)
//! - Objectives and optimizer configuration (data-driven via TOML)
//!
//! The optimizer itself never touches files; everything here resolves to
//! plain `loadout-core` values.

pub mod class;
pub mod lock;
pub mod source;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use class::CharacterClass;
pub use lock::{ExoticLock, LockError};
pub use source::{ArmorSource, StaticArmorSource};

#[cfg(feature = "loaders")]
pub use loaders::{
    ArmorLoader, ArmorRecord, ConfigLoader, ContentFactory, Inventory, ObjectivesLoader,
};
