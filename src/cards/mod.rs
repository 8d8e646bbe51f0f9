//! Card system: definitions, passives, and the catalog.
//!
//! ## Key Types
//!
//! - `Card`: Static card data (unit or non-unit) with specials and triggers
//! - `Special`: Static passives (taunt, shield on summon, resistance)
//! - `Catalog`: Validated, immutable lookup by card id

pub mod definition;
pub mod registry;
pub mod special;

pub use definition::{Card, CardKind, UnitStats};
pub use registry::Catalog;
pub use special::{ResistanceProfile, Special};
