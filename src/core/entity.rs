//! Unit and side identification.
//!
//! Units on the board are identified by a `UnitId` handed out by the host
//! match engine. The engine never allocates ids itself; it only passes them
//! back through the capability API.
//!
//! ## Usage
//!
//! ```
//! use battler_rules::core::{Lane, Side, UnitId};
//!
//! let unit = UnitId::new(7);
//! assert_eq!(unit.raw(), 7);
//!
//! assert_eq!(Side::Player.opponent(), Side::Enemy);
//! assert!(Lane::Both.accepts(Lane::Front));
//! assert!(!Lane::Back.accepts(Lane::Front));
//! ```

use serde::{Deserialize, Serialize};

/// Identifier for a unit on the board.
///
/// Ids are opaque to the rules engine and only meaningful to the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UnitId(pub u32);

impl UnitId {
    /// Create a new unit ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for UnitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unit({})", self.0)
    }
}

/// One of the two sides of a match.
///
/// Each side owns a leader, a currency balance (shares) and a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    /// Both sides, in seat order.
    pub const ALL: [Side; 2] = [Side::Player, Side::Enemy];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Enemy,
            Side::Enemy => Side::Player,
        }
    }

    /// Seat index (0 for player, 1 for enemy).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::Player => 0,
            Side::Enemy => 1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => write!(f, "player"),
            Side::Enemy => write!(f, "enemy"),
        }
    }
}

/// Board lane a unit may be deployed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lane {
    Front,
    Back,
    /// Flexible units that may stand in either lane.
    Both,
}

impl Lane {
    /// Whether a unit declared for this lane can stand in `slot`.
    #[must_use]
    pub fn accepts(self, slot: Lane) -> bool {
        self == Lane::Both || slot == Lane::Both || self == slot
    }

    /// DSL spelling of the lane.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Lane::Front => "front",
            Lane::Back => "back",
            Lane::Both => "both",
        }
    }
}

impl std::fmt::Display for Lane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
