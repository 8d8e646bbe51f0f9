//! Trigger system for event-driven card abilities.
//!
//! Cards react to five events. Each trigger names its event, an ordered
//! action list and optional conditions; the runtime executes them when the
//! match engine reports the event.
//!
//! ## Key Components
//!
//! - [`TriggerEvent`]: the closed set of firing moments
//! - [`CombatOutcome`]: what happened in one combat exchange
//! - [`TriggerCondition`]: `requires` gates, evaluated by [`ConditionEvaluator`]
//! - [`Trigger`]: a complete trigger definition, as authored
//! - [`TriggerRuntime`]: entry points the host calls
//!
//! ## Example Usage
//!
//! ```
//! use battler_rules::cards::{Card, Catalog};
//! use battler_rules::core::{Lane, Side};
//! use battler_rules::effects::Action;
//! use battler_rules::sandbox::{SandboxConfig, SandboxMatch};
//! use battler_rules::triggers::{Trigger, TriggerContext, TriggerEvent, TriggerRuntime};
//!
//! let card = Card::unit("broker", "Broker", Lane::Back, 1, 2)
//!     .with_trigger(Trigger::new(TriggerEvent::OnSummon).with_action(Action::GainShares { amount: 2 }));
//! let catalog = Catalog::new(vec![card]).unwrap();
//! let runtime = TriggerRuntime::new(&catalog);
//!
//! let mut game = SandboxMatch::new(SandboxConfig::default());
//! let broker = game.summon(&catalog, "broker", Side::Player).unwrap();
//!
//! let mut ctx = TriggerContext::new(Side::Player, broker, 1, &mut game);
//! assert!(runtime.on_summon(&mut ctx));
//! assert_eq!(game.shares(Side::Player), 2);
//! assert_eq!(game.log_lines(), ["Broker earns 2 shares."]);
//! ```

mod condition;
mod event;
mod runtime;
mod trigger;

pub use condition::{ConditionContext, ConditionEvaluator, TriggerCondition};
pub use event::{CombatOutcome, TriggerEvent};
pub use runtime::{CombatContext, TriggerContext, TriggerRuntime};
pub use trigger::Trigger;
