//! Effects and their resolution.
//!
//! - `Effect`: the closed set of rule consequences printed on material
//! - `PendingAction`: decisions queued by deferred effects
//! - `resolver`: the work-list fold that applies effects to a state
//!
//! Passive effects are never stored on their own. A player's effect set is
//! derived from what it owns, and the resolver only ever sees the immediate
//! effects of the entity just constructed or chosen.

mod effect;
mod pending;
pub(crate) mod resolver;

pub use effect::{
    CoinRate, ConstructionTrigger, Deferred, DiscountScope, Effect, GuildCriterion, VictoryPoints,
};
pub use pending::PendingAction;
