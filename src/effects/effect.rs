//! Effect definitions.
//!
//! Effects are the rule consequences printed on buildings, wonders and
//! progress tokens. They are a closed sum type so every variant is handled
//! exhaustively by the resolver, the trading-cost computation and scoring.
//!
//! Effects fall in four groups:
//!
//! - **Immediate**: resolved once, when the owning entity is constructed or
//!   chosen (`Coins`, `CoinsFor`, `OpponentLosesCoins`, `Shields`, `Science`)
//! - **Passive**: never resolved, read from the owner's effect set whenever
//!   relevant (`Production`, `FixedTradingCost`, `GainTradingCost`,
//!   `ResourceDiscount`, `ConstructionTriggered`)
//! - **Scoring**: `VictoryPoints`, evaluated against the full state at the end
//! - **Deferred**: `Deferred` queues a `PendingAction` instead of resolving

use crate::cards::{BuildingType, Resource, ResourceCategory, ScientificSymbol};

/// A rule consequence attached to a building, a wonder or a progress token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    // === Passive ===

    /// Produces `n` units of a resource every turn.
    Production(Resource, u8),

    /// Produces one resource of the category, chosen at construction time.
    ProductionChoice(ResourceCategory),

    /// Trading for this resource always costs 1 coin.
    FixedTradingCost(Resource),

    /// Coins the opponent spends on trading are credited to the owner.
    GainTradingCost,

    /// Constructions in scope cost `n` fewer resources of the owner's choice.
    ResourceDiscount(DiscountScope, u8),

    /// Applies `then` whenever the owner constructs something matching `on`.
    ConstructionTriggered {
        on: ConstructionTrigger,
        then: &'static Effect,
    },

    // === Immediate ===

    /// Gain coins.
    Coins(u8),

    /// Gain coins computed from the state at construction time.
    CoinsFor(CoinRate),

    /// The opponent loses coins (never below zero).
    OpponentLosesCoins(u8),

    /// Moves the conflict pawn toward the opponent.
    Shields(u8),

    /// A scientific symbol; owning two of the same grants a progress token.
    Science(ScientificSymbol),

    // === Scoring ===

    /// Victory points counted at the end of the game.
    VictoryPoints(VictoryPoints),

    // === Deferred ===

    /// Queues a pending action for external resolution.
    Deferred(Deferred),
}

/// Which constructions a resource discount applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiscountScope {
    Wonders,
    Buildings(BuildingType),
}

/// Condition for a construction-triggered effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConstructionTrigger {
    /// A building of the given type.
    Building(BuildingType),
    /// Any wonder.
    Wonder,
    /// A building constructed for free through its chain link.
    FreeLink,
}

/// Coin gain that depends on the state at construction time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoinRate {
    /// Coins per building of a type in the owner's city.
    PerBuilding(BuildingType, u8),
    /// Coins per wonder the owner has built.
    PerWonderBuilt(u8),
    /// One coin per matching building in the city that has the most.
    Guild(GuildCriterion),
}

/// What a guild counts, always in the city that has the most of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuildCriterion {
    Buildings(&'static [BuildingType]),
    Wonders,
    Coins,
}

/// Victory points formula.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VictoryPoints {
    Fixed(u8),
    PerProgressToken(u8),
    Guild(GuildCriterion),
}

/// Effects that queue a pending action rather than resolving immediately.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Deferred {
    /// The current player takes another turn.
    PlayAgain,
    /// Destroy an opponent building of the given type.
    DestroyOpponentBuilding(BuildingType),
    /// Choose one of three progress tokens drawn from those out of the game.
    ChooseBoxedProgressToken,
    /// Construct a building from the discard pile for free.
    TakeDiscardedBuilding,
}
