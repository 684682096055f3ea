//! Construction prices.
//!
//! ## Algorithm
//!
//! 1. A building whose chain link is owned is free.
//! 2. Each resource unit not covered by the player's own production must be
//!    bought: 1 coin with a fixed trading cost for that resource, otherwise
//!    2 coins plus the opponent's production of it.
//! 3. Each production choice covers the most expensive missing unit of its
//!    category.
//! 4. Resource discounts (Architecture, Masonry) cover the most expensive
//!    remaining units.
//! 5. The price is the printed coins plus the remaining units.
//!
//! The trading part (step 5 without printed coins) is what the opponent
//! collects with Economy.

use smallvec::SmallVec;

use crate::cards::{Construction, Resource};
use crate::core::{GameState, Player, RulesError, RulesResult, Seat};
use crate::effects::{DiscountScope, Effect};

/// Coins owed for a construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Price {
    /// Printed coin cost.
    pub coins: u32,
    /// Coins paid to the bank for missing resources.
    pub trading: u32,
}

impl Price {
    pub const FREE: Price = Price { coins: 0, trading: 0 };

    #[must_use]
    pub fn total(self) -> u32 {
        self.coins + self.trading
    }
}

/// A missing resource unit and what buying it costs.
type UnitPrices = SmallVec<[(Resource, u32); 8]>;

impl GameState {
    /// Coins the current player would pay for `construction`.
    pub fn coins_to_pay(&self, construction: impl Into<Construction>) -> RulesResult<u32> {
        let seat = self.current_player()?;
        Ok(self.price(seat, construction.into()).total())
    }

    /// Price of `construction` for `seat`.
    #[must_use]
    pub fn price(&self, seat: Seat, construction: Construction) -> Price {
        let player = &self.players[seat];
        if let Construction::Building(building) = construction {
            if player.has_free_link_to(building) {
                return Price::FREE;
            }
        }

        let opponent = &self.players[seat.opponent()];
        let cost = construction.cost();
        let counts = cost.counts();

        let mut units: UnitPrices = SmallVec::new();
        for resource in Resource::ALL {
            let missing = counts[resource.index()].saturating_sub(player.production_of(resource));
            let unit = trading_cost(player, opponent, resource);
            units.extend((0..missing).map(|_| (resource, unit)));
        }
        units.sort_by(|a, b| b.1.cmp(&a.1));

        for effect in player.effects() {
            if let Effect::ProductionChoice(category) = effect {
                if let Some(index) = units.iter().position(|(r, _)| r.category() == *category) {
                    units.remove(index);
                }
            }
        }

        let discount: usize = player
            .effects()
            .map(|effect| match effect {
                Effect::ResourceDiscount(scope, n) if discount_applies(*scope, construction) => usize::from(*n),
                _ => 0,
            })
            .sum();
        let remaining = units.iter().skip(discount);

        Price {
            coins: u32::from(cost.coins),
            trading: remaining.map(|(_, unit)| unit).sum(),
        }
    }

    /// Fail unless `seat` can pay `price`.
    pub(crate) fn ensure_affordable(&self, seat: Seat, price: Price) -> RulesResult<()> {
        let available = self.players[seat].coins;
        let needed = price.total();
        if needed > available {
            return Err(RulesError::NotEnoughCoins {
                seat,
                needed,
                available,
            });
        }
        Ok(())
    }

    /// Pay `price`, crediting the trading part to an opponent who owns
    /// Economy.
    pub(crate) fn pay(&mut self, seat: Seat, price: Price) {
        self.players[seat].lose_coins(price.total());
        let opponent = &mut self.players[seat.opponent()];
        if opponent.gains_trading_cost() {
            opponent.gain_coins(price.trading);
        }
    }
}

fn trading_cost(player: &Player, opponent: &Player, resource: Resource) -> u32 {
    if player.has_fixed_trading_cost(resource) {
        1
    } else {
        2 + u32::from(opponent.production_of(resource))
    }
}

fn discount_applies(scope: DiscountScope, construction: Construction) -> bool {
    match (scope, construction) {
        (DiscountScope::Wonders, Construction::Wonder(_)) => true,
        (DiscountScope::Buildings(kind), Construction::Building(building)) => building.kind() == kind,
        _ => false,
    }
}
