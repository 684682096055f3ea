//! Progress tokens and scientific symbols.

use serde::{Deserialize, Serialize};

use super::BuildingType;
use crate::effects::{ConstructionTrigger, Deferred, DiscountScope, Effect, VictoryPoints};

/// Symbols printed on green buildings (and on the Law token).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ScientificSymbol {
    Globe,
    Wheel,
    Sundial,
    Mortar,
    Plumb,
    Quill,
    Law,
}

/// The ten progress tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ProgressToken {
    Agriculture,
    Architecture,
    Economy,
    Law,
    Masonry,
    Mathematics,
    Philosophy,
    Strategy,
    Theology,
    Urbanism,
}

impl ProgressToken {
    pub const ALL: [ProgressToken; 10] = [
        ProgressToken::Agriculture,
        ProgressToken::Architecture,
        ProgressToken::Economy,
        ProgressToken::Law,
        ProgressToken::Masonry,
        ProgressToken::Mathematics,
        ProgressToken::Philosophy,
        ProgressToken::Strategy,
        ProgressToken::Theology,
        ProgressToken::Urbanism,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ProgressToken::Agriculture => "Agriculture",
            ProgressToken::Architecture => "Architecture",
            ProgressToken::Economy => "Economy",
            ProgressToken::Law => "Law",
            ProgressToken::Masonry => "Masonry",
            ProgressToken::Mathematics => "Mathematics",
            ProgressToken::Philosophy => "Philosophy",
            ProgressToken::Strategy => "Strategy",
            ProgressToken::Theology => "Theology",
            ProgressToken::Urbanism => "Urbanism",
        }
    }

    #[must_use]
    pub fn effects(self) -> &'static [Effect] {
        match self {
            ProgressToken::Agriculture => &[
                Effect::Coins(6),
                Effect::VictoryPoints(VictoryPoints::Fixed(4)),
            ],
            ProgressToken::Architecture => &[Effect::ResourceDiscount(DiscountScope::Wonders, 2)],
            ProgressToken::Economy => &[Effect::GainTradingCost],
            ProgressToken::Law => &[Effect::Science(ScientificSymbol::Law)],
            ProgressToken::Masonry => &[Effect::ResourceDiscount(
                DiscountScope::Buildings(BuildingType::Civilian),
                2,
            )],
            ProgressToken::Mathematics => &[Effect::VictoryPoints(VictoryPoints::PerProgressToken(3))],
            ProgressToken::Philosophy => &[Effect::VictoryPoints(VictoryPoints::Fixed(7))],
            ProgressToken::Strategy => &[Effect::ConstructionTriggered {
                on: ConstructionTrigger::Building(BuildingType::Military),
                then: &Effect::Shields(1),
            }],
            ProgressToken::Theology => &[Effect::ConstructionTriggered {
                on: ConstructionTrigger::Wonder,
                then: &Effect::Deferred(Deferred::PlayAgain),
            }],
            ProgressToken::Urbanism => &[
                Effect::Coins(6),
                Effect::ConstructionTriggered {
                    on: ConstructionTrigger::FreeLink,
                    then: &Effect::Coins(4),
                },
            ],
        }
    }
}

impl std::fmt::Display for ProgressToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_token_has_effects() {
        assert!(ProgressToken::ALL.iter().all(|t| !t.effects().is_empty()));
    }

    #[test]
    fn test_law_is_a_scientific_symbol() {
        assert_eq!(
            ProgressToken::Law.effects(),
            &[Effect::Science(ScientificSymbol::Law)]
        );
    }

    #[test]
    fn test_token_display() {
        assert_eq!(ProgressToken::Theology.to_string(), "Theology");
        assert_eq!(format!("{}", ProgressToken::Law), "Law");
    }
}
