//! Post-fight processing shared by standalone fights and tournament matches.

use crate::condition::apply_fight_outcome;
use crate::env::{ConditionModel, InjuryModel, RngSource};
use crate::fighter::{Fighter, InjuryKind};
use crate::injury::{apply_injury, roll_injury};

use super::fight::FightResult;

/// Fighters after injuries and condition effects have been applied.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aftermath {
    pub winner: Fighter,
    pub loser: Fighter,
    pub winner_injury: Option<InjuryKind>,
    pub loser_injury: Option<InjuryKind>,
}

/// Applies injury rolls (winner first, then loser) and the fight-outcome
/// morale/fatigue shift.
///
/// The fight never changes max health, so each snapshot's own max is the
/// pre-fight max used for the damage fraction.
pub fn settle_fight(
    result: &FightResult,
    rng: &mut impl RngSource,
    injury: &InjuryModel,
    condition: &ConditionModel,
) -> Aftermath {
    let winner_roll = roll_injury(
        &result.winner,
        result.winner.max_health(),
        true,
        rng,
        injury,
    );
    let loser_roll = roll_injury(
        &result.loser,
        result.loser.max_health(),
        false,
        rng,
        injury,
    );

    let (winner, loser) = apply_fight_outcome(&result.winner, &result.loser, condition);
    let winner = match winner_roll {
        Some(found) => apply_injury(&winner, found, condition),
        None => winner,
    };
    let loser = match loser_roll {
        Some(found) => apply_injury(&loser, found, condition),
        None => loser,
    };

    Aftermath {
        winner,
        loser,
        winner_injury: winner_roll.map(|i| i.kind()),
        loser_injury: loser_roll.map(|i| i.kind()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::simulate_fight;
    use crate::env::{CombatModel, PcgRng};
    use crate::fighter::{ContractTerms, FighterId, Stats, TrainingFocus};

    fn fighter(id: u32) -> Fighter {
        Fighter::new(
            FighterId(id),
            format!("F{id}"),
            Stats::new(6, 6, 6).unwrap(),
            ContractTerms::default(),
        )
    }

    #[test]
    fn certain_winner_injury_clears_training() {
        let injury = InjuryModel {
            winner_chance: 1.0,
            ..InjuryModel::default()
        };
        let condition = ConditionModel::default();
        let mut rng = PcgRng::new(4);
        let a = fighter(1).with_training(Some(TrainingFocus::Agility));
        let b = fighter(2).with_training(Some(TrainingFocus::Agility));
        let result =
            simulate_fight(&a, &b, &mut rng, &CombatModel::default(), &condition).unwrap();

        let after = settle_fight(&result, &mut rng, &injury, &condition);

        assert!(after.winner_injury.is_some());
        assert_eq!(after.winner.training(), None);
        // +10 win, -10 injury penalty
        assert_eq!(after.winner.morale(), 50);
        assert_eq!(after.loser_injury, None);
        assert_eq!(after.loser.morale(), 35);
        assert_eq!(after.winner.fatigue(), 20);
    }
}
