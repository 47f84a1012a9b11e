//! Morale and fatigue evolution.
//!
//! Pure functions over [`Fighter`] values; nothing here keeps state. Every
//! adjustment goes through the fighter's clamped meter helpers, so morale and
//! fatigue never leave `0..=100`.

use crate::env::ConditionModel;
use crate::fighter::{Fighter, METER_MAX};

/// Winner gains morale, loser loses morale, both tire.
pub fn apply_fight_outcome(
    winner: &Fighter,
    loser: &Fighter,
    model: &ConditionModel,
) -> (Fighter, Fighter) {
    let winner = winner
        .morale_adjusted(model.win_morale)
        .fatigue_adjusted(model.fight_fatigue);
    let loser = loser
        .morale_adjusted(model.loss_morale)
        .fatigue_adjusted(model.fight_fatigue);
    (winner, loser)
}

/// One day of training or rest.
///
/// A fighter trains only if a focus is set and it is able to train; otherwise
/// (idle or injured) it rests.
pub fn daily_tick(fighter: &Fighter, model: &ConditionModel) -> Fighter {
    if fighter.training().is_some() && fighter.can_train() {
        fighter
            .morale_adjusted(model.training_morale)
            .fatigue_adjusted(model.training_fatigue_gain + model.rest_recovery)
    } else {
        fighter
            .morale_adjusted(model.idle_morale)
            .fatigue_adjusted(model.rest_recovery)
    }
}

/// Flat morale loss for a newly acquired injury.
pub fn apply_injury_penalty(fighter: &Fighter, model: &ConditionModel) -> Fighter {
    fighter.morale_adjusted(-model.injury_morale_penalty)
}

/// Damage multiplier derived from morale and fatigue.
///
/// ```text
/// morale_effect  = lerp(morale_effect_low,  morale_effect_high,  morale / 100)
/// fatigue_effect = lerp(fatigue_effect_low, fatigue_effect_high, fatigue / 100)
/// multiplier     = 1.0 + morale_effect + fatigue_effect
/// ```
pub fn efficiency_multiplier(morale: u8, fatigue: u8, model: &ConditionModel) -> f64 {
    let morale_effect = lerp(model.morale_effect_low, model.morale_effect_high, morale);
    let fatigue_effect = lerp(model.fatigue_effect_low, model.fatigue_effect_high, fatigue);
    1.0 + morale_effect + fatigue_effect
}

/// Fighter-level convenience for [`efficiency_multiplier`].
pub fn fighter_efficiency(fighter: &Fighter, model: &ConditionModel) -> f64 {
    efficiency_multiplier(fighter.morale(), fighter.fatigue(), model)
}

#[inline]
fn lerp(low: f64, high: f64, value: u8) -> f64 {
    let t = value.min(METER_MAX) as f64 / METER_MAX as f64;
    low + (high - low) * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fighter::{ContractTerms, FighterId, Injury, InjuryKind, Stats, TrainingFocus};

    fn fighter() -> Fighter {
        Fighter::new(
            FighterId(1),
            "Spiculus",
            Stats::new(6, 6, 6).unwrap(),
            ContractTerms::default(),
        )
    }

    #[test]
    fn peak_condition_gives_twenty_percent() {
        let model = ConditionModel::default();
        let multiplier = efficiency_multiplier(100, 0, &model);
        assert!((multiplier - 1.20).abs() < 1e-9);
    }

    #[test]
    fn neutral_condition_is_baseline() {
        let model = ConditionModel::default();
        assert!((efficiency_multiplier(50, 0, &model) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn exhaustion_and_despair_stack() {
        let model = ConditionModel::default();
        let multiplier = efficiency_multiplier(0, 100, &model);
        assert!((multiplier - 0.50).abs() < 1e-9);
    }

    #[test]
    fn fight_outcome_moves_both_sides() {
        let model = ConditionModel::default();
        let (winner, loser) = apply_fight_outcome(&fighter(), &fighter(), &model);
        assert_eq!(winner.morale(), 60);
        assert_eq!(loser.morale(), 35);
        assert_eq!(winner.fatigue(), 20);
        assert_eq!(loser.fatigue(), 20);
    }

    #[test]
    fn training_tires_and_rest_recovers() {
        let model = ConditionModel::default();
        let trainee = fighter().with_training(Some(TrainingFocus::Strength));
        let after = daily_tick(&trainee, &model);
        assert_eq!(after.morale(), 47);
        assert_eq!(after.fatigue(), 5);

        let idle = daily_tick(&fighter().fatigue_adjusted(30), &model);
        assert_eq!(idle.morale(), 52);
        assert_eq!(idle.fatigue(), 20);
    }

    #[test]
    fn injured_trainee_rests_instead() {
        let model = ConditionModel::default();
        let hurt = fighter()
            .with_training(Some(TrainingFocus::Agility))
            .with_injury(Some(Injury::new(InjuryKind::Sprain, 3)));
        let after = daily_tick(&hurt, &model);
        assert_eq!(after.morale(), 52);
        assert_eq!(after.fatigue(), 0);
    }

    #[test]
    fn injury_penalty_clamps_at_zero() {
        let model = ConditionModel::default();
        let low = fighter().with_condition(4, 0);
        assert_eq!(apply_injury_penalty(&low, &model).morale(), 0);
    }
}
