//! Post-fight injury assignment.

use crate::condition::apply_injury_penalty;
use crate::env::{ConditionModel, InjuryModel, RngSource};
use crate::fighter::{Fighter, Injury, InjuryKind};

/// Share of the pre-fight maximum lost during the fight, in `[0, 1]`.
pub fn damage_fraction(pre_fight_max_health: u32, current_health: u32) -> f64 {
    if pre_fight_max_health == 0 {
        return 0.0;
    }
    let lost = pre_fight_max_health.saturating_sub(current_health);
    lost as f64 / pre_fight_max_health as f64
}

/// Severity and recovery period for a damage fraction.
pub fn classify(fraction: f64, model: &InjuryModel) -> Injury {
    if fraction >= model.fracture_threshold {
        Injury::new(InjuryKind::Fracture, model.fracture_days)
    } else if fraction >= model.sprain_threshold {
        Injury::new(InjuryKind::Sprain, model.sprain_days)
    } else {
        Injury::new(InjuryKind::Bruise, model.bruise_days)
    }
}

/// Rolls for an injury after a fight.
///
/// Dead fighters never acquire injuries and consume no draw. Everyone else
/// consumes exactly one.
pub fn roll_injury(
    fighter: &Fighter,
    pre_fight_max_health: u32,
    won: bool,
    rng: &mut impl RngSource,
    model: &InjuryModel,
) -> Option<Injury> {
    if !fighter.is_alive() {
        return None;
    }
    let chance = if won {
        model.winner_chance
    } else {
        model.loser_chance
    };
    if !rng.chance(chance) {
        return None;
    }
    let fraction = damage_fraction(pre_fight_max_health, fighter.health());
    Some(classify(fraction, model))
}

/// Attaches an injury, clears training, and applies the morale penalty once.
///
/// The penalty applies only when the fighter was not already injured.
pub fn apply_injury(fighter: &Fighter, injury: Injury, condition: &ConditionModel) -> Fighter {
    let newly_injured = !fighter.is_injured();
    let injured = fighter.with_injury(Some(injury)).with_training(None);
    if newly_injured {
        apply_injury_penalty(&injured, condition)
    } else {
        injured
    }
}
