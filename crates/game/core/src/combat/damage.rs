//! Damage calculation and application.

use crate::env::CombatModel;
use crate::fighter::Stats;

/// Raw damage before variance: strength × 2.
pub const fn base_damage(attacker: &Stats) -> u32 {
    attacker.strength() as u32 * 2
}

/// Scales base damage by the sampled variance and the attacker's efficiency.
///
/// # Formula
///
/// ```text
/// modified = round(base_damage × variance × efficiency)
/// ```
pub fn modified_damage(attacker: &Stats, variance: f64, efficiency: f64) -> u32 {
    let raw = base_damage(attacker) as f64 * variance * efficiency;
    raw.round().max(0.0) as u32
}

/// Applies the critical multiplier, rounding to the nearest integer.
pub fn critical_damage(damage: u32, model: &CombatModel) -> u32 {
    (damage as f64 * model.crit_multiplier).round().max(0.0) as u32
}

/// Defense = round(defender.stamina × defense_per_stamina).
pub fn calculate_defense(defender: &Stats, model: &CombatModel) -> u32 {
    (defender.stamina() as f64 * model.defense_per_stamina)
        .round()
        .max(0.0) as u32
}

/// Final damage after defense, never below the configured floor.
///
/// # Formula
///
/// ```text
/// final = max(min_damage, modified - defense)
/// ```
pub fn mitigated_damage(modified: u32, defense: u32, model: &CombatModel) -> u32 {
    modified.saturating_sub(defense).max(model.min_damage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_is_double_strength() {
        let stats = Stats::new(8, 5, 6).unwrap();
        assert_eq!(base_damage(&stats), 16);
    }

    #[test]
    fn modified_rounds_to_nearest() {
        let stats = Stats::new(5, 5, 5).unwrap();
        // 10 × 1.04 × 1.0 = 10.4
        assert_eq!(modified_damage(&stats, 1.04, 1.0), 10);
        // 10 × 1.06 × 1.0 = 10.6
        assert_eq!(modified_damage(&stats, 1.06, 1.0), 11);
    }

    #[test]
    fn defense_rounds_half_away_from_zero() {
        let model = CombatModel::default();
        let stats = Stats::new(5, 5, 7).unwrap();
        assert_eq!(calculate_defense(&stats, &model), 4);
    }

    #[test]
    fn floor_applies_when_defense_exceeds_damage() {
        let model = CombatModel::default();
        assert_eq!(mitigated_damage(3, 9, &model), model.min_damage);
        assert_eq!(mitigated_damage(12, 4, &model), 8);
    }

    #[test]
    fn crit_multiplies_and_rounds() {
        let model = CombatModel::default();
        assert_eq!(critical_damage(15, &model), 23);
    }
}
