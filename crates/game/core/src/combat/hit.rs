//! Hit and critical chance calculations.

use crate::env::CombatModel;
use crate::fighter::Stats;

/// Calculate hit chance from the agility difference.
///
/// # Formula
///
/// ```text
/// hit_chance = hit_base + (attacker.agility - defender.agility) × hit_per_agility_diff
/// clamped to [hit_min, hit_max]
/// ```
pub fn calculate_hit_chance(attacker: &Stats, defender: &Stats, model: &CombatModel) -> f64 {
    let diff = attacker.agility() as f64 - defender.agility() as f64;
    (model.hit_base + diff * model.hit_per_agility_diff).clamp(model.hit_min, model.hit_max)
}

/// Calculate critical chance from the attacker's agility.
///
/// # Formula
///
/// ```text
/// crit_chance = crit_base + attacker.agility × crit_per_agility
/// clamped to [0, crit_max]
/// ```
pub fn calculate_crit_chance(attacker: &Stats, model: &CombatModel) -> f64 {
    let chance = model.crit_base + attacker.agility() as f64 * model.crit_per_agility;
    chance.clamp(0.0, model.crit_max.max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(agility: u8) -> Stats {
        Stats::new(5, agility, 5).unwrap()
    }

    #[test]
    fn equal_agility_uses_base() {
        let model = CombatModel::default();
        let chance = calculate_hit_chance(&stats(5), &stats(5), &model);
        assert!((chance - model.hit_base).abs() < 1e-9);
    }

    #[test]
    fn agility_edge_is_clamped() {
        let model = CombatModel::default();
        assert_eq!(calculate_hit_chance(&stats(10), &stats(1), &model), model.hit_max);
        let low = CombatModel {
            hit_base: 0.2,
            ..model
        };
        assert_eq!(calculate_hit_chance(&stats(1), &stats(10), &low), low.hit_min);
    }

    #[test]
    fn crit_grows_with_agility() {
        let model = CombatModel::default();
        let chance = calculate_crit_chance(&stats(5), &model);
        assert!((chance - 0.10).abs() < 1e-9);
        let capped = CombatModel {
            crit_max: 0.08,
            ..model
        };
        assert_eq!(calculate_crit_chance(&stats(10), &capped), 0.08);
    }
}
