//! Balance tables.
//!
//! Each model groups the tunable constants of one resolver. Every model has a
//! `Default` matching the shipped balance, and (with the `serde` feature) a
//! partial TOML/JSON document overrides only the fields it names.

/// Per-attack combat parameters.
///
/// Chances are probabilities in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct CombatModel {
    pub hit_base: f64,
    pub hit_per_agility_diff: f64,
    pub hit_min: f64,
    pub hit_max: f64,
    /// Lower bound of the uniform damage variance band.
    pub variance_min: f64,
    /// Upper bound of the uniform damage variance band.
    pub variance_max: f64,
    pub crit_base: f64,
    pub crit_per_agility: f64,
    pub crit_max: f64,
    pub crit_multiplier: f64,
    pub defense_per_stamina: f64,
    /// Damage dealt by any landed hit is never below this floor.
    pub min_damage: u32,
}

impl Default for CombatModel {
    fn default() -> Self {
        Self {
            hit_base: 0.75,
            hit_per_agility_diff: 0.05,
            hit_min: 0.10,
            hit_max: 0.95,
            variance_min: 0.85,
            variance_max: 1.15,
            crit_base: 0.05,
            crit_per_agility: 0.01,
            crit_max: 0.50,
            crit_multiplier: 1.5,
            defense_per_stamina: 0.5,
            min_damage: 1,
        }
    }
}

/// Morale and fatigue dynamics.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ConditionModel {
    pub win_morale: i32,
    pub loss_morale: i32,
    pub fight_fatigue: i32,
    pub training_morale: i32,
    pub training_fatigue_gain: i32,
    /// Daily fatigue change while resting. Negative.
    pub rest_recovery: i32,
    pub idle_morale: i32,
    /// Flat morale loss applied once when an injury is newly acquired.
    pub injury_morale_penalty: i32,
    /// Efficiency contribution at morale 0.
    pub morale_effect_low: f64,
    /// Efficiency contribution at morale 100.
    pub morale_effect_high: f64,
    /// Efficiency contribution at fatigue 0.
    pub fatigue_effect_low: f64,
    /// Efficiency contribution at fatigue 100.
    pub fatigue_effect_high: f64,
}

impl Default for ConditionModel {
    fn default() -> Self {
        Self {
            win_morale: 10,
            loss_morale: -15,
            fight_fatigue: 20,
            training_morale: -3,
            training_fatigue_gain: 15,
            rest_recovery: -10,
            idle_morale: 2,
            injury_morale_penalty: 10,
            morale_effect_low: -0.20,
            morale_effect_high: 0.20,
            fatigue_effect_low: 0.0,
            fatigue_effect_high: -0.30,
        }
    }
}

/// Post-fight injury odds and severities.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct InjuryModel {
    pub winner_chance: f64,
    pub loser_chance: f64,
    /// Damage fractions at or above this become a sprain.
    pub sprain_threshold: f64,
    /// Damage fractions at or above this become a fracture.
    pub fracture_threshold: f64,
    pub bruise_days: u32,
    pub sprain_days: u32,
    pub fracture_days: u32,
}

impl Default for InjuryModel {
    fn default() -> Self {
        Self {
            winner_chance: 0.15,
            loser_chance: 0.50,
            sprain_threshold: 0.30,
            fracture_threshold: 0.60,
            bruise_days: 2,
            sprain_days: 4,
            fracture_days: 8,
        }
    }
}

/// Bracket size limits and prize split.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct TournamentModel {
    pub min_participants: usize,
    pub champion_share: f64,
    pub runner_up_share: f64,
}

impl Default for TournamentModel {
    fn default() -> Self {
        Self {
            min_participants: 2,
            champion_share: 0.60,
            runner_up_share: 0.30,
        }
    }
}

/// Cash flow and recovery.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct EconomyModel {
    pub starting_money: i64,
    /// Fixed cost charged every day on top of wages.
    pub daily_upkeep: u64,
    /// Health restored to each living fighter per day.
    pub daily_heal: u32,
}

impl Default for EconomyModel {
    fn default() -> Self {
        Self {
            starting_money: 200,
            daily_upkeep: 10,
            daily_heal: 5,
        }
    }
}

/// Daily stat progression.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct TrainingModel {
    pub gain_chance: f64,
    pub stat_cap: u8,
}

impl Default for TrainingModel {
    fn default() -> Self {
        Self {
            gain_chance: 0.30,
            stat_cap: 10,
        }
    }
}

/// Roster capacity and recruitment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct RosterLimits {
    pub max_fighters: usize,
    pub recruit_stat_min: u8,
    pub recruit_stat_max: u8,
}

impl Default for RosterLimits {
    fn default() -> Self {
        Self {
            max_fighters: 8,
            recruit_stat_min: 3,
            recruit_stat_max: 7,
        }
    }
}

/// Narrative day-event odds and effects.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct DailyEventModel {
    /// Probability that a day rolls any event at all.
    pub chance: f64,
    pub sponsor_base: u32,
    pub sponsor_step: u32,
    /// Offer = base + step × uniform[0, steps].
    pub sponsor_steps: u32,
    pub sponsor_accept_morale: i32,
    pub sponsor_decline_morale: i32,
    pub drill_push_fatigue: i32,
    pub drill_push_morale: i32,
    pub drill_rest_morale: i32,
    pub rumor_cost: u32,
    pub rumor_investigate_morale: i32,
    pub rumor_ignore_morale: i32,
}

impl Default for DailyEventModel {
    fn default() -> Self {
        Self {
            chance: 0.50,
            sponsor_base: 40,
            sponsor_step: 10,
            sponsor_steps: 4,
            sponsor_accept_morale: -5,
            sponsor_decline_morale: 5,
            drill_push_fatigue: 25,
            drill_push_morale: 5,
            drill_rest_morale: -10,
            rumor_cost: 15,
            rumor_investigate_morale: 8,
            rumor_ignore_morale: -4,
        }
    }
}
