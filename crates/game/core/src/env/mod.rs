//! The environment a transition runs in.
//!
//! Transitions receive two things besides the state they transform: a random
//! stream ([`RngSource`]) and the balance tables ([`ArenaConfig`]). Neither is
//! stored in the state, so the same snapshot can be replayed under any
//! combination of seed and configuration.
mod config;
mod rng;
mod tables;

pub use config::{ArenaConfig, ConfigError};
pub use rng::{PcgRng, RngSource};
pub use tables::{
    CombatModel, ConditionModel, DailyEventModel, EconomyModel, InjuryModel, RosterLimits,
    TournamentModel, TrainingModel,
};
