//! Deterministic simulation core of a gladiator stable.
//!
//! `arena-core` defines the canonical rules (combat, injuries, condition,
//! contracts, tournaments, daily events) and exposes them as pure functions
//! over immutable values. The stable itself is an [`ArenaState`] snapshot
//! that only changes by returning a new snapshot from one of its transitions.
//!
//! All randomness flows through an explicit [`RngSource`]; given the same
//! seed, inputs and call order, every result and event log is reproduced
//! exactly.
pub mod combat;
pub mod condition;
pub mod contract;
pub mod daily;
pub mod env;
pub mod error;
pub mod fighter;
pub mod injury;
pub mod names;
pub mod state;
pub mod tournament;
pub mod training;

pub use combat::{
    AttackOutcome, AttackResult, CombatError, CombatEvent, EventKind, FightResult, resolve_attack,
    simulate_fight,
};
pub use daily::{DailyEvent, EventOption, ResolvedEvent};
pub use env::{ArenaConfig, ConfigError, PcgRng, RngSource};
pub use error::{ErrorSeverity, GameError};
pub use fighter::{
    ContractState, ContractTerms, Fighter, FighterId, Injury, InjuryKind, Stats, StatsError,
    TrainingFocus,
};
pub use names::{NameError, NameGenerator};
pub use state::{ArenaState, DayReport, Departure, DepartureReason, StateError};
pub use tournament::{
    MatchResolution, TournamentError, TournamentMatch, TournamentResult, TournamentRound,
};
