//! Single-elimination tournaments.
//!
//! The engine draws a bracket over a subset of the roster, drives the fight
//! engine round by round, and splits a prize pool between champion and
//! runner-up. Same seed, pool and participant list always reproduce the same
//! bracket, results and prizes.
pub mod bracket;
mod engine;

pub use bracket::{Pairing, bracket_size, bye_count, draw_first_round};
pub use engine::{TournamentRun, run_tournament};

use crate::combat::{CombatError, FightResult};
use crate::error::{ErrorSeverity, GameError};
use crate::fighter::FighterId;

/// How a bracket node was decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchResolution {
    /// Both sides fought.
    Fought,
    /// One slot was empty.
    Bye,
    /// At least one side was unfit; the fit side (or the first slot) advanced.
    Walkover,
}

/// One bracket node.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TournamentMatch {
    pub first: Option<FighterId>,
    pub second: Option<FighterId>,
    pub winner: FighterId,
    pub resolution: MatchResolution,
    /// Present only when the match was fought.
    pub fight: Option<FightResult>,
}

impl TournamentMatch {
    /// The losing side of a fought match.
    pub fn loser(&self) -> Option<FighterId> {
        self.fight.as_ref().map(|fight| fight.loser.id())
    }
}

/// All matches of one round, in bracket order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TournamentRound {
    /// 1-based round number.
    pub number: u32,
    pub matches: Vec<TournamentMatch>,
}

/// Complete bracket with prizes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TournamentResult {
    pub bracket_size: usize,
    /// Entrants in the order given by the caller.
    pub participants: Vec<FighterId>,
    pub rounds: Vec<TournamentRound>,
    pub champion: FighterId,
    /// Loser of the final, absent when the final was not fought.
    pub runner_up: Option<FighterId>,
    pub prize_pool: u64,
    pub champion_prize: u64,
    pub runner_up_prize: u64,
}

impl TournamentResult {
    /// Number of byes placed in the first round.
    pub fn byes(&self) -> usize {
        self.rounds.first().map_or(0, |round| {
            round
                .matches
                .iter()
                .filter(|m| m.resolution == MatchResolution::Bye)
                .count()
        })
    }

    /// Total prize money paid out.
    pub fn total_payout(&self) -> u64 {
        self.champion_prize + self.runner_up_prize
    }
}

/// Rejected tournament input.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TournamentError {
    #[error("tournament needs at least {min} participants (got {got})")]
    TooFewParticipants { min: usize, got: usize },

    #[error("fighter {0} is entered more than once")]
    DuplicateParticipant(FighterId),

    #[error("fighter {0} is not in the fighter pool")]
    UnknownParticipant(FighterId),

    #[error("fighter {0} is not fit to fight")]
    UnfitParticipant(FighterId),

    #[error("bracket round {round} produced an empty match")]
    EmptyMatch { round: u32 },

    #[error(transparent)]
    Combat(#[from] CombatError),
}

impl GameError for TournamentError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::EmptyMatch { .. } => ErrorSeverity::Internal,
            Self::Combat(err) => err.severity(),
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::TooFewParticipants { .. } => "TOURNAMENT_TOO_FEW_PARTICIPANTS",
            Self::DuplicateParticipant(_) => "TOURNAMENT_DUPLICATE_PARTICIPANT",
            Self::UnknownParticipant(_) => "TOURNAMENT_UNKNOWN_PARTICIPANT",
            Self::UnfitParticipant(_) => "TOURNAMENT_UNFIT_PARTICIPANT",
            Self::EmptyMatch { .. } => "TOURNAMENT_EMPTY_MATCH",
            Self::Combat(err) => err.error_code(),
        }
    }
}
