//! The stable: roster, treasury, calendar and the seed that drives them.
//!
//! [`ArenaState`] is an immutable snapshot. Every operation borrows the
//! current snapshot and returns a new one, so the caller can keep the old
//! value around for replay or undo. No live generator is ever stored: each
//! transition that consumes randomness opens a [`PcgRng`] on the persisted
//! seed, then persists a freshly derived seed for the next one.
mod daily;
mod day;
mod error;
mod fight;
mod roster;
mod tournament;

pub use day::{DayReport, Departure, DepartureReason};
pub use error::StateError;

use crate::daily::{DailyEvent, ResolvedEvent};
use crate::env::{ArenaConfig, PcgRng};
use crate::fighter::{Fighter, FighterId};
use crate::tournament::TournamentResult;

/// Canonical snapshot of a gladiator stable.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArenaState {
    /// Calendar day, starting at 1.
    day: u32,
    /// Treasury. May go negative; fighters then start counting overdue days.
    money: i64,
    /// Seed for the next randomness-consuming transition.
    seed: u64,
    /// Monotonic id allocator. Ids are never reused.
    next_fighter_id: u32,
    /// Fighters in signing order. The dead stay until removed.
    roster: Vec<Fighter>,
    active_fighter: Option<FighterId>,
    pending_event: Option<DailyEvent>,
    resolved_event: Option<ResolvedEvent>,
    last_tournament: Option<TournamentResult>,
}

impl ArenaState {
    /// Opens a new stable on day 1 with the configured starting money.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::Config`] if `config` fails validation.
    pub fn new(seed: u64, config: &ArenaConfig) -> Result<Self, StateError> {
        config.validate()?;
        Ok(Self {
            day: 1,
            money: config.economy.starting_money,
            seed,
            next_fighter_id: 1,
            roster: Vec::new(),
            active_fighter: None,
            pending_event: None,
            resolved_event: None,
            last_tournament: None,
        })
    }

    #[inline]
    pub const fn day(&self) -> u32 {
        self.day
    }

    #[inline]
    pub const fn money(&self) -> i64 {
        self.money
    }

    #[inline]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Id the next signed fighter will receive.
    #[inline]
    pub const fn next_fighter_id(&self) -> FighterId {
        FighterId(self.next_fighter_id)
    }

    pub fn roster(&self) -> &[Fighter] {
        &self.roster
    }

    pub fn fighter(&self, id: FighterId) -> Option<&Fighter> {
        self.roster.iter().find(|f| f.id() == id)
    }

    /// Ids of fighters still alive, in roster order.
    pub fn living_ids(&self) -> Vec<FighterId> {
        self.roster
            .iter()
            .filter(|f| f.is_alive())
            .map(Fighter::id)
            .collect()
    }

    #[inline]
    pub const fn active_fighter(&self) -> Option<FighterId> {
        self.active_fighter
    }

    #[inline]
    pub const fn pending_event(&self) -> Option<&DailyEvent> {
        self.pending_event.as_ref()
    }

    #[inline]
    pub const fn resolved_event(&self) -> Option<&ResolvedEvent> {
        self.resolved_event.as_ref()
    }

    #[inline]
    pub const fn last_tournament(&self) -> Option<&TournamentResult> {
        self.last_tournament.as_ref()
    }

    /// SHA-256 over the bincode encoding of the snapshot.
    ///
    /// Two runs that agree on every field agree on the root.
    #[cfg(feature = "serde")]
    pub fn state_root(&self) -> Result<[u8; 32], StateError> {
        use sha2::{Digest, Sha256};

        let bytes = bincode::serialize(self).map_err(|e| StateError::Encoding(e.to_string()))?;
        Ok(Sha256::digest(&bytes).into())
    }

    /// Generator positioned on the persisted seed.
    fn rng(&self) -> PcgRng {
        PcgRng::new(self.seed)
    }

    /// Persists the seed for the next transition.
    fn reseed(&mut self, rng: &mut PcgRng) {
        self.seed = rng.derive_seed();
    }

    fn index_of(&self, id: FighterId) -> Result<usize, StateError> {
        self.roster
            .iter()
            .position(|f| f.id() == id)
            .ok_or(StateError::UnknownFighter(id))
    }

    /// Drops every reference to a fighter that left the roster.
    fn forget(&mut self, id: FighterId) {
        if self.active_fighter == Some(id) {
            self.active_fighter = None;
        }
        if self
            .resolved_event
            .is_some_and(|resolved| resolved.event.target() == Some(id))
        {
            self.resolved_event = None;
        }
        if self
            .last_tournament
            .as_ref()
            .is_some_and(|result| result.participants.contains(&id))
        {
            self.last_tournament = None;
        }
    }

    fn replace_fighter(&mut self, fighter: Fighter) {
        if let Some(slot) = self.roster.iter_mut().find(|f| f.id() == fighter.id()) {
            *slot = fighter;
        }
    }
}
