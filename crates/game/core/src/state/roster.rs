//! Signing, releasing and managing fighters.

use crate::env::{ArenaConfig, RngSource};
use crate::fighter::{Fighter, FighterId, Stats, TrainingFocus};

use super::{ArenaState, StateError};

impl ArenaState {
    /// Signs a fighter with the given attributes under the default contract.
    ///
    /// Consumes no randomness. The roster cap counts every fighter on the
    /// roster, the dead included.
    pub fn add_fighter(
        &self,
        name: impl Into<String>,
        stats: Stats,
        config: &ArenaConfig,
    ) -> Result<(Self, FighterId), StateError> {
        config.validate()?;
        self.ensure_capacity(config)?;
        let id = FighterId(self.next_fighter_id);
        let mut next = self.clone();
        next.next_fighter_id = self
            .next_fighter_id
            .checked_add(1)
            .ok_or(StateError::IdOverflow)?;
        next.roster.push(Fighter::new(id, name, stats, config.contract));
        tracing::debug!(%id, "fighter signed");
        Ok((next, id))
    }

    /// Signs a fighter whose attributes are rolled within the recruit band.
    pub fn recruit_fighter(
        &self,
        name: impl Into<String>,
        config: &ArenaConfig,
    ) -> Result<(Self, FighterId), StateError> {
        config.validate()?;
        self.ensure_capacity(config)?;
        let band = &config.roster;
        let mut rng = self.rng();
        let min = u32::from(band.recruit_stat_min);
        let max = u32::from(band.recruit_stat_max);
        let strength = rng.next_range(min, max) as u8;
        let agility = rng.next_range(min, max) as u8;
        let stamina = rng.next_range(min, max) as u8;
        let stats = Stats::new(strength, agility, stamina)?;

        let (mut next, id) = self.add_fighter(name, stats, config)?;
        next.reseed(&mut rng);
        Ok((next, id))
    }

    /// Puts an existing fighter snapshot on the roster, keeping its id.
    ///
    /// The id allocator moves past the inserted id so it is never handed out
    /// again.
    pub fn insert_fighter(
        &self,
        fighter: Fighter,
        config: &ArenaConfig,
    ) -> Result<Self, StateError> {
        config.validate()?;
        if self.fighter(fighter.id()).is_some() {
            return Err(StateError::DuplicateFighter(fighter.id()));
        }
        self.ensure_capacity(config)?;
        let mut next = self.clone();
        let after = fighter
            .id()
            .0
            .checked_add(1)
            .ok_or(StateError::IdOverflow)?;
        next.next_fighter_id = next.next_fighter_id.max(after);
        next.roster.push(fighter);
        Ok(next)
    }

    /// Releases a fighter.
    ///
    /// Fails while the pending daily event targets the fighter. The selection,
    /// the last resolved event and the last tournament are dropped when they
    /// mention the released fighter.
    pub fn remove_fighter(&self, id: FighterId) -> Result<Self, StateError> {
        let index = self.index_of(id)?;
        if self.pending_event.and_then(|event| event.target()) == Some(id) {
            return Err(StateError::FighterReferenced(id));
        }
        let mut next = self.clone();
        next.roster.remove(index);
        next.forget(id);
        Ok(next)
    }

    /// Sets a fighter's training focus.
    pub fn assign_training(&self, id: FighterId, focus: TrainingFocus) -> Result<Self, StateError> {
        let fighter = self.fighter(id).ok_or(StateError::UnknownFighter(id))?;
        if !fighter.can_train() {
            return Err(StateError::NotTrainable(id));
        }
        let updated = fighter.with_training(Some(focus));
        let mut next = self.clone();
        next.replace_fighter(updated);
        Ok(next)
    }

    pub fn clear_training(&self, id: FighterId) -> Result<Self, StateError> {
        let fighter = self.fighter(id).ok_or(StateError::UnknownFighter(id))?;
        let updated = fighter.with_training(None);
        let mut next = self.clone();
        next.replace_fighter(updated);
        Ok(next)
    }

    /// Marks a fighter as the one the player is looking at.
    pub fn select_fighter(&self, id: FighterId) -> Result<Self, StateError> {
        self.index_of(id)?;
        Ok(Self {
            active_fighter: Some(id),
            ..self.clone()
        })
    }

    pub fn clear_selection(&self) -> Self {
        Self {
            active_fighter: None,
            ..self.clone()
        }
    }

    fn ensure_capacity(&self, config: &ArenaConfig) -> Result<(), StateError> {
        let max = config.roster.max_fighters;
        if self.roster.len() >= max {
            return Err(StateError::RosterFull { max });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fighter::{ContractTerms, Injury, InjuryKind};

    fn stable() -> (ArenaState, ArenaConfig) {
        let config = ArenaConfig::default();
        (ArenaState::new(2026, &config).unwrap(), config)
    }

    fn stats() -> Stats {
        Stats::new(6, 5, 5).unwrap()
    }

    #[test]
    fn ids_are_monotonic_and_never_reused() {
        let (state, config) = stable();
        let (state, a) = state.add_fighter("Verus", stats(), &config).unwrap();
        let (state, b) = state.add_fighter("Priscus", stats(), &config).unwrap();
        let state = state.remove_fighter(b).unwrap();
        let (state, c) = state.add_fighter("Carpophorus", stats(), &config).unwrap();
        assert_eq!((a, b, c), (FighterId(1), FighterId(2), FighterId(3)));
        assert_eq!(state.roster().len(), 2);
    }

    #[test]
    fn add_does_not_touch_the_seed() {
        let (state, config) = stable();
        let (next, _) = state.add_fighter("Verus", stats(), &config).unwrap();
        assert_eq!(next.seed(), state.seed());
    }

    #[test]
    fn roster_cap_is_enforced() {
        let (mut state, mut config) = stable();
        config.roster.max_fighters = 2;
        for name in ["A", "B"] {
            state = state.add_fighter(name, stats(), &config).unwrap().0;
        }
        assert_eq!(
            state.add_fighter("C", stats(), &config).unwrap_err(),
            StateError::RosterFull { max: 2 }
        );
        assert_eq!(
            state.recruit_fighter("C", &config).unwrap_err(),
            StateError::RosterFull { max: 2 }
        );
    }

    #[test]
    fn recruits_land_in_band_and_reseed() {
        let (state, config) = stable();
        let (next, id) = state.recruit_fighter("Hermes", &config).unwrap();
        let stats = next.fighter(id).unwrap().stats();
        for value in [stats.strength(), stats.agility(), stats.stamina()] {
            assert!((3..=7).contains(&value));
        }
        assert_ne!(next.seed(), state.seed());

        let (again, _) = state.recruit_fighter("Hermes", &config).unwrap();
        assert_eq!(again, next);
    }

    #[test]
    fn insert_rejects_duplicates_and_advances_ids() {
        let (state, config) = stable();
        let outsider = Fighter::new(FighterId(9), "Tetraites", stats(), ContractTerms::default());
        let state = state.insert_fighter(outsider.clone(), &config).unwrap();
        assert_eq!(state.next_fighter_id(), FighterId(10));
        assert_eq!(
            state.insert_fighter(outsider, &config).unwrap_err(),
            StateError::DuplicateFighter(FighterId(9))
        );
    }

    #[test]
    fn training_requires_a_healthy_fighter() {
        let (state, config) = stable();
        let hurt = Fighter::new(FighterId(1), "Verus", stats(), ContractTerms::default())
            .with_injury(Some(Injury::new(InjuryKind::Sprain, 3)));
        let state = state.insert_fighter(hurt, &config).unwrap();
        assert_eq!(
            state
                .assign_training(FighterId(1), TrainingFocus::Strength)
                .unwrap_err(),
            StateError::NotTrainable(FighterId(1))
        );
        assert_eq!(
            state
                .assign_training(FighterId(4), TrainingFocus::Strength)
                .unwrap_err(),
            StateError::UnknownFighter(FighterId(4))
        );
    }

    #[test]
    fn training_can_be_assigned_and_cleared() {
        let (state, config) = stable();
        let (state, id) = state.add_fighter("Verus", stats(), &config).unwrap();
        let trained = state.assign_training(id, TrainingFocus::Agility).unwrap();
        assert_eq!(
            trained.fighter(id).unwrap().training(),
            Some(TrainingFocus::Agility)
        );
        assert_eq!(state.fighter(id).unwrap().training(), None);
        let cleared = trained.clear_training(id).unwrap();
        assert_eq!(cleared.fighter(id).unwrap().training(), None);
    }

    #[test]
    fn removing_the_active_fighter_clears_selection() {
        let (state, config) = stable();
        let (state, id) = state.add_fighter("Verus", stats(), &config).unwrap();
        let state = state.select_fighter(id).unwrap();
        assert_eq!(state.active_fighter(), Some(id));
        let state = state.remove_fighter(id).unwrap();
        assert_eq!(state.active_fighter(), None);
        assert_eq!(
            state.select_fighter(id).unwrap_err(),
            StateError::UnknownFighter(id)
        );
    }
}
