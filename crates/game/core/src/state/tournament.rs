use crate::env::ArenaConfig;
use crate::fighter::FighterId;
use crate::tournament::{TournamentResult, run_tournament};

use super::{ArenaState, StateError};

impl ArenaState {
    /// Runs a bracket over a subset of the roster.
    ///
    /// Every participant's post-tournament snapshot replaces the roster entry,
    /// the payout is credited to the treasury, and the result is kept as
    /// [`ArenaState::last_tournament`].
    pub fn run_tournament(
        &self,
        participants: &[FighterId],
        prize_pool: u64,
        config: &ArenaConfig,
    ) -> Result<(Self, TournamentResult), StateError> {
        config.validate()?;
        let mut rng = self.rng();
        let run = run_tournament(&self.roster, participants, prize_pool, &mut rng, config)?;

        let mut next = self.clone();
        next.roster = run.fighters;
        next.money = next
            .money
            .saturating_add_unsigned(run.result.total_payout());
        next.last_tournament = Some(run.result.clone());
        next.reseed(&mut rng);
        Ok((next, run.result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fighter::Stats;
    use crate::tournament::TournamentError;

    fn stable(entrants: usize) -> (ArenaState, ArenaConfig) {
        let config = ArenaConfig::default();
        let mut state = ArenaState::new(404, &config).unwrap();
        for i in 0..entrants {
            let stats = Stats::new(4 + (i % 4) as u8, 5, 5).unwrap();
            state = state.add_fighter(format!("F{i}"), stats, &config).unwrap().0;
        }
        (state, config)
    }

    #[test]
    fn payout_goes_to_the_treasury() {
        let (state, config) = stable(4);
        let ids = state.living_ids();
        let (next, result) = state.run_tournament(&ids, 500, &config).unwrap();
        assert_eq!(next.money(), 200 + result.total_payout() as i64);
        assert_eq!(next.last_tournament(), Some(&result));
        assert!(next.fighter(result.champion).unwrap().is_alive());
        assert_eq!(next.roster().len(), 4);
    }

    #[test]
    fn validation_errors_leave_state_untouched() {
        let (state, config) = stable(3);
        let err = state
            .run_tournament(&[FighterId(1), FighterId(7)], 100, &config)
            .unwrap_err();
        assert_eq!(
            err,
            StateError::Tournament(TournamentError::UnknownParticipant(FighterId(7)))
        );
    }

    #[test]
    fn only_entrants_are_touched() {
        let (state, config) = stable(5);
        let (next, _) = state
            .run_tournament(&[FighterId(1), FighterId(2)], 0, &config)
            .unwrap();
        for id in [3, 4, 5].map(FighterId) {
            assert_eq!(next.fighter(id), state.fighter(id));
        }
    }

    #[test]
    fn rejects_an_invalid_config_before_drawing() {
        let (state, mut config) = stable(4);
        config.combat.min_damage = 0;
        let ids = state.living_ids();
        assert!(matches!(
            state.run_tournament(&ids, 100, &config),
            Err(StateError::Config(_))
        ));
    }

    #[test]
    fn releasing_an_entrant_drops_the_last_tournament() {
        let (state, config) = stable(3);
        let (next, _) = state
            .run_tournament(&[FighterId(1), FighterId(2)], 100, &config)
            .unwrap();
        let kept = next.remove_fighter(FighterId(3)).unwrap();
        assert!(kept.last_tournament().is_some());
        let pruned = next.remove_fighter(FighterId(2)).unwrap();
        assert_eq!(pruned.last_tournament(), None);
    }
}
