use crate::combat::{FightResult, settle_fight, simulate_fight};
use crate::env::ArenaConfig;
use crate::fighter::FighterId;

use super::{ArenaState, StateError};

impl ArenaState {
    /// Stages a fight to the death between two roster fighters.
    ///
    /// `first` strikes first. Both snapshots are replaced by their post-fight
    /// versions (injuries, morale, fatigue); the returned [`FightResult`]
    /// carries the raw end-of-fight snapshots and the full event log.
    pub fn apply_fight(
        &self,
        first: FighterId,
        second: FighterId,
        config: &ArenaConfig,
    ) -> Result<(Self, FightResult), StateError> {
        config.validate()?;
        if first == second {
            return Err(StateError::SameFighter(first));
        }
        let a = self.fighter(first).ok_or(StateError::UnknownFighter(first))?;
        let b = self.fighter(second).ok_or(StateError::UnknownFighter(second))?;
        for fighter in [a, b] {
            if !fighter.is_fightable() {
                return Err(StateError::NotFightable(fighter.id()));
            }
        }

        let mut rng = self.rng();
        let result = simulate_fight(a, b, &mut rng, &config.combat, &config.condition)?;
        let after = settle_fight(&result, &mut rng, &config.injury, &config.condition);
        tracing::info!(
            winner = %after.winner.id(),
            loser = %after.loser.id(),
            rounds = result.rounds,
            "fight resolved"
        );

        let mut next = self.clone();
        next.replace_fighter(after.winner);
        next.replace_fighter(after.loser);
        next.reseed(&mut rng);
        Ok((next, result))
    }
}
