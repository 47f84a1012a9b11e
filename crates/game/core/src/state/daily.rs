use crate::daily::{EventOption, ResolvedEvent};
use crate::env::ArenaConfig;

use super::{ArenaState, StateError};

impl ArenaState {
    /// Settles the pending daily event with the chosen option.
    ///
    /// Roster-wide morale changes reach living fighters only. A drill whose
    /// target has died since the roll has no effect on it. Consumes no
    /// randomness.
    pub fn resolve_daily_event(
        &self,
        option: EventOption,
        config: &ArenaConfig,
    ) -> Result<Self, StateError> {
        config.validate()?;
        let event = self.pending_event.ok_or(StateError::NoPendingEvent)?;
        let effect = event.effect(option, &config.events);

        let mut next = self.clone();
        next.money = next.money.saturating_add(effect.money);
        for fighter in next.roster.iter_mut().filter(|f| f.is_alive()) {
            if effect.roster_morale != 0 {
                *fighter = fighter.morale_adjusted(effect.roster_morale);
            }
            if let Some(target) = effect.target.filter(|t| t.fighter == fighter.id()) {
                *fighter = fighter
                    .morale_adjusted(target.morale)
                    .fatigue_adjusted(target.fatigue);
            }
        }

        next.pending_event = None;
        next.resolved_event = Some(ResolvedEvent {
            event,
            option,
            day: self.day,
        });
        tracing::debug!(event = event.title(), %option, "daily event resolved");
        Ok(next)
    }
}
