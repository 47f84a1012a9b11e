//! Closing one day and opening the next.

use crate::condition::daily_tick;
use crate::contract::{ContractStatus, is_terminated, tick_contract, track_overdue};
use crate::daily::{DailyEvent, roll_daily_event};
use crate::env::ArenaConfig;
use crate::fighter::{FighterId, TrainingFocus};
use crate::training::roll_training_gain;

use super::{ArenaState, StateError};

/// Why a fighter left the stable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DepartureReason {
    /// Wages went unpaid for too long.
    Overdue,
    /// The contract ran out without auto-renew.
    Expired,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Departure {
    pub fighter: FighterId,
    pub name: String,
    pub reason: DepartureReason,
}

/// Read-only summary of what happened while a day was closed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayReport {
    /// The day that was closed.
    pub day: u32,
    pub training_gains: Vec<(FighterId, TrainingFocus)>,
    /// Fighters whose injury healed completely.
    pub recovered: Vec<FighterId>,
    /// Contracts that hit zero and restarted.
    pub renewed: Vec<FighterId>,
    pub upkeep: u64,
    pub wages: u64,
    pub departures: Vec<Departure>,
    /// Event rolled for the new day, now pending.
    pub event: Option<DailyEvent>,
    /// Treasury after all charges.
    pub balance: i64,
}

impl ArenaState {
    /// Advances the calendar by one day.
    ///
    /// For every living fighter in roster order: heal, tick the injury, tick
    /// the contract, roll training, apply the daily condition change. Then the
    /// stable pays upkeep and the wages of the living, overdue counters are
    /// updated against the new balance, and fighters whose contract expired or
    /// whose wages are too far overdue leave. Finally the next day's event is
    /// rolled among the remaining living fighters.
    ///
    /// # Errors
    ///
    /// [`StateError::PendingEvent`] while the current event is unresolved,
    /// [`StateError::Config`] if `config` fails validation.
    pub fn advance_day(&self, config: &ArenaConfig) -> Result<(Self, DayReport), StateError> {
        config.validate()?;
        if self.pending_event.is_some() {
            return Err(StateError::PendingEvent);
        }

        let mut rng = self.rng();
        let mut next = self.clone();
        let mut report = DayReport {
            day: self.day,
            ..DayReport::default()
        };
        let mut expired = Vec::new();

        for fighter in next.roster.iter_mut().filter(|f| f.is_alive()) {
            let id = fighter.id();
            let mut current = fighter.healed(config.economy.daily_heal);

            if let Some(injury) = current.injury() {
                let remaining = injury.tick();
                if remaining.is_none() {
                    report.recovered.push(id);
                }
                current = current.with_injury(remaining);
            }

            let (contract, status) = tick_contract(current.contract());
            current = current.with_contract(contract);
            match status {
                ContractStatus::Active => {}
                ContractStatus::Renewed => report.renewed.push(id),
                ContractStatus::Expired => expired.push(id),
            }

            let (trained, gain) = roll_training_gain(&current, &mut rng, &config.training);
            if let Some(focus) = gain {
                report.training_gains.push((id, focus));
            }
            *fighter = daily_tick(&trained, &config.condition);
        }

        report.upkeep = config.economy.daily_upkeep;
        report.wages = next
            .roster
            .iter()
            .filter(|f| f.is_alive())
            .map(|f| u64::from(f.contract().terms().daily_wage))
            .sum();
        next.money = next
            .money
            .saturating_sub_unsigned(report.upkeep.saturating_add(report.wages));
        if next.money < 0 {
            tracing::warn!(day = self.day, balance = next.money, "stable is in debt");
        }

        let balance = next.money;
        for fighter in next.roster.iter_mut().filter(|f| f.is_alive()) {
            *fighter = fighter.with_contract(track_overdue(fighter.contract(), balance));
        }

        for fighter in next.roster.iter().filter(|f| f.is_alive()) {
            let reason = if is_terminated(fighter.contract()) {
                DepartureReason::Overdue
            } else if expired.contains(&fighter.id()) {
                DepartureReason::Expired
            } else {
                continue;
            };
            tracing::info!(fighter = %fighter.id(), ?reason, "contract terminated");
            report.departures.push(Departure {
                fighter: fighter.id(),
                name: fighter.name().to_owned(),
                reason,
            });
        }
        next.roster.retain(|f| !report.departures.iter().any(|d| d.fighter == f.id()));
        for departure in &report.departures {
            next.forget(departure.fighter);
        }

        let living = next.living_ids();
        next.pending_event = roll_daily_event(&living, &mut rng, &config.events);
        next.resolved_event = None;
        report.event = next.pending_event;
        report.balance = next.money;

        next.day += 1;
        next.reseed(&mut rng);
        tracing::info!(day = next.day, balance = next.money, "day advanced");
        Ok((next, report))
    }
}
