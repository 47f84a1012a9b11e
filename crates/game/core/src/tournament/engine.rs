//! Bracket driver.

use std::collections::{BTreeMap, BTreeSet};

use crate::combat::{settle_fight, simulate_fight};
use crate::env::{ArenaConfig, RngSource};
use crate::fighter::{Fighter, FighterId};

use super::bracket::{Pairing, bracket_size, draw_first_round};
use super::{MatchResolution, TournamentError, TournamentMatch, TournamentResult, TournamentRound};

/// A finished tournament plus the fighter pool after every match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TournamentRun {
    pub result: TournamentResult,
    /// Input pool in its original order, with post-tournament snapshots.
    pub fighters: Vec<Fighter>,
}

/// Runs a single-elimination tournament.
///
/// Real pairings fight with the same post-processing as a standalone fight
/// (injuries, morale and fatigue). Byes advance the sole occupant. When one
/// side is unfit the fit side advances; when both are unfit the first slot
/// advances.
///
/// # Errors
///
/// Validation fails before any draw is taken: too few entrants, a repeated
/// id, an id missing from `pool`, or an entrant that is not fightable.
pub fn run_tournament(
    pool: &[Fighter],
    participants: &[FighterId],
    prize_pool: u64,
    rng: &mut impl RngSource,
    config: &ArenaConfig,
) -> Result<TournamentRun, TournamentError> {
    let model = &config.tournament;
    if participants.len() < model.min_participants.max(2) {
        return Err(TournamentError::TooFewParticipants {
            min: model.min_participants.max(2),
            got: participants.len(),
        });
    }

    let mut working: BTreeMap<FighterId, Fighter> =
        pool.iter().map(|f| (f.id(), f.clone())).collect();
    let mut entered = BTreeSet::new();
    for &id in participants {
        if !entered.insert(id) {
            return Err(TournamentError::DuplicateParticipant(id));
        }
        let fighter = working
            .get(&id)
            .ok_or(TournamentError::UnknownParticipant(id))?;
        if !fighter.is_fightable() {
            return Err(TournamentError::UnfitParticipant(id));
        }
    }

    let mut slots: Vec<Pairing> = draw_first_round(participants, rng);
    let mut rounds = Vec::new();
    let mut number = 1u32;

    let champion = loop {
        let mut matches = Vec::with_capacity(slots.len());
        for (first, second) in slots {
            let decided = play_match(first, second, number, &mut working, rng, config)?;
            matches.push(decided);
        }
        let winners: Vec<FighterId> = matches.iter().map(|m| m.winner).collect();
        tracing::debug!(round = number, matches = matches.len(), "bracket round complete");
        rounds.push(TournamentRound { number, matches });

        if let [champion] = winners.as_slice() {
            break *champion;
        }
        slots = winners
            .chunks(2)
            .map(|pair| (pair.first().copied(), pair.get(1).copied()))
            .collect();
        number += 1;
    };

    let runner_up = rounds
        .last()
        .and_then(|round| round.matches.last())
        .and_then(TournamentMatch::loser);

    let champion_prize = share(prize_pool, model.champion_share);
    let runner_up_prize = if runner_up.is_some() {
        share(prize_pool, model.runner_up_share)
    } else {
        0
    };

    tracing::info!(
        %champion,
        runner_up = ?runner_up,
        champion_prize,
        runner_up_prize,
        "tournament decided"
    );

    let fighters = pool
        .iter()
        .map(|f| working.get(&f.id()).cloned().unwrap_or_else(|| f.clone()))
        .collect();

    Ok(TournamentRun {
        result: TournamentResult {
            bracket_size: bracket_size(participants.len()),
            participants: participants.to_vec(),
            rounds,
            champion,
            runner_up,
            prize_pool,
            champion_prize,
            runner_up_prize,
        },
        fighters,
    })
}

fn play_match(
    first: Option<FighterId>,
    second: Option<FighterId>,
    round: u32,
    working: &mut BTreeMap<FighterId, Fighter>,
    rng: &mut impl RngSource,
    config: &ArenaConfig,
) -> Result<TournamentMatch, TournamentError> {
    let walkover = |winner: FighterId, resolution: MatchResolution| TournamentMatch {
        first,
        second,
        winner,
        resolution,
        fight: None,
    };

    let (a, b) = match (first, second) {
        (Some(a), Some(b)) => (a, b),
        (Some(sole), None) | (None, Some(sole)) => {
            return Ok(walkover(sole, MatchResolution::Bye));
        }
        (None, None) => return Err(TournamentError::EmptyMatch { round }),
    };

    let fit = |id: FighterId| working.get(&id).is_some_and(Fighter::is_fightable);
    match (fit(a), fit(b)) {
        (true, true) => {}
        (true, false) => {
            tracing::warn!(%a, %b, round, "unfit fighter, walkover");
            return Ok(walkover(a, MatchResolution::Walkover));
        }
        (false, true) => {
            tracing::warn!(%a, %b, round, "unfit fighter, walkover");
            return Ok(walkover(b, MatchResolution::Walkover));
        }
        (false, false) => {
            tracing::warn!(%a, %b, round, "both fighters unfit, first slot advances");
            return Ok(walkover(a, MatchResolution::Walkover));
        }
    }

    let (Some(left), Some(right)) = (working.get(&a), working.get(&b)) else {
        return Err(TournamentError::UnknownParticipant(a));
    };
    let fight = simulate_fight(left, right, rng, &config.combat, &config.condition)?;
    let after = settle_fight(&fight, rng, &config.injury, &config.condition);

    let winner = after.winner.id();
    working.insert(winner, after.winner);
    working.insert(after.loser.id(), after.loser);

    Ok(TournamentMatch {
        first,
        second,
        winner,
        resolution: MatchResolution::Fought,
        fight: Some(fight),
    })
}

/// `floor(pool × share)`.
fn share(pool: u64, fraction: f64) -> u64 {
    (pool as f64 * fraction).floor().max(0.0) as u64
}
