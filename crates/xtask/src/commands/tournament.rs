//! Recruit a field of fighters and run a bracket over all of them.

use std::path::Path;

use anyhow::Result;
use arena_core::{ArenaState, FighterId, MatchResolution, TournamentMatch};
use clap::Parser;
use console::style;

use crate::utils::{self, OutputFormat};

/// Run a single-elimination tournament
#[derive(Parser)]
pub struct Tournament {
    /// Seed for the state's random stream
    #[arg(short, long, default_value_t = 2026)]
    seed: u64,

    /// Number of recruited entrants
    #[arg(short, long, default_value_t = 8)]
    entrants: usize,

    /// Prize pool split between champion and runner-up
    #[arg(short, long, default_value_t = 1000)]
    prize: u64,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

impl Tournament {
    pub fn execute(self, data_dir: &Path) -> Result<()> {
        let (mut config, mut names) = utils::load_content(data_dir, self.seed)?;
        config.roster.max_fighters = config.roster.max_fighters.max(self.entrants);

        let state = ArenaState::new(self.seed, &config)?;
        let state = utils::recruit_roster(state, self.entrants, &mut names, &config)?;
        let entrants = state.living_ids();
        let (after, result) = state.run_tournament(&entrants, self.prize, &config)?;

        match self.format {
            OutputFormat::Json => utils::print_json(&result)?,
            OutputFormat::Summary => {
                println!(
                    "{} {} entrants, bracket of {}, {} byes",
                    style("Tournament:").bold().green(),
                    result.participants.len(),
                    result.bracket_size,
                    result.byes()
                );
                for round in &result.rounds {
                    println!();
                    println!("{}", style(format!("Round {}", round.number)).bold().yellow());
                    for m in &round.matches {
                        println!("  {}", describe(&after, m));
                    }
                }
                println!();
                println!(
                    "{} {} ({} coins)",
                    style("Champion:").bold().yellow(),
                    utils::fighter_name(&after, result.champion),
                    result.champion_prize
                );
                if let Some(runner_up) = result.runner_up {
                    println!(
                        "{} {} ({} coins)",
                        style("Runner-up:").bold().yellow(),
                        utils::fighter_name(&after, runner_up),
                        result.runner_up_prize
                    );
                }
                println!("{} {}", style("Treasury:").bold().cyan(), after.money());
                utils::print_root(&after)?;
            }
        }
        Ok(())
    }
}

fn describe(state: &ArenaState, m: &TournamentMatch) -> String {
    let slot = |id: Option<FighterId>| match id {
        Some(id) => utils::fighter_name(state, id),
        None => "-".to_owned(),
    };
    let winner = utils::fighter_name(state, m.winner);
    match m.resolution {
        MatchResolution::Fought => {
            let rounds = m.fight.as_ref().map_or(0, |f| f.rounds);
            format!(
                "{} vs {} -> {winner} in {rounds} rounds",
                slot(m.first),
                slot(m.second)
            )
        }
        MatchResolution::Bye => format!("{winner} advances on a bye"),
        MatchResolution::Walkover => format!(
            "{} vs {} -> {winner} by walkover",
            slot(m.first),
            slot(m.second)
        ),
    }
}
