//! Play out a stretch of days with a recruited roster.

use std::path::Path;

use anyhow::Result;
use arena_core::{ArenaState, DayReport, EventOption};
use clap::Parser;
use console::style;
use serde::Serialize;

use crate::utils::{self, OutputFormat};

/// Play out a number of days
#[derive(Parser)]
pub struct Season {
    /// Seed for the state's random stream
    #[arg(short, long, default_value_t = 2026)]
    seed: u64,

    /// Number of days to advance
    #[arg(short, long, default_value_t = 14)]
    days: u32,

    /// Fighters recruited before the first day
    #[arg(short, long, default_value_t = 4)]
    roster: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Serialize)]
struct SeasonOutput<'a> {
    reports: &'a [DayReport],
    state: &'a ArenaState,
    state_root: String,
}

impl Season {
    pub fn execute(self, data_dir: &Path) -> Result<()> {
        let (config, mut names) = utils::load_content(data_dir, self.seed)?;

        let state = ArenaState::new(self.seed, &config)?;
        let mut state = utils::recruit_roster(state, self.roster, &mut names, &config)?;
        let mut reports = Vec::with_capacity(self.days as usize);

        for _ in 0..self.days {
            // Every event is settled with its first option.
            if state.pending_event().is_some() {
                state = state.resolve_daily_event(EventOption::First, &config)?;
            }
            let (next, report) = state.advance_day(&config)?;
            state = next;
            reports.push(report);
        }

        match self.format {
            OutputFormat::Json => utils::print_json(&SeasonOutput {
                reports: &reports,
                state: &state,
                state_root: utils::state_root_hex(&state)?,
            })?,
            OutputFormat::Summary => {
                for report in &reports {
                    print_report(&state, report);
                }
                println!();
                println!(
                    "{} day {}, {} coins, {} fighters",
                    style("Final:").bold().green(),
                    state.day(),
                    state.money(),
                    state.roster().len()
                );
                utils::print_root(&state)?;
            }
        }
        Ok(())
    }
}

fn print_report(state: &ArenaState, report: &DayReport) {
    println!(
        "{} balance {} (upkeep {}, wages {})",
        style(format!("Day {:>3}:", report.day)).bold().yellow(),
        report.balance,
        report.upkeep,
        report.wages
    );
    for (id, focus) in &report.training_gains {
        println!("  {} gained {focus}", utils::fighter_name(state, *id));
    }
    for id in &report.recovered {
        println!("  {} recovered", utils::fighter_name(state, *id));
    }
    for departure in &report.departures {
        println!(
            "  {}",
            style(format!("{} left ({:?})", departure.name, departure.reason)).red()
        );
    }
    if let Some(event) = &report.event {
        let [first, _] = event.option_labels();
        println!("  event: {} -> {first}", event.title());
    }
}
