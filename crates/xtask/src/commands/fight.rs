//! Simulate a single fight between two hand-built fighters.

use std::path::Path;

use anyhow::Result;
use arena_core::{ArenaState, EventKind, Stats};
use clap::Parser;
use console::style;

use crate::utils::{self, OutputFormat};

/// Simulate a fight
#[derive(Parser)]
pub struct Fight {
    /// Seed for the state's random stream
    #[arg(short, long, default_value_t = 2026)]
    seed: u64,

    /// First fighter as strength,agility,stamina (strikes first)
    #[arg(long, value_name = "S,A,ST", value_parser = parse_stats, default_value = "8,5,6")]
    a: Stats,

    /// Second fighter as strength,agility,stamina
    #[arg(long, value_name = "S,A,ST", value_parser = parse_stats, default_value = "7,6,7")]
    b: Stats,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

fn parse_stats(raw: &str) -> Result<Stats, String> {
    utils::parse_stats(raw).map_err(|e| format!("{e:#}"))
}

impl Fight {
    pub fn execute(self, data_dir: &Path) -> Result<()> {
        let (config, mut names) = utils::load_content(data_dir, self.seed)?;

        let state = ArenaState::new(self.seed, &config)?;
        let (state, first) = state.add_fighter(names.next_name()?, self.a, &config)?;
        let (state, second) = state.add_fighter(names.next_name()?, self.b, &config)?;
        let (after, result) = state.apply_fight(first, second, &config)?;

        match self.format {
            OutputFormat::Json => utils::print_json(&result)?,
            OutputFormat::Summary => {
                println!("{}", style("=== Fight Log ===").bold().green());
                for event in &result.log {
                    let line = event.to_string();
                    match event.kind {
                        EventKind::Crit | EventKind::Kill => println!("  {}", style(line).red()),
                        EventKind::Miss => println!("  {}", style(line).dim()),
                        _ => println!("  {line}"),
                    }
                }
                println!();
                println!(
                    "{} {} after {} rounds ({} HP left)",
                    style("Winner:").bold().yellow(),
                    result.winner.name(),
                    result.rounds,
                    result.winner.health()
                );
                if let Some(injury) = after.fighter(result.winner.id()).and_then(|f| f.injury()) {
                    println!(
                        "{} {} for {} days",
                        style("Injury:").bold().yellow(),
                        injury.kind(),
                        injury.recovery_days_left()
                    );
                }
                utils::print_root(&after)?;
            }
        }
        Ok(())
    }
}
