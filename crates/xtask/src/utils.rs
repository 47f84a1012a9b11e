//! Shared helpers for xtask commands

use std::path::Path;

use anyhow::{Context, Result, bail};
use arena_content::ContentFactory;
use arena_core::{ArenaConfig, ArenaState, FighterId, NameGenerator, Stats};
use console::style;
use serde::Serialize;

/// Output format shared by every command.
#[derive(Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Summary,
    /// Full JSON output
    Json,
}

/// Loads the balance tables and a name generator shuffled by `seed`.
pub fn load_content(data_dir: &Path, seed: u64) -> Result<(ArenaConfig, NameGenerator)> {
    let factory = ContentFactory::new(data_dir);
    let config = factory.load_config()?;
    let names = factory.name_generator(seed)?;
    Ok((config, names))
}

/// Parses `strength,agility,stamina`.
pub fn parse_stats(raw: &str) -> Result<Stats> {
    let values = raw
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<u8>()
                .with_context(|| format!("Invalid stat value {part:?}"))
        })
        .collect::<Result<Vec<_>>>()?;

    let &[strength, agility, stamina] = values.as_slice() else {
        bail!("Expected three stats as strength,agility,stamina (got {raw:?})");
    };
    Ok(Stats::new(strength, agility, stamina)?)
}

/// Signs `count` fighters with generated names and rolled stats.
pub fn recruit_roster(
    mut state: ArenaState,
    count: usize,
    names: &mut NameGenerator,
    config: &ArenaConfig,
) -> Result<ArenaState> {
    for _ in 0..count {
        let name = names.next_name()?;
        state = state.recruit_fighter(name, config)?.0;
    }
    Ok(state)
}

/// Roster name for an id, falling back to the id itself.
pub fn fighter_name(state: &ArenaState, id: FighterId) -> String {
    state
        .fighter(id)
        .map(|f| f.name().to_owned())
        .unwrap_or_else(|| id.to_string())
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize to JSON")?;
    println!("{json}");
    Ok(())
}

/// Hex-encoded state root.
pub fn state_root_hex(state: &ArenaState) -> Result<String> {
    Ok(hex::encode(state.state_root()?))
}

pub fn print_root(state: &ArenaState) -> Result<()> {
    println!(
        "{} {}",
        style("State root:").bold().cyan(),
        state_root_hex(state)?
    );
    Ok(())
}
