//! Issue names from the content directory's name lists.

use std::path::Path;

use anyhow::Result;
use arena_content::ContentFactory;
use clap::Parser;
use console::style;

use crate::utils::{self, OutputFormat};

/// Issue fighter names
#[derive(Parser)]
pub struct Names {
    /// Seed for the shuffle
    #[arg(short, long, default_value_t = 2026)]
    seed: u64,

    /// How many names to issue
    #[arg(short, long, default_value_t = 10)]
    count: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

impl Names {
    pub fn execute(self, data_dir: &Path) -> Result<()> {
        let mut generator = ContentFactory::new(data_dir).name_generator(self.seed)?;
        let capacity = generator.capacity();

        let issued: Vec<String> = std::iter::from_fn(|| generator.try_next_name())
            .take(self.count)
            .collect();
        if issued.len() < self.count {
            tracing::warn!(
                requested = self.count,
                capacity,
                "name pool exhausted"
            );
        }

        match self.format {
            OutputFormat::Json => utils::print_json(&issued)?,
            OutputFormat::Summary => {
                for name in &issued {
                    println!("  {name}");
                }
                println!();
                println!(
                    "{} {} of {} names issued",
                    style("Pool:").bold().cyan(),
                    issued.len(),
                    capacity
                );
            }
        }
        Ok(())
    }
}
