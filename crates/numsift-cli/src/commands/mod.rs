use anyhow::Result;
use numsift_config::AppConfig;
use numsift_core::{CleanReportDto, Normalizer, RegionCode};
use serde::Serialize;
use std::io::{self, Write};

pub mod clean;
pub mod completions;
pub mod extract;
pub mod reclean;

pub struct Context<'a> {
    pub json: bool,
    pub config: &'a AppConfig,
    pub region: Option<RegionCode>,
}

impl Context<'_> {
    pub fn normalizer(&self) -> Normalizer {
        self.config.normalizer(self.region.clone())
    }
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

pub fn print_report(ctx: &Context<'_>, report: &CleanReportDto) -> Result<()> {
    if ctx.json {
        return print_json(report);
    }

    println!(
        "Valid: {} • Removed: {}",
        report.accepted_count, report.rejected_count
    );
    if report.duplicates > 0 {
        println!("Duplicates dropped: {}", report.duplicates);
    }
    if !report.accepted.is_empty() {
        println!("Cleaned numbers:");
        for number in &report.accepted {
            println!("{}", number);
        }
    }
    if !report.rejected.is_empty() {
        println!("Removed:");
        for token in &report.rejected {
            println!("- {}", token);
        }
    }
    Ok(())
}
