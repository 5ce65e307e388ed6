use crate::commands::{print_report, Context};
use crate::error::invalid_input;
use anyhow::{Context as _, Result};
use clap::Args;
use numsift_core::CleanReportDto;
use numsift_files::{read_number_list, write_number_list};
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Args)]
pub struct RecleanArgs {
    /// A saved list, one number per line
    pub list: PathBuf,
    #[arg(long, conflicts_with = "in_place")]
    pub out: Option<PathBuf>,
    /// Overwrite the list with the re-cleaned numbers
    #[arg(long)]
    pub in_place: bool,
}

pub fn reclean(ctx: &Context<'_>, args: RecleanArgs) -> Result<()> {
    let rows = read_number_list(&args.list)
        .with_context(|| format!("read number list {}", args.list.display()))?;
    if rows.is_empty() {
        return Err(invalid_input(format!(
            "nothing to re-clean: {} is empty",
            args.list.display()
        )));
    }

    let normalizer = ctx.normalizer();
    let run = normalizer.normalize(&rows)?;
    debug!(
        rows = rows.len(),
        accepted = run.accepted.len(),
        rejected = run.rejected.len(),
        "re-cleaned list"
    );

    let target = if args.in_place {
        Some(args.list.clone())
    } else {
        args.out
    };
    if let Some(path) = target.as_deref() {
        write_number_list(path, &run.accepted)
            .with_context(|| format!("write number list {}", path.display()))?;
    }

    let report = CleanReportDto::from_run(normalizer.default_region(), run);
    print_report(ctx, &report)?;
    if let (Some(path), false) = (target.as_deref(), ctx.json) {
        println!("Saved {} numbers to {}", report.accepted_count, path.display());
    }
    Ok(())
}
