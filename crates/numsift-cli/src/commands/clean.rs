use crate::commands::{print_report, Context};
use crate::input::gather_text;
use anyhow::{Context as _, Result};
use clap::Args;
use numsift_core::{extract_candidates, CleanReportDto};
use numsift_files::write_number_list;
use std::path::PathBuf;
use tracing::{debug, warn};

#[derive(Debug, Args)]
pub struct CleanArgs {
    /// Number files to import (.txt or .csv)
    pub files: Vec<PathBuf>,
    #[arg(long)]
    pub text: Option<String>,
    /// Save the cleaned numbers, one per line
    #[arg(long)]
    pub out: Option<PathBuf>,
    /// Skip the trunk-prefix retry even if the config enables it
    #[arg(long)]
    pub no_national_fallback: bool,
}

pub fn clean(ctx: &Context<'_>, args: CleanArgs) -> Result<()> {
    let raw = gather_text(args.text, &args.files)?;
    let candidates = extract_candidates(&raw);
    debug!(candidates = candidates.len(), "extracted candidates");
    if candidates.is_empty() {
        warn!("no numbers found in input");
        if !ctx.json {
            println!("No numbers found: paste, type, or import numbers first.");
            return Ok(());
        }
    }

    let mut normalizer = ctx.normalizer();
    if args.no_national_fallback {
        normalizer = normalizer.with_national_prefix_fallback(false);
    }
    let run = normalizer.normalize(&candidates)?;
    debug!(
        accepted = run.accepted.len(),
        rejected = run.rejected.len(),
        duplicates = run.duplicates,
        "normalized candidates"
    );

    if let Some(path) = args.out.as_deref() {
        write_number_list(path, &run.accepted)
            .with_context(|| format!("write number list {}", path.display()))?;
    }

    let report = CleanReportDto::from_run(normalizer.default_region(), run);
    print_report(ctx, &report)?;
    if let (Some(path), false) = (args.out.as_deref(), ctx.json) {
        println!("Saved {} numbers to {}", report.accepted_count, path.display());
    }
    Ok(())
}
