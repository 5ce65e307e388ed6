use crate::commands::print_json;
use crate::input::gather_text;
use anyhow::Result;
use clap::Args;
use numsift_core::extract_candidates;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Number files to import (.txt or .csv)
    pub files: Vec<PathBuf>,
    #[arg(long)]
    pub text: Option<String>,
}

pub fn extract(json: bool, args: ExtractArgs) -> Result<()> {
    let raw = gather_text(args.text, &args.files)?;
    let candidates = extract_candidates(&raw);

    if json {
        return print_json(&candidates);
    }

    if candidates.is_empty() {
        println!("no candidates");
        return Ok(());
    }
    for candidate in candidates {
        println!("{}", candidate);
    }
    Ok(())
}
