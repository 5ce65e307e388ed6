//! The cleaned-number list: one E.164 number per line, in accepted order.

use crate::error::Result;
use numsift_core::NormalizedNumber;
use std::fs;
use std::path::Path;

pub fn render_number_list(numbers: &[NormalizedNumber]) -> String {
    let mut out = String::new();
    for number in numbers {
        out.push_str(number.as_str());
        out.push('\n');
    }
    out
}

pub fn write_number_list(path: &Path, numbers: &[NormalizedNumber]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, render_number_list(numbers))?;
    Ok(())
}

/// Reads a saved list back as raw rows, ready to be normalized again.
pub fn read_number_list(path: &Path) -> Result<Vec<String>> {
    let data = fs::read_to_string(path)?;
    Ok(crate::rows::parse_text_rows(&data))
}
