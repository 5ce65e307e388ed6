use crate::domain::{NormalizedNumber, RegionCode};
use crate::normalize::Normalized;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanReportDto {
    pub region: Option<String>,
    pub accepted: Vec<NormalizedNumber>,
    pub rejected: Vec<String>,
    pub accepted_count: usize,
    pub rejected_count: usize,
    pub examined: usize,
    pub duplicates: usize,
}

impl CleanReportDto {
    pub fn from_run(region: Option<&RegionCode>, run: Normalized) -> Self {
        Self {
            region: region.map(|region| region.as_str().to_string()),
            accepted_count: run.accepted.len(),
            rejected_count: run.rejected.len(),
            examined: run.examined,
            duplicates: run.duplicates,
            accepted: run.accepted,
            rejected: run.rejected,
        }
    }
}
