// Error taxonomy for the gadget
use thiserror::Error;

/// Raised when a KPI timeline cannot be reshaped into chart rows without
/// assigning values to the wrong project column. The column set is bound to
/// the first sample's project order; every later sample must match it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedKpiData {
    #[error("sample {index} carries {found} project entries, expected {expected}")]
    ProjectCountMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },
    #[error("sample {index}, column {column}: expected project '{expected}', found '{found}'")]
    ProjectMismatch {
        index: usize,
        column: usize,
        expected: String,
        found: String,
    },
}
