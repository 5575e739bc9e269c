// Chart dataset reshaping for the line chart
use crate::domain::kpi::KpiSample;
use crate::error::MalformedKpiData;
use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

/// Label of the leading x-axis column.
pub const DATE_COLUMN_LABEL: &str = "Date";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    String,
    Number,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartColumn {
    #[serde(rename = "type")]
    pub kind: ColumnKind,
    pub label: String,
}

impl ChartColumn {
    fn date() -> Self {
        Self {
            kind: ColumnKind::String,
            label: DATE_COLUMN_LABEL.to_string(),
        }
    }

    fn project(label: String) -> Self {
        Self {
            kind: ColumnKind::Number,
            label,
        }
    }
}

/// One plotted row: the sample date followed by one value per project column.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRow {
    pub time: String,
    pub values: Vec<f64>,
}

// Serialized as the flat array the charting library expects:
// ["2024-01-01", 5.0, 7.0]
impl Serialize for ChartRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.values.len() + 1))?;
        seq.serialize_element(&self.time)?;
        for value in &self.values {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

/// Tabular chart data: a `Date` column plus one numeric column per project,
/// and one row per timeline sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDataset {
    pub columns: Vec<ChartColumn>,
    pub rows: Vec<ChartRow>,
}

impl ChartDataset {
    /// Reshapes a KPI timeline into chart rows, preserving sample order.
    ///
    /// The column set is established from the first sample's project list.
    /// Every later sample must list the same projects in the same order; a
    /// differing set, order or length is rejected instead of silently
    /// plotting values under the wrong column. An empty timeline yields a
    /// dataset with the lone `Date` column and no rows.
    pub fn from_samples(samples: &[KpiSample]) -> Result<Self, MalformedKpiData> {
        let mut columns = vec![ChartColumn::date()];

        let Some(first) = samples.first() else {
            return Ok(Self {
                columns,
                rows: Vec::new(),
            });
        };

        let keys: Vec<&str> = first
            .project_kpis
            .iter()
            .map(|kpi| kpi.project_key.as_str())
            .collect();
        columns.extend(
            first
                .project_kpis
                .iter()
                .map(|kpi| ChartColumn::project(kpi.project_key.clone())),
        );

        let mut rows = Vec::with_capacity(samples.len());
        for (index, sample) in samples.iter().enumerate() {
            if sample.project_kpis.len() != keys.len() {
                return Err(MalformedKpiData::ProjectCountMismatch {
                    index,
                    expected: keys.len(),
                    found: sample.project_kpis.len(),
                });
            }
            for (offset, (kpi, expected)) in sample.project_kpis.iter().zip(&keys).enumerate() {
                if kpi.project_key != *expected {
                    return Err(MalformedKpiData::ProjectMismatch {
                        index,
                        // column 0 is the date
                        column: offset + 1,
                        expected: (*expected).to_string(),
                        found: kpi.project_key.clone(),
                    });
                }
            }
            rows.push(ChartRow {
                time: sample.time.clone(),
                values: sample.project_kpis.iter().map(|kpi| kpi.kpi_number).collect(),
            });
        }

        Ok(Self { columns, rows })
    }
}
