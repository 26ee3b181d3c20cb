use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::core::calendar::{local_date_only, parse_calendar_day};
use crate::core::types::TimeSeriesPoint;
use crate::error::{ChartError, ChartResult};

/// Incident data as delivered by the retrieval layer.
///
/// Either one raw incident (`occurredAt`) or a pre-aggregated daily count.
/// Unknown extra fields on either shape are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawObservation {
    Aggregated {
        #[serde(alias = "date")]
        day: String,
        count: u32,
    },
    Timestamp {
        #[serde(rename = "occurredAt", alias = "occurred_at")]
        occurred_at: String,
    },
}

impl RawObservation {
    #[must_use]
    pub fn aggregated(day: impl Into<String>, count: u32) -> Self {
        Self::Aggregated {
            day: day.into(),
            count,
        }
    }

    #[must_use]
    pub fn timestamp(occurred_at: impl Into<String>) -> Self {
        Self::Timestamp {
            occurred_at: occurred_at.into(),
        }
    }

    /// Canonical point for this record. A timestamp record counts one incident.
    pub fn to_point(&self) -> ChartResult<TimeSeriesPoint> {
        match self {
            Self::Aggregated { day, count } => Ok(TimeSeriesPoint::new(
                parse_calendar_day(day)?,
                *count,
            )),
            Self::Timestamp { occurred_at } => {
                Ok(TimeSeriesPoint::new(local_date_only(occurred_at)?, 1))
            }
        }
    }
}

/// Per-ingest counters for records that did not make it into the series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IngestDiagnostics {
    pub accepted: usize,
    /// Records of a known shape whose day/timestamp could not be parsed.
    pub unparsable_day: usize,
    /// JSON records matching neither shape.
    pub malformed: usize,
}

impl IngestDiagnostics {
    #[must_use]
    pub fn rejected(self) -> usize {
        self.unparsable_day + self.malformed
    }

    #[must_use]
    pub fn is_clean(self) -> bool {
        self.rejected() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IngestReport {
    pub points: Vec<TimeSeriesPoint>,
    pub diagnostics: IngestDiagnostics,
}

/// Converts raw records to canonical points, dropping unparsable ones.
#[must_use]
pub fn ingest_observations(records: &[RawObservation]) -> IngestReport {
    let mut report = IngestReport {
        points: Vec::with_capacity(records.len()),
        diagnostics: IngestDiagnostics::default(),
    };

    for (index, record) in records.iter().enumerate() {
        match record.to_point() {
            Ok(point) => {
                report.points.push(point);
                report.diagnostics.accepted += 1;
            }
            Err(err) => {
                warn!(index, error = %err, "dropping observation with unparsable day");
                report.diagnostics.unparsable_day += 1;
            }
        }
    }

    debug!(
        accepted = report.diagnostics.accepted,
        rejected = report.diagnostics.rejected(),
        "ingested observations"
    );
    report
}

/// Decodes a JSON payload of observations.
///
/// The payload is either an array of records or an analytics envelope
/// `{"byDay": [...]}`. Each record is decoded on its own so a bad one is
/// counted and skipped instead of failing the whole payload.
pub fn parse_observations_json(payload: &str) -> ChartResult<IngestReport> {
    let value: Value = serde_json::from_str(payload)?;
    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut envelope) => match envelope.remove("byDay") {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(ChartError::InvalidData(
                    "observation object must carry a `byDay` array".to_owned(),
                ));
            }
        },
        _ => {
            return Err(ChartError::InvalidData(
                "observation payload must be a JSON array".to_owned(),
            ));
        }
    };

    let mut records = Vec::with_capacity(items.len());
    let mut malformed = 0;
    for (index, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<RawObservation>(item) {
            Ok(record) => records.push(record),
            Err(err) => {
                warn!(index, error = %err, "dropping malformed observation record");
                malformed += 1;
            }
        }
    }

    let mut report = ingest_observations(&records);
    report.diagnostics.malformed = malformed;
    Ok(report)
}
