use serde::{Deserialize, Serialize};

// The whole persisted analytics document. Field names keep the
// camelCase layout of the existing data file, so a deployment can
// carry its analytics.json forward unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    pub total_visits: u64,
    // Present in the on-disk schema but never incremented anywhere;
    // kept so older files round-trip without losing the field.
    pub unique_visitors: u64,
    // Older files may predate this field; treat absence as empty.
    #[serde(default)]
    pub timeseries: Vec<VisitRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitRecord {
    pub timestamp: String, // "YYYY-MM-DD HH:MM:SS", local time
}
