use serde::{Deserialize, Serialize};

/// One point-to-point itinerary, reshaped from the upstream `journeys` entry.
/// Timestamps are forwarded as the provider's literal strings, durations are
/// seconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JourneySummary {
    pub departure: String,
    pub arrival: String,
    pub duration: i64,
    pub nb_transfers: u32,
    pub sections: Vec<SectionSummary>,
}

/// One leg of a journey. `sections` keeps the upstream (chronological) order;
/// entries are reshaped, never reordered or dropped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SectionSummary {
    /// Endpoint names default to empty string when absent upstream.
    pub from: String,
    pub to: String,
    /// Absent for non-vehicle sections (transfers, waiting); omitted from
    /// output rather than emitted as null.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub duration: i64,
}
