use reqwest::Client;
use serde::Deserialize;
use serde_json::Value as JsonValue;
use std::time::Instant;
use thiserror::Error;

use crate::core::error::ToolError;
use crate::domain::{JourneySummary, SectionSummary};
use crate::infra::http::headers::add_standard_headers;
use crate::infra::runtime::limits::make_http_client;

/// Navitia coverage the adapter talks to.
pub const DEFAULT_BASE_URL: &str = "https://api.sncf.com/v1/coverage/sncf";

/// Journeys are capped upstream; no pagination beyond this.
const JOURNEY_COUNT: &str = "10";

#[derive(Debug, Error)]
pub enum SncfError {
    #[error("upstream status {0}")]
    Status(u16),
    #[error("{0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

impl From<SncfError> for ToolError {
    fn from(e: SncfError) -> Self {
        ToolError::Failed(e.to_string())
    }
}

/// Thin client over the SNCF/Navitia HTTP API. Authenticates with the API
/// key as basic-auth username and an empty password.
#[derive(Clone)]
pub struct SncfClient {
    base: String,
    api_key: String,
    http: Client,
}

impl SncfClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base(DEFAULT_BASE_URL, api_key)
    }

    pub fn with_base(base: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            http: make_http_client(),
        }
    }

    fn get(&self, url: impl reqwest::IntoUrl) -> reqwest::RequestBuilder {
        let (builder, _rid) = add_standard_headers(self.http.get(url), None);
        builder.basic_auth(&self.api_key, Some(""))
    }

    async fn send_json<T: serde::de::DeserializeOwned>(
        builder: reqwest::RequestBuilder,
    ) -> Result<T, SncfError> {
        let resp = builder.send().await?;
        if !resp.status().is_success() {
            return Err(SncfError::Status(resp.status().as_u16()));
        }
        Ok(resp.json::<T>().await?)
    }

    /// Resolve a free-text place name to a stop-area id.
    ///
    /// Candidates are scanned in upstream order; the first one carrying a
    /// `stop_area` wins. `None` means no candidate had one (empty or absent
    /// list included). Transport failures propagate, they are not retried
    /// here.
    pub async fn resolve_stop_area(&self, name: &str) -> Result<Option<String>, SncfError> {
        let url = format!("{}/places", self.base);
        tracing::debug!(endpoint = %url, q = name, "places lookup");
        let start = Instant::now();
        let res: Result<PlacesWire, SncfError> =
            Self::send_json(self.get(url).query(&[("q", name)])).await;
        if res.is_err() {
            crate::infra::logging::log_metric("places.resolve", "remote_error_total", 1.0);
        }
        let wire = res?;
        let elapsed_ms = start.elapsed().as_millis() as f64;
        crate::infra::logging::log_metric("places.resolve", "remote_latency_ms", elapsed_ms);
        Ok(wire
            .places
            .into_iter()
            .find_map(|p| p.stop_area.map(|s| s.id)))
    }

    /// Query journeys between two resolved stop areas, at most 10 results.
    /// `datetime` is forwarded verbatim as a "depart no earlier than" filter.
    pub async fn journeys(
        &self,
        from_id: &str,
        to_id: &str,
        datetime: Option<&str>,
    ) -> Result<Vec<JourneySummary>, SncfError> {
        let url = format!("{}/journeys", self.base);
        tracing::debug!(endpoint = %url, from = from_id, to = to_id, "journeys query");
        let mut builder = self
            .get(url)
            .query(&[("from", from_id), ("to", to_id), ("count", JOURNEY_COUNT)]);
        if let Some(dt) = datetime {
            builder = builder.query(&[("datetime", dt), ("datetime_represents", "departure")]);
        }
        let start = Instant::now();
        let res: Result<JourneysWire, SncfError> = Self::send_json(builder).await;
        if res.is_err() {
            crate::infra::logging::log_metric("journeys.search", "remote_error_total", 1.0);
        }
        let wire = res?;
        let elapsed_ms = start.elapsed().as_millis() as f64;
        crate::infra::logging::log_metric("journeys.search", "remote_latency_ms", elapsed_ms);
        Ok(wire.journeys.into_iter().map(JourneySummary::from).collect())
    }

    /// Fetch a vehicle journey by id; the upstream JSON is returned verbatim.
    /// The id goes percent-encoded into the path, it contains `:` separators.
    pub async fn vehicle_journey(&self, id: &str) -> Result<JsonValue, SncfError> {
        let mut url = reqwest::Url::parse(&self.base).map_err(|e| SncfError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| SncfError::InvalidUrl("base url cannot carry path segments".into()))?
            .push("vehicle_journeys")
            .push(id);
        tracing::debug!(endpoint = %url, "vehicle journey lookup");
        let start = Instant::now();
        let res: Result<JsonValue, SncfError> = Self::send_json(self.get(url)).await;
        if res.is_err() {
            crate::infra::logging::log_metric("vehicle_journey.get", "remote_error_total", 1.0);
        }
        let payload = res?;
        let elapsed_ms = start.elapsed().as_millis() as f64;
        crate::infra::logging::log_metric("vehicle_journey.get", "remote_latency_ms", elapsed_ms);
        Ok(payload)
    }
}

// --- Wire shapes, private to this client ---

#[derive(Deserialize)]
struct PlacesWire {
    #[serde(default)]
    places: Vec<PlaceWire>,
}

#[derive(Deserialize)]
struct PlaceWire {
    stop_area: Option<StopAreaWire>,
}

#[derive(Deserialize)]
struct StopAreaWire {
    id: String,
}

#[derive(Deserialize)]
struct JourneysWire {
    #[serde(default)]
    journeys: Vec<JourneyWire>,
}

#[derive(Deserialize)]
struct JourneyWire {
    #[serde(default)]
    departure_date_time: String,
    #[serde(default)]
    arrival_date_time: String,
    #[serde(default)]
    duration: i64,
    #[serde(default)]
    nb_transfers: u32,
    #[serde(default)]
    sections: Vec<SectionWire>,
}

#[derive(Deserialize)]
struct SectionWire {
    from: Option<EndpointWire>,
    to: Option<EndpointWire>,
    mode: Option<String>,
    #[serde(default, rename = "type")]
    kind: String,
    #[serde(default)]
    duration: i64,
}

#[derive(Deserialize)]
struct EndpointWire {
    name: Option<String>,
}

impl From<JourneyWire> for JourneySummary {
    fn from(w: JourneyWire) -> Self {
        JourneySummary {
            departure: w.departure_date_time,
            arrival: w.arrival_date_time,
            duration: w.duration,
            nb_transfers: w.nb_transfers,
            sections: w.sections.into_iter().map(SectionSummary::from).collect(),
        }
    }
}

impl From<SectionWire> for SectionSummary {
    fn from(w: SectionWire) -> Self {
        SectionSummary {
            from: w.from.and_then(|e| e.name).unwrap_or_default(),
            to: w.to.and_then(|e| e.name).unwrap_or_default(),
            mode: w.mode,
            kind: w.kind,
            duration: w.duration,
        }
    }
}
