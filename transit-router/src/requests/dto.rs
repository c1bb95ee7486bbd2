//! JSON request and response documents.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalogue::{BusInfo, StopInfo};
use crate::router::{Route, RoutingSettings};

use super::RequestError;

/// A complete input document.
///
/// All sections are optional: a document with only `base_requests` and
/// `routing_settings` describes a network, one with only `stat_requests`
/// is a batch of queries.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Document {
    /// Stops and buses making up the network
    #[serde(default)]
    pub base_requests: Vec<BaseRequest>,

    /// Wait time and velocity; defaults apply when absent
    #[serde(default)]
    pub routing_settings: Option<RoutingSettings>,

    /// Queries to answer
    #[serde(default)]
    pub stat_requests: Vec<StatRequest>,
}

impl Document {
    /// Parse a document from a reader.
    pub fn from_reader(reader: impl Read) -> Result<Self, RequestError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Parse a document from a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RequestError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Routing settings, or the defaults if the document has none.
    pub fn settings(&self) -> RoutingSettings {
        self.routing_settings.unwrap_or_default()
    }
}

/// One element of the network description.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum BaseRequest {
    Stop(StopRequest),
    Bus(BusRequest),
}

/// A stop with measured road distances to its neighbours.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StopRequest {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,

    /// Metres from this stop to each named stop
    #[serde(default)]
    pub road_distances: BTreeMap<String, f64>,
}

/// A bus line as listed by the operator.
///
/// For a line that is not a round trip, `stops` holds only the outbound leg.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BusRequest {
    pub name: String,
    pub stops: Vec<String>,
    #[serde(default)]
    pub is_roundtrip: bool,
}

/// A query with the id to echo back.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatRequest {
    pub id: i64,
    #[serde(flatten)]
    pub query: StatQuery,
}

/// What a stat request asks for.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum StatQuery {
    Bus { name: String },
    Stop { name: String },
    Route { from: String, to: String },
    /// Map rendering and anything else this service does not answer
    #[serde(other)]
    Unsupported,
}

/// Answer to one stat request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatResponse {
    pub request_id: i64,
    #[serde(flatten)]
    pub body: ResponseBody,
}

/// Payload of a [`StatResponse`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Bus(BusInfo),
    Stop(StopInfo),
    Route(Route),
    NotFound { error_message: String },
}

impl ResponseBody {
    pub fn not_found() -> Self {
        ResponseBody::NotFound {
            error_message: "not found".to_string(),
        }
    }
}
