//! Answering stat requests against a network.

use tracing::warn;

use crate::network::Network;

use super::dto::{ResponseBody, StatQuery, StatRequest, StatResponse};

/// Answers stat requests from a borrowed network.
#[derive(Debug, Clone, Copy)]
pub struct RequestHandler<'a> {
    network: &'a Network,
}

impl<'a> RequestHandler<'a> {
    pub fn new(network: &'a Network) -> Self {
        Self { network }
    }

    /// Answer one request. Unsupported request types yield `None`.
    pub fn answer(&self, request: &StatRequest) -> Option<StatResponse> {
        let body = match &request.query {
            StatQuery::Bus { name } => self.network.bus_info(name).map(ResponseBody::Bus),
            StatQuery::Stop { name } => self.network.stop_info(name).map(ResponseBody::Stop),
            StatQuery::Route { from, to } => {
                self.network.route(from, to).map(ResponseBody::Route)
            }
            StatQuery::Unsupported => {
                warn!(request_id = request.id, "skipping unsupported stat request");
                return None;
            }
        };

        Some(StatResponse {
            request_id: request.id,
            body: body.unwrap_or_else(ResponseBody::not_found),
        })
    }

    /// Answer requests in order, skipping unsupported ones.
    pub fn answer_all(&self, requests: &[StatRequest]) -> Vec<StatResponse> {
        requests.iter().filter_map(|r| self.answer(r)).collect()
    }
}
