//! JSON request documents: loading a network and answering stat queries.

mod dto;
mod error;
mod handler;
mod reader;

pub use dto::*;
pub use error::RequestError;
pub use handler::RequestHandler;
pub use reader::fill_catalogue;

use crate::network::Network;

/// Build the network a document describes and answer its stat requests.
pub fn process(document: &Document) -> Result<Vec<StatResponse>, RequestError> {
    let network = Network::from_document(document)?;
    Ok(RequestHandler::new(&network).answer_all(&document.stat_requests))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn out_of_range_settings_are_an_error() {
        let document: Document = serde_json::from_value(json!({
            "routing_settings": {"bus_wait_time": 5, "bus_velocity": 0.06}
        }))
        .unwrap();
        assert!(matches!(process(&document), Err(RequestError::Router(_))));
    }

    #[test]
    fn process_document() {
        let document: Document = serde_json::from_value(json!({
            "base_requests": [
                {"type": "Stop", "name": "A", "latitude": 55.0, "longitude": 37.0,
                 "road_distances": {"B": 1000}},
                {"type": "Stop", "name": "B", "latitude": 55.01, "longitude": 37.0},
                {"type": "Bus", "name": "1", "stops": ["A", "B"], "is_roundtrip": false}
            ],
            "routing_settings": {"bus_wait_time": 3, "bus_velocity": 60},
            "stat_requests": [
                {"id": 1, "type": "Route", "from": "A", "to": "B"},
                {"id": 2, "type": "Map"},
                {"id": 3, "type": "Route", "from": "A", "to": "A"}
            ]
        }))
        .unwrap();

        let responses = process(&document).unwrap();
        assert_eq!(
            serde_json::to_value(&responses).unwrap(),
            json!([
                {"request_id": 1, "total_time": 4.0, "items": [
                    {"type": "Wait", "stop_name": "A", "time": 3.0},
                    {"type": "Bus", "bus": "1", "span_count": 1, "time": 1.0}
                ]},
                {"request_id": 3, "total_time": 0.0, "items": []}
            ])
        );
    }

    #[test]
    fn invalid_network_is_an_error() {
        let document: Document = serde_json::from_value(json!({
            "base_requests": [
                {"type": "Bus", "name": "1", "stops": ["Ghost"], "is_roundtrip": true}
            ]
        }))
        .unwrap();
        assert!(matches!(process(&document), Err(RequestError::Catalogue(_))));
    }
}
