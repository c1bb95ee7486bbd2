//! A loaded transit network: catalogue and router built together.

use std::path::Path;

use tracing::debug;

use crate::catalogue::{BusInfo, StopInfo, TransportCatalogue};
use crate::requests::{BaseRequest, Document, RequestError, fill_catalogue};
use crate::router::{Route, RoutingSettings, TransportRouter};

/// An immutable snapshot of the network.
///
/// The router is built from the catalogue it sits next to, so the two always
/// agree. To change either, build a new `Network`.
#[derive(Debug, Clone, Default)]
pub struct Network {
    catalogue: TransportCatalogue,
    router: TransportRouter,
}

impl Network {
    /// A network with no stops; every query misses.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load base requests and build the router over them.
    pub fn build(
        base_requests: &[BaseRequest],
        settings: RoutingSettings,
    ) -> Result<Self, RequestError> {
        settings.validate()?;
        let catalogue = fill_catalogue(base_requests)?;
        let router = TransportRouter::build(&catalogue, settings)?;

        debug!(
            stops = catalogue.stop_count(),
            buses = catalogue.bus_count(),
            vertices = router.graph().graph().vertex_count(),
            edges = router.graph().graph().edge_count(),
            "network built"
        );
        Ok(Self { catalogue, router })
    }

    /// Build from the network sections of a document.
    pub fn from_document(document: &Document) -> Result<Self, RequestError> {
        Self::build(&document.base_requests, document.settings())
    }

    /// Read a document from disk and build from it.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RequestError> {
        Self::from_document(&Document::from_path(path)?)
    }

    pub fn catalogue(&self) -> &TransportCatalogue {
        &self.catalogue
    }

    pub fn router(&self) -> &TransportRouter {
        &self.router
    }

    pub fn settings(&self) -> &RoutingSettings {
        self.router.settings()
    }

    pub fn bus_info(&self, name: &str) -> Option<BusInfo> {
        self.catalogue.bus_info(name)
    }

    pub fn stop_info(&self, name: &str) -> Option<StopInfo> {
        self.catalogue.stop_info(name)
    }

    pub fn route(&self, from: &str, to: &str) -> Option<Route> {
        self.router.route(from, to)
    }
}
