use chrono::Utc;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::models::{RouteCollection, RouteNode};

/// RouteStore
///
/// Shared handle to the current `RouteCollection`. The application owns one and
/// injects clones of it wherever navigation state is read or regenerated.
///
/// `replace` is the only mutation. Callers build the new trees before calling it, so
/// two overlapping generations end in whichever wrote last, never in a mix of both.
#[derive(Debug, Clone, Default)]
pub struct RouteStore {
    inner: Arc<RwLock<RouteCollection>>,
}

impl RouteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swaps in a freshly generated route set.
    pub fn replace(&self, routes: Vec<RouteNode>, add_routes: Vec<RouteNode>) {
        let mut collection = self.inner.write();
        collection.routes = routes;
        collection.add_routes = add_routes;
        collection.generated_at = Some(Utc::now());
    }

    pub fn snapshot(&self) -> RouteCollection {
        self.inner.read().clone()
    }

    pub fn routes(&self) -> Vec<RouteNode> {
        self.inner.read().routes.clone()
    }

    pub fn add_routes(&self) -> Vec<RouteNode> {
        self.inner.read().add_routes.clone()
    }

    /// Whether a generation has already produced dynamic routes.
    pub fn is_generated(&self) -> bool {
        !self.inner.read().add_routes.is_empty()
    }
}
