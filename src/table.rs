use tracing::info;

use crate::{
    components::{ComponentRegistry, resolve_components},
    error::RouteResult,
    models::RouteNode,
};

const CONSTANT_ROUTES: &str = include_str!("../data/constant_routes.json");
const ASYNC_ROUTES: &str = include_str!("../data/async_routes.json");

/// RouteTable
///
/// The compiled-in navigation tree. `constant` entries (login, dashboard, error pages)
/// are shown to everyone; `dynamic` entries are the default conditional set used when
/// the route provider has nothing usable.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    pub constant: Vec<RouteNode>,
    pub dynamic: Vec<RouteNode>,
}

impl RouteTable {
    /// Parses the embedded tables. Components are left unresolved.
    pub fn builtin() -> RouteResult<Self> {
        Ok(Self {
            constant: serde_json::from_str(CONSTANT_ROUTES)?,
            dynamic: serde_json::from_str(ASYNC_ROUTES)?,
        })
    }

    /// Checks both tables against `registry` and binds their components.
    pub fn resolve(self, registry: &ComponentRegistry, max_depth: usize) -> RouteResult<Self> {
        registry.validate(&self.constant)?;
        registry.validate(&self.dynamic)?;

        let table = Self {
            constant: resolve_components(self.constant, registry, max_depth)?,
            dynamic: resolve_components(self.dynamic, registry, max_depth)?,
        };

        info!(
            constant = table.constant.len(),
            dynamic = table.dynamic.len(),
            views = registry.len(),
            "route table loaded"
        );

        Ok(table)
    }

    /// Convenience for the common startup path: parse, validate, resolve.
    pub fn load(registry: &ComponentRegistry, max_depth: usize) -> RouteResult<Self> {
        Self::builtin()?.resolve(registry, max_depth)
    }
}
