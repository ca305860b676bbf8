use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::{
    components::{ComponentRegistry, resolve_components},
    error::RouteResult,
    models::RouteNode,
    permission::{filter_async_routes, is_admin},
    provider::ProviderState,
    store::RouteStore,
    table::RouteTable,
};

/// RouteGenerator
///
/// Turns a role set into the navigation tree for one principal and commits it to the
/// `RouteStore`. All collaborators are injected, so the same generator drives the
/// HTTP handlers and the tests.
#[derive(Clone)]
pub struct RouteGenerator {
    provider: ProviderState,
    registry: Arc<ComponentRegistry>,
    table: Arc<RouteTable>,
    store: RouteStore,
    max_depth: usize,
}

impl RouteGenerator {
    pub fn new(
        provider: ProviderState,
        registry: Arc<ComponentRegistry>,
        table: Arc<RouteTable>,
        store: RouteStore,
        max_depth: usize,
    ) -> Self {
        Self {
            provider,
            registry,
            table,
            store,
            max_depth,
        }
    }

    pub fn store(&self) -> &RouteStore {
        &self.store
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// generate_routes
    ///
    /// 1. Fetch the dynamic list (a non-success code counts as an empty list).
    /// 2. Use it only when it holds more than one route, else the built-in table.
    /// 3. Resolve components on the chosen tree.
    /// 4. `admin` takes the whole tree; anyone else gets it filtered by role.
    /// 5. Store `constant ++ accessed` and `accessed`.
    ///
    /// The fetch is repeated on every call.
    ///
    /// # Errors
    /// Provider transport failures and resolution failures propagate; the store is
    /// left untouched in both cases.
    #[instrument(skip_all, fields(roles = ?roles))]
    pub async fn generate_routes(&self, roles: &[String]) -> RouteResult<Vec<RouteNode>> {
        let fetched = self.provider.get_routes().await?;
        if !fetched.is_success() {
            warn!(code = fetched.code, "route provider returned no dynamic routes");
        }
        let fetched = fetched.into_routes();

        // A list of zero or one entries is treated as "no usable server data".
        let source = if fetched.len() > 1 {
            info!(count = fetched.len(), "using provider routes");
            fetched
        } else {
            info!(fetched = fetched.len(), "falling back to built-in routes");
            self.table.dynamic.clone()
        };

        let resolved = resolve_components(source, &self.registry, self.max_depth)?;

        let accessed = if is_admin(roles) {
            resolved
        } else {
            filter_async_routes(&resolved, roles)
        };

        let routes = self
            .table
            .constant
            .iter()
            .cloned()
            .chain(accessed.iter().cloned())
            .collect();
        self.store.replace(routes, accessed.clone());

        info!(accessed = accessed.len(), "navigation routes generated");
        Ok(accessed)
    }
}
