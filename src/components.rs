use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::{
    error::{RouteError, RouteResult},
    models::{Component, LAYOUT, RouteNode, View},
};

/// Every view key the embedded route tables reference.
pub const BUILTIN_VIEWS: &[&str] = &[
    "charts/keyboard",
    "charts/line",
    "charts/mix-chart",
    "clipboard/index",
    "components-demo/avatar-upload",
    "components-demo/back-to-top",
    "components-demo/count-to",
    "components-demo/dnd-list",
    "components-demo/drag-dialog",
    "components-demo/drag-kanban",
    "components-demo/drag-select",
    "components-demo/dropzone",
    "components-demo/json-editor",
    "components-demo/markdown",
    "components-demo/mixin",
    "components-demo/split-pane",
    "components-demo/sticky",
    "components-demo/tinymce",
    "dashboard/index",
    "documentation/index",
    "error-log/index",
    "error-page/401",
    "error-page/404",
    "example/create",
    "example/edit",
    "example/list",
    "excel/export-excel",
    "excel/merge-header",
    "excel/select-excel",
    "excel/upload-excel",
    "guide/index",
    "icons/index",
    "login/auth-redirect",
    "login/index",
    "nested/menu1/index",
    "nested/menu1/menu1-1/index",
    "nested/menu1/menu1-2/index",
    "nested/menu1/menu1-2/menu1-2-1/index",
    "nested/menu1/menu1-2/menu1-2-2/index",
    "nested/menu1/menu1-3/index",
    "nested/menu2/index",
    "pdf/download",
    "pdf/index",
    "permission/directive",
    "permission/page",
    "permission/role",
    "profile/index",
    "redirect/index",
    "tab/index",
    "theme/index",
    "zip/index",
];

/// ComponentRegistry
///
/// Closed mapping from view key to the `View` the dashboard loads for it. Keys are
/// registered up front and the tables are checked against them at startup, so an
/// unknown key in compiled-in data never survives past boot.
#[derive(Debug, Clone)]
pub struct ComponentRegistry {
    views_root: String,
    views: HashMap<String, Arc<View>>,
}

impl ComponentRegistry {
    pub fn new(views_root: impl Into<String>) -> Self {
        Self {
            views_root: views_root.into().trim_end_matches('/').to_string(),
            views: HashMap::new(),
        }
    }

    /// Registry preloaded with `BUILTIN_VIEWS`.
    pub fn builtin(views_root: impl Into<String>) -> Self {
        let mut registry = Self::new(views_root);
        for key in BUILTIN_VIEWS {
            registry.register(*key);
        }
        registry
    }

    /// Registers a view under `key`, replacing any earlier registration.
    pub fn register(&mut self, key: impl Into<String>) -> Arc<View> {
        let key = key.into();
        let view = Arc::new(View {
            module: format!("{}/{}", self.views_root, key),
            key: key.clone(),
        });
        self.views.insert(key, Arc::clone(&view));
        view
    }

    pub fn get(&self, key: &str) -> Option<Arc<View>> {
        self.views.get(key).cloned()
    }

    pub fn contains(&self, key: &str) -> bool {
        key == LAYOUT || self.views.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Maps a component key to the layout shell or a registered view.
    pub fn resolve(&self, key: &str, path: &str) -> RouteResult<Component> {
        if key == LAYOUT {
            return Ok(Component::Layout);
        }

        self.get(key)
            .map(Component::View)
            .ok_or_else(|| RouteError::UnknownComponent {
                key: key.to_string(),
                path: path.to_string(),
            })
    }

    /// Checks that every component key in `routes` is registered.
    pub fn validate(&self, routes: &[RouteNode]) -> RouteResult<()> {
        for route in routes {
            if let Some(component) = &route.component {
                if !self.contains(component.key()) {
                    return Err(RouteError::UnknownComponent {
                        key: component.key().to_string(),
                        path: route.path.clone(),
                    });
                }
            }
            if let Some(children) = &route.children {
                self.validate(children)?;
            }
        }
        Ok(())
    }
}

/// resolve_components
///
/// Binds every component string in `routes` to a renderable reference. Nothing is
/// filtered out: role checks are a separate pass. Components that are already
/// resolved are kept, so running the pass twice is harmless.
///
/// # Errors
/// `UnknownComponent` for keys missing from the registry, `DepthExceeded` when the
/// tree nests deeper than `max_depth` levels.
pub fn resolve_components(
    routes: Vec<RouteNode>,
    registry: &ComponentRegistry,
    max_depth: usize,
) -> RouteResult<Vec<RouteNode>> {
    resolve_level(routes, registry, max_depth, 1)
}

fn resolve_level(
    routes: Vec<RouteNode>,
    registry: &ComponentRegistry,
    max_depth: usize,
    depth: usize,
) -> RouteResult<Vec<RouteNode>> {
    if depth > max_depth {
        return Err(RouteError::DepthExceeded { limit: max_depth });
    }

    routes
        .into_iter()
        .map(|mut route| {
            if let Some(Component::Named(key)) = &route.component {
                let resolved = registry.resolve(key, &route.path)?;
                debug!(path = %route.path, component = %resolved.key(), "resolved component");
                route.component = Some(resolved);
            }

            if let Some(children) = route.children.take() {
                route.children = Some(if children.is_empty() {
                    children
                } else {
                    resolve_level(children, registry, max_depth, depth + 1)?
                });
            }

            Ok(route)
        })
        .collect()
}
