use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use ts_rs::TS;
use utoipa::ToSchema;

/// Component string that selects the shared layout shell instead of a view.
pub const LAYOUT: &str = "Layout";

/// Redirect string meaning "this entry is not clickable in the breadcrumb".
pub const NO_REDIRECT: &str = "noRedirect";

/// Envelope code the route provider uses for a successful response.
pub const SUCCESS_CODE: i64 = 20000;

fn is_false(value: &bool) -> bool {
    !*value
}

// --- Renderable References ---

/// View
///
/// A renderable page registered in the `ComponentRegistry`. `module` is the import
/// path the dashboard bundle loads lazily (e.g. `@/views/permission/role`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub key: String,
    pub module: String,
}

/// Component
///
/// The renderable unit a route points at. Route data arrives as plain strings and is
/// held as `Named` until the resolution pass binds it to the layout shell or a
/// registered `View`.
///
/// On the wire a component is always its key string, whether resolved or not, so a
/// resolved tree serialises to the same JSON the provider sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Component {
    /// Unresolved key exactly as received.
    Named(String),
    /// The shared layout shell most sections nest under.
    Layout,
    /// A view bound through the registry.
    View(Arc<View>),
}

impl Component {
    pub fn key(&self) -> &str {
        match self {
            Component::Named(key) => key,
            Component::Layout => LAYOUT,
            Component::View(view) => &view.key,
        }
    }

    pub fn is_resolved(&self) -> bool {
        !matches!(self, Component::Named(_))
    }
}

impl From<String> for Component {
    fn from(key: String) -> Self {
        Component::Named(key)
    }
}

impl From<Component> for String {
    fn from(component: Component) -> Self {
        match component {
            Component::Named(key) => key,
            Component::Layout => LAYOUT.to_string(),
            Component::View(view) => view.key.clone(),
        }
    }
}

/// Redirect
///
/// Where a section sends the browser when its own path is hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Redirect {
    NoRedirect,
    Path(String),
}

impl From<String> for Redirect {
    fn from(value: String) -> Self {
        if value == NO_REDIRECT {
            Redirect::NoRedirect
        } else {
            Redirect::Path(value)
        }
    }
}

impl From<Redirect> for String {
    fn from(redirect: Redirect) -> Self {
        match redirect {
            Redirect::NoRedirect => NO_REDIRECT.to_string(),
            Redirect::Path(path) => path,
        }
    }
}

// --- Route Tree ---

/// RouteMeta
///
/// Display metadata for a route. `roles` is the only field the access filter reads:
/// `None` means every principal may see the entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RouteMeta {
    #[serde(default)]
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,

    // Keep the page instance out of the tag-view cache.
    #[serde(default, skip_serializing_if = "is_false")]
    pub no_cache: bool,

    // Pin the tag in the tag-view bar.
    #[serde(default, skip_serializing_if = "is_false")]
    pub affix: bool,
}

/// RouteNode
///
/// One navigable entry of the dashboard. Nested entries resolve their `path`
/// relative to the parent unless it starts with `/`.
///
/// `children: None` and `children: Some(vec![])` are kept apart on purpose: the
/// filter and the serialiser both preserve whichever one the source data used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RouteNode {
    pub path: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "permission/role")]
    #[ts(type = "string | undefined")]
    pub component: Option<Component>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "noRedirect")]
    #[ts(type = "string | undefined")]
    pub redirect: Option<Redirect>,

    // Routable, but never listed in the sidebar.
    #[serde(default, skip_serializing_if = "is_false")]
    pub hidden: bool,

    // Render as a group even when only one child is visible.
    #[serde(default, skip_serializing_if = "is_false")]
    pub always_show: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<RouteMeta>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(no_recursion)]
    pub children: Option<Vec<RouteNode>>,
}

impl RouteNode {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            component: None,
            name: None,
            redirect: None,
            hidden: false,
            always_show: false,
            meta: None,
            children: None,
        }
    }

    pub fn with_component(mut self, key: impl Into<String>) -> Self {
        self.component = Some(Component::Named(key.into()));
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.meta.get_or_insert_with(RouteMeta::default).title = title.into();
        self
    }

    pub fn with_roles<R: AsRef<str>>(mut self, roles: &[R]) -> Self {
        self.meta.get_or_insert_with(RouteMeta::default).roles =
            Some(roles.iter().map(|r| r.as_ref().to_string()).collect());
        self
    }

    pub fn with_children(mut self, children: Vec<RouteNode>) -> Self {
        self.children = Some(children);
        self
    }

    pub fn mark_hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn mark_always_show(mut self) -> Self {
        self.always_show = true;
        self
    }

    /// Roles this node is restricted to, if any.
    pub fn roles(&self) -> Option<&[String]> {
        self.meta.as_ref()?.roles.as_deref()
    }

    /// Copies every field except `children`, which is replaced by `children`.
    pub fn with_replaced_children(&self, children: Option<Vec<RouteNode>>) -> RouteNode {
        RouteNode {
            path: self.path.clone(),
            component: self.component.clone(),
            name: self.name.clone(),
            redirect: self.redirect.clone(),
            hidden: self.hidden,
            always_show: self.always_show,
            meta: self.meta.clone(),
            children,
        }
    }
}

// --- Wire Envelopes ---

/// ProviderResponse
///
/// The `{ code, data }` envelope served by the route provider. Error envelopes often
/// carry a `message` instead of `data`, so `data` defaults to empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct ProviderResponse {
    pub code: i64,
    #[serde(default)]
    pub data: Vec<RouteNode>,
}

impl ProviderResponse {
    pub fn success(data: Vec<RouteNode>) -> Self {
        Self {
            code: SUCCESS_CODE,
            data,
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }

    /// The dynamic route list, or nothing when the provider reported a failure code.
    pub fn into_routes(self) -> Vec<RouteNode> {
        if self.is_success() {
            self.data
        } else {
            Vec::new()
        }
    }
}

/// GenerateRoutesRequest
///
/// Input payload for POST /routes/generate. Roles are taken at face value: this
/// service only shapes navigation and performs no authorization of its own.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct GenerateRoutesRequest {
    pub roles: Vec<String>,
}

/// RouteCollection
///
/// The navigation state handed to the dashboard. `routes` is the constant table followed
/// by `add_routes`; `add_routes` alone is what the router registers dynamically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RouteCollection {
    pub routes: Vec<RouteNode>,
    pub add_routes: Vec<RouteNode>,
    #[ts(type = "string | null")]
    pub generated_at: Option<DateTime<Utc>>,
}

// --- Navigation Output ---

/// MenuItem
///
/// A sidebar entry derived from the stored route tree, with its path fully resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct MenuItem {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// True for links that leave the dashboard (http, mailto, tel).
    pub external: bool,
    #[schema(no_recursion)]
    pub children: Vec<MenuItem>,
}
