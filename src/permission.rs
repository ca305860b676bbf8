use crate::models::RouteNode;

/// Role that sees every conditional route without filtering.
pub const ADMIN_ROLE: &str = "admin";

/// has_permission
///
/// A route without `meta.roles` is visible to everyone. Otherwise at least one of
/// `roles` must appear in the route's role list.
pub fn has_permission<R: AsRef<str>>(roles: &[R], route: &RouteNode) -> bool {
    match route.roles() {
        Some(allowed) => roles
            .iter()
            .any(|role| allowed.iter().any(|a| a == role.as_ref())),
        None => true,
    }
}

/// filter_async_routes
///
/// Prunes `routes` to the entries `roles` may see, recursing into the children of
/// every retained node. A rejected node takes its whole subtree with it.
///
/// The input is left untouched. Retained nodes are copies with only `children`
/// rebuilt, and a node without a `children` field still has none afterwards.
pub fn filter_async_routes<R: AsRef<str>>(routes: &[RouteNode], roles: &[R]) -> Vec<RouteNode> {
    routes
        .iter()
        .filter(|route| has_permission(roles, route))
        .map(|route| {
            let children = route
                .children
                .as_ref()
                .map(|children| filter_async_routes(children, roles));
            route.with_replaced_children(children)
        })
        .collect()
}

pub fn is_admin<R: AsRef<str>>(roles: &[R]) -> bool {
    roles.iter().any(|role| role.as_ref() == ADMIN_ROLE)
}
