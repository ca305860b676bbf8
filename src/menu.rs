use crate::models::{MenuItem, RouteNode};

const EXTERNAL_SCHEMES: &[&str] = &["http:", "https:", "mailto:", "tel:"];

pub fn is_external(path: &str) -> bool {
    EXTERNAL_SCHEMES.iter().any(|scheme| path.starts_with(scheme))
}

/// Joins a child path onto its parent the way the dashboard router does: absolute
/// and external child paths win, empty segments are dropped.
pub fn resolve_path(base: &str, path: &str) -> String {
    if is_external(path) {
        return path.to_string();
    }
    if is_external(base) {
        return base.to_string();
    }
    if path.starts_with('/') {
        return path.to_string();
    }

    let joined = format!("{}/{}", base.trim_end_matches('/'), path);
    let segments: Vec<&str> = joined.split('/').filter(|s| !s.is_empty()).collect();
    format!("/{}", segments.join("/"))
}

/// build_menu
///
/// Builds the sidebar from a route tree. Hidden routes and their subtrees are left
/// out. A section with a single visible leaf child and no `always_show` flag is
/// rendered as that child alone.
pub fn build_menu(routes: &[RouteNode]) -> Vec<MenuItem> {
    build_level(routes, "")
}

fn build_level(routes: &[RouteNode], base: &str) -> Vec<MenuItem> {
    routes
        .iter()
        .filter(|route| !route.hidden)
        .map(|route| build_item(route, base))
        .collect()
}

fn build_item(route: &RouteNode, base: &str) -> MenuItem {
    let path = resolve_path(base, &route.path);
    let showing: Vec<&RouteNode> = route
        .children
        .iter()
        .flatten()
        .filter(|child| !child.hidden)
        .collect();

    match showing.as_slice() {
        [] => leaf(route, path),
        [only] if !route.always_show && !has_showing_children(only) => {
            leaf(only, resolve_path(&path, &only.path))
        }
        _ => {
            let children = showing
                .into_iter()
                .map(|child| build_item(child, &path))
                .collect();
            MenuItem {
                children,
                ..leaf(route, path)
            }
        }
    }
}

fn has_showing_children(route: &RouteNode) -> bool {
    route.children.iter().flatten().any(|child| !child.hidden)
}

fn leaf(route: &RouteNode, path: String) -> MenuItem {
    let meta = route.meta.as_ref();
    MenuItem {
        external: is_external(&path),
        title: meta.map(|m| m.title.clone()).filter(|t| !t.is_empty()),
        icon: meta.and_then(|m| m.icon.clone()),
        children: Vec::new(),
        path,
    }
}
