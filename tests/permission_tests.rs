use admin_routes::{
    RouteTable, filter_async_routes, has_permission,
    models::RouteNode,
    permission::is_admin,
};

// --- Fixtures ---

fn permission_section() -> RouteNode {
    RouteNode::new("/permission")
        .with_component("Layout")
        .with_roles(&["admin"])
        .with_children(vec![
            RouteNode::new("page").with_name("PagePermission").with_roles(&["admin"]),
            RouteNode::new("directive").with_name("DirectivePermission"),
            RouteNode::new("role").with_name("RolePermission").with_roles(&["admin"]),
        ])
}

fn mixed_tree() -> Vec<RouteNode> {
    vec![
        RouteNode::new("/icon")
            .with_component("Layout")
            .with_children(vec![RouteNode::new("index").with_name("Icons")]),
        RouteNode::new("/editor-only").with_roles(&["editor"]),
        RouteNode::new("/shared")
            .with_roles(&["admin", "editor"])
            .with_children(vec![
                RouteNode::new("a").with_roles(&["admin"]),
                RouteNode::new("b").with_roles(&["editor"]),
                RouteNode::new("c"),
            ]),
        RouteNode::new("/admin-only").with_roles(&["admin"]),
        RouteNode::new("/empty-children").with_children(vec![]),
    ]
}

fn paths(routes: &[RouteNode]) -> Vec<&str> {
    routes.iter().map(|r| r.path.as_str()).collect()
}

// --- has_permission ---

#[test]
fn test_unrestricted_route_visible_to_everyone() {
    let route = RouteNode::new("/open");
    assert!(has_permission(&["editor"], &route));
    assert!(has_permission::<&str>(&[], &route));
}

#[test]
fn test_restricted_route_requires_a_shared_role() {
    let route = RouteNode::new("/admin").with_roles(&["admin"]);
    assert!(!has_permission(&["editor"], &route));
    assert!(has_permission(&["admin"], &route));
    assert!(has_permission(&["editor", "admin"], &route));
}

#[test]
fn test_empty_roles_denied_on_restricted_route() {
    let route = RouteNode::new("/admin").with_roles(&["admin", "editor"]);
    assert!(!has_permission::<&str>(&[], &route));
}

#[test]
fn test_meta_without_roles_is_unrestricted() {
    let route = RouteNode::new("/titled").with_title("Titled");
    assert!(route.meta.is_some());
    assert!(has_permission(&["nobody"], &route));
}

// --- filter_async_routes ---

#[test]
fn test_filter_preserves_sibling_order_and_never_grows() {
    let routes = mixed_tree();
    let filtered = filter_async_routes(&routes, &["editor"]);

    assert!(filtered.len() <= routes.len());
    assert_eq!(
        paths(&filtered),
        vec!["/icon", "/editor-only", "/shared", "/empty-children"]
    );
}

#[test]
fn test_filter_recurses_into_children() {
    let filtered = filter_async_routes(&mixed_tree(), &["editor"]);
    let shared = filtered.iter().find(|r| r.path == "/shared").unwrap();

    let children = shared.children.as_ref().unwrap();
    assert_eq!(paths(children), vec!["b", "c"]);
}

#[test]
fn test_excluded_parent_drops_whole_subtree() {
    let filtered = filter_async_routes(&[permission_section()], &["editor"]);
    // The unrestricted "directive" child goes with its parent.
    assert!(filtered.is_empty());
}

#[test]
fn test_admin_sees_permission_section() {
    let filtered = filter_async_routes(&[permission_section()], &["admin"]);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].children.as_ref().unwrap().len(), 3);
}

#[test]
fn test_children_field_shape_is_preserved() {
    let filtered = filter_async_routes(&mixed_tree(), &["editor"]);

    let leaf = filtered.iter().find(|r| r.path == "/editor-only").unwrap();
    assert!(leaf.children.is_none());

    let empty = filtered.iter().find(|r| r.path == "/empty-children").unwrap();
    assert_eq!(empty.children, Some(vec![]));
}

#[test]
fn test_filter_does_not_mutate_input() {
    let routes = mixed_tree();
    let before = routes.clone();
    let _ = filter_async_routes(&routes, &["nobody"]);
    assert_eq!(routes, before);
}

#[test]
fn test_empty_roles_keep_only_unrestricted_nodes() {
    let filtered = filter_async_routes::<&str>(&mixed_tree(), &[]);
    assert_eq!(paths(&filtered), vec!["/icon", "/empty-children"]);
}

#[test]
fn test_filter_is_idempotent() {
    let routes = mixed_tree();
    for roles in [vec!["admin"], vec!["editor"], vec![], vec!["editor", "admin"]] {
        let once = filter_async_routes(&routes, &roles);
        let twice = filter_async_routes(&once, &roles);
        assert_eq!(once, twice, "roles {:?}", roles);
    }
}

#[test]
fn test_builtin_table_for_editor() {
    let table = RouteTable::builtin().unwrap();
    let filtered = filter_async_routes(&table.dynamic, &["editor"]);

    // Every section except Permission's admin-only pages is unrestricted.
    assert_eq!(filtered.len(), table.dynamic.len());
    let permission = filtered.iter().find(|r| r.path == "/permission").unwrap();
    let names: Vec<_> = permission
        .children
        .as_ref()
        .unwrap()
        .iter()
        .filter_map(|c| c.name.as_deref())
        .collect();
    assert_eq!(names, vec!["DirectivePermission"]);
}

#[test]
fn test_builtin_table_for_unknown_role_drops_permission_section() {
    let table = RouteTable::builtin().unwrap();
    let filtered = filter_async_routes(&table.dynamic, &["visitor"]);

    assert_eq!(filtered.len(), table.dynamic.len() - 1);
    assert!(filtered.iter().all(|r| r.path != "/permission"));
}

#[test]
fn test_is_admin() {
    assert!(is_admin(&["editor", "admin"]));
    assert!(!is_admin(&["administrator"]));
    assert!(!is_admin::<&str>(&[]));
}
