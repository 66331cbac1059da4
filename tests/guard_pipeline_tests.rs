//! End-to-end navigation through the admin guards.

mod common;

use common::*;
use gpui_admin_router::*;

#[test]
fn test_unauthenticated_navigation_lands_on_login_with_redirect() {
    let h = Harness::new();

    let result = h.push("/reports");

    assert_eq!(result.path(), Some("/login?redirect=%2Freports"));
    let current = h.navigator.current();
    assert_eq!(current.name.as_deref(), Some("Login"));
    assert_eq!(current.query.get("redirect"), Some("/reports"));
    assert_eq!(h.users.calls(), 0);
    assert!(!h.store.is_dynamic_added_route());
}

#[test]
fn test_login_redirect_replaces_history() {
    let h = Harness::new();
    h.push("/reports");
    // "/" -> "/login?..." replaced the root entry.
    assert!(!h.navigator.can_go_back());
}

#[test]
fn test_ignore_auth_route_is_reachable_without_token() {
    let h = Harness::new();
    h.table
        .add_route(
            RouteRecord::new("/about")
                .name("About")
                .meta(RouteMeta::new().ignore_auth(true)),
        )
        .unwrap();

    assert_eq!(h.push("/about").path(), Some("/about"));
}

#[test]
fn test_first_authenticated_navigation_installs_routes_once() {
    let h = Harness::new();
    h.log_in();

    let result = h.push("/system/user?tab=active");

    assert_eq!(result.path(), Some("/system/user?tab=active"));
    assert_eq!(h.navigator.current().name.as_deref(), Some("SystemUser"));
    assert!(h.store.is_dynamic_added_route());
    assert_eq!(h.users.calls(), 1);
    assert_eq!(h.menus.calls(), 1);
    assert!(h.table.has_route("ErrorPage"));
    assert_eq!(h.store.menus().len(), 6);

    h.push("/reports");
    h.push("/system/role");
    assert_eq!(h.navigator.current_path(), "/system/role");
    assert!(h.store.is_dynamic_added_route());
    assert_eq!(h.users.calls(), 1);
    assert_eq!(h.menus.calls(), 1);
}

#[test]
fn test_login_page_redirect_query_is_honored_after_install() {
    let h = Harness::new();
    h.push("/reports");
    h.log_in();

    let result = h.push("/dashboard");

    assert_eq!(result.path(), Some("/reports"));
    assert_eq!(h.navigator.current().name.as_deref(), Some("Reports"));
}

#[test]
fn test_parent_route_follows_inferred_redirect() {
    let h = Harness::new();
    h.log_in();
    h.push("/reports");

    let result = h.push("/dashboard");
    assert_eq!(result.path(), Some("/dashboard/console"));
}

#[test]
fn test_unknown_path_after_install_hits_error_page() {
    let h = Harness::new();
    h.log_in();
    h.push("/reports");

    h.push("/does/not/exist");
    let current = h.navigator.current();
    assert_eq!(current.name.as_deref(), Some("ErrorPage"));
    assert_eq!(current.params.get("path").map(String::as_str), Some("does/not/exist"));
}

#[test]
fn test_error_page_right_after_login_goes_home() {
    let h = Harness::new();
    h.log_in();
    h.push("/reports");
    h.push("/login");

    let result = h.push("/nowhere");

    assert_eq!(result.path(), Some("/dashboard/console"));
}

#[test]
fn test_fetch_failure_redirects_to_login_and_allows_retry() {
    let h = Harness::with_menus(CountingMenus::failing());
    h.log_in();

    let result = h.push("/reports");

    assert_eq!(result.path(), Some("/login?redirect=%2Freports"));
    assert!(!h.store.is_dynamic_added_route());
    assert!(h.loading.finished() >= 1);

    h.push("/reports");
    assert_eq!(h.menus.calls(), 2);
}

#[test]
fn test_after_navigation_sets_title() {
    let h = Harness::new();
    h.log_in();
    h.push("/system/role");
    assert_eq!(h.title.get().as_deref(), Some("Roles"));

    h.push("/dashboard/console");
    assert_eq!(h.title.get().as_deref(), Some("Console"));
}

#[test]
fn test_keep_alive_set_has_no_duplicates() {
    let h = Harness::new();
    h.log_in();

    h.push("/system/user");
    h.push("/system/role");
    h.push("/system/user");
    h.push("/dashboard/console");
    h.push("/system/user");

    assert_eq!(
        h.store.keep_alive_components(),
        vec!["SystemUser".to_string(), "DashboardConsole".to_string()]
    );
}

#[test]
fn test_keep_alive_entry_removed_when_route_no_longer_eligible() {
    let h = Harness::new();
    h.log_in();
    h.push("/system/user");
    assert_eq!(h.store.keep_alive_components(), vec!["SystemUser".to_string()]);

    h.table
        .add_route(
            RouteRecord::new("/system").name("System").children(vec![
                RouteRecord::new("/system/user").name("SystemUser"),
            ]),
        )
        .unwrap();
    h.push("/system/user");

    assert!(h.store.keep_alive_components().is_empty());
}

#[test]
fn test_every_started_load_is_finished() {
    let h = Harness::new();
    h.log_in();
    h.push("/reports");
    h.push("/system/user");
    assert!(h.loading.started() > 0);
    assert!(h.loading.finished() >= h.loading.started());
    assert!(!h.loading.is_active());
}

#[test]
fn test_router_errors_are_not_propagated() {
    let h = Harness::new();
    let result = h.push("/nowhere");
    // No token: the guard redirects to login before anything can fail.
    assert!(result.is_success());

    h.guards.on_error(&RouterError::RouteNotFound {
        path: "/x".into(),
    });
}
