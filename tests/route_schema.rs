//! Route tree integration tests: path tables and render trees.

use route_schema::routing::{resolve_all, resolve_paths, PathEntry, RouteConfig, RouteObject, RouteSchema};
use route_schema::config::parse_config;
use serde_json::json;

mod common;

#[test]
fn test_root_stringifies_to_resolved_root_path() {
    assert_eq!(common::app_schema().paths().to_string(), "/");
    assert_eq!(RouteSchema::new(RouteConfig::default()).paths().to_string(), "");
    assert_eq!(RouteSchema::new(RouteConfig::new("app")).paths().to_string(), "/app");
}

#[test]
fn test_parent_child_example() {
    let schema = RouteSchema::new(
        RouteConfig::new("/parent")
            .element("Parent")
            .child("child", RouteConfig::new("child").element("Child")),
    );
    let paths = schema.paths();
    assert_eq!(paths.to_string(), "/parent");
    assert_eq!(paths.child("child").unwrap().to_string(), "/parent/child");
}

#[test]
fn test_users_param_example() {
    let schema = RouteSchema::new(
        RouteConfig::new("/users").child("user", RouteConfig::param_with(":id", |p| p[0].to_string())),
    );
    let user = schema.paths().with("user", &["123"]).unwrap();
    assert_eq!(user.to_string(), "/users/123");
}

#[test]
fn test_nested_under_param() {
    let paths = common::app_schema().paths();
    let user = paths.child("users").unwrap().with("user", &["7"]).unwrap();
    assert_eq!(user.child("settings").unwrap().to_string(), "/users/7/settings");
}

#[test]
fn test_param_calls_are_independent() {
    let paths = common::app_schema().paths();
    let users = paths.child("users").unwrap();
    let first = users.with("user", &["1"]).unwrap();
    let second = users.with("user", &["2"]).unwrap();

    assert_eq!(first.to_string(), resolve_paths("/users", "1"));
    assert_eq!(second.to_string(), resolve_paths("/users", "2"));
    assert_eq!(first.child("settings").unwrap().as_str(), "/users/1/settings");
    assert_eq!(second.child("settings").unwrap().as_str(), "/users/2/settings");
}

#[test]
fn test_absolute_child_escapes_ancestors() {
    let paths = common::app_schema().paths();
    assert_eq!(paths.at(&["users", "login"]).unwrap().as_str(), "/login");
}

#[test]
fn test_ignored_children_keep_their_paths() {
    let schema = common::app_schema();
    assert_eq!(schema.paths().at(&["reports", "daily"]).unwrap().as_str(), "/reports/daily");

    let tree = schema.render_tree();
    let children = tree.children.unwrap();
    assert!(children.iter().all(|c| c.path.as_deref() != Some("reports")));
}

#[test]
fn test_getter_entry_is_not_a_table() {
    let paths = common::app_schema().paths();
    let users = paths.child("users").unwrap();
    assert!(matches!(users.get("user"), Some(PathEntry::Getter(_))));
    assert!(matches!(users.get("login"), Some(PathEntry::Table(_))));
}

#[test]
fn test_resolution_associativity() {
    let segments = ["/a", "b", "c/d", "", "e"];
    for a in segments {
        for b in segments {
            for c in segments {
                // An empty middle segment turns `c` absolute on the right side.
                if b.is_empty() || b.starts_with('/') || c.starts_with('/') {
                    continue;
                }
                assert_eq!(
                    resolve_paths(&resolve_paths(a, b), c),
                    resolve_paths(a, &resolve_paths(b, c)),
                    "resolve({a:?}, {b:?}, {c:?})"
                );
            }
        }
    }
    assert_eq!(resolve_all(&["/x", "y", "/z", "w"]), "/z/w");
}

#[test]
fn test_app_render_tree() {
    let tree = common::app_schema().render_tree();
    let json = serde_json::to_value(&tree).unwrap();
    assert_eq!(
        json,
        json!({
            "path": "/",
            "element": "Layout",
            "children": [
                {
                    "path": "users",
                    "element": "Users",
                    "children": [
                        { "path": "/login", "element": "Login" },
                        {
                            "path": ":id",
                            "element": "User",
                            "children": [
                                { "path": "settings", "element": "Settings" }
                            ]
                        }
                    ]
                },
                { "index": true, "element": "Home" }
            ]
        })
    );
}

#[test]
fn test_render_tree_is_idempotent() {
    let schema = common::app_schema();
    assert_eq!(schema.render_tree(), schema.render_tree());
}

#[test]
fn test_index_only_yields_single_index_child() {
    let tree = RouteSchema::new(RouteConfig::new("/dashboard").index("Overview")).render_tree();
    assert_eq!(tree.children, Some(vec![RouteObject::index_entry("Overview")]));
}

#[test]
fn test_schema_from_toml() {
    let config = parse_config(
        r#"
        [routes]
        path = "/"
        element = "Layout"

        [routes.children.repo]
        path = ":org/:repo"
        params = true
        element = "Repo"
        handle = { crumb = "Repository" }

        [routes.children.repo.children.issues]
        path = "issues"
        element = "Issues"
        case_sensitive = true
        "#,
    )
    .unwrap();

    let schema = config.schema();
    let issues = schema
        .paths()
        .href(&["repo", "issues"], &["rust-lang", "rust"])
        .unwrap();
    assert_eq!(issues.as_str(), "/rust-lang/rust/issues");

    let tree = schema.render_tree();
    let repo = &tree.children.as_ref().unwrap()[0];
    assert_eq!(repo.path.as_deref(), Some(":org/:repo"));
    assert_eq!(repo.handle, Some(json!({ "crumb": "Repository" })));
    assert_eq!(repo.children.as_ref().unwrap()[0].case_sensitive, Some(true));
}
