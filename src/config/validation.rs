//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check that ignored children exist
//! - Check parameterized patterns and navigation defaults
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouterConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::schema::{IgnoreDef, RouteDef, RouterConfig};

/// A semantic problem in a config file. `route` is the dotted key path from
/// the root (`routes.users.user`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{route}: child key must not be empty")]
    EmptyChildKey { route: String },

    #[error("{route}: ignore_children names unknown child '{key}'")]
    UnknownIgnoredChild { route: String, key: String },

    #[error("{route}: parameterized route needs a pattern")]
    EmptyPattern { route: String },

    #[error("{route}: pattern '{pattern}' has no :placeholders")]
    PatternWithoutPlaceholders { route: String, pattern: String },

    #[error("navigation.fallback_path '{0}' must start with '/'")]
    FallbackNotAbsolute(String),

    #[error("observability.log_level '{0}' is not a valid filter")]
    InvalidLogLevel(String),
}

/// Validate a parsed configuration.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    validate_route("routes", &config.routes, &mut errors);

    if !config.navigation.fallback_path.starts_with('/') {
        errors.push(ValidationError::FallbackNotAbsolute(
            config.navigation.fallback_path.clone(),
        ));
    }

    if EnvFilter::try_new(&config.observability.log_level).is_err() {
        errors.push(ValidationError::InvalidLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        for error in &errors {
            tracing::warn!(%error, "Invalid route configuration");
        }
        Err(errors)
    }
}

fn validate_route(route: &str, def: &RouteDef, errors: &mut Vec<ValidationError>) {
    if def.params {
        if def.path.is_empty() {
            errors.push(ValidationError::EmptyPattern {
                route: route.to_string(),
            });
        } else if !def.path.split('/').any(|s| s.starts_with(':')) {
            errors.push(ValidationError::PatternWithoutPlaceholders {
                route: route.to_string(),
                pattern: def.path.clone(),
            });
        }
    }

    if let Some(IgnoreDef::Keys(keys)) = &def.ignore_children {
        for key in keys {
            if !def.children.contains_key(key) {
                errors.push(ValidationError::UnknownIgnoredChild {
                    route: route.to_string(),
                    key: key.clone(),
                });
            }
        }
    }

    for (key, child) in &def.children {
        if key.is_empty() {
            errors.push(ValidationError::EmptyChildKey {
                route: route.to_string(),
            });
            continue;
        }
        validate_route(&format!("{}.{}", route, key), child, errors);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(toml_src: &str) -> RouterConfig {
        toml::from_str(toml_src).unwrap()
    }

    #[test]
    fn test_valid_config() {
        let config = config(
            r#"
            [routes]
            path = "/"
            [routes.children.user]
            path = ":id"
            params = true
            "#,
        );
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let config = config(
            r#"
            [navigation]
            fallback_path = "home"

            [routes]
            path = "/"
            ignore_children = ["missing"]

            [routes.children.user]
            params = true

            [routes.children.team]
            path = "team"
            params = true
            "#,
        );
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&ValidationError::UnknownIgnoredChild {
            route: "routes".into(),
            key: "missing".into()
        }));
        assert!(errors.contains(&ValidationError::EmptyPattern {
            route: "routes.user".into()
        }));
        assert!(errors.contains(&ValidationError::PatternWithoutPlaceholders {
            route: "routes.team".into(),
            pattern: "team".into()
        }));
        assert!(errors.contains(&ValidationError::FallbackNotAbsolute("home".into())));
    }

    #[test]
    fn test_empty_child_key() {
        let config = config(
            r#"
            [routes.children.""]
            path = "x"
            "#,
        );
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::EmptyChildKey {
                route: "routes".into()
            }]
        );
    }

    #[test]
    fn test_error_display() {
        let err = ValidationError::UnknownIgnoredChild {
            route: "routes.users".into(),
            key: "archive".into(),
        };
        assert_eq!(
            err.to_string(),
            "routes.users: ignore_children names unknown child 'archive'"
        );
    }
}
