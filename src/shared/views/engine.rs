//! View engine for rendering HTML pages using Jinja2 syntax.
//!
//! Templates live in `templates/views/` and are compiled into the binary, so
//! the server does not depend on its working directory at runtime.

use minijinja::{Environment, Value};
use serde::Serialize;
use std::sync::OnceLock;
use thiserror::Error;

/// Global template environment
static VIEW_ENV: OnceLock<Environment<'static>> = OnceLock::new();

/// Every view template, keyed by the name handlers render it under
const TEMPLATES: &[(&str, &str)] = &[
    (
        "layout.html",
        include_str!("../../../templates/views/layout.html"),
    ),
    (
        "_pagination.html",
        include_str!("../../../templates/views/_pagination.html"),
    ),
    (
        "auth/login.html",
        include_str!("../../../templates/views/auth/login.html"),
    ),
    (
        "reports/index.html",
        include_str!("../../../templates/views/reports/index.html"),
    ),
    (
        "reports/_list.html",
        include_str!("../../../templates/views/reports/_list.html"),
    ),
    (
        "reports/_form.html",
        include_str!("../../../templates/views/reports/_form.html"),
    ),
    (
        "reports/new.html",
        include_str!("../../../templates/views/reports/new.html"),
    ),
    (
        "reports/edit.html",
        include_str!("../../../templates/views/reports/edit.html"),
    ),
    (
        "reports/show.html",
        include_str!("../../../templates/views/reports/show.html"),
    ),
    (
        "reports/likes.html",
        include_str!("../../../templates/views/reports/likes.html"),
    ),
    (
        "reports/timeline.html",
        include_str!("../../../templates/views/reports/timeline.html"),
    ),
    (
        "employees/index.html",
        include_str!("../../../templates/views/employees/index.html"),
    ),
    (
        "employees/new.html",
        include_str!("../../../templates/views/employees/new.html"),
    ),
    (
        "employees/show.html",
        include_str!("../../../templates/views/employees/show.html"),
    ),
    (
        "error/unknown.html",
        include_str!("../../../templates/views/error/unknown.html"),
    ),
];

/// Errors that can occur during template operations
#[derive(Debug, Error)]
pub enum ViewError {
    #[error("Template '{0}' not found")]
    NotFound(String),

    #[error("Failed to render template: {0}")]
    RenderError(String),
}

fn init_environment() -> Environment<'static> {
    let mut env = Environment::new();

    for &(name, source) in TEMPLATES {
        if let Err(e) = env.add_template(name, source) {
            tracing::warn!("Failed to load template {}: {}", name, e);
        } else {
            tracing::debug!("Loaded template: {}", name);
        }
    }

    env
}

/// Get the global template environment
fn get_environment() -> &'static Environment<'static> {
    VIEW_ENV.get_or_init(init_environment)
}

/// Render a view template with a typed page model.
///
/// # Example
/// ```ignore
/// let html = render_view("reports/index.html", &page)?;
/// ```
pub fn render_view<T: Serialize>(template_name: &str, model: &T) -> Result<String, ViewError> {
    let template = get_environment()
        .get_template(template_name)
        .map_err(|_| ViewError::NotFound(template_name.to_string()))?;

    template
        .render(Value::from_serialize(model))
        .map_err(|e| ViewError::RenderError(e.to_string()))
}

#[cfg(test)]
fn template_exists(template_name: &str) -> bool {
    get_environment().get_template(template_name).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_template_compiles() {
        for &(name, _) in TEMPLATES {
            assert!(template_exists(name), "template {} failed to load", name);
        }
    }

    #[test]
    fn test_missing_template() {
        assert!(!template_exists("definitely_not_a_real_template.html"));
        let result = render_view("definitely_not_a_real_template.html", &());
        assert!(matches!(result, Err(ViewError::NotFound(_))));
    }
}
