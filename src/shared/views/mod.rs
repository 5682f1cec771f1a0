//! HTML view rendering.
//!
//! Handlers build a typed page model and hand it to [`render`]. Every page
//! model embeds a [`LayoutContext`] so the shared layout can show the login
//! employee and the one-shot flash message.

pub mod engine;

pub use engine::{render_view, ViewError};

use axum::response::Html;
use serde::Serialize;

use crate::core::error::Result;
use crate::core::session::{Session, SessionEmployee};

/// Data the shared layout needs on every page
#[derive(Debug, Clone, Default, Serialize)]
pub struct LayoutContext {
    pub login_employee: Option<SessionEmployee>,
    pub flash: Option<String>,
    /// CSRF token for every form on the page
    pub token: String,
}

impl LayoutContext {
    /// Layout data for a page that does not display the flash message
    pub fn from_session(session: &Session) -> Self {
        Self {
            login_employee: session.employee(),
            flash: None,
            token: session.csrf_token(),
        }
    }

    /// Layout data for a page that shows, and thereby consumes, the flash message
    pub fn consuming_flash(session: &Session) -> Self {
        Self {
            login_employee: session.employee(),
            flash: session.take_flash(),
            token: session.csrf_token(),
        }
    }
}

/// Render a page model into an HTML response body
pub fn render<T: Serialize>(template_name: &str, model: &T) -> Result<Html<String>> {
    Ok(Html(render_view(template_name, model)?))
}
