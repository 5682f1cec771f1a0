//! Cookie-backed session with one-shot flash messages and CSRF tokens.
//!
//! The whole session record is serialized to JSON and stored in an encrypted
//! private cookie. [`session_middleware`] decodes it into a [`Session`] handle
//! in the request extensions and writes it back only if a handler changed it.

use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::{Cookie, Key, PrivateCookieJar, SameSite};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::config::SessionConfig;
use crate::core::error::AppError;

/// The employee a session is logged in as
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionEmployee {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub admin: bool,
}

/// Persisted session record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionData {
    #[serde(default)]
    pub employee: Option<SessionEmployee>,
    #[serde(default)]
    pub csrf_token: Option<String>,
    #[serde(default)]
    pub flash: Option<String>,
}

#[derive(Debug)]
struct SessionInner {
    data: SessionData,
    dirty: bool,
}

/// Per-request handle to the session record
#[derive(Debug, Clone)]
pub struct Session {
    inner: Arc<Mutex<SessionInner>>,
}

fn generate_token() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

impl Session {
    pub fn new(data: SessionData) -> Self {
        Self {
            inner: Arc::new(Mutex::new(SessionInner { data, dirty: false })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionInner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn employee(&self) -> Option<SessionEmployee> {
        self.lock().data.employee.clone()
    }

    /// Store the login employee and rotate the CSRF token
    pub fn login(&self, employee: SessionEmployee) {
        let mut inner = self.lock();
        inner.data.employee = Some(employee);
        inner.data.csrf_token = Some(generate_token());
        inner.dirty = true;
    }

    pub fn logout(&self) {
        let mut inner = self.lock();
        inner.data.employee = None;
        inner.data.csrf_token = Some(generate_token());
        inner.dirty = true;
    }

    /// CSRF token for a form, issued on first use
    pub fn csrf_token(&self) -> String {
        let mut inner = self.lock();
        if let Some(token) = &inner.data.csrf_token {
            return token.clone();
        }
        let token = generate_token();
        inner.data.csrf_token = Some(token.clone());
        inner.dirty = true;
        token
    }

    pub fn verify_csrf(&self, submitted: &str) -> bool {
        match &self.lock().data.csrf_token {
            Some(token) => !submitted.is_empty() && token == submitted,
            None => false,
        }
    }

    /// Fail with [`AppError::InvalidToken`] unless the submitted token matches
    pub fn require_csrf(&self, submitted: &str) -> Result<(), AppError> {
        if self.verify_csrf(submitted) {
            Ok(())
        } else {
            Err(AppError::InvalidToken)
        }
    }

    /// Log out when a write keyed by the login employee hit a missing employee row.
    ///
    /// Any other error is returned unchanged.
    pub fn expire_stale_login(&self, err: AppError) -> AppError {
        match err {
            AppError::Database(sqlx::Error::Database(ref db)) if db.is_foreign_key_violation() => {
                tracing::warn!("Login employee no longer exists: {}", db.message());
                self.logout();
                AppError::Unauthorized("Login employee no longer exists".to_string())
            }
            other => other,
        }
    }

    pub fn put_flash(&self, message: impl Into<String>) {
        let mut inner = self.lock();
        inner.data.flash = Some(message.into());
        inner.dirty = true;
    }

    /// Return the flash message and remove it from the session
    pub fn take_flash(&self) -> Option<String> {
        let mut inner = self.lock();
        let flash = inner.data.flash.take();
        if flash.is_some() {
            inner.dirty = true;
        }
        flash
    }

    /// Snapshot of the record if it changed during the request
    fn changed_data(&self) -> Option<SessionData> {
        let inner = self.lock();
        inner.dirty.then(|| inner.data.clone())
    }
}

/// Cookie settings shared by the session middleware
#[derive(Clone)]
pub struct SessionSettings {
    pub key: Key,
    pub cookie_name: String,
    pub secure: bool,
}

impl SessionSettings {
    pub fn from_config(config: &SessionConfig) -> Self {
        Self {
            key: Key::from(config.secret.as_slice()),
            cookie_name: config.cookie_name.clone(),
            secure: config.secure,
        }
    }

    fn read(&self, jar: &PrivateCookieJar) -> SessionData {
        jar.get(&self.cookie_name)
            .and_then(|cookie| match serde_json::from_str(cookie.value()) {
                Ok(data) => Some(data),
                Err(e) => {
                    tracing::warn!("Discarding unreadable session cookie: {}", e);
                    None
                }
            })
            .unwrap_or_default()
    }

    pub fn write(&self, jar: PrivateCookieJar, data: &SessionData) -> PrivateCookieJar {
        let value = match serde_json::to_string(data) {
            Ok(value) => value,
            Err(e) => {
                tracing::error!("Failed to serialize session: {}", e);
                return jar;
            }
        };
        let cookie = Cookie::build((self.cookie_name.clone(), value))
            .path("/")
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::Lax);
        jar.add(cookie)
    }
}

pub async fn session_middleware(
    State(settings): State<SessionSettings>,
    mut req: Request,
    next: Next,
) -> Response {
    let jar = PrivateCookieJar::from_headers(req.headers(), settings.key.clone());
    let session = Session::new(settings.read(&jar));

    req.extensions_mut().insert(session.clone());
    let response = next.run(req).await;

    match session.changed_data() {
        Some(data) => (settings.write(jar, &data), response).into_response(),
        None => response,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee() -> SessionEmployee {
        SessionEmployee {
            id: Uuid::new_v4(),
            code: "E0001".to_string(),
            name: "Sato".to_string(),
            admin: false,
        }
    }

    #[test]
    fn test_flash_is_consumed_once() {
        let session = Session::new(SessionData::default());
        session.put_flash("Registration completed.");

        assert_eq!(
            session.take_flash().as_deref(),
            Some("Registration completed.")
        );
        assert_eq!(session.take_flash(), None);
    }

    #[test]
    fn test_csrf_token_is_stable_within_session() {
        let session = Session::new(SessionData::default());
        let first = session.csrf_token();
        let second = session.csrf_token();

        assert_eq!(first, second);
        assert_eq!(first.len(), 64);
        assert!(session.verify_csrf(&first));
        assert!(!session.verify_csrf("forged"));
        assert!(!session.verify_csrf(""));
    }

    #[test]
    fn test_verify_without_issued_token_fails() {
        let session = Session::new(SessionData::default());
        assert!(!session.verify_csrf(""));
        assert!(!session.verify_csrf("anything"));
        assert!(matches!(
            session.require_csrf("anything"),
            Err(AppError::InvalidToken)
        ));
    }

    #[test]
    fn test_login_rotates_token() {
        let session = Session::new(SessionData::default());
        let before = session.csrf_token();
        session.login(employee());

        assert!(!session.verify_csrf(&before));
        assert_eq!(session.employee().map(|e| e.code), Some("E0001".into()));

        session.logout();
        assert_eq!(session.employee(), None);
    }

    #[test]
    fn test_expire_stale_login_keeps_other_errors() {
        let session = Session::new(SessionData::default());
        session.login(employee());

        let err = session.expire_stale_login(AppError::NotFound("Report x".to_string()));
        assert!(matches!(err, AppError::NotFound(_)));

        let err = session.expire_stale_login(AppError::Database(sqlx::Error::RowNotFound));
        assert!(matches!(err, AppError::Database(_)));
        assert!(session.employee().is_some());
    }

    #[test]
    fn test_untouched_session_is_not_rewritten() {
        let data = SessionData {
            employee: Some(employee()),
            csrf_token: Some("token".to_string()),
            flash: None,
        };
        let session = Session::new(data.clone());

        assert_eq!(session.employee(), data.employee);
        assert_eq!(session.csrf_token(), "token");
        assert!(session.take_flash().is_none());
        assert!(session.changed_data().is_none());

        session.put_flash("Logged in.");
        assert!(session.changed_data().is_some());
    }

    #[test]
    fn test_cookie_round_trip() {
        let settings = SessionSettings {
            key: Key::generate(),
            cookie_name: "daily_report_session".to_string(),
            secure: false,
        };
        let data = SessionData {
            employee: Some(employee()),
            csrf_token: Some("token".to_string()),
            flash: Some("Logged in.".to_string()),
        };

        let jar = settings.write(PrivateCookieJar::new(settings.key.clone()), &data);
        assert_eq!(settings.read(&jar), data);
        assert_eq!(
            settings.read(&PrivateCookieJar::new(settings.key.clone())),
            SessionData::default()
        );
    }
}
