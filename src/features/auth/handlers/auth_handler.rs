use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
};

use crate::core::error::Result;
use crate::core::extractor::AppForm;
use crate::core::session::{Session, SessionEmployee};
use crate::features::auth::dtos::{LoginForm, LoginPage};
use crate::features::auth::services::AuthService;
use crate::shared::constants::{FLASH_LOGGED_IN, FLASH_LOGGED_OUT, MSG_LOGIN_FAILED};
use crate::shared::types::TokenForm;
use crate::shared::views::{render, LayoutContext};

/// GET /login
pub async fn login_form(session: Session) -> Result<Response> {
    if session.employee().is_some() {
        return Ok(Redirect::to("/reports").into_response());
    }

    let model = LoginPage {
        layout: LayoutContext::consuming_flash(&session),
        form: LoginForm::default(),
        error: None,
    };
    Ok(render("auth/login.html", &model)?.into_response())
}

/// POST /login
pub async fn login(
    session: Session,
    State(service): State<Arc<AuthService>>,
    AppForm(form): AppForm<LoginForm>,
) -> Result<Response> {
    session.require_csrf(&form.token)?;

    match service.authenticate(&form.code, &form.password).await? {
        Some(employee) => {
            session.login(SessionEmployee::from(&employee));
            session.put_flash(FLASH_LOGGED_IN);
            Ok(Redirect::to("/reports").into_response())
        }
        None => {
            let model = LoginPage {
                layout: LayoutContext::from_session(&session),
                form,
                error: Some(MSG_LOGIN_FAILED.to_string()),
            };
            Ok(render("auth/login.html", &model)?.into_response())
        }
    }
}

/// POST /logout
pub async fn logout(session: Session, AppForm(form): AppForm<TokenForm>) -> Result<Response> {
    session.require_csrf(&form.token)?;

    if let Some(employee) = session.employee() {
        tracing::info!("Employee logged out: code={}", employee.code);
    }
    session.logout();
    session.put_flash(FLASH_LOGGED_OUT);
    Ok(Redirect::to("/login").into_response())
}
