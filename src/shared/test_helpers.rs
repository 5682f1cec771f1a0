use axum::http::header::SET_COOKIE;
use axum::response::IntoResponse;
use axum_extra::extract::cookie::{Key, PrivateCookieJar};
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::session::{SessionData, SessionEmployee, SessionSettings};
use crate::features::reports::models::CreateReport;

pub const TEST_TOKEN: &str = "test-csrf-token";

pub fn session_settings() -> SessionSettings {
    SessionSettings {
        key: Key::generate(),
        cookie_name: "daily_report_session".to_string(),
        secure: false,
    }
}

pub fn session_employee(admin: bool) -> SessionEmployee {
    SessionEmployee {
        id: Uuid::new_v4(),
        code: if admin { "admin" } else { "E0001" }.to_string(),
        name: if admin { "Administrator" } else { "Sato" }.to_string(),
        admin,
    }
}

/// `Cookie` header value carrying the given session record
pub fn session_cookie(settings: &SessionSettings, data: &SessionData) -> String {
    let jar = settings.write(PrivateCookieJar::new(settings.key.clone()), data);
    let response = (jar, ()).into_response();
    response
        .headers()
        .get(SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(str::to_string)
        .unwrap_or_default()
}

/// Cookie for a logged-in session holding [`TEST_TOKEN`]
pub fn login_cookie(settings: &SessionSettings, employee: SessionEmployee) -> String {
    session_cookie(
        settings,
        &SessionData {
            employee: Some(employee),
            csrf_token: Some(TEST_TOKEN.to_string()),
            flash: None,
        },
    )
}

pub async fn insert_employee(pool: &PgPool, code: &str) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO employees (code, name, password) VALUES ($1, $2, 'not-a-hash') RETURNING id",
    )
    .bind(code)
    .bind(format!("Employee {}", code))
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Report data dated on the given day of April 2024
pub fn report_data(author: Uuid, day: u32) -> CreateReport {
    CreateReport {
        employee_id: author,
        report_date: NaiveDate::from_ymd_opt(2024, 4, day).unwrap(),
        title: format!("Report for April {}", day),
        content: "Worked on the backlog.".to_string(),
    }
}

pub async fn insert_report(pool: &PgPool, author: Uuid) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO reports (employee_id, report_date, title, content) VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(author)
    .bind(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap())
    .bind("Report")
    .bind("Content")
    .fetch_one(pool)
    .await
    .unwrap()
}
