use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};

use crate::core::error::Result;
use crate::core::extractor::{AppForm, IdPath};
use crate::core::session::Session;
use crate::features::auth::guards::RequireAdmin;
use crate::features::employees::dtos::{
    EmployeeForm, EmployeeFormPage, EmployeeIndexPage, EmployeeShowPage, EmployeeView,
};
use crate::features::employees::services::EmployeeService;
use crate::shared::constants::{FLASH_REGISTERED, MSG_CODE_DUPLICATED};
use crate::shared::types::{PageQuery, Paginated};
use crate::shared::views::{render, LayoutContext};

/// GET /employees
pub async fn list_employees(
    RequireAdmin(_admin): RequireAdmin,
    session: Session,
    State(service): State<Arc<EmployeeService>>,
    Query(query): Query<PageQuery>,
) -> Result<Response> {
    let page = query.request();
    let employees = service.list_page(page).await?;
    let total = service.count_all().await?;

    let model = EmployeeIndexPage {
        layout: LayoutContext::consuming_flash(&session),
        employees: Paginated::new(
            employees.into_iter().map(EmployeeView::from).collect(),
            total,
            page,
        ),
    };
    Ok(render("employees/index.html", &model)?.into_response())
}

/// GET /employees/new
pub async fn new_employee(RequireAdmin(_admin): RequireAdmin, session: Session) -> Result<Response> {
    let model = EmployeeFormPage {
        layout: LayoutContext::from_session(&session),
        form: EmployeeForm::default(),
        errors: Vec::new(),
    };
    Ok(render("employees/new.html", &model)?.into_response())
}

/// POST /employees
pub async fn create_employee(
    RequireAdmin(admin): RequireAdmin,
    session: Session,
    State(service): State<Arc<EmployeeService>>,
    AppForm(form): AppForm<EmployeeForm>,
) -> Result<Response> {
    session.require_csrf(&form.token)?;

    let mut errors = form.validation_messages();
    if errors.is_empty() && service.code_exists(&form.code).await? {
        errors.push(MSG_CODE_DUPLICATED.to_string());
    }

    if !errors.is_empty() {
        let model = EmployeeFormPage {
            layout: LayoutContext::from_session(&session),
            form,
            errors,
        };
        return Ok(render("employees/new.html", &model)?.into_response());
    }

    let is_admin = form.is_admin();
    let employee = service
        .register(form.code, form.name, form.password, is_admin)
        .await?;
    tracing::info!("Employee {} registered by {}", employee.code, admin.code);

    session.put_flash(FLASH_REGISTERED);
    Ok(Redirect::to("/employees").into_response())
}

/// GET /employees/{id}
pub async fn show_employee(
    RequireAdmin(_admin): RequireAdmin,
    session: Session,
    State(service): State<Arc<EmployeeService>>,
    IdPath(id): IdPath,
) -> Result<Response> {
    let employee = service.get_by_id(id).await?;

    let model = EmployeeShowPage {
        layout: LayoutContext::from_session(&session),
        employee: employee.into(),
    };
    Ok(render("employees/show.html", &model)?.into_response())
}
