use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use chrono::{Local, NaiveDate};

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppForm, IdPath};
use crate::core::session::{Session, SessionEmployee};
use crate::features::followings::FollowingService;
use crate::features::likes::dtos::LikeView;
use crate::features::likes::LikeService;
use crate::features::reports::dtos::{
    ReportForm, ReportFormPage, ReportIndexPage, ReportLikesPage, ReportShowPage, ReportView,
    TimelinePage,
};
use crate::features::reports::models::{CreateReport, UpdateReport};
use crate::features::reports::services::ReportService;
use crate::shared::constants::{
    FLASH_FOLLOWED, FLASH_LIKED, FLASH_REGISTERED, FLASH_UNFOLLOWED, FLASH_UPDATED,
};
use crate::shared::types::{PageQuery, Paginated, TokenForm};
use crate::shared::views::{render, LayoutContext};

/// State for report handlers
#[derive(Clone)]
pub struct ReportState {
    pub report_service: Arc<ReportService>,
    pub like_service: Arc<LikeService>,
    pub following_service: Arc<FollowingService>,
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Load a report the viewer may edit; anyone else sees the unknown-record page
async fn find_own_report(
    state: &ReportState,
    id: uuid::Uuid,
    viewer: &SessionEmployee,
) -> Result<ReportView> {
    let report = ReportView::from(state.report_service.get_by_id(id).await?);
    if !report.is_authored_by(viewer.id) {
        return Err(AppError::Forbidden(format!(
            "Employee {} is not the author of report {}",
            viewer.code, id
        )));
    }
    Ok(report)
}

fn render_form(
    session: &Session,
    template: &str,
    report_id: Option<uuid::Uuid>,
    form: ReportForm,
    errors: Vec<String>,
) -> Result<Response> {
    let model = ReportFormPage {
        layout: LayoutContext::from_session(session),
        report_id,
        form,
        errors,
    };
    Ok(render(template, &model)?.into_response())
}

/// GET /reports
pub async fn list_reports(
    session: Session,
    State(state): State<ReportState>,
    Query(query): Query<PageQuery>,
) -> Result<Response> {
    let page = query.request();
    let reports = state.report_service.list_page(page).await?;
    let total = state.report_service.count_all().await?;

    let model = ReportIndexPage {
        layout: LayoutContext::consuming_flash(&session),
        reports: Paginated::new(
            reports.into_iter().map(ReportView::from).collect(),
            total,
            page,
        ),
    };
    Ok(render("reports/index.html", &model)?.into_response())
}

/// GET /reports/new
pub async fn new_report(session: Session) -> Result<Response> {
    render_form(
        &session,
        "reports/new.html",
        None,
        ReportForm::dated(today()),
        Vec::new(),
    )
}

/// POST /reports
pub async fn create_report(
    viewer: SessionEmployee,
    session: Session,
    State(state): State<ReportState>,
    AppForm(form): AppForm<ReportForm>,
) -> Result<Response> {
    session.require_csrf(&form.token)?;

    let errors = form.validation_messages();
    if !errors.is_empty() {
        return render_form(&session, "reports/new.html", None, form, errors);
    }

    let data = CreateReport {
        employee_id: viewer.id,
        report_date: form.parsed_date().unwrap_or_else(today),
        title: form.title,
        content: form.content,
    };
    state
        .report_service
        .create(data)
        .await
        .map_err(|e| session.expire_stale_login(e))?;

    session.put_flash(FLASH_REGISTERED);
    Ok(Redirect::to("/reports").into_response())
}

/// GET /reports/{id}
pub async fn show_report(
    viewer: SessionEmployee,
    session: Session,
    State(state): State<ReportState>,
    IdPath(id): IdPath,
) -> Result<Response> {
    let report = ReportView::from(state.report_service.get_by_id(id).await?);
    let likes = state.like_service.list_all_for_report(report.id).await?;
    let already_liked = state.like_service.exists(report.id, viewer.id).await?;
    let already_followed = state
        .following_service
        .is_following(viewer.id, report.employee.id)
        .await?;

    let model = ReportShowPage {
        layout: LayoutContext::from_session(&session),
        is_author: report.is_authored_by(viewer.id),
        report,
        likes: likes.into_iter().map(LikeView::from).collect(),
        already_liked,
        already_followed,
    };
    Ok(render("reports/show.html", &model)?.into_response())
}

/// GET /reports/{id}/edit
pub async fn edit_report(
    viewer: SessionEmployee,
    session: Session,
    State(state): State<ReportState>,
    IdPath(id): IdPath,
) -> Result<Response> {
    let report = find_own_report(&state, id, &viewer).await?;
    render_form(
        &session,
        "reports/edit.html",
        Some(report.id),
        ReportForm::from_report(&report),
        Vec::new(),
    )
}

/// POST /reports/{id}
pub async fn update_report(
    viewer: SessionEmployee,
    session: Session,
    State(state): State<ReportState>,
    IdPath(id): IdPath,
    AppForm(form): AppForm<ReportForm>,
) -> Result<Response> {
    session.require_csrf(&form.token)?;
    let report = find_own_report(&state, id, &viewer).await?;

    let errors = form.validation_messages();
    if !errors.is_empty() {
        return render_form(&session, "reports/edit.html", Some(report.id), form, errors);
    }

    let data = UpdateReport {
        report_date: form.parsed_date().unwrap_or(report.report_date),
        title: form.title,
        content: form.content,
    };
    state.report_service.update(report.id, data).await?;

    session.put_flash(FLASH_UPDATED);
    Ok(Redirect::to("/reports").into_response())
}

/// POST /reports/{id}/like
pub async fn like_report(
    viewer: SessionEmployee,
    session: Session,
    State(state): State<ReportState>,
    IdPath(id): IdPath,
    AppForm(form): AppForm<TokenForm>,
) -> Result<Response> {
    session.require_csrf(&form.token)?;

    state
        .like_service
        .create(id, viewer.id)
        .await
        .map_err(|e| session.expire_stale_login(e))?;

    session.put_flash(FLASH_LIKED);
    Ok(Redirect::to("/reports").into_response())
}

/// GET /reports/{id}/likes
pub async fn show_likes(
    session: Session,
    State(state): State<ReportState>,
    IdPath(id): IdPath,
    Query(query): Query<PageQuery>,
) -> Result<Response> {
    let report = ReportView::from(state.report_service.get_by_id(id).await?);
    let page = query.request();
    let likes = state.like_service.list_page_for_report(report.id, page).await?;
    let total = state.like_service.count_for_report(report.id).await?;

    let model = ReportLikesPage {
        layout: LayoutContext::from_session(&session),
        report,
        likes: Paginated::new(likes.into_iter().map(LikeView::from).collect(), total, page),
    };
    Ok(render("reports/likes.html", &model)?.into_response())
}

/// POST /reports/{id}/follow
pub async fn follow_author(
    viewer: SessionEmployee,
    session: Session,
    State(state): State<ReportState>,
    IdPath(id): IdPath,
    AppForm(form): AppForm<TokenForm>,
) -> Result<Response> {
    session.require_csrf(&form.token)?;

    let report = ReportView::from(state.report_service.get_by_id(id).await?);
    if report.is_authored_by(viewer.id) {
        return Err(AppError::Forbidden(format!(
            "Employee {} cannot follow themselves",
            viewer.code
        )));
    }

    state
        .following_service
        .create(viewer.id, report.employee.id)
        .await
        .map_err(|e| session.expire_stale_login(e))?;

    session.put_flash(FLASH_FOLLOWED);
    Ok(Redirect::to("/timeline").into_response())
}

/// POST /reports/{id}/unfollow
pub async fn unfollow_author(
    viewer: SessionEmployee,
    session: Session,
    State(state): State<ReportState>,
    IdPath(id): IdPath,
    AppForm(form): AppForm<TokenForm>,
) -> Result<Response> {
    session.require_csrf(&form.token)?;

    let report = ReportView::from(state.report_service.get_by_id(id).await?);
    let removed = state
        .following_service
        .unfollow(viewer.id, report.employee.id)
        .await?;
    tracing::debug!("Removed {} following rows", removed);

    session.put_flash(FLASH_UNFOLLOWED);
    Ok(Redirect::to("/timeline").into_response())
}

/// GET /timeline
pub async fn show_timeline(
    viewer: SessionEmployee,
    session: Session,
    State(state): State<ReportState>,
    Query(query): Query<PageQuery>,
) -> Result<Response> {
    let page = query.request();
    let reports = state
        .report_service
        .list_timeline_page(viewer.id, page)
        .await?;
    let total = state.report_service.count_timeline(viewer.id).await?;

    let model = TimelinePage {
        layout: LayoutContext::consuming_flash(&session),
        reports: Paginated::new(
            reports.into_iter().map(ReportView::from).collect(),
            total,
            page,
        ),
    };
    Ok(render("reports/timeline.html", &model)?.into_response())
}
