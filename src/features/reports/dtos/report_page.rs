use serde::Serialize;
use uuid::Uuid;

use crate::features::likes::dtos::LikeView;
use crate::features::reports::dtos::{ReportForm, ReportView};
use crate::shared::types::Paginated;
use crate::shared::views::LayoutContext;

#[derive(Debug, Serialize)]
pub struct ReportIndexPage {
    #[serde(flatten)]
    pub layout: LayoutContext,
    pub reports: Paginated<ReportView>,
}

/// New and edit forms; `report_id` is set when editing
#[derive(Debug, Serialize)]
pub struct ReportFormPage {
    #[serde(flatten)]
    pub layout: LayoutContext,
    pub report_id: Option<Uuid>,
    pub form: ReportForm,
    pub errors: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ReportShowPage {
    #[serde(flatten)]
    pub layout: LayoutContext,
    pub report: ReportView,
    pub likes: Vec<LikeView>,
    pub is_author: bool,
    pub already_liked: bool,
    pub already_followed: bool,
}

#[derive(Debug, Serialize)]
pub struct ReportLikesPage {
    #[serde(flatten)]
    pub layout: LayoutContext,
    pub report: ReportView,
    pub likes: Paginated<LikeView>,
}

#[derive(Debug, Serialize)]
pub struct TimelinePage {
    #[serde(flatten)]
    pub layout: LayoutContext,
    pub reports: Paginated<ReportView>,
}
