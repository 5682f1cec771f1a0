use serde::Serialize;

use crate::features::employees::dtos::{EmployeeForm, EmployeeView};
use crate::shared::types::Paginated;
use crate::shared::views::LayoutContext;

#[derive(Debug, Serialize)]
pub struct EmployeeIndexPage {
    #[serde(flatten)]
    pub layout: LayoutContext,
    pub employees: Paginated<EmployeeView>,
}

#[derive(Debug, Serialize)]
pub struct EmployeeFormPage {
    #[serde(flatten)]
    pub layout: LayoutContext,
    pub form: EmployeeForm,
    pub errors: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct EmployeeShowPage {
    #[serde(flatten)]
    pub layout: LayoutContext,
    pub employee: EmployeeView,
}
