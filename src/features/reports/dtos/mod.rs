pub mod report_dto;
pub mod report_page;

pub use report_dto::{ReportForm, ReportView};
pub use report_page::{
    ReportFormPage, ReportIndexPage, ReportLikesPage, ReportShowPage, TimelinePage,
};
