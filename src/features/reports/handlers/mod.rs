pub mod report_handler;

pub use report_handler::{
    create_report, edit_report, follow_author, like_report, list_reports, new_report,
    show_likes, show_report, show_timeline, unfollow_author, update_report, ReportState,
};
