use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::features::employees::dtos::EmployeeSummary;
use crate::features::reports::models::Report;
use crate::shared::constants::{MSG_CONTENT_REQUIRED, MSG_INVALID_DATE, MSG_TITLE_REQUIRED};
use crate::shared::validation::error_messages;

/// Format of the report date in forms
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Serialize)]
pub struct ReportView {
    pub id: Uuid,
    pub employee: EmployeeSummary,
    pub report_date: NaiveDate,
    pub title: String,
    pub content: String,
    pub like_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Report> for ReportView {
    fn from(r: Report) -> Self {
        Self {
            id: r.id,
            employee: EmployeeSummary {
                id: r.employee_id,
                code: r.employee_code,
                name: r.employee_name,
            },
            report_date: r.report_date,
            title: r.title,
            content: r.content,
            like_count: r.like_count,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

impl ReportView {
    pub fn is_authored_by(&self, employee_id: Uuid) -> bool {
        self.employee.id == employee_id
    }
}

fn validate_report_date(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() || NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).is_ok() {
        return Ok(());
    }
    Err(ValidationError::new("report_date"))
}

/// Report create and edit form.
///
/// Values are kept as submitted so an invalid form can be shown again as typed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ReportForm {
    #[serde(default)]
    #[validate(custom(function = "validate_report_date"))]
    pub report_date: String,

    #[serde(default)]
    #[validate(length(min = 1, max = 255))]
    pub title: String,

    #[serde(default)]
    #[validate(length(min = 1))]
    pub content: String,

    #[serde(default, rename = "_token", skip_serializing)]
    pub token: String,
}

impl ReportForm {
    /// Blank form dated `today`
    pub fn dated(today: NaiveDate) -> Self {
        Self {
            report_date: today.format(DATE_FORMAT).to_string(),
            ..Self::default()
        }
    }

    /// Form filled with a stored report
    pub fn from_report(report: &ReportView) -> Self {
        Self {
            report_date: report.report_date.format(DATE_FORMAT).to_string(),
            title: report.title.clone(),
            content: report.content.clone(),
            token: String::new(),
        }
    }

    /// Validation messages in date, title, content order
    pub fn validation_messages(&self) -> Vec<String> {
        match self.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => error_messages(
                &errors,
                &[
                    ("report_date", MSG_INVALID_DATE),
                    ("title", MSG_TITLE_REQUIRED),
                    ("content", MSG_CONTENT_REQUIRED),
                ],
            ),
        }
    }

    /// The submitted date, `None` when the field was left empty
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.report_date.trim(), DATE_FORMAT).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::lorem::en::{Paragraph, Sentence};
    use fake::Fake;

    fn valid_form() -> ReportForm {
        ReportForm {
            report_date: "2024-04-01".to_string(),
            title: Sentence(1..4).fake(),
            content: Paragraph(1..3).fake(),
            token: "token".to_string(),
        }
    }

    fn view(author: Uuid) -> ReportView {
        ReportView {
            id: Uuid::new_v4(),
            employee: EmployeeSummary {
                id: author,
                code: "E0001".to_string(),
                name: "Sato".to_string(),
            },
            report_date: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
            title: "Weekly sync".to_string(),
            content: "Discussed the release.".to_string(),
            like_count: 2,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_valid_form() {
        let form = valid_form();
        assert!(form.validation_messages().is_empty());
        assert_eq!(form.parsed_date(), NaiveDate::from_ymd_opt(2024, 4, 1));
    }

    #[test]
    fn test_empty_form_lists_messages_in_order() {
        let form = ReportForm {
            report_date: "04/01/2024".to_string(),
            title: String::new(),
            content: String::new(),
            token: String::new(),
        };

        assert_eq!(
            form.validation_messages(),
            vec![
                MSG_INVALID_DATE.to_string(),
                MSG_TITLE_REQUIRED.to_string(),
                MSG_CONTENT_REQUIRED.to_string(),
            ]
        );
    }

    #[test]
    fn test_empty_date_is_allowed() {
        let form = ReportForm {
            report_date: String::new(),
            ..valid_form()
        };
        assert!(form.validation_messages().is_empty());
        assert_eq!(form.parsed_date(), None);
    }

    #[test]
    fn test_title_limit_counts_characters() {
        let at_limit = ReportForm {
            title: "日".repeat(255),
            ..valid_form()
        };
        assert!(at_limit.validation_messages().is_empty());

        let over = ReportForm {
            title: "日".repeat(256),
            ..valid_form()
        };
        assert_eq!(over.validation_messages(), vec![MSG_TITLE_REQUIRED.to_string()]);
    }

    #[test]
    fn test_authorship() {
        let author = Uuid::new_v4();
        let report = view(author);
        assert!(report.is_authored_by(author));
        assert!(!report.is_authored_by(Uuid::new_v4()));
    }

    #[test]
    fn test_form_from_report() {
        let report = view(Uuid::new_v4());
        let form = ReportForm::from_report(&report);
        assert_eq!(form.report_date, "2024-04-01");
        assert_eq!(form.title, report.title);
        assert_eq!(form.content, report.content);
        assert_eq!(
            ReportForm::dated(report.report_date).report_date,
            "2024-04-01"
        );
    }
}
