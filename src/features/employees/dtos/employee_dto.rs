use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::core::session::SessionEmployee;
use crate::features::employees::models::Employee;
use crate::shared::constants::{MSG_CODE_INVALID, MSG_NAME_REQUIRED, MSG_PASSWORD_TOO_SHORT};
use crate::shared::validation::{error_messages, EMPLOYEE_CODE_REGEX};

/// Employee as shown on pages. Never carries the password hash.
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeView {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub admin_flag: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Employee> for EmployeeView {
    fn from(e: Employee) -> Self {
        Self {
            id: e.id,
            code: e.code,
            name: e.name,
            admin_flag: e.admin_flag,
            created_at: e.created_at,
            updated_at: e.updated_at,
        }
    }
}

impl From<&Employee> for SessionEmployee {
    fn from(e: &Employee) -> Self {
        Self {
            id: e.id,
            code: e.code.clone(),
            name: e.name.clone(),
            admin: e.admin_flag,
        }
    }
}

/// Author or liker embedded in report, like and following views
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeSummary {
    pub id: Uuid,
    pub code: String,
    pub name: String,
}

/// Employee registration form
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct EmployeeForm {
    #[serde(default)]
    #[validate(regex(path = *EMPLOYEE_CODE_REGEX))]
    pub code: String,

    #[serde(default)]
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[serde(default, skip_serializing)]
    #[validate(length(min = 8))]
    pub password: String,

    /// Checkbox value; present only when ticked
    #[serde(default)]
    pub admin_flag: Option<String>,

    #[serde(default, rename = "_token", skip_serializing)]
    pub token: String,
}

impl EmployeeForm {
    pub fn is_admin(&self) -> bool {
        self.admin_flag.is_some()
    }

    /// Input validation messages in form order
    pub fn validation_messages(&self) -> Vec<String> {
        match self.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => error_messages(
                &errors,
                &[
                    ("code", MSG_CODE_INVALID),
                    ("name", MSG_NAME_REQUIRED),
                    ("password", MSG_PASSWORD_TOO_SHORT),
                ],
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::name::en::Name;
    use fake::Fake;

    fn valid_form() -> EmployeeForm {
        EmployeeForm {
            code: "E0001".to_string(),
            name: Name().fake(),
            password: "password123".to_string(),
            admin_flag: None,
            token: "token".to_string(),
        }
    }

    #[test]
    fn test_valid_form_has_no_messages() {
        assert!(valid_form().validation_messages().is_empty());
    }

    #[test]
    fn test_messages_follow_form_order() {
        let form = EmployeeForm {
            code: "has space".to_string(),
            name: String::new(),
            password: "short".to_string(),
            ..valid_form()
        };

        assert_eq!(
            form.validation_messages(),
            vec![
                MSG_CODE_INVALID.to_string(),
                MSG_NAME_REQUIRED.to_string(),
                MSG_PASSWORD_TOO_SHORT.to_string(),
            ]
        );
    }

    #[test]
    fn test_code_length_limit() {
        let form = EmployeeForm {
            code: "a".repeat(51),
            ..valid_form()
        };
        assert_eq!(form.validation_messages(), vec![MSG_CODE_INVALID.to_string()]);
    }

    #[test]
    fn test_admin_checkbox() {
        let form = EmployeeForm {
            admin_flag: Some("on".to_string()),
            ..valid_form()
        };
        assert!(form.is_admin());
        assert!(!valid_form().is_admin());
    }
}
