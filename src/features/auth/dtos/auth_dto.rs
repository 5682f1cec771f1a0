use serde::{Deserialize, Serialize};

use crate::shared::views::LayoutContext;

/// Login form body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub code: String,

    #[serde(default, skip_serializing)]
    pub password: String,

    #[serde(default, rename = "_token", skip_serializing)]
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct LoginPage {
    #[serde(flatten)]
    pub layout: LayoutContext,
    pub form: LoginForm,
    pub error: Option<String>,
}
