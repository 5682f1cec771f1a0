/// Number of rows shown on one page of any paginated listing
pub const ROW_PER_PAGE: i64 = 15;

// =============================================================================
// FLASH MESSAGES
// =============================================================================

pub const FLASH_REGISTERED: &str = "Registration completed.";
pub const FLASH_UPDATED: &str = "Update completed.";
pub const FLASH_LIKED: &str = "You liked the report.";
pub const FLASH_FOLLOWED: &str = "You are now following the author.";
pub const FLASH_UNFOLLOWED: &str = "You stopped following the author.";
pub const FLASH_LOGGED_IN: &str = "Logged in.";
pub const FLASH_LOGGED_OUT: &str = "Logged out.";

// =============================================================================
// VALIDATION MESSAGES
// =============================================================================

pub const MSG_INVALID_DATE: &str = "Please enter a valid date (YYYY-MM-DD).";
pub const MSG_TITLE_REQUIRED: &str = "Please enter a title (255 characters max).";
pub const MSG_CONTENT_REQUIRED: &str = "Please enter the content.";
pub const MSG_CODE_INVALID: &str =
    "Please enter an employee code of up to 50 letters, digits, '-' or '_'.";
pub const MSG_CODE_DUPLICATED: &str = "That employee code is already registered.";
pub const MSG_NAME_REQUIRED: &str = "Please enter a name (255 characters max).";
pub const MSG_PASSWORD_TOO_SHORT: &str = "Please enter a password of at least 8 characters.";
pub const MSG_LOGIN_FAILED: &str = "Incorrect employee code or password.";
