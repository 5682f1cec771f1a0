//! Daily reports: listing, authoring, likes and the follow timeline.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/reports` | Login | Paginated list of all reports |
//! | GET | `/reports/new` | Login | Report form |
//! | POST | `/reports` | Login | Create a report |
//! | GET | `/reports/{id}` | Login | Report details |
//! | GET | `/reports/{id}/edit` | Author | Edit form |
//! | POST | `/reports/{id}` | Author | Update a report |
//! | POST | `/reports/{id}/like` | Login | Like a report |
//! | GET | `/reports/{id}/likes` | Login | Paginated likes of a report |
//! | POST | `/reports/{id}/follow` | Login | Follow the report's author |
//! | POST | `/reports/{id}/unfollow` | Login | Stop following the author |
//! | GET | `/timeline` | Login | Reports of followed employees |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ReportService;
