#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod expense_service;
pub mod quiz;
pub mod stories;
pub mod tutorials;

pub use finance_core::Clock;

pub use app_services::AppServices;
pub use error::{ExpenseServiceError, QuizServiceError};
pub use expense_service::ExpenseService;
pub use quiz::QuizRunner;
pub use stories::StoryService;
pub use tutorials::TutorialService;
