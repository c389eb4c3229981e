pub mod batch;
pub mod dedup;
pub mod extract;
pub mod fetch;
pub mod judge;
pub mod window;

pub use crate::domain::model::{DayWindow, Member, SubmissionRow};
pub use crate::domain::ports::{SolvedStore, StatusSource};
pub use crate::utils::error::Result;
