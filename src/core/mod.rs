pub mod cancelling;
pub mod ending;
pub mod selection;

pub use crate::domain::model::{Course, CourseStatus, Issuance, IssuanceStatus, Source};
pub use crate::domain::ports::{Canceller, CourseSelector, IssuanceSelector, Logger};
