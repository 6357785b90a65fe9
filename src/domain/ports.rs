use crate::domain::model::{Course, Issuance};

/// Decides whether a course may be ended.
pub trait CourseSelector {
    fn should_end(&self, course: &Course) -> bool;
}

/// Decides whether an issuance may be cancelled.
pub trait IssuanceSelector {
    fn should_cancel(&self, issuance: &Issuance) -> bool;
}

/// Applies the cancelled transition to the issuances it selects.
pub trait Canceller {
    fn cancel(&self, issuances: &mut [Issuance], reason_for_cancelling: &str);
}

/// Sink for messages about transitions that could not happen.
pub trait Logger {
    fn log(&self, message: &str);
}

impl<T: CourseSelector + ?Sized> CourseSelector for &T {
    fn should_end(&self, course: &Course) -> bool {
        (**self).should_end(course)
    }
}

impl<T: CourseSelector + ?Sized> CourseSelector for Box<T> {
    fn should_end(&self, course: &Course) -> bool {
        (**self).should_end(course)
    }
}

impl<T: IssuanceSelector + ?Sized> IssuanceSelector for &T {
    fn should_cancel(&self, issuance: &Issuance) -> bool {
        (**self).should_cancel(issuance)
    }
}

impl<T: IssuanceSelector + ?Sized> IssuanceSelector for Box<T> {
    fn should_cancel(&self, issuance: &Issuance) -> bool {
        (**self).should_cancel(issuance)
    }
}

impl<T: Canceller + ?Sized> Canceller for &T {
    fn cancel(&self, issuances: &mut [Issuance], reason_for_cancelling: &str) {
        (**self).cancel(issuances, reason_for_cancelling)
    }
}

impl<T: Canceller + ?Sized> Canceller for Box<T> {
    fn cancel(&self, issuances: &mut [Issuance], reason_for_cancelling: &str) {
        (**self).cancel(issuances, reason_for_cancelling)
    }
}

impl<T: Logger + ?Sized> Logger for &T {
    fn log(&self, message: &str) {
        (**self).log(message)
    }
}

impl<T: Logger + ?Sized> Logger for Box<T> {
    fn log(&self, message: &str) {
        (**self).log(message)
    }
}
