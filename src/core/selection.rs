use crate::core::{Course, CourseSelector, Issuance, IssuanceSelector, Source};

/// Selects every course that is still active.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActiveCoursesSelector;

impl CourseSelector for ActiveCoursesSelector {
    fn should_end(&self, course: &Course) -> bool {
        course.is_active()
    }
}

/// Selects active courses that were added locally.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActiveAndLocalCoursesSelector;

impl CourseSelector for ActiveAndLocalCoursesSelector {
    fn should_end(&self, course: &Course) -> bool {
        course.is_active() && course.added_by() == Source::Local
    }
}

/// Selects active local courses, and active external ones when
/// `allow_external_ending` is set.
#[derive(Debug, Clone, Copy, Default)]
pub struct PermittedCoursesSelector {
    pub allow_external_ending: bool,
}

impl PermittedCoursesSelector {
    pub fn new(allow_external_ending: bool) -> Self {
        Self {
            allow_external_ending,
        }
    }
}

impl CourseSelector for PermittedCoursesSelector {
    fn should_end(&self, course: &Course) -> bool {
        course.is_active() && (course.added_by() == Source::Local || self.allow_external_ending)
    }
}

/// Selects every issuance that is still active.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActiveIssuancesSelector;

impl IssuanceSelector for ActiveIssuancesSelector {
    fn should_cancel(&self, issuance: &Issuance) -> bool {
        issuance.is_active()
    }
}

/// Selects active issuances that were added locally.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActiveAndLocalIssuancesSelector;

impl IssuanceSelector for ActiveAndLocalIssuancesSelector {
    fn should_cancel(&self, issuance: &Issuance) -> bool {
        issuance.is_active() && issuance.added_by() == Source::Local
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{CourseStatus, IssuanceStatus};

    fn course(status: CourseStatus, added_by: Source) -> Course {
        Course::new("TestPreparation", status, vec![], added_by)
    }

    #[test]
    fn test_active_courses_selector() {
        let selector = ActiveCoursesSelector;
        assert!(selector.should_end(&course(CourseStatus::Active, Source::Local)));
        assert!(selector.should_end(&course(CourseStatus::Active, Source::External)));
        assert!(!selector.should_end(&course(CourseStatus::Ended, Source::Local)));
        assert!(!selector.should_end(&course(CourseStatus::Ended, Source::External)));
    }

    #[test]
    fn test_active_and_local_courses_selector() {
        let selector = ActiveAndLocalCoursesSelector;
        assert!(selector.should_end(&course(CourseStatus::Active, Source::Local)));
        assert!(!selector.should_end(&course(CourseStatus::Active, Source::External)));
        assert!(!selector.should_end(&course(CourseStatus::Ended, Source::Local)));
        assert!(!selector.should_end(&course(CourseStatus::Ended, Source::External)));
    }

    #[test]
    fn test_permitted_courses_selector_without_override() {
        let selector = PermittedCoursesSelector::new(false);
        assert!(selector.should_end(&course(CourseStatus::Active, Source::Local)));
        assert!(!selector.should_end(&course(CourseStatus::Active, Source::External)));
        assert!(!selector.should_end(&course(CourseStatus::Ended, Source::Local)));
    }

    #[test]
    fn test_permitted_courses_selector_with_override() {
        let selector = PermittedCoursesSelector::new(true);
        assert!(selector.should_end(&course(CourseStatus::Active, Source::Local)));
        assert!(selector.should_end(&course(CourseStatus::Active, Source::External)));
        // 覆寫只放寬來源限制，已結束的療程仍不可再結束
        assert!(!selector.should_end(&course(CourseStatus::Ended, Source::External)));
    }

    #[test]
    fn test_active_issuances_selector() {
        let selector = ActiveIssuancesSelector;
        assert!(selector.should_cancel(&Issuance::new(IssuanceStatus::Active, Source::Local)));
        assert!(selector.should_cancel(&Issuance::new(IssuanceStatus::Active, Source::External)));
        assert!(!selector.should_cancel(&Issuance::new(IssuanceStatus::Cancelled, Source::Local)));
        assert!(!selector.should_cancel(&Issuance::new(
            IssuanceStatus::Cancelled,
            Source::External
        )));
    }

    #[test]
    fn test_active_and_local_issuances_selector() {
        let selector = ActiveAndLocalIssuancesSelector;
        assert!(selector.should_cancel(&Issuance::new(IssuanceStatus::Active, Source::Local)));
        assert!(!selector.should_cancel(&Issuance::new(IssuanceStatus::Active, Source::External)));
        assert!(!selector.should_cancel(&Issuance::new(IssuanceStatus::Cancelled, Source::Local)));
    }

    #[test]
    fn test_boxed_selector_delegates() {
        let selector: Box<dyn CourseSelector> = Box::new(ActiveAndLocalCoursesSelector);
        assert!(selector.should_end(&course(CourseStatus::Active, Source::Local)));
        assert!(!selector.should_end(&course(CourseStatus::Active, Source::External)));
    }
}
