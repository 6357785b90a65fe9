use crate::core::cancelling::IssuanceCanceller;
use crate::core::selection::{ActiveAndLocalIssuancesSelector, PermittedCoursesSelector};
use crate::core::{Canceller, Course, CourseSelector, Logger, Source};

/// Ends eligible courses and cascades cancellation to their issuances.
///
/// Ineligible courses are reported through the logger and left unchanged.
pub struct CourseEnder<L: Logger, C: Canceller, S: CourseSelector> {
    logger: L,
    issuance_canceller: C,
    selector: S,
}

impl<L: Logger, C: Canceller, S: CourseSelector> CourseEnder<L, C, S> {
    pub fn new(logger: L, issuance_canceller: C, selector: S) -> Self {
        Self {
            logger,
            issuance_canceller,
            selector,
        }
    }

    /// Ends `course` if the configured selector accepts it.
    pub fn end(&self, course: &mut Course, reason_for_ending: &str) {
        self.end_selected(
            &self.selector,
            &self.issuance_canceller,
            course,
            reason_for_ending,
        );
    }

    /// Ends `course` if it is active and either local or
    /// `allow_external_ending` is set. The configured course selector is not
    /// consulted.
    ///
    /// An external course ended through the override only cascades to its
    /// active local issuances, whatever the configured canceller would pick.
    pub fn end_allowing_external(
        &self,
        course: &mut Course,
        reason_for_ending: &str,
        allow_external_ending: bool,
    ) {
        let selector = PermittedCoursesSelector::new(allow_external_ending);
        match course.added_by() {
            Source::Local => {
                self.end_selected(&selector, &self.issuance_canceller, course, reason_for_ending)
            }
            Source::External => {
                let local_only = IssuanceCanceller::new(ActiveAndLocalIssuancesSelector);
                self.end_selected(&selector, &local_only, course, reason_for_ending)
            }
        }
    }

    fn end_selected(
        &self,
        selector: &dyn CourseSelector,
        issuance_canceller: &dyn Canceller,
        course: &mut Course,
        reason_for_ending: &str,
    ) {
        if !selector.should_end(course) || !course.mark_ended(reason_for_ending) {
            tracing::debug!(
                "Course '{}' not eligible for ending ({:?}, {:?})",
                course.preparation_term(),
                course.status(),
                course.added_by()
            );
            self.logger
                .log(&format!("{} course cannot be ended.", course.preparation_term()));
            return;
        }

        tracing::debug!(
            "Ended course '{}': {}",
            course.preparation_term(),
            reason_for_ending
        );

        issuance_canceller.cancel(course.issuances_mut(), reason_for_ending);
    }
}
