use crate::core::{Canceller, Issuance, IssuanceSelector};

/// Cancels the issuances its selector accepts, in input order.
#[derive(Debug, Clone)]
pub struct IssuanceCanceller<S: IssuanceSelector> {
    selector: S,
}

impl<S: IssuanceSelector> IssuanceCanceller<S> {
    pub fn new(selector: S) -> Self {
        Self { selector }
    }
}

impl<S: IssuanceSelector> Canceller for IssuanceCanceller<S> {
    fn cancel(&self, issuances: &mut [Issuance], reason_for_cancelling: &str) {
        let mut cancelled = 0usize;

        for issuance in issuances.iter_mut() {
            if self.selector.should_cancel(issuance)
                && issuance.mark_cancelled(reason_for_cancelling)
            {
                cancelled += 1;
            }
        }

        tracing::debug!(
            "Cancelled {} of {} issuances: {}",
            cancelled,
            issuances.len(),
            reason_for_cancelling
        );
    }
}
