/// Where a record was created: by this system, or imported from elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Local,
    External,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseStatus {
    Active,
    Ended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssuanceStatus {
    Active,
    Cancelled,
}

/// A single dispensing event tied to a course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issuance {
    status: IssuanceStatus,
    reason_for_cancelling: Option<String>,
    added_by: Source,
}

impl Issuance {
    pub fn new(status: IssuanceStatus, added_by: Source) -> Self {
        Self {
            status,
            reason_for_cancelling: None,
            added_by,
        }
    }

    /// An issuance that arrives already cancelled, with its recorded reason.
    pub fn cancelled(reason_for_cancelling: impl Into<String>, added_by: Source) -> Self {
        Self {
            status: IssuanceStatus::Cancelled,
            reason_for_cancelling: Some(reason_for_cancelling.into()),
            added_by,
        }
    }

    pub fn status(&self) -> IssuanceStatus {
        self.status
    }

    pub fn reason_for_cancelling(&self) -> Option<&str> {
        self.reason_for_cancelling.as_deref()
    }

    pub fn added_by(&self) -> Source {
        self.added_by
    }

    pub fn is_active(&self) -> bool {
        self.status == IssuanceStatus::Active
    }

    /// Moves an active issuance to `Cancelled` and records why.
    ///
    /// Returns `false` and changes nothing if it was already cancelled.
    pub(crate) fn mark_cancelled(&mut self, reason: &str) -> bool {
        if !self.is_active() {
            return false;
        }
        self.status = IssuanceStatus::Cancelled;
        self.reason_for_cancelling = Some(reason.to_string());
        true
    }
}

/// A medication-prescribing period and the issuances made under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    preparation_term: String,
    status: CourseStatus,
    issuances: Vec<Issuance>,
    reason_for_ending: Option<String>,
    added_by: Source,
}

impl Course {
    pub fn new(
        preparation_term: impl Into<String>,
        status: CourseStatus,
        issuances: Vec<Issuance>,
        added_by: Source,
    ) -> Self {
        Self {
            preparation_term: preparation_term.into(),
            status,
            issuances,
            reason_for_ending: None,
            added_by,
        }
    }

    pub fn preparation_term(&self) -> &str {
        &self.preparation_term
    }

    pub fn status(&self) -> CourseStatus {
        self.status
    }

    pub fn issuances(&self) -> &[Issuance] {
        &self.issuances
    }

    pub fn issuances_mut(&mut self) -> &mut [Issuance] {
        &mut self.issuances
    }

    pub fn reason_for_ending(&self) -> Option<&str> {
        self.reason_for_ending.as_deref()
    }

    pub fn added_by(&self) -> Source {
        self.added_by
    }

    pub fn is_active(&self) -> bool {
        self.status == CourseStatus::Active
    }

    /// Moves an active course to `Ended` and records why. Issuances are left
    /// alone. Returns `false` and changes nothing if it had already ended.
    pub(crate) fn mark_ended(&mut self, reason: &str) -> bool {
        if !self.is_active() {
            return false;
        }
        self.status = CourseStatus::Ended;
        self.reason_for_ending = Some(reason.to_string());
        true
    }
}
