//! Per-operation-kind status tracking for async mutations.

/// The mutation kinds the dashboard can have in flight.
/// At most one operation of a given kind may be pending at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    AcceptBid,
    RejectBid,
    StartAuction,
    ReAuction,
    CancelAppointment,
}

impl OperationKind {
    /// Human-readable label used in log lines and error messages.
    pub const fn label(self) -> &'static str {
        match self {
            Self::AcceptBid => "accept-bid",
            Self::RejectBid => "reject-bid",
            Self::StartAuction => "start-auction",
            Self::ReAuction => "re-auction",
            Self::CancelAppointment => "cancel-appointment",
        }
    }
}

/// The `{pending, error, success}` triple tracked per operation kind.
///
/// Invariant: `pending` and `success` are never simultaneously true.
/// `success` auto-resets after a bounded display window or on the next
/// same-kind invocation; `error` persists until explicitly dismissed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OperationStatus {
    pub pending: bool,
    pub error: Option<String>,
    pub success: bool,
}

impl OperationStatus {
    /// Idle: nothing in flight, nothing to show.
    pub fn is_idle(&self) -> bool {
        !self.pending && !self.success && self.error.is_none()
    }

    /// Transition into the in-flight state, clearing any stale outcome.
    pub fn begin(&mut self) {
        self.pending = true;
        self.error = None;
        self.success = false;
    }

    /// Transition into the succeeded state.
    pub fn succeed(&mut self) {
        self.pending = false;
        self.error = None;
        self.success = true;
    }

    /// Transition into the failed state with a user-facing message.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.pending = false;
        self.error = Some(message.into());
        self.success = false;
    }

    /// Clear any outcome (auto-dismiss of success, explicit dismiss of error).
    pub fn reset(&mut self) {
        self.pending = false;
        self.error = None;
        self.success = false;
    }
}
