//! Purchase attempt outcomes.

/// Result of attempting to buy a listed item.
///
/// The reconciliation state machine consumes this as an explicit variant
/// rather than branching on a caught error; only its effect on the wishlist
/// is ever persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurchaseOutcome {
    /// The buy was accepted and ordered by the ledger.
    Completed,
    /// The buy was rejected; the gateway's reason, verbatim.
    Failed { reason: String },
}

impl PurchaseOutcome {
    #[must_use]
    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed {
            reason: reason.into(),
        }
    }

    #[must_use]
    pub const fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}
