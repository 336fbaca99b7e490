/// Visit state definitions for tracking crawl progress
///
/// This module defines the states a URL moves through during one crawl.
use std::fmt;

/// Represents the current state of a URL in the crawl process
///
/// ```text
/// Enqueued -> PolicyChecked -> Expanded
///                           -> PolicyDenied
///                           -> TerminalDepth
///                           -> FetchFailed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VisitState {
    // ===== Active States =====
    /// URL was accepted into the frontier and recorded
    Enqueued,

    /// robots.txt policy was consulted and allowed the URL
    PolicyChecked,

    // ===== Terminal States =====
    /// Page was fetched and its same-origin links were followed
    Expanded,

    /// robots.txt disallows the URL; it stays recorded but is not expanded
    PolicyDenied,

    /// URL sits at the maximum depth; its links would exceed the bound
    TerminalDepth,

    /// Page fetch failed (network error or non-success status)
    FetchFailed,
}

impl VisitState {
    /// Returns true if this is a terminal state (no further processing needed)
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Enqueued | Self::PolicyChecked)
    }

    /// Returns true if this represents a recovered failure
    pub fn is_error(&self) -> bool {
        matches!(self, Self::FetchFailed)
    }

    /// Checks whether moving from `self` to `next` follows the state machine
    pub fn can_transition_to(&self, next: VisitState) -> bool {
        matches!(
            (self, next),
            (Self::Enqueued, Self::PolicyChecked)
                | (Self::Enqueued, Self::PolicyDenied)
                | (Self::PolicyChecked, Self::Expanded)
                | (Self::PolicyChecked, Self::TerminalDepth)
                | (Self::PolicyChecked, Self::FetchFailed)
        )
    }

    /// Moves to `next`, asserting the transition in debug builds
    pub fn advance(self, next: VisitState) -> VisitState {
        debug_assert!(
            self.can_transition_to(next),
            "invalid visit state transition: {:?} -> {:?}",
            self,
            next
        );
        next
    }

    /// Short machine-friendly label
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Enqueued => "enqueued",
            Self::PolicyChecked => "policy_checked",
            Self::Expanded => "expanded",
            Self::PolicyDenied => "policy_denied",
            Self::TerminalDepth => "terminal_depth",
            Self::FetchFailed => "fetch_failed",
        }
    }

    /// Returns all terminal states, in display order
    pub fn terminal_states() -> [Self; 4] {
        [
            Self::Expanded,
            Self::PolicyDenied,
            Self::TerminalDepth,
            Self::FetchFailed,
        ]
    }
}

impl fmt::Display for VisitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
