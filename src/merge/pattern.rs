//! Endpoint-adjacency patterns for route merging.

use crate::models::Route;

/// How a savings pair `(i, j)` lines up with the open ends of its two
/// routes, where `i` belongs to route A and `j` to route B.
///
/// A merge is only possible when both locations sit at an open end of
/// their route; the pattern then fixes which route leads the spliced
/// path and which side has its stops reversed. Classification checks
/// the four cases in a fixed order, so single-stop routes (whose first
/// and last stop coincide) resolve deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergePattern {
    /// `i` is A's last stop, `j` is B's first: A then B, no reversal.
    EndStart,
    /// Both are last stops: A then B with B's stops reversed.
    EndEnd,
    /// Both are first stops: B's stops reversed, then A.
    StartStart,
    /// `i` is A's first stop, `j` is B's last: B then A, no reversal.
    StartEnd,
}

/// Splice layout of a pattern: operand order and reversal sides.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MergeLayout {
    /// `true` when route A leads the merged path.
    pub a_is_prefix: bool,
    pub reverse_prefix: bool,
    pub reverse_suffix: bool,
}

impl MergePattern {
    /// Determines which pattern applies for `(i, j)` against the ends
    /// of routes A and B, or `None` when either location is interior.
    pub fn classify(a: &Route, b: &Route, i: usize, j: usize) -> Option<Self> {
        if a.last_stop() == i && b.first_stop() == j {
            Some(Self::EndStart)
        } else if a.last_stop() == i && b.last_stop() == j {
            Some(Self::EndEnd)
        } else if a.first_stop() == i && b.first_stop() == j {
            Some(Self::StartStart)
        } else if a.first_stop() == i && b.last_stop() == j {
            Some(Self::StartEnd)
        } else {
            None
        }
    }

    /// Returns `true` when the two joined ends are still mergeable.
    pub fn ends_open(&self, a: &Route, b: &Route) -> bool {
        match self {
            Self::EndStart => a.mergeable_at_end() && b.mergeable_at_start(),
            Self::EndEnd => a.mergeable_at_end() && b.mergeable_at_end(),
            Self::StartStart => a.mergeable_at_start() && b.mergeable_at_start(),
            Self::StartEnd => a.mergeable_at_start() && b.mergeable_at_end(),
        }
    }

    pub(crate) fn layout(&self) -> MergeLayout {
        match self {
            Self::EndStart => MergeLayout {
                a_is_prefix: true,
                reverse_prefix: false,
                reverse_suffix: false,
            },
            Self::EndEnd => MergeLayout {
                a_is_prefix: true,
                reverse_prefix: false,
                reverse_suffix: true,
            },
            Self::StartStart => MergeLayout {
                a_is_prefix: false,
                reverse_prefix: true,
                reverse_suffix: false,
            },
            Self::StartEnd => MergeLayout {
                a_is_prefix: false,
                reverse_prefix: false,
                reverse_suffix: false,
            },
        }
    }
}
