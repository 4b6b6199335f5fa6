//! Match policies.
//!
//! - `Loose`: twins match (same pair id)
//! - `Strict`: twins match only if they also look identical
//!
//! Under the strict policy a correctly chosen pair can still be rejected,
//! because decorative dimensions are drawn independently per twin.

use serde::{Deserialize, Serialize};

use crate::items::Item;

/// Decides whether two selected items form a match.
pub trait MatchEvaluator {
    /// Must be symmetric in `a` and `b`.
    fn is_match(&self, a: &Item, b: &Item) -> bool;
}

/// Same pair id.
#[derive(Clone, Copy, Debug, Default)]
pub struct Loose;

impl MatchEvaluator for Loose {
    fn is_match(&self, a: &Item, b: &Item) -> bool {
        a.pair_id == b.pair_id
    }
}

/// Same pair id and all five dimensions equal.
///
/// Decoration is drawn per item, so twins look identical only about 1 time
/// in 81. A pair that differs can never be matched, which leaves most strict
/// sessions unable to reach `Completed`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Strict;

impl MatchEvaluator for Strict {
    fn is_match(&self, a: &Item, b: &Item) -> bool {
        a.pair_id == b.pair_id && a.same_look(b)
    }
}

/// Configurable choice of policy, applied to every mode of a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchPolicy {
    #[default]
    Loose,
    /// See [`Strict`]: sessions are usually unwinnable under this policy.
    Strict,
}

impl MatchEvaluator for MatchPolicy {
    fn is_match(&self, a: &Item, b: &Item) -> bool {
        match self {
            MatchPolicy::Loose => Loose.is_match(a, b),
            MatchPolicy::Strict => Strict.is_match(a, b),
        }
    }
}
