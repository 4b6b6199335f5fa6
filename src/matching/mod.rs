//! Match evaluation.
//!
//! Policies are trait-based like everything else that games may want to
//! swap: `MatchEvaluator` is the seam, `Loose` and `Strict` the two stock
//! implementations, `MatchPolicy` the serializable config knob.

mod policy;

pub use policy::{Loose, MatchEvaluator, MatchPolicy, Strict};
