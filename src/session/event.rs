//! Events a session emits for the presentation, sound and voice layers.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::items::Item;

/// Something the outside world may want to react to.
///
/// Events carry copies of the items involved, so consumers never need to
/// look back into the session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// An item was accepted as a selection. `first_in_pair` is true for the
    /// first of the two picks.
    ItemSelected { item: Item, first_in_pair: bool },

    /// The two picks matched.
    Matched { first: Item, second: Item },

    /// The two picks did not match.
    Mismatched { first: Item, second: Item },

    /// Every pair has been found. Emitted once per session.
    Completed { stars: u8 },

    /// A matched pair's settle delay elapsed; both items are now inert.
    Retired { first: Item, second: Item },

    /// A mismatch's settle delay elapsed; the first pick is deselected.
    Released { item: Item },
}

impl SessionEvent {
    /// True for `Completed`.
    #[must_use]
    pub fn is_completion(&self) -> bool {
        matches!(self, SessionEvent::Completed { .. })
    }
}

/// Events from one call. A selection yields at most four: a flushed timer,
/// the selection itself, the verdict, and completion.
pub type SessionEvents = SmallVec<[SessionEvent; 4]>;
