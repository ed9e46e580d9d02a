// SPDX-License-Identifier: MPL-2.0
//! Per-image loaded flags driving the loading spinner.
//!
//! A failed load never flips its flag, so the spinner stays up. There is no
//! retry and no error state.

use std::collections::HashSet;

/// Loading state for the photos of the current collection, by index.
#[derive(Debug, Clone, Default)]
pub struct State {
    loaded: HashSet<usize>,
}

/// Messages for the loading sub-component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// The photo at this index is about to be shown; forget any earlier load.
    MarkPending(usize),
    /// The host finished decoding the photo at this index.
    Loaded(usize),
    /// The host failed to load the photo at this index.
    Failed(usize),
    /// The collection changed; indices no longer refer to the same photos.
    Reset,
}

/// Effects produced by the loading state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// No visible change.
    None,
    /// A loaded flag changed.
    Changed,
}

impl State {
    /// Handle a loading state message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        let changed = match msg {
            Message::MarkPending(index) => self.loaded.remove(&index),
            Message::Loaded(index) => self.loaded.insert(index),
            Message::Failed(index) => {
                log::warn!("image {index} failed to load; spinner stays visible");
                false
            }
            Message::Reset => {
                let had_any = !self.loaded.is_empty();
                self.loaded.clear();
                had_any
            }
        };
        if changed {
            Effect::Changed
        } else {
            Effect::None
        }
    }

    /// Check whether the photo at `index` has finished loading.
    #[must_use]
    pub fn is_loaded(&self, index: usize) -> bool {
        self.loaded.contains(&index)
    }
}
