// SPDX-License-Identifier: MPL-2.0
//! Navigation sub-component: current index, open flag and transition lock.
//!
//! A navigation request does not move the index immediately. It starts a
//! transition identified by a [`TransitionToken`]; the index is committed when
//! that token comes back through [`Message::TransitionElapsed`]. While a
//! transition is pending every other navigation request is dropped, not queued.
//! Closing invalidates the pending token, so a late timer can never commit
//! into a closed session.

use std::fmt;

/// Identifies one pending transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransitionToken(u64);

impl TransitionToken {
    /// Raw id, for hosts that need to key their timers.
    #[must_use]
    pub fn id(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TransitionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "transition#{}", self.0)
    }
}

/// Transition lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transition {
    #[default]
    Idle,
    Transitioning {
        target: usize,
        token: TransitionToken,
    },
}

/// Navigation sub-component state.
#[derive(Debug, Clone, Default)]
pub struct State {
    len: usize,
    current_index: usize,
    is_open: bool,
    transition: Transition,
    last_token: u64,
}

/// Messages for the navigation sub-component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Open the session at the given index (clamped).
    Open(usize),
    /// Close the session.
    Close,
    /// Request a transition to an index.
    GoTo(usize),
    /// Request the following photo, wrapping to the first.
    Next,
    /// Request the preceding photo, wrapping to the last.
    Previous,
    /// The timer for a transition fired.
    TransitionElapsed(TransitionToken),
    /// The photo collection now has this many entries.
    SetLen(usize),
}

/// Effects produced by navigation changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Request ignored.
    None,
    /// Session opened; the view must be reset.
    Opened {
        index: usize,
        cancelled: Option<TransitionToken>,
    },
    /// Session closed.
    Closed { cancelled: Option<TransitionToken> },
    /// A transition began; its token must be delivered back after the delay.
    TransitionStarted {
        target: usize,
        token: TransitionToken,
    },
    /// The index moved; the view must be reset.
    Committed { index: usize },
    /// The collection size changed under an open or closed session.
    Resized {
        index_changed: bool,
        cancelled: Option<TransitionToken>,
    },
}

impl State {
    /// Creates a closed session over `len` photos.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            len,
            ..Self::default()
        }
    }

    /// Handle a navigation message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Open(initial_index) => self.open(initial_index),
            Message::Close => self.close(),
            Message::GoTo(index) => self.go_to(index),
            Message::Next => match self.wrapped_step(1) {
                Some(index) => self.go_to(index),
                None => Effect::None,
            },
            Message::Previous => match self.wrapped_step(-1) {
                Some(index) => self.go_to(index),
                None => Effect::None,
            },
            Message::TransitionElapsed(token) => self.commit(token),
            Message::SetLen(len) => self.set_len(len),
        }
    }

    fn open(&mut self, initial_index: usize) -> Effect {
        if self.len == 0 {
            log::debug!("open rejected: no photos");
            return Effect::None;
        }
        let cancelled = self.cancel_transition();
        self.current_index = initial_index.min(self.len - 1);
        self.is_open = true;
        log::debug!("viewer opened at index {}", self.current_index);
        Effect::Opened {
            index: self.current_index,
            cancelled,
        }
    }

    fn close(&mut self) -> Effect {
        if !self.is_open {
            return Effect::None;
        }
        self.is_open = false;
        let cancelled = self.cancel_transition();
        log::debug!("viewer closed (cancelled: {cancelled:?})");
        Effect::Closed { cancelled }
    }

    fn go_to(&mut self, index: usize) -> Effect {
        if !self.is_open || index >= self.len || index == self.current_index {
            return Effect::None;
        }
        if let Transition::Transitioning { target, .. } = self.transition {
            log::debug!("navigation to {index} dropped: transition to {target} pending");
            return Effect::None;
        }

        self.last_token += 1;
        let token = TransitionToken(self.last_token);
        self.transition = Transition::Transitioning {
            target: index,
            token,
        };
        log::debug!("{token} started towards index {index}");
        Effect::TransitionStarted {
            target: index,
            token,
        }
    }

    fn commit(&mut self, token: TransitionToken) -> Effect {
        match self.transition {
            Transition::Transitioning {
                target,
                token: pending,
            } if pending == token && self.is_open => {
                self.transition = Transition::Idle;
                self.current_index = target;
                log::debug!("{token} committed index {target}");
                Effect::Committed { index: target }
            }
            _ => {
                log::trace!("stale {token} ignored");
                Effect::None
            }
        }
    }

    fn set_len(&mut self, len: usize) -> Effect {
        self.len = len;
        if len == 0 {
            self.current_index = 0;
            let was_open = self.is_open;
            self.is_open = false;
            let cancelled = self.cancel_transition();
            if was_open {
                log::debug!("photo collection emptied, closing viewer");
                return Effect::Closed { cancelled };
            }
            return Effect::Resized {
                index_changed: false,
                cancelled,
            };
        }

        let cancelled = match self.transition {
            Transition::Transitioning { target, .. } if target >= len => self.cancel_transition(),
            _ => None,
        };
        let clamped = self.current_index.min(len - 1);
        let index_changed = clamped != self.current_index;
        self.current_index = clamped;
        Effect::Resized {
            index_changed,
            cancelled,
        }
    }

    fn cancel_transition(&mut self) -> Option<TransitionToken> {
        match std::mem::take(&mut self.transition) {
            Transition::Transitioning { token, .. } => {
                log::debug!("{token} cancelled");
                Some(token)
            }
            Transition::Idle => None,
        }
    }

    fn wrapped_step(&self, step: isize) -> Option<usize> {
        if self.len <= 1 {
            return None;
        }
        let len = self.len as isize;
        let index = (self.current_index as isize + step).rem_euclid(len);
        Some(index as usize)
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    #[must_use]
    pub fn transition(&self) -> Transition {
        self.transition
    }

    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        matches!(self.transition, Transition::Transitioning { .. })
    }

    /// Token of the pending transition, if any.
    #[must_use]
    pub fn pending_token(&self) -> Option<TransitionToken> {
        match self.transition {
            Transition::Transitioning { token, .. } => Some(token),
            Transition::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_at(len: usize, index: usize) -> State {
        let mut state = State::new(len);
        state.handle(Message::Open(index));
        state
    }

    /// Issues a request and immediately fires its timer.
    fn navigate(state: &mut State, msg: Message) -> Effect {
        match state.handle(msg) {
            Effect::TransitionStarted { token, .. } => {
                state.handle(Message::TransitionElapsed(token))
            }
            other => other,
        }
    }

    #[test]
    fn open_clamps_initial_index() {
        let state = open_at(3, 10);
        assert!(state.is_open());
        assert_eq!(state.current_index(), 2);
    }

    #[test]
    fn open_empty_collection_is_rejected() {
        let mut state = State::new(0);
        assert_eq!(state.handle(Message::Open(0)), Effect::None);
        assert!(!state.is_open());
    }

    #[test]
    fn previous_from_first_wraps_to_last() {
        let mut state = open_at(5, 0);
        assert_eq!(
            navigate(&mut state, Message::Previous),
            Effect::Committed { index: 4 }
        );
        assert_eq!(state.current_index(), 4);
    }

    #[test]
    fn next_from_last_wraps_to_first() {
        let mut state = open_at(5, 4);
        navigate(&mut state, Message::Next);
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn single_photo_cannot_step() {
        let mut state = open_at(1, 0);
        assert_eq!(state.handle(Message::Next), Effect::None);
        assert_eq!(state.handle(Message::Previous), Effect::None);
    }

    #[test]
    fn index_moves_only_when_timer_fires() {
        let mut state = open_at(5, 0);
        let effect = state.handle(Message::GoTo(3));
        let Effect::TransitionStarted { target, token } = effect else {
            panic!("expected transition start, got {effect:?}");
        };
        assert_eq!(target, 3);
        assert_eq!(state.current_index(), 0);
        assert!(state.is_transitioning());

        state.handle(Message::TransitionElapsed(token));
        assert_eq!(state.current_index(), 3);
        assert!(!state.is_transitioning());
    }

    #[test]
    fn requests_during_transition_are_dropped() {
        let mut state = open_at(5, 0);
        let Effect::TransitionStarted { token, .. } = state.handle(Message::GoTo(1)) else {
            panic!("expected transition start");
        };

        assert_eq!(state.handle(Message::GoTo(4)), Effect::None);
        assert_eq!(state.handle(Message::Next), Effect::None);
        assert_eq!(state.handle(Message::Previous), Effect::None);

        state.handle(Message::TransitionElapsed(token));
        assert_eq!(state.current_index(), 1);
    }

    #[test]
    fn go_to_current_index_is_a_no_op() {
        let mut state = open_at(5, 2);
        assert_eq!(state.handle(Message::GoTo(2)), Effect::None);
        assert!(!state.is_transitioning());
    }

    #[test]
    fn go_to_out_of_range_is_a_no_op() {
        let mut state = open_at(5, 2);
        assert_eq!(state.handle(Message::GoTo(5)), Effect::None);
    }

    #[test]
    fn close_cancels_pending_transition() {
        let mut state = open_at(5, 0);
        let Effect::TransitionStarted { token, .. } = state.handle(Message::GoTo(2)) else {
            panic!("expected transition start");
        };

        assert_eq!(
            state.handle(Message::Close),
            Effect::Closed {
                cancelled: Some(token)
            }
        );
        assert_eq!(state.handle(Message::TransitionElapsed(token)), Effect::None);
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn close_keeps_index_for_reopen() {
        let mut state = open_at(5, 3);
        state.handle(Message::Close);
        assert!(!state.is_open());
        assert_eq!(state.current_index(), 3);
        assert_eq!(state.handle(Message::Next), Effect::None);
    }

    #[test]
    fn stale_token_is_ignored() {
        let mut state = open_at(5, 0);
        let Effect::TransitionStarted { token: first, .. } = state.handle(Message::GoTo(1)) else {
            panic!("expected transition start");
        };
        state.handle(Message::TransitionElapsed(first));
        let Effect::TransitionStarted { token: second, .. } = state.handle(Message::GoTo(2))
        else {
            panic!("expected transition start");
        };
        assert_ne!(first, second);

        assert_eq!(state.handle(Message::TransitionElapsed(first)), Effect::None);
        assert_eq!(state.current_index(), 1);
    }

    #[test]
    fn shrinking_collection_clamps_and_cancels() {
        let mut state = open_at(5, 4);
        let Effect::TransitionStarted { token, .. } = state.handle(Message::GoTo(3)) else {
            panic!("expected transition start");
        };

        assert_eq!(
            state.handle(Message::SetLen(3)),
            Effect::Resized {
                index_changed: true,
                cancelled: Some(token)
            }
        );
        assert_eq!(state.current_index(), 2);
        assert!(state.is_open());
    }

    #[test]
    fn emptying_collection_closes_session() {
        let mut state = open_at(2, 1);
        assert_eq!(
            state.handle(Message::SetLen(0)),
            Effect::Closed { cancelled: None }
        );
        assert!(!state.is_open());
        assert_eq!(state.handle(Message::Open(0)), Effect::None);
    }
}
