// SPDX-License-Identifier: MPL-2.0
//! Open-session tokens for stale-event discard.
//!
//! Every `open()` of the lightbox mints a new token. Media events carry the
//! token of the session that produced them, so a late-arriving event from a
//! just-replaced or just-closed source can never corrupt the state of the
//! newly opened one.

/// Monotonically increasing session identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionToken(u64);

impl SessionToken {
    /// Token for the initial, never-opened state.
    #[must_use]
    pub fn initial() -> Self {
        SessionToken(0)
    }

    /// The token following this one.
    #[must_use]
    pub fn next(self) -> Self {
        SessionToken(self.0 + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_tokens_are_distinct_and_ordered() {
        let first = SessionToken::initial();
        let second = first.next();
        let third = second.next();

        assert_ne!(first, second);
        assert_ne!(second, third);
        assert_eq!(first.next(), second);
    }
}
