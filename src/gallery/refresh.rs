// SPDX-License-Identifier: MPL-2.0
//! Ordering of overlapping refreshes.
//!
//! Every refresh gets a token from a monotonically increasing counter. Only
//! the completion carrying the most recently issued token is applied, so a
//! slow early fetch can never overwrite the result of a later one.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RefreshToken(u64);

impl RefreshToken {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RefreshToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Default)]
pub struct RefreshSequencer {
    issued: u64,
}

impl RefreshSequencer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a token newer than every token issued before.
    pub fn issue(&mut self) -> RefreshToken {
        self.issued += 1;
        RefreshToken(self.issued)
    }

    #[must_use]
    pub fn is_latest(&self, token: RefreshToken) -> bool {
        self.issued != 0 && token.0 == self.issued
    }

    #[must_use]
    pub fn latest(&self) -> Option<RefreshToken> {
        (self.issued != 0).then_some(RefreshToken(self.issued))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_increase() {
        let mut seq = RefreshSequencer::new();
        let first = seq.issue();
        let second = seq.issue();
        assert!(second > first);
        assert_eq!(seq.latest(), Some(second));
    }

    #[test]
    fn only_latest_token_is_current() {
        let mut seq = RefreshSequencer::new();
        let first = seq.issue();
        assert!(seq.is_latest(first));
        let second = seq.issue();
        assert!(!seq.is_latest(first));
        assert!(seq.is_latest(second));
    }

    #[test]
    fn fresh_sequencer_has_no_latest() {
        let seq = RefreshSequencer::new();
        assert_eq!(seq.latest(), None);
    }
}
