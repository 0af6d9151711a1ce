//! Budget value - the shared point ceiling

use serde::Serialize;

/// Points spent across all paths against a fixed ceiling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Budget {
    spent: u32,
    total: u32,
}

impl Budget {
    /// Create an unspent budget with the given ceiling
    pub fn new(total: u32) -> Self {
        Self { spent: 0, total }
    }

    pub fn spent(&self) -> u32 {
        self.spent
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn remaining(&self) -> u32 {
        self.total.saturating_sub(self.spent)
    }

    pub fn is_exhausted(&self) -> bool {
        self.spent >= self.total
    }

    pub(crate) fn spend(&mut self) {
        debug_assert!(self.spent < self.total);
        self.spent += 1;
    }

    pub(crate) fn refund(&mut self) {
        debug_assert!(self.spent > 0);
        self.spent -= 1;
    }
}
