//! Load Sequencing
//!
//! Tickets for snapshot loads. A response is applied only when it is newer
//! than the last applied one.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSequence {
    issued: u64,
    applied: u64,
}

impl LoadSequence {
    pub fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Accept `ticket` if nothing newer has been applied yet
    pub fn accept(&mut self, ticket: u64) -> bool {
        if ticket <= self.applied {
            tracing::debug!(ticket, applied = self.applied, "dropping stale snapshot");
            return false;
        }
        self.applied = ticket;
        true
    }
}
