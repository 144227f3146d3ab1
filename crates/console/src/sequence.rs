//! Request sequencing for list loads
//!
//! Every load takes a fresh token. When responses arrive out of order, only
//! the one carrying the latest token may touch the rendered rows.

/// Identifies one issued list request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestToken(u64);

/// Monotonic token source
#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a token that supersedes all earlier ones
    pub fn next(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    /// Whether no newer request has been issued since `token`
    pub fn is_latest(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }
}
