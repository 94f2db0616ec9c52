// src/application/commands/generation/policy.rs

/// Whether a generation run may start while another one is still in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverlapPolicy {
    /// Overlapping runs proceed independently and each stores its own article.
    #[default]
    Allow,
    /// A run started while another is in flight is rejected with a conflict.
    SingleFlight,
}

impl OverlapPolicy {
    #[must_use]
    pub const fn from_single_flight(single_flight: bool) -> Self {
        if single_flight {
            Self::SingleFlight
        } else {
            Self::Allow
        }
    }
}
