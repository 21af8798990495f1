//! Chunk lifecycle states.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle of a chunk.
///
/// ```text
/// Pending ──> Generating ──> Ready ──> Evicted
///    │                                   │
///    └──────────> Evicted <──────────────┘ (reset to Pending)
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChunkState {
    /// Queued for generation.
    Pending,
    /// Generation in progress.
    Generating,
    /// Geometry built and queryable.
    Ready,
    /// Geometry released; the biome assignment is kept.
    Evicted,
}

impl ChunkState {
    /// Whether moving from `self` to `to` is a legal transition.
    pub fn can_transition_to(self, to: ChunkState) -> bool {
        matches!(
            (self, to),
            (ChunkState::Pending, ChunkState::Generating)
                | (ChunkState::Generating, ChunkState::Ready)
                | (ChunkState::Ready, ChunkState::Evicted)
                | (ChunkState::Pending, ChunkState::Evicted)
                | (ChunkState::Evicted, ChunkState::Pending)
        )
    }

    /// Queued or generating; a further generation request is a no-op.
    pub fn is_in_flight(self) -> bool {
        matches!(self, ChunkState::Pending | ChunkState::Generating)
    }

    /// Counts against the resident budget.
    pub fn is_resident(self) -> bool {
        self != ChunkState::Evicted
    }
}

impl fmt::Display for ChunkState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChunkState::Pending => "pending",
            ChunkState::Generating => "generating",
            ChunkState::Ready => "ready",
            ChunkState::Evicted => "evicted",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ChunkState; 4] = [
        ChunkState::Pending,
        ChunkState::Generating,
        ChunkState::Ready,
        ChunkState::Evicted,
    ];

    #[test]
    fn test_allowed_transitions() {
        let allowed = [
            (ChunkState::Pending, ChunkState::Generating),
            (ChunkState::Generating, ChunkState::Ready),
            (ChunkState::Ready, ChunkState::Evicted),
            (ChunkState::Pending, ChunkState::Evicted),
            (ChunkState::Evicted, ChunkState::Pending),
        ];
        for from in ALL {
            for to in ALL {
                assert_eq!(
                    from.can_transition_to(to),
                    allowed.contains(&(from, to)),
                    "{from} -> {to}"
                );
            }
        }
    }

    #[test]
    fn test_no_self_transitions() {
        for s in ALL {
            assert!(!s.can_transition_to(s));
        }
    }

    #[test]
    fn test_flags() {
        assert!(ChunkState::Pending.is_in_flight());
        assert!(ChunkState::Generating.is_in_flight());
        assert!(!ChunkState::Ready.is_in_flight());
        assert!(!ChunkState::Evicted.is_resident());
        assert!(ChunkState::Ready.is_resident());
    }
}
