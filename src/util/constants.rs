//! Centralized limits for the path engine

// ═══════════════════════════════════════════════════════════════
// Write Limits
// ═══════════════════════════════════════════════════════════════

/// Largest run of nil slots `set` will pad onto a sequence
///
/// An index further past the end turns the sequence into a mapping keyed by
/// stringified indexes instead of allocating the gap.
pub const MAX_SEQUENCE_GAP: usize = 1024;

// ═══════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════
