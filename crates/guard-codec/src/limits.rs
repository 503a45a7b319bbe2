//! Wire-format constants for guard configurations.
//!
//! These values are part of the on-chain layout. Changing any of them is a
//! wire-incompatible break.

/// Size of the little-endian presence mask that prefixes every guard set.
pub const MASK_SIZE: usize = 8;

/// Size of the little-endian group count that follows the default guard set.
pub const GROUP_COUNT_SIZE: usize = 4;

/// Fixed width of a group label slot.
pub const MAX_LABEL_SIZE: usize = 6;

/// Number of guard kinds in the catalog.
pub const GUARD_COUNT: usize = 21;

/// Mask with one bit set for every guard kind in the catalog (bits 0..=20).
pub const KNOWN_GUARD_MASK: u64 = (1u64 << GUARD_COUNT) - 1;

/// Maximum number of additional programs a ProgramGate guard may list.
pub const MAX_ADDITIONAL_PROGRAMS: usize = 5;

/// Size of a public key on the wire.
pub const PUBKEY_SIZE: usize = 32;

/// Smallest possible encoded group: a label slot plus an empty guard set.
pub const MIN_GROUP_SIZE: usize = MAX_LABEL_SIZE + MASK_SIZE;
