//! Binary codec for mint guard configurations.
//!
//! A guard configuration holds a default guard set plus any number of
//! labeled groups, each with its own guard set. A guard set has one optional
//! slot for each of the 21 guard kinds in the [catalog](model::CATALOG).
//!
//! # Quick Start
//!
//! ```rust
//! use guard_codec::{deserialize_config, serialize_config, config_size};
//! use guard_codec::model::builder::ConfigBuilder;
//!
//! let treasury = [9u8; 32];
//! let config = ConfigBuilder::new()
//!     .default_guards(|g| g.start_date(1662394820))
//!     .group("VIP", |g| g.sol_payment(500, treasury))
//!     .group("OGs", |g| g.sol_payment(1000, treasury))
//!     .build();
//!
//! let bytes = serialize_config(&config).unwrap();
//! assert_eq!(bytes.len(), config_size(&config));
//!
//! let decoded = deserialize_config(&bytes).unwrap();
//! assert_eq!(decoded, config);
//! ```
//!
//! # Modules
//!
//! - [`model`]: Guard catalog, payloads, guard sets and configurations
//! - [`codec`]: Binary encoding/decoding
//! - [`validate`]: Semantic checks layered above the codec
//! - [`error`]: Error types
//! - [`limits`]: Wire-format constants
//! - [`util`]: Timestamp formatting for date guards
//!
//! # Wire Format
//!
//! A guard set is a little-endian `u64` presence mask followed by the
//! payloads of the present guards in bit order. Absent guards cost nothing.
//! A configuration is the default guard set, a little-endian `u32` group
//! count, then each group as a 6-byte zero-padded label and a guard set.
//!
//! The decoder is pure and bounds-checked: truncated input is reported as
//! [`DecodeError::TruncatedInput`] and no allocation is sized from an
//! unchecked count.

pub mod codec;
pub mod error;
pub mod limits;
pub mod model;
pub mod util;
pub mod validate;

// Re-export commonly used types at crate root
pub use codec::{
    config_size, deserialize_config, deserialize_config_at, deserialize_guard_set, guard_set_size,
    serialize_config, serialize_config_into, serialize_guard_set, DecodeOptions, EncodeOptions,
    GuardPayload, UnknownBitsPolicy,
};
pub use error::{DecodeError, EncodeError, ErrorKind, ValidationError};
pub use model::{
    width_of, ConfigBuilder, Group, GroupLabel, Guard, GuardConfiguration, GuardKind, GuardSet,
    GuardSetBuilder, Pubkey,
};
pub use validate::validate_config;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
