//! Binary encoding/decoding for guard configurations.
//!
//! Layered bottom-up: fixed-width primitives, per-guard payload layouts,
//! the presence-mask guard set, and the grouped configuration.

pub mod guard;
pub mod guard_config;
pub mod guard_set;
pub mod options;
pub mod primitives;

#[cfg(test)]
pub(crate) mod fixtures;

pub use guard::{decode_payload, encode_payload, GuardPayload};
pub use guard_config::{
    config_size, deserialize_config, deserialize_config_at, deserialize_config_at_with_options,
    deserialize_config_with_options, serialize_config, serialize_config_into,
    serialize_config_with_options,
};
pub use guard_set::{
    deserialize_guard_set, deserialize_guard_set_with_options, guard_set_size, serialize_guard_set,
};
pub use options::{DecodeOptions, EncodeOptions, UnknownBitsPolicy};
pub use primitives::{Reader, Writer};
