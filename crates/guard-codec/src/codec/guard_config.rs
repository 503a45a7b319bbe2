//! Guard configuration encoding/decoding.
//!
//! Wire format:
//!
//! ```text
//! default: GuardSet
//! group_count: u32 (LE)
//! group_count x { label: [u8; 6] zero padded, guards: GuardSet }
//! ```
//!
//! On chain this is the tail of an account whose header is defined
//! elsewhere; [`deserialize_config_at`] and [`serialize_config_into`] take
//! the header length as an offset.

use tracing::debug;

use crate::codec::guard_set::{guard_set_size, read_guard_set, write_guard_set};
use crate::codec::options::{DecodeOptions, EncodeOptions};
use crate::codec::primitives::{Reader, Writer};
use crate::error::{DecodeError, EncodeError};
use crate::limits::{GROUP_COUNT_SIZE, MAX_ADDITIONAL_PROGRAMS, MAX_LABEL_SIZE, MIN_GROUP_SIZE};
use crate::model::{Group, GuardConfiguration, GuardSet};
use crate::validate::validate_config;

// =============================================================================
// SIZE
// =============================================================================

/// Returns the exact encoded size of a configuration.
///
/// Labels are counted at their fixed slot width, so the result is only
/// meaningful for configurations that encode successfully.
pub fn config_size(config: &GuardConfiguration) -> usize {
    guard_set_size(&config.default)
        + GROUP_COUNT_SIZE
        + config
            .groups()
            .iter()
            .map(|group| MAX_LABEL_SIZE + guard_set_size(&group.guards))
            .sum::<usize>()
}

// =============================================================================
// DECODING
// =============================================================================

/// Decodes a configuration from the start of `data`.
pub fn deserialize_config(data: &[u8]) -> Result<GuardConfiguration, DecodeError> {
    deserialize_config_at_with_options(data, 0, DecodeOptions::default())
}

/// Decodes a configuration starting `offset` bytes into `data`.
pub fn deserialize_config_at(data: &[u8], offset: usize) -> Result<GuardConfiguration, DecodeError> {
    deserialize_config_at_with_options(data, offset, DecodeOptions::default())
}

/// Decodes a configuration from the start of `data` with custom options.
pub fn deserialize_config_with_options(
    data: &[u8],
    options: DecodeOptions,
) -> Result<GuardConfiguration, DecodeError> {
    deserialize_config_at_with_options(data, 0, options)
}

/// Decodes a configuration starting `offset` bytes into `data` with custom options.
pub fn deserialize_config_at_with_options(
    data: &[u8],
    offset: usize,
    options: DecodeOptions,
) -> Result<GuardConfiguration, DecodeError> {
    let mut reader = Reader::new(data);
    reader.skip(offset, "account header")?;

    let default = read_guard_set(&mut reader, options)?;

    let count = reader.read_u32("group count")? as usize;
    // A corrupt count must not drive a huge allocation
    let mut groups = Vec::with_capacity(count.min(reader.remaining_len() / MIN_GROUP_SIZE));
    for _ in 0..count {
        groups.push(read_group(&mut reader, options)?);
    }

    if options.require_exact_length && !reader.is_empty() {
        return Err(DecodeError::TrailingBytes {
            count: reader.remaining_len(),
        });
    }

    debug!(
        groups = groups.len(),
        len = reader.position() - offset,
        "decoded guard configuration"
    );

    Ok(GuardConfiguration {
        default,
        groups: if groups.is_empty() { None } else { Some(groups) },
    })
}

fn read_group(reader: &mut Reader<'_>, options: DecodeOptions) -> Result<Group, DecodeError> {
    let label = reader.read_fixed_str(MAX_LABEL_SIZE, "group label")?;
    let guards = read_guard_set(reader, options)?;
    Ok(Group {
        label: label.into(),
        guards,
    })
}

// =============================================================================
// ENCODING
// =============================================================================

/// Encodes a configuration.
pub fn serialize_config(config: &GuardConfiguration) -> Result<Vec<u8>, EncodeError> {
    serialize_config_with_options(config, EncodeOptions::default())
}

/// Encodes a configuration with custom options.
///
/// All input checks run before any byte is produced.
pub fn serialize_config_with_options(
    config: &GuardConfiguration,
    options: EncodeOptions,
) -> Result<Vec<u8>, EncodeError> {
    check_encodable(config)?;
    if options.validate {
        validate_config(config)?;
    }

    let size = config_size(config);
    let mut writer = Writer::with_capacity(size);

    write_guard_set(&mut writer, &config.default)?;
    writer.write_u32(config.groups().len() as u32);
    for group in config.groups() {
        writer.write_fixed_str(group.label.as_str(), MAX_LABEL_SIZE);
        write_guard_set(&mut writer, &group.guards)?;
    }

    debug_assert_eq!(writer.len(), size);
    debug!(groups = config.groups().len(), len = size, "encoded guard configuration");
    Ok(writer.into_bytes())
}

/// Encodes a configuration into `buf` starting at `offset`.
///
/// Returns the number of bytes written. `buf` is left untouched on error.
pub fn serialize_config_into(
    config: &GuardConfiguration,
    buf: &mut [u8],
    offset: usize,
) -> Result<usize, EncodeError> {
    let size = config_size(config);
    let needed = offset
        .checked_add(size)
        .filter(|end| *end <= buf.len())
        .ok_or(EncodeError::BufferTooSmall {
            needed: offset.saturating_add(size),
            available: buf.len(),
        })?;

    let bytes = serialize_config(config)?;
    buf[offset..needed].copy_from_slice(&bytes);
    Ok(bytes.len())
}

/// Checks the fixed-width limits that encoding cannot represent.
fn check_encodable(config: &GuardConfiguration) -> Result<(), EncodeError> {
    check_guard_set(&config.default)?;
    for group in config.groups() {
        let len = group.label.len();
        if len > MAX_LABEL_SIZE {
            return Err(EncodeError::LabelTooLong {
                label: group.label.as_str().to_string(),
                len,
                max: MAX_LABEL_SIZE,
            });
        }
        check_guard_set(&group.guards)?;
    }
    Ok(())
}

fn check_guard_set(set: &GuardSet) -> Result<(), EncodeError> {
    if let Some(gate) = &set.program_gate {
        let len = gate.additional.len();
        if len > MAX_ADDITIONAL_PROGRAMS {
            return Err(EncodeError::AdditionalListTooLong {
                len,
                max: MAX_ADDITIONAL_PROGRAMS,
            });
        }
    }
    Ok(())
}
