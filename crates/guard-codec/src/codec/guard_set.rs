//! Guard set encoding/decoding.
//!
//! Wire format:
//!
//! ```text
//! mask: u64 (LE)          bit i set => CATALOG[i] present
//! payload[i] for each set bit, in bit order, CATALOG[i].byte_width bytes each
//! ```

use tracing::{trace, warn};

use crate::codec::guard::GUARD_CODECS;
use crate::codec::options::{DecodeOptions, UnknownBitsPolicy};
use crate::codec::primitives::{Reader, Writer};
use crate::error::{DecodeError, EncodeError};
use crate::limits::{KNOWN_GUARD_MASK, MASK_SIZE};
use crate::model::GuardSet;

/// Returns the exact encoded size of a guard set.
pub fn guard_set_size(set: &GuardSet) -> usize {
    MASK_SIZE
        + set
            .enabled_kinds()
            .map(|kind| kind.byte_width() as usize)
            .sum::<usize>()
}

/// Encodes a guard set.
pub fn serialize_guard_set(set: &GuardSet) -> Result<Vec<u8>, EncodeError> {
    let mut writer = Writer::with_capacity(guard_set_size(set));
    write_guard_set(&mut writer, set)?;
    Ok(writer.into_bytes())
}

/// Decodes a guard set starting at `offset`.
///
/// Returns the guard set and the number of bytes consumed.
pub fn deserialize_guard_set(data: &[u8], offset: usize) -> Result<(GuardSet, usize), DecodeError> {
    deserialize_guard_set_with_options(data, offset, DecodeOptions::default())
}

/// Decodes a guard set starting at `offset` with custom options.
pub fn deserialize_guard_set_with_options(
    data: &[u8],
    offset: usize,
    options: DecodeOptions,
) -> Result<(GuardSet, usize), DecodeError> {
    let mut reader = Reader::new(data);
    reader.skip(offset, "guard set offset")?;
    let set = read_guard_set(&mut reader, options)?;
    Ok((set, reader.position() - offset))
}

/// Writes a guard set: a reserved mask word, the present payloads, then the
/// mask patched in.
pub(crate) fn write_guard_set(writer: &mut Writer, set: &GuardSet) -> Result<(), EncodeError> {
    let mask_pos = writer.len();
    writer.write_u64(0);

    let mut mask = 0u64;
    for codec in GUARD_CODECS.iter() {
        if (codec.encode)(set, writer)? {
            mask |= codec.kind.mask_bit();
        }
    }

    writer.patch_u64(mask_pos, mask);
    trace!(mask, len = writer.len() - mask_pos, "encoded guard set");
    Ok(())
}

/// Reads a guard set at the reader's position.
pub(crate) fn read_guard_set(reader: &mut Reader<'_>, options: DecodeOptions) -> Result<GuardSet, DecodeError> {
    let start = reader.position();
    let mask = reader.read_u64("guard set mask")?;

    let unknown = mask & !KNOWN_GUARD_MASK;
    if unknown != 0 {
        match options.unknown_bits {
            UnknownBitsPolicy::Reject => return Err(DecodeError::UnknownGuardBits { mask }),
            UnknownBitsPolicy::Ignore => {
                warn!(mask, unknown, "ignoring presence bits outside the guard catalog");
            }
        }
    }

    let mut set = GuardSet::default();
    for codec in GUARD_CODECS.iter() {
        if mask & codec.kind.mask_bit() == 0 {
            continue;
        }
        let window = reader.read_bytes(codec.kind.byte_width() as usize, codec.kind.name())?;
        (codec.decode)(window, &mut set)?;
    }

    trace!(mask, len = reader.position() - start, "decoded guard set");
    Ok(set)
}
