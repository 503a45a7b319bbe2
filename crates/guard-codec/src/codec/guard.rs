//! Per-guard payload encoding/decoding.
//!
//! Each guard kind has its own fixed-width record layout. The guard set codec
//! never looks inside a payload: it walks [`GUARD_CODECS`], which holds one
//! entry per catalog row, and hands each present payload to that row's
//! encoder or decoder.

use crate::codec::primitives::{Reader, Writer};
use crate::error::{DecodeError, EncodeError};
use crate::limits::{GUARD_COUNT, MAX_ADDITIONAL_PROGRAMS, PUBKEY_SIZE};
use crate::model::guards::{
    AddressGate, Allocation, AllowList, BotTax, EndDate, FreezeSolPayment, FreezeTokenPayment,
    Gatekeeper, Guard, MintLimit, NftBurn, NftGate, NftPayment, ProgramGate, RedeemedAmount,
    SolPayment, StartDate, ThirdPartySigner, Token2022Payment, TokenBurn, TokenGate, TokenPayment,
};
use crate::model::{GuardKind, GuardSet};

/// Fixed-width binary layout of a guard payload.
///
/// `encode` must write exactly [`GuardPayload::WIDTH`] bytes. `decode` is
/// handed a reader over exactly `WIDTH` bytes; unread trailing bytes in that
/// window are padding.
pub trait GuardPayload: Guard {
    /// Serialized width, taken from the catalog.
    const WIDTH: usize = Self::KIND.byte_width() as usize;

    fn encode(&self, writer: &mut Writer) -> Result<(), EncodeError>;

    fn decode(reader: &mut Reader<'_>) -> Result<Self, DecodeError>;
}

/// Encodes a single payload to exactly `G::WIDTH` bytes.
pub fn encode_payload<G: GuardPayload>(guard: &G) -> Result<Vec<u8>, EncodeError> {
    let mut writer = Writer::with_capacity(G::WIDTH);
    guard.encode(&mut writer)?;
    debug_assert_eq!(writer.len(), G::WIDTH, "{} wrote the wrong width", G::KIND);
    Ok(writer.into_bytes())
}

/// Decodes a single payload from the first `G::WIDTH` bytes of `data`.
pub fn decode_payload<G: GuardPayload>(data: &[u8]) -> Result<G, DecodeError> {
    let mut reader = Reader::new(data);
    let window = reader.read_bytes(G::WIDTH, G::KIND.name())?;
    G::decode(&mut Reader::new(window))
}

// =============================================================================
// DISPATCH TABLE
// =============================================================================

/// Type-erased codec for one catalog row.
#[derive(Clone, Copy)]
pub(crate) struct GuardCodec {
    pub kind: GuardKind,
    /// Writes the payload if present; returns whether it was.
    pub encode: fn(&GuardSet, &mut Writer) -> Result<bool, EncodeError>,
    /// Decodes a payload window into the matching slot.
    pub decode: fn(&[u8], &mut GuardSet) -> Result<(), DecodeError>,
}

fn encode_slot<G: GuardPayload>(set: &GuardSet, writer: &mut Writer) -> Result<bool, EncodeError> {
    let Some(guard) = G::get(set) else {
        return Ok(false);
    };
    let start = writer.len();
    guard.encode(writer)?;
    debug_assert_eq!(writer.len() - start, G::WIDTH, "{} wrote the wrong width", G::KIND);
    Ok(true)
}

fn decode_slot<G: GuardPayload>(window: &[u8], set: &mut GuardSet) -> Result<(), DecodeError> {
    let guard = G::decode(&mut Reader::new(window))?;
    *G::slot(set) = Some(guard);
    Ok(())
}

const fn codec<G: GuardPayload>() -> GuardCodec {
    GuardCodec {
        kind: G::KIND,
        encode: encode_slot::<G>,
        decode: decode_slot::<G>,
    }
}

/// One codec per catalog row, indexed by bit position.
pub(crate) const GUARD_CODECS: [GuardCodec; GUARD_COUNT] = [
    codec::<BotTax>(),
    codec::<SolPayment>(),
    codec::<TokenPayment>(),
    codec::<StartDate>(),
    codec::<ThirdPartySigner>(),
    codec::<TokenGate>(),
    codec::<Gatekeeper>(),
    codec::<EndDate>(),
    codec::<AllowList>(),
    codec::<MintLimit>(),
    codec::<NftPayment>(),
    codec::<RedeemedAmount>(),
    codec::<AddressGate>(),
    codec::<NftGate>(),
    codec::<NftBurn>(),
    codec::<TokenBurn>(),
    codec::<FreezeSolPayment>(),
    codec::<FreezeTokenPayment>(),
    codec::<ProgramGate>(),
    codec::<Allocation>(),
    codec::<Token2022Payment>(),
];

// =============================================================================
// PAYLOAD LAYOUTS
// =============================================================================

impl GuardPayload for BotTax {
    fn encode(&self, writer: &mut Writer) -> Result<(), EncodeError> {
        writer.write_u64(self.lamports);
        writer.write_bool(self.last_instruction);
        Ok(())
    }

    fn decode(reader: &mut Reader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            lamports: reader.read_u64("botTax.lamports")?,
            last_instruction: reader.read_bool("botTax.lastInstruction")?,
        })
    }
}

impl GuardPayload for SolPayment {
    fn encode(&self, writer: &mut Writer) -> Result<(), EncodeError> {
        writer.write_u64(self.lamports);
        writer.write_pubkey(&self.destination);
        Ok(())
    }

    fn decode(reader: &mut Reader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            lamports: reader.read_u64("solPayment.lamports")?,
            destination: reader.read_pubkey("solPayment.destination")?,
        })
    }
}

impl GuardPayload for TokenPayment {
    fn encode(&self, writer: &mut Writer) -> Result<(), EncodeError> {
        writer.write_u64(self.amount);
        writer.write_pubkey(&self.mint);
        writer.write_pubkey(&self.destination_ata);
        Ok(())
    }

    fn decode(reader: &mut Reader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            amount: reader.read_u64("tokenPayment.amount")?,
            mint: reader.read_pubkey("tokenPayment.mint")?,
            destination_ata: reader.read_pubkey("tokenPayment.destinationAta")?,
        })
    }
}

impl GuardPayload for StartDate {
    fn encode(&self, writer: &mut Writer) -> Result<(), EncodeError> {
        writer.write_i64(self.date);
        Ok(())
    }

    fn decode(reader: &mut Reader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            date: reader.read_i64("startDate.date")?,
        })
    }
}

impl GuardPayload for ThirdPartySigner {
    fn encode(&self, writer: &mut Writer) -> Result<(), EncodeError> {
        writer.write_pubkey(&self.signer_key);
        Ok(())
    }

    fn decode(reader: &mut Reader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            signer_key: reader.read_pubkey("thirdPartySigner.signerKey")?,
        })
    }
}

impl GuardPayload for TokenGate {
    fn encode(&self, writer: &mut Writer) -> Result<(), EncodeError> {
        writer.write_u64(self.amount);
        writer.write_pubkey(&self.mint);
        Ok(())
    }

    fn decode(reader: &mut Reader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            amount: reader.read_u64("tokenGate.amount")?,
            mint: reader.read_pubkey("tokenGate.mint")?,
        })
    }
}

impl GuardPayload for Gatekeeper {
    fn encode(&self, writer: &mut Writer) -> Result<(), EncodeError> {
        writer.write_pubkey(&self.gatekeeper_network);
        writer.write_bool(self.expire_on_use);
        Ok(())
    }

    fn decode(reader: &mut Reader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            gatekeeper_network: reader.read_pubkey("gatekeeper.gatekeeperNetwork")?,
            expire_on_use: reader.read_bool("gatekeeper.expireOnUse")?,
        })
    }
}

impl GuardPayload for EndDate {
    fn encode(&self, writer: &mut Writer) -> Result<(), EncodeError> {
        writer.write_i64(self.date);
        Ok(())
    }

    fn decode(reader: &mut Reader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            date: reader.read_i64("endDate.date")?,
        })
    }
}

impl GuardPayload for AllowList {
    fn encode(&self, writer: &mut Writer) -> Result<(), EncodeError> {
        writer.write_bytes(&self.merkle_root);
        Ok(())
    }

    fn decode(reader: &mut Reader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            merkle_root: reader.read_array("allowList.merkleRoot")?,
        })
    }
}

impl GuardPayload for MintLimit {
    fn encode(&self, writer: &mut Writer) -> Result<(), EncodeError> {
        writer.write_u8(self.id);
        writer.write_u16(self.limit);
        Ok(())
    }

    fn decode(reader: &mut Reader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            id: reader.read_u8("mintLimit.id")?,
            limit: reader.read_u16("mintLimit.limit")?,
        })
    }
}

impl GuardPayload for NftPayment {
    fn encode(&self, writer: &mut Writer) -> Result<(), EncodeError> {
        writer.write_pubkey(&self.required_collection);
        writer.write_pubkey(&self.destination);
        Ok(())
    }

    fn decode(reader: &mut Reader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            required_collection: reader.read_pubkey("nftPayment.requiredCollection")?,
            destination: reader.read_pubkey("nftPayment.destination")?,
        })
    }
}

impl GuardPayload for RedeemedAmount {
    fn encode(&self, writer: &mut Writer) -> Result<(), EncodeError> {
        writer.write_u64(self.maximum);
        Ok(())
    }

    fn decode(reader: &mut Reader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            maximum: reader.read_u64("redeemedAmount.maximum")?,
        })
    }
}

impl GuardPayload for AddressGate {
    fn encode(&self, writer: &mut Writer) -> Result<(), EncodeError> {
        writer.write_pubkey(&self.address);
        Ok(())
    }

    fn decode(reader: &mut Reader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            address: reader.read_pubkey("addressGate.address")?,
        })
    }
}

impl GuardPayload for NftGate {
    fn encode(&self, writer: &mut Writer) -> Result<(), EncodeError> {
        writer.write_pubkey(&self.required_collection);
        Ok(())
    }

    fn decode(reader: &mut Reader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            required_collection: reader.read_pubkey("nftGate.requiredCollection")?,
        })
    }
}

impl GuardPayload for NftBurn {
    fn encode(&self, writer: &mut Writer) -> Result<(), EncodeError> {
        writer.write_pubkey(&self.required_collection);
        Ok(())
    }

    fn decode(reader: &mut Reader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            required_collection: reader.read_pubkey("nftBurn.requiredCollection")?,
        })
    }
}

impl GuardPayload for TokenBurn {
    fn encode(&self, writer: &mut Writer) -> Result<(), EncodeError> {
        writer.write_u64(self.amount);
        writer.write_pubkey(&self.mint);
        Ok(())
    }

    fn decode(reader: &mut Reader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            amount: reader.read_u64("tokenBurn.amount")?,
            mint: reader.read_pubkey("tokenBurn.mint")?,
        })
    }
}

impl GuardPayload for FreezeSolPayment {
    fn encode(&self, writer: &mut Writer) -> Result<(), EncodeError> {
        writer.write_u64(self.lamports);
        writer.write_pubkey(&self.destination);
        Ok(())
    }

    fn decode(reader: &mut Reader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            lamports: reader.read_u64("freezeSolPayment.lamports")?,
            destination: reader.read_pubkey("freezeSolPayment.destination")?,
        })
    }
}

impl GuardPayload for FreezeTokenPayment {
    fn encode(&self, writer: &mut Writer) -> Result<(), EncodeError> {
        writer.write_u64(self.amount);
        writer.write_pubkey(&self.mint);
        writer.write_pubkey(&self.destination_ata);
        Ok(())
    }

    fn decode(reader: &mut Reader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            amount: reader.read_u64("freezeTokenPayment.amount")?,
            mint: reader.read_pubkey("freezeTokenPayment.mint")?,
            destination_ata: reader.read_pubkey("freezeTokenPayment.destinationAta")?,
        })
    }
}

/// Layout: u32 count, `count` keys, then zero padding up to the full
/// five-key allowance so the record keeps its fixed width.
///
/// Decoding ignores the unused key slots. Non-zero bytes there are
/// accepted and come back as zeros on re-encode.
impl GuardPayload for ProgramGate {
    fn encode(&self, writer: &mut Writer) -> Result<(), EncodeError> {
        let len = self.additional.len();
        if len > MAX_ADDITIONAL_PROGRAMS {
            return Err(EncodeError::AdditionalListTooLong {
                len,
                max: MAX_ADDITIONAL_PROGRAMS,
            });
        }
        writer.write_u32(len as u32);
        for program in &self.additional {
            writer.write_pubkey(program);
        }
        writer.write_zeros((MAX_ADDITIONAL_PROGRAMS - len) * PUBKEY_SIZE);
        Ok(())
    }

    fn decode(reader: &mut Reader<'_>) -> Result<Self, DecodeError> {
        let len = reader.read_u32("programGate.additional")? as usize;
        if len > MAX_ADDITIONAL_PROGRAMS {
            return Err(DecodeError::AdditionalListTooLong {
                len,
                max: MAX_ADDITIONAL_PROGRAMS,
            });
        }
        let mut additional = Vec::with_capacity(len);
        for _ in 0..len {
            additional.push(reader.read_pubkey("programGate.additional")?);
        }
        Ok(Self { additional })
    }
}

impl GuardPayload for Allocation {
    fn encode(&self, writer: &mut Writer) -> Result<(), EncodeError> {
        writer.write_u8(self.id);
        writer.write_u32(self.limit);
        Ok(())
    }

    fn decode(reader: &mut Reader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            id: reader.read_u8("allocation.id")?,
            limit: reader.read_u32("allocation.limit")?,
        })
    }
}

impl GuardPayload for Token2022Payment {
    fn encode(&self, writer: &mut Writer) -> Result<(), EncodeError> {
        writer.write_u64(self.amount);
        writer.write_pubkey(&self.mint);
        writer.write_pubkey(&self.destination_ata);
        Ok(())
    }

    fn decode(reader: &mut Reader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            amount: reader.read_u64("token2022Payment.amount")?,
            mint: reader.read_pubkey("token2022Payment.mint")?,
            destination_ata: reader.read_pubkey("token2022Payment.destinationAta")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::fixtures::full_set;
    use crate::model::CATALOG;

    #[test]
    fn test_dispatch_table_matches_catalog() {
        for (i, codec) in GUARD_CODECS.iter().enumerate() {
            assert_eq!(codec.kind, CATALOG[i].kind);
        }
    }

    #[test]
    fn test_every_payload_writes_catalog_width() {
        let set = full_set();
        for codec in GUARD_CODECS.iter() {
            let mut writer = Writer::new();
            assert!((codec.encode)(&set, &mut writer).unwrap(), "{} absent", codec.kind);
            assert_eq!(writer.len(), codec.kind.byte_width() as usize, "{}", codec.kind);
        }
    }

    #[test]
    fn test_every_payload_roundtrips_through_table() {
        let set = full_set();
        let mut decoded = GuardSet::new();
        for codec in GUARD_CODECS.iter() {
            let mut writer = Writer::new();
            (codec.encode)(&set, &mut writer).unwrap();
            (codec.decode)(writer.as_bytes(), &mut decoded).unwrap();
        }
        assert_eq!(decoded, set);
    }

    #[test]
    fn test_absent_payload_writes_nothing() {
        let set = GuardSet::new();
        let mut writer = Writer::new();
        for codec in GUARD_CODECS.iter() {
            assert!(!(codec.encode)(&set, &mut writer).unwrap());
        }
        assert!(writer.is_empty());
    }

    #[test]
    fn test_mint_limit_layout() {
        let bytes = encode_payload(&MintLimit { id: 7, limit: 0x0102 }).unwrap();
        assert_eq!(bytes, vec![7, 0x02, 0x01]);
    }

    #[test]
    fn test_sol_payment_layout() {
        let bytes = encode_payload(&SolPayment { lamports: 500, destination: [0xab; 32] }).unwrap();
        assert_eq!(&bytes[..8], &500u64.to_le_bytes());
        assert_eq!(&bytes[8..], &[0xab; 32]);
    }

    #[test]
    fn test_program_gate_padding() {
        let gate = ProgramGate { additional: vec![[1; 32]] };
        let bytes = encode_payload(&gate).unwrap();
        assert_eq!(bytes.len(), 164);
        assert_eq!(&bytes[..4], &[1, 0, 0, 0]);
        assert_eq!(&bytes[4..36], &[1; 32]);
        assert!(bytes[36..].iter().all(|b| *b == 0));

        assert_eq!(decode_payload::<ProgramGate>(&bytes).unwrap(), gate);
    }

    #[test]
    fn test_program_gate_ignores_padding_bytes() {
        let gate = ProgramGate { additional: vec![[1; 32]] };
        let mut bytes = encode_payload(&gate).unwrap();
        bytes[100] = 0x55;

        let decoded = decode_payload::<ProgramGate>(&bytes).unwrap();
        assert_eq!(decoded, gate);

        let reencoded = encode_payload(&decoded).unwrap();
        assert_eq!(reencoded[100], 0);
        assert_eq!(&reencoded[..36], &bytes[..36]);
    }

    #[test]
    fn test_program_gate_full_list() {
        let gate = ProgramGate { additional: vec![[9; 32]; MAX_ADDITIONAL_PROGRAMS] };
        let bytes = encode_payload(&gate).unwrap();
        assert_eq!(bytes.len(), 164);
        assert_eq!(decode_payload::<ProgramGate>(&bytes).unwrap(), gate);
    }

    #[test]
    fn test_program_gate_list_too_long() {
        let gate = ProgramGate { additional: vec![[1; 32]; MAX_ADDITIONAL_PROGRAMS + 1] };
        let result = encode_payload(&gate);
        assert!(matches!(result, Err(EncodeError::AdditionalListTooLong { len: 6, max: 5 })));
    }

    #[test]
    fn test_program_gate_stored_count_too_large() {
        let mut bytes = vec![0u8; 164];
        bytes[0] = 6;
        let result = decode_payload::<ProgramGate>(&bytes);
        assert!(matches!(result, Err(DecodeError::AdditionalListTooLong { len: 6, max: 5 })));
    }

    #[test]
    fn test_decode_payload_truncated() {
        let result = decode_payload::<TokenPayment>(&[0u8; 71]);
        assert!(matches!(
            result,
            Err(DecodeError::TruncatedInput { needed: 72, remaining: 71, .. })
        ));
    }

    #[test]
    fn test_gatekeeper_invalid_bool() {
        let mut bytes = vec![0u8; 33];
        bytes[32] = 2;
        let result = decode_payload::<Gatekeeper>(&bytes);
        assert!(matches!(result, Err(DecodeError::InvalidBool { value: 2, .. })));
    }
}
