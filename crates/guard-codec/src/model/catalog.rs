//! The guard catalog: every guard kind with its presence bit and wire width.
//!
//! Bit `i` of a guard set's presence mask always refers to `CATALOG[i]`.
//! Encoding and decoding both walk this table in index order, so the two
//! directions can never disagree on field order.

use std::fmt;

use crate::limits::GUARD_COUNT;

/// A guard kind.
///
/// The discriminant is the presence bit index and is never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum GuardKind {
    BotTax = 0,
    SolPayment = 1,
    TokenPayment = 2,
    StartDate = 3,
    ThirdPartySigner = 4,
    TokenGate = 5,
    Gatekeeper = 6,
    EndDate = 7,
    AllowList = 8,
    MintLimit = 9,
    NftPayment = 10,
    RedeemedAmount = 11,
    AddressGate = 12,
    NftGate = 13,
    NftBurn = 14,
    TokenBurn = 15,
    FreezeSolPayment = 16,
    FreezeTokenPayment = 17,
    ProgramGate = 18,
    Allocation = 19,
    Token2022Payment = 20,
}

/// One row of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub kind: GuardKind,
    pub name: &'static str,
    pub bit_index: u8,
    /// Serialized payload size in bytes when the guard is present.
    pub byte_width: u32,
}

const fn entry(kind: GuardKind, name: &'static str, byte_width: u32) -> CatalogEntry {
    CatalogEntry {
        kind,
        name,
        bit_index: kind as u8,
        byte_width,
    }
}

/// The catalog, indexed by bit position.
pub const CATALOG: [CatalogEntry; GUARD_COUNT] = [
    entry(GuardKind::BotTax, "botTax", 9),
    entry(GuardKind::SolPayment, "solPayment", 40),
    entry(GuardKind::TokenPayment, "tokenPayment", 72),
    entry(GuardKind::StartDate, "startDate", 8),
    entry(GuardKind::ThirdPartySigner, "thirdPartySigner", 32),
    entry(GuardKind::TokenGate, "tokenGate", 40),
    entry(GuardKind::Gatekeeper, "gatekeeper", 33),
    entry(GuardKind::EndDate, "endDate", 8),
    entry(GuardKind::AllowList, "allowList", 32),
    entry(GuardKind::MintLimit, "mintLimit", 3),
    entry(GuardKind::NftPayment, "nftPayment", 64),
    entry(GuardKind::RedeemedAmount, "redeemedAmount", 8),
    entry(GuardKind::AddressGate, "addressGate", 32),
    entry(GuardKind::NftGate, "nftGate", 32),
    entry(GuardKind::NftBurn, "nftBurn", 32),
    entry(GuardKind::TokenBurn, "tokenBurn", 40),
    entry(GuardKind::FreezeSolPayment, "freezeSolPayment", 40),
    entry(GuardKind::FreezeTokenPayment, "freezeTokenPayment", 72),
    entry(GuardKind::ProgramGate, "programGate", 164),
    entry(GuardKind::Allocation, "allocation", 5),
    entry(GuardKind::Token2022Payment, "token2022Payment", 72),
];

impl GuardKind {
    /// All guard kinds in bit order.
    pub const ALL: [GuardKind; GUARD_COUNT] = [
        GuardKind::BotTax,
        GuardKind::SolPayment,
        GuardKind::TokenPayment,
        GuardKind::StartDate,
        GuardKind::ThirdPartySigner,
        GuardKind::TokenGate,
        GuardKind::Gatekeeper,
        GuardKind::EndDate,
        GuardKind::AllowList,
        GuardKind::MintLimit,
        GuardKind::NftPayment,
        GuardKind::RedeemedAmount,
        GuardKind::AddressGate,
        GuardKind::NftGate,
        GuardKind::NftBurn,
        GuardKind::TokenBurn,
        GuardKind::FreezeSolPayment,
        GuardKind::FreezeTokenPayment,
        GuardKind::ProgramGate,
        GuardKind::Allocation,
        GuardKind::Token2022Payment,
    ];

    /// Looks up a guard kind by presence bit index.
    pub const fn from_bit(bit: u8) -> Option<Self> {
        if (bit as usize) < GUARD_COUNT {
            Some(CATALOG[bit as usize].kind)
        } else {
            None
        }
    }

    /// Returns this kind's catalog row.
    #[inline]
    pub const fn entry(self) -> CatalogEntry {
        CATALOG[self as usize]
    }

    /// Presence bit index (0..=20).
    #[inline]
    pub const fn bit_index(self) -> u8 {
        self as u8
    }

    /// The presence mask with only this kind's bit set.
    #[inline]
    pub const fn mask_bit(self) -> u64 {
        1u64 << (self as u8)
    }

    /// Serialized payload width in bytes.
    #[inline]
    pub const fn byte_width(self) -> u32 {
        CATALOG[self as usize].byte_width
    }

    /// Wire name of the guard (camelCase, as used by client tooling).
    pub const fn name(self) -> &'static str {
        CATALOG[self as usize].name
    }
}

impl fmt::Display for GuardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns the serialized payload width of a guard kind.
#[inline]
pub const fn width_of(kind: GuardKind) -> u32 {
    kind.byte_width()
}
