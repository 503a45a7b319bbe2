//! Payload types for each guard kind.
//!
//! These are plain data. Their byte layout lives in [`crate::codec::guard`];
//! what the guards mean at mint time is up to the program evaluating them.

use crate::model::{GuardKind, GuardSet, Pubkey};

/// A payload type bound to one slot of a [`GuardSet`].
pub trait Guard: Sized {
    /// The catalog kind this payload belongs to.
    const KIND: GuardKind;

    /// Returns this guard from a guard set, if present.
    fn get(set: &GuardSet) -> Option<&Self>;

    /// Returns the guard set slot holding this guard.
    fn slot(set: &mut GuardSet) -> &mut Option<Self>;
}

macro_rules! impl_guard {
    ($ty:ident, $kind:ident, $field:ident) => {
        impl Guard for $ty {
            const KIND: GuardKind = GuardKind::$kind;

            #[inline]
            fn get(set: &GuardSet) -> Option<&Self> {
                set.$field.as_ref()
            }

            #[inline]
            fn slot(set: &mut GuardSet) -> &mut Option<Self> {
                &mut set.$field
            }
        }
    };
}

/// Charges a penalty instead of failing the mint when another guard rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BotTax {
    pub lamports: u64,
    /// Whether the mint instruction must be the last one in its transaction.
    pub last_instruction: bool,
}

/// Charges lamports, transferred to `destination`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SolPayment {
    pub lamports: u64,
    pub destination: Pubkey,
}

/// Charges an amount of a fungible token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TokenPayment {
    pub amount: u64,
    pub mint: Pubkey,
    pub destination_ata: Pubkey,
}

/// Minting opens at this unix timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StartDate {
    pub date: i64,
}

/// Requires a signature from an additional key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThirdPartySigner {
    pub signer_key: Pubkey,
}

/// Requires holding a minimum amount of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TokenGate {
    pub amount: u64,
    pub mint: Pubkey,
}

/// Requires a valid gateway token from a gatekeeper network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Gatekeeper {
    pub gatekeeper_network: Pubkey,
    pub expire_on_use: bool,
}

/// Minting closes at this unix timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EndDate {
    pub date: i64,
}

/// Restricts minting to members of a merkle tree. The root is opaque here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AllowList {
    pub merkle_root: [u8; 32],
}

/// Caps mints per wallet, tracked under a caller-chosen counter id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MintLimit {
    pub id: u8,
    pub limit: u16,
}

/// Charges an NFT from a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NftPayment {
    pub required_collection: Pubkey,
    pub destination: Pubkey,
}

/// Stops minting after this many items have been redeemed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RedeemedAmount {
    pub maximum: u64,
}

/// Restricts minting to a single address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AddressGate {
    pub address: Pubkey,
}

/// Requires holding an NFT from a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NftGate {
    pub required_collection: Pubkey,
}

/// Burns an NFT from a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NftBurn {
    pub required_collection: Pubkey,
}

/// Burns an amount of a fungible token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TokenBurn {
    pub amount: u64,
    pub mint: Pubkey,
}

/// Like [`SolPayment`], but funds are held in escrow until thawed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FreezeSolPayment {
    pub lamports: u64,
    pub destination: Pubkey,
}

/// Like [`TokenPayment`], but funds are held in escrow until thawed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FreezeTokenPayment {
    pub amount: u64,
    pub mint: Pubkey,
    pub destination_ata: Pubkey,
}

/// Restricts which programs may appear in the mint transaction.
///
/// Up to [`MAX_ADDITIONAL_PROGRAMS`](crate::limits::MAX_ADDITIONAL_PROGRAMS)
/// programs beyond the default allowed set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProgramGate {
    pub additional: Vec<Pubkey>,
}

/// Caps the total number of mints for a group, tracked under a counter id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Allocation {
    pub id: u8,
    pub limit: u32,
}

/// Like [`TokenPayment`] for Token-2022 mints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Token2022Payment {
    pub amount: u64,
    pub mint: Pubkey,
    pub destination_ata: Pubkey,
}

impl_guard!(BotTax, BotTax, bot_tax);
impl_guard!(SolPayment, SolPayment, sol_payment);
impl_guard!(TokenPayment, TokenPayment, token_payment);
impl_guard!(StartDate, StartDate, start_date);
impl_guard!(ThirdPartySigner, ThirdPartySigner, third_party_signer);
impl_guard!(TokenGate, TokenGate, token_gate);
impl_guard!(Gatekeeper, Gatekeeper, gatekeeper);
impl_guard!(EndDate, EndDate, end_date);
impl_guard!(AllowList, AllowList, allow_list);
impl_guard!(MintLimit, MintLimit, mint_limit);
impl_guard!(NftPayment, NftPayment, nft_payment);
impl_guard!(RedeemedAmount, RedeemedAmount, redeemed_amount);
impl_guard!(AddressGate, AddressGate, address_gate);
impl_guard!(NftGate, NftGate, nft_gate);
impl_guard!(NftBurn, NftBurn, nft_burn);
impl_guard!(TokenBurn, TokenBurn, token_burn);
impl_guard!(FreezeSolPayment, FreezeSolPayment, freeze_sol_payment);
impl_guard!(FreezeTokenPayment, FreezeTokenPayment, freeze_token_payment);
impl_guard!(ProgramGate, ProgramGate, program_gate);
impl_guard!(Allocation, Allocation, allocation);
impl_guard!(Token2022Payment, Token2022Payment, token2022_payment);
