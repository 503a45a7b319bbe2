//! Shared test values.

use crate::model::guards::{
    AddressGate, Allocation, AllowList, BotTax, EndDate, FreezeSolPayment, FreezeTokenPayment,
    Gatekeeper, MintLimit, NftBurn, NftGate, NftPayment, ProgramGate, RedeemedAmount, SolPayment,
    StartDate, ThirdPartySigner, Token2022Payment, TokenBurn, TokenGate, TokenPayment,
};
use crate::model::GuardSet;

/// A set with every guard enabled, each payload filled with distinct bytes.
pub(crate) fn full_set() -> GuardSet {
    GuardSet {
        bot_tax: Some(BotTax { lamports: 10_000_000, last_instruction: true }),
        sol_payment: Some(SolPayment { lamports: 1, destination: [1; 32] }),
        token_payment: Some(TokenPayment { amount: 2, mint: [2; 32], destination_ata: [3; 32] }),
        start_date: Some(StartDate { date: 1662394820 }),
        third_party_signer: Some(ThirdPartySigner { signer_key: [4; 32] }),
        token_gate: Some(TokenGate { amount: 3, mint: [5; 32] }),
        gatekeeper: Some(Gatekeeper { gatekeeper_network: [6; 32], expire_on_use: true }),
        end_date: Some(EndDate { date: -1 }),
        allow_list: Some(AllowList { merkle_root: [7; 32] }),
        mint_limit: Some(MintLimit { id: 4, limit: 65535 }),
        nft_payment: Some(NftPayment { required_collection: [8; 32], destination: [9; 32] }),
        redeemed_amount: Some(RedeemedAmount { maximum: u64::MAX }),
        address_gate: Some(AddressGate { address: [10; 32] }),
        nft_gate: Some(NftGate { required_collection: [11; 32] }),
        nft_burn: Some(NftBurn { required_collection: [12; 32] }),
        token_burn: Some(TokenBurn { amount: 5, mint: [13; 32] }),
        freeze_sol_payment: Some(FreezeSolPayment { lamports: 6, destination: [14; 32] }),
        freeze_token_payment: Some(FreezeTokenPayment {
            amount: 7,
            mint: [15; 32],
            destination_ata: [16; 32],
        }),
        program_gate: Some(ProgramGate { additional: vec![[17; 32], [18; 32]] }),
        allocation: Some(Allocation { id: 8, limit: u32::MAX }),
        token2022_payment: Some(Token2022Payment {
            amount: 9,
            mint: [19; 32],
            destination_ata: [20; 32],
        }),
    }
}
