//! Guard sets: one optional slot per catalog entry.

use crate::model::guards::{
    AddressGate, Allocation, AllowList, BotTax, EndDate, FreezeSolPayment, FreezeTokenPayment,
    Gatekeeper, Guard, MintLimit, NftBurn, NftGate, NftPayment, ProgramGate, RedeemedAmount,
    SolPayment, StartDate, ThirdPartySigner, Token2022Payment, TokenBurn, TokenGate, TokenPayment,
};
use crate::model::GuardKind;

/// A set of optional guards.
///
/// Field order follows the catalog. An empty set encodes to a single zero
/// presence mask.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GuardSet {
    pub bot_tax: Option<BotTax>,
    pub sol_payment: Option<SolPayment>,
    pub token_payment: Option<TokenPayment>,
    pub start_date: Option<StartDate>,
    pub third_party_signer: Option<ThirdPartySigner>,
    pub token_gate: Option<TokenGate>,
    pub gatekeeper: Option<Gatekeeper>,
    pub end_date: Option<EndDate>,
    pub allow_list: Option<AllowList>,
    pub mint_limit: Option<MintLimit>,
    pub nft_payment: Option<NftPayment>,
    pub redeemed_amount: Option<RedeemedAmount>,
    pub address_gate: Option<AddressGate>,
    pub nft_gate: Option<NftGate>,
    pub nft_burn: Option<NftBurn>,
    pub token_burn: Option<TokenBurn>,
    pub freeze_sol_payment: Option<FreezeSolPayment>,
    pub freeze_token_payment: Option<FreezeTokenPayment>,
    pub program_gate: Option<ProgramGate>,
    pub allocation: Option<Allocation>,
    pub token2022_payment: Option<Token2022Payment>,
}

impl GuardSet {
    /// Creates an empty guard set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the set with `guard` enabled, replacing any previous value.
    pub fn with<G: Guard>(mut self, guard: G) -> Self {
        self.insert(guard);
        self
    }

    /// Enables `guard`, returning the value it replaced.
    pub fn insert<G: Guard>(&mut self, guard: G) -> Option<G> {
        G::slot(self).replace(guard)
    }

    /// Disables the guard of type `G`, returning its value.
    pub fn remove<G: Guard>(&mut self) -> Option<G> {
        G::slot(self).take()
    }

    /// Returns the guard of type `G`, if enabled.
    pub fn get<G: Guard>(&self) -> Option<&G> {
        G::get(self)
    }

    /// Returns true if the guard of the given kind is enabled.
    pub fn is_enabled(&self, kind: GuardKind) -> bool {
        match kind {
            GuardKind::BotTax => self.bot_tax.is_some(),
            GuardKind::SolPayment => self.sol_payment.is_some(),
            GuardKind::TokenPayment => self.token_payment.is_some(),
            GuardKind::StartDate => self.start_date.is_some(),
            GuardKind::ThirdPartySigner => self.third_party_signer.is_some(),
            GuardKind::TokenGate => self.token_gate.is_some(),
            GuardKind::Gatekeeper => self.gatekeeper.is_some(),
            GuardKind::EndDate => self.end_date.is_some(),
            GuardKind::AllowList => self.allow_list.is_some(),
            GuardKind::MintLimit => self.mint_limit.is_some(),
            GuardKind::NftPayment => self.nft_payment.is_some(),
            GuardKind::RedeemedAmount => self.redeemed_amount.is_some(),
            GuardKind::AddressGate => self.address_gate.is_some(),
            GuardKind::NftGate => self.nft_gate.is_some(),
            GuardKind::NftBurn => self.nft_burn.is_some(),
            GuardKind::TokenBurn => self.token_burn.is_some(),
            GuardKind::FreezeSolPayment => self.freeze_sol_payment.is_some(),
            GuardKind::FreezeTokenPayment => self.freeze_token_payment.is_some(),
            GuardKind::ProgramGate => self.program_gate.is_some(),
            GuardKind::Allocation => self.allocation.is_some(),
            GuardKind::Token2022Payment => self.token2022_payment.is_some(),
        }
    }

    /// Returns the presence mask this set encodes with.
    pub fn mask(&self) -> u64 {
        GuardKind::ALL
            .iter()
            .filter(|kind| self.is_enabled(**kind))
            .fold(0, |mask, kind| mask | kind.mask_bit())
    }

    /// Iterates over the enabled guard kinds in bit order.
    pub fn enabled_kinds(&self) -> impl Iterator<Item = GuardKind> + '_ {
        GuardKind::ALL.into_iter().filter(|kind| self.is_enabled(*kind))
    }

    /// Returns true if no guard is enabled.
    pub fn is_empty(&self) -> bool {
        self.mask() == 0
    }
}
