use anchor_lang::prelude::*;

pub mod errors;
pub mod instructions;
pub mod registry;
pub mod state;

use instructions::*;

pub use errors::{DispatchError, RegistryError};
pub use registry::Registry;
pub use state::{Citizen, CitizenAccount, RegistryConfig, CITIZEN_SEED, REGISTRY_SEED};

declare_id!("7kQ1nUe3vJbRZ2cH6sXg9PfWmYtA4DdLr5oEiC8uBq2N");

// Error codes
//
// RegistryError uses 100 NotAuthorized, 101 AlreadyRegistered and
// 102 NotRegistered. Anchor's framework errors reuse part of that range:
// - 100 InstructionMissing: instruction data shorter than the 8-byte
//   discriminator
// - 102 InstructionDidNotDeserialize: arguments that fail to decode, e.g. a
//   malformed alias
// Both are raised before any handler runs; the program log names the error
// ("InstructionMissing" vs "NotAuthorized") when a caller has to tell them
// apart. An unknown discriminator would be framework 101, so `fallback`
// reports DispatchError::UnknownInstruction (6000) instead.

#[program]
pub mod citizen_registry {
    use super::*;

    // === Setup ===

    /// Create the registry account with its genesis authority
    pub fn initialize(ctx: Context<Initialize>, genesis_authority: Pubkey) -> Result<()> {
        instructions::initialize::handler(ctx, genesis_authority)
    }

    // === Citizen Self-Service ===

    /// Register the signer as a citizen
    pub fn register_citizen(ctx: Context<RegisterCitizen>, alias: Option<String>) -> Result<bool> {
        instructions::register_citizen::handler(ctx, alias)
    }

    /// Replace the signer's own alias
    pub fn update_alias(ctx: Context<UpdateAlias>, alias: Option<String>) -> Result<bool> {
        instructions::update_alias::handler(ctx, alias)
    }

    // === Authority ===

    /// Mark a registered citizen as verified
    pub fn verify_citizen(ctx: Context<ManageCitizen>, target: Pubkey) -> Result<bool> {
        instructions::authority::verify_citizen(ctx, target)
    }

    /// Add a signed delta to a citizen's reputation
    pub fn adjust_reputation(
        ctx: Context<ManageCitizen>,
        target: Pubkey,
        delta: i128,
    ) -> Result<bool> {
        instructions::authority::adjust_reputation(ctx, target, delta)
    }

    /// Hand the authority role to another principal
    pub fn transfer_authority(
        ctx: Context<TransferAuthority>,
        new_authority: Pubkey,
    ) -> Result<bool> {
        instructions::authority::transfer_authority(ctx, new_authority)
    }

    // === Reads ===

    /// Verification flag, false for unregistered principals
    pub fn is_verified(ctx: Context<ReadCitizen>, target: Pubkey) -> Result<bool> {
        instructions::queries::is_verified(ctx, target)
    }

    pub fn get_reputation(ctx: Context<ReadCitizen>, target: Pubkey) -> Result<i128> {
        instructions::queries::get_reputation(ctx, target)
    }

    pub fn is_authority(ctx: Context<ReadRegistry>, principal: Pubkey) -> Result<bool> {
        instructions::queries::is_authority(ctx, principal)
    }

    /// Any discriminator not listed above
    pub fn fallback<'info>(
        _program_id: &Pubkey,
        _accounts: &'info [AccountInfo<'info>],
        _data: &[u8],
    ) -> Result<()> {
        err!(DispatchError::UnknownInstruction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    #[test]
    fn unknown_instruction_avoids_registry_codes() {
        let result = citizen_registry::fallback(&ID, &[], &[9, 9, 9, 9, 9, 9, 9, 9]);

        match result {
            Err(Error::AnchorError(err)) => {
                assert_eq!(err.error_code_number, 6000);
                assert_eq!(err.error_name, "UnknownInstruction");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn dispatch_codes_stay_out_of_registry_range() {
        let code: u32 = DispatchError::UnknownInstruction.into();

        assert!(!(100..=102).contains(&code));
    }
}
