use anchor_lang::prelude::*;
use crate::state::{Citizen, CitizenAccount, RegistryConfig, CITIZEN_SEED, REGISTRY_SEED};

// Read-only instructions. Values come back as instruction return data.

#[derive(Accounts)]
#[instruction(target: Pubkey)]
pub struct ReadCitizen<'info> {
    /// CHECK: Target's citizen PDA; may not exist, validated in handler
    #[account(
        seeds = [CITIZEN_SEED, target.as_ref()],
        bump,
    )]
    pub citizen: UncheckedAccount<'info>,
}

#[derive(Accounts)]
pub struct ReadRegistry<'info> {
    #[account(
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, RegistryConfig>,
}

pub fn is_verified(ctx: Context<ReadCitizen>, _target: Pubkey) -> Result<bool> {
    let account = CitizenAccount::load(&ctx.accounts.citizen.to_account_info())?;
    Ok(Citizen::is_verified(account.as_ref().map(|a| &a.record)))
}

pub fn get_reputation(ctx: Context<ReadCitizen>, _target: Pubkey) -> Result<i128> {
    let account = CitizenAccount::load(&ctx.accounts.citizen.to_account_info())?;
    Ok(Citizen::reputation_of(account.as_ref().map(|a| &a.record))?)
}

pub fn is_authority(ctx: Context<ReadRegistry>, principal: Pubkey) -> Result<bool> {
    Ok(ctx.accounts.registry.is_authority(&principal))
}
