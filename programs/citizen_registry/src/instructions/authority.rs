use anchor_lang::prelude::*;
use crate::state::{CitizenAccount, RegistryConfig, CITIZEN_SEED, REGISTRY_SEED};

// =============================================================================
// AUTHORITY INSTRUCTIONS
// =============================================================================
//
// Verification, reputation and hand-over are gated on the registry authority.
// The signer is compared against registry state inside the handler, and the
// target citizen account is only read after that check, so an unauthorized
// caller is rejected with NotAuthorized even when the target does not exist.
// =============================================================================

#[derive(Accounts)]
#[instruction(target: Pubkey)]
pub struct ManageCitizen<'info> {
    /// Must be the registry authority
    pub caller: Signer<'info>,

    #[account(
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, RegistryConfig>,

    /// CHECK: Target's citizen PDA; may not exist, validated in handler
    #[account(
        mut,
        seeds = [CITIZEN_SEED, target.as_ref()],
        bump,
    )]
    pub citizen: UncheckedAccount<'info>,
}

#[derive(Accounts)]
pub struct TransferAuthority<'info> {
    /// Must be the current registry authority
    pub caller: Signer<'info>,

    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, RegistryConfig>,
}

pub fn verify_citizen(ctx: Context<ManageCitizen>, target: Pubkey) -> Result<bool> {
    let caller = ctx.accounts.caller.key();
    let registry = &ctx.accounts.registry;
    registry.ensure_authority(&caller)?;

    let info = ctx.accounts.citizen.to_account_info();
    let mut account = CitizenAccount::load(&info)?;
    registry.verify_citizen(&caller, account.as_mut().map(|a| &mut a.record))?;

    if let Some(account) = account {
        account.store(&info)?;
    }

    msg!("Verified citizen {}", target);
    Ok(true)
}

pub fn adjust_reputation(
    ctx: Context<ManageCitizen>,
    target: Pubkey,
    delta: i128,
) -> Result<bool> {
    let caller = ctx.accounts.caller.key();
    let registry = &ctx.accounts.registry;
    registry.ensure_authority(&caller)?;

    let info = ctx.accounts.citizen.to_account_info();
    let mut account = CitizenAccount::load(&info)?;
    registry.adjust_reputation(&caller, account.as_mut().map(|a| &mut a.record), delta)?;

    if let Some(account) = account {
        account.store(&info)?;
        msg!(
            "Adjusted reputation of {} by {} (now {})",
            target,
            delta,
            account.record.reputation
        );
    }
    Ok(true)
}

pub fn transfer_authority(ctx: Context<TransferAuthority>, new_authority: Pubkey) -> Result<bool> {
    let caller = ctx.accounts.caller.key();
    let registry = &mut ctx.accounts.registry;

    registry.transfer_authority(&caller, new_authority)?;

    msg!("Transferred registry authority from {} to {}", caller, new_authority);
    Ok(true)
}
