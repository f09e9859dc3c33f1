use anchor_lang::prelude::*;
use crate::state::{RegistryConfig, REGISTRY_SEED};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        init,
        payer = payer,
        space = RegistryConfig::SIZE,
        seeds = [REGISTRY_SEED],
        bump,
    )]
    pub registry: Account<'info, RegistryConfig>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>, genesis_authority: Pubkey) -> Result<()> {
    let registry = &mut ctx.accounts.registry;

    registry.set_inner(RegistryConfig::new(genesis_authority));
    registry.bump = ctx.bumps.registry;

    msg!("Initialized citizen registry with authority {}", genesis_authority);

    Ok(())
}
