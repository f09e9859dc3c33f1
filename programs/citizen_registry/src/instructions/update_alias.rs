use anchor_lang::prelude::*;
use crate::errors::RegistryError;
use crate::instructions::citizen_pda::grow_citizen_account;
use crate::state::{Citizen, CitizenAccount, CITIZEN_SEED};

#[derive(Accounts)]
pub struct UpdateAlias<'info> {
    /// The citizen renaming itself
    #[account(mut)]
    pub caller: Signer<'info>,

    /// CHECK: Caller's citizen PDA; existence checked in handler
    #[account(
        mut,
        seeds = [CITIZEN_SEED, caller.key().as_ref()],
        bump,
    )]
    pub citizen: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<UpdateAlias>, alias: Option<String>) -> Result<bool> {
    let caller = ctx.accounts.caller.key();
    let info = ctx.accounts.citizen.to_account_info();

    let mut account = CitizenAccount::load(&info)?.ok_or(RegistryError::NotRegistered)?;
    Citizen::update_alias(Some(&mut account.record), alias)?;

    grow_citizen_account(
        &ctx.accounts.caller,
        &info,
        &ctx.accounts.system_program,
        CitizenAccount::space(account.record.alias.as_deref()),
    )?;
    account.store(&info)?;

    match &account.record.alias {
        Some(alias) => msg!("Citizen {} set alias to {}", caller, alias),
        None => msg!("Citizen {} cleared alias", caller),
    }

    Ok(true)
}
