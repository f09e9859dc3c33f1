use anchor_lang::prelude::*;
use crate::instructions::citizen_pda::create_citizen_account;
use crate::state::{Citizen, CitizenAccount, CITIZEN_SEED};

#[derive(Accounts)]
pub struct RegisterCitizen<'info> {
    /// The principal registering itself
    #[account(mut)]
    pub caller: Signer<'info>,

    /// CHECK: Caller's citizen PDA; may not exist yet, validated in handler
    #[account(
        mut,
        seeds = [CITIZEN_SEED, caller.key().as_ref()],
        bump,
    )]
    pub citizen: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<RegisterCitizen>, alias: Option<String>) -> Result<bool> {
    let caller = ctx.accounts.caller.key();
    let info = ctx.accounts.citizen.to_account_info();

    let existing = CitizenAccount::load(&info)?;
    let record = Citizen::register(existing.as_ref().map(|a| &a.record), alias)?;

    let bump = ctx.bumps.citizen;
    create_citizen_account(
        &ctx.accounts.caller,
        &info,
        &ctx.accounts.system_program,
        CitizenAccount::space(record.alias.as_deref()),
        &[CITIZEN_SEED, caller.as_ref(), &[bump]],
    )?;

    CitizenAccount {
        owner: caller,
        record,
        bump,
    }
    .store(&info)?;

    msg!("Registered citizen {}", caller);

    Ok(true)
}
