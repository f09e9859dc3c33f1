use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Allocate, Assign, CreateAccount, Transfer};

// Citizen accounts are created and resized by hand instead of through
// `init`/`realloc` constraints: those constraints fail inside Anchor with
// framework codes, while a missing or duplicate record has to surface as
// NotRegistered/AlreadyRegistered from the handler.

/// Create a program-owned PDA of `space` bytes at `target`, paid by `payer`.
/// Works when the address was already funded by a plain transfer.
pub fn create_citizen_account<'info>(
    payer: &Signer<'info>,
    target: &AccountInfo<'info>,
    system_program: &Program<'info, System>,
    space: usize,
    signer_seeds: &[&[u8]],
) -> Result<()> {
    let required = Rent::get()?.minimum_balance(space);
    let current = target.lamports();

    if current == 0 {
        system_program::create_account(
            CpiContext::new_with_signer(
                system_program.to_account_info(),
                CreateAccount {
                    from: payer.to_account_info(),
                    to: target.clone(),
                },
                &[signer_seeds],
            ),
            required,
            space as u64,
            &crate::ID,
        )?;
        return Ok(());
    }

    if required > current {
        system_program::transfer(
            CpiContext::new(
                system_program.to_account_info(),
                Transfer {
                    from: payer.to_account_info(),
                    to: target.clone(),
                },
            ),
            required - current,
        )?;
    }
    system_program::allocate(
        CpiContext::new_with_signer(
            system_program.to_account_info(),
            Allocate {
                account_to_allocate: target.clone(),
            },
            &[signer_seeds],
        ),
        space as u64,
    )?;
    system_program::assign(
        CpiContext::new_with_signer(
            system_program.to_account_info(),
            Assign {
                account_to_assign: target.clone(),
            },
            &[signer_seeds],
        ),
        &crate::ID,
    )?;

    Ok(())
}

/// Grow `target` to `new_len` bytes, topping up rent from `payer`.
/// Never shrinks.
pub fn grow_citizen_account<'info>(
    payer: &Signer<'info>,
    target: &AccountInfo<'info>,
    system_program: &Program<'info, System>,
    new_len: usize,
) -> Result<()> {
    if new_len <= target.data_len() {
        return Ok(());
    }

    let required = Rent::get()?.minimum_balance(new_len);
    let current = target.lamports();
    if required > current {
        system_program::transfer(
            CpiContext::new(
                system_program.to_account_info(),
                Transfer {
                    from: payer.to_account_info(),
                    to: target.clone(),
                },
            ),
            required - current,
        )?;
    }

    target.realloc(new_len, false)?;
    Ok(())
}
