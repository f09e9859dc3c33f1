use anchor_lang::prelude::*;

use crate::errors::RegistryError;

// =============================================================================
// CITIZEN REGISTRY STATE
// =============================================================================
//
// Two account kinds:
// - RegistryConfig: the singleton holding the authority
// - CitizenAccount: one per registered principal, at [b"citizen", principal]
//
// A citizen account existing is what "registered" means. The rules below take
// the target record as an Option so that the authority check always runs
// before the existence check, whether the record came from an account or from
// the in-memory table.
//
// Record lifecycle:
//   Unregistered -> Registered(unverified) -> Registered(verified)
// Records are never removed and `verified` is never cleared.
// =============================================================================

/// PDA seed of the registry config account
pub const REGISTRY_SEED: &[u8] = b"registry";

/// PDA seed prefix of citizen accounts
pub const CITIZEN_SEED: &[u8] = b"citizen";

/// A registered participant
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Citizen {
    /// Set by the authority, never cleared
    pub verified: bool,
    /// Signed standing, adjusted by the authority only
    pub reputation: i128,
    /// Display name chosen by the citizen
    pub alias: Option<String>,
}

impl Citizen {
    /// A fresh record: unverified, zero reputation
    pub fn new(alias: Option<String>) -> Self {
        Self {
            verified: false,
            reputation: 0,
            alias,
        }
    }

    /// Serialized size of a record carrying `alias`
    pub fn space(alias: Option<&str>) -> usize {
        1 +                                 // verified
        16 +                                // reputation
        1 +                                 // alias tag
        alias.map_or(0, |a| 4 + a.len())    // alias length prefix + bytes
    }

    /// New record for a principal whose current record is `existing`
    pub fn register(
        existing: Option<&Citizen>,
        alias: Option<String>,
    ) -> std::result::Result<Citizen, RegistryError> {
        if existing.is_some() {
            return Err(RegistryError::AlreadyRegistered);
        }
        Ok(Citizen::new(alias))
    }

    /// Replace the alias on the caller's own record
    pub fn update_alias(
        own: Option<&mut Citizen>,
        alias: Option<String>,
    ) -> std::result::Result<(), RegistryError> {
        own.ok_or(RegistryError::NotRegistered)?.alias = alias;
        Ok(())
    }

    /// False for unregistered principals as well as unverified citizens
    pub fn is_verified(target: Option<&Citizen>) -> bool {
        target.is_some_and(|c| c.verified)
    }

    pub fn reputation_of(target: Option<&Citizen>) -> std::result::Result<i128, RegistryError> {
        target
            .map(|c| c.reputation)
            .ok_or(RegistryError::NotRegistered)
    }
}

/// Singleton holding the registry authority
#[account]
#[derive(Debug, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Principal allowed to verify, adjust reputation and hand over authority
    authority: Pubkey,
    /// PDA bump seed
    pub bump: u8,
}

impl RegistryConfig {
    pub const SIZE: usize = 8 +  // discriminator
        32 +                     // authority
        1;                       // bump

    pub fn new(genesis_authority: Pubkey) -> Self {
        Self {
            authority: genesis_authority,
            bump: 0,
        }
    }

    pub fn authority(&self) -> Pubkey {
        self.authority
    }

    pub fn is_authority(&self, principal: &Pubkey) -> bool {
        *principal == self.authority
    }

    pub fn ensure_authority(&self, caller: &Pubkey) -> std::result::Result<(), RegistryError> {
        if !self.is_authority(caller) {
            return Err(RegistryError::NotAuthorized);
        }
        Ok(())
    }

    /// Mark `target` as verified. Authority only.
    pub fn verify_citizen(
        &self,
        caller: &Pubkey,
        target: Option<&mut Citizen>,
    ) -> std::result::Result<(), RegistryError> {
        self.ensure_authority(caller)?;

        target.ok_or(RegistryError::NotRegistered)?.verified = true;
        Ok(())
    }

    /// Add `delta` to `target`'s reputation. Authority only.
    ///
    /// There is no floor or ceiling other than the width of `i128`: the sum
    /// saturates at `i128::MIN`/`i128::MAX`, so repeated adjustments are only
    /// additive while the running total stays inside those bounds.
    pub fn adjust_reputation(
        &self,
        caller: &Pubkey,
        target: Option<&mut Citizen>,
        delta: i128,
    ) -> std::result::Result<(), RegistryError> {
        self.ensure_authority(caller)?;

        let citizen = target.ok_or(RegistryError::NotRegistered)?;
        citizen.reputation = citizen.reputation.saturating_add(delta);
        Ok(())
    }

    /// Hand the authority role to `new_authority`. Authority only.
    pub fn transfer_authority(
        &mut self,
        caller: &Pubkey,
        new_authority: Pubkey,
    ) -> std::result::Result<(), RegistryError> {
        self.ensure_authority(caller)?;

        self.authority = new_authority;
        Ok(())
    }
}

/// On-chain home of one citizen record
#[account]
#[derive(Debug, PartialEq, Eq)]
pub struct CitizenAccount {
    /// The principal this record belongs to
    pub owner: Pubkey,
    pub record: Citizen,
    /// PDA bump seed
    pub bump: u8,
}

impl CitizenAccount {
    /// Account length for a record carrying `alias`
    pub fn space(alias: Option<&str>) -> usize {
        8 +                         // discriminator
        32 +                        // owner
        Citizen::space(alias) +     // record
        1                           // bump
    }

    /// Read the record stored at `info`, `None` when nothing is registered there.
    /// The caller is responsible for `info` being the owner's citizen PDA.
    pub fn load(info: &AccountInfo) -> Result<Option<Self>> {
        if info.owner != &crate::ID || info.data_is_empty() {
            return Ok(None);
        }

        let data = info.try_borrow_data()?;
        Ok(Some(Self::try_deserialize(&mut &data[..])?))
    }

    /// Write the record into `info`, which must already be large enough
    pub fn store(&self, info: &AccountInfo) -> Result<()> {
        let mut data = info.try_borrow_mut_data()?;
        let mut writer: &mut [u8] = &mut data[..];
        self.try_serialize(&mut writer)
    }
}
