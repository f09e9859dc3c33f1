use anchor_lang::prelude::*;
use std::collections::BTreeMap;

use crate::errors::RegistryError;
use crate::state::{Citizen, RegistryConfig};

/// Whole-registry view: the authority plus every citizen record, held in
/// memory. Runs the same rules as the program, which applies them one citizen
/// account at a time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Registry {
    config: RegistryConfig,
    citizens: BTreeMap<Pubkey, Citizen>,
}

impl Registry {
    /// Empty registry owned by `genesis_authority`
    pub fn new(genesis_authority: Pubkey) -> Self {
        Self {
            config: RegistryConfig::new(genesis_authority),
            citizens: BTreeMap::new(),
        }
    }

    pub fn register_citizen(
        &mut self,
        caller: Pubkey,
        alias: Option<String>,
    ) -> std::result::Result<(), RegistryError> {
        let citizen = Citizen::register(self.citizens.get(&caller), alias)?;
        self.citizens.insert(caller, citizen);
        Ok(())
    }

    pub fn verify_citizen(
        &mut self,
        caller: &Pubkey,
        target: &Pubkey,
    ) -> std::result::Result<(), RegistryError> {
        self.config
            .verify_citizen(caller, self.citizens.get_mut(target))
    }

    pub fn adjust_reputation(
        &mut self,
        caller: &Pubkey,
        target: &Pubkey,
        delta: i128,
    ) -> std::result::Result<(), RegistryError> {
        self.config
            .adjust_reputation(caller, self.citizens.get_mut(target), delta)
    }

    pub fn update_alias(
        &mut self,
        caller: &Pubkey,
        alias: Option<String>,
    ) -> std::result::Result<(), RegistryError> {
        Citizen::update_alias(self.citizens.get_mut(caller), alias)
    }

    pub fn transfer_authority(
        &mut self,
        caller: &Pubkey,
        new_authority: Pubkey,
    ) -> std::result::Result<(), RegistryError> {
        self.config.transfer_authority(caller, new_authority)
    }

    pub fn is_verified(&self, target: &Pubkey) -> bool {
        Citizen::is_verified(self.citizens.get(target))
    }

    pub fn reputation(&self, target: &Pubkey) -> std::result::Result<i128, RegistryError> {
        Citizen::reputation_of(self.citizens.get(target))
    }

    pub fn alias(&self, target: &Pubkey) -> std::result::Result<Option<String>, RegistryError> {
        self.citizen(target).map(|c| c.alias)
    }

    /// Copy of the full record
    pub fn citizen(&self, target: &Pubkey) -> std::result::Result<Citizen, RegistryError> {
        self.citizens
            .get(target)
            .cloned()
            .ok_or(RegistryError::NotRegistered)
    }

    pub fn authority(&self) -> Pubkey {
        self.config.authority()
    }

    pub fn is_authority(&self, principal: &Pubkey) -> bool {
        self.config.is_authority(principal)
    }

    pub fn is_registered(&self, principal: &Pubkey) -> bool {
        self.citizens.contains_key(principal)
    }

    pub fn citizen_count(&self) -> usize {
        self.citizens.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(err: RegistryError) -> u32 {
        err.into()
    }

    fn setup() -> (Registry, Pubkey, Pubkey) {
        let admin = Pubkey::new_unique();
        let citizen = Pubkey::new_unique();
        (Registry::new(admin), admin, citizen)
    }

    #[test]
    fn new_registry_is_empty() {
        let (registry, admin, citizen) = setup();

        assert_eq!(registry.authority(), admin);
        assert_eq!(registry.citizen_count(), 0);
        assert!(!registry.is_registered(&citizen));
    }

    #[test]
    fn register_creates_default_record() {
        let (mut registry, _, citizen) = setup();

        registry
            .register_citizen(citizen, Some("alice".to_string()))
            .unwrap();

        let record = registry.citizen(&citizen).unwrap();
        assert!(!record.verified);
        assert_eq!(record.reputation, 0);
        assert_eq!(record.alias.as_deref(), Some("alice"));
    }

    #[test]
    fn duplicate_registration_keeps_first_alias() {
        let (mut registry, _, citizen) = setup();

        registry
            .register_citizen(citizen, Some("alice".to_string()))
            .unwrap();
        let err = registry
            .register_citizen(citizen, Some("mallory".to_string()))
            .unwrap_err();

        assert_eq!(code(err), 101);
        assert_eq!(registry.alias(&citizen).unwrap().as_deref(), Some("alice"));
        assert_eq!(registry.citizen_count(), 1);
    }

    #[test]
    fn verified_flag_survives_other_updates() {
        let (mut registry, admin, citizen) = setup();
        registry.register_citizen(citizen, None).unwrap();
        registry.verify_citizen(&admin, &citizen).unwrap();

        registry.adjust_reputation(&admin, &citizen, -50).unwrap();
        registry
            .update_alias(&citizen, Some("renamed".to_string()))
            .unwrap();
        registry.verify_citizen(&admin, &citizen).unwrap();

        assert!(registry.is_verified(&citizen));
    }

    #[test]
    fn failed_operations_leave_state_untouched() {
        let (mut registry, admin, citizen) = setup();
        let stranger = Pubkey::new_unique();
        registry
            .register_citizen(citizen, Some("alice".to_string()))
            .unwrap();
        let before = registry.clone();

        assert!(registry.register_citizen(citizen, None).is_err());
        assert!(registry.verify_citizen(&stranger, &citizen).is_err());
        assert!(registry.verify_citizen(&admin, &stranger).is_err());
        assert!(registry.adjust_reputation(&stranger, &citizen, 9).is_err());
        assert!(registry.adjust_reputation(&admin, &stranger, 9).is_err());
        assert!(registry.update_alias(&stranger, None).is_err());
        assert!(registry.transfer_authority(&stranger, stranger).is_err());

        assert_eq!(registry, before);
    }

    #[test]
    fn alias_update_can_clear() {
        let (mut registry, _, citizen) = setup();
        registry
            .register_citizen(citizen, Some("alice".to_string()))
            .unwrap();

        registry.update_alias(&citizen, None).unwrap();

        assert_eq!(registry.alias(&citizen).unwrap(), None);
    }

    #[test]
    fn transfer_to_self_is_allowed() {
        let (mut registry, admin, _) = setup();

        registry.transfer_authority(&admin, admin).unwrap();

        assert!(registry.is_authority(&admin));
    }
}
