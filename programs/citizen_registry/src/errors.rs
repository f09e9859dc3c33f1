use anchor_lang::prelude::*;

/// Codes start at 100 so callers see 100/101/102.
#[error_code(offset = 100)]
pub enum RegistryError {
    #[msg("Not authorized: caller is not the registry authority")]
    NotAuthorized,

    #[msg("Citizen is already registered")]
    AlreadyRegistered,

    #[msg("Citizen is not registered")]
    NotRegistered,
}

/// Failures raised by the program's own dispatch, outside the registry codes
#[error_code]
pub enum DispatchError {
    #[msg("Unknown instruction")]
    UnknownInstruction,
}
