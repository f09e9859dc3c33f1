pub mod citizen_pda;
pub mod initialize;
pub mod register_citizen;
pub mod authority;
pub mod update_alias;
pub mod queries;

pub use initialize::*;
pub use register_citizen::*;
pub use authority::*;
pub use update_alias::*;
pub use queries::*;
