pub mod ledger;
pub mod roster;
pub mod session;
