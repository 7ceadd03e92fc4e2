pub mod account;
pub mod filter;
pub mod goal;
pub mod transaction;
pub mod user;
pub mod wallet;
