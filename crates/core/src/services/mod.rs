pub mod balance_service;
pub mod filter_service;
pub mod goal_service;
pub mod wallet_service;
