pub mod adapter;
pub mod manager;
