pub mod auto;
pub mod traits;
