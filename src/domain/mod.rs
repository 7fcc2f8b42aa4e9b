//! Domain values shared by the repository, services and routes.

pub mod club;
pub mod favorites;
pub mod filter;
