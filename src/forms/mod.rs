//! Form definitions backing the site routes.

pub mod contact;
pub mod favorites;
