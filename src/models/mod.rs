//! Runtime models that are not part of the club domain.

pub mod config;
