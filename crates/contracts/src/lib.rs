//! Types shared by every consumer of the orders REST backend

pub mod domain;
pub mod shared;
pub mod system;
