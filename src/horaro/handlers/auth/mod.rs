//! Login, logout, and session handling for the timesheet portal.
//!
//! Credential checks go through the [`store::UserStore`] trait and session
//! lifecycle through the [`session::SessionIssuer`] trait, so both
//! collaborators can be swapped for test doubles.

pub mod login;
pub mod preset;
pub mod session;
pub mod state;
pub mod store;
pub mod types;

mod page;
mod utils;
