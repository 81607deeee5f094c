//! Application services for account management.

mod account;

pub use account::{AccountError, AccountResult, AccountService};
