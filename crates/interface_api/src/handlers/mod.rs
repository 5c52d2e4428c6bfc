//! Request handlers

pub mod checkout;
pub mod health;
pub mod quotes;
