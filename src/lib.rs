#![doc(test(attr(deny(warnings))))]

//! Wallet Core keeps a personal statement of incomes and expenses grouped
//! by calendar day, with running totals, balance and spending progress.

pub mod cli;
pub mod config;
pub mod currency;
pub mod errors;
pub mod form;
pub mod statement;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing once per process.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Wallet Core tracing initialized.");
    });
}
