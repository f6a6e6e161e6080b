#![allow(dead_code)]

use std::rc::Rc;

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use wallet_core::{
    statement::{FixedClock, StatementStore},
    storage::{KeyValueDatasource, MemoryByteStore},
};

pub fn noon(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
}

pub fn amount(units: i64) -> Decimal {
    Decimal::from(units)
}

/// Store over an in-memory byte store; the returned handle observes writes.
pub fn memory_store(now: DateTime<Utc>) -> (StatementStore, Rc<MemoryByteStore>) {
    let bytes = Rc::new(MemoryByteStore::new());
    let datasource = KeyValueDatasource::new(Rc::clone(&bytes));
    let store = StatementStore::load(Box::new(datasource)).with_clock(Box::new(FixedClock(now)));
    (store, bytes)
}
