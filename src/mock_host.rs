/*
    Copyright © 2023, ParallelChain Lab
    Licensed under the Apache License, Version 2.0: http://www.apache.org/licenses/LICENSE-2.0
*/

//! A recording stand-in for the host, for targets the WASM runtime is not. Each test thread
//! gets its own host: prime it with [set_incoming_call], run the contract, then observe
//! what reached the log, the row store and the receipt.

use std::cell::RefCell;

thread_local! {
    static HOST: RefCell<MockHost> = RefCell::new(MockHost::default());
}

#[derive(Default)]
struct MockHost {
    method: String,
    arguments: Vec<u8>,
    logged_messages: Vec<String>,
    stored_rows: Vec<StoredRow>,
    returned_value: Option<Vec<u8>>,
}

/// One row the contract stored on the current thread's host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredRow {
    pub scope: u64,
    pub table: u64,
    pub payer: u64,
    pub id: u64,
    pub data: Vec<u8>,
}

/// Clears everything the current thread's host holds.
pub fn reset() {
    HOST.with(|host| *host.borrow_mut() = MockHost::default());
}

/// Primes the dispatch payload that `entrypoint` reads back through
/// [crate::transaction::method] and [crate::transaction::arguments].
pub fn set_incoming_call(method: &str, arguments: Vec<u8>) {
    HOST.with(|host| {
        let mut host = host.borrow_mut();
        host.method = method.to_string();
        host.arguments = arguments;
    });
}

/// Every message the contract logged, in emission order.
pub fn logged_messages() -> Vec<String> {
    HOST.with(|host| host.borrow().logged_messages.clone())
}

/// Every row the contract stored, in storage order.
pub fn stored_rows() -> Vec<StoredRow> {
    HOST.with(|host| host.borrow().stored_rows.clone())
}

/// The receipt value the contract returned, if any.
pub fn returned_value() -> Option<Vec<u8>> {
    HOST.with(|host| host.borrow().returned_value.clone())
}

/// Native bodies for the names declared in [crate::imports], same signatures, recording
/// against the thread-local host.
pub(crate) mod shims {
    use super::{StoredRow, HOST};

    // Hands `bytes` to the caller the way the chain does: the segment is leaked here and
    // re-owned by the caller's `Vec::from_raw_parts`.
    unsafe fn hand_over(bytes: Vec<u8>, ptr_ptr: *mut *mut u8) -> u32 {
        let boxed = bytes.into_boxed_slice();
        let len = boxed.len() as u32;
        *ptr_ptr = Box::into_raw(boxed) as *mut u8;
        len
    }

    pub(crate) unsafe fn method(method_ptr_ptr: *mut *mut u8) -> u32 {
        let bytes = HOST.with(|host| host.borrow().method.clone().into_bytes());
        hand_over(bytes, method_ptr_ptr)
    }

    pub(crate) unsafe fn arguments(arguments_ptr_ptr: *mut *mut u8) -> u32 {
        let bytes = HOST.with(|host| host.borrow().arguments.clone());
        hand_over(bytes, arguments_ptr_ptr)
    }

    pub(crate) unsafe fn log_message(message_ptr: *const u8, message_len: u32) {
        let bytes = std::slice::from_raw_parts(message_ptr, message_len as usize);
        let message = String::from_utf8_lossy(bytes).into_owned();
        HOST.with(|host| host.borrow_mut().logged_messages.push(message));
    }

    pub(crate) unsafe fn return_value(value_ptr: *const u8, value_len: u32) {
        let bytes = std::slice::from_raw_parts(value_ptr, value_len as usize).to_vec();
        HOST.with(|host| host.borrow_mut().returned_value = Some(bytes));
    }

    pub(crate) unsafe fn db_find(_code: u64, scope: u64, table: u64, id: u64) -> i32 {
        HOST.with(|host| {
            host.borrow()
                .stored_rows
                .iter()
                .position(|row| row.scope == scope && row.table == table && row.id == id)
                .map_or(-1, |index| index as i32)
        })
    }

    pub(crate) unsafe fn db_store(
        scope: u64,
        table: u64,
        payer: u64,
        id: u64,
        data_ptr: *const u8,
        data_len: u32,
    ) -> i32 {
        let data = std::slice::from_raw_parts(data_ptr, data_len as usize).to_vec();
        HOST.with(|host| {
            let mut host = host.borrow_mut();
            host.stored_rows.push(StoredRow { scope, table, payer, id, data });
            (host.stored_rows.len() - 1) as i32
        })
    }
}
