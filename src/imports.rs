/*
    Copyright © 2023, ParallelChain Lab
    Licensed under the Apache License, Version 2.0: http://www.apache.org/licenses/LICENSE-2.0
*/

// Variable-length data crosses the boundary through a pointer-to-pointer: the host `alloc`s
// a segment of linear memory, writes the bytes and the segment's address, and returns the
// byte-wise length. The caller takes ownership of the segment with `Vec::from_raw_parts`.

#[cfg(target_arch = "wasm32")]
extern "C" {
    // Getters for the dispatch payload of the invoking Transaction.
    pub(crate) fn method(method_ptr_ptr: *mut *mut u8) -> u32;
    pub(crate) fn arguments(arguments_ptr_ptr: *mut *mut u8) -> u32;

    // Emits one formatted debug message to the host's log.
    pub(crate) fn log_message(message_ptr: *const u8, message_len: u32);

    pub(crate) fn return_value(value_ptr: *const u8, value_len: u32);

    // Row store. A row is addressed by (code, scope, table, id); storing bills the payer
    // account. Both return a row index, negative on a failed lookup.
    pub(crate) fn db_find(code: u64, scope: u64, table: u64, id: u64) -> i32;
    pub(crate) fn db_store(
        scope: u64,
        table: u64,
        payer: u64,
        id: u64,
        data_ptr: *const u8,
        data_len: u32,
    ) -> i32;
}

// Off-chain builds link the same names against the recording host, so the crate's tests run
// natively.
#[cfg(not(target_arch = "wasm32"))]
pub(crate) use crate::mock_host::shims::{arguments, db_find, db_store, log_message, method, return_value};
