/*
    Copyright © 2023, ParallelChain Lab
    Licensed under the Apache License, Version 2.0: http://www.apache.org/licenses/LICENSE-2.0
*/

//! Internal functions that interact with this transaction's context: emitting a debug
//! message to the host's log, and placing a return value in the receipt.

use crate::imports;

/// `log` emits one formatted message through the host's debug print facility.
pub fn log(message: &str) {
    let message_ptr = message.as_ptr();
    let message_len = message.len() as u32;
    unsafe {
        imports::log_message(message_ptr, message_len);
    }
}

/// `return_value` places `value` in the receipt of the invoking transaction.
pub fn return_value(value: Vec<u8>) {
    let value_ptr = value.as_ptr();
    let value_len = value.len() as u32;
    unsafe {
        imports::return_value(value_ptr, value_len);
    }
}
