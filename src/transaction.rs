/*
    Copyright © 2023, ParallelChain Lab
    Licensed under the Apache License, Version 2.0: http://www.apache.org/licenses/LICENSE-2.0
*/

//! Defines functions for getting the dispatch payload of the Transaction that triggered
//! this call: the name of the target action and the serialized argument list. Everything
//! else about the transaction (signer, authorization, resource billing) stays on the host's
//! side of the boundary.

use crate::imports;

/// Get the name of the action the invoking transaction targets.
///
/// The accessor needs two things from the host:
///   * an offset pointing to where the host wrote the name's bytes: `method_ptr`.
///   * the byte-wise length of the name, which is the import's return value.
///
/// WASM does not support multiple return values, so the offset travels through
/// `method_ptr_ptr` instead: the host writes it into the caller-provided slot. The returned
/// `Vec` takes ownership of the written segment, letting the Rust ownership system Drop it
/// later.
pub fn method() -> String {
    let mut method_ptr: *mut u8 = std::ptr::null_mut();
    let method_ptr_ptr = &mut method_ptr;

    let bytes = unsafe {
        let method_len = imports::method(method_ptr_ptr);
        Vec::<u8>::from_raw_parts(method_ptr, method_len as usize, method_len as usize)
    };
    String::from_utf8(bytes).unwrap()
}

/// Get the serialized argument list of the invoking call.
pub fn arguments() -> Vec<u8> {
    let mut arguments_ptr: *mut u8 = std::ptr::null_mut();
    let arguments_ptr_ptr = &mut arguments_ptr;

    unsafe {
        let arguments_len = imports::arguments(arguments_ptr_ptr);
        Vec::<u8>::from_raw_parts(arguments_ptr, arguments_len as usize, arguments_len as usize)
    }
}

#[cfg(test)]
mod tests {
    use crate::mock_host;

    #[test]
    fn accessors_return_the_primed_payload() {
        mock_host::reset();
        mock_host::set_incoming_call("inject", vec![1, 2, 3]);

        assert_eq!(super::method(), "inject");
        assert_eq!(super::arguments(), vec![1, 2, 3]);
    }
}
