/*
    Copyright © 2023, ParallelChain Lab
    Licensed under the Apache License, Version 2.0: http://www.apache.org/licenses/LICENSE-2.0
*/

/// The host VM calls `alloc` to obtain segments of WASM linear memory to write incoming
/// data into, e.g. the dispatch payload read back by [crate::transaction].
#[cfg(target_arch = "wasm32")]
#[no_mangle]
pub extern "C" fn alloc(len: u32) -> *mut u8 {
    let mut buf = Vec::with_capacity(len as usize);
    let ptr = buf.as_mut_ptr();

    // The segment is handed to the host un-owned. Whoever reads it back takes ownership
    // again (Vec::from_raw_parts) so that it is dropped exactly once.
    std::mem::forget(buf);

    ptr
}
