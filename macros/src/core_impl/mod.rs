/*
    Copyright © 2023, ParallelChain Lab
    Licensed under the Apache License, Version 2.0: http://www.apache.org/licenses/LICENSE-2.0
*/

mod compilation_error;
#[allow(unused_imports)]
pub use compilation_error::*;

mod contract;
#[allow(unused_imports)]
pub use contract::*;
