/*
    Copyright © 2023, ParallelChain Lab
    Licensed under the Apache License, Version 2.0: http://www.apache.org/licenses/LICENSE-2.0
*/

use proc_macro::TokenStream;
use proc_macro2::Span;

/// `generate_compilation_error` is called if the macros provided by this crate are misused on
/// blocks of code, e.g. applying `contract_methods` to a struct definition, or marking a method
/// that takes a receiver as an `#[action]`.
pub(crate) fn generate_compilation_error(result_message: String) -> TokenStream {
    TokenStream::from(
        syn::Error::new(
            Span::call_site(),
            result_message,
        ).to_compile_error(),
    )
}
