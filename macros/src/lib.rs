/*
    Copyright © 2023, ParallelChain Lab
    Licensed under the Apache License, Version 2.0: http://www.apache.org/licenses/LICENSE-2.0
*/

extern crate proc_macro;
use proc_macro::TokenStream;
use syn::ItemImpl;

mod core_impl;
use self::core_impl::*;

/// `contract_methods` defines the impl block of the contract struct. Methods marked with
/// `#[action]` become callable through the contract `entrypoint`, selected by method name.
///
/// # Basic example
/// Define the actions the contract exposes to transactions.
///
/// ```no_run
/// #[contract_methods]
/// impl Migrator {
///   #[action]
///   pub fn inject(scope: u64, table: u64, payer: u64, id: u64) {
///     // ...
///   }
/// }
/// ```
///
/// The macro re-emits the impl unchanged and generates the dispatch skeleton after it: a
/// `dispatch` function selecting on the incoming method name, and the exported `entrypoint`
/// the host VM enters. Actions take no receiver; this contract declares no storage fields,
/// so there is no state to load into one.
#[proc_macro_attribute]
pub fn contract_methods(_attr_args: TokenStream, input: TokenStream) -> TokenStream {
    if let Ok(ipl) = syn::parse::<ItemImpl>(input) {
        generate_contract_impl(&ipl)
    } else {
        generate_compilation_error(
            "ERROR: contract_methods macro can only be applied to the contract impl block.".to_string(),
        )
    }
}

/// `action` marks an impl method as callable by transactions.
///
/// ```no_run
/// #[action]
/// pub fn inject(scope: u64, table: u64, payer: u64, id: u64) { ..
/// ```
#[proc_macro_attribute]
pub fn action(_attr_args: TokenStream, input: TokenStream) -> TokenStream {
    // it does nothing. The macro contract_methods will handle this attribute.
    input
}
