/*
    Copyright © 2023, ParallelChain Lab
    Licensed under the Apache License, Version 2.0: http://www.apache.org/licenses/LICENSE-2.0
*/

use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{punctuated::Punctuated, token::Comma, FnArg, Ident, ImplItemMethod, ItemImpl};

use super::generate_compilation_error;

/// `generate_contract_impl` re-emits the contract impl block unchanged and appends the
/// generated dispatch skeleton for its `#[action]` methods.
pub(crate) fn generate_contract_impl(ipl: &ItemImpl) -> TokenStream {
    let original_code = ipl.clone();
    let impl_name = match &*ipl.self_ty {
        syn::Type::Path(tp) => tp.path.segments.first().unwrap().ident.clone(),
        _ => {
            return generate_compilation_error("Cannot resolve the name of the contract struct.".to_string())
        }
    };

    let actions: Vec<&ImplItemMethod> = ipl
        .items
        .iter()
        .filter_map(|item| match item {
            syn::ImplItem::Method(method) if method.is_action() => Some(method),
            _ => None,
        })
        .collect();

    // The contract struct declares no storage fields, so there is no state to load into a
    // receiver.
    if actions.iter().any(|method| !method.is_associate()) {
        return generate_compilation_error(
            "ERROR: #[action] methods cannot take a receiver. Declare them as associated functions.".to_string(),
        );
    }

    let contract_skeleton = generate_dispatch(&impl_name, &actions);

    TokenStream::from(quote! {
        #original_code

        #contract_skeleton
    })
}

/// generate code segment from function arguments. e.g.
///
/// ===> transform from fn inject (scope: u64, table: u64)
///
/// pass_args:
/// \[_d0, _d1\]
///
/// return:
/// ```no_run
/// let _d0: u64 = match crate::ActionInput::parse_multiple_arguments(&multi_args, 0usize) { ...
/// let _d1: u64 = match crate::ActionInput::parse_multiple_arguments(&multi_args, 1usize) { ...
/// ```
fn generate_let_arguments(
    pass_args: &mut Vec<proc_macro2::TokenStream>,
    fn_args: &Punctuated<FnArg, Comma>,
) -> proc_macro2::TokenStream {
    let mut var_idx: usize = 0;
    let code_parse_args = fn_args.iter().filter_map(|fa| match &fa {
        syn::FnArg::Typed(e) => {
            let var_name = format_ident!("_d{}", format!("{}", var_idx));
            let e_ty = &e.ty;
            let q = quote! {
                let #var_name: #e_ty = match crate::ActionInput::parse_multiple_arguments(&multi_args, #var_idx) {
                    Ok(value) => value,
                    Err(err) => crate::abort(err),
                };
            };
            var_idx += 1;
            pass_args.push(quote! {
                #var_name
            });
            Some(q)
        }
        _ => None,
    });

    quote! {
        #(#code_parse_args)*
    }
}

/// `generate_dispatch` performs the following items:
/// 1. generate the method selector `dispatch()`, one arm per `#[action]` method.
/// 2. generate the exported `entrypoint()` the host VM enters.
///
/// `dispatch` is a plain function and `entrypoint` only wraps it: a panic raised on a bad
/// call payload must not unwind through an `extern "C"` boundary.
fn generate_dispatch(impl_name: &Ident, actions: &[&ImplItemMethod]) -> proc_macro2::TokenStream {
    let code_function_selection = actions.iter().map(|method| {
        let fn_name = &method.sig.ident;

        // create method body based on input arguments
        let has_typed_args = method.sig.inputs.iter().any(|fa| matches!(fa, syn::FnArg::Typed(_)));
        let code_init_multiple_args = if has_typed_args {
            quote! {
                let multi_args = match ctx.get_multiple_arguments() {
                    Ok(args) => args,
                    Err(err) => crate::abort(err),
                };
            }
        } else {
            quote! {}
        };
        let mut pass_args: Vec<proc_macro2::TokenStream> = vec![];
        let code_parse_args = generate_let_arguments(&mut pass_args, &method.sig.inputs);

        // define calling body
        let has_return_value = !matches!(&method.sig.output, syn::ReturnType::Default);
        let code_return_handle = if has_return_value {
            quote! { let ret = }
        } else {
            quote! {}
        };
        let code_call_function = quote! { #impl_name::#fn_name(#(#pass_args,)*); };

        // define return method
        let code_return = if has_return_value {
            quote! { crate::ActionOutput::set(&ret) }
        } else {
            quote! { crate::ActionOutput::default() }
        };

        quote! {
            stringify!(#fn_name) => {
                #code_init_multiple_args
                #code_parse_args
                #code_return_handle
                #code_call_function
                #code_return
            }
        }
    });

    quote! {
        fn dispatch(ctx: crate::ActionInput) -> crate::ActionOutput {
            // Enter function selector
            match ctx.method_name.as_str() {
                #(#code_function_selection)*
                method => crate::abort(crate::ActionError::UnknownMethod(method.to_string())),
            }
        }

        #[no_mangle]
        pub extern "C" fn entrypoint() {
            let output = dispatch(crate::ActionInput::from_transaction());
            // Return
            if let Some(return_value) = output.get() {
                crate::return_value(return_value);
            }
        }
    }
}

/// Trait for adding helper functions to method for checking information of a contract
trait ContractMethodAnalysis {
    fn is_action(&self) -> bool;
    fn is_associate(&self) -> bool;
}

impl ContractMethodAnalysis for ImplItemMethod {
    fn is_action(&self) -> bool {
        self.attrs.iter().any(|attr| {
            attr.parse_meta().map_or(false, |meta| {
                meta.path().get_ident().map_or(false, |ident| {
                    *ident == *"action"
                })
            })
        })
    }

    fn is_associate(&self) -> bool {
        // method without receiver
        let fn_args = &self.sig.inputs;
        !fn_args.iter().any(|fa| {
            matches!(&fa, syn::FnArg::Receiver(_))
        })
    }
}
