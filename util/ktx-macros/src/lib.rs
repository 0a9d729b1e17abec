// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Procedural macros for the ktx test-case framework.
use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::{format_ident, quote};
use syn::{Error, FnArg, ItemFn, parse_macro_input};

/// Define a named test case and register it with the case registry.
///
/// The function takes exactly one `&mut TestCase` argument and returns
/// nothing; its name becomes the case name. The function item itself is
/// emitted unchanged, so its visibility decides whether other modules or
/// crates can reference the body directly. A registry descriptor carrying
/// the name and `module_path!()` is added alongside it, making the case
/// reachable through `ktx::find_case` and `ktx::run_case`.
///
/// # Example
///
/// ```rust,ignore
/// use ktx::{TestCase, def_case, ktx_check, ktx_require};
///
/// #[def_case]
/// fn pointer_identity(tc: &mut TestCase) {
///     let x = 0u8;
///     ktx_require!(tc, &x as *const u8, &x as *const u8);
///     ktx_check!(tc, 1 + 1, 2);
/// }
///
/// let tc = ktx::run_case("pointer_identity").unwrap();
/// assert_eq!(tc.result(), 0);
/// ```
#[proc_macro_attribute]
pub fn def_case(attr: TokenStream, item: TokenStream) -> TokenStream {
    if !attr.is_empty() {
        return Error::new(Span::call_site(), "expect an empty attribute: `#[def_case]`")
            .to_compile_error()
            .into();
    }

    let input = parse_macro_input!(item as ItemFn);

    // Case bodies take the record by unique borrow and report through it.
    if let syn::ReturnType::Type(..) = input.sig.output {
        return Error::new(
            Span::call_site(),
            "expect no return value for a test-case body",
        )
        .to_compile_error()
        .into();
    }
    let inputs = &input.sig.inputs;
    if inputs.len() != 1 || matches!(inputs.first(), Some(FnArg::Receiver(_))) {
        return Error::new(
            Span::call_site(),
            "expect exactly one `&mut TestCase` argument for a test-case body",
        )
        .to_compile_error()
        .into();
    }

    let fn_name = &input.sig.ident;
    let fn_name_str = fn_name.to_string();
    let descriptor_name = format_ident!("__KTX_CASE_{}", fn_name_str.to_uppercase());

    let output = quote! {
        #input

        #[allow(non_upper_case_globals)]
        #[::ktx::__private::linkme::distributed_slice(::ktx::CASES)]
        #[linkme(crate = ::ktx::__private::linkme)]
        static #descriptor_name: ::ktx::CaseDescriptor = ::ktx::CaseDescriptor::new(
            #fn_name_str,
            ::core::module_path!(),
            #fn_name,
        );
    };

    output.into()
}
