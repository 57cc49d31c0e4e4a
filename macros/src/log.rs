use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::{Expr, Token, parse_macro_input};

struct LogInput {
    entry: Expr,
    debug_info: Option<Expr>,
}

impl Parse for LogInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let entry = input.parse::<Expr>()?;

        let debug_info = if input.peek(Token![,]) {
            input.parse::<Token![,]>()?;
            if input.is_empty() {
                None
            } else {
                Some(input.parse::<Expr>()?)
            }
        } else {
            None
        };

        Ok(LogInput { entry, debug_info })
    }
}

fn dispatch(fields: TokenStream2) -> TokenStream2 {
    quote! {
        match level {
            tracing::Level::ERROR => tracing::error!(#fields),
            tracing::Level::WARN => tracing::warn!(#fields),
            tracing::Level::INFO => tracing::info!(#fields),
            tracing::Level::DEBUG => tracing::debug!(#fields),
            _ => tracing::trace!(#fields),
        }
    }
}

pub fn log_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as LogInput);
    let entry_expr = &input.entry;

    match &input.debug_info {
        Some(debug_info) => {
            let dispatch = dispatch(quote! { message = %message, debug = ?debug_info });
            quote! {
                {
                    let entry = &#entry_expr;
                    let level = entry.level();
                    let message = entry.to_string();
                    let debug_info = #debug_info;
                    #dispatch
                }
            }
        }
        None => {
            let dispatch = dispatch(quote! { "{}", message });
            quote! {
                {
                    let entry = &#entry_expr;
                    let level = entry.level();
                    let message = entry.to_string();
                    #dispatch
                }
            }
        }
    }
    .into()
}
