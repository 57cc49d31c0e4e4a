mod log;
mod loggable;

use proc_macro::TokenStream;

/// Logs a `loggable!` value at its own level, optionally with a debug payload.
#[proc_macro]
pub fn log(input: TokenStream) -> TokenStream {
    log::log_impl(input)
}

/// Declares an enum of log entries or errors, each variant carrying its message and level.
#[proc_macro]
pub fn loggable(input: TokenStream) -> TokenStream {
    loggable::loggable_impl(input)
}
