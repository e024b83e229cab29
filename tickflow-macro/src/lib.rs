//! Implementation of the `Signal` derive macro.
//!
//! # Note
//!
//! The derived `port_decls()` of a struct is the struct of its fields, in declaration order, and
//! `transl()` concatenates the fields LSB first in the same order.
//!
//! ```ignore
//! #[derive(Debug, Clone, Signal)]
//! pub struct EngineOutput {
//!     #[member(name = "sh")]
//!     sample_hold: bool,
//!     #[member(name = "")]
//!     dac: Bits<8>,
//! }
//!
//! impl Signal for EngineOutput {
//!     ...
//!     fn port_decls() -> PortDecls {
//!         PortDecls::Struct(vec![
//!             (Some("sh".to_string()), PortDecls::Bits(1)),
//!             (None, PortDecls::Bits(8)),
//!         ])
//!     }
//! }
//! ```
//!
//! Enums with unit variants only are encoded as plain bit vectors. The width defaults to the
//! ceiling log2 of the number of variants and can be overridden with `#[width(..)]`; variants are
//! numbered in declaration order unless they carry `#[encode(..)]`.

mod signal;
mod utils;

use proc_macro::{self, TokenStream};

#[proc_macro_derive(Signal, attributes(member, width, encode))]
pub fn signal(input: TokenStream) -> TokenStream { signal::derive(input) }
