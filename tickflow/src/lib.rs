//! TickFlow: cycle-accurate simulation of synchronous hardware as Mealy machines.
//!
//! Every component is a [`Module`]: a pure function from the current state and the current
//! tick's input to the current tick's output and the next state. An [`Instance`] owns one module
//! and its committed state, and applies the two-phase update (compute everything, then commit)
//! once per tick.

// # Tries to deny all lints (`rustc -W help`).
#![deny(absolute_paths_not_starting_with_crate)]
#![deny(anonymous_parameters)]
#![deny(deprecated_in_future)]
#![deny(explicit_outlives_requirements)]
#![deny(keyword_idents)]
#![deny(macro_use_extern_crate)]
#![deny(missing_debug_implementations)]
#![deny(non_ascii_idents)]
#![deny(trivial_numeric_casts)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(unused_extern_crates)]
#![deny(unused_import_braces)]
//
#![warn(missing_docs)]
#![warn(unreachable_pub)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::missing_crate_level_docs)]
#![deny(rustdoc::invalid_codeblock_attributes)]
#![deny(rustdoc::invalid_html_tags)]
#![deny(rustdoc::bare_urls)]
//
#![allow(clippy::needless_lifetimes)]
#![allow(elided_lifetimes_in_paths)]

mod bits;
mod instance;
mod module;
mod module_fsm;
mod package;
mod signal;
mod trace;
pub mod utils;

pub use bits::*;
pub use instance::*;
pub use module::*;
pub use module_fsm::*;
pub use package::*;
pub use signal::*;
pub use tickflow_macro::Signal;
pub use trace::*;
pub use utils::*;
