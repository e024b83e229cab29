//! Successive-approximation analog-to-digital conversion loop.
//!
//! The [`ConversionSubsystem`] drives an external comparator, sample-and-hold and DAC (or
//! resistor ladder) through a binary search, averages the results and reports them in several
//! numeric encodings. Everything is modeled as synchronous modules stepped once per tick.

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
#![allow(clippy::type_complexity)]
#![allow(elided_lifetimes_in_paths)]

use tickflow::*;
use tickflow_std::*;

mod bench;
mod config;
pub mod constants;
mod decimal;
mod engine;
mod error;
mod format;
mod subsystem;

pub use bench::*;
pub use config::*;
pub use decimal::*;
pub use engine::*;
pub use error::AdcError;
pub use format::*;
pub use subsystem::*;
