// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = "Rendering of a single split [Gherkin] scenario into a standalone \
          `.feature` document.\n\n\
          [Gherkin]: https://cucumber.io/docs/gherkin/reference"]
#![deny(nonstandard_style, rustdoc::all, trivial_casts, trivial_numeric_casts)]
#![forbid(non_ascii_idents, unsafe_code)]
#![warn(
    clippy::absolute_paths,
    clippy::allow_attributes,
    clippy::as_conversions,
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::derive_partial_eq_without_eq,
    clippy::expect_used,
    clippy::get_unwrap,
    clippy::if_then_some_else_none,
    clippy::missing_docs_in_private_items,
    clippy::missing_const_for_fn,
    clippy::panic,
    clippy::print_stderr,
    clippy::print_stdout,
    clippy::str_to_string,
    clippy::string_slice,
    clippy::unwrap_used,
    clippy::use_self,
    future_incompatible,
    let_underscore_drop,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    rust_2018_idioms,
    single_use_lifetimes,
    unreachable_pub,
    unused,
    variant_size_differences
)]

pub mod data_table;
pub mod error;
pub mod gherkin_ext;
pub mod render;
pub mod scenario;
pub mod step;

#[doc(no_inline)]
pub use gherkin;

#[doc(inline)]
pub use self::{
    data_table::DataTable,
    error::{Result, ValidationError},
    gherkin_ext::FeatureExt,
    render::{render, FeatureFile, FeatureFileRenderer},
    scenario::SingleScenario,
    step::{Step, StepBody},
};
