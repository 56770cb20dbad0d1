// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Errors of checking a [`SingleScenario`] for well-formedness.
//!
//! Rendering itself never fails, so these are only produced by the opt-in
//! [`SingleScenario::validate()`] and [`DataTable::validate()`].
//!
//! [`DataTable::validate()`]: crate::DataTable::validate
//! [`SingleScenario`]: crate::SingleScenario
//! [`SingleScenario::validate()`]: crate::SingleScenario::validate

use derive_more::{Display, Error};

/// Malformed input detected in a [`SingleScenario`].
///
/// [`SingleScenario`]: crate::SingleScenario
#[derive(Clone, Debug, Display, Eq, Error, PartialEq)]
pub enum ValidationError {
    /// [`DataTable`] row has a different number of cells than the first one.
    ///
    /// [`DataTable`]: crate::DataTable
    #[display(
        "Data table of step `{step}` has {found} cells in row {row}, \
         expected {expected}"
    )]
    RaggedTable {
        /// Text of the step owning the table.
        step: String,

        /// Zero-based index of the offending row.
        row: usize,

        /// Number of cells in the first row.
        expected: usize,

        /// Number of cells in the offending row.
        found: usize,
    },

    /// [`DataTable`] has no rows at all.
    ///
    /// [`DataTable`]: crate::DataTable
    #[display("Data table of step `{step}` has no rows")]
    EmptyTable {
        /// Text of the step owning the table.
        step: String,
    },
}

/// Result type alias using [`ValidationError`].
pub type Result<T> = std::result::Result<T, ValidationError>;

impl ValidationError {
    /// Creates a [`ValidationError::RaggedTable`].
    #[must_use]
    pub fn ragged_table(
        step: impl Into<String>,
        row: usize,
        expected: usize,
        found: usize,
    ) -> Self {
        Self::RaggedTable { step: step.into(), row, expected, found }
    }

    /// Creates a [`ValidationError::EmptyTable`].
    #[must_use]
    pub fn empty_table(step: impl Into<String>) -> Self {
        Self::EmptyTable { step: step.into() }
    }

    /// Returns the text of the step this error relates to.
    #[must_use]
    pub fn step(&self) -> &str {
        match self {
            Self::RaggedTable { step, .. } | Self::EmptyTable { step } => step,
        }
    }
}
