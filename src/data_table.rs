// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Data tables attached to [`Step`]s.
//!
//! [`Step`]: crate::Step

use derive_more::IntoIterator;

use crate::error::{Result, ValidationError};

/// Data table of a [`Step`], rendered as `|`-delimited rows right below the
/// step line.
///
/// Rows keep the order they were added in. Cells of every row are expected to
/// be of the same count, but this is only checked by [`DataTable::validate()`]
/// and never while rendering.
///
/// # Example
///
/// ```rust
/// use cucable_render::DataTable;
///
/// let mut table = DataTable::from(vec![vec!["name", "age"]]);
/// table.add_row(["Alice", "30"]);
///
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.rows()[1], vec!["Alice", "30"]);
/// ```
///
/// [`Step`]: crate::Step
#[derive(Clone, Debug, Default, Eq, IntoIterator, PartialEq)]
#[into_iterator(owned, ref)]
pub struct DataTable {
    /// Rows of this table, each one being an ordered list of cells.
    rows: Vec<Vec<String>>,
}

impl DataTable {
    /// Creates a new [`DataTable`] out of the provided `rows`.
    #[must_use]
    pub const fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Appends a new row of `cells` to the end of this [`DataTable`].
    pub fn add_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    /// Returns all the rows of this [`DataTable`], in order.
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Returns the number of rows in this [`DataTable`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Indicates whether this [`DataTable`] has no rows at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the number of cells in the first row, if any.
    #[must_use]
    pub fn width(&self) -> Option<usize> {
        self.rows.first().map(Vec::len)
    }

    /// Checks that this [`DataTable`] has at least one row and that all its
    /// rows have the same number of cells.
    ///
    /// `step` is the text of the owning step, used for error reporting only.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::EmptyTable`] if there are no rows.
    /// - [`ValidationError::RaggedTable`] pointing to the first row whose
    ///   width differs from the first one.
    pub fn validate(&self, step: &str) -> Result<()> {
        let expected =
            self.width().ok_or_else(|| ValidationError::empty_table(step))?;

        match self
            .rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|(_, found)| *found != expected)
        {
            Some((row, found)) => Err(ValidationError::ragged_table(
                step, row, expected, found,
            )),
            None => Ok(()),
        }
    }
}

impl From<Vec<Vec<String>>> for DataTable {
    fn from(rows: Vec<Vec<String>>) -> Self {
        Self::new(rows)
    }
}

impl From<Vec<Vec<&str>>> for DataTable {
    fn from(rows: Vec<Vec<&str>>) -> Self {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(str::to_owned).collect())
                .collect(),
        }
    }
}

impl From<&gherkin::Table> for DataTable {
    fn from(table: &gherkin::Table) -> Self {
        Self::new(table.rows.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_row_preserves_order() {
        let mut table = DataTable::default();
        table.add_row(["cell11", "cell12"]);
        table.add_row(vec!["cell21".to_owned(), "cell22".to_owned()]);

        assert_eq!(
            table.rows(),
            &[
                vec!["cell11".to_owned(), "cell12".to_owned()],
                vec!["cell21".to_owned(), "cell22".to_owned()],
            ],
        );
        assert_eq!(table.width(), Some(2));
    }

    #[test]
    fn iterates_rows_by_ref_and_owned() {
        let table = DataTable::from(vec![vec!["a"], vec!["b"]]);

        let by_ref: Vec<_> = (&table).into_iter().cloned().collect();
        let owned: Vec<_> = table.into_iter().collect();

        assert_eq!(by_ref, owned);
    }

    #[test]
    fn validate_accepts_rectangular_table() {
        let table = DataTable::from(vec![vec!["a", "b"], vec!["c", "d"]]);

        assert_eq!(table.validate("Given a table"), Ok(()));
    }

    #[test]
    fn validate_rejects_empty_table() {
        let table = DataTable::default();

        assert_eq!(
            table.validate("Given a table"),
            Err(ValidationError::EmptyTable {
                step: "Given a table".to_owned(),
            }),
        );
    }

    #[test]
    fn validate_reports_first_ragged_row() {
        let table =
            DataTable::from(vec![vec!["a", "b"], vec!["c", "d"], vec!["e"]]);

        assert_eq!(
            table.validate("Given a table"),
            Err(ValidationError::RaggedTable {
                step: "Given a table".to_owned(),
                row: 2,
                expected: 2,
                found: 1,
            }),
        );
    }
}
