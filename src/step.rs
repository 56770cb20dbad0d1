// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Steps of a [`SingleScenario`].
//!
//! [`SingleScenario`]: crate::SingleScenario

use derive_more::From;

use crate::{data_table::DataTable, error::Result};

/// Single step line along with its optional argument.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Step {
    /// Full text of this step, including its keyword (`Given a cucumber`).
    pub text: String,

    /// Argument attached to this step.
    pub body: StepBody,
}

/// Argument of a [`Step`].
///
/// A [`Step`] may carry either a [`DataTable`] or a doc-string, but never both.
#[derive(Clone, Debug, Default, Eq, From, PartialEq)]
pub enum StepBody {
    /// No argument, just the step line.
    #[default]
    #[from(ignore)]
    Plain,

    /// [`DataTable`] rendered below the step line.
    Table(DataTable),

    /// Doc-string rendered below the step line between `"""` delimiters.
    DocString(String),
}

impl Step {
    /// Creates a new [`Step`] out of its `text` and optional argument parts.
    ///
    /// If both `table` and `docstring` are provided, the `table` wins, as a
    /// [`Step`] cannot carry both.
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        table: Option<DataTable>,
        docstring: Option<String>,
    ) -> Self {
        let body = table
            .map(StepBody::Table)
            .or_else(|| docstring.map(StepBody::DocString))
            .unwrap_or_default();
        Self { text: text.into(), body }
    }

    /// Creates a new [`Step`] without any argument.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self { text: text.into(), body: StepBody::Plain }
    }

    /// Attaches the provided [`DataTable`] to this [`Step`], replacing any
    /// previous argument.
    #[must_use]
    pub fn with_table(mut self, table: impl Into<DataTable>) -> Self {
        self.body = StepBody::Table(table.into());
        self
    }

    /// Attaches the provided doc-string to this [`Step`], replacing any
    /// previous argument.
    #[must_use]
    pub fn with_docstring(mut self, docstring: impl Into<String>) -> Self {
        self.body = StepBody::DocString(docstring.into());
        self
    }

    /// Returns the [`DataTable`] of this [`Step`], if any.
    #[must_use]
    pub const fn table(&self) -> Option<&DataTable> {
        match &self.body {
            StepBody::Table(t) => Some(t),
            StepBody::Plain | StepBody::DocString(_) => None,
        }
    }

    /// Returns the doc-string of this [`Step`], if any.
    #[must_use]
    pub fn docstring(&self) -> Option<&str> {
        match &self.body {
            StepBody::DocString(d) => Some(d),
            StepBody::Plain | StepBody::Table(_) => None,
        }
    }

    /// Checks the argument of this [`Step`] for well-formedness.
    ///
    /// # Errors
    ///
    /// If the attached [`DataTable`] fails [`DataTable::validate()`].
    pub fn validate(&self) -> Result<()> {
        self.table().map_or(Ok(()), |t| t.validate(&self.text))
    }
}

impl From<&gherkin::Step> for Step {
    fn from(step: &gherkin::Step) -> Self {
        Self::new(
            format!("{} {}", step.keyword.trim_end(), step.value),
            step.table.as_ref().map(DataTable::from),
            step.docstring.as_deref().map(docstring_content).map(str::to_owned),
        )
    }
}

/// Strips the line breaks [`gherkin`] keeps right after the opening and
/// right before the closing `"""`, leaving the content lines only.
fn docstring_content(raw: &str) -> &str {
    let raw = raw.strip_prefix('\n').unwrap_or(raw);
    raw.strip_suffix('\n').unwrap_or(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_without_argument_is_plain() {
        let step = Step::new("Step 1", None, None);

        assert_eq!(step, Step::plain("Step 1"));
        assert!(step.table().is_none());
        assert!(step.docstring().is_none());
    }

    #[test]
    fn new_with_docstring() {
        let step = Step::new("Step 1", None, Some("line 1\nline 2".into()));

        assert_eq!(step.docstring(), Some("line 1\nline 2"));
        assert!(step.table().is_none());
    }

    #[test]
    fn new_prefers_table_over_docstring() {
        let table = DataTable::from(vec![vec!["a"]]);
        let step =
            Step::new("Step 1", Some(table.clone()), Some("ignored".into()));

        assert_eq!(step.body, StepBody::Table(table));
    }

    #[test]
    fn builders_replace_argument() {
        let step = Step::plain("Step 1")
            .with_docstring("doc")
            .with_table(vec![vec!["a", "b"]]);

        assert_eq!(step.table().map(DataTable::len), Some(1));
        assert!(step.docstring().is_none());
    }

    #[test]
    fn docstring_content_strips_single_delimiter_breaks() {
        assert_eq!(docstring_content("\nline 1\nline 2\n"), "line 1\nline 2");
        assert_eq!(docstring_content("\n\nline\n\n"), "\nline\n");
        assert_eq!(docstring_content("line"), "line");
        assert_eq!(docstring_content("\n"), "");
    }

    #[test]
    fn from_gherkin_step_keeps_content_lines_only() {
        let feature = gherkin::Feature::parse(
            "Feature: Doc\n\
             \x20 Scenario: Doc\n\
             \x20   Given x\n\
             \x20     \"\"\"\n\
             \x20     Yummy\n\
             \x20     two\n\
             \x20     \"\"\"\n",
            gherkin::GherkinEnv::default(),
        )
        .unwrap();

        let step = Step::from(&feature.scenarios[0].steps[0]);

        assert_eq!(step.text, "Given x");
        assert_eq!(step.docstring(), Some("Yummy\ntwo"));
    }

    #[test]
    fn validate_checks_table_only() {
        assert_eq!(Step::plain("Step 1").validate(), Ok(()));
        assert_eq!(Step::plain("Step 1").with_docstring("").validate(), Ok(()));
        assert!(Step::plain("Step 1")
            .with_table(vec![vec!["a", "b"], vec!["c"]])
            .validate()
            .is_err());
    }
}
