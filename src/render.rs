// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Rendering of a [`SingleScenario`] into a feature file.
//!
//! The produced document looks like this:
//! ```gherkin
//! # language: de
//!
//! @featureTag
//! Feature: featureName
//! featureDescription
//!
//! @scenarioTag
//! Scenario: scenarioName
//! scenarioDescription
//! Given a background step
//! When a step with a table
//! |cell11|cell12|
//! Then a step with a doc-string
//! """
//! doc-string line
//! """
//!
//! # Source feature: features/path.feature
//! # Generated by Cucable
//! ```
//!
//! Blank lines only ever appear after the language line, between the feature
//! and the scenario blocks, and before the footer.

use std::{
    borrow::Cow,
    fmt::{self, Display},
};

use derive_more::{Deref, From};
use itertools::Itertools as _;

use crate::{
    scenario::SingleScenario,
    step::{Step, StepBody},
};

/// Prefix of the line declaring the language of the rendered file.
pub const LANGUAGE_PREFIX: &str = "# language: ";

/// Prefix of the footer line pointing to the originating feature file.
pub const SOURCE_FEATURE_PREFIX: &str = "# Source feature: ";

/// Last line of every rendered file.
pub const GENERATED_BY_LINE: &str = "# Generated by Cucable";

/// Line opening and closing a doc-string.
pub const DOCSTRING_DELIMITER: &str = "\"\"\"";

/// Delimiter of data table cells.
pub const TABLE_DELIMITER: &str = "|";

/// Renders the provided [`SingleScenario`] as a feature file.
///
/// # Example
///
/// ```rust
/// use cucable_render::{render, SingleScenario, Step};
///
/// let scenario = SingleScenario::new(
///     "Feature: Eating",
///     r"features\eating.feature",
///     None,
///     None,
///     "Scenario: Hungry",
///     None,
///     vec![],
///     vec![],
/// )
/// .with_steps([Step::plain("Given a cucumber")]);
///
/// let expected = concat!(
///     "Feature: Eating\n",
///     "\n",
///     "Scenario: Hungry\n",
///     "Given a cucumber\n",
///     "\n",
///     "# Source feature: features/eating.feature\n",
///     "# Generated by Cucable\n",
/// );
/// assert_eq!(render(&scenario), expected);
/// ```
#[must_use]
pub fn render(scenario: &SingleScenario) -> String {
    let out = FeatureFile(scenario).to_string();

    #[cfg(feature = "tracing")]
    tracing::debug!(
        feature = %scenario.feature_name,
        scenario = %scenario.scenario_name,
        background_steps = scenario.background_steps.len(),
        steps = scenario.steps.len(),
        len = out.len(),
        "rendered feature file"
    );

    out
}

/// Renderer of [`SingleScenario`]s into feature files.
///
/// Stateless, so a single instance may be shared freely. Prefer the [`render`]
/// function unless a value is required.
#[derive(Clone, Copy, Debug, Default)]
pub struct FeatureFileRenderer;

impl FeatureFileRenderer {
    /// Creates a new [`FeatureFileRenderer`].
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders the provided [`SingleScenario`] as a feature file.
    ///
    /// See the [`render`] function for details.
    #[must_use]
    pub fn render(self, scenario: &SingleScenario) -> String {
        render(scenario)
    }
}

/// [`Display`]able feature file of a [`SingleScenario`].
///
/// Allows writing the rendered document into any [`fmt::Write`] sink without
/// an intermediate [`String`].
#[derive(Clone, Copy, Debug, Deref, From)]
pub struct FeatureFile<'s>(pub &'s SingleScenario);

impl Display for FeatureFile<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.0;

        if let Some(lang) = s.declared_language() {
            writeln!(f, "{LANGUAGE_PREFIX}{lang}")?;
            writeln!(f)?;
        }

        write_tags(f, &s.feature_tags)?;
        writeln!(f, "{}", s.feature_name)?;
        if let Some(desc) = &s.feature_description {
            writeln!(f, "{desc}")?;
        }
        writeln!(f)?;

        write_tags(f, &s.scenario_tags)?;
        writeln!(f, "{}", s.scenario_name)?;
        if let Some(desc) = &s.scenario_description {
            writeln!(f, "{desc}")?;
        }
        for step in s.all_steps() {
            write_step(f, step)?;
        }

        writeln!(f)?;
        writeln!(
            f,
            "{SOURCE_FEATURE_PREFIX}{}",
            normalize_path(&s.feature_file_path),
        )?;
        writeln!(f, "{GENERATED_BY_LINE}")
    }
}

/// Writes each of the `tags` on its own line.
fn write_tags(f: &mut fmt::Formatter<'_>, tags: &[String]) -> fmt::Result {
    tags.iter().try_for_each(|t| writeln!(f, "{t}"))
}

/// Writes the [`Step`] line followed by its argument, if any.
fn write_step(f: &mut fmt::Formatter<'_>, step: &Step) -> fmt::Result {
    writeln!(f, "{}", step.text)?;

    match &step.body {
        StepBody::Plain => Ok(()),
        StepBody::Table(table) => {
            #[cfg(feature = "tracing")]
            tracing::trace!(step = %step.text, rows = table.len(), "table");

            table.rows().iter().try_for_each(|row| {
                writeln!(
                    f,
                    "{TABLE_DELIMITER}{}{TABLE_DELIMITER}",
                    row.iter().format(TABLE_DELIMITER),
                )
            })
        }
        StepBody::DocString(doc) => {
            #[cfg(feature = "tracing")]
            tracing::trace!(step = %step.text, len = doc.len(), "doc-string");

            writeln!(f, "{DOCSTRING_DELIMITER}")?;
            writeln!(f, "{doc}")?;
            writeln!(f, "{DOCSTRING_DELIMITER}")
        }
    }
}

/// Replaces all the backslashes in the `path` with forward slashes, so the
/// rendered footer doesn't depend on the platform the path came from.
#[must_use]
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    if path.contains('\\') {
        path.replace('\\', "/").into()
    } else {
        path.into()
    }
}

#[cfg(test)]
mod tests {
    use std::fmt::Write as _;

    use crate::DataTable;

    use super::*;

    fn minimal() -> SingleScenario {
        SingleScenario::new(
            "Feature: featureName",
            "TESTPATH",
            None,
            None,
            "Scenario: scenarioName",
            None,
            vec![],
            vec![],
        )
    }

    #[test]
    fn renders_minimal_scenario() {
        assert_eq!(
            render(&minimal()),
            "Feature: featureName\n\
             \n\
             Scenario: scenarioName\n\
             \n\
             # Source feature: TESTPATH\n\
             # Generated by Cucable\n",
        );
    }

    #[test]
    fn present_but_empty_description_renders_empty_line() {
        let mut s = minimal();
        s.feature_description = Some(String::new());
        s.scenario_description = Some(String::new());

        assert_eq!(
            render(&s),
            "Feature: featureName\n\
             \n\
             \n\
             Scenario: scenarioName\n\
             \n\
             \n\
             # Source feature: TESTPATH\n\
             # Generated by Cucable\n",
        );
    }

    #[test]
    fn empty_language_is_omitted() {
        let s = minimal().with_language("");

        assert!(render(&s).starts_with("Feature: featureName\n"));
    }

    #[test]
    fn table_rows_are_pipe_delimited() {
        let s = minimal().with_steps([Step::plain("Given a table")
            .with_table(DataTable::from(vec![vec!["a", "b"], vec!["", "c"]]))]);

        assert!(render(&s).contains(
            "Given a table\n\
             |a|b|\n\
             ||c|\n\
             \n",
        ));
    }

    #[test]
    fn ragged_table_is_rendered_as_is() {
        let s = minimal().with_steps([Step::plain("Given a table")
            .with_table(vec![vec!["a", "b", "c"], vec!["d"]])]);

        assert!(render(&s).contains("|a|b|c|\n|d|\n"));
    }

    #[test]
    fn docstring_is_rendered_verbatim() {
        let s = minimal().with_steps([
            Step::plain("Given a doc").with_docstring("  indented\n\nlast\n")
        ]);

        assert!(render(&s).contains(
            "Given a doc\n\
             \"\"\"\n  \
             indented\n\
             \n\
             last\n\
             \n\
             \"\"\"\n",
        ));
    }

    #[test]
    fn display_matches_render() {
        let s = minimal()
            .with_language("fr")
            .with_scenario_tags(["@tag"])
            .with_steps([Step::plain("Given a step")]);

        let mut out = String::new();
        write!(out, "{}", FeatureFile(&s)).unwrap();

        assert_eq!(out, render(&s));
        assert_eq!(out, FeatureFileRenderer::new().render(&s));
    }

    #[test]
    fn normalizes_backslashes_only() {
        assert_eq!(normalize_path(r"c:\unknown\path"), "c:/unknown/path");
        assert_eq!(normalize_path("a/b c"), "a/b c");
        assert!(matches!(normalize_path("a/b"), Cow::Borrowed(_)));
    }
}
