// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [`SingleScenario`] definition.

use crate::{error::Result, step::Step};

/// Single scenario split out of its feature, along with everything needed to
/// render it as a standalone feature file.
///
/// Display lines (`feature_name`, `scenario_name`) already contain their
/// keyword, e.g. `Feature: Eating` or `Scenario Outline: Eating`, and tags
/// already contain their leading `@`.
///
/// # Example
///
/// ```rust
/// use cucable_render::{SingleScenario, Step};
///
/// let scenario = SingleScenario::new(
///     "Feature: Eating",
///     "features/eating.feature",
///     None,
///     None,
///     "Scenario: Hungry",
///     None,
///     vec!["@food".into()],
///     vec![],
/// )
/// .with_steps(vec![Step::plain("Given a cucumber")]);
///
/// assert_eq!(scenario.steps.len(), 1);
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SingleScenario {
    /// `Feature:` line of the originating feature.
    pub feature_name: String,

    /// Path of the originating feature file.
    pub feature_file_path: String,

    /// Language code of the originating feature file, if not the default one.
    ///
    /// An empty code is treated the same as [`None`].
    pub language: Option<String>,

    /// Description line of the originating feature, if any.
    pub feature_description: Option<String>,

    /// `Scenario:` line of this scenario.
    pub scenario_name: String,

    /// Description line of this scenario, if any.
    pub scenario_description: Option<String>,

    /// Tags of the originating feature, in order.
    pub feature_tags: Vec<String>,

    /// Steps of the feature's `Background`, in order.
    pub background_steps: Vec<Step>,

    /// Tags of this scenario, in order.
    pub scenario_tags: Vec<String>,

    /// Steps of this scenario, in order.
    pub steps: Vec<Step>,
}

impl SingleScenario {
    /// Creates a new [`SingleScenario`] without any scenario tags or steps.
    ///
    /// Use [`SingleScenario::set_scenario_tags()`] and
    /// [`SingleScenario::set_steps()`] (or their `with_*` counterparts) to fill
    /// them in.
    #[expect(clippy::too_many_arguments, reason = "mirrors the record layout")]
    #[must_use]
    pub fn new(
        feature_name: impl Into<String>,
        feature_file_path: impl Into<String>,
        language: Option<String>,
        feature_description: Option<String>,
        scenario_name: impl Into<String>,
        scenario_description: Option<String>,
        feature_tags: Vec<String>,
        background_steps: Vec<Step>,
    ) -> Self {
        Self {
            feature_name: feature_name.into(),
            feature_file_path: feature_file_path.into(),
            language,
            feature_description,
            scenario_name: scenario_name.into(),
            scenario_description,
            feature_tags,
            background_steps,
            scenario_tags: Vec::new(),
            steps: Vec::new(),
        }
    }

    /// Replaces the tags of this scenario.
    pub fn set_scenario_tags(&mut self, tags: Vec<String>) {
        self.scenario_tags = tags;
    }

    /// Replaces the steps of this scenario.
    pub fn set_steps(&mut self, steps: Vec<Step>) {
        self.steps = steps;
    }

    /// Sets the language code of the originating feature file.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Replaces the tags of this scenario.
    #[must_use]
    pub fn with_scenario_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scenario_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the steps of this scenario.
    #[must_use]
    pub fn with_steps(mut self, steps: impl IntoIterator<Item = Step>) -> Self {
        self.steps = steps.into_iter().collect();
        self
    }

    /// Returns the language code to be declared in the rendered file, if any.
    #[must_use]
    pub fn declared_language(&self) -> Option<&str> {
        self.language.as_deref().filter(|l| !l.is_empty())
    }

    /// Iterates over all the steps to be rendered: the background ones
    /// followed by the scenario ones.
    pub fn all_steps(&self) -> impl Iterator<Item = &Step> {
        self.background_steps.iter().chain(&self.steps)
    }

    /// Checks all the [`Step`]s of this [`SingleScenario`] for
    /// well-formedness.
    ///
    /// Rendering never calls this, so a malformed [`SingleScenario`] is still
    /// rendered as is.
    ///
    /// # Errors
    ///
    /// With the first [`ValidationError`] found, in rendering order.
    ///
    /// [`ValidationError`]: crate::ValidationError
    pub fn validate(&self) -> Result<()> {
        self.all_steps().try_for_each(Step::validate).inspect_err(|_e| {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                scenario = %self.scenario_name,
                error = %_e,
                "malformed scenario"
            );
        })
    }
}
