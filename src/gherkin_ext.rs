// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [`gherkin::Feature`] extension building [`SingleScenario`]s.

use sealed::sealed;

use crate::{scenario::SingleScenario, step::Step};

/// Helper methods to build [`SingleScenario`]s out of a parsed
/// [`gherkin::Feature`].
#[sealed]
pub trait FeatureExt {
    /// Builds a [`SingleScenario`] for the given `scenario` of this
    /// [`gherkin::Feature`].
    ///
    /// The `scenario` is expected to belong to this [`gherkin::Feature`],
    /// though this is not checked. The language is left unset, use
    /// [`SingleScenario::with_language()`] to declare one.
    #[must_use]
    fn single_scenario(&self, scenario: &gherkin::Scenario) -> SingleScenario;
}

#[sealed]
impl FeatureExt for gherkin::Feature {
    fn single_scenario(&self, scenario: &gherkin::Scenario) -> SingleScenario {
        let mut single = SingleScenario::new(
            display_line(&self.keyword, &self.name),
            self.path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            None,
            description(self.description.as_deref()),
            display_line(&scenario.keyword, &scenario.name),
            description(scenario.description.as_deref()),
            tags(&self.tags),
            self.background
                .iter()
                .flat_map(|bg| &bg.steps)
                .map(Step::from)
                .collect(),
        );
        single.set_scenario_tags(tags(&scenario.tags));
        single.set_steps(scenario.steps.iter().map(Step::from).collect());
        single
    }
}

impl SingleScenario {
    /// Builds a [`SingleScenario`] out of a parsed `scenario` of the given
    /// `feature`.
    ///
    /// Shortcut for [`FeatureExt::single_scenario()`].
    #[must_use]
    pub fn from_gherkin(
        feature: &gherkin::Feature,
        scenario: &gherkin::Scenario,
    ) -> Self {
        feature.single_scenario(scenario)
    }
}

/// Forms a `Keyword: name` display line.
fn display_line(keyword: &str, name: &str) -> String {
    format!("{}: {}", keyword.trim(), name.trim())
}

/// Trims the parsed description, treating a blank one as absent.
fn description(desc: Option<&str>) -> Option<String> {
    desc.map(str::trim).filter(|d| !d.is_empty()).map(str::to_owned)
}

/// Restores the leading `@` of tags, as [`gherkin`] strips it while parsing.
fn tags(tags: &[String]) -> Vec<String> {
    tags.iter()
        .map(|t| {
            if t.starts_with('@') {
                t.clone()
            } else {
                format!("@{t}")
            }
        })
        .collect()
}
