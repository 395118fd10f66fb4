// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job descriptions and their YAML form.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use yamagen_core::{Agent, Track};

/// Variable carrying the editor revision a job is pinned to.
pub const CUSTOM_REVISION_VAR: &str = "CUSTOM_REVISION";

/// Value of [`CUSTOM_REVISION_VAR`] until a revision is supplied at trigger time.
pub const CUSTOM_REVISION_NOT_SET: &str = "custom_revision_not_set";

/// A CI job assembled from name, agent, dependencies, trigger and commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDescription {
    pub name: String,
    pub agent: Agent,
    pub variables: IndexMap<String, String>,
    /// Upstream job references, in the order they were added
    pub dependencies: Vec<String>,
    /// Pull request expression that starts the job automatically
    pub trigger_expression: Option<String>,
    pub commands: Vec<String>,
}

impl JobDescription {
    pub fn builder() -> JobDescriptionBuilder {
        JobDescriptionBuilder::default()
    }

    /// Value of the `CUSTOM_REVISION` variable, if one was added.
    pub fn custom_revision(&self) -> Option<&str> {
        self.variables.get(CUSTOM_REVISION_VAR).map(String::as_str)
    }

    /// Render into the serializable job structure.
    pub fn yml(&self) -> JobYml {
        JobYml {
            name: self.name.clone(),
            agent: self.agent.clone(),
            variables: self.variables.clone(),
            dependencies: self.dependencies.clone(),
            triggers: self
                .trigger_expression
                .as_ref()
                .map(|expression| Triggers { expression: expression.clone() }),
            commands: self.commands.clone(),
        }
    }
}

/// Accumulates the parts of a [`JobDescription`].
#[derive(Debug, Clone)]
pub struct JobDescriptionBuilder {
    name: String,
    agent: Agent,
    variables: IndexMap<String, String>,
    dependencies: Vec<String>,
    trigger_expression: Option<String>,
    commands: Vec<String>,
}

impl Default for JobDescriptionBuilder {
    fn default() -> Self {
        Self {
            name: String::new(),
            agent: Agent::new("", ""),
            variables: IndexMap::new(),
            dependencies: Vec::new(),
            trigger_expression: None,
            commands: Vec::new(),
        }
    }
}

impl JobDescriptionBuilder {
    yamagen_core::setters! {
        into {
            name: String,
        }
        set {
            agent: Agent,
        }
        option {
            trigger_expression: String,
        }
    }

    pub fn add_dependencies<I, S>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies.extend(dependencies.into_iter().map(Into::into));
        self
    }

    pub fn add_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    /// Pin the job to the editor track, or leave the revision open for
    /// custom-revision editors.
    pub fn add_var_custom_revision(self, track: &Track) -> Self {
        let value = if track.is_custom_revision() {
            CUSTOM_REVISION_NOT_SET.to_string()
        } else {
            track.to_string()
        };
        self.add_var(CUSTOM_REVISION_VAR, value)
    }

    pub fn add_commands<I, S>(mut self, commands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.commands.extend(commands.into_iter().map(Into::into));
        self
    }

    pub fn build(self) -> JobDescription {
        JobDescription {
            name: self.name,
            agent: self.agent,
            variables: self.variables,
            dependencies: self.dependencies,
            trigger_expression: self.trigger_expression,
            commands: self.commands,
        }
    }
}

/// Trigger block of a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Triggers {
    pub expression: String,
}

/// Serializable job, keyed the way the CI system reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobYml {
    pub name: String,
    pub agent: Agent,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub variables: IndexMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub triggers: Option<Triggers>,
    pub commands: Vec<String>,
}

impl JobYml {
    pub fn to_yaml_string(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}

#[cfg(test)]
#[path = "yml_job_tests.rs"]
mod tests;
