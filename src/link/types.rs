use std::fmt;

use serde::{Deserialize, Serialize};

use crate::affordance::types::Affordance;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkRelation(String);

impl LinkRelation {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn self_rel() -> Self {
        Self::new("self")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LinkRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LinkRelation {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for LinkRelation {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Reference to a resource. Links are values: every `and_*`/`with_*` call returns a
/// new link and leaves the receiver as it was.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    href: String,
    rel: LinkRelation,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    affordances: Vec<Affordance>,
}

impl Link {
    pub fn new(href: impl Into<String>, rel: impl Into<LinkRelation>) -> Self {
        Self {
            href: href.into(),
            rel: rel.into(),
            affordances: Vec::new(),
        }
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn rel(&self) -> &LinkRelation {
        &self.rel
    }

    pub fn affordances(&self) -> &[Affordance] {
        &self.affordances
    }

    pub fn with_rel(&self, rel: impl Into<LinkRelation>) -> Link {
        Link {
            rel: rel.into(),
            ..self.clone()
        }
    }

    pub fn and_affordance(&self, affordance: Affordance) -> Link {
        self.and_affordances([affordance])
    }

    /// Appends `affordances` after the ones this link already carries.
    pub fn and_affordances(&self, affordances: impl IntoIterator<Item = Affordance>) -> Link {
        let mut combined = self.affordances.clone();
        combined.extend(affordances);
        Link {
            href: self.href.clone(),
            rel: self.rel.clone(),
            affordances: combined,
        }
    }
}
