use std::fmt;

const OBSERVATION: &str = "Observation";

/// A track lineage: the observation or a specific forecast model/run
///
/// Derived tracks built from a way (cones, rings) carry a suffixed way so
/// downstream display code can tell them apart from the source track.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Way(String);

impl Way {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The observation way
    pub fn observation() -> Self {
        Self(OBSERVATION.to_string())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    pub fn is_observation(&self) -> bool {
        self.0 == OBSERVATION
    }

    /// Derive a suffixed way, e.g. `"GFS".suffixed("CONE")` → `GFS_CONE`
    pub fn suffixed(&self, suffix: &str) -> Self {
        Self(format!("{}_{}", self.0, suffix))
    }
}

impl fmt::Display for Way {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
