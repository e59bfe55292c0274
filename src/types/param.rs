use std::fmt;

/// Identifier of a radius-like forecast parameter
///
/// Track points map parameters to scalar attribute values, e.g. a 34-knot
/// wind radius in nautical miles or a track-error radius. The cone and ring
/// builders are generic over which parameter supplies the uncertainty
/// radius.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Param(String);

impl Param {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_by_name() {
        assert_eq!(Param::new("wind_radius_34kt"), Param::new("wind_radius_34kt"));
        assert_ne!(Param::new("wind_radius_34kt"), Param::new("track_error"));
    }
}
