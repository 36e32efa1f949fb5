use core::fmt;

use tracing::trace;

/// SharedLabel define the single mutable "current scope name" binding that
/// lives in the package scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedLabel(String);

impl SharedLabel {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn get(&self) -> &str {
        &self.0
    }

    /// Reassigns the binding in place. Previous value is dropped.
    pub fn set(&mut self, value: impl Into<String>) {
        let value = value.into();
        trace!(from = %self.0, to = %value, "label reassigned");
        self.0 = value;
    }
}

impl fmt::Display for SharedLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Site define the lexical region an observation is made from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Site {
    Main,
    Block,
    FuncScope,
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let str = match self {
            Site::Main => "Main start  ",
            Site::Block => "Block start ",
            Site::FuncScope => "funcScope start ",
        };
        f.write_str(str)
    }
}

/// Observation is the value a [Site] resolved the label to when it printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    pub site: Site,
    pub value: String,
}

impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.site, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observation_line_matches_site_prefix() {
        let obs = Observation {
            site: Site::Main,
            value: "main".to_owned(),
        };
        assert_eq!(obs.to_string(), "Main start  : main");

        let obs = Observation {
            site: Site::FuncScope,
            value: "block".to_owned(),
        };
        assert_eq!(obs.to_string(), "funcScope start : block");
    }

    #[test]
    fn label_set_replaces_value() {
        let mut label = SharedLabel::new("pkg");
        label.set("main");
        assert_eq!(label.get(), "main");
        assert_eq!(label.to_string(), "main");
    }
}
