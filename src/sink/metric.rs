//! Named numeric samples and the namespace they live under.

use std::fmt;

/// One `name value timestamp` sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metric {
    pub name: String,
    pub value: i64,
    /// Unix seconds.
    pub timestamp: i64,
}

impl Metric {
    pub fn new(name: String, value: i64, timestamp: i64) -> Self {
        Self {
            name,
            value,
            timestamp,
        }
    }
}

/// Carbon plaintext line, without the trailing newline.
impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.name, self.value, self.timestamp)
    }
}

/// Builds `<namespace>.<suffix>` names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricNamer {
    namespace: String,
}

impl MetricNamer {
    /// Leading and trailing `.` separators are trimmed from `namespace`.
    pub fn new(namespace: &str) -> Self {
        Self {
            namespace: namespace.trim_matches('.').to_string(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn name(&self, suffix: &str) -> String {
        format!("{}.{}", self.namespace, suffix)
    }
}
