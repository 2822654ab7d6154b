use std::fmt;
use std::str::FromStr;

/// what to do with an arc whose target isn't part of the graph
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum DanglingNeighborPolicy {
    /// skip the arc and log a warning
    #[default]
    Ignore,
    /// fail the whole computation
    Reject,
}

/// how the distance table is rendered
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ReportLayout {
    /// every (source, target) pair, correct for directed graphs
    #[default]
    Full,
    /// only targets with an index >= the source index.
    /// only meaningful if the graph is symmetric
    UpperTriangle,
}

impl FromStr for ReportLayout {

    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "full" => Ok(ReportLayout::Full),
            "upper" | "upper-triangle" => Ok(ReportLayout::UpperTriangle),
            _ => Err(format!("unknown report layout '{}', expected 'full' or 'upper'", value)),
        }
    }
}

impl fmt::Display for ReportLayout {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportLayout::Full => write!(f, "full"),
            ReportLayout::UpperTriangle => write!(f, "upper"),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct EngineConfig {
    pub dangling: DanglingNeighborPolicy,
    /// log the distance table at trace level after every relaxation pass
    pub trace_passes: bool,
}

impl EngineConfig {

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dangling(mut self, dangling: DanglingNeighborPolicy) -> Self {
        self.dangling = dangling;
        self
    }

    pub fn with_trace_passes(mut self, trace_passes: bool) -> Self {
        self.trace_passes = trace_passes;
        self
    }
}
