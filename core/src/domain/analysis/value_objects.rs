use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct AnalyzeVideoInput {
    pub video_url: String,
    pub pantry: Vec<String>,
}

/// Which of the two client flows to run. Both backend contracts observed
/// in the wild stay supported; neither is authoritative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnalysisStrategy {
    /// POST the URL to `/api/main` and partition the returned ingredient
    /// list against the pantry locally.
    Extraction,
    /// Try transcript keyword matching first, falling back to the
    /// `/analyze` passthrough when captions are unavailable.
    #[default]
    CaptionsFirst,
}

impl AnalysisStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisStrategy::Extraction => "extraction",
            AnalysisStrategy::CaptionsFirst => "captions-first",
        }
    }
}

impl fmt::Display for AnalysisStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalysisStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "extraction" => Ok(AnalysisStrategy::Extraction),
            "captions-first" => Ok(AnalysisStrategy::CaptionsFirst),
            other => Err(format!(
                "unknown strategy '{other}', expected 'extraction' or 'captions-first'"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_round_trips_through_str() {
        for strategy in [AnalysisStrategy::Extraction, AnalysisStrategy::CaptionsFirst] {
            assert_eq!(strategy.as_str().parse::<AnalysisStrategy>(), Ok(strategy));
        }
        assert!("magic".parse::<AnalysisStrategy>().is_err());
    }
}
