//! Builds a [`ComparisonReport`] from two analyses. Pure: no I/O, output depends only on
//! the inputs and the [`ReportStyle`].

use crate::types::analysis::ClimateAnalysis;
use crate::types::comparison::{ComparisonDeltas, ComparisonReport};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};

/// Presentation choices for the generated text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportStyle {
    /// Whether to produce [`ComparisonReport::share_message`].
    #[serde(default = "default_share_message")]
    pub share_message: bool,
    /// Opening line of the share message.
    #[serde(default = "default_headline")]
    pub headline: String,
    #[serde(default = "default_hashtags")]
    pub hashtags: Vec<String>,
    /// Attribution appended to the share message.
    #[serde(default = "default_source_label")]
    pub source_label: String,
}

const fn default_share_message() -> bool {
    true
}

fn default_headline() -> String {
    "Climate data shows Kenya is warming!".to_string()
}

fn default_hashtags() -> Vec<String> {
    vec!["#ClimateActionKE".to_string(), "#Clime360".to_string()]
}

fn default_source_label() -> String {
    "NASA POWER Data".to_string()
}

impl Default for ReportStyle {
    fn default() -> Self {
        Self {
            share_message: default_share_message(),
            headline: default_headline(),
            hashtags: default_hashtags(),
            source_label: default_source_label(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ComparisonBuilder {
    style: ReportStyle,
}

impl ComparisonBuilder {
    pub fn new(style: ReportStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &ReportStyle {
        &self.style
    }

    /// Compares two optional analyses; `None` if either side is missing.
    pub fn compare(
        &self,
        first: Option<&ClimateAnalysis>,
        second: Option<&ClimateAnalysis>,
    ) -> Option<ComparisonReport> {
        Some(self.build(first?, second?))
    }

    pub fn build(&self, first: &ClimateAnalysis, second: &ClimateAnalysis) -> ComparisonReport {
        let deltas = ComparisonDeltas::between(first, second);
        let narrative = narrative(first, second, &deltas);
        let share_message = self
            .style
            .share_message
            .then(|| share_message(&self.style, first));

        ComparisonReport {
            first: first.clone(),
            second: second.clone(),
            deltas,
            narrative,
            share_message,
        }
    }
}

/// Compares two optional analyses with the default [`ReportStyle`].
pub fn compare(
    first: Option<&ClimateAnalysis>,
    second: Option<&ClimateAnalysis>,
) -> Option<ComparisonReport> {
    ComparisonBuilder::default().compare(first, second)
}

fn narrative(first: &ClimateAnalysis, second: &ClimateAnalysis, deltas: &ComparisonDeltas) -> String {
    Narrative {
        first,
        second,
        deltas,
    }
    .to_string()
}

fn share_message(style: &ReportStyle, analysis: &ClimateAnalysis) -> String {
    ShareMessage { style, analysis }.to_string()
}

struct Narrative<'a> {
    first: &'a ClimateAnalysis,
    second: &'a ClimateAnalysis,
    deltas: &'a ComparisonDeltas,
}

impl Display for Narrative<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let (first, second, deltas) = (self.first, self.second, self.deltas);
        let (a, b) = (first.region.as_str(), second.region.as_str());

        writeln!(f, "### Climate Change Insights ({a} vs {b})")?;
        writeln!(f)?;
        writeln!(f, "**Temperature Trends:**")?;
        for analysis in [first, second] {
            writeln!(
                f,
                "- {}: {:+.2}°C per decade (risk: {})",
                analysis.region, analysis.temperature_trend_per_decade, analysis.risk_level
            )?;
        }
        writeln!(f)?;
        writeln!(f, "**Rainfall Patterns:**")?;
        for analysis in [first, second] {
            writeln!(
                f,
                "- {}: {:+.1}mm per decade (average {:.1}mm per month)",
                analysis.region, analysis.rainfall_trend_per_decade, analysis.mean_rainfall_mm
            )?;
        }

        if let (Some(pa), Some(pb)) = (first.period_change, second.period_change) {
            writeln!(f)?;
            writeln!(
                f,
                "**Period Change (up to {} vs from {}):**",
                pa.early_end, pa.recent_start
            )?;
            for (region, change) in [(a, pa), (b, pb)] {
                writeln!(
                    f,
                    "- {}: {:+.2}°C, {:+.1}mm monthly",
                    region,
                    change.temperature_change(),
                    change.rainfall_change()
                )?;
            }
        }

        writeln!(f)?;
        writeln!(f, "**Key Observations:**")?;
        writeln!(
            f,
            "- Hottest years: {a} ({}), {b} ({})",
            first.hottest_year, second.hottest_year
        )?;
        writeln!(
            f,
            "- Wettest years: {a} ({}), {b} ({})",
            first.wettest_year, second.wettest_year
        )?;
        writeln!(
            f,
            "- Temperature trend difference: {:+.2}°C per decade ({a} relative to {b})",
            deltas.temperature_trend_delta
        )?;
        writeln!(
            f,
            "- Rainfall trend difference: {:+.1}mm per decade ({a} relative to {b})",
            deltas.rainfall_trend_delta
        )?;

        writeln!(f)?;
        writeln!(f, "**Recommendations:**")?;
        for analysis in [first, second] {
            writeln!(f, "- {}: {}", analysis.region, analysis.recommendation)?;
        }
        Ok(())
    }
}

struct ShareMessage<'a> {
    style: &'a ReportStyle,
    analysis: &'a ClimateAnalysis,
}

impl Display for ShareMessage<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let (style, analysis) = (self.style, self.analysis);
        writeln!(f, "{}", style.headline)?;
        match (analysis.period_change, analysis.yearly.first()) {
            (Some(change), Some(first_year)) => writeln!(
                f,
                "{} has seen {:.2}°C temperature change since {}.",
                analysis.region,
                change.temperature_change().abs(),
                first_year.year
            )?,
            _ => writeln!(
                f,
                "{} is warming at {:+.2}°C per decade.",
                analysis.region, analysis.temperature_trend_per_decade
            )?,
        }
        write!(f, "We must act now for climate resilience.")?;
        for tag in &style.hashtags {
            write!(f, " {tag}")?;
        }
        writeln!(f)?;
        write!(f, "Source: {}", style.source_label)
    }
}
