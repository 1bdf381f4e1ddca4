pub(crate) mod regression;
pub mod trend_analyzer;
