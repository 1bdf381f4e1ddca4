pub mod comparison_builder;
