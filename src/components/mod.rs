pub mod sunburst;
