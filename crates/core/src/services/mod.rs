pub mod aggregation;
pub mod enrichment;
pub mod market_data;
