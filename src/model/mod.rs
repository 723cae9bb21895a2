pub mod cli_args;
pub mod comparison_report;
pub mod elastic_config;
pub mod force_merge_option;
pub mod force_merge_outcome;
pub mod heap_stat;
pub mod index_segment_row;
pub mod index_stat;
pub mod metrics_snapshot;
pub mod prefix_segment_row;
pub mod segment_aggregate;
pub mod snapshot_report;
