pub mod merge_service;
pub mod metric_service;
pub mod segment_service;
pub mod stats_service;
