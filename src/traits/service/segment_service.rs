use crate::common::*;

use crate::model::segment_aggregate::*;

pub trait SegmentService {
    fn aggregate_segments(&self, stats: &Value) -> SegmentAggregate;
    fn run_segment_analysis(&self, input_path: &Path) -> Result<(), anyhow::Error>;
}
