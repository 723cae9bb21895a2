use crate::common::*;

use crate::model::index_segment_row::*;
use crate::model::prefix_segment_row::*;

#[doc = "Aggregation result over one raw statistics document."]
#[derive(Debug, Clone, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct SegmentAggregate {
    /* sorted lexicographically by index name */
    pub index_rows: Vec<IndexSegmentRow>,
    /* sorted by total segment count descending, ties in encounter order */
    pub prefix_rows: Vec<PrefixSegmentRow>,
    pub total_segment_count: i64,
}
