use crate::common::*;

#[doc = "index_segments_grouped_sorted.csv 의 한 행"]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct PrefixSegmentRow {
    #[serde(rename = "Index Prefix")]
    pub index_prefix: String,
    #[serde(rename = "Total Segment Count")]
    pub total_segment_count: i64,
    #[serde(rename = "Index Count")]
    pub index_count: i64,
}
