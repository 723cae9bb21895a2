use crate::common::*;

#[doc = "index_segments_sorted.csv 의 한 행 - serde rename 이 csv 헤더가 된다."]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct IndexSegmentRow {
    #[serde(rename = "Index Name")]
    pub index_name: String,
    #[serde(rename = "Segment Count")]
    pub segment_count: i64,
}
