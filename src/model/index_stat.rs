use crate::common::*;

#[doc = "인덱스 단위 스냅샷 - 저장 용량 및 세그먼트 수"]
#[derive(Debug, Clone, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct IndexStat {
    pub size_bytes: i64,
    pub size_pretty: String,
    pub segment_count: i64,
}
