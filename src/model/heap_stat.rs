use crate::common::*;

#[doc = "JVM heap 사용량 - 노드 단위 스냅샷"]
#[derive(Debug, Clone, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct HeapStat {
    pub heap_used_bytes: i64,
    pub heap_used_percent: i64,
    pub heap_max_bytes: i64,
}
