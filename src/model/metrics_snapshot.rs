use crate::common::*;

use crate::model::heap_stat::*;
use crate::model::index_stat::*;

#[doc = "One point-in-time capture of heap and index metrics. Never updated in place."]
#[derive(Debug, Clone, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct MetricsSnapshot {
    pub heap_stats: HashMap<String, HeapStat>,
    pub indices_stats: HashMap<String, IndexStat>,
}
