use crate::common::*;

use crate::model::heap_stat::*;
use crate::model::index_stat::*;
use crate::model::metrics_snapshot::*;

#[async_trait]
pub trait MetricService {
    async fn get_heap_stats(&self) -> Result<HashMap<String, HeapStat>, anyhow::Error>;
    async fn get_indices_stats(
        &self,
        index_pattern: Option<&str>,
    ) -> Result<HashMap<String, IndexStat>, anyhow::Error>;
    async fn capture_snapshot(
        &self,
        index_pattern: Option<&str>,
    ) -> Result<MetricsSnapshot, anyhow::Error>;
}
