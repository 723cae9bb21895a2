use crate::common::*;

use crate::utils_modules::json_utils::*;

use crate::model::heap_stat::*;
use crate::model::index_stat::*;
use crate::model::metrics_snapshot::*;

use crate::traits::repository::es_repository::*;
use crate::traits::service::metric_service::*;

#[derive(Clone, Debug, new)]
pub struct MetricServiceImpl<R: EsRepository> {
    elastic_obj: Arc<R>,
}

impl<R: EsRepository> MetricServiceImpl<R> {
    #[doc = "노드별 JVM 응답에서 heap 지표만 추려주는 함수 - 누락 필드는 0 으로 처리"]
    /// # Arguments
    /// * `nodes_stats` - GET /_nodes/stats/jvm 응답
    ///
    /// # Returns
    /// * HashMap<String, HeapStat> - 노드 이름 기준 맵 (이름이 없으면 노드 id 사용)
    fn parse_heap_stats(nodes_stats: &Value) -> HashMap<String, HeapStat> {
        let mut heap_stats: HashMap<String, HeapStat> = HashMap::new();

        let nodes = match nodes_stats.get("nodes").and_then(Value::as_object) {
            Some(nodes) => nodes,
            None => return heap_stats,
        };

        for (node_id, node_data) in nodes {
            let node_name: String = node_data
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or(node_id.as_str())
                .to_string();

            let heap_stat: HeapStat = HeapStat::new(
                get_i64_or_default(node_data, "jvm.mem.heap_used_in_bytes"),
                get_i64_or_default(node_data, "jvm.mem.heap_used_percent"),
                get_i64_or_default(node_data, "jvm.mem.heap_max_in_bytes"),
            );

            heap_stats.insert(node_name, heap_stat);
        }

        heap_stats
    }

    #[doc = "인덱스 통계 응답에서 저장용량/세그먼트 지표만 추려주는 함수 - 누락 필드는 기본값 처리"]
    /// # Arguments
    /// * `indices_stats` - GET /_stats/store,segments 응답
    ///
    /// # Returns
    /// * HashMap<String, IndexStat>
    fn parse_index_stats(indices_stats: &Value) -> HashMap<String, IndexStat> {
        let mut index_stats: HashMap<String, IndexStat> = HashMap::new();

        let indices = match indices_stats.get("indices").and_then(Value::as_object) {
            Some(indices) => indices,
            None => return index_stats,
        };

        for (index_name, index_data) in indices {
            let size_bytes: i64 = get_i64_or_default(index_data, "total.store.size_in_bytes");

            /* Some cluster versions omit the pretty format. */
            let size_pretty_raw: String = get_str_or_default(index_data, "total.store.size");
            let size_pretty: String = if size_pretty_raw.is_empty() {
                format!("{} bytes", size_bytes)
            } else {
                size_pretty_raw
            };

            let segment_count: i64 = get_i64_or_default(index_data, "total.segments.count");

            index_stats.insert(
                index_name.clone(),
                IndexStat::new(size_bytes, size_pretty, segment_count),
            );
        }

        index_stats
    }
}

#[async_trait]
impl<R: EsRepository + Sync + Send> MetricService for MetricServiceImpl<R> {
    #[doc = "Function that captures the current JVM heap usage per node."]
    async fn get_heap_stats(&self) -> Result<HashMap<String, HeapStat>, anyhow::Error> {
        let nodes_stats: Value = self.elastic_obj.get_node_jvm_stats().await?;
        Ok(Self::parse_heap_stats(&nodes_stats))
    }

    #[doc = "Function that captures size and segment count per index."]
    /// # Arguments
    /// * `index_pattern` - 조회 대상 인덱스 패턴. None 이면 전체 인덱스.
    async fn get_indices_stats(
        &self,
        index_pattern: Option<&str>,
    ) -> Result<HashMap<String, IndexStat>, anyhow::Error> {
        let indices_stats: Value = self
            .elastic_obj
            .get_indices_store_stats(index_pattern)
            .await?;

        Ok(Self::parse_index_stats(&indices_stats))
    }

    #[doc = "Function that captures heap and index metrics as one immutable snapshot."]
    async fn capture_snapshot(
        &self,
        index_pattern: Option<&str>,
    ) -> Result<MetricsSnapshot, anyhow::Error> {
        let heap_stats: HashMap<String, HeapStat> = self.get_heap_stats().await?;
        let indices_stats: HashMap<String, IndexStat> =
            self.get_indices_stats(index_pattern).await?;

        Ok(MetricsSnapshot::new(heap_stats, indices_stats))
    }
}
