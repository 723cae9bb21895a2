use crate::common::*;

use crate::utils_modules::calculate_utils::*;
use crate::utils_modules::io_utils::*;
use crate::utils_modules::time_utils::*;

use crate::model::comparison_report::*;
use crate::model::force_merge_option::*;
use crate::model::force_merge_outcome::*;
use crate::model::metrics_snapshot::*;
use crate::model::snapshot_report::*;

use crate::traits::repository::es_repository::*;
use crate::traits::service::merge_service::*;
use crate::traits::service::metric_service::*;

#[derive(Clone, Debug, new)]
pub struct MergeServiceImpl<R: EsRepository, M: MetricService> {
    elastic_obj: Arc<R>,
    metric_service: Arc<M>,
    output_dir: PathBuf,
}

impl<R, M> MergeServiceImpl<R, M>
where
    R: EsRepository + Sync + Send,
    M: MetricService + Sync + Send,
{
    #[doc = "before/after 스냅샷을 키(노드/인덱스) 기준으로 조인해서 비교 리포트를 만들어주는 함수"]
    /// Keys present on only one side are omitted. Percent deltas are 0 when
    /// the baseline value is 0.
    ///
    /// # Arguments
    /// * `timestamp` - 이번 실행의 타임스탬프
    /// * `option`    - 병합 요청 옵션
    /// * `outcome`   - 병합 호출 결과
    /// * `before`    - 병합 전 스냅샷
    /// * `after`     - 병합 후 스냅샷
    ///
    /// # Returns
    /// * ComparisonReport
    fn build_comparison(
        timestamp: &str,
        option: &ForceMergeOption,
        outcome: &ForceMergeOutcome,
        before: &MetricsSnapshot,
        after: &MetricsSnapshot,
    ) -> ComparisonReport {
        let mut heap_comparison: HashMap<String, HeapComparison> = HashMap::new();

        for (node_name, before_heap) in before.heap_stats() {
            if let Some(after_heap) = after.heap_stats().get(node_name) {
                let diff_bytes: i64 = after_heap.heap_used_bytes - before_heap.heap_used_bytes;
                let diff_percent: i64 =
                    after_heap.heap_used_percent - before_heap.heap_used_percent;

                heap_comparison.insert(
                    node_name.clone(),
                    HeapComparison::new(
                        before_heap.clone(),
                        after_heap.clone(),
                        diff_bytes,
                        diff_percent,
                    ),
                );
            }
        }

        let mut indices_comparison: HashMap<String, IndexComparison> = HashMap::new();

        for (index_name, before_stat) in before.indices_stats() {
            if let Some(after_stat) = after.indices_stats().get(index_name) {
                let size_diff_bytes: i64 = after_stat.size_bytes - before_stat.size_bytes;
                let segment_diff: i64 = after_stat.segment_count - before_stat.segment_count;

                indices_comparison.insert(
                    index_name.clone(),
                    IndexComparison::new(
                        before_stat.clone(),
                        after_stat.clone(),
                        size_diff_bytes,
                        get_diff_percentage(size_diff_bytes, before_stat.size_bytes),
                        segment_diff,
                        get_diff_percentage(segment_diff, before_stat.segment_count),
                    ),
                );
            }
        }

        ComparisonReport::new(
            timestamp.to_string(),
            MergeOperationInfo::from_option_and_outcome(option, outcome),
            heap_comparison,
            indices_comparison,
        )
    }

    #[doc = "비교 리포트 요약을 로그로 출력해주는 함수"]
    fn log_summary(report: &ComparisonReport) {
        let operation: &MergeOperationInfo = report.operation();

        info!("Operation Summary:");

        if *operation.completed() {
            info!(
                "  - Operation completed successfully in {:.2} seconds",
                operation.elapsed_time_seconds()
            );
        } else {
            info!(
                "  - Operation timed out or failed after {:.2} seconds",
                operation.elapsed_time_seconds()
            );
            info!(
                "  - Error: {}",
                operation.error().as_deref().unwrap_or("unknown")
            );
            info!("  - Post-operation metrics were still collected");
        }

        info!("  - Affected indices: {}", report.indices_comparison().len());

        let total_size_before: i64 = report
            .indices_comparison()
            .values()
            .map(|cmp| cmp.before().size_bytes())
            .sum();
        let total_size_after: i64 = report
            .indices_comparison()
            .values()
            .map(|cmp| cmp.after().size_bytes())
            .sum();
        let total_size_diff: i64 = total_size_after - total_size_before;

        let total_segments_before: i64 = report
            .indices_comparison()
            .values()
            .map(|cmp| cmp.before().segment_count())
            .sum();
        let total_segments_after: i64 = report
            .indices_comparison()
            .values()
            .map(|cmp| cmp.after().segment_count())
            .sum();
        let total_segments_diff: i64 = total_segments_after - total_segments_before;

        info!("  - Total size before: {} bytes", total_size_before);
        info!("  - Total size after: {} bytes", total_size_after);
        info!(
            "  - Size difference: {} bytes ({:.2}%)",
            total_size_diff,
            get_diff_percentage(total_size_diff, total_size_before)
        );
        info!("  - Total segments before: {}", total_segments_before);
        info!("  - Total segments after: {}", total_segments_after);
        info!(
            "  - Segment difference: {} ({:.2}%)",
            total_segments_diff,
            get_diff_percentage(total_segments_diff, total_segments_before)
        );
    }
}

#[async_trait]
impl<R, M> MergeService for MergeServiceImpl<R, M>
where
    R: EsRepository + Sync + Send,
    M: MetricService + Sync + Send,
{
    #[doc = "Force merge orchestration. Only the initial connection check is
fatal; a failed merge call is recorded into the outcome and the run still
collects and persists the after-metrics and the comparison report."]
    /// # Arguments
    /// * `option` - 병합 옵션 {max_num_segments, only_expunge_deletes, index_pattern}
    ///
    /// # Returns
    /// * Result<ComparisonReport, anyhow::Error>
    async fn run_force_merge(
        &self,
        option: &ForceMergeOption,
    ) -> Result<ComparisonReport, anyhow::Error> {
        self.elastic_obj
            .ping()
            .await
            .map_err(|e| anyhow!("[MergeServiceImpl->run_force_merge] {:?}", e))?;

        info!("Successfully connected to Elasticsearch");

        let timestamp: String = convert_date_to_str_file_stamp(Local::now(), Local);
        let index_pattern: Option<&str> = option.index_pattern().as_deref();

        info!("Recording metrics before force merge...");
        let before: MetricsSnapshot = self.metric_service.capture_snapshot(index_pattern).await?;

        let before_report: BeforeMergeReport = BeforeMergeReport::new(
            timestamp.clone(),
            "before_merge".to_string(),
            before.clone(),
        );
        save_json_to_file(
            &before_report,
            &self
                .output_dir
                .join(format!("metrics_before_merge_{}.json", timestamp)),
        )?;

        info!("Starting {}", option.describe());

        /* The timer starts immediately before the call so both arms below can read it. */
        let timer: Instant = Instant::now();

        let outcome: ForceMergeOutcome = match self.elastic_obj.force_merge(option).await {
            Ok(_) => {
                let elapsed_seconds: f64 = timer.elapsed().as_secs_f64();
                info!(
                    "Force merge operation completed in {:.2} seconds",
                    elapsed_seconds
                );
                ForceMergeOutcome::new(true, None, elapsed_seconds)
            }
            Err(e) => {
                let elapsed_seconds: f64 = timer.elapsed().as_secs_f64();
                warn!(
                    "Force merge operation timed out or failed after {:.2} seconds with error: {:?}",
                    elapsed_seconds, e
                );
                info!("Proceeding with post-merge metrics collection anyway...");
                ForceMergeOutcome::new(false, Some(e.to_string()), elapsed_seconds)
            }
        };

        info!("Recording metrics after force merge attempt...");
        let after: MetricsSnapshot = self.metric_service.capture_snapshot(index_pattern).await?;

        let after_report: AfterMergeReport = AfterMergeReport::new(
            timestamp.clone(),
            "after_merge".to_string(),
            *outcome.completed(),
            outcome.error().clone(),
            after.clone(),
            *outcome.elapsed_seconds(),
        );
        save_json_to_file(
            &after_report,
            &self
                .output_dir
                .join(format!("metrics_after_merge_{}.json", timestamp)),
        )?;

        let report: ComparisonReport =
            Self::build_comparison(&timestamp, option, &outcome, &before, &after);
        save_json_to_file(
            &report,
            &self
                .output_dir
                .join(format!("forcemerge_comparison_{}.json", timestamp)),
        )?;

        Self::log_summary(&report);

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::metric_service::MetricServiceImpl;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug)]
    struct MockEsRepository {
        fail_merge: bool,
        stats_calls: AtomicUsize,
    }

    impl MockEsRepository {
        fn new(fail_merge: bool) -> Self {
            MockEsRepository {
                fail_merge,
                stats_calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl EsRepository for MockEsRepository {
        async fn ping(&self) -> Result<(), anyhow::Error> {
            Ok(())
        }

        async fn get_all_indices_stats(&self) -> Result<Value, anyhow::Error> {
            Ok(json!({"indices": {}}))
        }

        async fn get_node_jvm_stats(&self) -> Result<Value, anyhow::Error> {
            Ok(json!({
                "nodes": {
                    "n1": {
                        "name": "node-1",
                        "jvm": { "mem": {
                            "heap_used_in_bytes": 100,
                            "heap_used_percent": 10,
                            "heap_max_in_bytes": 1000
                        }}
                    }
                }
            }))
        }

        /* first call answers the before snapshot, later calls the after snapshot */
        async fn get_indices_store_stats(
            &self,
            _index_pattern: Option<&str>,
        ) -> Result<Value, anyhow::Error> {
            let call: usize = self.stats_calls.fetch_add(1, Ordering::SeqCst);

            if call == 0 {
                Ok(json!({
                    "indices": {
                        "app-data": { "total": {
                            "store": { "size_in_bytes": 1000, "size": "1000b" },
                            "segments": { "count": 5 }
                        }}
                    }
                }))
            } else {
                Ok(json!({
                    "indices": {
                        "app-data": { "total": {
                            "store": { "size_in_bytes": 800, "size": "800b" },
                            "segments": { "count": 2 }
                        }}
                    }
                }))
            }
        }

        async fn force_merge(&self, _option: &ForceMergeOption) -> Result<Value, anyhow::Error> {
            if self.fail_merge {
                Err(anyhow!("merge timed out"))
            } else {
                Ok(json!({"_shards": {"successful": 1, "failed": 0}}))
            }
        }
    }

    fn build_service(
        fail_merge: bool,
        output_dir: PathBuf,
    ) -> MergeServiceImpl<MockEsRepository, MetricServiceImpl<MockEsRepository>> {
        let repo: Arc<MockEsRepository> = Arc::new(MockEsRepository::new(fail_merge));
        let metric_service: Arc<MetricServiceImpl<MockEsRepository>> =
            Arc::new(MetricServiceImpl::new(Arc::clone(&repo)));

        MergeServiceImpl::new(repo, metric_service, output_dir)
    }

    fn find_file_with_prefix(dir: &Path, prefix: &str) -> Option<PathBuf> {
        std::fs::read_dir(dir)
            .unwrap()
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .find(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .map(|name| name.starts_with(prefix))
                    .unwrap_or(false)
            })
    }

    #[tokio::test]
    async fn successful_merge_produces_three_reports_with_deltas() {
        let temp_dir: tempfile::TempDir = tempfile::tempdir().unwrap();
        let service = build_service(false, temp_dir.path().to_path_buf());
        let option: ForceMergeOption = ForceMergeOption::new(Some(1), false, None);

        let report: ComparisonReport = service.run_force_merge(&option).await.unwrap();

        assert!(*report.operation().completed());
        assert!(report.operation().error().is_none());

        let index_cmp: &IndexComparison = report.indices_comparison().get("app-data").unwrap();
        assert_eq!(*index_cmp.size_diff_bytes(), -200);
        assert_eq!(*index_cmp.size_diff_percent(), -20.0);
        assert_eq!(*index_cmp.segment_diff(), -3);
        assert_eq!(*index_cmp.segment_diff_percent(), -60.0);

        let heap_cmp: &HeapComparison = report.heap_comparison().get("node-1").unwrap();
        assert_eq!(*heap_cmp.diff_bytes(), 0);

        for prefix in [
            "metrics_before_merge_",
            "metrics_after_merge_",
            "forcemerge_comparison_",
        ] {
            assert!(
                find_file_with_prefix(temp_dir.path(), prefix).is_some(),
                "missing report file for prefix {}",
                prefix
            );
        }
    }

    #[tokio::test]
    async fn failed_merge_still_captures_after_metrics_and_comparison() {
        let temp_dir: tempfile::TempDir = tempfile::tempdir().unwrap();
        let service = build_service(true, temp_dir.path().to_path_buf());
        let option: ForceMergeOption = ForceMergeOption::new(None, false, None);

        let report: ComparisonReport = service.run_force_merge(&option).await.unwrap();

        assert!(!*report.operation().completed());
        assert!(report
            .operation()
            .error()
            .as_deref()
            .unwrap()
            .contains("merge timed out"));

        /* comparison is still built from the collected after-metrics */
        assert_eq!(report.indices_comparison().len(), 1);

        let after_path: PathBuf =
            find_file_with_prefix(temp_dir.path(), "metrics_after_merge_").unwrap();
        let after_doc: Value =
            serde_json::from_str(&std::fs::read_to_string(after_path).unwrap()).unwrap();

        assert_eq!(after_doc["force_merge_completed"], json!(false));
        assert!(after_doc["force_merge_error"]
            .as_str()
            .unwrap()
            .contains("merge timed out"));
        assert!(after_doc["indices_stats"]["app-data"].is_object());
    }

    #[tokio::test]
    async fn zero_baseline_index_reports_zero_percent_delta() {
        /* direct comparison build, empty before values */
        let before: MetricsSnapshot = MetricsSnapshot::new(
            HashMap::new(),
            HashMap::from([(
                "fresh-index".to_string(),
                crate::model::index_stat::IndexStat::new(0, "0 bytes".to_string(), 0),
            )]),
        );
        let after: MetricsSnapshot = MetricsSnapshot::new(
            HashMap::new(),
            HashMap::from([(
                "fresh-index".to_string(),
                crate::model::index_stat::IndexStat::new(500, "500b".to_string(), 3),
            )]),
        );

        let option: ForceMergeOption = ForceMergeOption::new(None, false, None);
        let outcome: ForceMergeOutcome = ForceMergeOutcome::new(true, None, 0.1);

        let report: ComparisonReport =
            MergeServiceImpl::<MockEsRepository, MetricServiceImpl<MockEsRepository>>::build_comparison(
                "20261105_093011",
                &option,
                &outcome,
                &before,
                &after,
            );

        let index_cmp: &IndexComparison = report.indices_comparison().get("fresh-index").unwrap();
        assert_eq!(*index_cmp.size_diff_bytes(), 500);
        assert_eq!(*index_cmp.size_diff_percent(), 0.0);
        assert_eq!(*index_cmp.segment_diff_percent(), 0.0);
    }
}
