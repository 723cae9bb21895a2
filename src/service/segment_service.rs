use crate::common::*;

use crate::utils_modules::io_utils::*;
use crate::utils_modules::json_utils::*;

use crate::model::index_segment_row::*;
use crate::model::prefix_segment_row::*;
use crate::model::segment_aggregate::*;

use crate::traits::service::segment_service::*;

/* Rollover suffix. ex) logs-2024.10.30-000080 -> logs */
static DATE_SUFFIX_PATTERN: once_lazy<Regex> = once_lazy::new(|| {
    match Regex::new(r"-\d{4}\.\d{2}\.\d{2}-\d{6}$") {
        Ok(pattern) => pattern,
        Err(e) => {
            panic!("[DATE_SUFFIX_PATTERN] invalid regex: {:?}", e);
        }
    }
});

#[doc = "인덱스 이름에서 rollover 날짜/시퀀스 접미사를 제거해주는 함수"]
/// # Arguments
/// * `index_name` - 인덱스 이름
///
/// # Returns
/// * String - 접미사가 없으면 원본 이름 그대로 반환
pub fn extract_index_prefix(index_name: &str) -> String {
    DATE_SUFFIX_PATTERN.replace(index_name, "").to_string()
}

#[derive(Clone, Debug, new)]
pub struct SegmentServiceImpl {
    output_dir: PathBuf,
}

impl SegmentServiceImpl {
    #[doc = "Function that writes rows to a csv file. Headers come from the serde renames."]
    fn write_csv_rows<T: Serialize>(&self, rows: &[T], file_name: &str) -> Result<(), anyhow::Error> {
        let file_path: PathBuf = self.output_dir.join(file_name);

        let mut writer = csv::Writer::from_path(&file_path).map_err(|e| {
            anyhow!(
                "[SegmentServiceImpl->write_csv_rows] Failed to create '{}': {:?}",
                file_path.display(),
                e
            )
        })?;

        for row in rows {
            writer.serialize(row).map_err(|e| {
                anyhow!("[SegmentServiceImpl->write_csv_rows] Failed to serialize row: {:?}", e)
            })?;
        }

        writer
            .flush()
            .map_err(|e| anyhow!("[SegmentServiceImpl->write_csv_rows] {:?}", e))?;

        info!("Csv saved to {}", file_path.display());

        Ok(())
    }

    #[doc = "세그먼트 수 인덱스별 테이블 렌더링"]
    fn render_index_table(rows: &[IndexSegmentRow]) -> String {
        let name_width: usize = rows
            .iter()
            .map(|row| row.index_name().len())
            .chain(std::iter::once("Index Name".len()))
            .max()
            .unwrap_or(0);

        let mut table: String = format!("{:<name_width$}  {}", "Index Name", "Segment Count");

        for row in rows {
            table.push_str(&format!(
                "\n{:<name_width$}  {}",
                row.index_name(),
                row.segment_count()
            ));
        }

        table
    }

    #[doc = "세그먼트 수 prefix 별 테이블 렌더링"]
    fn render_prefix_table(rows: &[PrefixSegmentRow]) -> String {
        let prefix_width: usize = rows
            .iter()
            .map(|row| row.index_prefix().len())
            .chain(std::iter::once("Index Prefix".len()))
            .max()
            .unwrap_or(0);

        let mut table: String = format!(
            "{:<prefix_width$}  {}  {}",
            "Index Prefix", "Total Segment Count", "Index Count"
        );

        for row in rows {
            table.push_str(&format!(
                "\n{:<prefix_width$}  {:>19}  {:>11}",
                row.index_prefix(),
                row.total_segment_count(),
                row.index_count()
            ));
        }

        table
    }
}

impl SegmentService for SegmentServiceImpl {
    #[doc = "Function that aggregates segment counts per index and per index prefix."]
    /// # Arguments
    /// * `stats` - `stats.json` 형식의 원본 통계 문서 (top-level `indices` 맵)
    ///
    /// # Returns
    /// * SegmentAggregate - 인덱스별 행(이름순), prefix 별 행(합계 내림차순, 동률은 등장순), 총합
    fn aggregate_segments(&self, stats: &Value) -> SegmentAggregate {
        let mut index_rows: Vec<IndexSegmentRow> = Vec::new();
        let mut prefix_rows: Vec<PrefixSegmentRow> = Vec::new();
        let mut prefix_positions: HashMap<String, usize> = HashMap::new();
        let mut total_segment_count: i64 = 0;

        if let Some(indices) = stats.get("indices").and_then(Value::as_object) {
            for (index_name, index_data) in indices {
                let segment_count: i64 =
                    get_i64_or_default(index_data, "primaries.segments.count");

                index_rows.push(IndexSegmentRow::new(index_name.clone(), segment_count));
                total_segment_count += segment_count;

                let prefix: String = extract_index_prefix(index_name);

                match prefix_positions.get(&prefix) {
                    Some(&position) => {
                        let row: &mut PrefixSegmentRow = &mut prefix_rows[position];
                        row.total_segment_count += segment_count;
                        row.index_count += 1;
                    }
                    None => {
                        prefix_positions.insert(prefix.clone(), prefix_rows.len());
                        prefix_rows.push(PrefixSegmentRow::new(prefix, segment_count, 1));
                    }
                }
            }
        }

        index_rows.sort_by(|a, b| a.index_name().cmp(b.index_name()));

        /* sort_by is stable, so equal totals keep their encounter order */
        prefix_rows.sort_by(|a, b| b.total_segment_count().cmp(a.total_segment_count()));

        SegmentAggregate::new(index_rows, prefix_rows, total_segment_count)
    }

    #[doc = "Function that runs the whole analysis: read json, print tables, write csv files."]
    /// # Arguments
    /// * `input_path` - 원본 통계 json 파일 경로
    ///
    /// # Returns
    /// * Result<(), anyhow::Error>
    fn run_segment_analysis(&self, input_path: &Path) -> Result<(), anyhow::Error> {
        let stats: Value = read_json_from_file::<Value>(input_path)?;

        let aggregate: SegmentAggregate = self.aggregate_segments(&stats);

        println!("\n=== Segment Count by Index ===");
        println!("{}", Self::render_index_table(aggregate.index_rows()));

        println!("\nTotal Segment Count: {}", aggregate.total_segment_count());

        println!("\n=== Total Segment Count and Index Count by Prefix (Descending) ===");
        println!("{}", Self::render_prefix_table(aggregate.prefix_rows()));

        self.write_csv_rows(aggregate.index_rows(), "index_segments_sorted.csv")?;
        self.write_csv_rows(aggregate.prefix_rows(), "index_segments_grouped_sorted.csv")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_stats() -> Value {
        json!({
            "indices": {
                "logs-2024.10.30-000080": { "primaries": { "segments": { "count": 5 } } },
                "logs-2024.10.31-000081": { "primaries": { "segments": { "count": 7 } } },
                "metrics-2024.10.30-000001": { "primaries": { "segments": { "count": 2 } } },
                "app-data": { "primaries": { "segments": { "count": 3 } } }
            }
        })
    }

    #[test]
    fn prefix_extraction_strips_only_the_rollover_suffix() {
        assert_eq!(extract_index_prefix("logs-2024.10.30-000080"), "logs");
        assert_eq!(
            extract_index_prefix("metrics-2024.10.30-000001"),
            "metrics"
        );
        /* no suffix, name passes through unchanged */
        assert_eq!(extract_index_prefix("app-data"), "app-data");
        /* suffix must be anchored at the end of the string */
        assert_eq!(
            extract_index_prefix("logs-2024.10.30-000080-restored"),
            "logs-2024.10.30-000080-restored"
        );
        /* sequence token must be exactly six digits */
        assert_eq!(
            extract_index_prefix("logs-2024.10.30-00080"),
            "logs-2024.10.30-00080"
        );
    }

    #[test]
    fn aggregation_matches_the_documented_example() {
        let service: SegmentServiceImpl = SegmentServiceImpl::new(PathBuf::from("."));
        let aggregate: SegmentAggregate = service.aggregate_segments(&sample_stats());

        assert_eq!(*aggregate.total_segment_count(), 17);

        /* index rows sorted lexicographically */
        let names: Vec<&str> = aggregate
            .index_rows()
            .iter()
            .map(|row| row.index_name().as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "app-data",
                "logs-2024.10.30-000080",
                "logs-2024.10.31-000081",
                "metrics-2024.10.30-000001"
            ]
        );

        /* prefix rows sorted by total descending */
        let logs: &PrefixSegmentRow = &aggregate.prefix_rows()[0];
        assert_eq!(logs.index_prefix(), "logs");
        assert_eq!(*logs.total_segment_count(), 12);
        assert_eq!(*logs.index_count(), 2);

        /* per-prefix totals equal the sum of their member indices */
        let prefix_sum: i64 = aggregate
            .prefix_rows()
            .iter()
            .map(|row| row.total_segment_count())
            .sum();
        assert_eq!(prefix_sum, *aggregate.total_segment_count());
    }

    #[test]
    fn missing_segment_fields_default_to_zero() {
        let service: SegmentServiceImpl = SegmentServiceImpl::new(PathBuf::from("."));
        let stats: Value = json!({
            "indices": {
                "broken-index": { "primaries": {} }
            }
        });

        let aggregate: SegmentAggregate = service.aggregate_segments(&stats);

        assert_eq!(*aggregate.total_segment_count(), 0);
        assert_eq!(*aggregate.index_rows()[0].segment_count(), 0);
    }

    #[test]
    fn analysis_writes_both_csv_files_with_headers() {
        let temp_dir: tempfile::TempDir = tempfile::tempdir().unwrap();
        let input_path: PathBuf = temp_dir.path().join("stats.json");
        std::fs::write(&input_path, sample_stats().to_string()).unwrap();

        let service: SegmentServiceImpl =
            SegmentServiceImpl::new(temp_dir.path().to_path_buf());

        service.run_segment_analysis(&input_path).unwrap();

        let sorted_csv: String =
            std::fs::read_to_string(temp_dir.path().join("index_segments_sorted.csv")).unwrap();
        let mut sorted_lines = sorted_csv.lines();
        assert_eq!(sorted_lines.next(), Some("Index Name,Segment Count"));
        assert_eq!(sorted_lines.next(), Some("app-data,3"));

        let grouped_csv: String =
            std::fs::read_to_string(temp_dir.path().join("index_segments_grouped_sorted.csv"))
                .unwrap();
        let mut grouped_lines = grouped_csv.lines();
        assert_eq!(
            grouped_lines.next(),
            Some("Index Prefix,Total Segment Count,Index Count")
        );
        assert_eq!(grouped_lines.next(), Some("logs,12,2"));
    }
}
