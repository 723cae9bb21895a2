use crate::common::*;

use crate::model::metrics_snapshot::*;

#[doc = "metrics_before_merge_<timestamp>.json 파일 형식"]
#[derive(Debug, Clone, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct BeforeMergeReport {
    pub timestamp: String,
    #[serde(rename = "type")]
    pub report_type: String,
    #[serde(flatten)]
    pub metrics: MetricsSnapshot,
}

#[doc = "metrics_after_merge_<timestamp>.json 파일 형식 - 병합 성공여부와 에러를 함께 기록"]
#[derive(Debug, Clone, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct AfterMergeReport {
    pub timestamp: String,
    #[serde(rename = "type")]
    pub report_type: String,
    pub force_merge_completed: bool,
    pub force_merge_error: Option<String>,
    #[serde(flatten)]
    pub metrics: MetricsSnapshot,
    pub elapsed_time_seconds: f64,
}
