use crate::common::*;

use crate::model::force_merge_option::*;
use crate::model::force_merge_outcome::*;
use crate::model::heap_stat::*;
use crate::model::index_stat::*;

#[doc = "노드 단위 heap 사용량 before/after 비교"]
#[derive(Debug, Clone, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct HeapComparison {
    pub before: HeapStat,
    pub after: HeapStat,
    pub diff_bytes: i64,
    pub diff_percent: i64,
}

#[doc = "인덱스 단위 저장용량/세그먼트 before/after 비교"]
#[derive(Debug, Clone, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct IndexComparison {
    pub before: IndexStat,
    pub after: IndexStat,
    pub size_diff_bytes: i64,
    pub size_diff_percent: f64,
    pub segment_diff: i64,
    pub segment_diff_percent: f64,
}

#[doc = "Metadata of the merge call the comparison belongs to."]
#[derive(Debug, Clone, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct MergeOperationInfo {
    #[serde(rename = "type")]
    pub operation_type: String,
    pub max_num_segments: Option<i64>,
    pub only_expunge_deletes: bool,
    pub index_pattern: Option<String>,
    pub elapsed_time_seconds: f64,
    pub completed: bool,
    pub error: Option<String>,
}

impl MergeOperationInfo {
    #[doc = "Function that builds the operation metadata from the request option and its outcome."]
    pub fn from_option_and_outcome(
        option: &ForceMergeOption,
        outcome: &ForceMergeOutcome,
    ) -> Self {
        MergeOperationInfo::new(
            "force_merge".to_string(),
            *option.max_num_segments(),
            *option.only_expunge_deletes(),
            option.index_pattern().clone(),
            *outcome.elapsed_seconds(),
            *outcome.completed(),
            outcome.error().clone(),
        )
    }
}

#[doc = "forcemerge_comparison_<timestamp>.json 파일 형식"]
#[derive(Debug, Clone, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct ComparisonReport {
    pub timestamp: String,
    pub operation: MergeOperationInfo,
    pub heap_comparison: HashMap<String, HeapComparison>,
    pub indices_comparison: HashMap<String, IndexComparison>,
}
