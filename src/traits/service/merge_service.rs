use crate::common::*;

use crate::model::comparison_report::*;
use crate::model::force_merge_option::*;

#[async_trait]
pub trait MergeService {
    async fn run_force_merge(
        &self,
        option: &ForceMergeOption,
    ) -> Result<ComparisonReport, anyhow::Error>;
}
