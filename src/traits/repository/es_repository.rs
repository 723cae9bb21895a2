use crate::common::*;

use crate::model::force_merge_option::*;

#[async_trait]
pub trait EsRepository {
    async fn ping(&self) -> Result<(), anyhow::Error>;
    async fn get_all_indices_stats(&self) -> Result<Value, anyhow::Error>;
    async fn get_node_jvm_stats(&self) -> Result<Value, anyhow::Error>;
    async fn get_indices_store_stats(
        &self,
        index_pattern: Option<&str>,
    ) -> Result<Value, anyhow::Error>;
    async fn force_merge(&self, option: &ForceMergeOption) -> Result<Value, anyhow::Error>;
}
