use crate::common::*;

use crate::utils_modules::io_utils::*;

use crate::traits::repository::es_repository::*;
use crate::traits::service::stats_service::*;

#[derive(Clone, Debug, new)]
pub struct StatsServiceImpl<R: EsRepository> {
    elastic_obj: Arc<R>,
}

#[async_trait]
impl<R: EsRepository + Sync + Send> StatsService for StatsServiceImpl<R> {
    #[doc = "Function that pulls the full `_stats` document and writes it to disk as pretty json."]
    /// # Arguments
    /// * `output_path` - 저장할 파일 경로 (기존 파일은 덮어쓴다)
    ///
    /// # Returns
    /// * Result<(), anyhow::Error>
    async fn dump_cluster_stats(&self, output_path: &Path) -> Result<(), anyhow::Error> {
        self.elastic_obj
            .ping()
            .await
            .map_err(|e| anyhow!("[StatsServiceImpl->dump_cluster_stats] {:?}", e))?;

        info!("Successfully connected to Elasticsearch");

        let stats: Value = self.elastic_obj.get_all_indices_stats().await?;

        save_json_to_file(&stats, output_path)?;

        Ok(())
    }
}
