use crate::common::*;

#[async_trait]
pub trait StatsService {
    async fn dump_cluster_stats(&self, output_path: &Path) -> Result<(), anyhow::Error>;
}
