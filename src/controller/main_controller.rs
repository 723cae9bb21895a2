use crate::common::*;

use crate::model::cli_args::*;
use crate::model::force_merge_option::*;

use crate::traits::service::{
    merge_service::*, segment_service::*, stats_service::*,
};

#[derive(Debug, new)]
pub struct MainController<S: StatsService, G: SegmentService, M: MergeService> {
    stats_service: Arc<S>,
    segment_service: Arc<G>,
    merge_service: Arc<M>,
}

impl<S, G, M> MainController<S, G, M>
where
    S: StatsService + Send + Sync + 'static,
    G: SegmentService + Send + Sync + 'static,
    M: MergeService + Send + Sync + 'static,
{
    #[doc = "Function that dispatches the parsed sub-command to the matching service."]
    /// # Arguments
    /// * `command` - CLI 에서 파싱된 서브커맨드
    ///
    /// # Returns
    /// * Result<(), anyhow::Error>
    pub async fn main_task(&self, command: Command) -> Result<(), anyhow::Error> {
        match command {
            Command::FetchStats { output } => {
                self.stats_service.dump_cluster_stats(&output).await
            }
            Command::AnalyzeSegments { input } => {
                self.segment_service.run_segment_analysis(&input)
            }
            Command::ForceMerge {
                max_segments,
                expunge_deletes,
                index_pattern,
            } => {
                let option: ForceMergeOption =
                    ForceMergeOption::new(max_segments, expunge_deletes, index_pattern);

                self.merge_service.run_force_merge(&option).await.map(|_| ())
            }
        }
    }
}
