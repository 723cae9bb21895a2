/*
Author      : Seunghwan Shin
Create date : 2025-05-19
Description : Elasticsearch 인덱스의 세그먼트 통계를 수집/집계하고
              force merge 전후의 heap, 인덱스 지표를 비교해주는 도구

History     : 2025-05-19 Seunghwan Shin       # [v.1.0.0] first create
              2025-06-10 Seunghwan Shin       # [v.1.1.0] 인덱스 prefix 별 세그먼트 집계 추가
              2025-07-22 Seunghwan Shin       # [v.1.2.0]
                                                1) force merge 실패시에도 after 지표 수집하도록 변경
                                                2) 비교 리포트에 퍼센트 증감 추가
*/
mod common;
use common::*;

mod controller;
use controller::main_controller::*;

mod env_configuration;

mod model;
use model::cli_args::*;

mod repository;
use repository::es_repository::*;

mod service;
use service::{
    merge_service::*, metric_service::*, segment_service::*, stats_service::*,
};

mod traits;

mod utils_modules;
use utils_modules::logger_utils::*;

#[tokio::main]
async fn main() {
    /* config 설정 전역 적용 */
    dotenv().ok();

    /* 전역 로거설정 */
    set_global_logger();

    let args: CliArgs = CliArgs::parse();

    info!("Start Elastic Segment Tool");

    let es_client: EsRepositoryImpl = initialize_es_client().unwrap_or_else(|e| {
        error!(
            "[main()] Unable to create the 'Elasticsearch' connection.: {:?}",
            e
        );
        panic!(
            "[main()] Unable to create the 'Elasticsearch' connection.: {:?}",
            e
        )
    });

    let es_client: Arc<EsRepositoryImpl> = Arc::new(es_client);

    let stats_service: Arc<StatsServiceImpl<EsRepositoryImpl>> =
        Arc::new(StatsServiceImpl::new(Arc::clone(&es_client)));

    let segment_service: Arc<SegmentServiceImpl> =
        Arc::new(SegmentServiceImpl::new(PathBuf::from(".")));

    let metric_service: Arc<MetricServiceImpl<EsRepositoryImpl>> =
        Arc::new(MetricServiceImpl::new(Arc::clone(&es_client)));

    let merge_service: Arc<
        MergeServiceImpl<EsRepositoryImpl, MetricServiceImpl<EsRepositoryImpl>>,
    > = Arc::new(MergeServiceImpl::new(
        Arc::clone(&es_client),
        Arc::clone(&metric_service),
        PathBuf::from("."),
    ));

    let controller: MainController<
        StatsServiceImpl<EsRepositoryImpl>,
        SegmentServiceImpl,
        MergeServiceImpl<EsRepositoryImpl, MetricServiceImpl<EsRepositoryImpl>>,
    > = MainController::new(stats_service, segment_service, merge_service);

    if let Err(e) = controller.main_task(args.command).await {
        error!("[main] task error: {:?}", e);
    }
}
