use crate::common::*;

use crate::model::elastic_config::*;
use crate::model::force_merge_option::*;

use crate::traits::repository::es_repository::*;

/*
    ***
    Force merge calls may run for a long time on large indices.
    The request timeout is stretched to 5 minutes so the transport
    does not give up before the cluster answers.
    ***
*/
const REQUEST_TIMEOUT_SECS: u64 = 300;

#[derive(Debug, Clone, Getters)]
#[getset(get = "pub")]
pub struct EsRepositoryImpl {
    pub es_client: Elasticsearch,
}

impl EsRepositoryImpl {
    #[doc = "Elasticsearch connection 생성자"]
    /// # Arguments
    /// * `config` - 접속 설정. cloud_id 가 있으면 url/port 보다 우선하며,
    ///              api_key 가 있으면 basic auth 보다 우선한다.
    ///
    /// # Returns
    /// * Result<Self, anyhow::Error>
    pub fn new(config: &ElasticConfig) -> Result<Self, anyhow::Error> {
        let credentials: Option<Credentials> = Self::build_credentials(config);

        let mut builder: TransportBuilder = match config.cloud_id() {
            Some(cloud_id) => {
                let conn_pool: CloudConnectionPool = CloudConnectionPool::new(cloud_id)
                    .map_err(|e| anyhow!("[EsRepositoryImpl::new][cloud_id] {:?}", e))?;
                TransportBuilder::new(conn_pool)
            }
            None => {
                let url: Url = Url::parse(&config.base_url())
                    .map_err(|e| anyhow!("[EsRepositoryImpl::new][base_url] {:?}", e))?;
                TransportBuilder::new(SingleNodeConnectionPool::new(url))
            }
        };

        builder = builder.timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS));

        if let Some(credentials) = credentials {
            builder = builder.auth(credentials);
        }

        let transport = builder
            .build()
            .map_err(|e| anyhow!("[EsRepositoryImpl::new] {:?}", e))?;

        Ok(EsRepositoryImpl {
            es_client: Elasticsearch::new(transport),
        })
    }

    #[doc = "Function that chooses the authentication method. API key wins over basic auth."]
    fn build_credentials(config: &ElasticConfig) -> Option<Credentials> {
        if let Some(api_key) = config.api_key() {
            return Some(Credentials::EncodedApiKey(api_key.to_string()));
        }

        match (config.username(), config.password()) {
            (Some(id), Some(pw)) => Some(Credentials::Basic(id.to_string(), pw.to_string())),
            _ => None,
        }
    }

    #[doc = "Function that converts a response into json, turning non-success status codes into errors."]
    async fn response_to_json(response: Response, caller: &str) -> Result<Value, anyhow::Error> {
        if response.status_code().is_success() {
            let resp: Value = response.json().await?;
            Ok(resp)
        } else {
            let error_message: String = format!(
                "[EsRepositoryImpl->{}] Failed to GET document: Status Code: {}",
                caller,
                response.status_code()
            );
            Err(anyhow!(error_message))
        }
    }
}

#[async_trait]
impl EsRepository for EsRepositoryImpl {
    #[doc = "Elasticsearch 클러스터가 응답하는지 확인해주는 함수."]
    async fn ping(&self) -> Result<(), anyhow::Error> {
        let response: Response = self
            .es_client
            .ping()
            .send()
            .await
            .map_err(|e| anyhow!("[EsRepositoryImpl->ping] {:?}", e))?;

        if response.status_code().is_success() {
            Ok(())
        } else {
            Err(anyhow!(
                "[EsRepositoryImpl->ping] Failed to connect to Elasticsearch: Status Code: {}",
                response.status_code()
            ))
        }
    }

    #[doc = "GET /_stats - 전체 인덱스의 원본 통계 문서를 가져오는 함수"]
    async fn get_all_indices_stats(&self) -> Result<Value, anyhow::Error> {
        let response: Response = self
            .es_client
            .indices()
            .stats(IndicesStatsParts::None)
            .send()
            .await
            .map_err(|e| anyhow!("[EsRepositoryImpl->get_all_indices_stats] {:?}", e))?;

        Self::response_to_json(response, "get_all_indices_stats()").await
    }

    #[doc = "GET /_nodes/stats/jvm - 노드별 JVM 지표를 가져오는 함수"]
    async fn get_node_jvm_stats(&self) -> Result<Value, anyhow::Error> {
        let response: Response = self
            .es_client
            .nodes()
            .stats(NodesStatsParts::Metric(&["jvm"]))
            .send()
            .await
            .map_err(|e| anyhow!("[EsRepositoryImpl->get_node_jvm_stats] {:?}", e))?;

        Self::response_to_json(response, "get_node_jvm_stats()").await
    }

    #[doc = "GET /{pattern}/_stats/store,segments - 인덱스별 저장용량/세그먼트 지표를 가져오는 함수"]
    /// # Arguments
    /// * `index_pattern` - 조회 대상 인덱스 패턴. None 이면 전체 인덱스.
    async fn get_indices_store_stats(
        &self,
        index_pattern: Option<&str>,
    ) -> Result<Value, anyhow::Error> {
        let metric: [&str; 2] = ["store", "segments"];
        let index_holder: [&str; 1];

        let stats_parts: IndicesStatsParts<'_> = match index_pattern {
            Some(pattern) => {
                index_holder = [pattern];
                IndicesStatsParts::IndexMetric(&index_holder, &metric)
            }
            None => IndicesStatsParts::Metric(&metric),
        };

        let response: Response = self
            .es_client
            .indices()
            .stats(stats_parts)
            .send()
            .await
            .map_err(|e| anyhow!("[EsRepositoryImpl->get_indices_store_stats] {:?}", e))?;

        Self::response_to_json(response, "get_indices_store_stats()").await
    }

    #[doc = "POST /{pattern}/_forcemerge - 세그먼트 병합을 요청하는 함수"]
    /// # Arguments
    /// * `option` - 병합 옵션 {max_num_segments, only_expunge_deletes, index_pattern}
    async fn force_merge(&self, option: &ForceMergeOption) -> Result<Value, anyhow::Error> {
        let indices: Vec<&str> = option.index_pattern().as_deref().into_iter().collect();

        let merge_parts: IndicesForcemergeParts<'_> = if indices.is_empty() {
            IndicesForcemergeParts::None
        } else {
            IndicesForcemergeParts::Index(&indices)
        };

        let indices_ns = self.es_client.indices();
        let mut request = indices_ns.forcemerge(merge_parts);

        if let Some(max_num_segments) = option.max_num_segments() {
            request = request.max_num_segments(*max_num_segments);
        }

        if *option.only_expunge_deletes() {
            request = request.only_expunge_deletes(true);
        }

        let response: Response = request
            .send()
            .await
            .map_err(|e| anyhow!("[EsRepositoryImpl->force_merge] {:?}", e))?;

        if response.status_code().is_success() {
            let resp: Value = response.json().await?;
            Ok(resp)
        } else {
            let error_body: String = response.text().await?;
            Err(anyhow!(
                "[EsRepositoryImpl->force_merge] response status is failed: {:?}",
                error_body
            ))
        }
    }
}

#[doc = "Function that initializes the Elasticsearch client from the environment settings."]
pub fn initialize_es_client() -> Result<EsRepositoryImpl, anyhow::Error> {
    let config: ElasticConfig = ElasticConfig::from_env();
    let es_repository: EsRepositoryImpl = EsRepositoryImpl::new(&config)?;

    Ok(es_repository)
}
