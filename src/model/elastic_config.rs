use crate::common::*;

use crate::env_configuration::env_config::*;

#[doc = "Elasticsearch 접속정보"]
/// Precedence rules:
/// * `cloud_id` takes precedence over `es_url`/`es_port`.
/// * `api_key` takes precedence over `username`/`password`.
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct ElasticConfig {
    pub cloud_id: Option<String>,
    pub api_key: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub es_url: String,
    pub es_port: String,
}

impl ElasticConfig {
    #[doc = "Function that collects the connection settings from the environment."]
    pub fn from_env() -> Self {
        ElasticConfig::new(
            ES_CLOUD_ID.clone(),
            ES_API_KEY.clone(),
            ES_USERNAME.clone(),
            ES_PASSWORD.clone(),
            ES_URL.clone(),
            ES_PORT.clone(),
        )
    }

    #[doc = "Base url of the cluster when no cloud id is configured. ex) http://localhost:9200"]
    pub fn base_url(&self) -> String {
        format!("{}:{}", self.es_url, self.es_port)
    }
}
