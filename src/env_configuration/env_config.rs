use crate::common::*;

#[doc = "env 헬퍼함수 정의 - 값이 없거나 빈 문자열이면 None 을 반환"]
fn get_env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|val| !val.is_empty())
}

#[doc = "env 헬퍼함수 정의 - 값이 없으면 기본값을 반환"]
fn get_env_or_default(key: &str, default: &str) -> String {
    get_env_opt(key).unwrap_or_else(|| default.to_string())
}

#[doc = "Elastic Cloud identifier - takes precedence over 'ES_URL'/'ES_PORT'"]
pub static ES_CLOUD_ID: once_lazy<Option<String>> =
    once_lazy::new(|| get_env_opt("ES_CLOUD_ID"));

#[doc = "Base64 encoded API key - takes precedence over basic auth"]
pub static ES_API_KEY: once_lazy<Option<String>> = once_lazy::new(|| get_env_opt("ES_API_KEY"));

#[doc = "Basic auth user name"]
pub static ES_USERNAME: once_lazy<Option<String>> =
    once_lazy::new(|| get_env_opt("ES_USERNAME"));

#[doc = "Basic auth password"]
pub static ES_PASSWORD: once_lazy<Option<String>> =
    once_lazy::new(|| get_env_opt("ES_PASSWORD"));

#[doc = "Cluster base url (scheme + host)"]
pub static ES_URL: once_lazy<String> =
    once_lazy::new(|| get_env_or_default("ES_URL", "http://localhost"));

#[doc = "Cluster port"]
pub static ES_PORT: once_lazy<String> = once_lazy::new(|| get_env_or_default("ES_PORT", "9200"));
