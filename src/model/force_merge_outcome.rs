use crate::common::*;

#[doc = "Value type carrying the merge call result so downstream report
building branches on data instead of a caught exception."]
#[derive(Debug, Clone, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct ForceMergeOutcome {
    pub completed: bool,
    pub error: Option<String>,
    pub elapsed_seconds: f64,
}
