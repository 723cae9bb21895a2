use crate::common::*;

#[doc = "Caller supplied force merge options."]
#[derive(Debug, Clone, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct ForceMergeOption {
    pub max_num_segments: Option<i64>,
    pub only_expunge_deletes: bool,
    pub index_pattern: Option<String>,
}

impl ForceMergeOption {
    #[doc = "Human readable description of the requested operation."]
    pub fn describe(&self) -> String {
        let operation_type: &str = if self.only_expunge_deletes {
            "expunge deletes"
        } else {
            "force merge"
        };

        let segment_info: String = self
            .max_num_segments
            .map(|n| format!(" to {} segments", n))
            .unwrap_or_default();

        let target_info: String = match &self.index_pattern {
            Some(pattern) => format!(" for indices matching '{}'", pattern),
            None => " for all indices".to_string(),
        };

        format!("{}{}{}", operation_type, segment_info, target_info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_covers_all_option_combinations() {
        let all: ForceMergeOption = ForceMergeOption::new(None, false, None);
        assert_eq!(all.describe(), "force merge for all indices");

        let scoped: ForceMergeOption =
            ForceMergeOption::new(Some(1), false, Some("logstash-*".to_string()));
        assert_eq!(
            scoped.describe(),
            "force merge to 1 segments for indices matching 'logstash-*'"
        );

        let expunge: ForceMergeOption = ForceMergeOption::new(None, true, None);
        assert_eq!(expunge.describe(), "expunge deletes for all indices");
    }
}
