use crate::common::*;

#[derive(Debug, Parser)]
#[command(
    name = "elastic_segment_tool",
    about = "Elasticsearch segment statistics / force merge tool"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    #[doc = "Fetch the full index statistics and save the raw json to disk."]
    FetchStats {
        /// Output path for the raw statistics json
        #[arg(long, default_value = "stats.json")]
        output: PathBuf,
    },
    #[doc = "Aggregate per-index / per-prefix segment counts from a saved statistics json."]
    AnalyzeSegments {
        /// Input path of the raw statistics json
        #[arg(long, default_value = "stats.json")]
        input: PathBuf,
    },
    #[doc = "Force merge indices while capturing before/after heap and index metrics."]
    ForceMerge {
        /// Maximum number of segments to merge to
        #[arg(long, value_parser = clap::value_parser!(i64).range(1..))]
        max_segments: Option<i64>,

        /// Only expunge deleted documents
        #[arg(long)]
        expunge_deletes: bool,

        /// Index pattern to match (e.g. 'logstash-*'); all indices when omitted
        #[arg(long)]
        index_pattern: Option<String>,
    },
}
