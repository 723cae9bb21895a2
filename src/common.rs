pub use std::{
    collections::HashMap,
    fmt::Display,
    fs::File,
    io::{BufReader, Write},
    path::{Path, PathBuf},
    sync::Arc,
    time::{Duration, Instant},
};

pub use log::{error, info, warn};

pub use flexi_logger::{
    Age, Cleanup, Criterion, DeferredNow, Duplicate, FileSpec, Logger, Naming, Record,
};

pub use serde::de::DeserializeOwned;
pub use serde::{Deserialize, Serialize};
pub use serde_json::{json, Value};

pub use elasticsearch::{
    auth::Credentials,
    http::{
        response::Response,
        transport::{CloudConnectionPool, SingleNodeConnectionPool, TransportBuilder},
        Url,
    },
    indices::{IndicesForcemergeParts, IndicesStatsParts},
    nodes::NodesStatsParts,
    Elasticsearch,
};

pub use anyhow::{anyhow, Context};

pub use chrono::{DateTime, Local, TimeZone, Utc};

pub use getset::Getters;

pub use derive_new::new;

pub use async_trait::async_trait;

pub use once_cell::sync::Lazy as once_lazy;

pub use dotenv::dotenv;

pub use clap::{Parser, Subcommand};

pub use regex::Regex;
