//! Configuration layer: typed settings with layered precedence (file → env → CLI).

use std::{str::FromStr, time::Duration};

use clap::{Args, Parser, Subcommand, builder::BoolishValueParser};
use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use tracing::level_filters::LevelFilter;

use crate::application::catalog::{
    DEFAULT_FEATURED_LIMIT, DEFAULT_RELATED_LIMIT, DEFAULT_TRENDING_LIMIT, LatencyProfile,
    QueryLimits,
};

const DEFAULT_CONFIG_BASENAME: &str = "config/default";
const LOCAL_CONFIG_BASENAME: &str = "foglio";
const DEFAULT_LIST_LATENCY_MS: u64 = 800;
const DEFAULT_LOOKUP_LATENCY_MS: u64 = 500;
const DEFAULT_SEARCH_LATENCY_MS: u64 = 700;
const DEFAULT_AGGREGATE_LATENCY_MS: u64 = 400;
const DEFAULT_WRITE_LATENCY_MS: u64 = 800;

/// Command-line arguments for the Foglio binary.
#[derive(Debug, Parser)]
#[command(name = "foglio", version, about = "Foglio content catalog")]
pub struct CliArgs {
    /// Optional path to a configuration file.
    #[arg(
        long = "config-file",
        env = "FOGLIO_CONFIG_FILE",
        value_name = "PATH"
    )]
    pub config_file: Option<std::path::PathBuf>,

    #[command(flatten)]
    pub overrides: CliOverrides,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args, Default, Clone)]
pub struct CliOverrides {
    /// Override the base log level (trace|debug|info|warn|error).
    #[arg(long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Toggle JSON logging.
    #[arg(
        long = "log-json",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new()
    )]
    pub log_json: Option<bool>,

    /// Toggle the simulated network latency.
    #[arg(
        long = "simulate-latency",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new()
    )]
    pub simulate_latency: Option<bool>,

    /// Override the default related-posts limit.
    #[arg(long = "related-limit", value_name = "COUNT")]
    pub related_limit: Option<usize>,

    /// Override the default featured-posts limit.
    #[arg(long = "featured-limit", value_name = "COUNT")]
    pub featured_limit: Option<usize>,

    /// Override the default trending-posts limit.
    #[arg(long = "trending-limit", value_name = "COUNT")]
    pub trending_limit: Option<usize>,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Query and mutate the post catalog.
    Posts {
        #[command(subcommand)]
        command: PostsCmd,
    },
    /// Inspect authors and their posts.
    Authors {
        #[command(subcommand)]
        command: AuthorsCmd,
    },
    /// Inspect and grow comment threads.
    Comments {
        #[command(subcommand)]
        command: CommentsCmd,
    },
    /// List every distinct tag in the catalog.
    Tags,
}

#[derive(Debug, Subcommand, Clone)]
pub enum PostsCmd {
    /// List posts in catalog order, optionally narrowed by tag or author.
    List {
        /// Case-insensitive exact tag filter.
        #[arg(long)]
        tag: Option<String>,
        /// Owning author id.
        #[arg(long)]
        author: Option<String>,
    },
    /// Show a single post by id.
    Show { id: String },
    /// Free-text search; terms are OR-ed.
    Search {
        #[arg(required = true)]
        terms: Vec<String>,
    },
    /// Posts sharing at least one tag with the given post.
    Related {
        id: String,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Featured posts.
    Featured {
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Trending posts.
    Trending {
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Create a post in the in-memory store.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        excerpt: String,
        #[arg(long, default_value = "")]
        body: String,
        #[arg(long = "cover-image", default_value = "https://images.example.com/cover")]
        cover_image: String,
        #[arg(long)]
        author: String,
        #[arg(long = "tag")]
        tags: Vec<String>,
        #[arg(long)]
        featured: bool,
        #[arg(long)]
        trending: bool,
        /// Publish date as YYYY-MM-DD; defaults to today.
        #[arg(long = "published-on", value_name = "DATE")]
        published_on: Option<String>,
    },
    /// Partially update a post; omitted fields keep their value.
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        excerpt: Option<String>,
        #[arg(long)]
        body: Option<String>,
        #[arg(long = "cover-image")]
        cover_image: Option<String>,
        #[arg(long = "tag")]
        tags: Vec<String>,
        #[arg(long, value_parser = BoolishValueParser::new())]
        featured: Option<bool>,
        #[arg(long, value_parser = BoolishValueParser::new())]
        trending: Option<bool>,
    },
    /// Delete a post and its comment thread.
    Delete { id: String },
}

#[derive(Debug, Subcommand, Clone)]
pub enum AuthorsCmd {
    /// List all authors.
    List,
    /// Show a single author by id.
    Show { id: String },
    /// List the posts owned by an author.
    Posts { id: String },
}

#[derive(Debug, Subcommand, Clone)]
pub enum CommentsCmd {
    /// List the comments on a post in insertion order.
    List { post_id: String },
    /// Add a comment to a post's thread.
    Add {
        post_id: String,
        #[arg(long)]
        author: String,
        #[arg(long)]
        body: String,
        /// Parent comment id for a nested reply.
        #[arg(long)]
        parent: Option<String>,
    },
    /// Like a comment.
    Like { id: String },
}

/// Fully-resolved settings after precedence resolution and validation.
#[derive(Debug, Clone)]
pub struct Settings {
    pub logging: LoggingSettings,
    pub latency: LatencySettings,
    pub query: QuerySettings,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub level: LevelFilter,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy)]
pub enum LogFormat {
    Json,
    Compact,
}

#[derive(Debug, Clone)]
pub struct LatencySettings {
    pub enabled: bool,
    pub list: Duration,
    pub lookup: Duration,
    pub search: Duration,
    pub aggregate: Duration,
    pub write: Duration,
}

impl LatencySettings {
    /// The profile handed to the catalog service.
    pub fn profile(&self) -> LatencyProfile {
        if !self.enabled {
            return LatencyProfile::disabled();
        }
        LatencyProfile {
            list: self.list,
            lookup: self.lookup,
            search: self.search,
            aggregate: self.aggregate,
            write: self.write,
        }
    }
}

#[derive(Debug, Clone)]
pub struct QuerySettings {
    pub related_limit: usize,
    pub featured_limit: usize,
    pub trending_limit: usize,
}

impl QuerySettings {
    pub fn limits(&self) -> QueryLimits {
        QueryLimits {
            related: self.related_limit,
            featured: self.featured_limit,
            trending: self.trending_limit,
        }
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to build configuration: {0}")]
    Build(#[from] config::ConfigError),
    #[error("invalid configuration for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl LoadError {
    fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            reason: reason.into(),
        }
    }
}

/// Load settings using the configured precedence (file → environment → CLI).
pub fn load(cli: &CliArgs) -> Result<Settings, LoadError> {
    let mut builder = Config::builder()
        .add_source(File::with_name(DEFAULT_CONFIG_BASENAME).required(false))
        .add_source(File::with_name(LOCAL_CONFIG_BASENAME).required(false));

    if let Some(path) = cli.config_file.as_ref() {
        builder = builder.add_source(File::from(path.as_path()).required(true));
    }

    builder = builder.add_source(Environment::with_prefix("FOGLIO").separator("__"));

    let mut raw: RawSettings = builder.build()?.try_deserialize()?;
    raw.apply_overrides(&cli.overrides);

    Settings::from_raw(raw)
}

/// Resolve configuration using the supplied CLI arguments, returning both.
pub fn load_with_cli() -> Result<(CliArgs, Settings), LoadError> {
    let args = CliArgs::parse();
    let settings = load(&args)?;
    Ok((args, settings))
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSettings {
    logging: RawLoggingSettings,
    latency: RawLatencySettings,
    query: RawQuerySettings,
}

impl RawSettings {
    fn apply_overrides(&mut self, overrides: &CliOverrides) {
        if let Some(level) = overrides.log_level.as_ref() {
            self.logging.level = Some(level.clone());
        }
        if let Some(json) = overrides.log_json {
            self.logging.json = Some(json);
        }
        if let Some(enabled) = overrides.simulate_latency {
            self.latency.enabled = Some(enabled);
        }
        if let Some(limit) = overrides.related_limit {
            self.query.related_limit = Some(limit);
        }
        if let Some(limit) = overrides.featured_limit {
            self.query.featured_limit = Some(limit);
        }
        if let Some(limit) = overrides.trending_limit {
            self.query.trending_limit = Some(limit);
        }
    }
}

impl Settings {
    fn from_raw(raw: RawSettings) -> Result<Self, LoadError> {
        let RawSettings {
            logging,
            latency,
            query,
        } = raw;

        Ok(Self {
            logging: build_logging_settings(logging)?,
            latency: build_latency_settings(latency),
            query: build_query_settings(query)?,
        })
    }
}

fn build_logging_settings(logging: RawLoggingSettings) -> Result<LoggingSettings, LoadError> {
    let level = match logging.level {
        Some(level) => LevelFilter::from_str(level.as_str()).map_err(|err| {
            LoadError::invalid("logging.level", format!("failed to parse: {err}"))
        })?,
        None => LevelFilter::INFO,
    };

    let format = if logging.json.unwrap_or(false) {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };

    Ok(LoggingSettings { level, format })
}

fn build_latency_settings(latency: RawLatencySettings) -> LatencySettings {
    LatencySettings {
        enabled: latency.enabled.unwrap_or(true),
        list: Duration::from_millis(latency.list_ms.unwrap_or(DEFAULT_LIST_LATENCY_MS)),
        lookup: Duration::from_millis(latency.lookup_ms.unwrap_or(DEFAULT_LOOKUP_LATENCY_MS)),
        search: Duration::from_millis(latency.search_ms.unwrap_or(DEFAULT_SEARCH_LATENCY_MS)),
        aggregate: Duration::from_millis(
            latency.aggregate_ms.unwrap_or(DEFAULT_AGGREGATE_LATENCY_MS),
        ),
        write: Duration::from_millis(latency.write_ms.unwrap_or(DEFAULT_WRITE_LATENCY_MS)),
    }
}

fn build_query_settings(query: RawQuerySettings) -> Result<QuerySettings, LoadError> {
    let related_limit = positive(query.related_limit, DEFAULT_RELATED_LIMIT, "query.related_limit")?;
    let featured_limit = positive(
        query.featured_limit,
        DEFAULT_FEATURED_LIMIT,
        "query.featured_limit",
    )?;
    let trending_limit = positive(
        query.trending_limit,
        DEFAULT_TRENDING_LIMIT,
        "query.trending_limit",
    )?;

    Ok(QuerySettings {
        related_limit,
        featured_limit,
        trending_limit,
    })
}

fn positive(value: Option<usize>, default: usize, key: &'static str) -> Result<usize, LoadError> {
    let value = value.unwrap_or(default);
    if value == 0 {
        return Err(LoadError::invalid(key, "must be greater than zero"));
    }
    Ok(value)
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawLoggingSettings {
    level: Option<String>,
    json: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawLatencySettings {
    enabled: Option<bool>,
    list_ms: Option<u64>,
    lookup_ms: Option<u64>,
    search_ms: Option<u64>,
    aggregate_ms: Option<u64>,
    write_ms: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawQuerySettings {
    related_limit: Option<usize>,
    featured_limit: Option<usize>,
    trending_limit: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_overrides_take_highest_precedence() {
        let mut raw = RawSettings::default();
        raw.logging.level = Some("info".to_string());
        raw.query.related_limit = Some(4);

        let overrides = CliOverrides {
            log_level: Some("debug".to_string()),
            related_limit: Some(7),
            ..Default::default()
        };

        raw.apply_overrides(&overrides);
        let settings = Settings::from_raw(raw).expect("valid settings");

        assert_eq!(settings.logging.level, LevelFilter::DEBUG);
        assert_eq!(settings.query.related_limit, 7);
    }

    #[test]
    fn latency_defaults_mirror_the_simulated_network() {
        let settings = Settings::from_raw(RawSettings::default()).expect("valid settings");
        assert!(settings.latency.enabled);
        assert_eq!(settings.latency.list, Duration::from_millis(800));
        assert_eq!(settings.latency.search, Duration::from_millis(700));
        assert_eq!(settings.latency.aggregate, Duration::from_millis(400));
    }

    #[test]
    fn disabling_latency_collapses_the_profile_to_zero() {
        let mut raw = RawSettings::default();
        let overrides = CliOverrides {
            simulate_latency: Some(false),
            ..Default::default()
        };

        raw.apply_overrides(&overrides);
        let settings = Settings::from_raw(raw).expect("valid settings");
        let profile = settings.latency.profile();

        assert!(profile.list.is_zero());
        assert!(profile.write.is_zero());
    }

    #[test]
    fn zero_query_limit_is_rejected() {
        let mut raw = RawSettings::default();
        raw.query.trending_limit = Some(0);

        let error = Settings::from_raw(raw).expect_err("zero limit must fail validation");
        assert!(matches!(
            error,
            LoadError::Invalid {
                key: "query.trending_limit",
                ..
            }
        ));
    }

    #[test]
    fn cli_json_logging_enforces_format() {
        let mut raw = RawSettings::default();
        let overrides = CliOverrides {
            log_json: Some(true),
            ..Default::default()
        };

        raw.apply_overrides(&overrides);
        let settings = Settings::from_raw(raw).expect("valid settings");

        assert!(matches!(settings.logging.format, LogFormat::Json));
    }

    #[test]
    fn parse_posts_search_arguments() {
        let args = CliArgs::parse_from(["foglio", "posts", "search", "nextjs", "typescript"]);

        match args.command {
            Command::Posts {
                command: PostsCmd::Search { terms },
            } => assert_eq!(terms, ["nextjs", "typescript"]),
            _ => panic!("wrong command parsed"),
        }
    }

    #[test]
    fn parse_comments_add_arguments() {
        let args = CliArgs::parse_from([
            "foglio",
            "comments",
            "add",
            "post-1",
            "--author",
            "author-2",
            "--body",
            "Nice write-up",
            "--parent",
            "comment-2",
        ]);

        match args.command {
            Command::Comments {
                command:
                    CommentsCmd::Add {
                        post_id,
                        author,
                        body,
                        parent,
                    },
            } => {
                assert_eq!(post_id, "post-1");
                assert_eq!(author, "author-2");
                assert_eq!(body, "Nice write-up");
                assert_eq!(parent.as_deref(), Some("comment-2"));
            }
            _ => panic!("wrong command parsed"),
        }
    }

    #[test]
    fn parse_global_overrides_before_subcommand() {
        let args = CliArgs::parse_from([
            "foglio",
            "--simulate-latency",
            "false",
            "--trending-limit",
            "9",
            "tags",
        ]);

        assert_eq!(args.overrides.simulate_latency, Some(false));
        assert_eq!(args.overrides.trending_limit, Some(9));
        assert!(matches!(args.command, Command::Tags));
    }
}
