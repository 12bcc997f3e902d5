//! Command-line options for the `seo_probe` binary.

use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use crate::config::constants::{
    DEFAULT_BACKLINK_LIMIT, DEFAULT_BASE_URL, DEFAULT_CITATION_LIMIT, DEFAULT_LANGUAGE_CODE,
    DEFAULT_LOCATION_CODE, DEFAULT_MAX_CONCURRENCY, DEFAULT_PROBE_MODEL, DEFAULT_SERP_DEPTH,
    DEFAULT_SUGGESTION_LIMIT, DEFAULT_TIMEOUT,
};
use crate::config::types::{ClientConfig, Locale, LogFormat, LogLevel};

/// Query the DataForSEO API from the command line.
///
/// Credentials are read from `DATAFORSEO_LOGIN` and `DATAFORSEO_PASSWORD`
/// (a `.env` file in the working directory is honoured).
#[derive(Debug, Parser)]
#[command(name = "seo_probe", version, about)]
pub struct Cli {
    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info, global = true)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain, global = true)]
    pub log_format: LogFormat,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs(), global = true)]
    pub timeout_seconds: u64,

    /// Maximum concurrent requests
    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENCY, global = true)]
    pub max_concurrency: usize,

    /// API base URL (including the version prefix)
    #[arg(long, default_value = DEFAULT_BASE_URL, global = true)]
    pub base_url: String,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Client configuration derived from the global options.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout_seconds),
            max_concurrency: self.max_concurrency,
            ..Default::default()
        }
    }
}

/// Location and language options shared by keyword and SERP commands.
#[derive(Debug, Clone, Args)]
pub struct LocaleArgs {
    /// Provider location code (UK=2826, US=2840)
    #[arg(long, default_value_t = DEFAULT_LOCATION_CODE)]
    pub location_code: u32,

    /// Language code
    #[arg(long, default_value = DEFAULT_LANGUAGE_CODE)]
    pub language_code: String,
}

impl From<LocaleArgs> for Locale {
    fn from(args: LocaleArgs) -> Self {
        Locale::new(args.location_code, args.language_code)
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search volume, competition and difficulty for up to 100 keywords
    Keywords {
        #[arg(required = true)]
        keywords: Vec<String>,
        #[command(flatten)]
        locale: LocaleArgs,
    },
    /// Keyword ideas for a seed keyword
    Suggest {
        seed: String,
        #[command(flatten)]
        locale: LocaleArgs,
        #[arg(long, default_value_t = DEFAULT_SUGGESTION_LIMIT)]
        limit: u32,
    },
    /// Ranking position of a domain for one keyword
    Rank {
        keyword: String,
        /// Domain (or domain fragment) to look for
        #[arg(long)]
        domain: String,
        #[command(flatten)]
        locale: LocaleArgs,
        #[arg(long, default_value_t = DEFAULT_SERP_DEPTH)]
        depth: u32,
    },
    /// Ranking positions of a domain for many keywords, checked concurrently
    BatchRank {
        #[arg(required = true)]
        keywords: Vec<String>,
        #[arg(long)]
        domain: String,
        #[command(flatten)]
        locale: LocaleArgs,
        #[arg(long, default_value_t = DEFAULT_SERP_DEPTH)]
        depth: u32,
    },
    /// AI assistant citations of a domain
    Citations {
        domain: String,
        #[arg(long, default_value_t = DEFAULT_CITATION_LIMIT)]
        limit: u32,
    },
    /// Raw AI model response for a query
    Probe {
        query: String,
        #[arg(long, default_value = DEFAULT_PROBE_MODEL)]
        model: String,
    },
    /// Backlinks pointing at a URL
    Backlinks {
        target: String,
        #[arg(long, default_value_t = DEFAULT_BACKLINK_LIMIT)]
        limit: u32,
    },
    /// Account balance and usage
    Balance,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["seo_probe", "balance"]).expect("valid args");
        assert!(matches!(cli.command, Command::Balance));
        assert!(matches!(cli.log_level, LogLevel::Info));
        let config = cli.client_config();
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert_eq!(config.max_concurrency, 5);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_cli_rank_with_locale() {
        let cli = Cli::try_parse_from([
            "seo_probe",
            "rank",
            "bank of england",
            "--domain",
            "bankofengland.co.uk",
            "--location-code",
            "2840",
            "--depth",
            "10",
        ])
        .expect("valid args");
        match cli.command {
            Command::Rank {
                keyword,
                domain,
                locale,
                depth,
            } => {
                assert_eq!(keyword, "bank of england");
                assert_eq!(domain, "bankofengland.co.uk");
                assert_eq!(Locale::from(locale), Locale::new(2840, "en"));
                assert_eq!(depth, 10);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_batch_rank_with_locale_and_depth() {
        let cli = Cli::try_parse_from([
            "seo_probe",
            "batch-rank",
            "fed funds rate",
            "treasury yields",
            "--domain",
            "example.com",
            "--location-code",
            "2840",
            "--language-code",
            "es",
            "--depth",
            "20",
        ])
        .expect("valid args");
        match cli.command {
            Command::BatchRank {
                keywords,
                domain,
                locale,
                depth,
            } => {
                assert_eq!(keywords, vec!["fed funds rate", "treasury yields"]);
                assert_eq!(domain, "example.com");
                assert_eq!(Locale::from(locale), Locale::new(2840, "es"));
                assert_eq!(depth, 20);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_batch_rank_defaults() {
        let cli = Cli::try_parse_from(["seo_probe", "batch-rank", "cpi", "--domain", "example.com"])
            .expect("valid args");
        match cli.command {
            Command::BatchRank { locale, depth, .. } => {
                assert_eq!(Locale::from(locale), Locale::default());
                assert_eq!(depth, DEFAULT_SERP_DEPTH);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_keywords_requires_at_least_one() {
        assert!(Cli::try_parse_from(["seo_probe", "keywords"]).is_err());
    }

    #[test]
    fn test_cli_global_options_after_subcommand() {
        let cli = Cli::try_parse_from([
            "seo_probe",
            "citations",
            "example.com",
            "--max-concurrency",
            "2",
            "--log-format",
            "json",
        ])
        .expect("valid args");
        assert_eq!(cli.max_concurrency, 2);
        assert!(matches!(cli.log_format, LogFormat::Json));
    }
}
