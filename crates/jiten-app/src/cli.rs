use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "jiten", version, about = "Fetch, cache and parse jitenon.jp dictionary pages")]
pub struct Cli {
    /// Dictionary the URLs belong to
    #[arg(value_enum)]
    pub site: Site,

    /// Entry page URLs
    #[arg(required = true)]
    pub urls: Vec<String>,

    /// JSON config file; `JITEN_*` environment variables are used otherwise
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Site {
    Yoji,
    Kotowaza,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_site_and_urls() {
        let cli = Cli::try_parse_from([
            "jiten",
            "yoji",
            "https://yoji.jitenon.jp/yojia/1.html",
            "https://yoji.jitenon.jp/yojia/2.html",
        ])
        .unwrap();
        assert_eq!(cli.site, Site::Yoji);
        assert_eq!(cli.urls.len(), 2);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_urls_are_required() {
        assert!(Cli::try_parse_from(["jiten", "kotowaza"]).is_err());
    }

    #[test]
    fn test_unknown_site_is_rejected() {
        let result = Cli::try_parse_from(["jiten", "kokugo", "https://kokugo.jitenon.jp/a/1.html"]);
        assert!(result.is_err());
    }
}
