//! `perf_eval` の実行設定

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use planlog_core::Layout;

use crate::common::io::indexes_path;

/// 引数から解決済みの実行設定
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// 入力ログ（`-` は stdin）
    pub input: PathBuf,
    /// 追記先
    pub output: PathBuf,
    pub layout: Layout,
    /// レポートを JSON でも stdout へ出す
    pub json: bool,
}

impl Config {
    /// 出力先が省略されたら入力パスから導出する。stdin 入力では導出できないのでエラー。
    /// レコードを stdout に出す場合（`--output -`）は JSON と混ざるので併用不可
    pub fn resolve(input: &Path, output: Option<&Path>, layout: Layout, json: bool) -> Result<Self> {
        if json && output.is_some_and(|p| p.as_os_str() == "-") {
            bail!("--json cannot be combined with --output - (both write to stdout)");
        }
        let output = match output {
            Some(p) => p.to_path_buf(),
            None if input.as_os_str() == "-" => {
                bail!("--output is required when reading the log from stdin");
            }
            None => indexes_path(input),
        };
        Ok(Config {
            input: input.to_path_buf(),
            output,
            layout,
            json,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_derives_output() {
        let cfg = Config::resolve(Path::new("data/log.txt"), None, Layout::Legacy, false).unwrap();
        assert_eq!(cfg.output, PathBuf::from("data/log_indexes.txt"));
        assert_eq!(cfg.layout, Layout::Legacy);
    }

    #[test]
    fn test_resolve_explicit_output() {
        let cfg =
            Config::resolve(Path::new("log.txt"), Some(Path::new("out.txt")), Layout::Corrected, true)
                .unwrap();
        assert_eq!(cfg.output, PathBuf::from("out.txt"));
        assert!(cfg.json);
    }

    #[test]
    fn test_resolve_stdin_requires_output() {
        assert!(Config::resolve(Path::new("-"), None, Layout::Legacy, false).is_err());
        assert!(Config::resolve(Path::new("-"), Some(Path::new("o.txt")), Layout::Legacy, false).is_ok());
    }

    #[test]
    fn test_resolve_stdout_output_excludes_json() {
        let stdout = Some(Path::new("-"));
        assert!(Config::resolve(Path::new("log.txt"), stdout, Layout::Legacy, true).is_err());
        let cfg = Config::resolve(Path::new("log.txt"), stdout, Layout::Legacy, false).unwrap();
        assert_eq!(cfg.output, PathBuf::from("-"));
    }
}
