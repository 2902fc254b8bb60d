//! ログを読み、集計し、指標レコードを追記する

use std::io::Write;
use std::path::PathBuf;

use log::info;
use planlog_core::{PlanLogError, Report, post_process};
use thiserror::Error;

use crate::common::io::{open_append_writer, read_log};
use crate::config::Config;

/// 境界で1行の診断メッセージに変換されるエラー
#[derive(Error, Debug)]
pub enum RunError {
    #[error("Problems with file {}: {source}", path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Problems with file {}: {source}", path.display())]
    OutputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no plans found in log: {}", path.display())]
    EmptyLog { path: PathBuf },
}

/// 1回分の後処理。成功時は追記したレポートを返す
pub fn run(config: &Config) -> Result<Report, RunError> {
    let text = read_log(&config.input).map_err(|source| RunError::InputUnavailable {
        path: config.input.clone(),
        source,
    })?;

    let report = post_process(&text).map_err(|e| match e {
        PlanLogError::EmptyLog => RunError::EmptyLog {
            path: config.input.clone(),
        },
    })?;

    append_report(config, &report).map_err(|source| RunError::OutputUnavailable {
        path: config.output.clone(),
        source,
    })?;

    info!(
        "{} plan(s) from {} -> {}",
        report.plan_count,
        config.input.display(),
        config.output.display()
    );
    Ok(report)
}

fn append_report(config: &Config, report: &Report) -> std::io::Result<()> {
    let mut writer = open_append_writer(&config.output)?;
    writer.write_all(report.render(config.layout).as_bytes())?;
    writer.close()
}
