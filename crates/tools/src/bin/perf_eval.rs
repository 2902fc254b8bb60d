/// シミュレータログの性能指標集計ツール
///
/// 使い方:
///   # log.txt を集計し log_indexes.txt へ追記
///   perf_eval log.txt
///
///   # gzip 圧縮ログ（出力は log_indexes.txt）
///   perf_eval log.txt.gz
///
///   # minSteps ブロックに最少ステップの計画を出す + JSON を stdout へ
///   perf_eval --layout corrected --json log.txt
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::error;

use planlog_core::Layout;
use tools::config::Config;
use tools::run::run;

#[derive(Parser, Debug)]
#[command(author, version, about = "Compute performance indexes of the plans in a simulator log")]
struct Cli {
    /// 解の計画が空行区切りで並ぶログ（`-` で stdin、`.gz` 可）
    input_log: PathBuf,

    /// 追記先（省略時: <base>_indexes.<ext>）
    #[arg(long)]
    output: Option<PathBuf>,

    /// レコードのレイアウト
    #[arg(long, value_enum, default_value_t = LayoutArg::Legacy)]
    layout: LayoutArg,

    /// レポートを JSON で stdout にも出力する
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LayoutArg {
    /// minPlan / minSteps の両方に最短時間の計画
    Legacy,
    /// minSteps に最少ステップの計画
    Corrected,
}

impl From<LayoutArg> for Layout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Legacy => Layout::Legacy,
            LayoutArg::Corrected => Layout::Corrected,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    let config =
        Config::resolve(&cli.input_log, cli.output.as_deref(), cli.layout.into(), cli.json)?;

    // 入出力の失敗は診断を1行出して静かに終わる
    let report = match run(&config) {
        Ok(report) => report,
        Err(e) => {
            error!("{e}");
            return Ok(());
        }
    };

    if config.json {
        let json = serde_json::to_string_pretty(&report).context("failed to serialize report")?;
        println!("{json}");
    }
    Ok(())
}
