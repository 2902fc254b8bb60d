//! シミュレータログの後処理ツール群
//!
//! - `perf_eval`: ログ中の全計画について実行時間・ステップ数・移動数の指標を求め、
//!   `<name>_indexes.<ext>` へ追記する

pub mod common;
pub mod config;
pub mod run;
