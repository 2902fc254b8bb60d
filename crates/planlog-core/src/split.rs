//! ログ全体を計画の列に分割する

/// 計画の区切り（空行）
pub const PLAN_SEPARATOR: &str = "\n\n";

/// ログを `\n\n` で分割して計画を出現順に返す。トリムはしない。
pub fn split_log(text: &str) -> impl Iterator<Item = &str> {
    text.split(PLAN_SEPARATOR)
}
