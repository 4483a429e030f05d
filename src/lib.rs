//! ローカルのRedisに接続して、ハッシュの1つのフィールドを読み出す診断ツール。
//!
//! 接続、`HGET`の発行、結果の出力を1回だけ実行する。
//! エラーはすべて`FetchError`として呼び出し側に返され、プロセスを終了するかどうかは
//! エントリーポイントが決める。

pub mod config;
pub mod error;
pub mod fetcher;
pub mod output;

pub use config::FetchConfig;
pub use error::{FetchError, Result};
pub use fetcher::fetch;
