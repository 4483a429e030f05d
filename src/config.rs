/// 既定の接続先。
pub const DEFAULT_ADDRESS: &str = "localhost:6379";

/// 読み出し対象のハッシュのキー。
/// 構造を持つように見えるが、不透明な文字列として扱う。
pub const DEFAULT_KEY: &str = "helloworldworkflow-app||dapr.internal.dapr-tests.helloworldworkflow-app.workflow||51d33015-7f97-4208-b2ed-19338e591aef||history-000005";

/// 読み出すフィールド。
pub const DEFAULT_FIELD: &str = "data";

/// 1回のフェッチに必要な値をまとめたもの。
/// プロセスの生存期間中に変更されることはない。
#[derive(Clone)]
pub struct FetchConfig {
    /// `host:port`形式のアドレス。
    pub address: String,
    /// 空文字列の場合、`AUTH`を送信しない。
    pub password: String,
    /// 0以外の場合、`SELECT`で論理データベースを切り替える。
    pub database: u32,
    pub key: String,
    pub field: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.to_string(),
            password: String::new(),
            database: 0,
            key: DEFAULT_KEY.to_string(),
            field: DEFAULT_FIELD.to_string(),
        }
    }
}

// パスワードをログに出さない。
impl std::fmt::Debug for FetchConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchConfig")
            .field("address", &self.address)
            .field("password", &if self.password.is_empty() { "" } else { "***" })
            .field("database", &self.database)
            .field("key", &self.key)
            .field("field", &self.field)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_store() {
        let config = FetchConfig::default();
        assert_eq!(config.address, "localhost:6379");
        assert!(config.password.is_empty());
        assert_eq!(config.database, 0);
        assert_eq!(config.field, "data");
        assert!(config.key.ends_with("||history-000005"));
    }

    #[test]
    fn debug_hides_password() {
        let config = FetchConfig {
            password: "s3cret".to_string(),
            ..FetchConfig::default()
        };
        let printed = format!("{:?}", config);
        assert!(!printed.contains("s3cret"));
        assert!(printed.contains("***"));
    }
}
