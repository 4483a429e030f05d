use bytes::Bytes;
use mini_redis::{Connection, Frame};
use tokio::net::TcpStream;
use tracing::{debug, info};

use crate::config::FetchConfig;
use crate::error::{FetchError, Result};

/// ストアに接続して、`config.key`のハッシュから`config.field`の値を1回だけ読み出す。
///
/// タイムアウトは設定しない。接続は関数を抜けるときにドロップされる。
pub async fn fetch(config: &FetchConfig) -> Result<Bytes> {
    debug!(address = %config.address, "connecting");
    let socket = TcpStream::connect(config.address.as_str())
        .await
        .map_err(|source| FetchError::Connect {
            addr: config.address.clone(),
            source,
        })?;

    // `Connection`はバイトストリームの代わりに、Redisフレームを読み書きさせてくれる。
    let mut connection = Connection::new(socket);

    if !config.password.is_empty() {
        debug!("authenticating");
        let reply =
            request(&mut connection, &[&b"AUTH"[..], config.password.as_bytes()]).await?;
        expect_ok("AUTH", reply)?;
    }

    if config.database != 0 {
        debug!(database = config.database, "selecting database");
        let index = config.database.to_string();
        let reply = request(&mut connection, &[&b"SELECT"[..], index.as_bytes()]).await?;
        expect_ok("SELECT", reply)?;
    }

    debug!(key = %config.key, field = %config.field, "sending HGET");
    let reply = request(
        &mut connection,
        &[&b"HGET"[..], config.key.as_bytes(), config.field.as_bytes()],
    )
    .await?;

    match reply {
        Frame::Bulk(value) => {
            info!(key = %config.key, len = value.len(), "field fetched");
            Ok(value)
        }
        // 存在しないキーとフィールドはどちらもnullで返ってくる。
        Frame::Null => Err(FetchError::NotFound {
            key: config.key.clone(),
            field: config.field.clone(),
        }),
        frame => Err(FetchError::Protocol(format!(
            "unexpected HGET reply: {:?}",
            frame
        ))),
    }
}

/// コマンドを1つ送信して、応答フレームを1つ受け取る。
/// エラーフレームはここで`FetchError::Server`に変換する。
async fn request(connection: &mut Connection, args: &[&[u8]]) -> Result<Frame> {
    let command = Frame::Array(
        args.iter()
            .map(|arg| Frame::Bulk(Bytes::copy_from_slice(arg)))
            .collect(),
    );
    connection.write_frame(&command).await?;

    match connection.read_frame().await {
        Ok(Some(Frame::Error(message))) => Err(FetchError::Server(message)),
        Ok(Some(frame)) => Ok(frame),
        Ok(None) => Err(FetchError::Protocol(
            "connection closed before reply".to_string(),
        )),
        Err(err) => Err(FetchError::Protocol(err.to_string())),
    }
}

fn expect_ok(command: &str, reply: Frame) -> Result<()> {
    match reply {
        Frame::Simple(status) if status == "OK" => Ok(()),
        frame => Err(FetchError::Protocol(format!(
            "unexpected {} reply: {:?}",
            command, frame
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_status_is_accepted() {
        assert!(expect_ok("AUTH", Frame::Simple("OK".to_string())).is_ok());
    }

    #[test]
    fn other_status_is_a_protocol_error() {
        let err = expect_ok("SELECT", Frame::Integer(1)).unwrap_err();
        assert!(matches!(err, FetchError::Protocol(msg) if msg.contains("SELECT")));
    }
}
