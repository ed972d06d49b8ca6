use std::sync::Arc;

use redis::{AsyncCommands, Client as RedisClient};

use crate::cache::keys;
use crate::cache::models::UserRecord;

/// 列表值里每条记录前固定带的分隔符，首条也不例外
const SEPARATOR: &str = ", ";

/// 用户列表缓存操作
pub struct UserListOperations;

impl UserListOperations {
    /// 把一条记录编码成追加片段：分隔符 + 紧凑 JSON
    pub fn encode_entry(user: &UserRecord) -> Result<String, serde_json::Error> {
        let json = serde_json::to_string(user)?;
        Ok(format!("{}{}", SEPARATOR, json))
    }

    /// 按分隔符拆开整串值并还原记录
    /// 第一个子串是编码方案留下的空槽位，无条件跳过；解析失败的片段直接丢弃
    pub fn decode_entries(raw: &str) -> Vec<UserRecord> {
        raw.split(SEPARATOR)
            .skip(1)
            .filter_map(|fragment| serde_json::from_str(fragment).ok())
            .collect()
    }

    /// 追加一条用户记录
    /// 依赖 Redis APPEND 的原子性串接并发写入，键不存在时由 APPEND 自动创建
    pub async fn append_user(
        redis: &Arc<RedisClient>,
        user: &UserRecord,
    ) -> Result<(), redis::RedisError> {
        let mut conn = redis.get_multiplexed_async_connection().await?;

        let entry = Self::encode_entry(user).map_err(|e| {
            redis::RedisError::from((
                redis::ErrorKind::IoError,
                "Serialization error",
                e.to_string(),
            ))
        })?;

        let _: usize = conn.append(keys::user_list_key(), entry).await?;

        Ok(())
    }

    /// 读出全部用户记录，按追加顺序返回
    /// 键不存在时返回 None，由调用方决定如何呈现
    pub async fn list_users(
        redis: &Arc<RedisClient>,
    ) -> Result<Option<Vec<UserRecord>>, redis::RedisError> {
        let mut conn = redis.get_multiplexed_async_connection().await?;

        let raw: Option<String> = conn.get(keys::user_list_key()).await?;

        Ok(raw.map(|value| Self::decode_entries(&value)))
    }
}
