use aws_sdk_s3::types::Object;
use serde::Serialize;

/// 对外返回的对象摘要，不直接序列化 SDK 类型
#[derive(Debug, Serialize)]
pub struct ObjectSummary {
    pub key: Option<String>,
    pub size: Option<i64>,
    pub last_modified: Option<String>,
}

impl From<&Object> for ObjectSummary {
    fn from(object: &Object) -> Self {
        Self {
            key: object.key().map(str::to_string),
            size: object.size(),
            last_modified: object
                .last_modified()
                .and_then(|dt| chrono::DateTime::from_timestamp(dt.secs(), dt.subsec_nanos()))
                .map(|dt| dt.to_rfc3339()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub key: String,
}
