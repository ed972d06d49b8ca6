use std::time::Duration;

use anyhow::Result;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::types::Object;
use chrono::Utc;

const UPLOAD_BODY: &str = "IRSA test file";
const PRESIGN_EXPIRY: Duration = Duration::from_secs(15 * 60);

/// 列出桶里的全部对象
pub async fn list_objects(s3: &aws_sdk_s3::Client, bucket: &str) -> Result<Vec<Object>> {
    let response = s3.list_objects_v2().bucket(bucket).send().await?;
    Ok(response.contents().to_vec())
}

/// 用预签名 URL 上传一个测试文件，对象键取当前时间戳
/// 上传本身走普通 HTTP PUT，验证的是预签名链路而不是 SDK 直传
pub async fn upload_test_object(
    s3: &aws_sdk_s3::Client,
    http: &reqwest::Client,
    bucket: &str,
) -> Result<String> {
    let key = format!("{}.txt", Utc::now().timestamp());

    let presigned = s3
        .put_object()
        .bucket(bucket)
        .key(&key)
        .presigned(PresigningConfig::expires_in(PRESIGN_EXPIRY)?)
        .await?;

    http.put(presigned.uri())
        .header(reqwest::header::CONTENT_TYPE, "multipart/form-data")
        .body(UPLOAD_BODY)
        .send()
        .await?
        .error_for_status()?;

    Ok(key)
}
