use anyhow::Result;
use aws_sdk_lambda::primitives::Blob;
use aws_sdk_lambda::types::LogType;

/// 同步调用函数并把返回的负载记到日志里
pub async fn invoke_function(lambda: &aws_sdk_lambda::Client, function_name: &str) -> Result<()> {
    let payload = serde_json::to_vec(&serde_json::json!({
        "first_name": "Irsa",
        "last_name": "Demo",
    }))?;

    let output = lambda
        .invoke()
        .function_name(function_name)
        .payload(Blob::new(payload))
        .log_type(LogType::Tail)
        .send()
        .await?;

    if let Some(blob) = output.payload() {
        tracing::info!(
            "Lambda response payload: {}",
            String::from_utf8_lossy(blob.as_ref())
        );
    }

    Ok(())
}
