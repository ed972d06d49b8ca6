use anyhow::Result;
use chrono::Utc;

const TEST_MESSAGE: &str = "IRSA Test Message";

/// 往 FIFO 队列投一条测试消息
/// FIFO 要求显式去重 ID，这里沿用秒级时间戳
pub async fn send_test_message(
    sqs: &aws_sdk_sqs::Client,
    queue_url: &str,
    group_id: &str,
) -> Result<()> {
    sqs.send_message()
        .queue_url(queue_url)
        .message_group_id(group_id)
        .message_deduplication_id(Utc::now().timestamp().to_string())
        .message_body(TEST_MESSAGE)
        .send()
        .await?;

    Ok(())
}
