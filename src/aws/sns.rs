use anyhow::Result;

const TEST_MESSAGE: &str = "IRSA Test Message";

/// 向主题发布一条测试通知
pub async fn publish_test_message(sns: &aws_sdk_sns::Client, topic_arn: &str) -> Result<()> {
    sns.publish()
        .topic_arn(topic_arn)
        .message(TEST_MESSAGE)
        .send()
        .await?;

    Ok(())
}
