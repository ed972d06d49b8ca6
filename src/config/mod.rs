use std::env;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub aws_region: String,
    pub s3_bucket: String,
    pub sqs_queue_url: String,
    pub sqs_message_group_id: String,
    pub sns_topic_arn: String,
    pub dynamodb_table: String,
    pub lambda_function: String,
    pub redis_host: String,
    pub redis_db: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        dotenv::dotenv().ok();

        Ok(Config {
            server_host: env::var("SERVER_HOST")?,
            server_port: env::var("SERVER_PORT")?.parse().unwrap_or(8080),
            aws_region: env::var("AWS_REGION")?,
            s3_bucket: env::var("AWS_S3_BUCKET_NAME")?,
            sqs_queue_url: env::var("AWS_SQS_FIFO_URL")?,
            sqs_message_group_id: env::var("AWS_SQS_MESSAGE_GROUPID")?,
            sns_topic_arn: env::var("AWS_SNS_TOPIC_ARN")?,
            dynamodb_table: env::var("AWS_DYNAMODB_TABLE_NAME")?,
            lambda_function: env::var("AWS_FUNCTION_NAME")?,
            // 缓存主节点地址，host:port 形式
            redis_host: env::var("AWS_REDIS_HOST")?,
            redis_db: env::var("REDIS_DB")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1),
        })
    }

    /// 按 redis crate 的连接串格式拼出缓存地址
    pub fn redis_url(&self) -> String {
        format!("redis://{}/{}", self.redis_host, self.redis_db)
    }
}
