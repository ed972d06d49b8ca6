// AWS 客户端模块
// 每个托管服务一个操作文件，客户端在进程启动时统一构建

use aws_config::{BehaviorVersion, Region};

pub mod dynamodb;
pub mod lambda;
pub mod s3;
pub mod sns;
pub mod sqs;

#[derive(Clone)]
pub struct AwsClients {
    pub s3: aws_sdk_s3::Client,
    pub sqs: aws_sdk_sqs::Client,
    pub sns: aws_sdk_sns::Client,
    pub dynamodb: aws_sdk_dynamodb::Client,
    pub lambda: aws_sdk_lambda::Client,
}

impl AwsClients {
    /// 加载一份共享 SDK 配置并构建全部服务客户端
    /// 凭证走环境里的默认链，Pod 上即 IRSA 注入的 web identity token
    pub async fn from_env(region: &str) -> Self {
        let shared = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .load()
            .await;

        Self {
            s3: aws_sdk_s3::Client::new(&shared),
            sqs: aws_sdk_sqs::Client::new(&shared),
            sns: aws_sdk_sns::Client::new(&shared),
            dynamodb: aws_sdk_dynamodb::Client::new(&shared),
            lambda: aws_sdk_lambda::Client::new(&shared),
        }
    }
}
