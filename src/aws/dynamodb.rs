use std::collections::HashMap;

use anyhow::Result;
use aws_sdk_dynamodb::types::AttributeValue;

/// 全表扫描，属性到记录的映射由调用方完成
pub async fn scan_table(
    dynamodb: &aws_sdk_dynamodb::Client,
    table: &str,
) -> Result<Vec<HashMap<String, AttributeValue>>> {
    let response = dynamodb.scan().table_name(table).send().await?;
    Ok(response.items().to_vec())
}

/// 写入一条记录
pub async fn put_item(
    dynamodb: &aws_sdk_dynamodb::Client,
    table: &str,
    item: HashMap<String, AttributeValue>,
) -> Result<()> {
    dynamodb
        .put_item()
        .table_name(table)
        .set_item(Some(item))
        .send()
        .await?;

    Ok(())
}
