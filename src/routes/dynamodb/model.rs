use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use serde::{Deserialize, Serialize};

/// 表里的一条用户记录
/// 严格模式：请求体出现未知字段时解码失败
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableUser {
    pub name: String,
    pub email: String,
}

impl TableUser {
    /// 从扫描结果的属性映射还原记录，缺属性或类型不符时返回 None
    pub fn from_item(item: &HashMap<String, AttributeValue>) -> Option<Self> {
        Some(Self {
            name: item.get("name")?.as_s().ok()?.clone(),
            email: item.get("email")?.as_s().ok()?.clone(),
        })
    }

    /// 转成 PutItem 需要的属性映射
    pub fn into_item(self) -> HashMap<String, AttributeValue> {
        HashMap::from([
            ("name".to_string(), AttributeValue::S(self.name)),
            ("email".to_string(), AttributeValue::S(self.email)),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_round_trips() {
        let user = TableUser {
            name: "Ann".to_string(),
            email: "a@x.com".to_string(),
        };

        let restored = TableUser::from_item(&user.clone().into_item()).unwrap();
        assert_eq!(restored, user);
    }

    #[test]
    fn missing_attribute_maps_to_none() {
        let item = HashMap::from([(
            "name".to_string(),
            AttributeValue::S("Ann".to_string()),
        )]);

        assert!(TableUser::from_item(&item).is_none());
    }

    #[test]
    fn non_string_attribute_maps_to_none() {
        let item = HashMap::from([
            ("name".to_string(), AttributeValue::S("Ann".to_string())),
            ("email".to_string(), AttributeValue::N("42".to_string())),
        ]);

        assert!(TableUser::from_item(&item).is_none());
    }
}
