use serde::{Deserialize, Serialize};

/// 缓存里的一条用户记录，无主键、允许重复
/// 严格模式：出现 name/email 之外的字段时解码直接失败
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserRecord {
    pub name: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_exact_two_field_body() {
        let user: UserRecord =
            serde_json::from_str(r#"{"name":"Ann","email":"a@x.com"}"#).unwrap();
        assert_eq!(user.name, "Ann");
        assert_eq!(user.email, "a@x.com");
    }

    #[test]
    fn rejects_unknown_field() {
        let result =
            serde_json::from_str::<UserRecord>(r#"{"name":"Ann","email":"a@x.com","age":3}"#);
        assert!(result.unwrap_err().to_string().contains("age"));
    }

    #[test]
    fn rejects_missing_field() {
        assert!(serde_json::from_str::<UserRecord>(r#"{"name":"Ann"}"#).is_err());
    }
}
