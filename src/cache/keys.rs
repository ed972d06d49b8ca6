/// 用户列表使用的固定缓存键
const USER_LIST_KEY: &str = "user";

/// 生成用户列表缓存键
pub fn user_list_key() -> &'static str {
    USER_LIST_KEY
}
