// 缓存模块
// 用户列表在单个字符串键上的编码与读写

pub mod keys;
pub mod models;
pub mod operations;

// 重新导出常用类型和函数，方便其他模块使用
pub use models::UserRecord;
pub use operations::UserListOperations;
