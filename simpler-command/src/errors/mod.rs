//! 错误聚合（Errors）
//!
//! 一次命令执行期间累积的 `(字段, 消息)`：
//! - [`Errors`]：默认的有序、去重错误集合；
//! - [`ErrorStore`]：错误存储能力，命令可替换为自定义实现；
//! - [`ErrorSource`]：`add_all` 可接受的错误来源。
//!
mod collection;
mod source;
mod store;

pub use collection::{Errors, Iter};
pub use source::{ErrorSource, Messages};
pub use store::{BASE, ErrorStore, full_message};
