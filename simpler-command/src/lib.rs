//! 命令对象基础库（simpler-command）
//!
//! 一个命令是一次性的执行单元：构造时捕获参数，执行时最多运行一次逻辑，
//! 通过结构化的错误集合报告预期内的失败，而不是提前返回 `Err`：
//! - 命令（`command`）：实现类型提供 `perform` 逻辑；
//! - 调用（`invocation`）：`Pending → Resolved` 生命周期、成功/失败判断与结果解包；
//! - 闭包命令（`fn_command`）：以参数加闭包直接构造命令；
//! - 错误集合（`errors`）：有序、去重的 `(字段, 消息)` 多值映射及其可读化输出；
//! - 统一错误（`error`）：逻辑未实现与强制解包失败两类。
//!
//! 典型用法：
//! 1. 为命令类型实现 `Command`，在 `perform` 中返回结果或向 `errors` 写入消息；
//! 2. 使用 `call` 得到 `Invocation`，以 `is_success`/`is_failure` 分支处理；
//! 3. 或使用 `call_strict` 直接取得结果，失败时得到 `CommandError::Failure`。
//!
pub mod command;
pub mod error;
pub mod errors;
pub mod fn_command;
pub mod invocation;
pub mod string_utils;

pub use command::{Command, Unimplemented};
pub use error::{CommandError, CommandResult};
pub use errors::{BASE, ErrorSource, ErrorStore, Errors};
pub use fn_command::FnCommand;
pub use invocation::Invocation;
