//! 命令（Command）抽象
//!
//! 一个命令是一次有界的执行单元：构造时携带参数，执行时最多运行一次逻辑，
//! 预期内的失败写入错误存储而不是提前返回 `Err`。
//!
use crate::error::{CommandError, CommandResult};
use crate::errors::ErrorStore;
use crate::invocation::{Invocation, perform_once};
use crate::string_utils::SentenceConnectors;

/// 命令未定义执行逻辑
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unimplemented;

/// 命令接口
///
/// 实现类型的字段即构造参数；`perform` 是唯一需要提供的逻辑。
///
/// ```
/// use simpler_command::{Command, Errors, Unimplemented};
///
/// struct Add {
///     a: i32,
///     b: i32,
/// }
///
/// impl Command for Add {
///     const NAME: &'static str = "add";
///     type Output = i32;
///     type Errors = Errors;
///
///     fn perform(&mut self, _errors: &mut Errors) -> Result<i32, Unimplemented> {
///         Ok(self.a + self.b)
///     }
/// }
///
/// let add = Add { a: 2, b: 3 }.call().unwrap();
/// assert!(add.is_success());
/// assert_eq!(add.result().unwrap(), Some(&5));
/// assert_eq!(Add { a: 2, b: 3 }.call_strict().unwrap(), 5);
/// ```
pub trait Command: Sized {
    /// 命令的稳定名称，用于日志与错误信息
    const NAME: &'static str;

    /// 逻辑的返回值
    type Output;

    /// 错误存储，通常为 [`Errors`](crate::errors::Errors)
    type Errors: ErrorStore + Default;

    /// 执行逻辑
    ///
    /// 预期内的失败应写入 `errors`；默认实现表示逻辑未定义，
    /// 首次执行时会得到 [`CommandError::NotImplemented`]。
    fn perform(&mut self, _errors: &mut Self::Errors) -> Result<Self::Output, Unimplemented> {
        Err(Unimplemented)
    }

    fn name(&self) -> &str {
        Self::NAME
    }

    /// 失败句子的连接词
    fn connectors(&self) -> SentenceConnectors {
        SentenceConnectors::default()
    }

    /// 构造并立即执行，返回已完成的调用
    fn call(self) -> CommandResult<Invocation<Self>> {
        let mut invocation = Invocation::new(self);
        invocation.call()?;
        Ok(invocation)
    }

    /// 构造并执行，随后以结果调用 `f`；命令失败时返回失败且不调用 `f`
    fn call_with<F>(self, f: F) -> CommandResult<Invocation<Self>>
    where
        F: FnOnce(&Self::Output),
    {
        let mut invocation = Invocation::new(self);
        invocation.call_with(f)?;
        Ok(invocation)
    }

    /// 构造、执行并直接解包结果
    fn call_strict(mut self) -> CommandResult<Self::Output> {
        let mut errors = Self::Errors::default();
        let output = perform_once(&mut self, &mut errors)?;

        if errors.is_empty() {
            Ok(output)
        } else {
            Err(CommandError::failure(&errors, &self.connectors()))
        }
    }
}
