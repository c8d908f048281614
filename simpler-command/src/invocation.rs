//! 命令调用的生命周期
//!
//! `Pending → Resolved` 两态：首次 `call` 运行逻辑并进入终态，
//! 此后的 `call` 均为无操作。失败与否完全由错误存储是否为空推导。
//!
use std::fmt;

use tracing::{debug, trace, warn};

use crate::command::{Command, Unimplemented};
use crate::error::{CommandError, CommandResult};
use crate::errors::ErrorStore;

#[derive(Debug, Clone, PartialEq, Eq)]
enum CallState<T> {
    Pending,
    // 逻辑已开始但未正常返回（panic）
    Running,
    Resolved(T),
}

/// 一次命令调用及其结果
///
/// 逻辑最多运行一次，由 `call` 的 `&mut self` 接收者保证；
/// 跨线程共享时需由调用方自行加锁。
pub struct Invocation<C: Command> {
    command: C,
    state: CallState<C::Output>,
    errors: C::Errors,
}

impl<C: Command> Invocation<C> {
    pub fn new(command: C) -> Self {
        Self {
            command,
            state: CallState::Pending,
            errors: C::Errors::default(),
        }
    }

    /// 执行命令；已完成时直接返回
    ///
    /// 逻辑执行前即记录本次尝试：若逻辑 panic 且调用方恢复，
    /// 之后的 `call` 不会再次运行逻辑。仅“未实现”会退回待执行状态。
    pub fn call(&mut self) -> CommandResult<&mut Self> {
        match self.state {
            CallState::Resolved(_) => {
                trace!(command = self.command.name(), "command already resolved");
                return Ok(self);
            }
            CallState::Running => {
                warn!(
                    command = self.command.name(),
                    "command panicked during a previous call, not running again"
                );
                return Ok(self);
            }
            CallState::Pending => {}
        }

        self.state = CallState::Running;
        match perform_once(&mut self.command, &mut self.errors) {
            Ok(output) => {
                self.state = CallState::Resolved(output);
                Ok(self)
            }
            Err(err) => {
                self.state = CallState::Pending;
                Err(err)
            }
        }
    }

    /// 执行命令后以结果调用 `f`
    ///
    /// `f` 接收的是 [`result`](Self::result) 的值，因此命令失败时返回
    /// [`CommandError::Failure`] 且不会调用 `f`。
    pub fn call_with<F>(&mut self, f: F) -> CommandResult<&mut Self>
    where
        F: FnOnce(&C::Output),
    {
        self.call()?;
        if let Some(output) = self.result()? {
            f(output);
        }
        Ok(self)
    }

    pub fn is_called(&self) -> bool {
        matches!(self.state, CallState::Resolved(_))
    }

    /// 逻辑曾经开始执行但未正常返回
    pub fn is_poisoned(&self) -> bool {
        matches!(self.state, CallState::Running)
    }

    pub fn is_success(&self) -> bool {
        self.is_called() && self.errors.is_empty()
    }

    pub fn is_successful(&self) -> bool {
        self.is_success()
    }

    pub fn is_failure(&self) -> bool {
        self.is_called() && !self.errors.is_empty()
    }

    /// 执行结果
    ///
    /// - 失败：`Err(CommandError::Failure)`；
    /// - 尚未执行：`Ok(None)`；
    /// - 成功：`Ok(Some(output))`。
    pub fn result(&self) -> CommandResult<Option<&C::Output>> {
        if self.is_failure() {
            return Err(self.failure());
        }

        match &self.state {
            CallState::Pending | CallState::Running => Ok(None),
            CallState::Resolved(output) => Ok(Some(output)),
        }
    }

    /// 与 [`result`](Self::result) 相同，但取得结果的所有权
    pub fn into_result(self) -> CommandResult<Option<C::Output>> {
        if self.is_failure() {
            return Err(self.failure());
        }

        match self.state {
            CallState::Pending | CallState::Running => Ok(None),
            CallState::Resolved(output) => Ok(Some(output)),
        }
    }

    pub fn errors(&self) -> &C::Errors {
        &self.errors
    }

    pub fn command(&self) -> &C {
        &self.command
    }

    pub fn into_command(self) -> C {
        self.command
    }

    fn failure(&self) -> CommandError {
        CommandError::failure(&self.errors, &self.command.connectors())
    }
}

impl<C> fmt::Debug for Invocation<C>
where
    C: Command + fmt::Debug,
    C::Output: fmt::Debug,
    C::Errors: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Invocation")
            .field("command", &self.command)
            .field("state", &self.state)
            .field("errors", &self.errors)
            .finish()
    }
}

/// 运行一次命令逻辑，并将“未实现”转换为配置错误
pub(crate) fn perform_once<C: Command>(
    command: &mut C,
    errors: &mut C::Errors,
) -> CommandResult<C::Output> {
    match command.perform(errors) {
        Ok(output) => {
            if errors.is_empty() {
                debug!(command = command.name(), "command resolved");
            } else {
                debug!(
                    command = command.name(),
                    errors = errors.iter().count(),
                    "command resolved with errors"
                );
            }
            Ok(output)
        }
        Err(Unimplemented) => {
            warn!(command = command.name(), "command has no logic to perform");
            Err(CommandError::not_implemented(command.name()))
        }
    }
}
