//! 命令层统一错误定义
//!
//! 只区分两类错误：
//! - 逻辑未实现：实现类型从未定义执行逻辑，属于配置错误，首次执行即返回；
//! - 强制解包失败：命令执行后错误集合非空，且调用方显式索取结果。
//!
//! 业务错误本身通过 [`Errors`](crate::errors::Errors) 累积，调用方可以只做
//! `is_failure` 判断而不产生任何 `Err`。
//!
use thiserror::Error;

use crate::errors::ErrorStore;
use crate::string_utils::SentenceConnectors;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("command not implemented: {command}")]
    NotImplemented { command: String },

    #[error("{message}")]
    Failure {
        message: String,
        full_messages: Vec<String>,
    },
}

impl CommandError {
    pub fn not_implemented(command: impl Into<String>) -> Self {
        Self::NotImplemented {
            command: command.into(),
        }
    }

    /// 由错误存储构造强制解包失败，消息为完整消息拼接而成的句子
    pub fn failure<E: ErrorStore>(errors: &E, connectors: &SentenceConnectors) -> Self {
        Self::Failure {
            message: errors.to_sentence(connectors),
            full_messages: errors.full_messages(),
        }
    }

    pub fn is_not_implemented(&self) -> bool {
        matches!(self, Self::NotImplemented { .. })
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }

    /// 失败时的完整消息列表；其他错误返回空切片
    pub fn full_messages(&self) -> &[String] {
        match self {
            Self::Failure { full_messages, .. } => full_messages,
            Self::NotImplemented { .. } => &[],
        }
    }
}

/// 统一 Result 类型别名
pub type CommandResult<T> = Result<T, CommandError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Errors;

    // 测试失败消息为句子拼接
    #[test]
    fn test_failure_message() {
        let mut errors = Errors::new();
        errors.add("base", "All is Broken");
        errors.add("foo", "is not welcome");

        let err = CommandError::failure(&errors, &SentenceConnectors::default());
        assert!(err.is_failure());
        assert!(!err.is_not_implemented());
        assert_eq!(err.to_string(), "All is Broken and Foo is not welcome");
        assert_eq!(err.full_messages(), ["All is Broken", "Foo is not welcome"]);
    }

    // 测试未实现错误
    #[test]
    fn test_not_implemented_message() {
        let err = CommandError::not_implemented("incomplete");
        assert!(err.is_not_implemented());
        assert_eq!(err.to_string(), "command not implemented: incomplete");
        assert!(err.full_messages().is_empty());
    }
}
