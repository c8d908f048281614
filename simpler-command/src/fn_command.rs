//! 基于闭包的命令
//!
//! 不必为一次性逻辑单独定义类型：参数与闭包一起构造即可获得完整的命令语义。
//!
use std::borrow::Cow;
use std::fmt;

use crate::command::{Command, Unimplemented};
use crate::errors::{ErrorStore, Errors};

const DEFAULT_NAME: &str = "fn_command";

type Logic<A, T, E> = Box<dyn FnOnce(&mut A, &mut E) -> T>;

/// 由参数与逻辑闭包组成的命令
///
/// ```
/// use simpler_command::{Command, FnCommand};
///
/// let divide = FnCommand::new((7, 0), |(a, b), errors| {
///     if *b == 0 {
///         errors.add("b", "must not be zero");
///         return 0;
///     }
///     *a / *b
/// })
/// .named("divide")
/// .call()
/// .unwrap();
///
/// assert!(divide.is_failure());
/// assert_eq!(divide.result().unwrap_err().to_string(), "B must not be zero");
/// ```
pub struct FnCommand<A, T, E = Errors> {
    name: Cow<'static, str>,
    args: A,
    logic: Option<Logic<A, T, E>>,
}

impl<A, T> FnCommand<A, T> {
    pub fn new<F>(args: A, logic: F) -> Self
    where
        F: FnOnce(&mut A, &mut Errors) -> T + 'static,
    {
        Self::with_store(args, logic)
    }

    /// 仅携带参数、未定义逻辑的命令；执行时返回未实现错误
    pub fn without_logic(args: A) -> Self {
        Self {
            name: Cow::Borrowed(DEFAULT_NAME),
            args,
            logic: None,
        }
    }
}

impl<A, T, E> FnCommand<A, T, E> {
    /// 使用自定义错误存储构造
    pub fn with_store<F>(args: A, logic: F) -> Self
    where
        F: FnOnce(&mut A, &mut E) -> T + 'static,
    {
        Self {
            name: Cow::Borrowed(DEFAULT_NAME),
            args,
            logic: Some(Box::new(logic)),
        }
    }

    /// 设置日志与错误信息中使用的名称
    pub fn named(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = name.into();
        self
    }

    pub fn args(&self) -> &A {
        &self.args
    }

    pub fn into_args(self) -> A {
        self.args
    }
}

impl<A, T, E> Command for FnCommand<A, T, E>
where
    E: ErrorStore + Default,
{
    const NAME: &'static str = DEFAULT_NAME;
    type Output = T;
    type Errors = E;

    fn perform(&mut self, errors: &mut E) -> Result<T, Unimplemented> {
        let logic = self.logic.take().ok_or(Unimplemented)?;
        Ok(logic(&mut self.args, errors))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<A: fmt::Debug, T, E> fmt::Debug for FnCommand<A, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnCommand")
            .field("name", &self.name)
            .field("args", &self.args)
            .field("has_logic", &self.logic.is_some())
            .finish()
    }
}
