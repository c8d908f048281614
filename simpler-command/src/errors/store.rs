use crate::errors::ErrorSource;
use crate::string_utils::{SentenceConnectors, humanize};

/// 表示“整体性”错误的字段标识，其消息在全文中不带字段前缀
pub const BASE: &str = "base";

/// 错误存储能力
///
/// 命令在执行期间向其写入 `(字段, 消息)`，执行结束后只读。
/// 默认实现为 [`Errors`](crate::errors::Errors)；对接校验框架时，
/// 可为其错误对象实现本 trait 并通过 `Command::Errors` 替换。
pub trait ErrorStore {
    /// 为字段追加一条消息；同一字段下重复消息应被忽略
    fn add(&mut self, field: impl Into<String>, message: impl Into<String>);

    /// 按字段首次插入顺序、字段内消息首次插入顺序遍历
    fn iter(&self) -> impl Iterator<Item = (&str, &str)>;

    /// 是否从未写入任何消息
    fn is_empty(&self) -> bool;

    /// 合并另一个错误来源中的全部消息（逐条经由 `add`）
    fn add_all<S>(&mut self, source: &S)
    where
        S: ErrorSource + ?Sized,
    {
        source.for_each_error(&mut |field, message| self.add(field, message));
    }

    /// 人类可读的完整消息列表
    fn full_messages(&self) -> Vec<String> {
        self.iter()
            .map(|(field, message)| full_message(field, message))
            .collect()
    }

    /// 将完整消息拼接为一个句子
    fn to_sentence(&self, connectors: &SentenceConnectors) -> String {
        connectors.join(&self.full_messages())
    }
}

/// 单条完整消息：`base` 字段原样输出，其余字段加上人类可读的字段名前缀
pub fn full_message(field: &str, message: &str) -> String {
    if field == BASE {
        message.to_owned()
    } else {
        format!("{} {message}", humanize(field))
    }
}
