//! 人类可读字符串工具
//!
//! 仅用于拼装面向人的提示文本（错误全文、失败句子），不应参与业务判断。
//!
use bon::Builder;

/// 将字段标识转换为人类可读的标签
///
/// 下划线与点（嵌套属性，如 `address.street`）替换为空格，仅首字母大写，
/// 不处理缩写词。
///
/// ```
/// use simpler_command::string_utils::humanize;
///
/// assert_eq!(humanize("foo_bar_baz"), "Foo bar baz");
/// assert_eq!(humanize("address.street"), "Address street");
/// ```
pub fn humanize(field: &str) -> String {
    let spaced = field.replace(['.', '_'], " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// 句子拼接所用的连接词
///
/// 默认值与常见英文列表写法一致：`a`、`a and b`、`a, b, and c`。
///
/// ```
/// use simpler_command::string_utils::SentenceConnectors;
///
/// let connectors = SentenceConnectors::builder()
///     .last_word_connector(" or ")
///     .build();
/// assert_eq!(connectors.join(&["red", "green", "blue"]), "red, green or blue");
/// ```
#[derive(Builder, Debug, Clone, PartialEq, Eq)]
pub struct SentenceConnectors {
    /// 三项及以上时，除最后一项外的分隔符
    #[builder(into, default = ", ".to_owned())]
    words_connector: String,
    /// 恰好两项时的分隔符
    #[builder(into, default = " and ".to_owned())]
    two_words_connector: String,
    /// 三项及以上时，最后一项之前的分隔符
    #[builder(into, default = ", and ".to_owned())]
    last_word_connector: String,
}

impl Default for SentenceConnectors {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl SentenceConnectors {
    pub fn words_connector(&self) -> &str {
        &self.words_connector
    }

    pub fn two_words_connector(&self) -> &str {
        &self.two_words_connector
    }

    pub fn last_word_connector(&self) -> &str {
        &self.last_word_connector
    }

    /// 将若干条文本拼接为一个句子
    pub fn join<S: AsRef<str>>(&self, items: &[S]) -> String {
        match items {
            [] => String::new(),
            [only] => only.as_ref().to_owned(),
            [first, second] => {
                format!(
                    "{}{}{}",
                    first.as_ref(),
                    self.two_words_connector,
                    second.as_ref()
                )
            }
            [init @ .., last] => {
                let head = init
                    .iter()
                    .map(AsRef::as_ref)
                    .collect::<Vec<_>>()
                    .join(&self.words_connector);
                format!("{head}{}{}", self.last_word_connector, last.as_ref())
            }
        }
    }
}

/// 使用默认连接词拼接句子
pub fn to_sentence<S: AsRef<str>>(items: &[S]) -> String {
    SentenceConnectors::default().join(items)
}
