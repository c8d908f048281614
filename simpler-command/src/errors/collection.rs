use std::fmt;
use std::ops::Index;

use crate::errors::{ErrorSource, ErrorStore, full_message};
use crate::string_utils::to_sentence;

/// 默认的错误集合
///
/// 字段到消息列表的有序映射：
/// - 字段按首次写入顺序排列；
/// - 同一字段下消息去重（精确字符串相等），保留首次出现的顺序；
/// - 为空当且仅当从未写入过消息。
///
/// ```
/// use simpler_command::errors::Errors;
///
/// let mut errors = Errors::new();
/// errors.add("foo", "is not working");
/// errors.add("bar", "is not suitable");
/// errors.add("foo", "is not working");
///
/// assert_eq!(errors["foo"], ["is not working"]);
/// assert_eq!(errors.full_messages(), ["Foo is not working", "Bar is not suitable"]);
/// assert_eq!(errors.to_string(), "Foo is not working and Bar is not suitable");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Errors {
    entries: Vec<(String, Vec<String>)>,
}

impl Errors {
    pub fn new() -> Self {
        Self::default()
    }

    /// 为字段追加一条消息，重复消息忽略
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        let field = field.into();
        let message = message.into();

        match self.entries.iter_mut().find(|(name, _)| *name == field) {
            Some((_, messages)) => {
                if !messages.contains(&message) {
                    messages.push(message);
                }
            }
            None => self.entries.push((field, vec![message])),
        }
    }

    /// 合并另一个错误来源（`Errors`、映射、键值对列表等）
    pub fn add_all<S>(&mut self, source: &S)
    where
        S: ErrorSource + ?Sized,
    {
        source.for_each_error(&mut |field, message| self.add(field, message));
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, messages)| messages.as_slice())
    }

    /// 字段下的消息；字段不存在时返回空切片
    pub fn messages(&self, field: &str) -> &[String] {
        self.get(field).unwrap_or_default()
    }

    pub fn contains_key(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(field, _)| field.as_str())
    }

    /// 消息总数（跨全部字段）
    pub fn len(&self) -> usize {
        self.entries.iter().map(|(_, messages)| messages.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            entries: self.entries.iter(),
            current: None,
        }
    }

    pub fn full_messages(&self) -> Vec<String> {
        self.iter()
            .map(|(field, message)| full_message(field, message))
            .collect()
    }

    /// 指定字段的完整消息
    pub fn full_messages_for(&self, field: &str) -> Vec<String> {
        self.messages(field)
            .iter()
            .map(|message| full_message(field, message))
            .collect()
    }

    /// 有序的 `(字段, 消息列表)` 投影，供外部格式化层使用
    pub fn entries(&self) -> &[(String, Vec<String>)] {
        &self.entries
    }

    /// 投影为 JSON 对象（保持字段顺序）
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> serde_json::Value {
        let map = self
            .entries
            .iter()
            .map(|(field, messages)| (field.clone(), serde_json::Value::from(messages.clone())))
            .collect::<serde_json::Map<_, _>>();
        serde_json::Value::Object(map)
    }
}

impl ErrorStore for Errors {
    fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        Errors::add(self, field, message)
    }

    fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        Errors::iter(self)
    }

    fn is_empty(&self) -> bool {
        Errors::is_empty(self)
    }
}

impl ErrorSource for Errors {
    fn for_each_error(&self, f: &mut dyn FnMut(&str, &str)) {
        for (field, message) in self {
            f(field, message)
        }
    }
}

impl Index<&str> for Errors {
    type Output = [String];

    fn index(&self, field: &str) -> &Self::Output {
        self.messages(field)
    }
}

impl fmt::Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_sentence(&self.full_messages()))
    }
}

impl<K, M> FromIterator<(K, M)> for Errors
where
    K: Into<String>,
    M: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, M)>>(iter: I) -> Self {
        let mut errors = Errors::new();
        errors.extend(iter);
        errors
    }
}

impl<K, M> Extend<(K, M)> for Errors
where
    K: Into<String>,
    M: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, M)>>(&mut self, iter: I) {
        for (field, message) in iter {
            self.add(field, message);
        }
    }
}

impl<'a> IntoIterator for &'a Errors {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Errors {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (field, messages) in &self.entries {
            map.serialize_entry(field, messages)?;
        }
        map.end()
    }
}

/// `(字段, 消息)` 迭代器
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    entries: std::slice::Iter<'a, (String, Vec<String>)>,
    current: Option<(&'a str, std::slice::Iter<'a, String>)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((field, messages)) = self.current.as_mut()
                && let Some(message) = messages.next()
            {
                return Some((*field, message.as_str()));
            }

            let (field, messages) = self.entries.next()?;
            self.current = Some((field.as_str(), messages.iter()));
        }
    }
}
