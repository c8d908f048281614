//! 可合并的错误来源
//!
//! `add_all` 只要求来源能逐条给出 `(字段, 消息)`；映射的值既可以是单条消息，
//! 也可以是消息列表。外部校验框架的错误结构实现 [`ErrorSource`] 后即可合并。
//!
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

/// 能够逐条给出 `(字段, 消息)` 的错误来源
pub trait ErrorSource {
    fn for_each_error(&self, f: &mut dyn FnMut(&str, &str));
}

/// 单条消息或消息列表
pub trait Messages {
    fn for_each_message(&self, f: &mut dyn FnMut(&str));
}

impl Messages for str {
    fn for_each_message(&self, f: &mut dyn FnMut(&str)) {
        f(self)
    }
}

impl Messages for String {
    fn for_each_message(&self, f: &mut dyn FnMut(&str)) {
        f(self)
    }
}

impl Messages for Cow<'_, str> {
    fn for_each_message(&self, f: &mut dyn FnMut(&str)) {
        f(self)
    }
}

impl<T: Messages + ?Sized> Messages for &T {
    fn for_each_message(&self, f: &mut dyn FnMut(&str)) {
        (**self).for_each_message(f)
    }
}

impl<T: Messages> Messages for Option<T> {
    fn for_each_message(&self, f: &mut dyn FnMut(&str)) {
        if let Some(messages) = self {
            messages.for_each_message(f)
        }
    }
}

impl<T: Messages> Messages for [T] {
    fn for_each_message(&self, f: &mut dyn FnMut(&str)) {
        for messages in self {
            messages.for_each_message(f)
        }
    }
}

impl<T: Messages, const N: usize> Messages for [T; N] {
    fn for_each_message(&self, f: &mut dyn FnMut(&str)) {
        self.as_slice().for_each_message(f)
    }
}

impl<T: Messages> Messages for Vec<T> {
    fn for_each_message(&self, f: &mut dyn FnMut(&str)) {
        self.as_slice().for_each_message(f)
    }
}

#[cfg(feature = "serde")]
impl Messages for serde_json::Value {
    fn for_each_message(&self, f: &mut dyn FnMut(&str)) {
        use serde_json::Value;

        match self {
            Value::Null => {}
            Value::String(message) => f(message),
            Value::Array(items) => items.as_slice().for_each_message(f),
            other => f(&other.to_string()),
        }
    }
}

impl<T: ErrorSource + ?Sized> ErrorSource for &T {
    fn for_each_error(&self, f: &mut dyn FnMut(&str, &str)) {
        (**self).for_each_error(f)
    }
}

// HashMap 的遍历顺序不确定；需要稳定顺序时请使用 BTreeMap 或有序的键值对列表
impl<K, V, S> ErrorSource for HashMap<K, V, S>
where
    K: AsRef<str>,
    V: Messages,
{
    fn for_each_error(&self, f: &mut dyn FnMut(&str, &str)) {
        for (field, messages) in self {
            messages.for_each_message(&mut |message| f(field.as_ref(), message));
        }
    }
}

impl<K, V> ErrorSource for BTreeMap<K, V>
where
    K: AsRef<str>,
    V: Messages,
{
    fn for_each_error(&self, f: &mut dyn FnMut(&str, &str)) {
        for (field, messages) in self {
            messages.for_each_message(&mut |message| f(field.as_ref(), message));
        }
    }
}

impl<K, V> ErrorSource for [(K, V)]
where
    K: AsRef<str>,
    V: Messages,
{
    fn for_each_error(&self, f: &mut dyn FnMut(&str, &str)) {
        for (field, messages) in self {
            messages.for_each_message(&mut |message| f(field.as_ref(), message));
        }
    }
}

impl<K, V, const N: usize> ErrorSource for [(K, V); N]
where
    K: AsRef<str>,
    V: Messages,
{
    fn for_each_error(&self, f: &mut dyn FnMut(&str, &str)) {
        self.as_slice().for_each_error(f)
    }
}

impl<K, V> ErrorSource for Vec<(K, V)>
where
    K: AsRef<str>,
    V: Messages,
{
    fn for_each_error(&self, f: &mut dyn FnMut(&str, &str)) {
        self.as_slice().for_each_error(f)
    }
}

#[cfg(feature = "serde")]
impl ErrorSource for serde_json::Map<String, serde_json::Value> {
    fn for_each_error(&self, f: &mut dyn FnMut(&str, &str)) {
        for (field, messages) in self {
            messages.for_each_message(&mut |message| f(field, message));
        }
    }
}

// 非对象的 JSON 值不含任何字段
#[cfg(feature = "serde")]
impl ErrorSource for serde_json::Value {
    fn for_each_error(&self, f: &mut dyn FnMut(&str, &str)) {
        if let serde_json::Value::Object(map) = self {
            map.for_each_error(f)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect<S: ErrorSource + ?Sized>(source: &S) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        source.for_each_error(&mut |field, message| {
            pairs.push((field.to_owned(), message.to_owned()))
        });
        pairs
    }

    // 测试单条消息与消息列表混用
    #[test]
    fn test_single_and_list_values() {
        let single = [("foo", "is broken")];
        let list = [("bar", vec!["is slow", "is late"])];

        assert_eq!(
            collect(&single),
            vec![("foo".to_owned(), "is broken".to_owned())]
        );
        assert_eq!(
            collect(&list),
            vec![
                ("bar".to_owned(), "is slow".to_owned()),
                ("bar".to_owned(), "is late".to_owned()),
            ]
        );
    }

    // 测试 BTreeMap 按键有序遍历
    #[test]
    fn test_btree_map_source() {
        let mut map = BTreeMap::new();
        map.insert("zeta".to_owned(), vec!["is last".to_owned()]);
        map.insert("alpha".to_owned(), vec!["is first".to_owned()]);

        let pairs = collect(&map);
        assert_eq!(pairs[0].0, "alpha");
        assert_eq!(pairs[1].0, "zeta");
    }

    // 测试 None 值不产生任何消息
    #[test]
    fn test_option_values() {
        let source: Vec<(&str, Option<&str>)> = vec![("foo", None), ("bar", Some("is set"))];
        assert_eq!(
            collect(&source),
            vec![("bar".to_owned(), "is set".to_owned())]
        );
    }

    // 测试 JSON 对象作为错误来源
    #[cfg(feature = "serde")]
    #[test]
    fn test_json_source() {
        let value = serde_json::json!({
            "foo": "is broken",
            "bar": ["is slow", "is late"],
            "baz": null,
        });

        assert_eq!(
            collect(&value),
            vec![
                ("foo".to_owned(), "is broken".to_owned()),
                ("bar".to_owned(), "is slow".to_owned()),
                ("bar".to_owned(), "is late".to_owned()),
            ]
        );
        assert!(collect(&serde_json::json!("not an object")).is_empty());
    }
}
