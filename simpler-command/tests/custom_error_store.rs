use anyhow::Result as AnyResult;
use simpler_command::string_utils::SentenceConnectors;
use simpler_command::{Command, ErrorSource, ErrorStore, Errors, Unimplemented};

/// 外部校验框架中的单条错误
#[derive(Debug, Clone, PartialEq)]
struct ValidationError {
    field: String,
    message: String,
}

/// 外部校验框架的错误报告：按写入顺序平铺存放
#[derive(Debug, Default)]
struct ValidationReport {
    errors: Vec<ValidationError>,
}

impl ErrorStore for ValidationReport {
    fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        let error = ValidationError {
            field: field.into(),
            message: message.into(),
        };
        if !self.errors.contains(&error) {
            self.errors.push(error);
        }
    }

    // 以字段首次出现的顺序分组输出
    fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        let mut fields: Vec<&str> = Vec::new();
        for error in &self.errors {
            if !fields.contains(&error.field.as_str()) {
                fields.push(&error.field);
            }
        }

        fields.into_iter().flat_map(move |field| {
            self.errors
                .iter()
                .filter(move |error| error.field == field)
                .map(|error| (error.field.as_str(), error.message.as_str()))
        })
    }

    fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl ErrorSource for ValidationReport {
    fn for_each_error(&self, f: &mut dyn FnMut(&str, &str)) {
        for (field, message) in ErrorStore::iter(self) {
            f(field, message)
        }
    }
}

struct RegisterUser {
    email: String,
    password: String,
}

impl Command for RegisterUser {
    const NAME: &'static str = "register_user";
    type Output = String;
    type Errors = ValidationReport;

    fn perform(&mut self, errors: &mut ValidationReport) -> Result<String, Unimplemented> {
        if !self.email.contains('@') {
            errors.add("email", "is invalid");
            errors.add("email", "is invalid");
        }
        if self.password.len() < 8 {
            errors.add("password", "is too short");
        }
        if self.password == self.email {
            errors.add("base", "Password must differ from email");
        }
        Ok(self.email.to_lowercase())
    }

    fn connectors(&self) -> SentenceConnectors {
        SentenceConnectors::builder().last_word_connector(" and ").build()
    }
}

// 自定义错误存储可替换默认实现
#[test]
fn custom_store_reports_failure() -> AnyResult<()> {
    let command = RegisterUser {
        email: "nobody".into(),
        password: "nobody".into(),
    }
    .call()?;

    assert!(command.is_failure());
    assert_eq!(command.errors().errors.len(), 3);
    assert_eq!(
        command.errors().full_messages(),
        [
            "Email is invalid",
            "Password is too short",
            "Password must differ from email",
        ]
    );
    assert_eq!(
        command.result().unwrap_err().to_string(),
        "Email is invalid, Password is too short and Password must differ from email"
    );
    Ok(())
}

// 自定义错误存储在成功时保持为空
#[test]
fn custom_store_success() -> AnyResult<()> {
    let command = RegisterUser {
        email: "Someone@Example.com".into(),
        password: "correct horse battery".into(),
    }
    .call()?;

    assert!(command.is_success());
    assert!(ErrorStore::is_empty(command.errors()));
    assert_eq!(command.into_result()?.as_deref(), Some("someone@example.com"));
    Ok(())
}

// 外部错误结构可以合并进默认集合
#[test]
fn default_errors_merge_custom_store() {
    let mut report = ValidationReport::default();
    report.add("password", "is too short");
    report.add("email", "is invalid");
    report.add("password", "is too common");

    let mut errors = Errors::new();
    errors.add("email", "is invalid");
    errors.add_all(&report);

    assert_eq!(errors.fields().collect::<Vec<_>>(), ["email", "password"]);
    assert_eq!(errors["email"], ["is invalid"]);
    assert_eq!(errors["password"], ["is too short", "is too common"]);
}

// add_all 等价于逐条 add
#[test]
fn add_all_is_equivalent_to_replaying_add() {
    let mut source = Errors::new();
    source.add("foo", "is broken");
    source.add("bar", "is late");
    source.add("foo", "is slow");

    let mut merged = Errors::new();
    merged.add("bar", "is late");
    merged.add("baz", "is missing");
    let mut replayed = merged.clone();

    merged.add_all(&source);
    for (field, message) in &source {
        replayed.add(field, message);
    }

    assert_eq!(merged, replayed);
    assert_eq!(
        merged.iter().collect::<Vec<_>>(),
        [
            ("bar", "is late"),
            ("baz", "is missing"),
            ("foo", "is broken"),
            ("foo", "is slow"),
        ]
    );
}
