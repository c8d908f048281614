//! 命令对象使用示例
//!
//! 展示成功、失败、续体与严格调用几种典型路径，以及错误集合的 JSON 投影。
//!
//! 运行示例：
//! ```bash
//! cargo run -p simpler-command --example publish_article
//! ```

use simpler_command::{Command, CommandResult, Errors, FnCommand, Unimplemented};

#[derive(Debug, Clone)]
struct Article {
    title: String,
    body: String,
    published: bool,
}

#[derive(Debug)]
struct PublishArticle {
    article: Article,
}

impl Command for PublishArticle {
    const NAME: &'static str = "publish_article";
    type Output = Article;
    type Errors = Errors;

    fn perform(&mut self, errors: &mut Errors) -> Result<Article, Unimplemented> {
        if self.article.published {
            errors.add("base", "Article is already published");
        }
        if self.article.title.trim().is_empty() {
            errors.add("title", "can't be blank");
        }
        if self.article.body.len() < 20 {
            errors.add("body", "is too short");
        }

        let mut article = self.article.clone();
        article.published = true;
        Ok(article)
    }
}

fn main() -> CommandResult<()> {
    println!("=== 命令对象使用示例 ===\n");

    // 1. 成功路径
    println!("1. 发布一篇合格的文章");
    let draft = Article {
        title: "Command objects".into(),
        body: "A single-call unit of work with structured errors.".into(),
        published: false,
    };
    let published = PublishArticle { article: draft }.call()?;
    println!("   成功: {}", published.is_success());
    if let Some(article) = published.result()? {
        println!("   已发布: {} ({})\n", article.title, article.published);
    }

    // 2. 失败路径：分支处理而不产生错误
    println!("2. 发布一篇不合格的文章");
    let broken = Article {
        title: " ".into(),
        body: "Too short".into(),
        published: true,
    };
    let failed = PublishArticle { article: broken }.call()?;
    println!("   失败: {}", failed.is_failure());
    for message in failed.errors().full_messages() {
        println!("   - {message}");
    }
    println!("   JSON: {}", failed.errors().to_json());
    if let Err(err) = failed.result() {
        println!("   强制解包: {err}\n");
    }

    // 3. 续体
    println!("3. 以续体接收结果");
    FnCommand::new((1, 3), |(a, b), _errors| *a + *b)
        .named("sum")
        .call_with(|sum| println!("   1 + 3 = {sum}\n"))?;

    // 4. 严格调用
    println!("4. 严格调用");
    let total = FnCommand::new(vec![2, 3, 5], |numbers, _errors| numbers.iter().sum::<i32>())
        .call_strict()?;
    println!("   合计: {total}");

    let refund = FnCommand::new(-1, |amount, errors| {
        if *amount < 0 {
            errors.add("amount", "must be positive");
        }
        *amount
    })
    .call_strict();
    if let Err(err) = refund {
        println!("   失败: {err}");
    }

    Ok(())
}
