use simpler_command::{Command, Errors, Invocation, Unimplemented};
use std::collections::HashMap;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default)]
struct Ledger {
    balances: HashMap<String, i64>,
}

#[derive(Debug)]
struct OpenAccount<'a> {
    ledger: &'a mut Ledger,
    account_id: String,
    initial_balance: i64,
}

impl Command for OpenAccount<'_> {
    const NAME: &'static str = "open_account";
    type Output = String;
    type Errors = Errors;

    fn perform(&mut self, errors: &mut Errors) -> Result<String, Unimplemented> {
        if self.ledger.balances.contains_key(&self.account_id) {
            errors.add("base", "Account already opened");
        }
        if self.initial_balance < 0 {
            errors.add("initial_balance", "must not be negative");
        }
        if errors.is_empty() {
            self.ledger
                .balances
                .insert(self.account_id.clone(), self.initial_balance);
        }
        Ok(self.account_id.clone())
    }
}

#[derive(Debug)]
struct Withdraw<'a> {
    ledger: &'a mut Ledger,
    account_id: String,
    amount: i64,
}

impl Command for Withdraw<'_> {
    const NAME: &'static str = "withdraw";
    type Output = i64;
    type Errors = Errors;

    fn perform(&mut self, errors: &mut Errors) -> Result<i64, Unimplemented> {
        if self.amount <= 0 {
            errors.add("amount", "must be positive");
        }
        let Some(balance) = self.ledger.balances.get_mut(&self.account_id) else {
            errors.add("account_id", "is unknown");
            return Ok(0);
        };
        if *balance < self.amount {
            errors.add("base", "Insufficient funds");
        }
        if !errors.is_empty() {
            return Ok(*balance);
        }

        *balance -= self.amount;
        Ok(*balance)
    }
}

#[derive(Debug)]
struct CloseAccount;

// 尚未实现的命令
impl Command for CloseAccount {
    const NAME: &'static str = "close_account";
    type Output = ();
    type Errors = Errors;
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let mut ledger = Ledger::default();

    let opened = OpenAccount {
        ledger: &mut ledger,
        account_id: "acc-1".into(),
        initial_balance: 100,
    }
    .call_strict()?;
    info!(account = %opened, "account opened");

    let reopened = OpenAccount {
        ledger: &mut ledger,
        account_id: "acc-1".into(),
        initial_balance: -5,
    }
    .call()?;
    if reopened.is_failure() {
        let projection = serde_json::to_string(reopened.errors())?;
        info!(errors = %projection, "reopen rejected: {}", reopened.errors());
    }

    let mut withdraw = Invocation::new(Withdraw {
        ledger: &mut ledger,
        account_id: "acc-1".into(),
        amount: 30,
    });
    withdraw.call_with(|balance| info!(balance, "withdrawn"))?;
    // 重复调用不会再次扣款
    withdraw.call()?;

    let overdraft = Withdraw {
        ledger: &mut ledger,
        account_id: "acc-1".into(),
        amount: 500,
    }
    .call()?;
    match overdraft.result() {
        Ok(balance) => info!(?balance, "withdrawn"),
        Err(err) => info!(%err, "withdraw rejected"),
    }

    if let Err(err) = CloseAccount.call() {
        info!(%err, "close account unavailable");
    }

    info!(balances = ?ledger.balances, "final ledger");
    Ok(())
}
