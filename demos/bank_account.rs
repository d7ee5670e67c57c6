//! Bank Account
//!
//! This example walks a bank account through its states.
//!
//! Key concepts:
//! - States own their event handlers (open, held, closed)
//! - The machine exposes every event, whatever the current state
//! - Events the current state does not handle are ignored with a warning
//! - Transitions switch state only after their action succeeds
//!
//! Run with: cargo run --example bank_account
//! Set RUST_LOG=statesmith=debug for construction diagnostics.

use statesmith::machine::{transition_to, transition_to_with, ActionError, StateDefinition};
use statesmith::{event_enum, state_enum, DescriptionBuilder, StateMachine};
use tracing_subscriber::EnvFilter;

state_enum! {
    enum AccountState {
        Open = "open",
        Held = "held",
        Closed = "closed",
    }
}

event_enum! {
    enum AccountEvent {
        Deposit = "deposit",
        Withdraw = "withdraw",
        PlaceHold = "placeHold",
        RemoveHold = "removeHold",
        Close = "close",
        Reopen = "reopen",
    }
}

#[derive(Clone, Debug, Default)]
struct Account {
    balance: i64,
}

type Definition = StateDefinition<AccountState, AccountEvent, Account, i64, ()>;

fn deposit(account: &mut Account, amount: &i64) -> Result<(), ActionError> {
    account.balance += amount;
    println!("  increase balance by: {amount}");
    Ok(())
}

fn withdraw(account: &mut Account, amount: &i64) -> Result<(), ActionError> {
    account.balance -= amount;
    println!("  decrease balance by: {amount}");
    Ok(())
}

fn transfer_if(predicate: fn(i64) -> bool) -> impl Fn(&mut Account, &i64) -> Result<(), ActionError> {
    move |account: &mut Account, _: &i64| {
        if predicate(account.balance) {
            println!("  transfer balance to suspension account");
        }
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Bank Account Example ===\n");

    let open: Definition = StateDefinition::new()
        .on(AccountEvent::Deposit, deposit)
        .on(AccountEvent::Withdraw, withdraw)
        .on_handler(AccountEvent::PlaceHold, transition_to(AccountState::Held))
        .on_handler(
            AccountEvent::Close,
            transition_to_with(AccountState::Closed, transfer_if(|balance| balance != 0)),
        );

    let held: Definition = StateDefinition::new()
        .on_handler(AccountEvent::RemoveHold, transition_to(AccountState::Open))
        .on(AccountEvent::Deposit, deposit)
        .on_handler(
            AccountEvent::Close,
            transition_to_with(AccountState::Closed, transfer_if(|balance| balance > 0)),
        );

    let closed: Definition = StateDefinition::new().on_handler(
        AccountEvent::Reopen,
        transition_to_with(AccountState::Open, |_: &mut Account, _: &i64| {
            println!("  restore balance if applicable");
            Ok(())
        }),
    );

    let mut account: StateMachine<AccountState, AccountEvent, Account, i64, ()> =
        DescriptionBuilder::new()
            .data(Account::default())
            .state(AccountState::Open, open)
            .state(AccountState::Held, held)
            .state(AccountState::Closed, closed)
            .starting(AccountState::Open)
            .build_machine()?;

    println!("Initial state: {}", account.current_state());

    account.dispatch(&AccountEvent::Deposit, 100)?;
    account.fire(&AccountEvent::PlaceHold)?;
    account.fire(&AccountEvent::PlaceHold)?;
    account.fire(&AccountEvent::Close)?;
    account.fire(&AccountEvent::Reopen)?;

    println!("\nFinal state: {}", account.current_state());
    println!("Balance: {}", account.data().balance);

    let path: Vec<String> = account
        .history()
        .get_path()
        .iter()
        .map(|state| state.to_string())
        .collect();
    println!("Path: {}", path.join(" -> "));

    println!("\n=== Example Complete ===");
    Ok(())
}
