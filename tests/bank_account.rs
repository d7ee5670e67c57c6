//! End-to-end walkthrough of a bank account machine.
//!
//! open --placeHold--> held --removeHold--> open
//! open/held --close--> closed --reopen--> open

use statesmith::core::{State, StateTransition};
use statesmith::machine::{
    transition_to, transition_to_with, ActionError, Description, StateDefinition, StateMachine,
};
use statesmith::{event_enum, state_enum, DescriptionBuilder};
use std::sync::{Arc, Mutex};

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

#[derive(Clone, Debug, Default, PartialEq)]
struct Account {
    balance: i64,
    notices: Vec<String>,
}

type AccountMachine = StateMachine<AccountState, AccountEvent, Account, i64, ()>;
type AccountDefinition = StateDefinition<AccountState, AccountEvent, Account, i64, ()>;

fn deposit(account: &mut Account, amount: &i64) -> Result<(), ActionError> {
    account.balance += amount;
    account.notices.push(format!("increase balance by: {amount}"));
    Ok(())
}

fn withdraw(account: &mut Account, amount: &i64) -> Result<(), ActionError> {
    account.balance -= amount;
    account.notices.push(format!("decrease balance by: {amount}"));
    Ok(())
}

fn open() -> AccountDefinition {
    StateDefinition::new()
        .on(AccountEvent::Deposit, deposit)
        .on(AccountEvent::Withdraw, withdraw)
        .on_handler(AccountEvent::PlaceHold, transition_to(AccountState::Held))
        .on_handler(
            AccountEvent::Close,
            transition_to_with(AccountState::Closed, |account: &mut Account, _: &i64| {
                if account.balance != 0 {
                    account
                        .notices
                        .push("transfer balance to suspension account".to_string());
                }
                Ok(())
            }),
        )
}

fn held() -> AccountDefinition {
    StateDefinition::new()
        .on_handler(AccountEvent::RemoveHold, transition_to(AccountState::Open))
        .on(AccountEvent::Deposit, deposit)
        .on_handler(
            AccountEvent::Close,
            transition_to_with(AccountState::Closed, |account: &mut Account, _: &i64| {
                if account.balance > 0 {
                    account
                        .notices
                        .push("transfer balance to suspension account".to_string());
                }
                Ok(())
            }),
        )
}

fn closed() -> AccountDefinition {
    StateDefinition::new().on_handler(
        AccountEvent::Reopen,
        transition_to_with(AccountState::Open, |account: &mut Account, _: &i64| {
            account.notices.push("restore balance if applicable".to_string());
            Ok(())
        }),
    )
}

fn account_description() -> Description<AccountState, AccountEvent, Account, i64, ()> {
    DescriptionBuilder::new()
        .data(Account::default())
        .state(AccountState::Open, open())
        .state(AccountState::Held, held())
        .state(AccountState::Closed, closed())
        .starting(AccountState::Open)
        .build()
        .unwrap()
}

fn account() -> AccountMachine {
    StateMachine::new(&account_description()).unwrap()
}

#[test]
fn walkthrough_matches_expected_states_and_notices() {
    let mut account = account();
    assert_eq!(account.current_state(), &AccountState::Open);
    assert_eq!(account.data().balance, 0);

    // 1. deposit(100)
    assert_eq!(account.dispatch(&AccountEvent::Deposit, 100).unwrap(), Some(()));
    assert_eq!(account.data().balance, 100);
    assert_eq!(account.current_state(), &AccountState::Open);

    // 2. placeHold()
    account.fire(&AccountEvent::PlaceHold).unwrap();
    assert_eq!(account.current_state(), &AccountState::Held);

    // 3. placeHold() again: held has no handler for it
    assert_eq!(account.fire(&AccountEvent::PlaceHold).unwrap(), None);
    assert_eq!(account.current_state(), &AccountState::Held);

    // 4. close() with a positive balance
    account.fire(&AccountEvent::Close).unwrap();
    assert_eq!(account.current_state(), &AccountState::Closed);

    // 5. reopen() leaves the balance alone
    account.fire(&AccountEvent::Reopen).unwrap();
    assert_eq!(account.current_state(), &AccountState::Open);
    assert_eq!(account.data().balance, 100);

    assert_eq!(
        account.data().notices,
        vec![
            "increase balance by: 100",
            "transfer balance to suspension account",
            "restore balance if applicable",
        ]
    );

    let path: Vec<&str> = account.history().get_path().into_iter().map(|s| s.name()).collect();
    assert_eq!(path, vec!["open", "held", "closed", "open"]);
}

#[test]
fn event_surface_is_the_union_of_all_states() {
    let mut account = account();
    let expected = vec![
        AccountEvent::Deposit,
        AccountEvent::Withdraw,
        AccountEvent::PlaceHold,
        AccountEvent::Close,
        AccountEvent::RemoveHold,
        AccountEvent::Reopen,
    ];

    let surface: Vec<AccountEvent> = account.events().copied().collect();
    assert_eq!(surface, expected);

    account.fire(&AccountEvent::Close).unwrap();
    let surface: Vec<AccountEvent> = account.events().copied().collect();
    assert_eq!(surface, expected);

    let active: Vec<AccountEvent> = account.active_events().copied().collect();
    assert_eq!(active, vec![AccountEvent::Reopen]);
}

#[test]
fn ignored_events_leave_machine_untouched() {
    let mut account = account();
    account.dispatch(&AccountEvent::Deposit, 40).unwrap();
    account.fire(&AccountEvent::Close).unwrap();
    let before = account.data().clone();

    for event in [
        AccountEvent::Deposit,
        AccountEvent::Withdraw,
        AccountEvent::PlaceHold,
        AccountEvent::RemoveHold,
        AccountEvent::Close,
    ] {
        assert_eq!(account.dispatch(&event, 10).unwrap(), None);
        assert_eq!(account.current_state(), &AccountState::Closed);
        assert_eq!(account.data(), &before);
    }
}

#[test]
fn close_lands_in_closed_from_every_state_that_handles_it() {
    let mut from_open = account();
    from_open.fire(&AccountEvent::Close).unwrap();
    assert_eq!(from_open.current_state(), &AccountState::Closed);

    let mut from_held = account();
    from_held.fire(&AccountEvent::PlaceHold).unwrap();
    from_held.fire(&AccountEvent::Close).unwrap();
    assert_eq!(from_held.current_state(), &AccountState::Closed);
}

#[test]
fn closing_an_empty_account_skips_the_transfer_notice() {
    let mut account = account();

    account.fire(&AccountEvent::Close).unwrap();

    assert!(account.data().notices.is_empty());
    assert_eq!(account.current_state(), &AccountState::Closed);
}

#[test]
fn machines_from_one_description_do_not_share_data() {
    let description = account_description();
    let mut first = StateMachine::new(&description).unwrap();
    let mut second = StateMachine::new(&description).unwrap();
    assert_eq!(first.data(), second.data());

    first.dispatch(&AccountEvent::Deposit, 25).unwrap();
    second.dispatch(&AccountEvent::Withdraw, 5).unwrap();
    second.fire(&AccountEvent::PlaceHold).unwrap();

    assert_eq!(first.data().balance, 25);
    assert_eq!(second.data().balance, -5);
    assert_eq!(first.current_state(), &AccountState::Open);
    assert_eq!(second.current_state(), &AccountState::Held);
    assert!(Arc::ptr_eq(first.states_map(), second.states_map()));
    assert_eq!(description.initial_data(), &Account::default());
}

#[test]
fn observer_sees_every_transition_in_order() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);

    let mut account = account().with_observer(
        move |transition: &StateTransition<AccountState, AccountEvent>| {
            sink.lock()
                .unwrap()
                .push((transition.event, transition.to));
        },
    );

    account.fire(&AccountEvent::PlaceHold).unwrap();
    account.fire(&AccountEvent::RemoveHold).unwrap();
    account.fire(&AccountEvent::Close).unwrap();

    assert_eq!(
        *seen.lock().unwrap(),
        vec![
            (AccountEvent::PlaceHold, AccountState::Held),
            (AccountEvent::RemoveHold, AccountState::Open),
            (AccountEvent::Close, AccountState::Closed),
        ]
    );
}
