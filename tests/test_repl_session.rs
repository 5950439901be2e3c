//! Scripted sessions against the terminal front end: the login gate, the
//! two access tiers, and persistence across restarts.

use staffbook::repl::{Repl, Session};
use staffbook::services::{AccessLevel, AccountService, AddressBookService};
use staffbook::storage::{
    AccountStorage, AddressBookStorage, JsonAccountStorage, JsonAddressBookStorage,
};
use std::io::Cursor;
use std::path::Path;

type TestRepl = Repl<JsonAddressBookStorage, JsonAccountStorage>;

fn new_repl(dir: &Path) -> TestRepl {
    let book_storage = JsonAddressBookStorage::new(dir.join("book.json"));
    let account_storage = JsonAccountStorage::new(dir.join("accounts.json"));
    let book = book_storage.load().unwrap();
    let accounts = account_storage.load().unwrap();
    Repl::new(
        AddressBookService::new(book),
        AccountService::new(accounts),
        book_storage,
        account_storage,
    )
}

/// Feed `script` to the repl and return everything it printed.
fn run_script(repl: &mut TestRepl, script: &str) -> String {
    let mut input = Cursor::new(script.to_string());
    let mut output = Vec::new();
    repl.run(&mut input, &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

const ADD_AMY: &str =
    "add n/Amy Bee p/85355255 e/amy@gmail.com a/123, Jurong West Ave 6, #08-111 o/0000000555 d/Device123";

#[test]
fn test_logged_out_gate_blocks_data_commands() {
    let dir = tempfile::tempdir().unwrap();
    let mut repl = new_repl(dir.path());

    let output = run_script(&mut repl, "list\nexit\n");
    assert!(output.contains("Please log in first."));
    assert!(output.contains("Exiting Staffbook as requested ..."));
}

#[test]
fn test_register_login_add_logout_cycle() {
    let dir = tempfile::tempdir().unwrap();
    let mut repl = new_repl(dir.path());

    let script = format!(
        "register\nalice\npw1\nlogin\nalice\npw1\n{}\nlogout\nexit\n",
        ADD_AMY
    );
    let output = run_script(&mut repl, &script);

    // First account registered becomes the administrator.
    assert!(output.contains("Account 'alice' registered as administrator."));
    assert!(output.contains("Logged in as alice (administrator)"));
    assert!(output.contains("New person added: Amy Bee"));
    assert!(output.contains("Logged out."));
    assert_eq!(repl.session(), &Session::LoggedOut);
    assert_eq!(repl.service().book().len(), 1);
}

#[test]
fn test_it_staff_is_refused_mutating_commands() {
    let dir = tempfile::tempdir().unwrap();
    let mut repl = new_repl(dir.path());

    // alice is admin, ben is IT staff.
    let setup = format!(
        "register\nalice\npw1\nregister\nben\npw2\nlogin\nalice\npw1\n{}\nlogout\nexit\n",
        ADD_AMY
    );
    run_script(&mut repl, &setup);

    let output = run_script(
        &mut repl,
        "login\nben\npw2\ndelete 1\nfind amy\nexit\n",
    );
    assert!(output.contains("Logged in as ben (IT staff)"));
    assert!(output.contains("This command requires administrator access rights!"));
    assert!(output.contains("1 persons listed!"));
    match repl.session() {
        Session::LoggedIn { level, .. } => assert_eq!(*level, AccessLevel::ItStaff),
        other => panic!("expected a logged-in session, got {:?}", other),
    }
    // The delete was refused at parse time.
    assert_eq!(repl.service().book().len(), 1);
}

#[test]
fn test_failed_login_stays_logged_out() {
    let dir = tempfile::tempdir().unwrap();
    let mut repl = new_repl(dir.path());

    run_script(&mut repl, "register\nalice\npw1\nexit\n");
    let output = run_script(&mut repl, "login\nalice\nwrong\nexit\n");
    assert!(output.contains("Login failed"));
    assert_eq!(repl.session(), &Session::LoggedOut);
}

#[test]
fn test_duplicate_registration_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let mut repl = new_repl(dir.path());

    let output = run_script(&mut repl, "register\nalice\npw1\nregister\nalice\nother\nexit\n");
    assert!(output.contains("An account with this username already exists"));
}

#[test]
fn test_data_survives_a_restart() {
    let dir = tempfile::tempdir().unwrap();

    let mut repl = new_repl(dir.path());
    let script = format!("register\nalice\npw1\nlogin\nalice\npw1\n{}\nexit\n", ADD_AMY);
    run_script(&mut repl, &script);
    drop(repl);

    // A fresh repl over the same files sees the saved book and account.
    let mut repl = new_repl(dir.path());
    let output = run_script(&mut repl, "login\nalice\npw1\nfind amy\nexit\n");
    assert!(output.contains("Logged in as alice (administrator)"));
    assert!(output.contains("1 persons listed!"));
}

#[test]
fn test_help_is_available_while_logged_out() {
    let dir = tempfile::tempdir().unwrap();
    let mut repl = new_repl(dir.path());

    let output = run_script(&mut repl, "help\nexit\n");
    assert!(output.contains("Showing help."));
    assert!(output.contains("add: Adds a person to the address book."));
    assert!(output.contains("filterstatus: Lists all persons with the given status."));
}
