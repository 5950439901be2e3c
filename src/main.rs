//! Staffbook - main entry point
//!
//! Loads configuration and stored data, then hands control to the
//! terminal front end.

use anyhow::Result;
use staffbook::models::AddressBook;
use staffbook::repl::Repl;
use staffbook::services::{AccountService, AddressBookService};
use staffbook::storage::{AccountStorage, AddressBookStorage, JsonAccountStorage, JsonAddressBookStorage};
use staffbook::Config;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging (stderr only, so the prompt stays clean)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(
        data_file = %config.data_file.display(),
        accounts_file = %config.accounts_file.display(),
        "starting Staffbook"
    );

    let book_storage = JsonAddressBookStorage::new(config.data_file.clone());
    let account_storage = JsonAccountStorage::new(config.accounts_file.clone());

    // An unreadable data file should not keep the app from starting.
    let book = match book_storage.load() {
        Ok(book) => book,
        Err(e) => {
            warn!(error = %e, "could not load address book, starting empty");
            AddressBook::new()
        }
    };
    let accounts = match account_storage.load() {
        Ok(accounts) => accounts,
        Err(e) => {
            warn!(error = %e, "could not load accounts, starting empty");
            Vec::new()
        }
    };

    let mut repl = Repl::new(
        AddressBookService::new(book),
        AccountService::new(accounts),
        book_storage,
        account_storage,
    );

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    repl.run(&mut stdin.lock(), &mut stdout.lock())?;

    info!("Staffbook shutdown complete");
    Ok(())
}
