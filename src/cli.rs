//! Command-line interface implementation.

use crate::config::{Config, DATA_DIR_ENV};
use crate::error::Result;
use crate::models::{Account, AccountType};
use crate::storage::FileStorage;
use crate::store::AccountStore;
use crate::utils::{self, success, warning};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Edit a locally stored list of Local and LDAP accounts.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory holding the stored collection
    #[arg(short = 'd', long, global = true, env = DATA_DIR_ENV)]
    pub data_dir: Option<PathBuf>,

    /// Storage key of the collection
    #[arg(short = 'k', long, global = true)]
    pub key: Option<String>,

    /// Output format
    #[arg(
        short = 'o',
        long,
        global = true,
        value_enum,
        default_value = "text",
        help = "Output format"
    )]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all accounts
    List,

    /// Show one account
    Show { id: i64 },

    /// Add an empty Local account
    Add,

    /// Remove an account
    Remove { id: i64 },

    /// Set the login of an account
    Login { id: i64, value: String },

    /// Set the password of a Local account (empty clears it)
    Password { id: i64, value: String },

    /// Change the account type (local or ldap)
    Type { id: i64, kind: AccountType },

    /// Replace labels from semicolon-separated text
    Labels { id: i64, raw: String },

    /// Toggle cleartext display of the password
    TogglePassword { id: i64 },
}

impl Cli {
    /// Resolve configuration from flags, environment and defaults.
    pub fn config(&self) -> Result<Config> {
        Config::resolve(self.data_dir.clone(), self.key.clone())
    }

    /// Execute the CLI command.
    pub fn execute(&self) -> Result<()> {
        let config = self.config()?;
        let mut store = AccountStore::load_with_key(config.storage(), &config.storage_key);

        match &self.command {
            Commands::List => {
                self.print_accounts(store.accounts());
                Ok(())
            }
            Commands::Show { id } => {
                match store.get(*id) {
                    Some(acc) => self.print_accounts(std::slice::from_ref(acc)),
                    None => warning(&format!("Account not found: {id}")),
                }
                Ok(())
            }
            Commands::Add => {
                let id = store.add_account()?;
                match self.output {
                    OutputFormat::Text => success(&format!("Added account {id}")),
                    OutputFormat::Json => println!("{}", serde_json::json!({ "id": id })),
                }
                Ok(())
            }
            Commands::Remove { id } => {
                let removed = store.remove_account(*id)?;
                self.report(&store, *id, removed, "Removed account")
            }
            Commands::Login { id, value } => {
                let changed = store.update_login(*id, value)?;
                self.report(&store, *id, changed, "Updated login")
            }
            Commands::Password { id, value } => {
                let changed = store.update_password(*id, value)?;
                if !changed && store.get(*id).is_some() {
                    warning("LDAP accounts have no password");
                    return Ok(());
                }
                self.report(&store, *id, changed, "Updated password")
            }
            Commands::Type { id, kind } => {
                let changed = store.update_type(*id, *kind)?;
                self.report(&store, *id, changed, "Updated type")
            }
            Commands::Labels { id, raw } => {
                let changed = store.update_label_raw(*id, raw)?;
                self.report(&store, *id, changed, "Updated labels")
            }
            Commands::TogglePassword { id } => {
                let changed = store.toggle_password_visibility(*id)?;
                self.report(&store, *id, changed, "Toggled password visibility")
            }
        }
    }

    /// Print the outcome of a mutation on `id`.
    fn report(
        &self,
        store: &AccountStore<FileStorage>,
        id: i64,
        changed: bool,
        message: &str,
    ) -> Result<()> {
        if !changed {
            warning(&format!("Account not found: {id}"));
            return Ok(());
        }
        match store.get(id) {
            Some(acc) => {
                if let OutputFormat::Text = self.output {
                    success(&format!("{message}: {id}"));
                }
                self.print_accounts(std::slice::from_ref(acc));
            }
            None => success(&format!("{message}: {id}")),
        }
        Ok(())
    }

    fn print_accounts(&self, accounts: &[Account]) {
        match self.output {
            OutputFormat::Text => {
                if accounts.is_empty() {
                    println!("No accounts");
                    return;
                }
                for acc in accounts {
                    for line in utils::format_account(acc) {
                        println!("{line}");
                    }
                }
            }
            OutputFormat::Json => {
                let json = serde_json::json!({ "accounts": accounts });
                match serde_json::to_string_pretty(&json) {
                    Ok(text) => println!("{text}"),
                    Err(e) => warning(&format!("Failed to render JSON: {e}")),
                }
            }
        }
    }
}
