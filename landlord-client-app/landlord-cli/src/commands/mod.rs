//! Command handlers. Each one calls a service and prints the result.

pub mod rent;
pub mod payment;
pub mod lease;
pub mod property;
pub mod tenant;
pub mod expense;
pub mod maintenance;
pub mod document;
pub mod report;

use crate::cli::Command;
use crate::state::AppState;

pub async fn dispatch(state: &AppState, command: Command, json: bool) -> anyhow::Result<()> {
    match command {
        Command::Rent(cmd) => rent::run(state, cmd, json).await,
        Command::Payment(cmd) => payment::run(state, cmd, json).await,
        Command::Lease(cmd) => lease::run(state, cmd, json).await,
        Command::Property(cmd) => property::run(state, cmd, json).await,
        Command::Tenant(cmd) => tenant::run(state, cmd, json).await,
        Command::Expense(cmd) => expense::run(state, cmd, json).await,
        Command::Maintenance(cmd) => maintenance::run(state, cmd, json).await,
        Command::Document(cmd) => document::run(state, cmd, json).await,
        Command::Dashboard => report::dashboard(state, json).await,
        Command::Report { kind, date } => report::run(state, kind, date, json).await,
        // handled before the state is built
        Command::Db(_) => Ok(()),
    }
}
