use landlord_shared::today;

use crate::cli::RentCommand;
use crate::output::{money, print_json, Table};
use crate::state::AppState;

pub async fn run(state: &AppState, cmd: RentCommand, json: bool) -> anyhow::Result<()> {
    match cmd {
        RentCommand::Generate { date } => {
            let outcome = match date {
                Some(date) => state.rent_cycle.generate(date).await?,
                None => state.rent_cycle.generate_today().await?,
            };
            if json {
                return print_json(&outcome);
            }
            println!(
                "Generated {} rent records for {} (due {}), {} already present",
                outcome.created, outcome.month, outcome.due_date, outcome.skipped
            );
        }
        RentCommand::Overdue { date } => {
            let as_of = date.unwrap_or_else(today);
            let marked = state.payments.mark_overdue(as_of).await?;
            let overdue = state.reports.overdue_rent(as_of).await?;
            if json {
                return print_json(&overdue);
            }
            println!("Marked {} rent payments overdue as of {}", marked, as_of);
            let mut table = Table::new(&["ID", "Tenant", "Property", "Month", "Due", "Outstanding"]);
            for row in &overdue {
                table.row(vec![
                    row.payment_id.to_string(),
                    row.tenant_name.clone(),
                    row.property_name.clone(),
                    row.month.clone(),
                    row.due_date.to_string(),
                    money(row.outstanding()),
                ]);
            }
            table.print();
        }
    }
    Ok(())
}
