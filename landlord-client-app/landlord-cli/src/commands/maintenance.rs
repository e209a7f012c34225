use landlord_core::domain::{MaintenanceRequest, NewMaintenanceRequest};
use landlord_shared::today;

use crate::cli::{MaintenanceArgs, MaintenanceCommand};
use crate::output::{money, opt, print_fields, print_json, Table};
use crate::state::AppState;

pub async fn run(state: &AppState, cmd: MaintenanceCommand, json: bool) -> anyhow::Result<()> {
    match cmd {
        MaintenanceCommand::List { status } => {
            let rows = state.maintenance.list(status).await?;
            if json {
                return print_json(&rows);
            }
            let mut table = Table::new(&["ID", "Property", "Tenant", "Date", "Status", "Estimate", "Cost", "Description"]);
            for m in &rows {
                table.row(vec![
                    m.id.to_string(),
                    m.property_name.clone(),
                    opt(m.tenant_name.as_deref()),
                    m.request_date.to_string(),
                    m.status.as_str().to_string(),
                    opt(m.cost_estimate.map(money)),
                    opt(m.actual_cost.map(money)),
                    m.description.clone(),
                ]);
            }
            table.print();
        }
        MaintenanceCommand::Show { id } => show(&state.maintenance.get(id).await?, json)?,
        MaintenanceCommand::Create(args) => {
            show(&state.maintenance.create(&to_new(args)).await?, json)?
        }
        MaintenanceCommand::Update { id, fields } => {
            show(&state.maintenance.update(id, &to_new(fields)).await?, json)?
        }
        MaintenanceCommand::Status { id, status, cost, completed } => {
            let request = state
                .maintenance
                .update_status(id, status, cost, completed, today())
                .await?;
            show(&request, json)?
        }
        MaintenanceCommand::Delete { id } => {
            state.maintenance.delete(id).await?;
            println!("Deleted maintenance request {}", id);
        }
    }
    Ok(())
}

fn to_new(args: MaintenanceArgs) -> NewMaintenanceRequest {
    NewMaintenanceRequest {
        property_id: args.property,
        tenant_id: args.tenant,
        request_date: args.date.unwrap_or_else(today),
        description: args.description,
        status: args.status,
        cost_estimate: args.estimate,
        actual_cost: args.cost,
        completed_date: args.completed,
        notes: args.notes,
    }
}

fn show(m: &MaintenanceRequest, json: bool) -> anyhow::Result<()> {
    if json {
        return print_json(m);
    }
    print_fields(&[
        ("ID", m.id.to_string()),
        ("Property", m.property_id.to_string()),
        ("Tenant", opt(m.tenant_id)),
        ("Requested", m.request_date.to_string()),
        ("Description", m.description.clone()),
        ("Status", m.status.as_str().to_string()),
        ("Estimate", opt(m.cost_estimate.map(money))),
        ("Actual cost", opt(m.actual_cost.map(money))),
        ("Reported cost", money(m.effective_cost())),
        ("Completed", opt(m.completed_date)),
        ("Notes", opt(m.notes.as_deref())),
    ]);
    Ok(())
}
