use landlord_core::domain::{Lease, NewLease, RentPayment};
use landlord_shared::today;
use serde::Serialize;

use crate::cli::{LeaseArgs, LeaseCommand};
use crate::output::{money, opt, print_fields, print_json, Table};
use crate::state::AppState;

pub async fn run(state: &AppState, cmd: LeaseCommand, json: bool) -> anyhow::Result<()> {
    match cmd {
        LeaseCommand::List { status } => {
            let rows = state.leases.list(status).await?;
            if json {
                return print_json(&rows);
            }
            let mut table = Table::new(&["ID", "Tenant", "Property", "Start", "End", "Rent", "Status"]);
            for l in &rows {
                table.row(vec![
                    l.id.to_string(),
                    l.tenant_name.clone(),
                    l.property_name.clone(),
                    l.start_date.to_string(),
                    opt(l.end_date),
                    money(l.rent_amount),
                    l.status.as_str().to_string(),
                ]);
            }
            table.print();
        }
        LeaseCommand::Show { id } => {
            let lease = state.leases.get(id).await?;
            let payments = state.leases.payment_history(id).await?;
            if json {
                #[derive(Serialize)]
                struct LeaseDetail<'a> {
                    lease: &'a Lease,
                    payments: &'a [RentPayment],
                }
                return print_json(&LeaseDetail {
                    lease: &lease,
                    payments: &payments,
                });
            }
            print_lease(&lease);
            println!();
            let mut table = Table::new(&["ID", "Month", "Due", "Amount", "Paid", "Status"]);
            for p in &payments {
                table.row(vec![
                    p.id.to_string(),
                    p.month.to_string(),
                    p.due_date.to_string(),
                    money(p.amount_due),
                    money(p.amount_paid),
                    p.status.as_str().to_string(),
                ]);
            }
            table.print();
        }
        LeaseCommand::Create(args) => {
            let lease = state.leases.create(&to_new(args)).await?;
            show(&lease, json)?;
        }
        LeaseCommand::Update { id, fields } => {
            let lease = state.leases.update(id, &to_new(fields)).await?;
            show(&lease, json)?;
        }
        LeaseCommand::Terminate { id } => {
            let lease = state.leases.terminate(id).await?;
            show(&lease, json)?;
        }
        LeaseCommand::Expire { date } => {
            let as_of = date.unwrap_or_else(today);
            let count = state.leases.expire_ended(as_of).await?;
            if json {
                return print_json(&serde_json::json!({ "as_of": as_of, "expired": count }));
            }
            println!("Marked {} leases ended before {} as Expired", count, as_of);
        }
    }
    Ok(())
}

fn to_new(args: LeaseArgs) -> NewLease {
    NewLease {
        tenant_id: args.tenant,
        property_id: args.property,
        start_date: args.start,
        end_date: args.end,
        rent_amount: args.rent,
        deposit_amount: args.deposit,
        status: args.status,
    }
}

fn show(lease: &Lease, json: bool) -> anyhow::Result<()> {
    if json {
        return print_json(lease);
    }
    print_lease(lease);
    Ok(())
}

fn print_lease(l: &Lease) {
    print_fields(&[
        ("ID", l.id.to_string()),
        ("Tenant", l.tenant_id.to_string()),
        ("Property", l.property_id.to_string()),
        ("Start", l.start_date.to_string()),
        ("End", opt(l.end_date)),
        ("Rent", money(l.rent_amount)),
        ("Deposit", money(l.deposit_amount)),
        ("Status", l.status.as_str().to_string()),
        ("Created", l.created_at.to_rfc3339()),
    ]);
}
