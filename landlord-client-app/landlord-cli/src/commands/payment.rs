use landlord_core::domain::{RentPayment, RentPaymentUpdate};
use landlord_shared::today;

use crate::cli::{PaymentArgs, PaymentCommand};
use crate::output::{money, opt, print_fields, print_json, Table};
use crate::state::AppState;

pub async fn run(state: &AppState, cmd: PaymentCommand, json: bool) -> anyhow::Result<()> {
    match cmd {
        PaymentCommand::List { status } => {
            let rows = state.payments.list(status).await?;
            if json {
                return print_json(&rows);
            }
            let mut table = Table::new(&[
                "ID", "Lease", "Tenant", "Property", "Month", "Due", "Amount", "Paid", "Status", "Paid on",
            ]);
            for p in &rows {
                table.row(vec![
                    p.id.to_string(),
                    p.lease_id.to_string(),
                    p.tenant_name.clone(),
                    p.property_name.clone(),
                    p.month.to_string(),
                    p.due_date.to_string(),
                    money(p.amount_due),
                    money(p.amount_paid),
                    p.status.as_str().to_string(),
                    opt(p.payment_date),
                ]);
            }
            table.print();
        }
        PaymentCommand::Show { id } => {
            let payment = state.payments.get(id).await?;
            show(&payment, json)?;
        }
        PaymentCommand::Create { lease, fields } => {
            let payment = state.payments.create(lease, &to_update(fields)?).await?;
            show(&payment, json)?;
        }
        PaymentCommand::Update { id, fields } => {
            let payment = state.payments.update(id, &to_update(fields)?).await?;
            show(&payment, json)?;
        }
        PaymentCommand::Record { id, amount, date, method } => {
            let payment = state
                .payments
                .record_payment(id, amount, date.unwrap_or_else(today), method)
                .await?;
            show(&payment, json)?;
        }
        PaymentCommand::Delete { id } => {
            state.payments.delete(id).await?;
            println!("Deleted rent payment {}", id);
        }
    }
    Ok(())
}

fn to_update(args: PaymentArgs) -> anyhow::Result<RentPaymentUpdate> {
    let due_date = match args.due_date {
        Some(d) => d,
        None => args.month.due_date()?,
    };
    Ok(RentPaymentUpdate {
        month: args.month,
        due_date,
        amount_due: args.amount_due,
        amount_paid: args.amount_paid,
        status: args.status,
        payment_date: args.payment_date,
        payment_method: args.method,
        notes: args.notes,
    })
}

fn show(p: &RentPayment, json: bool) -> anyhow::Result<()> {
    if json {
        return print_json(p);
    }
    print_fields(&[
        ("ID", p.id.to_string()),
        ("Lease", p.lease_id.to_string()),
        ("Tenant", p.tenant_id.to_string()),
        ("Property", p.property_id.to_string()),
        ("Month", p.month.to_string()),
        ("Due date", p.due_date.to_string()),
        ("Amount due", money(p.amount_due)),
        ("Amount paid", money(p.amount_paid)),
        ("Balance", money(p.balance())),
        ("Status", p.status.as_str().to_string()),
        ("Overdue", if p.is_overdue(today()) { "yes" } else { "no" }.to_string()),
        ("Payment date", opt(p.payment_date)),
        ("Method", opt(p.payment_method.map(|m| m.as_str()))),
        ("Notes", opt(p.notes.as_deref())),
    ]);
    Ok(())
}
