use landlord_core::domain::{NewTenant, Tenant};

use crate::cli::{TenantArgs, TenantCommand};
use crate::output::{opt, print_fields, print_json, Table};
use crate::state::AppState;

pub async fn run(state: &AppState, cmd: TenantCommand, json: bool) -> anyhow::Result<()> {
    match cmd {
        TenantCommand::List { property } => {
            let rows = state.tenants.list(property).await?;
            if json {
                return print_json(&rows);
            }
            let mut table = Table::new(&["ID", "Name", "Property", "Phone", "Email"]);
            for t in &rows {
                table.row(vec![
                    t.id.to_string(),
                    t.name.clone(),
                    opt(t.property_name.as_deref()),
                    opt(t.phone.as_deref()),
                    opt(t.email.as_deref()),
                ]);
            }
            table.print();
        }
        TenantCommand::Show { id } => show(&state.tenants.get(id).await?, json)?,
        TenantCommand::Create(args) => show(&state.tenants.create(&to_new(args)).await?, json)?,
        TenantCommand::Update { id, fields } => {
            show(&state.tenants.update(id, &to_new(fields)).await?, json)?
        }
        TenantCommand::Delete { id } => {
            state.tenants.delete(id).await?;
            println!("Deleted tenant {}", id);
        }
    }
    Ok(())
}

fn to_new(args: TenantArgs) -> NewTenant {
    NewTenant {
        name: args.name,
        property_id: args.property,
        phone: args.phone,
        email: args.email,
        national_id: args.national_id,
        emergency_contact: args.emergency_contact,
        notes: args.notes,
    }
}

fn show(t: &Tenant, json: bool) -> anyhow::Result<()> {
    if json {
        return print_json(t);
    }
    print_fields(&[
        ("ID", t.id.to_string()),
        ("Name", t.name.clone()),
        ("Property", opt(t.property_id)),
        ("Phone", opt(t.phone.as_deref())),
        ("Email", opt(t.email.as_deref())),
        ("National ID", opt(t.national_id.as_deref())),
        ("Emergency contact", opt(t.emergency_contact.as_deref())),
        ("Notes", opt(t.notes.as_deref())),
    ]);
    Ok(())
}
