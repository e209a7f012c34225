use landlord_core::domain::{NewProperty, Property};

use crate::cli::{PropertyArgs, PropertyCommand};
use crate::output::{money, opt, print_fields, print_json, Table};
use crate::state::AppState;

pub async fn run(state: &AppState, cmd: PropertyCommand, json: bool) -> anyhow::Result<()> {
    match cmd {
        PropertyCommand::List { status } => {
            let rows = state.properties.list(status).await?;
            if json {
                return print_json(&rows);
            }
            let mut table = Table::new(&["ID", "Name", "Address", "Type", "Rent", "Status"]);
            for p in &rows {
                table.row(vec![
                    p.id.to_string(),
                    p.display_name(),
                    p.address.clone(),
                    p.property_type.as_str().to_string(),
                    money(p.rent_amount),
                    p.status.as_str().to_string(),
                ]);
            }
            table.print();
        }
        PropertyCommand::Show { id } => show(&state.properties.get(id).await?, json)?,
        PropertyCommand::Create(args) => show(&state.properties.create(to_new(args)).await?, json)?,
        PropertyCommand::Update { id, fields } => {
            show(&state.properties.update(id, to_new(fields)).await?, json)?
        }
        PropertyCommand::Delete { id } => {
            state.properties.delete(id).await?;
            println!("Deleted property {}", id);
        }
    }
    Ok(())
}

fn to_new(args: PropertyArgs) -> NewProperty {
    NewProperty {
        name: args.name,
        address: args.address,
        property_type: args.property_type,
        size: args.size,
        bedrooms: args.bedrooms,
        bathrooms: args.bathrooms,
        furnished: args.furnished,
        rent_amount: args.rent,
        deposit_amount: args.deposit,
        status: args.status,
    }
}

fn show(p: &Property, json: bool) -> anyhow::Result<()> {
    if json {
        return print_json(p);
    }
    print_fields(&[
        ("ID", p.id.to_string()),
        ("Name", p.display_name()),
        ("Address", p.address.clone()),
        ("Type", p.property_type.as_str().to_string()),
        ("Size", opt(p.size)),
        ("Bedrooms", opt(p.bedrooms)),
        ("Bathrooms", opt(p.bathrooms)),
        ("Furnished", if p.furnished { "yes" } else { "no" }.to_string()),
        ("Rent", money(p.rent_amount)),
        ("Deposit", money(p.deposit_amount)),
        ("Status", p.status.as_str().to_string()),
    ]);
    Ok(())
}
