use landlord_core::domain::{Expense, NewExpense};
use landlord_shared::today;

use crate::cli::{ExpenseArgs, ExpenseCommand};
use crate::output::{money, opt, print_fields, print_json, Table};
use crate::state::AppState;

pub async fn run(state: &AppState, cmd: ExpenseCommand, json: bool) -> anyhow::Result<()> {
    match cmd {
        ExpenseCommand::List { category } => {
            let rows = state.expenses.list(category).await?;
            if json {
                return print_json(&rows);
            }
            let mut table = Table::new(&["ID", "Property", "Date", "Category", "Amount", "Paid by", "Description"]);
            for e in &rows {
                table.row(vec![
                    e.id.to_string(),
                    e.property_name.clone(),
                    e.date.to_string(),
                    e.category.as_str().to_string(),
                    money(e.amount),
                    e.paid_by.as_str().to_string(),
                    e.description.clone(),
                ]);
            }
            table.print();
        }
        ExpenseCommand::Show { id } => show(&state.expenses.get(id).await?, json)?,
        ExpenseCommand::Create(args) => show(&state.expenses.create(&to_new(args)).await?, json)?,
        ExpenseCommand::Update { id, fields } => {
            show(&state.expenses.update(id, &to_new(fields)).await?, json)?
        }
        ExpenseCommand::Delete { id } => {
            state.expenses.delete(id).await?;
            println!("Deleted expense {}", id);
        }
    }
    Ok(())
}

fn to_new(args: ExpenseArgs) -> NewExpense {
    NewExpense {
        property_id: args.property,
        description: args.description,
        category: args.category,
        amount: args.amount,
        date: args.date.unwrap_or_else(today),
        paid_by: args.paid_by,
        invoice_number: args.invoice,
        notes: args.notes,
    }
}

fn show(e: &Expense, json: bool) -> anyhow::Result<()> {
    if json {
        return print_json(e);
    }
    print_fields(&[
        ("ID", e.id.to_string()),
        ("Property", e.property_id.to_string()),
        ("Description", e.description.clone()),
        ("Category", e.category.as_str().to_string()),
        ("Amount", money(e.amount)),
        ("Date", e.date.to_string()),
        ("Paid by", e.paid_by.as_str().to_string()),
        ("Invoice", opt(e.invoice_number.as_deref())),
        ("Notes", opt(e.notes.as_deref())),
    ]);
    Ok(())
}
