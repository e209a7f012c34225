use landlord_core::domain::{Document, NewDocument};

use crate::cli::DocumentCommand;
use crate::output::{opt, print_fields, print_json, Table};
use crate::state::AppState;

pub async fn run(state: &AppState, cmd: DocumentCommand, json: bool) -> anyhow::Result<()> {
    match cmd {
        DocumentCommand::List { related_type } => {
            let rows = state.documents.list(related_type).await?;
            if json {
                return print_json(&rows);
            }
            let mut table = Table::new(&["ID", "Type", "Related", "Path", "Description", "Uploaded"]);
            for d in &rows {
                table.row(vec![
                    d.id.to_string(),
                    d.related_type.as_str().to_string(),
                    d.related_id.to_string(),
                    d.file_path.clone(),
                    opt(d.description.as_deref()),
                    d.uploaded_at.format("%Y-%m-%d %H:%M").to_string(),
                ]);
            }
            table.print();
        }
        DocumentCommand::Show { id } => show(&state.documents.get(id).await?, json)?,
        DocumentCommand::Add {
            related_type,
            related_id,
            path,
            description,
        } => {
            let input = NewDocument {
                related_type,
                related_id,
                file_path: path,
                description,
            };
            show(&state.documents.register(&input).await?, json)?
        }
        DocumentCommand::Describe { id, description } => {
            show(&state.documents.update_description(id, description).await?, json)?
        }
        DocumentCommand::Delete { id } => {
            state.documents.delete(id).await?;
            println!("Deleted document {}", id);
        }
    }
    Ok(())
}

fn show(d: &Document, json: bool) -> anyhow::Result<()> {
    if json {
        return print_json(d);
    }
    print_fields(&[
        ("ID", d.id.to_string()),
        ("Related to", format!("{} {}", d.related_type.as_str(), d.related_id)),
        ("Path", d.file_path.clone()),
        ("Description", opt(d.description.as_deref())),
        ("Uploaded", d.uploaded_at.to_rfc3339()),
    ]);
    Ok(())
}
