use chrono::NaiveDate;
use landlord_core::domain::{GroupTotal, LeaseExpiry};
use landlord_shared::today;

use crate::cli::ReportKind;
use crate::output::{money, opt, print_fields, print_json, Table};
use crate::state::AppState;

pub async fn dashboard(state: &AppState, json: bool) -> anyhow::Result<()> {
    let dashboard = state.reports.dashboard().await?;
    if json {
        return print_json(&dashboard);
    }

    let c = &dashboard.counts;
    print_fields(&[
        ("Properties", c.total_properties.to_string()),
        ("Occupied", c.occupied_properties.to_string()),
        ("Tenants", c.total_tenants.to_string()),
        ("Open maintenance", c.open_maintenance.to_string()),
        ("Rent income", money(c.total_income)),
        ("Expenses", money(c.total_expenses)),
        ("Overdue payments", c.overdue_payments.to_string()),
    ]);

    println!("\nRecent payments");
    let mut payments = Table::new(&["Tenant", "Paid", "Date", "Status"]);
    for p in &dashboard.recent_payments {
        payments.row(vec![
            p.tenant_name.clone(),
            money(p.amount_paid),
            opt(p.payment_date),
            p.status.as_str().to_string(),
        ]);
    }
    payments.print();

    println!("\nRecent maintenance");
    let mut requests = Table::new(&["Date", "Status", "Description"]);
    for m in &dashboard.recent_maintenance {
        requests.row(vec![
            m.request_date.to_string(),
            m.status.as_str().to_string(),
            m.description.clone(),
        ]);
    }
    requests.print();
    Ok(())
}

pub async fn run(
    state: &AppState,
    kind: ReportKind,
    date: Option<NaiveDate>,
    json: bool,
) -> anyhow::Result<()> {
    let date = date.unwrap_or_else(today);
    let reports = &state.reports;

    match kind {
        ReportKind::Occupancy => {
            let rows = reports.occupancy().await?;
            if json {
                return print_json(&rows);
            }
            let mut table = Table::new(&["ID", "Property", "Status", "Active leases", "Tenant"]);
            for r in &rows {
                table.row(vec![
                    r.property_id.to_string(),
                    r.property_name.clone(),
                    r.status.clone(),
                    r.active_leases.to_string(),
                    opt(r.current_tenant.as_deref()),
                ]);
            }
            table.print();
        }
        ReportKind::Income => {
            let report = reports.income(date).await?;
            if json {
                return print_json(&report);
            }
            print_groups("Rent income by month", "Month", &report.by_month);
            print_groups("Payments by status", "Status", &report.by_status);
        }
        ReportKind::Expenses => {
            let report = reports.expenses(date).await?;
            if json {
                return print_json(&report);
            }
            print_groups("Expenses by category", "Category", &report.by_category);
            print_groups("Expenses by property", "Property", &report.by_property);
            print_groups("Expenses by month", "Month", &report.by_month);
        }
        ReportKind::Overdue => {
            let rows = reports.overdue_rent(date).await?;
            if json {
                return print_json(&rows);
            }
            let mut table = Table::new(&["ID", "Tenant", "Property", "Month", "Due", "Amount", "Paid", "Outstanding"]);
            for r in &rows {
                table.row(vec![
                    r.payment_id.to_string(),
                    r.tenant_name.clone(),
                    r.property_name.clone(),
                    r.month.clone(),
                    r.due_date.to_string(),
                    money(r.amount_due),
                    money(r.amount_paid),
                    money(r.outstanding()),
                ]);
            }
            table.print();
        }
        ReportKind::Leases => {
            let report = reports.lease_expirations(date).await?;
            if json {
                return print_json(&report);
            }
            print_expiries("Expiring soon", &report.expiring);
            print_expiries("Already ended", &report.ended);
        }
        ReportKind::Maintenance => {
            let report = reports.maintenance_costs().await?;
            if json {
                return print_json(&report);
            }
            print_groups("Maintenance cost by property", "Property", &report.by_property);
            print_groups("Maintenance cost by status", "Status", &report.by_status);
        }
        ReportKind::Financial => {
            let summary = reports.financial_summary(date).await?;
            if json {
                return print_json(&summary);
            }
            print_fields(&[
                ("Total income", money(summary.total_income)),
                ("Total expenses", money(summary.total_expenses)),
                ("Net income", money(summary.net_income())),
                ("Outstanding rent", money(summary.outstanding_rent)),
            ]);
            print_groups("Income by month", "Month", &summary.income_by_month);
            print_groups("Expenses by month", "Month", &summary.expenses_by_month);
        }
    }
    Ok(())
}

fn print_groups(title: &str, key: &'static str, groups: &[GroupTotal]) {
    println!("\n{}", title);
    let mut table = Table::new(&[key, "Count", "Total"]);
    for g in groups {
        table.row(vec![g.key.clone(), g.count.to_string(), money(g.total)]);
    }
    table.print();
}

fn print_expiries(title: &str, rows: &[LeaseExpiry]) {
    println!("\n{}", title);
    let mut table = Table::new(&["Lease", "Tenant", "Property", "Ends", "Rent", "Status"]);
    for r in rows {
        table.row(vec![
            r.lease_id.to_string(),
            r.tenant_name.clone(),
            r.property_name.clone(),
            r.end_date.to_string(),
            money(r.rent_amount),
            r.status.clone(),
        ]);
    }
    table.print();
}
