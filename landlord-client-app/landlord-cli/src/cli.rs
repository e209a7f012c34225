// ============================================================================
// Landlord CLI - Command Line Definitions
// File: landlord-client-app/landlord-cli/src/cli.rs
// ============================================================================

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use landlord_core::domain::{
    DocumentType, ExpenseCategory, LeaseStatus, MaintenanceStatus, PaidBy, PaymentMethod,
    PaymentStatus, PropertyStatus, PropertyType, YearMonth,
};

#[derive(Parser, Debug)]
#[command(name = "landlord", version, about = "Property management record keeper")]
pub struct Cli {
    /// SQLite database URL, overriding the configured one
    #[arg(long, global = true, env = "LANDLORD_DATABASE_URL")]
    pub database_url: Option<String>,

    /// Print results as JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Monthly rent generation and overdue marking
    #[command(subcommand)]
    Rent(RentCommand),
    /// Rent rows and the money received against them
    #[command(subcommand)]
    Payment(PaymentCommand),
    /// Leases and their payment history
    #[command(subcommand)]
    Lease(LeaseCommand),
    /// Rental properties
    #[command(subcommand)]
    Property(PropertyCommand),
    /// Tenants and their contact details
    #[command(subcommand)]
    Tenant(TenantCommand),
    /// Expenses recorded against a property
    #[command(subcommand)]
    Expense(ExpenseCommand),
    /// Maintenance requests and their status
    #[command(subcommand)]
    Maintenance(MaintenanceCommand),
    /// File paths attached to records
    #[command(subcommand)]
    Document(DocumentCommand),
    /// Portfolio totals and recent activity
    Dashboard,
    /// Run one of the standard reports
    Report {
        kind: ReportKind,
        /// Reference date (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Database setup
    #[command(subcommand)]
    Db(DbCommand),
}

#[derive(Subcommand, Debug)]
pub enum RentCommand {
    /// Create this month's Pending rent row for every active lease
    Generate {
        /// Reference date (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Mark unpaid rent past its due date as Overdue and list it
    Overdue {
        /// Reference date (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

#[derive(Subcommand, Debug)]
pub enum PaymentCommand {
    /// List rent rows, optionally by status
    List {
        #[arg(long, value_parser = payment_status)]
        status: Option<PaymentStatus>,
    },
    /// Show a rent row
    Show {
        id: i64,
    },
    /// Enter a rent row by hand
    Create {
        #[arg(long)]
        lease: i64,
        #[command(flatten)]
        fields: PaymentArgs,
    },
    /// Replace the fields of a rent row
    Update {
        id: i64,
        #[command(flatten)]
        fields: PaymentArgs,
    },
    /// Record money received against a rent row
    Record {
        id: i64,
        #[arg(long)]
        amount: f64,
        /// Payment date (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long, value_parser = payment_method)]
        method: Option<PaymentMethod>,
    },
    /// Delete a rent row
    Delete {
        id: i64,
    },
}

#[derive(Args, Debug)]
pub struct PaymentArgs {
    /// Month covered, YYYY-MM
    #[arg(long, value_parser = year_month)]
    pub month: YearMonth,
    /// Defaults to the first day of the following month
    #[arg(long)]
    pub due_date: Option<NaiveDate>,
    #[arg(long)]
    pub amount_due: f64,
    #[arg(long, default_value_t = 0.0)]
    pub amount_paid: f64,
    #[arg(long, value_parser = payment_status, default_value = "Pending")]
    pub status: PaymentStatus,
    #[arg(long)]
    pub payment_date: Option<NaiveDate>,
    #[arg(long, value_parser = payment_method)]
    pub method: Option<PaymentMethod>,
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum LeaseCommand {
    /// List leases, optionally by status
    List {
        #[arg(long, value_parser = lease_status)]
        status: Option<LeaseStatus>,
    },
    /// Lease details with its payment history
    Show {
        id: i64,
    },
    /// Add a lease
    Create(LeaseArgs),
    /// Replace every field of a lease
    Update {
        id: i64,
        #[command(flatten)]
        fields: LeaseArgs,
    },
    /// Mark a lease Terminated
    Terminate {
        id: i64,
    },
    /// Mark Active leases whose end date has passed as Expired
    Expire {
        /// Reference date (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

#[derive(Args, Debug)]
pub struct LeaseArgs {
    #[arg(long)]
    pub tenant: i64,
    #[arg(long)]
    pub property: i64,
    #[arg(long)]
    pub start: NaiveDate,
    #[arg(long)]
    pub end: Option<NaiveDate>,
    /// Monthly rent
    #[arg(long)]
    pub rent: f64,
    #[arg(long, default_value_t = 0.0)]
    pub deposit: f64,
    #[arg(long, value_parser = lease_status, default_value = "Active")]
    pub status: LeaseStatus,
}

#[derive(Subcommand, Debug)]
pub enum PropertyCommand {
    /// List properties, optionally by status
    List {
        #[arg(long, value_parser = property_status)]
        status: Option<PropertyStatus>,
    },
    /// Show a property
    Show {
        id: i64,
    },
    /// Add a property
    Create(PropertyArgs),
    /// Replace every field of a property
    Update {
        id: i64,
        #[command(flatten)]
        fields: PropertyArgs,
    },
    /// Delete a property
    Delete {
        id: i64,
    },
}

#[derive(Args, Debug)]
pub struct PropertyArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub address: String,
    #[arg(long = "type", value_parser = property_type, default_value = "Apartment")]
    pub property_type: PropertyType,
    #[arg(long)]
    pub size: Option<f64>,
    #[arg(long)]
    pub bedrooms: Option<i64>,
    #[arg(long)]
    pub bathrooms: Option<i64>,
    #[arg(long)]
    pub furnished: bool,
    #[arg(long, default_value_t = 0.0)]
    pub rent: f64,
    #[arg(long, default_value_t = 0.0)]
    pub deposit: f64,
    #[arg(long, value_parser = property_status, default_value = "Vacant")]
    pub status: PropertyStatus,
}

#[derive(Subcommand, Debug)]
pub enum TenantCommand {
    /// List tenants, optionally by property
    List {
        #[arg(long)]
        property: Option<i64>,
    },
    /// Show a tenant
    Show {
        id: i64,
    },
    /// Add a tenant
    Create(TenantArgs),
    /// Replace every field of a tenant
    Update {
        id: i64,
        #[command(flatten)]
        fields: TenantArgs,
    },
    /// Delete a tenant
    Delete {
        id: i64,
    },
}

#[derive(Args, Debug)]
pub struct TenantArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub property: Option<i64>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub national_id: Option<String>,
    #[arg(long)]
    pub emergency_contact: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum ExpenseCommand {
    /// List expenses, optionally by category
    List {
        #[arg(long, value_parser = expense_category)]
        category: Option<ExpenseCategory>,
    },
    /// Show an expense
    Show {
        id: i64,
    },
    /// Add an expense
    Create(ExpenseArgs),
    /// Replace every field of an expense
    Update {
        id: i64,
        #[command(flatten)]
        fields: ExpenseArgs,
    },
    /// Delete an expense
    Delete {
        id: i64,
    },
}

#[derive(Args, Debug)]
pub struct ExpenseArgs {
    #[arg(long)]
    pub property: i64,
    #[arg(long)]
    pub description: String,
    #[arg(long, value_parser = expense_category)]
    pub category: ExpenseCategory,
    #[arg(long)]
    pub amount: f64,
    /// Defaults to today
    #[arg(long)]
    pub date: Option<NaiveDate>,
    #[arg(long, value_parser = paid_by, default_value = "Landlord")]
    pub paid_by: PaidBy,
    #[arg(long)]
    pub invoice: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum MaintenanceCommand {
    /// List maintenance requests, optionally by status
    List {
        #[arg(long, value_parser = maintenance_status)]
        status: Option<MaintenanceStatus>,
    },
    /// Show a maintenance request
    Show {
        id: i64,
    },
    /// Add a maintenance request
    Create(MaintenanceArgs),
    /// Replace every field of a maintenance request
    Update {
        id: i64,
        #[command(flatten)]
        fields: MaintenanceArgs,
    },
    /// Move a request to a new status
    Status {
        id: i64,
        #[arg(value_parser = maintenance_status)]
        status: MaintenanceStatus,
        /// Actual cost, kept only when completing
        #[arg(long)]
        cost: Option<f64>,
        /// Completion date, defaults to today when completing
        #[arg(long)]
        completed: Option<NaiveDate>,
    },
    /// Delete a maintenance request
    Delete {
        id: i64,
    },
}

#[derive(Args, Debug)]
pub struct MaintenanceArgs {
    #[arg(long)]
    pub property: i64,
    #[arg(long)]
    pub tenant: Option<i64>,
    /// Defaults to today
    #[arg(long)]
    pub date: Option<NaiveDate>,
    #[arg(long)]
    pub description: String,
    #[arg(long, value_parser = maintenance_status, default_value = "Open")]
    pub status: MaintenanceStatus,
    #[arg(long)]
    pub estimate: Option<f64>,
    #[arg(long)]
    pub cost: Option<f64>,
    #[arg(long)]
    pub completed: Option<NaiveDate>,
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum DocumentCommand {
    /// List documents, optionally by related record type
    List {
        #[arg(long = "type", value_parser = document_type)]
        related_type: Option<DocumentType>,
    },
    /// Show a document
    Show {
        id: i64,
    },
    /// Record a file path against a property, tenant, lease, payment or expense
    Add {
        #[arg(long = "type", value_parser = document_type)]
        related_type: DocumentType,
        #[arg(long = "id")]
        related_id: i64,
        #[arg(long)]
        path: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// Replace the description; omit it to clear
    Describe {
        id: i64,
        description: Option<String>,
    },
    /// Delete a document
    Delete {
        id: i64,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportKind {
    /// Occupied and vacant properties
    Occupancy,
    /// Paid rent per month and per property
    Income,
    /// Expense totals per category and per property
    Expenses,
    /// Unpaid rent past its due date
    Overdue,
    /// Active leases ending within three months
    Leases,
    /// Maintenance cost per property
    Maintenance,
    /// Income against expenses, with monthly trends
    Financial,
}

#[derive(Subcommand, Debug)]
pub enum DbCommand {
    /// Create the database file and apply pending migrations
    Init,
}

fn closed_set<T>(kind: &str, allowed: &str, value: &str, parse: fn(&str) -> Option<T>) -> Result<T, String> {
    parse(value).ok_or_else(|| format!("unknown {} '{}' (expected one of: {})", kind, value, allowed))
}

fn payment_status(s: &str) -> Result<PaymentStatus, String> {
    closed_set("payment status", "Pending, Paid, Partial, Overdue", s, PaymentStatus::from_str)
}

fn payment_method(s: &str) -> Result<PaymentMethod, String> {
    closed_set(
        "payment method",
        "Cash, Bank Transfer, Cheque, Online, Other",
        s,
        PaymentMethod::from_str,
    )
}

fn lease_status(s: &str) -> Result<LeaseStatus, String> {
    closed_set("lease status", "Active, Terminated, Expired", s, LeaseStatus::from_str)
}

fn property_status(s: &str) -> Result<PropertyStatus, String> {
    closed_set(
        "property status",
        "Vacant, Occupied, Under Maintenance",
        s,
        PropertyStatus::from_str,
    )
}

fn property_type(s: &str) -> Result<PropertyType, String> {
    closed_set(
        "property type",
        "Apartment, House, Shop, Office, Other",
        s,
        PropertyType::from_str,
    )
}

fn expense_category(s: &str) -> Result<ExpenseCategory, String> {
    closed_set(
        "expense category",
        "Maintenance, Utility, Repair, Tax, Other",
        s,
        ExpenseCategory::from_str,
    )
}

fn paid_by(s: &str) -> Result<PaidBy, String> {
    closed_set("payer", "Landlord, Tenant, Other", s, PaidBy::from_str)
}

fn maintenance_status(s: &str) -> Result<MaintenanceStatus, String> {
    closed_set(
        "maintenance status",
        "Open, In Progress, Completed, Cancelled",
        s,
        MaintenanceStatus::from_str,
    )
}

fn document_type(s: &str) -> Result<DocumentType, String> {
    closed_set(
        "document type",
        "Property, Tenant, Lease, Payment, Expense",
        s,
        DocumentType::from_str,
    )
}

fn year_month(s: &str) -> Result<YearMonth, String> {
    YearMonth::parse(s).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_rent_generate_with_date() {
        let cli = Cli::try_parse_from(["landlord", "rent", "generate", "--date", "2024-01-15"]).unwrap();
        match cli.command {
            Command::Rent(RentCommand::Generate { date }) => {
                assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 15));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    fn assert_documented(cmd: &clap::Command, path: &str) {
        for sub in cmd.get_subcommands() {
            let path = format!("{} {}", path, sub.get_name());
            assert!(sub.get_about().is_some(), "`{}` has no help text", path);
            assert_documented(sub, &path);
        }
    }

    #[test]
    fn test_every_subcommand_has_help_text() {
        assert_documented(&Cli::command(), "landlord");
    }

    #[test]
    fn test_report_kinds_have_help_text() {
        for kind in ReportKind::value_variants() {
            let value = kind.to_possible_value().unwrap();
            assert!(value.get_help().is_some(), "report `{}` has no help text", value.get_name());
        }
    }

    #[test]
    fn test_multi_word_enum_values() {
        let cli = Cli::try_parse_from([
            "landlord",
            "payment",
            "record",
            "3",
            "--amount",
            "600",
            "--method",
            "Bank Transfer",
        ])
        .unwrap();
        match cli.command {
            Command::Payment(PaymentCommand::Record { id, amount, method, .. }) => {
                assert_eq!(id, 3);
                assert_eq!(amount, 600.0);
                assert_eq!(method, Some(PaymentMethod::BankTransfer));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_status_rejected() {
        assert!(Cli::try_parse_from(["landlord", "payment", "list", "--status", "Late"]).is_err());
        assert!(Cli::try_parse_from(["landlord", "payment", "create", "--lease", "1", "--month", "2024-13", "--amount-due", "10"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "landlord",
            "dashboard",
            "--json",
            "--database-url",
            "sqlite::memory:",
        ])
        .unwrap();
        assert!(cli.json);
        assert_eq!(cli.database_url.as_deref(), Some("sqlite::memory:"));
    }
}
