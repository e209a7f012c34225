// ============================================================================
// Landlord Core - Rent Cycle Service
// File: crates/landlord-core/src/services/rent_cycle_service.rs
// ============================================================================
//! Monthly rent generation: one Pending rent payment per active lease per month.

use std::sync::Arc;
use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::domain::{NewRentPayment, YearMonth};
use crate::error::DomainError;
use crate::repositories::{LeaseRepository, RentPaymentRepository};

/// Generates rent-due records for active leases
pub struct RentCycleService<L: LeaseRepository, P: RentPaymentRepository> {
    lease_repo: Arc<L>,
    payment_repo: Arc<P>,
}

/// Result of one generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RentCycleOutcome {
    pub month: YearMonth,
    pub due_date: NaiveDate,
    /// Rows inserted by this run.
    pub created: usize,
    /// Active leases that already had a row for the month.
    pub skipped: usize,
}

impl<L: LeaseRepository, P: RentPaymentRepository> RentCycleService<L, P> {
    pub fn new(lease_repo: Arc<L>, payment_repo: Arc<P>) -> Self {
        Self {
            lease_repo,
            payment_repo,
        }
    }

    /// Generate rent for the current local month.
    pub async fn generate_today(&self) -> Result<RentCycleOutcome, DomainError> {
        self.generate(landlord_shared::today()).await
    }

    /// Ensure every lease active on `reference_date` has exactly one rent payment for
    /// that date's month. Existing rows are never modified, so repeated runs in the
    /// same month insert nothing.
    pub async fn generate(&self, reference_date: NaiveDate) -> Result<RentCycleOutcome, DomainError> {
        let month = YearMonth::from_date(reference_date)?;
        let due_date = month.due_date()?;
        info!("Generating rent for {} (reference date {})", month, reference_date);

        // 1. Leases that are Active and already started
        let leases = self.lease_repo.list_active(reference_date).await?;

        let mut created = 0;
        let mut skipped = 0;

        for lease in &leases {
            // 2. At most one row per lease and month
            if self.payment_repo.exists_for_month(lease.id, month).await? {
                debug!("Lease {} already has rent for {}", lease.id, month);
                skipped += 1;
                continue;
            }

            // 3. Pending row due on the first of the following month
            let row = NewRentPayment::pending_for(lease, month)?;
            match self.payment_repo.create(&row).await {
                Ok(payment) => {
                    debug!("Created rent payment {} for lease {}", payment.id, lease.id);
                    created += 1;
                }
                Err(DomainError::DuplicateRentPayment { .. }) => {
                    warn!("Rent for lease {} in {} was inserted concurrently", lease.id, month);
                    skipped += 1;
                }
                Err(e) => {
                    error!("Failed to create rent payment for lease {}: {}", lease.id, e);
                    return Err(e);
                }
            }
        }

        if created > 0 {
            info!("Generated {} rent records for {}", created, month);
        } else {
            info!("No new rent records needed for {}", month);
        }

        Ok(RentCycleOutcome {
            month,
            due_date,
            created,
            skipped,
        })
    }
}
