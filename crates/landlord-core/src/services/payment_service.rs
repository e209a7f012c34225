// ============================================================================
// Landlord Core - Payment Service
// File: crates/landlord-core/src/services/payment_service.rs
// ============================================================================
//! Manual rent payment entry, payment recording and overdue marking.

use std::sync::Arc;
use chrono::NaiveDate;
use landlord_shared::EntityId;
use tracing::{info, warn};
use validator::Validate;

use crate::domain::{
    NewRentPayment, PaymentMethod, PaymentStatus, RentPayment, RentPaymentSummary,
    RentPaymentUpdate,
};
use crate::error::DomainError;
use crate::repositories::{LeaseRepository, RentPaymentRepository};

pub struct PaymentService {
    payments: Arc<dyn RentPaymentRepository>,
    leases: Arc<dyn LeaseRepository>,
}

impl PaymentService {
    pub fn new(payments: Arc<dyn RentPaymentRepository>, leases: Arc<dyn LeaseRepository>) -> Self {
        Self { payments, leases }
    }

    pub async fn list(&self, status: Option<PaymentStatus>) -> Result<Vec<RentPaymentSummary>, DomainError> {
        self.payments.list(status).await
    }

    pub async fn get(&self, id: EntityId) -> Result<RentPayment, DomainError> {
        self.payments
            .find_by_id(id)
            .await?
            .ok_or(DomainError::not_found("Rent payment", id))
    }

    /// Enter a payment row by hand. Tenant and property are taken from the lease.
    pub async fn create(&self, lease_id: EntityId, input: &RentPaymentUpdate) -> Result<RentPayment, DomainError> {
        input.validate()?;
        let lease = self
            .leases
            .find_by_id(lease_id)
            .await?
            .ok_or(DomainError::not_found("Lease", lease_id))?;

        let row = NewRentPayment {
            lease_id: lease.id,
            tenant_id: lease.tenant_id,
            property_id: lease.property_id,
            month: input.month,
            due_date: input.due_date,
            amount_due: input.amount_due,
            amount_paid: input.amount_paid,
            status: input.status,
            payment_date: input.payment_date,
            payment_method: input.payment_method,
            notes: input.notes.clone(),
        };
        let payment = self.payments.create(&row).await?;
        info!("Rent payment {} created for lease {} ({})", payment.id, lease_id, payment.month);
        Ok(payment)
    }

    pub async fn update(&self, id: EntityId, input: &RentPaymentUpdate) -> Result<RentPayment, DomainError> {
        input.validate()?;
        self.get(id).await?;
        let payment = self.payments.update(id, input).await?;
        info!("Rent payment {} updated", id);
        Ok(payment)
    }

    pub async fn delete(&self, id: EntityId) -> Result<(), DomainError> {
        self.get(id).await?;
        self.payments.delete(id).await?;
        info!("Rent payment {} deleted", id);
        Ok(())
    }

    /// Add `amount` to what has been paid and derive the new status.
    pub async fn record_payment(
        &self,
        id: EntityId,
        amount: f64,
        paid_on: NaiveDate,
        method: Option<PaymentMethod>,
    ) -> Result<RentPayment, DomainError> {
        let mut payment = self.get(id).await?;
        if let Err(e) = payment.apply_payment(amount, paid_on, method) {
            warn!("Payment of {} on rent payment {} rejected: {}", amount, id, e);
            return Err(e);
        }

        let updated = self.payments.update(id, &payment.to_update()).await?;
        info!(
            "Recorded {:.2} on rent payment {} (paid {:.2} of {:.2}, {})",
            amount,
            id,
            updated.amount_paid,
            updated.amount_due,
            updated.status.as_str()
        );
        Ok(updated)
    }

    pub async fn mark_overdue(&self, as_of: NaiveDate) -> Result<u64, DomainError> {
        let count = self.payments.mark_overdue(as_of).await?;
        info!("Marked {} rent payments overdue as of {}", count, as_of);
        Ok(count)
    }
}
