//! In-memory lease and rent payment store for service tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use landlord_shared::EntityId;

use crate::domain::{
    Lease, LeaseStatus, LeaseSummary, NewLease, NewRentPayment, PaymentStatus, RentPayment,
    RentPaymentSummary, RentPaymentUpdate, YearMonth,
};
use crate::error::DomainError;
use crate::repositories::{LeaseRepository, RentPaymentRepository};

#[derive(Default)]
pub struct InMemoryStore {
    leases: Mutex<Vec<Lease>>,
    payments: Mutex<Vec<RentPayment>>,
}

impl InMemoryStore {
    pub fn add_lease(&self, lease: Lease) {
        self.leases.lock().unwrap().push(lease);
    }

    pub fn set_lease_status(&self, id: EntityId, status: LeaseStatus) {
        let mut leases = self.leases.lock().unwrap();
        if let Some(lease) = leases.iter_mut().find(|l| l.id == id) {
            lease.status = status;
        }
    }

    pub fn payments(&self) -> Vec<RentPayment> {
        self.payments.lock().unwrap().clone()
    }

    pub fn edit_payment(&self, index: usize, edit: impl FnOnce(&mut RentPayment)) {
        edit(&mut self.payments.lock().unwrap()[index]);
    }

    fn lease_from(id: EntityId, input: &NewLease) -> Lease {
        Lease {
            id,
            tenant_id: input.tenant_id,
            property_id: input.property_id,
            start_date: input.start_date,
            end_date: input.end_date,
            rent_amount: input.rent_amount,
            deposit_amount: input.deposit_amount,
            status: input.status,
            created_at: Utc::now(),
        }
    }
}

#[async_trait]
impl LeaseRepository for InMemoryStore {
    async fn find_by_id(&self, id: EntityId) -> Result<Option<Lease>, DomainError> {
        Ok(self.leases.lock().unwrap().iter().find(|l| l.id == id).cloned())
    }

    async fn list(&self, status: Option<LeaseStatus>) -> Result<Vec<LeaseSummary>, DomainError> {
        Ok(self
            .leases
            .lock()
            .unwrap()
            .iter()
            .filter(|l| status.map_or(true, |s| l.status == s))
            .map(|l| LeaseSummary {
                id: l.id,
                tenant_name: format!("Tenant #{}", l.tenant_id),
                property_name: format!("Property #{}", l.property_id),
                start_date: l.start_date,
                end_date: l.end_date,
                rent_amount: l.rent_amount,
                status: l.status,
                created_at: l.created_at,
            })
            .collect())
    }

    async fn list_active(&self, as_of: NaiveDate) -> Result<Vec<Lease>, DomainError> {
        Ok(self
            .leases
            .lock()
            .unwrap()
            .iter()
            .filter(|l| l.is_active_on(as_of))
            .cloned()
            .collect())
    }

    async fn create(&self, lease: &NewLease) -> Result<Lease, DomainError> {
        let mut leases = self.leases.lock().unwrap();
        let created = Self::lease_from(leases.len() as EntityId + 1, lease);
        leases.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: EntityId, lease: &NewLease) -> Result<Lease, DomainError> {
        let mut leases = self.leases.lock().unwrap();
        let slot = leases
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or(DomainError::not_found("Lease", id))?;
        *slot = Self::lease_from(id, lease);
        Ok(slot.clone())
    }

    async fn set_status(&self, id: EntityId, status: LeaseStatus) -> Result<Lease, DomainError> {
        let mut leases = self.leases.lock().unwrap();
        let slot = leases
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or(DomainError::not_found("Lease", id))?;
        slot.status = status;
        Ok(slot.clone())
    }

    async fn expire_ended(&self, as_of: NaiveDate) -> Result<u64, DomainError> {
        let mut count = 0;
        for lease in self.leases.lock().unwrap().iter_mut() {
            if lease.status == LeaseStatus::Active && lease.has_ended(as_of) {
                lease.status = LeaseStatus::Expired;
                count += 1;
            }
        }
        Ok(count)
    }
}

#[async_trait]
impl RentPaymentRepository for InMemoryStore {
    async fn find_by_id(&self, id: EntityId) -> Result<Option<RentPayment>, DomainError> {
        Ok(self.payments.lock().unwrap().iter().find(|p| p.id == id).cloned())
    }

    async fn list(&self, status: Option<PaymentStatus>) -> Result<Vec<RentPaymentSummary>, DomainError> {
        let mut rows: Vec<RentPaymentSummary> = self
            .payments
            .lock()
            .unwrap()
            .iter()
            .filter(|p| status.map_or(true, |s| p.status == s))
            .map(|p| RentPaymentSummary {
                id: p.id,
                lease_id: p.lease_id,
                tenant_name: format!("Tenant #{}", p.tenant_id),
                property_name: format!("Property #{}", p.property_id),
                month: p.month,
                due_date: p.due_date,
                amount_due: p.amount_due,
                amount_paid: p.amount_paid,
                status: p.status,
                payment_date: p.payment_date,
            })
            .collect();
        rows.sort_by(|a, b| b.due_date.cmp(&a.due_date));
        Ok(rows)
    }

    async fn list_by_lease(&self, lease_id: EntityId) -> Result<Vec<RentPayment>, DomainError> {
        let mut rows: Vec<RentPayment> = self
            .payments
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.lease_id == lease_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.due_date.cmp(&a.due_date));
        Ok(rows)
    }

    async fn exists_for_month(&self, lease_id: EntityId, month: YearMonth) -> Result<bool, DomainError> {
        Ok(self
            .payments
            .lock()
            .unwrap()
            .iter()
            .any(|p| p.lease_id == lease_id && p.month == month))
    }

    async fn create(&self, payment: &NewRentPayment) -> Result<RentPayment, DomainError> {
        let mut payments = self.payments.lock().unwrap();
        if payments
            .iter()
            .any(|p| p.lease_id == payment.lease_id && p.month == payment.month)
        {
            return Err(DomainError::DuplicateRentPayment {
                lease_id: payment.lease_id,
                month: payment.month.to_string(),
            });
        }
        let created = RentPayment {
            id: payments.len() as EntityId + 1,
            lease_id: payment.lease_id,
            tenant_id: payment.tenant_id,
            property_id: payment.property_id,
            month: payment.month,
            due_date: payment.due_date,
            amount_due: payment.amount_due,
            amount_paid: payment.amount_paid,
            status: payment.status,
            payment_date: payment.payment_date,
            payment_method: payment.payment_method,
            notes: payment.notes.clone(),
            created_at: Utc::now(),
        };
        payments.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: EntityId, update: &RentPaymentUpdate) -> Result<RentPayment, DomainError> {
        let mut payments = self.payments.lock().unwrap();
        let slot = payments
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(DomainError::not_found("Rent payment", id))?;
        slot.month = update.month;
        slot.due_date = update.due_date;
        slot.amount_due = update.amount_due;
        slot.amount_paid = update.amount_paid;
        slot.status = update.status;
        slot.payment_date = update.payment_date;
        slot.payment_method = update.payment_method;
        slot.notes = update.notes.clone();
        Ok(slot.clone())
    }

    async fn delete(&self, id: EntityId) -> Result<(), DomainError> {
        let mut payments = self.payments.lock().unwrap();
        let before = payments.len();
        payments.retain(|p| p.id != id);
        if payments.len() == before {
            return Err(DomainError::not_found("Rent payment", id));
        }
        Ok(())
    }

    async fn mark_overdue(&self, as_of: NaiveDate) -> Result<u64, DomainError> {
        let mut count = 0;
        for p in self.payments.lock().unwrap().iter_mut() {
            if matches!(p.status, PaymentStatus::Pending | PaymentStatus::Partial) && p.due_date < as_of {
                p.status = PaymentStatus::Overdue;
                count += 1;
            }
        }
        Ok(count)
    }
}
