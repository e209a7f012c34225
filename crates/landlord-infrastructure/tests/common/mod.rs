//! Shared fixtures for the SQLite integration tests.
#![allow(dead_code)]

use std::str::FromStr;

use chrono::NaiveDate;
use landlord_core::domain::{
    Lease, LeaseStatus, NewLease, NewProperty, NewTenant, Property, PropertyStatus, PropertyType,
    Tenant,
};
use landlord_core::repositories::{LeaseRepository, PropertyRepository, TenantRepository};
use landlord_infrastructure::{
    run_migrations, SqliteLeaseRepository, SqlitePropertyRepository, SqliteTenantRepository,
};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

/// Fresh in-memory database with the schema applied. A single connection that
/// never recycles keeps the database alive for the whole test.
pub async fn memory_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .unwrap();
    run_migrations(&pool).await.unwrap();
    pool
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub async fn add_property(pool: &SqlitePool, name: Option<&str>) -> Property {
    SqlitePropertyRepository::new(pool.clone())
        .create(&NewProperty {
            name: name.map(str::to_string),
            address: "123 Test Street".to_string(),
            property_type: PropertyType::Apartment,
            size: Some(1000.0),
            bedrooms: Some(2),
            bathrooms: Some(1),
            furnished: false,
            rent_amount: 1200.0,
            deposit_amount: 1200.0,
            status: PropertyStatus::Occupied,
        })
        .await
        .unwrap()
}

pub async fn add_tenant(pool: &SqlitePool, name: &str, property_id: Option<i64>) -> Tenant {
    SqliteTenantRepository::new(pool.clone())
        .create(&NewTenant {
            name: name.to_string(),
            property_id,
            phone: Some("1234567890".to_string()),
            email: None,
            national_id: None,
            emergency_contact: None,
            notes: None,
        })
        .await
        .unwrap()
}

pub async fn add_lease(
    pool: &SqlitePool,
    tenant_id: i64,
    property_id: i64,
    start: NaiveDate,
    end: Option<NaiveDate>,
    rent: f64,
) -> Lease {
    SqliteLeaseRepository::new(pool.clone())
        .create(&NewLease {
            tenant_id,
            property_id,
            start_date: start,
            end_date: end,
            rent_amount: rent,
            deposit_amount: rent,
            status: LeaseStatus::Active,
        })
        .await
        .unwrap()
}

/// One property, one tenant living there, one Active lease.
pub async fn seed_lease(pool: &SqlitePool, start: NaiveDate, rent: f64) -> Lease {
    let property = add_property(pool, Some("Test Property")).await;
    let tenant = add_tenant(pool, "John Doe", Some(property.id)).await;
    add_lease(pool, tenant.id, property.id, start, None, rent).await
}
