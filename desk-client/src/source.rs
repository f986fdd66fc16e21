//! Reservation source seam
//!
//! The front-desk core reads reservation snapshots through this narrow
//! trait, so it can run against the live HTTP API or an in-memory fake.

use crate::{ClientError, ClientResult, HttpClient};
use async_trait::async_trait;
use chrono::Utc;
use shared::{Reservation, ReservationCreate, ReservationStatus};
use std::sync::Mutex;

/// Narrow interface over the external reservation service.
#[async_trait]
pub trait ReservationSource: Send + Sync {
    /// Current reservation snapshot; may be empty.
    async fn list(&self) -> ClientResult<Vec<Reservation>>;

    /// Fetch a single reservation.
    async fn get(&self, id: i64) -> ClientResult<Reservation>;

    /// Create a reservation and return the stored record.
    async fn create(&self, payload: &ReservationCreate) -> ClientResult<Reservation>;

    /// Transition a reservation to a new status.
    async fn update_status(
        &self,
        id: i64,
        status: ReservationStatus,
    ) -> ClientResult<Reservation>;

    /// Permanently delete a reservation.
    async fn delete(&self, id: i64) -> ClientResult<()>;

    /// Search reservations by guest name (substring match).
    async fn search_by_guest(&self, name: &str) -> ClientResult<Vec<Reservation>>;
}

#[async_trait]
impl ReservationSource for HttpClient {
    async fn list(&self) -> ClientResult<Vec<Reservation>> {
        self.list_reservations().await
    }

    async fn get(&self, id: i64) -> ClientResult<Reservation> {
        self.get_reservation(id).await
    }

    async fn create(&self, payload: &ReservationCreate) -> ClientResult<Reservation> {
        self.create_reservation(payload).await
    }

    async fn update_status(
        &self,
        id: i64,
        status: ReservationStatus,
    ) -> ClientResult<Reservation> {
        HttpClient::update_status(self, id, status).await
    }

    async fn delete(&self, id: i64) -> ClientResult<()> {
        self.delete_reservation(id).await
    }

    async fn search_by_guest(&self, name: &str) -> ClientResult<Vec<Reservation>> {
        HttpClient::search_by_guest(self, name).await
    }
}

/// In-memory reservation store.
///
/// Mirrors the remote service's observable behavior: ids are assigned in
/// creation order and `updated_at` is stamped on every mutation, insert
/// included.
#[derive(Debug)]
pub struct InMemoryReservations {
    inner: Mutex<Inner>,
}

#[derive(Debug)]
struct Inner {
    next_id: i64,
    rows: Vec<Reservation>,
}

impl InMemoryReservations {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                next_id: 1,
                rows: Vec::new(),
            }),
        }
    }

    /// Preload the store with existing records.
    pub fn with_records(records: Vec<Reservation>) -> Self {
        let next_id = records
            .iter()
            .map(|r| r.reservation_id)
            .max()
            .unwrap_or(0)
            + 1;
        Self {
            inner: Mutex::new(Inner {
                next_id,
                rows: records,
            }),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for InMemoryReservations {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReservationSource for InMemoryReservations {
    async fn list(&self) -> ClientResult<Vec<Reservation>> {
        Ok(self.lock().rows.clone())
    }

    async fn get(&self, id: i64) -> ClientResult<Reservation> {
        self.lock()
            .rows
            .iter()
            .find(|r| r.reservation_id == id)
            .cloned()
            .ok_or_else(|| ClientError::NotFound(format!("Reservation {id} not found")))
    }

    async fn create(&self, payload: &ReservationCreate) -> ClientResult<Reservation> {
        let now = Utc::now();
        let mut inner = self.lock();
        let reservation = Reservation {
            reservation_id: inner.next_id,
            guest_name: payload.guest_name.clone(),
            room_number: payload.room_number,
            contact_number: payload.contact_number.clone(),
            status: payload.status,
            reservation_date: Some(now),
            created_at: Some(now),
            updated_at: Some(now),
        };
        inner.next_id += 1;
        inner.rows.push(reservation.clone());
        Ok(reservation)
    }

    async fn update_status(
        &self,
        id: i64,
        status: ReservationStatus,
    ) -> ClientResult<Reservation> {
        let mut inner = self.lock();
        let row = inner
            .rows
            .iter_mut()
            .find(|r| r.reservation_id == id)
            .ok_or_else(|| ClientError::NotFound(format!("Reservation {id} not found")))?;
        row.status = status;
        row.updated_at = Some(Utc::now());
        Ok(row.clone())
    }

    async fn delete(&self, id: i64) -> ClientResult<()> {
        let mut inner = self.lock();
        let before = inner.rows.len();
        inner.rows.retain(|r| r.reservation_id != id);
        if inner.rows.len() == before {
            return Err(ClientError::NotFound(format!("Reservation {id} not found")));
        }
        Ok(())
    }

    async fn search_by_guest(&self, name: &str) -> ClientResult<Vec<Reservation>> {
        Ok(self
            .lock()
            .rows
            .iter()
            .filter(|r| r.guest_name.contains(name))
            .cloned()
            .collect())
    }
}
