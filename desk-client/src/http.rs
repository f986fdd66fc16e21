//! HTTP client for network-based API calls

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::{Reservation, ReservationCreate, ReservationStatus, ReservationUpdate};

/// HTTP client for making network requests to the reservation service
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Make a GET request
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body
    async fn put<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.put(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a PATCH request with query parameters and no body
    async fn patch<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> ClientResult<T> {
        let response = self
            .client
            .patch(self.url(path))
            .query(query)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            return match status {
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(text)),
                _ => Err(ClientError::Internal(text)),
            };
        }

        response.json().await.map_err(Into::into)
    }

    // ========== Reservations API ==========

    /// List all reservations
    pub async fn list_reservations(&self) -> ClientResult<Vec<Reservation>> {
        self.get("/api/hotel/reservations").await
    }

    /// Get a reservation by id
    pub async fn get_reservation(&self, id: i64) -> ClientResult<Reservation> {
        self.get(&format!("/api/hotel/reservations/{id}")).await
    }

    /// Create a new reservation
    pub async fn create_reservation(
        &self,
        payload: &ReservationCreate,
    ) -> ClientResult<Reservation> {
        tracing::debug!(room = payload.room_number, status = %payload.status, "Creating reservation");
        self.post("/api/hotel/reservations", payload).await
    }

    /// Replace an existing reservation
    pub async fn update_reservation(
        &self,
        id: i64,
        payload: &ReservationUpdate,
    ) -> ClientResult<Reservation> {
        self.put(&format!("/api/hotel/reservations/{id}"), payload)
            .await
    }

    /// Transition a reservation to a new status
    pub async fn update_status(
        &self,
        id: i64,
        status: ReservationStatus,
    ) -> ClientResult<Reservation> {
        tracing::debug!(id, status = %status, "Updating reservation status");
        self.patch(
            &format!("/api/hotel/reservations/{id}/status"),
            &[("status", status.as_str())],
        )
        .await
    }

    /// Permanently delete a reservation
    pub async fn delete_reservation(&self, id: i64) -> ClientResult<()> {
        let response = self
            .client
            .delete(self.url(&format!("/api/hotel/reservations/{id}")))
            .send()
            .await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let text = response.text().await?;
        match status {
            StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
            _ => Err(ClientError::Internal(text)),
        }
    }

    /// Search reservations by guest name (substring match)
    pub async fn search_by_guest(&self, name: &str) -> ClientResult<Vec<Reservation>> {
        let response = self
            .client
            .get(self.url("/api/hotel/reservations/search"))
            .query(&[("name", name)])
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Get all reservations targeting a room
    pub async fn reservations_for_room(&self, room: u32) -> ClientResult<Vec<Reservation>> {
        self.get(&format!("/api/hotel/reservations/room/{room}"))
            .await
    }

    /// Service health check; returns the raw status line
    pub async fn health(&self) -> ClientResult<String> {
        let response = self.client.get(self.url("/api/hotel/health")).send().await?;
        if !response.status().is_success() {
            return Err(ClientError::Internal(response.text().await?));
        }
        response.text().await.map_err(Into::into)
    }
}
