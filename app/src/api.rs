//! Wire types and HTTP client for the reservation backend
//!
//! These types mirror the server-side JSON structures. The client owns no
//! retry logic and applies no timeouts; failures are normalized once (see
//! [`crate::error`]) and handed to the caller.

use serde::{Deserialize, Serialize};

use crate::config::ApiConfig;
use crate::error::Result;

/// A rentable cabaña as returned by `GET /cabanas`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cabana {
    pub id: i32,
    pub nombre: String,
    pub capacidad: i32,
    #[serde(default)]
    pub ubicacion: Option<String>,
    pub estado: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default)]
    pub precio_hora: Option<f64>,
}

/// A booking as returned by `GET /reservas`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reserva {
    pub id: i32,
    pub cliente_id: i32,
    pub cabana_id: i32,
    pub fecha_reserva: String,
    pub hora_inicio: String,
    pub hora_fin: String,
    pub estado: String,
    #[serde(default)]
    pub observaciones: Option<String>,
    #[serde(default)]
    pub fecha_creacion: Option<String>,
}

/// Body of `POST /reservas`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NuevaReserva {
    pub cliente_id: i32,
    pub cabana_id: i32,
    pub fecha_reserva: String,
    pub hora_inicio: String,
    pub hora_fin: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observaciones: Option<String>,
}

/// Sort cabañas ascending by id; display order for the unit list
pub fn ordenar_por_id(mut cabanas: Vec<Cabana>) -> Vec<Cabana> {
    cabanas.sort_by_key(|c| c.id);
    cabanas
}

/// HTTP client for the reservation backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    /// `GET /cabanas`
    pub async fn cabanas(&self) -> Result<Vec<Cabana>> {
        self.get_json("/cabanas").await
    }

    /// `GET /reservas`
    pub async fn reservas(&self) -> Result<Vec<Reserva>> {
        self.get_json("/reservas").await
    }

    /// `POST /reservas`
    #[cfg(target_arch = "wasm32")]
    pub async fn crear_reserva(&self, nueva: &NuevaReserva) -> Result<Reserva> {
        use crate::error::ApiError;

        let url = self.config.endpoint("/reservas");
        let response = gloo_net::http::Request::post(&url)
            .json(nueva)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Self::decode(response).await
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub async fn crear_reserva(&self, nueva: &NuevaReserva) -> Result<Reserva> {
        let _ = nueva;
        Err(crate::error::ApiError::Transport(
            "sin runtime de navegador".to_string(),
        ))
    }

    /// `DELETE /reservas/{id}`
    #[cfg(target_arch = "wasm32")]
    pub async fn eliminar_reserva(&self, id: i32) -> Result<()> {
        use crate::error::ApiError;

        let url = self.config.endpoint(&format!("/reservas/{id}"));
        let response = gloo_net::http::Request::delete(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if response.ok() {
            Ok(())
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_response(status, &body))
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub async fn eliminar_reserva(&self, id: i32) -> Result<()> {
        let _ = id;
        Err(crate::error::ApiError::Transport(
            "sin runtime de navegador".to_string(),
        ))
    }

    #[cfg(target_arch = "wasm32")]
    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        use crate::error::ApiError;

        let url = self.config.endpoint(path);
        let response = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Self::decode(response).await
    }

    // Outside the browser there is nothing to fetch; views render empty
    // until hydrated, same as the sentinel dashboard tables.
    #[cfg(not(target_arch = "wasm32"))]
    async fn get_json<T: Default>(&self, path: &str) -> Result<T> {
        let _ = path;
        Ok(T::default())
    }

    #[cfg(target_arch = "wasm32")]
    async fn decode<T: serde::de::DeserializeOwned>(
        response: gloo_net::http::Response,
    ) -> Result<T> {
        use crate::error::ApiError;

        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_response(status, &body));
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}
