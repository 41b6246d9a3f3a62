//! HTTP Client
//!
//! `InventoryApi` over reqwest (fetch-backed in the browser).
//! Every request races a timer; no retries.

use std::future::Future;

use async_trait::async_trait;
use futures::future::{select, Either};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::{Endpoint, InventoryApi, InterpretArgs, ItemUpdate, MoveItemArgs, MoveSpaceArgs, NewItem, NewSpace, SpaceUpdate, Verb};
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{flatten_spaces, Categories, ContainerDetails, EntityKind, Item, Space, SpacesEnvelope, VoiceReply};

/// FastAPI-style error body
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

impl ErrorBody {
    fn into_detail(self) -> Option<String> {
        match self.detail? {
            serde_json::Value::String(s) => Some(s),
            other => Some(other.to_string()),
        }
    }
}

#[derive(Clone, Debug)]
pub struct HttpApi {
    config: ApiConfig,
    client: reqwest::Client,
}

impl HttpApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config, client: reqwest::Client::new() }
    }

    async fn with_timeout<T>(&self, endpoint: &Endpoint, fut: impl Future<Output = Result<T, ApiError>>) -> Result<T, ApiError> {
        let timeout_ms = self.config.timeout_ms;
        match select(Box::pin(fut), Box::pin(TimeoutFuture::new(timeout_ms))).await {
            Either::Left((result, _)) => result,
            Either::Right(_) => {
                log::error!("[API] {} timed out after {}ms", endpoint, timeout_ms);
                Err(ApiError::Timeout { endpoint: endpoint.to_string(), timeout_ms })
            }
        }
    }

    /// Send the request and fail on non-2xx status
    async fn dispatch<B: Serialize + ?Sized>(&self, endpoint: &Endpoint, body: Option<&B>) -> Result<reqwest::Response, ApiError> {
        let method = match endpoint.verb() {
            Verb::Get => reqwest::Method::GET,
            Verb::Post => reqwest::Method::POST,
            Verb::Put => reqwest::Method::PUT,
            Verb::Delete => reqwest::Method::DELETE,
        };
        let mut request = self.client.request(method, self.config.url(&endpoint.path()));
        if let Some(body) = body {
            request = request.json(body);
        }

        log::debug!("[API] {}", endpoint);
        let response = request.send().await.map_err(|e| ApiError::Network {
            endpoint: endpoint.to_string(),
            message: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.json::<ErrorBody>().await.ok().and_then(ErrorBody::into_detail);
            return Err(ApiError::Status { endpoint: endpoint.to_string(), status: status.as_u16(), detail });
        }
        Ok(response)
    }

    async fn send_json<T: DeserializeOwned, B: Serialize + ?Sized>(&self, endpoint: Endpoint, body: Option<&B>) -> Result<T, ApiError> {
        self.with_timeout(&endpoint, async {
            let response = self.dispatch(&endpoint, body).await?;
            response.json::<T>().await.map_err(|e| ApiError::Decode {
                endpoint: endpoint.to_string(),
                message: e.to_string(),
            })
        })
        .await
    }

    async fn send_unit<B: Serialize + ?Sized>(&self, endpoint: Endpoint, body: Option<&B>) -> Result<(), ApiError> {
        self.with_timeout(&endpoint, async {
            self.dispatch(&endpoint, body).await.map(|_| ())
        })
        .await
    }
}

#[async_trait(?Send)]
impl InventoryApi for HttpApi {
    async fn list_items(&self) -> Result<Vec<Item>, ApiError> {
        self.send_json(Endpoint::ListItems, None::<&()>).await
    }

    async fn list_spaces(&self) -> Result<Vec<Space>, ApiError> {
        let envelope: SpacesEnvelope = self.send_json(Endpoint::ListSpaces, None::<&()>).await?;
        Ok(flatten_spaces(envelope.spaces))
    }

    async fn list_space_children(&self, id: u32) -> Result<Vec<Space>, ApiError> {
        self.send_json(Endpoint::SpaceChildren(id), None::<&()>).await
    }

    async fn list_categories(&self) -> Result<Categories, ApiError> {
        self.send_json(Endpoint::ListCategories, None::<&()>).await
    }

    async fn get_container(&self, id: u32) -> Result<ContainerDetails, ApiError> {
        self.send_json(Endpoint::Container(id), None::<&()>).await
    }

    async fn create_item(&self, item: &NewItem) -> Result<(), ApiError> {
        self.send_unit(Endpoint::CreateItem, Some(item)).await
    }

    async fn create_space(&self, space: &NewSpace) -> Result<(), ApiError> {
        self.send_unit(Endpoint::CreateSpace, Some(space)).await
    }

    async fn update_item(&self, id: u32, update: &ItemUpdate) -> Result<Item, ApiError> {
        self.send_json(Endpoint::UpdateItem(id), Some(update)).await
    }

    async fn update_space(&self, id: u32, update: &SpaceUpdate) -> Result<Space, ApiError> {
        self.send_json(Endpoint::UpdateSpace(id), Some(update)).await
    }

    async fn move_item(&self, id: u32, new_space_id: Option<u32>) -> Result<(), ApiError> {
        self.send_unit(Endpoint::MoveItem(id), Some(&MoveItemArgs { new_space_id })).await
    }

    async fn move_space(&self, id: u32, new_parent_id: Option<u32>) -> Result<(), ApiError> {
        self.send_unit(Endpoint::MoveSpace(id), Some(&MoveSpaceArgs { new_parent_id })).await
    }

    async fn delete_item(&self, id: u32) -> Result<(), ApiError> {
        self.send_unit(Endpoint::DeleteItem(id), None::<&()>).await
    }

    async fn delete_space(&self, id: u32) -> Result<(), ApiError> {
        self.send_unit(Endpoint::DeleteSpace(id), None::<&()>).await
    }

    async fn interpret(&self, text: &str, object_type: EntityKind) -> Result<VoiceReply, ApiError> {
        self.send_json(Endpoint::Interpret(object_type), Some(&InterpretArgs { text })).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_detail_string_or_structured() {
        let body: ErrorBody = serde_json::from_str(r#"{"detail":"Space not found"}"#).unwrap();
        assert_eq!(body.into_detail().as_deref(), Some("Space not found"));

        let body: ErrorBody = serde_json::from_str(r#"{"detail":[{"loc":["body","name"]}]}"#).unwrap();
        assert_eq!(body.into_detail().as_deref(), Some(r#"[{"loc":["body","name"]}]"#));

        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.into_detail(), None);
    }
}
