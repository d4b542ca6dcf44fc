use std::sync::OnceLock;

use async_trait::async_trait;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::contact::FormPayload;

pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
const DEFAULT_SERVICE_ID: &str = "service_bfzfj26";
const DEFAULT_TEMPLATE_ID: &str = "template_5d872ti";
const DEFAULT_PUBLIC_KEY: &str = "WBc1d7B36MmJroO2i";

static GLOBAL_DELIVERY: DeliveryRegistry = DeliveryRegistry::new();

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("Delivery client is not initialized")]
    NotInitialized,
    #[error("Delivery client is already initialized")]
    AlreadyInitialized,
    #[error("Couldn't reach delivery service: {0}")]
    Transport(String),
    #[error("Delivery service rejected message ({status}): {body}")]
    Rejected { status: StatusCode, body: String },
}

/// EmailJS account settings.
///
/// Defaults are compiled in and can be overridden at build time with the
/// `EMAILJS_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            endpoint: option_env!("EMAILJS_ENDPOINT")
                .unwrap_or(DEFAULT_ENDPOINT)
                .to_string(),
            service_id: option_env!("EMAILJS_SERVICE_ID")
                .unwrap_or(DEFAULT_SERVICE_ID)
                .to_string(),
            template_id: option_env!("EMAILJS_TEMPLATE_ID")
                .unwrap_or(DEFAULT_TEMPLATE_ID)
                .to_string(),
            public_key: option_env!("EMAILJS_PUBLIC_KEY")
                .unwrap_or(DEFAULT_PUBLIC_KEY)
                .to_string(),
        }
    }
}

/// Holds the delivery settings once they have been initialized.
pub struct DeliveryRegistry {
    config: OnceLock<DeliveryConfig>,
}

impl DeliveryRegistry {
    pub const fn new() -> Self {
        Self {
            config: OnceLock::new(),
        }
    }

    pub fn init(&self, config: DeliveryConfig) -> Result<(), DeliveryError> {
        self.config
            .set(config)
            .map_err(|_| DeliveryError::AlreadyInitialized)
    }

    pub fn client(&self) -> Result<EmailJsClient, DeliveryError> {
        self.config
            .get()
            .cloned()
            .map(EmailJsClient::new)
            .ok_or(DeliveryError::NotInitialized)
    }
}

impl Default for DeliveryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Initializes the process-wide delivery client. Call once at startup.
pub fn init(config: DeliveryConfig) -> Result<(), DeliveryError> {
    GLOBAL_DELIVERY.init(config)
}

pub fn client() -> Result<EmailJsClient, DeliveryError> {
    GLOBAL_DELIVERY.client()
}

/// Forwards one contact form submission to an external service.
#[async_trait(?Send)]
pub trait MessageDelivery {
    async fn deliver(&self, payload: FormPayload) -> Result<(), DeliveryError>;
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a FormPayload,
}

#[derive(Debug, Clone)]
pub struct EmailJsClient {
    config: DeliveryConfig,
    http: reqwest::Client,
}

impl EmailJsClient {
    pub fn new(config: DeliveryConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &DeliveryConfig {
        &self.config
    }

    fn request<'a>(&'a self, payload: &'a FormPayload) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: payload,
        }
    }
}

#[async_trait(?Send)]
impl MessageDelivery for EmailJsClient {
    async fn deliver(&self, payload: FormPayload) -> Result<(), DeliveryError> {
        let res = self
            .http
            .post(&self.config.endpoint)
            .json(&self.request(&payload))
            .send()
            .await
            .map_err(|e| DeliveryError::Transport(e.to_string()))?;

        let status = res.status();
        if status.is_success() {
            log::info!("contact message delivered");
            return Ok(());
        }
        let body = res.text().await.unwrap_or_default();
        Err(DeliveryError::Rejected { status, body })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{routing::post, Json, Router};
    use serde_json::{json, Value};

    use super::*;

    const SEND_PATH: &str = "/api/v1.0/email/send";

    fn payload() -> FormPayload {
        FormPayload::new("Ada", "ada@example.com", "Hello there")
    }

    fn config_for(endpoint: String) -> DeliveryConfig {
        DeliveryConfig {
            endpoint,
            ..DeliveryConfig::default()
        }
    }

    // Spawns a fake delivery service which records request bodies
    async fn spawn_service(
        status: StatusCode,
        reply: &'static str,
    ) -> (String, Arc<Mutex<Vec<Value>>>) {
        let received = Arc::new(Mutex::new(Vec::new()));
        let captured = received.clone();
        let app = Router::new().route(
            SEND_PATH,
            post(move |Json(body): Json<Value>| {
                let captured = captured.clone();
                async move {
                    captured.lock().unwrap().push(body);
                    (status, reply)
                }
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{addr}{SEND_PATH}"), received)
    }

    #[test]
    fn test_registry_requires_init() {
        let registry = DeliveryRegistry::new();
        assert_eq!(registry.client().unwrap_err(), DeliveryError::NotInitialized);
    }

    #[test]
    fn test_registry_init_once() {
        let registry = DeliveryRegistry::new();
        registry.init(DeliveryConfig::default()).unwrap();
        assert_eq!(
            registry.init(DeliveryConfig::default()),
            Err(DeliveryError::AlreadyInitialized)
        );
        let client = registry.client().unwrap();
        assert_eq!(client.config(), &DeliveryConfig::default());
    }

    #[test]
    fn test_request_shape() {
        let client = EmailJsClient::new(DeliveryConfig {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            service_id: "svc".to_string(),
            template_id: "tpl".to_string(),
            public_key: "key".to_string(),
        });
        let payload = payload();
        let body = serde_json::to_value(client.request(&payload)).unwrap();
        assert_eq!(
            body,
            json!({
                "service_id": "svc",
                "template_id": "tpl",
                "user_id": "key",
                "template_params": {
                    "user_name": "Ada",
                    "user_email": "ada@example.com",
                    "message": "Hello there",
                }
            })
        );
    }

    #[tokio::test]
    async fn test_deliver_success() {
        let (endpoint, received) = spawn_service(StatusCode::OK, "OK").await;
        let client = EmailJsClient::new(config_for(endpoint));

        client.deliver(payload()).await.unwrap();

        let received = received.lock().unwrap();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0]["template_params"]["user_name"], "Ada");
        assert_eq!(received[0]["user_id"], DeliveryConfig::default().public_key);
    }

    #[tokio::test]
    async fn test_deliver_rejected() {
        let (endpoint, received) =
            spawn_service(StatusCode::BAD_REQUEST, "The template ID is invalid").await;
        let client = EmailJsClient::new(config_for(endpoint));

        let err = client.deliver(payload()).await.unwrap_err();
        assert_eq!(
            err,
            DeliveryError::Rejected {
                status: StatusCode::BAD_REQUEST,
                body: "The template ID is invalid".to_string(),
            }
        );
        // no retry
        assert_eq!(received.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_deliver_unreachable() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let client = EmailJsClient::new(config_for(format!("http://{addr}{SEND_PATH}")));

        let err = client.deliver(payload()).await.unwrap_err();
        assert!(matches!(err, DeliveryError::Transport(_)));
    }
}
