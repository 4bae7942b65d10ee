use console_logging::{console_debug, console_info, console_warn};
use reqwest::multipart::{Form, Part};
use reqwest::{Response, Url};
use serde::de::DeserializeOwned;

use crate::types::{PredictResponse, ServerErrorBody};
use crate::{ClientError, FailureKind, HealthReport, Prediction, UploadFile};

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/";

/// Where the prediction service lives. No request timeout is applied; calls
/// wait on the transport's own defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub base_url: Url,
}

impl ClientSettings {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url)
            .map_err(|err| ClientError::new(FailureKind::InvalidUrl, format!("Invalid URL: {err}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::new(
                FailureKind::InvalidUrl,
                format!("Invalid URL: {base_url} cannot be a base"),
            ));
        }
        Ok(Self { base_url })
    }
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base url is valid"),
        }
    }
}

#[async_trait::async_trait]
pub trait PredictionClient: Send + Sync {
    async fn predict(&self, file: &UploadFile) -> Result<Vec<Prediction>, ClientError>;

    async fn trigger_retrain(&self, epochs: u32) -> Result<serde_json::Value, ClientError>;

    async fn probe_health(&self) -> Result<HealthReport, ClientError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestClient {
    settings: ClientSettings,
    http: reqwest::Client,
}

impl ReqwestClient {
    pub fn new(settings: ClientSettings) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|err| ClientError::network(err.to_string()))?;
        Ok(Self { settings, http })
    }

    /// Appends `segments` to the base path, keeping any prefix the base carries.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.settings.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                ClientError::new(
                    FailureKind::InvalidUrl,
                    format!("Invalid URL: {} cannot be a base", self.settings.base_url),
                )
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

#[async_trait::async_trait]
impl PredictionClient for ReqwestClient {
    async fn predict(&self, file: &UploadFile) -> Result<Vec<Prediction>, ClientError> {
        let url = self.endpoint(&["predict"])?;
        console_info!(
            "POST {} file={} mime={} len={}",
            url,
            file.name,
            file.mime,
            file.bytes.len()
        );

        let part = Part::bytes(file.bytes.clone())
            .file_name(file.name.clone())
            .mime_str(&file.mime)
            .map_err(|err| {
                ClientError::new(
                    FailureKind::InvalidRequest,
                    format!("Invalid MIME type {}: {err}", file.mime),
                )
            })?;
        let form = Form::new().part("file", part);

        let response = self
            .http
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let body: PredictResponse = read_json(response).await?;
        console_info!("predict returned {} entries", body.predictions.len());
        Ok(body.predictions)
    }

    async fn trigger_retrain(&self, epochs: u32) -> Result<serde_json::Value, ClientError> {
        let mut url = self.endpoint(&["trigger-retrain"])?;
        url.query_pairs_mut()
            .append_pair("epochs", &epochs.to_string());
        console_info!("POST {}", url);

        let response = self
            .http
            .post(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        read_retrain_payload(response).await
    }

    async fn probe_health(&self) -> Result<HealthReport, ClientError> {
        let url = self.endpoint(&["api", "health"])?;
        console_debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        read_json(response).await
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let bytes = read_success_body(response).await?;

    serde_json::from_slice(&bytes).map_err(|err| ClientError {
        kind: FailureKind::Decode,
        message: format!("Invalid response body: {err}"),
        detail: Some(String::from_utf8_lossy(&bytes).into_owned()),
    })
}

/// Any 2xx body is a success. A body that is not JSON (including an empty one)
/// is kept as a JSON string of its text.
async fn read_retrain_payload(response: Response) -> Result<serde_json::Value, ClientError> {
    let bytes = read_success_body(response).await?;

    Ok(serde_json::from_slice(&bytes).unwrap_or_else(|_| {
        console_debug!("retrain body is not JSON; keeping it as text");
        serde_json::Value::String(String::from_utf8_lossy(&bytes).into_owned())
    }))
}

async fn read_success_body(response: Response) -> Result<bytes::Bytes, ClientError> {
    let status = response.status();
    let bytes = response.bytes().await.map_err(map_reqwest_error)?;

    if !status.is_success() {
        let detail = serde_json::from_slice::<ServerErrorBody>(&bytes)
            .ok()
            .map(|body| body.error);
        console_warn!(
            "request failed with status {} detail={:?}",
            status.as_u16(),
            detail
        );
        return Err(ClientError::http_status(status.as_u16(), detail));
    }

    Ok(bytes)
}

fn map_reqwest_error(err: reqwest::Error) -> ClientError {
    if err.is_builder() {
        return ClientError::new(FailureKind::InvalidRequest, err.to_string());
    }
    ClientError::network(err.to_string())
}
