use std::{path::PathBuf, time::Instant};

use log::{debug, info, warn};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use crate::{
    endpoint::ServerEndpoint,
    error::SubmitError,
    payload::{build_payload, load_proof, ProofBytes, RequestPayload},
    response::ApiResponse,
    utils::DEFAULT_PROOF_PATH,
};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SubmitterConfig {
    pub endpoint: ServerEndpoint,
    pub proof_path: PathBuf,
}

impl Default for SubmitterConfig {
    fn default() -> Self {
        Self {
            endpoint: ServerEndpoint::default(),
            proof_path: PathBuf::from(DEFAULT_PROOF_PATH),
        }
    }
}

/// Sends one proof to one evaluation endpoint.
pub struct ProofSubmitter {
    config: SubmitterConfig,
    url: Url,
    client: Client,
}

impl ProofSubmitter {
    pub fn new(config: SubmitterConfig) -> Result<Self, SubmitError> {
        debug!("Creating new ProofSubmitter instance");
        let url = config.endpoint.url()?;

        Ok(Self {
            config,
            url,
            client: Client::new(),
        })
    }

    pub fn load_proof(&self) -> Result<ProofBytes, SubmitError> {
        load_proof(&self.config.proof_path)
    }

    pub async fn submit(&self, payload: &RequestPayload) -> Result<ApiResponse, SubmitError> {
        send(&self.client, &self.url, payload).await
    }

    /// Reads the proof file and posts it. Nothing is sent if the read fails.
    pub async fn run(&self) -> Result<ApiResponse, SubmitError> {
        let proof = self.load_proof()?;
        info!(
            "Loaded {} byte proof from {}",
            proof.len(),
            self.config.proof_path.display()
        );

        let payload = build_payload(proof);
        let response = self.submit(&payload).await?;
        info!("Server answered with status {}", response.status());
        Ok(response)
    }

    pub fn get_url(&self) -> &Url {
        &self.url
    }

    pub fn get_proof_path(&self) -> &PathBuf {
        &self.config.proof_path
    }
}

/// One-shot submission with a fresh HTTP client.
pub async fn submit(
    endpoint: &ServerEndpoint,
    payload: &RequestPayload,
) -> Result<ApiResponse, SubmitError> {
    send(&Client::new(), &endpoint.url()?, payload).await
}

async fn send(
    client: &Client,
    url: &Url,
    payload: &RequestPayload,
) -> Result<ApiResponse, SubmitError> {
    debug!(
        "Sending {} byte proof to server at {}",
        payload.proof().len(),
        url
    );
    let start = Instant::now();

    let resp = client.post(url.clone()).json(payload).send().await?;
    let status = resp.status();
    let text = resp.text().await?;
    debug!(
        "Received {} byte response with status {} in {:?}",
        text.len(),
        status,
        start.elapsed()
    );

    let body: Value = match serde_json::from_str(&text) {
        Ok(body) => body,
        Err(source) => {
            return Err(SubmitError::InvalidResponse {
                status,
                body: text,
                source,
            });
        }
    };

    let response = ApiResponse::new(status, body);
    if !response.is_success() {
        match response.error_body() {
            Some(error) => warn!(
                "Server rejected proof with status {}: {} ({})",
                status, error.message, error.code
            ),
            None => warn!("Server responded with status {}", status),
        }
    }

    Ok(response)
}
