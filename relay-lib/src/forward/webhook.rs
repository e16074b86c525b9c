use chrono::{SecondsFormat, Utc};
use once_cell::sync::Lazy;
use relay_proto::{FILES_FIELD, TIMESTAMP_FIELD, TOTAL_FILES_FIELD};
use reqwest::{multipart, Client, StatusCode};
use thiserror::Error;

use crate::{spool::SpooledFile, Result, Settings};

static CLIENT: Lazy<Client> = Lazy::new(|| {
    reqwest::ClientBuilder::new()
        .build()
        .expect("Failed to create reqwest client")
});

#[derive(Error, Debug)]
pub enum ForwardError {
    #[error("Webhook responded with status code {0}")]
    ErrorStatus(StatusCode),
}

/// Repackages the spooled files into a fresh multipart body and posts them to
/// the configured webhook, returning its JSON response verbatim.
pub async fn forward(settings: &Settings, files: &[SpooledFile]) -> Result<serde_json::Value> {
    let mut form = multipart::Form::new();
    for file in files {
        let bytes = tokio::fs::read(&file.path).await?;
        let part = multipart::Part::bytes(bytes)
            .file_name(file.file_name.clone())
            .mime_str(&file.content_type)?;
        form = form.part(FILES_FIELD, part);
    }
    form = form.text(TOTAL_FILES_FIELD, files.len().to_string()).text(
        TIMESTAMP_FIELD,
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    );

    log::info!(
        "Forwarding {} file(s) to {}",
        files.len(),
        settings.webhook_url
    );

    let response = CLIENT
        .post(&settings.webhook_url)
        .timeout(settings.forward_timeout)
        .multipart(form)
        .send()
        .await?;
    match response.status() {
        status if status.is_success() => Ok(response.json().await?),
        status => Err(ForwardError::ErrorStatus(status).into()),
    }
}
