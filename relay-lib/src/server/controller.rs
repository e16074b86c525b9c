use axum::{
    extract::{Multipart, State},
    response::Html,
    Json,
};
use chrono::{SecondsFormat, Utc};
use relay_proto::{
    dto::{ErrorResponseDto, FileKind, HealthDto, UploadResponseDto},
    FILES_FIELD, MAX_FILES, MAX_FILE_SIZE,
};

use crate::{forward::forward, spool::Spool, Result, Settings};

use super::{ApiError, SharedServerState, UploadError};

pub async fn form() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Relay is up", body = HealthDto)
    )
)]
pub async fn health() -> Json<HealthDto> {
    Json(HealthDto {
        status: "OK".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

#[utoipa::path(
    post,
    path = "/upload",
    tag = "upload",
    request_body(
        content_type = "multipart/form-data",
        description = "Up to 10 JPEG, PNG, GIF or PDF files of 10 MiB each in the repeated `files` field"
    ),
    responses(
        (status = 200, description = "Files forwarded to the downstream webhook", body = UploadResponseDto),
        (status = 400, description = "Rejected by validation; no downstream call was made", body = ErrorResponseDto),
        (status = 500, description = "Downstream webhook unreachable or erroring", body = ErrorResponseDto)
    )
)]
pub async fn upload(
    State(state): State<SharedServerState>,
    multipart: Multipart,
) -> std::result::Result<Json<UploadResponseDto>, ApiError> {
    let environment = state.settings.environment;
    relay_upload(&state.settings, multipart)
        .await
        .map(Json)
        .map_err(|e| {
            log::error!("Upload failed: {}", e);
            ApiError::new(e, environment)
        })
}

async fn relay_upload(settings: &Settings, multipart: Multipart) -> Result<UploadResponseDto> {
    let mut spool = Spool::create(&settings.upload_dir).await?;
    let result = spool_and_forward(settings, &mut spool, multipart).await;
    spool.cleanup().await;
    result
}

async fn spool_and_forward(
    settings: &Settings,
    spool: &mut Spool,
    mut multipart: Multipart,
) -> Result<UploadResponseDto> {
    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|e| UploadError::Malformed(e.to_string()))?
    {
        if field.name() != Some(FILES_FIELD) {
            continue; // unknown fields are ignored
        }
        if spool.len() >= MAX_FILES {
            return Err(UploadError::TooManyFiles(MAX_FILES).into());
        }

        let file_name = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| UploadError::Malformed("files entry without a file name".to_string()))?;
        let content_type = field
            .content_type()
            .map(str::to_string)
            .unwrap_or_else(|| "application/octet-stream".to_string());
        let kind = FileKind::detect(&file_name, &content_type)
            .ok_or_else(|| UploadError::UnsupportedType(file_name.clone()))?;

        let mut writer = spool.attach(&file_name, &content_type, kind).await?;
        while let Some(chunk) = field
            .chunk()
            .await
            .map_err(|e| UploadError::Malformed(e.to_string()))?
        {
            if writer.size() + chunk.len() as u64 > MAX_FILE_SIZE {
                return Err(UploadError::FileTooLarge(file_name).into());
            }
            writer.write_chunk(&chunk).await?;
        }
        let file = writer.finish().await?;
        log::info!(
            "Accepted {} ({:?}, {} bytes)",
            file.file_name,
            file.kind,
            file.size
        );
        spool.commit(file);
    }

    if spool.is_empty() {
        return Err(UploadError::EmptyFiles.into());
    }

    let downstream = forward(settings, spool.files()).await?;

    Ok(UploadResponseDto {
        success: true,
        message: format!("{} file(s) forwarded for processing", spool.len()),
        file_ids: spool.files().iter().map(|f| f.id.clone()).collect(),
        downstream_response: Some(downstream),
    })
}
