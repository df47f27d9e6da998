// Copyright (c) 2025 - Cowboy AI, Inc.
//! Request handlers
//!
//! Each handler decodes its inputs, runs exactly one store operation under
//! the store lock and encodes the result. Ids that fail to parse are treated
//! like ids that do not exist.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use std::collections::HashMap;
use std::str::FromStr;
use tracing::debug;

use super::error::ApiError;
use super::resources::{
    AttachRequest, AttachmentResource, BgpConfigResource, DeviceList, DeviceResource,
    FacilityList, VolumeList, VolumeResource,
};
use super::AppState;
use crate::domain::{
    AttachmentId, DeviceId, EnableBgpRequest, ProjectId, VolumeCreateRequest, VolumeId,
};
use crate::pagination::ListOptions;
use crate::projection::MetadataView;

type ApiResult<T> = Result<T, ApiError>;

fn parse_id<T: FromStr>(raw: &str) -> ApiResult<T> {
    raw.parse().map_err(|_| ApiError::NotFound)
}

fn list_options(params: &HashMap<String, String>) -> ApiResult<ListOptions> {
    ListOptions::from_query(params).map_err(ApiError::InvalidQuery)
}

pub(super) async fn list_facilities(State(state): State<AppState>) -> Json<FacilityList> {
    let facilities = state.store.read(|store| store.list_facilities());
    Json(FacilityList { facilities })
}

pub(super) async fn list_volumes(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Json<VolumeList>> {
    let options = list_options(&params)?;
    let project = ProjectId::new(project_id);
    let volumes = state.store.read(|store| {
        store
            .list_volumes(&project, &options)
            .into_iter()
            .map(|volume| VolumeResource::render(volume, store))
            .collect()
    });
    Ok(Json(VolumeList { volumes }))
}

pub(super) async fn create_volume(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    Json(request): Json<VolumeCreateRequest>,
) -> (StatusCode, Json<VolumeResource>) {
    let project = ProjectId::new(project_id);
    let volume = state.store.write(|store| {
        let volume = store.create_volume(&project, request);
        VolumeResource::render(volume, store)
    });
    (StatusCode::CREATED, Json(volume))
}

pub(super) async fn get_volume(
    State(state): State<AppState>,
    Path(volume_id): Path<String>,
) -> ApiResult<Json<VolumeResource>> {
    let volume_id: VolumeId = parse_id(&volume_id)?;
    state
        .store
        .read(|store| {
            store
                .get_volume(&volume_id)
                .map(|volume| VolumeResource::render(volume, store))
        })
        .map(Json)
        .ok_or(ApiError::NotFound)
}

pub(super) async fn delete_volume(
    State(state): State<AppState>,
    Path(volume_id): Path<String>,
) -> ApiResult<StatusCode> {
    let volume_id: VolumeId = parse_id(&volume_id)?;
    if state.store.write(|store| store.delete_volume(&volume_id)) {
        Ok(StatusCode::OK)
    } else {
        Err(ApiError::NotFound)
    }
}

pub(super) async fn attach_volume(
    State(state): State<AppState>,
    Path(volume_id): Path<String>,
    Json(request): Json<AttachRequest>,
) -> ApiResult<Json<AttachmentResource>> {
    let volume_id: VolumeId = parse_id(&volume_id)?;
    let device_id: DeviceId = parse_id(&request.device_id)?;
    state
        .store
        .write(|store| store.attach_volume(&volume_id, &device_id))
        .map(|attachment| Json(AttachmentResource::from(attachment)))
        .ok_or(ApiError::NotFound)
}

pub(super) async fn detach_volume(
    State(state): State<AppState>,
    Path(attachment_id): Path<String>,
) -> ApiResult<StatusCode> {
    let attachment_id: AttachmentId = parse_id(&attachment_id)?;
    if state.store.write(|store| store.detach_volume(&attachment_id)) {
        Ok(StatusCode::OK)
    } else {
        Err(ApiError::NotFound)
    }
}

pub(super) async fn list_devices(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Json<DeviceList>> {
    let options = list_options(&params)?;
    let project = ProjectId::new(project_id);
    let devices = state
        .store
        .read(|store| store.list_devices(&project, &options))
        .into_iter()
        .map(DeviceResource::from)
        .collect();
    Ok(Json(DeviceList { devices }))
}

pub(super) async fn get_device(
    State(state): State<AppState>,
    Path(device_id): Path<String>,
) -> ApiResult<Json<DeviceResource>> {
    let device_id: DeviceId = parse_id(&device_id)?;
    state
        .store
        .read(|store| store.get_device(&device_id))
        .map(|device| Json(DeviceResource::from(device)))
        .ok_or(ApiError::NotFound)
}

pub(super) async fn metadata(State(state): State<AppState>) -> ApiResult<Json<MetadataView>> {
    let view = state
        .store
        .read(|store| state.metadata.project(store))
        .ok_or(ApiError::NotFound)?;
    debug!(volumes = view.volumes.len(), "served metadata");
    Ok(Json(view))
}

pub(super) async fn enable_bgp(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    Json(request): Json<EnableBgpRequest>,
) -> ApiResult<(StatusCode, Json<BgpConfigResource>)> {
    let project = ProjectId::new(project_id);
    let config = state.store.write(|store| store.enable_bgp(&project, request))?;
    Ok((StatusCode::CREATED, Json(BgpConfigResource::from(config))))
}

pub(super) async fn get_bgp_config(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> ApiResult<Json<BgpConfigResource>> {
    let project = ProjectId::new(project_id);
    state
        .store
        .read(|store| store.get_bgp_config(&project))
        .map(|config| Json(BgpConfigResource::from(config)))
        .ok_or(ApiError::NotFound)
}
