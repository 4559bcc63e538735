use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::item::errors::ItemError;
use business::domain::item::filter::ItemFilter;
use business::domain::item::use_cases::create::{CreateItemParams, CreateItemUseCase};
use business::domain::item::use_cases::delete::{DeleteItemParams, DeleteItemUseCase};
use business::domain::item::use_cases::get_all::{GetAllItemsParams, GetAllItemsUseCase};
use business::domain::item::use_cases::get_by_id::{GetItemByIdParams, GetItemByIdUseCase};
use business::domain::item::use_cases::patch::{PatchItemParams, PatchItemUseCase};
use business::domain::item::use_cases::replace::{ReplaceItemParams, ReplaceItemUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::item::dto::{ItemRequest, ItemResponse, PatchItemRequest};
use crate::api::tags::ApiTags;

pub struct ItemApi {
    create_use_case: Arc<dyn CreateItemUseCase>,
    get_by_id_use_case: Arc<dyn GetItemByIdUseCase>,
    get_all_use_case: Arc<dyn GetAllItemsUseCase>,
    replace_use_case: Arc<dyn ReplaceItemUseCase>,
    patch_use_case: Arc<dyn PatchItemUseCase>,
    delete_use_case: Arc<dyn DeleteItemUseCase>,
}

impl ItemApi {
    pub fn new(
        create_use_case: Arc<dyn CreateItemUseCase>,
        get_by_id_use_case: Arc<dyn GetItemByIdUseCase>,
        get_all_use_case: Arc<dyn GetAllItemsUseCase>,
        replace_use_case: Arc<dyn ReplaceItemUseCase>,
        patch_use_case: Arc<dyn PatchItemUseCase>,
        delete_use_case: Arc<dyn DeleteItemUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_by_id_use_case,
            get_all_use_case,
            replace_use_case,
            patch_use_case,
            delete_use_case,
        }
    }
}

/// Item management API
///
/// CRUD endpoints over the item collection. Deletion is soft: deleted items
/// stay retrievable through `show_deleted`.
#[OpenApi]
impl ItemApi {
    /// List items
    ///
    /// Filters by inclusive price bounds and deletion visibility, then
    /// windows the matches by offset/limit in insertion order.
    #[oai(path = "/item", method = "get", tag = "ApiTags::Items")]
    #[allow(clippy::too_many_arguments)]
    async fn get_all(
        &self,
        offset: Query<Option<u64>>,
        #[oai(validator(minimum(value = "1")))] limit: Query<Option<u64>>,
        #[oai(validator(minimum(value = "0")))] min_price: Query<Option<f64>>,
        #[oai(validator(minimum(value = "0")))] max_price: Query<Option<f64>>,
        show_deleted: Query<Option<bool>>,
    ) -> GetAllItemsResponse {
        let filter = ItemFilter {
            offset: offset.0.unwrap_or(0) as usize,
            limit: limit.0.unwrap_or(10) as usize,
            min_price: min_price.0,
            max_price: max_price.0,
            show_deleted: show_deleted.0.unwrap_or(false),
        };

        match self
            .get_all_use_case
            .execute(GetAllItemsParams { filter })
            .await
        {
            Ok(items) => {
                let responses: Vec<ItemResponse> = items.into_iter().map(|i| i.into()).collect();
                GetAllItemsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllItemsResponse::InternalError(json)
            }
        }
    }

    /// Get an item by id
    ///
    /// Soft-deleted items are reported as not found.
    #[oai(path = "/item/:id", method = "get", tag = "ApiTags::Items")]
    async fn get_by_id(&self, id: Path<u64>) -> GetItemByIdResponse {
        match self
            .get_by_id_use_case
            .execute(GetItemByIdParams { id: id.0 })
            .await
        {
            Ok(item) => GetItemByIdResponse::Ok(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetItemByIdResponse::NotFound(json),
                    _ => GetItemByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Create an item
    ///
    /// The store assigns the id; the new resource's URI is returned in the
    /// Location header.
    #[oai(path = "/item", method = "post", tag = "ApiTags::Items")]
    async fn create(&self, body: Json<ItemRequest>) -> CreateItemResponse {
        let params = CreateItemParams {
            name: body.0.name,
            price: body.0.price,
            deleted: body.0.deleted,
        };

        match self.create_use_case.execute(params).await {
            Ok(item) => {
                let location = format!("/item/{}", item.id);
                CreateItemResponse::Created(Json(item.into()), location)
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateItemResponse::BadRequest(json),
                    _ => CreateItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Replace an item
    ///
    /// Full replacement of an existing record. A missing id yields 304 and
    /// never creates the resource.
    #[oai(path = "/item/:id", method = "put", tag = "ApiTags::Items")]
    async fn replace(&self, id: Path<u64>, body: Json<ItemRequest>) -> ReplaceItemResponse {
        let params = ReplaceItemParams {
            id: id.0,
            name: body.0.name,
            price: body.0.price,
            deleted: body.0.deleted,
        };

        match self.replace_use_case.execute(params).await {
            Ok(item) => ReplaceItemResponse::Ok(Json(item.into())),
            Err(ItemError::NotFound) => ReplaceItemResponse::NotModified,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => ReplaceItemResponse::BadRequest(json),
                    _ => ReplaceItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Patch an item
    ///
    /// Applies only the provided fields. Missing and soft-deleted ids yield
    /// 304; a body with an unknown field is rejected with 400.
    #[oai(path = "/item/:id", method = "patch", tag = "ApiTags::Items")]
    async fn patch(&self, id: Path<u64>, body: Json<PatchItemRequest>) -> PatchItemResponse {
        let params = PatchItemParams {
            id: id.0,
            name: body.0.name,
            price: body.0.price,
        };

        match self.patch_use_case.execute(params).await {
            Ok(item) => PatchItemResponse::Ok(Json(item.into())),
            Err(ItemError::NotFound) => PatchItemResponse::NotModified,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => PatchItemResponse::BadRequest(json),
                    _ => PatchItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete an item
    ///
    /// Soft delete: flips the deleted flag and returns the record. Repeated
    /// deletes are harmless; only an id that never existed fails.
    #[oai(path = "/item/:id", method = "delete", tag = "ApiTags::Items")]
    async fn delete(&self, id: Path<u64>) -> DeleteItemResponse {
        match self
            .delete_use_case
            .execute(DeleteItemParams { id: id.0 })
            .await
        {
            Ok(item) => DeleteItemResponse::Ok(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteItemResponse::NotFound(json),
                    _ => DeleteItemResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllItemsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ItemResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetItemByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ItemResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateItemResponse {
    #[oai(status = 201)]
    Created(Json<ItemResponse>, #[oai(header = "Location")] String),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ReplaceItemResponse {
    #[oai(status = 200)]
    Ok(Json<ItemResponse>),
    #[oai(status = 304)]
    NotModified,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum PatchItemResponse {
    #[oai(status = 200)]
    Ok(Json<ItemResponse>),
    #[oai(status = 304)]
    NotModified,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteItemResponse {
    #[oai(status = 200)]
    Ok(Json<ItemResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
