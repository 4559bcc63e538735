use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::cart::filter::CartFilter;
use business::domain::cart::use_cases::add_item::{AddItemToCartParams, AddItemToCartUseCase};
use business::domain::cart::use_cases::create::CreateCartUseCase;
use business::domain::cart::use_cases::get_all::{GetAllCartsParams, GetAllCartsUseCase};
use business::domain::cart::use_cases::get_by_id::{GetCartByIdParams, GetCartByIdUseCase};

use crate::api::cart::dto::{CartCreatedResponse, CartResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CartApi {
    create_use_case: Arc<dyn CreateCartUseCase>,
    get_by_id_use_case: Arc<dyn GetCartByIdUseCase>,
    get_all_use_case: Arc<dyn GetAllCartsUseCase>,
    add_item_use_case: Arc<dyn AddItemToCartUseCase>,
}

impl CartApi {
    pub fn new(
        create_use_case: Arc<dyn CreateCartUseCase>,
        get_by_id_use_case: Arc<dyn GetCartByIdUseCase>,
        get_all_use_case: Arc<dyn GetAllCartsUseCase>,
        add_item_use_case: Arc<dyn AddItemToCartUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_by_id_use_case,
            get_all_use_case,
            add_item_use_case,
        }
    }
}

/// Cart management API
///
/// Carts are created empty and grow one line per distinct item; adding an
/// item that is already in the cart bumps that line's quantity instead.
#[OpenApi]
impl CartApi {
    /// Create a cart
    ///
    /// Returns the id of the new empty cart; its URI is returned in the
    /// Location header.
    #[oai(path = "/cart", method = "post", tag = "ApiTags::Carts")]
    async fn create(&self) -> CreateCartResponse {
        match self.create_use_case.execute().await {
            Ok(cart) => {
                let location = format!("/cart/{}", cart.id);
                CreateCartResponse::Created(Json(CartCreatedResponse { id: cart.id }), location)
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                CreateCartResponse::InternalError(json)
            }
        }
    }

    /// List carts
    ///
    /// Filters by inclusive price bounds and by line-count bounds, then
    /// windows the matches by offset/limit in insertion order.
    #[oai(path = "/cart", method = "get", tag = "ApiTags::Carts")]
    #[allow(clippy::too_many_arguments)]
    async fn get_all(
        &self,
        offset: Query<Option<u64>>,
        #[oai(validator(minimum(value = "1")))] limit: Query<Option<u64>>,
        #[oai(validator(minimum(value = "0")))] min_price: Query<Option<f64>>,
        #[oai(validator(minimum(value = "0")))] max_price: Query<Option<f64>>,
        min_quantity: Query<Option<u64>>,
        max_quantity: Query<Option<u64>>,
    ) -> GetAllCartsResponse {
        let filter = CartFilter {
            offset: offset.0.unwrap_or(0) as usize,
            limit: limit.0.unwrap_or(10) as usize,
            min_price: min_price.0,
            max_price: max_price.0,
            min_quantity: min_quantity.0.map(|q| q as usize),
            max_quantity: max_quantity.0.map(|q| q as usize),
        };

        match self
            .get_all_use_case
            .execute(GetAllCartsParams { filter })
            .await
        {
            Ok(carts) => {
                let responses: Vec<CartResponse> = carts.into_iter().map(|c| c.into()).collect();
                GetAllCartsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllCartsResponse::InternalError(json)
            }
        }
    }

    /// Get a cart by id
    #[oai(path = "/cart/:id", method = "get", tag = "ApiTags::Carts")]
    async fn get_by_id(&self, id: Path<u64>) -> GetCartByIdResponse {
        match self
            .get_by_id_use_case
            .execute(GetCartByIdParams { id: id.0 })
            .await
        {
            Ok(cart) => GetCartByIdResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetCartByIdResponse::NotFound(json),
                    _ => GetCartByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Add an item to a cart
    ///
    /// Appends a snapshot of the item, or bumps the quantity of its existing
    /// line, and returns the cart with its recomputed total.
    #[oai(
        path = "/cart/:cart_id/add/:item_id",
        method = "post",
        tag = "ApiTags::Carts"
    )]
    async fn add_item(&self, cart_id: Path<u64>, item_id: Path<u64>) -> AddItemToCartResponse {
        match self
            .add_item_use_case
            .execute(AddItemToCartParams {
                cart_id: cart_id.0,
                item_id: item_id.0,
            })
            .await
        {
            Ok(cart) => AddItemToCartResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => AddItemToCartResponse::NotFound(json),
                    _ => AddItemToCartResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateCartResponse {
    #[oai(status = 201)]
    Created(
        Json<CartCreatedResponse>,
        #[oai(header = "Location")] String,
    ),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllCartsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<CartResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCartByIdResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddItemToCartResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
