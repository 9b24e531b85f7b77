use actix_web::error::PayloadError;
use actix_web::{post, web, HttpRequest, HttpResponse};
use futures::StreamExt;
use log::{debug, error, info};
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::OrderError;
use crate::order_batch::{body_snippet, OrderBatch, ShapeError};

pub const PLACEHOLDER_ORDER_ID: &str = "ORD-2024-001234";
pub const SUCCESS_MESSAGE: &str = "Order created successfully";
pub const BODY_FORMAT: &str = "array";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CreateOrderResponse {
    pub success: bool,
    pub message: String,
    #[serde(rename = "orderId")]
    pub order_id: String,
    pub orders: usize,
    #[serde(rename = "bodyFormat")]
    pub body_format: String,
}

impl CreateOrderResponse {
    /// Canned reply; only the order count depends on the request.
    pub fn accepted(orders: usize) -> Self {
        Self {
            success: true,
            message: SUCCESS_MESSAGE.to_string(),
            order_id: PLACEHOLDER_ORDER_ID.to_string(),
            orders,
            body_format: BODY_FORMAT.to_string(),
        }
    }
}

fn log_request_head(req: &HttpRequest) {
    info!("Received {} request to {}", req.method(), req.path());
    info!("Headers:");
    let headers = req.headers();
    for name in headers.keys() {
        let values: Vec<&str> = headers
            .get_all(name)
            .map(|v| v.to_str().unwrap_or("<non-utf8>"))
            .collect();
        info!("  {}: [{}]", name, values.join(" "));
    }
}

// Drains the whole stream before anything looks at the body
async fn read_body(mut payload: web::Payload) -> Result<web::Bytes, PayloadError> {
    let mut body = web::BytesMut::new();
    while let Some(chunk) = payload.next().await {
        body.extend_from_slice(&chunk?);
    }
    Ok(body.freeze())
}

#[post("/createOrder")]
pub async fn create_order(
    req: HttpRequest,
    payload: web::Payload,
) -> Result<HttpResponse, OrderError> {
    handle_create_order(req, payload).await
}

async fn handle_create_order(
    req: HttpRequest,
    payload: web::Payload,
) -> Result<HttpResponse, OrderError> {
    let started = Instant::now();
    log_request_head(&req);

    let body = match read_body(payload).await {
        Ok(b) => b,
        Err(e) => {
            error!("Failed to read request body: {}", e);
            return Err(e.into());
        }
    };
    info!("Body: {}", String::from_utf8_lossy(&body));

    let batch = match OrderBatch::parse(&body) {
        Ok(batch) => batch,
        Err(e) => {
            match &e {
                ShapeError::Malformed(inner) => {
                    error!(
                        "Body is not valid JSON ({}). Got: {}",
                        inner,
                        body_snippet(&body)
                    );
                }
                other => {
                    error!(
                        "Body is not a JSON array of objects ({}). Got: {}",
                        other,
                        body_snippet(&body)
                    );
                }
            }
            return Err(e.into());
        }
    };

    info!("SUCCESS: Parsed as direct array with {} orders", batch.len());

    let resp = HttpResponse::Ok().json(CreateOrderResponse::accepted(batch.len()));
    info!("Responded with success");
    debug!("createOrder handled in {:?}", started.elapsed());
    Ok(resp)
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/orderextws/public/Orders").service(create_order));
}
