use actix_web::{web, HttpResponse};
use shared_types::ShiftInput;

use crate::errors::ApiError;
use crate::state::PortalState;

/// Pure calculation; touches no stored data
pub async fn exit_time(
    state: web::Data<PortalState>,
    request: web::Json<ShiftInput>,
) -> Result<HttpResponse, ApiError> {
    let result = state.shift_calculator.compute_input(&request)?;
    Ok(HttpResponse::Ok().json(result))
}
