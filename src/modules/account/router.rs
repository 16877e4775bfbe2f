use axum::{Router, routing::get};

use crate::modules::account::controller::{
    get_admin_account, get_seller_account, get_user_account,
};
use crate::state::AppState;

pub fn init_user_account_router() -> Router<AppState> {
    Router::new().route("/me", get(get_user_account))
}

pub fn init_seller_account_router() -> Router<AppState> {
    Router::new().route("/me", get(get_seller_account))
}

pub fn init_admin_account_router() -> Router<AppState> {
    Router::new().route("/me", get(get_admin_account))
}
