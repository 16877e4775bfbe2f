use axum::Json;

use crate::middleware::identity::{AdminIdentity, UserIdentity};
use crate::modules::account::model::{
    AdminAccountResponse, SellerAccountResponse, UserAccountResponse,
};

pub async fn get_user_account(UserIdentity(identity): UserIdentity) -> Json<UserAccountResponse> {
    Json(UserAccountResponse {
        success: true,
        user_id: identity.subject().to_string(),
    })
}

pub async fn get_seller_account(
    AdminIdentity(identity): AdminIdentity,
) -> Json<SellerAccountResponse> {
    Json(SellerAccountResponse {
        success: true,
        seller_id: identity.subject().to_string(),
        role: identity.role().unwrap_or_default().to_string(),
    })
}

pub async fn get_admin_account(AdminIdentity(identity): AdminIdentity) -> Json<AdminAccountResponse> {
    Json(AdminAccountResponse {
        success: true,
        admin_id: identity.subject().to_string(),
        role: identity.role().unwrap_or_default().to_string(),
    })
}
