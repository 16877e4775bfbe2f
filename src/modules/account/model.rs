use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct UserAccountResponse {
    pub success: bool,
    pub user_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SellerAccountResponse {
    pub success: bool,
    pub seller_id: String,
    pub role: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AdminAccountResponse {
    pub success: bool,
    pub admin_id: String,
    pub role: String,
}
