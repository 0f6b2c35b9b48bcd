mod auth_token;
mod user_identity;
mod user_status;
