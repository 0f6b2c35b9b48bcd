mod resolve;
mod user_resource;
