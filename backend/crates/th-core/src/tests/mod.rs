mod models;
mod routes;
