//! HTTP layer for the Cinedex backend: the actix-web app factory, the
//! `/auth` routes and their middleware.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
