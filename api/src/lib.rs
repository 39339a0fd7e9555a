//! HTTP API layer for the Shoply backend
//!
//! Exposes the registration flow over actix-web:
//! - `POST /api/v1/auth/register` - validate payload and send an OTP
//! - `POST /api/v1/auth/verify` - verify the OTP and create the user
//! - `GET /health` - liveness check

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;
