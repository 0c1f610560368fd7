//! Unified application error type.
//! All modules (db, store, view, server, cli) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use crate::models::event::ValidationError;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Record validation
    // ---------------------------
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Server errors
    // ---------------------------
    #[error("Server error: {0}")]
    Server(String),

    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;

/// Every failure on the read path surfaces as a generic error page.
/// The cause is only written to the log, never to the client.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!(error = %self, "request failed");

        let body = "<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\"><title>Error</title></head>\
                    <body><h1>Something went wrong</h1>\
                    <p>The events could not be loaded. Please try again later.</p></body></html>\n";

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            body,
        )
            .into_response()
    }
}
