//! Server-side API backend and business logic.
//!
//! This module contains the backend for the gym management platform: the JSON API,
//! the guarded dashboard pages, data access and the scheduled expiry sweep. The
//! backend uses Axum as the web framework, SeaORM for database operations and
//! tower-sessions for cookie sessions stored in the same SQLite database.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Quotas, ownership checks, mail and the expiry sweep
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session claims, the API auth guard and the page guard
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, mailer, upload directory)
//! - **Startup** (`startup`) - Database, sessions, HTTP client and superadmin bootstrap
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Scheduler** (`scheduler/`) - Cron job for membership expiry notifications
//!
//! # Request Flow
//!
//! 1. **Router** receives the request; page paths pass the page guard first
//! 2. **Controller** authenticates through `AuthGuard`, converts DTOs to params
//! 3. **Service** applies quotas and ownership, calls the data layer
//! 4. **Data** queries the database, converts entities to domain models
//! 5. **Controller** converts the domain model to a DTO and responds

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
