//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the application:
//! REST endpoints for students, courses and enrollments, the business rules behind them
//! and data access. The backend uses Axum as the web framework and SeaORM for database
//! operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool)
//! - **Startup** (`startup`) - Database connection, migrations and CORS setup
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Extractors** (`extractor`) - Request extractors rejecting with the error envelope
//! - **Utilities** (`util/`) - Request value parsing and validation helpers
//!
//! # Request Flow
//!
//! A typical request flows through these layers:
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** validates the DTO into params, calls service
//! 3. **Service** executes business logic, orchestrates data operations
//! 4. **Data** queries database, converts entities to domain models
//! 5. **Service** returns domain model to controller
//! 6. **Controller** converts domain model to DTO, returns HTTP response
//!
//! # Feature Gates
//!
//! This module is only available with the `server` feature flag enabled.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod extractor;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
