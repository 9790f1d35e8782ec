//! Arithmetic Operations HTTP Service
//!
//! A small HTTP service exposing arithmetic operations as
//! query-parameter-driven GET endpoints, built with Tokio and Axum.
//!
//! # Architecture Overview
//! ```text
//!                  ┌──────────────────────────────────────────────┐
//!                  │               CALC SERVICE                    │
//!                  │                                               │
//!  Client Request  │  ┌────────┐   ┌──────────┐   ┌────────────┐  │
//!  ────────────────┼─▶│  http  │──▶│ handlers │──▶│    ops     │  │
//!                  │  │ server │   │          │   │ (pure f64) │  │
//!  Client Response │  └────────┘   └──────────┘   └────────────┘  │
//!  ◀───────────────┼──────┘                                       │
//!                  │  ┌─────────────────────────────────────────┐ │
//!                  │  │          Cross-Cutting Concerns          │ │
//!                  │  │  ┌────────┐ ┌─────────────┐ ┌─────────┐  │ │
//!                  │  │  │ config │ │observability│ │lifecycle│  │ │
//!                  │  │  └────────┘ └─────────────┘ └─────────┘  │ │
//!                  │  └─────────────────────────────────────────┘ │
//!                  └──────────────────────────────────────────────┘
//! ```
//!
//! Each request is independent: no shared mutable state, no persistence,
//! exactly one state transition per request (received → validated →
//! responded, or received → faulted → responded).

// Core subsystems
pub mod config;
pub mod handlers;
pub mod http;
pub mod ops;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
