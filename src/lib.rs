//! # Simple and type-safe client for the DNS Made Easy API.
//!
//! Implements a client for the DNS Made Easy v2.0 REST API. Every request
//! is signed with an HMAC of the request time, dispatched over blocking
//! HTTP, and comes back as an [ApiResponse] whether or not the API accepted
//! it.
//!
//! ## Examples
//!
//! ```no_run
//! use dnsmadeeasy::Client;
//! use dnsmadeeasy::model::{Domain, Page};
//! use dnsmadeeasy::record::{Record, RecordType};
//!
//! let client = Client::builder()
//!     .api_key("<APIKEY>")
//!     .secret_key("<SECRETKEY>")
//!     .sandbox(true)
//!     .build()
//!     .unwrap();
//!
//! let domains: Page<Domain> = client.domains().list(None, None).unwrap().json().unwrap();
//! let domain_id = domains.data[0].id;
//!
//! let record = Record::new("www", RecordType::A, "192.0.2.10", 1800);
//! let created = client.records(domain_id).add(&record).unwrap();
//! assert!(created.success());
//! ```

pub mod auth;
mod client;
pub mod config;
mod errors;
pub mod model;
mod payload;
pub mod record;
pub mod resource;
mod response;
pub mod rest;
pub mod transport;
pub mod uri_template;

pub use client::*;
pub use config::Configuration;
pub use errors::*;
pub use payload::*;
pub use response::*;
