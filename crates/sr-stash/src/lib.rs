//! sr-stash: a small client for the Stash GraphQL API.
//!
//! Requests go through the [`GraphqlTransport`] trait so that the same
//! [`StashClient`] can talk to a live server via [`HttpTransport`] or to an
//! in-process test double.
//!
//! # Module layout
//!
//! - [`graphql`] -- Request envelope, response decoding, and the transport trait.
//! - [`http`] -- reqwest-backed transport.
//! - [`queries`] -- Operation names, query documents, and wire types.
//! - [`client`] -- High-level operations returning domain records.

pub mod client;
pub mod graphql;
pub mod http;
pub mod queries;

pub use client::StashClient;
pub use graphql::{GraphqlRequest, GraphqlTransport};
pub use http::HttpTransport;
