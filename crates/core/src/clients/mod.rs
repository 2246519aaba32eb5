//! Client directory domain

pub mod service;

pub use service::{group_clients, ClientService};
