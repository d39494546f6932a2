//! Aryma Agent - Website-grounded conversational agent.
//!
//! Scrapes the Aryma Labs website into topic buckets and answers questions
//! about MMM services, MMM products and experimentation products, using a
//! remote text-generation service when available and fixed templates when
//! it is not.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
