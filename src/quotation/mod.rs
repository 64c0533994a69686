//! Quotation domain: the comparison matrix, selection state, and the
//! value objects shared by the load and dispatch pipelines.

pub mod domain;
pub mod services;
