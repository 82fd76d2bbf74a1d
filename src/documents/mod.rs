//! Document form endpoints: index, form, generate, save and PDF export.

pub mod model;
pub mod routes;
