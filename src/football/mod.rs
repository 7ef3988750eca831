//! Match domain: line-up notation, goal orientation, season selection and plus-minus.

pub mod compute;
pub mod facts;
pub mod goals;
pub mod lineup;
pub mod pipeline;
pub mod season;
pub mod types;
