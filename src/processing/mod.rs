//! Address and subnet computation.
//!
//! This module contains the calculation stages, in data flow order:
//! - [`parser`] - text to validated address and prefix
//! - [`calculator`] - validated input to [`ResultModel`](crate::models::ResultModel)
//! - [`subnetter`] - network to ordered child subnets

mod calculator;
mod parser;
mod subnetter;

// Re-export public functions
pub use calculator::compute;
pub use parser::{parse, parse_address, parse_mask, split_cidr};
pub use subnetter::{
    parse_new_prefix, subdivide, subdivide_with_limit, summarize, DEFAULT_MAX_SUBNETS,
};
