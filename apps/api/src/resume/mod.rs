// Resume record plumbing: text aggregation for scoring and the JSON exchange format.

pub mod aggregate;
pub mod document;
pub mod handlers;
