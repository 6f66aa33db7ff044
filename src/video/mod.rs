//! Video identity: extraction from URLs and derived asset URLs

pub mod id;

pub use id::VideoId;
