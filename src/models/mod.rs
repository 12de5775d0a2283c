pub mod candidate;
pub mod comment;
pub mod metrics;
pub mod notification;
pub mod user;
