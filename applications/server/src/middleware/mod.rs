/// Request middleware
pub mod subdomain;

pub use subdomain::{HostRoute, HostRouter};
