/// API route modules
pub mod albums;
pub mod forms;
pub mod health;
pub mod subdomains;
