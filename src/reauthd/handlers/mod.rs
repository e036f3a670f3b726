pub mod headers;
pub mod health;
pub mod login;
