//! `reauthd` is a small HTTP service demonstrating the Basic Authentication
//! challenge/response cycle: missing credentials are answered with a `401`
//! challenge, presented credentials with an HTML acknowledgment page whose
//! hidden form lets the client force the challenge again.

pub mod cli;
pub mod reauthd;
