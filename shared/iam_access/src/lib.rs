//! IAM resource access for the admin bootstrap tooling
//!
//! This crate wraps the IAM API calls the bootstrap binary needs: group
//! lookup and creation, managed policy attachment, user lookup and creation,
//! and group membership. Every mutating operation is guarded by an existence
//! check so repeated runs converge without touching resources that are
//! already in place.

pub mod group;
pub mod types;
pub mod user;
