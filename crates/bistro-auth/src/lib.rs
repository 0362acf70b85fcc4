//! # bistro-auth
//!
//! Credentials and access control for Bistro.
//!
//! ## Modules
//!
//! - `jwt` - signed access/refresh token creation and validation
//! - `password` - Argon2id hashing and password policy
//! - `rbac` - role to system-permission mapping

pub mod jwt;
pub mod password;
pub mod rbac;

pub use jwt::{Claims, JwtDecoder, JwtEncoder, TokenPair, TokenType};
pub use password::{PasswordHasher, PasswordValidator};
pub use rbac::{RbacEnforcer, RbacPolicies, SystemPermission};
