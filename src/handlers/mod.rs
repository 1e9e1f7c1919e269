// handlers/mod.rs - two security tiers
//
// Public (no auth) → Protected (bearer JWT, enforced by middleware::jwt_auth_middleware)
pub mod protected;
pub mod public;
