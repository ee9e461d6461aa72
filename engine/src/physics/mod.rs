//! Physics module - kinematic integration and collision detection.
//!
//! Pure simulation math with no rendering or platform dependencies.

pub mod collision;
pub mod kinematics;

pub use collision::{Aabb, BoundingBox, aabb_overlap};
pub use kinematics::KinematicBody;
