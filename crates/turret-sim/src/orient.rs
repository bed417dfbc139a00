//! Head orientation: yaw-only interpolated tracking.
//!
//! Headings follow the rig convention: y is up and an identity rotation faces +Z.

use glam::{EulerRot, Quat, Vec3};

/// Yaw-only rotation facing from `from` toward `to`.
/// `None` when `to` is directly above or below `from`.
pub fn look_rotation(from: Vec3, to: Vec3) -> Option<Quat> {
    let dir = to - from;
    if dir.x * dir.x + dir.z * dir.z <= f32::EPSILON {
        return None;
    }
    Some(Quat::from_rotation_y(dir.x.atan2(dir.z)))
}

/// Rotation facing `yaw` radians about +Y.
pub fn rest_rotation(yaw: f32) -> Quat {
    Quat::from_rotation_y(yaw)
}

/// Move `current` toward `desired` by `turn_speed * elapsed` of the remaining
/// angle (clamped to [0, 1]), keeping only the yaw of the result.
pub fn turn_toward(current: Quat, desired: Quat, turn_speed: f32, elapsed: f32) -> Quat {
    let t = (turn_speed * elapsed).clamp(0.0, 1.0);
    let t = if t.is_nan() { 0.0 } else { t };
    let blended = current.normalize().slerp(desired.normalize(), t);
    let (yaw, _pitch, _roll) = blended.to_euler(EulerRot::YXZ);
    Quat::from_rotation_y(yaw)
}

/// Angle in radians between two headings.
pub fn heading_error(current: Quat, desired: Quat) -> f32 {
    current.angle_between(desired)
}
