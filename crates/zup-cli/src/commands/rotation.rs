//! rotation and quaternion commands

use anyhow::Result;
use tracing::{debug, trace};
use zup_math::{quat_rotation_roll_pitch_yaw, rotation_roll_pitch_yaw, Vec3};

use super::{to_radians, Output};
use crate::AngleArgs;

/// Angles in radians as (roll, pitch, yaw).
fn radians(args: &AngleArgs) -> (f32, f32, f32) {
    (
        to_radians(args.roll, args.degrees),
        to_radians(args.pitch, args.degrees),
        to_radians(args.yaw, args.degrees),
    )
}

pub fn run_matrix(args: AngleArgs, output: &Output) -> Result<()> {
    trace!(roll = args.roll, pitch = args.pitch, yaw = args.yaw, degrees = args.degrees, "rotation::run_matrix");

    let (roll, pitch, yaw) = radians(&args);
    let m = rotation_roll_pitch_yaw(roll, pitch, yaw);
    debug!(forward = ?m.transform_vector(Vec3::FORWARD), "Built rotation");

    output.print_matrix("rotation", &m)
}

pub fn run_quaternion(args: AngleArgs, output: &Output) -> Result<()> {
    trace!(roll = args.roll, pitch = args.pitch, yaw = args.yaw, degrees = args.degrees, "rotation::run_quaternion");

    let (roll, pitch, yaw) = radians(&args);
    let q = quat_rotation_roll_pitch_yaw(pitch, yaw, roll);
    debug!(length = q.length(), "Built quaternion");

    output.print_quaternion("quaternion", q)
}
