//! Projection commands

use anyhow::{Context, Result};
use tracing::{debug, info, trace};
use zup_math::{
    check, orthographic, orthographic_off_center, perspective, perspective_fov,
    perspective_off_center,
};

use super::{to_radians, Output};
use crate::{ExtentArgs, FovArgs, OffCenterArgs};

pub fn run_perspective(args: ExtentArgs, output: &Output) -> Result<()> {
    trace!(width = args.width, height = args.height, near = args.near, far = args.far, "projection::run_perspective");

    check::perspective(args.width, args.height, args.near, args.far)
        .context("Invalid perspective input")?;
    warn_reversed(args.near, args.far);

    let proj = perspective(args.width, args.height, args.near, args.far);
    output.print_matrix("perspective", &proj)
}

pub fn run_perspective_fov(args: FovArgs, output: &Output) -> Result<()> {
    trace!(fov = args.fov, aspect = args.aspect, near = args.near, far = args.far, degrees = args.degrees, "projection::run_perspective_fov");

    let fov = to_radians(args.fov, args.degrees);
    check::perspective_fov(fov, args.aspect, args.near, args.far)
        .context("Invalid perspective-fov input")?;
    warn_reversed(args.near, args.far);

    let proj = perspective_fov(fov, args.aspect, args.near, args.far);
    // Near-plane extents of the equivalent `perspective` call
    let view_height = 2.0 * args.near * (0.5 * fov).tan();
    debug!(fov_radians = fov, view_width = view_height * args.aspect, view_height, "Built perspective-fov");

    output.print_matrix("perspective-fov", &proj)
}

pub fn run_perspective_off_center(args: OffCenterArgs, output: &Output) -> Result<()> {
    trace!(left = args.left, right = args.right, bottom = args.bottom, top = args.top, near = args.near, far = args.far, "projection::run_perspective_off_center");

    check::perspective_off_center(args.left, args.right, args.bottom, args.top, args.near, args.far)
        .context("Invalid perspective-off-center input")?;
    warn_reversed(args.near, args.far);

    let proj =
        perspective_off_center(args.left, args.right, args.bottom, args.top, args.near, args.far);
    output.print_matrix("perspective-off-center", &proj)
}

pub fn run_orthographic(args: ExtentArgs, output: &Output) -> Result<()> {
    trace!(width = args.width, height = args.height, near = args.near, far = args.far, "projection::run_orthographic");

    check::orthographic(args.width, args.height, args.near, args.far)
        .context("Invalid orthographic input")?;
    warn_reversed(args.near, args.far);

    let proj = orthographic(args.width, args.height, args.near, args.far);
    output.print_matrix("orthographic", &proj)
}

pub fn run_orthographic_off_center(args: OffCenterArgs, output: &Output) -> Result<()> {
    trace!(left = args.left, right = args.right, bottom = args.bottom, top = args.top, near = args.near, far = args.far, "projection::run_orthographic_off_center");

    check::orthographic_off_center(args.left, args.right, args.bottom, args.top, args.near, args.far)
        .context("Invalid orthographic-off-center input")?;
    warn_reversed(args.near, args.far);

    let proj =
        orthographic_off_center(args.left, args.right, args.bottom, args.top, args.near, args.far);
    output.print_matrix("orthographic-off-center", &proj)
}

fn warn_reversed(near: f32, far: f32) {
    if far < near {
        info!(near, far, "far < near, building a reversed-depth projection");
    }
}
