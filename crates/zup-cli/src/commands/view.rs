//! look-at and look-to commands

use anyhow::{Context, Result};
use tracing::{debug, trace};
use zup_math::{check, look_at, look_to};

use super::Output;
use crate::{LookAtArgs, LookToArgs};

pub fn run_look_at(args: LookAtArgs, output: &Output) -> Result<()> {
    trace!(eye = ?args.eye, focus = ?args.focus, up = ?args.up, "view::run_look_at");

    check::look_at(args.eye, args.focus, args.up).context("Invalid look-at input")?;

    let view = look_at(args.eye, args.focus, args.up);
    debug!(distance = (args.focus - args.eye).length(), "Built look-at view");

    output.print_matrix("look-at", &view)
}

pub fn run_look_to(args: LookToArgs, output: &Output) -> Result<()> {
    trace!(eye = ?args.eye, direction = ?args.direction, up = ?args.up, "view::run_look_to");

    check::look_to(args.direction, args.up).context("Invalid look-to input")?;

    let view = look_to(args.eye, args.direction, args.up);
    debug!(forward = ?view.col(0).truncate(), "Built look-to view");

    output.print_matrix("look-to", &view)
}
