//! zup - Z-up view, projection and rotation matrices from the command line
//!
//! Thin front end over `zup-math`: every subcommand validates its input,
//! builds one matrix or quaternion and prints it.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};
use zup_math::Vec3;

mod commands;

use commands::{parse_vec3, Output, OutputFormat};

#[derive(Parser)]
#[command(name = "zup")]
#[command(author, version, about = "Z-up view, projection and rotation matrices")]
#[command(long_about = "
Builds view, projection and rotation matrices for a Z-up, X-forward world.
Matrices print as rows and transform row vectors (v' = v * M).

Examples:
  zup look-at --eye=-10,0,2 --focus 0,0,0
  zup perspective-fov --fov 60 --degrees --aspect 1.777 --near 0.1 --far 1000
  zup orthographic --width 20 --height 10 --near 0 --far 100
  zup rotation --roll 0 --pitch 15 --yaw 90 --degrees
  zup --format json quaternion --yaw 1.5708
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Digits after the decimal point in text output
    #[arg(short, long, global = true, default_value_t = 6)]
    precision: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// View matrix looking from an eye position at a focus point
    #[command(name = "look-at")]
    LookAt(LookAtArgs),

    /// View matrix looking from an eye position along a direction
    #[command(name = "look-to")]
    LookTo(LookToArgs),

    /// Perspective projection from near-plane extents
    #[command(visible_alias = "persp")]
    Perspective(ExtentArgs),

    /// Perspective projection from a vertical field of view
    #[command(name = "perspective-fov", visible_alias = "fov")]
    PerspectiveFov(FovArgs),

    /// Perspective projection from asymmetric near-plane extents
    #[command(name = "perspective-off-center")]
    PerspectiveOffCenter(OffCenterArgs),

    /// Orthographic projection from view-volume extents
    #[command(visible_alias = "ortho")]
    Orthographic(ExtentArgs),

    /// Orthographic projection from asymmetric view-volume extents
    #[command(name = "orthographic-off-center")]
    OrthographicOffCenter(OffCenterArgs),

    /// Rotation matrix from roll, pitch and yaw
    #[command(visible_alias = "rot")]
    Rotation(AngleArgs),

    /// Rotation quaternion from roll, pitch and yaw
    #[command(visible_alias = "quat")]
    Quaternion(AngleArgs),
}

#[derive(Args)]
struct LookAtArgs {
    /// Eye position (x,y,z)
    #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
    eye: Vec3,

    /// Point to look at (x,y,z)
    #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
    focus: Vec3,

    /// Up direction (x,y,z)
    #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true, default_value = "0,0,1")]
    up: Vec3,
}

#[derive(Args)]
struct LookToArgs {
    /// Eye position (x,y,z)
    #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
    eye: Vec3,

    /// Viewing direction (x,y,z); need not be unit length
    #[arg(short, long, value_parser = parse_vec3, allow_hyphen_values = true)]
    direction: Vec3,

    /// Up direction (x,y,z)
    #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true, default_value = "0,0,1")]
    up: Vec3,
}

#[derive(Args)]
struct ExtentArgs {
    /// View-volume width (at the near plane for perspective)
    #[arg(short, long, allow_negative_numbers = true)]
    width: f32,

    /// View-volume height (at the near plane for perspective)
    #[arg(short = 'H', long, allow_negative_numbers = true)]
    height: f32,

    /// Near clip distance
    #[arg(short, long, allow_negative_numbers = true)]
    near: f32,

    /// Far clip distance
    #[arg(long, allow_negative_numbers = true)]
    far: f32,
}

#[derive(Args)]
struct FovArgs {
    /// Vertical field of view (radians, or degrees with --degrees)
    #[arg(long)]
    fov: f32,

    /// Width / height aspect ratio
    #[arg(short, long)]
    aspect: f32,

    /// Near clip distance
    #[arg(short, long)]
    near: f32,

    /// Far clip distance
    #[arg(long)]
    far: f32,

    /// Interpret --fov in degrees
    #[arg(short, long)]
    degrees: bool,
}

#[derive(Args)]
struct OffCenterArgs {
    /// Left extent
    #[arg(short, long, allow_negative_numbers = true)]
    left: f32,

    /// Right extent
    #[arg(short, long, allow_negative_numbers = true)]
    right: f32,

    /// Bottom extent
    #[arg(short, long, allow_negative_numbers = true)]
    bottom: f32,

    /// Top extent
    #[arg(short, long, allow_negative_numbers = true)]
    top: f32,

    /// Near clip distance
    #[arg(short, long, allow_negative_numbers = true)]
    near: f32,

    /// Far clip distance
    #[arg(long, allow_negative_numbers = true)]
    far: f32,
}

#[derive(Args)]
struct AngleArgs {
    /// Rotation about the forward (X) axis
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    roll: f32,

    /// Rotation about the right (Y) axis
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pitch: f32,

    /// Rotation about the up (Z) axis
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    yaw: f32,

    /// Interpret angles in degrees
    #[arg(short, long)]
    degrees: bool,
}

/// Initialize logging.
///
/// `RUST_LOG` overrides the default filter, which is `warn`, or `debug`
/// with `--verbose`.
fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "debug" } else { "warn" })
    });

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let output = Output::new(cli.format, cli.precision);

    match cli.command {
        Commands::LookAt(args) => commands::view::run_look_at(args, &output),
        Commands::LookTo(args) => commands::view::run_look_to(args, &output),
        Commands::Perspective(args) => commands::projection::run_perspective(args, &output),
        Commands::PerspectiveFov(args) => commands::projection::run_perspective_fov(args, &output),
        Commands::PerspectiveOffCenter(args) => {
            commands::projection::run_perspective_off_center(args, &output)
        }
        Commands::Orthographic(args) => commands::projection::run_orthographic(args, &output),
        Commands::OrthographicOffCenter(args) => {
            commands::projection::run_orthographic_off_center(args, &output)
        }
        Commands::Rotation(args) => commands::rotation::run_matrix(args, &output),
        Commands::Quaternion(args) => commands::rotation::run_quaternion(args, &output),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_look_at_with_negative_vector() {
        let cli = Cli::try_parse_from(["zup", "look-at", "--eye", "-10,0,2", "--focus", "0,0,0"])
            .unwrap();
        match cli.command {
            Commands::LookAt(args) => {
                assert_eq!(args.eye, Vec3::new(-10.0, 0.0, 2.0));
                assert_eq!(args.up, Vec3::UP);
            }
            _ => panic!("expected look-at"),
        }
    }

    #[test]
    fn test_parse_global_options() {
        let cli = Cli::try_parse_from([
            "zup", "rotation", "--yaw", "-90", "--degrees", "--format", "json", "-p", "3",
        ])
        .unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.precision, 3);
        match cli.command {
            Commands::Rotation(args) => {
                assert_eq!(args.yaw, -90.0);
                assert_eq!(args.roll, 0.0);
                assert!(args.degrees);
            }
            _ => panic!("expected rotation"),
        }
    }

    #[test]
    fn test_parse_off_center_negative_extents() {
        let cli = Cli::try_parse_from([
            "zup",
            "orthographic-off-center",
            "--left",
            "-4",
            "--right",
            "4",
            "--bottom",
            "-2",
            "--top",
            "2",
            "--near",
            "-1",
            "--far",
            "10",
        ])
        .unwrap();
        match cli.command {
            Commands::OrthographicOffCenter(args) => {
                assert_eq!(args.left, -4.0);
                assert_eq!(args.near, -1.0);
            }
            _ => panic!("expected orthographic-off-center"),
        }
    }

    #[test]
    fn test_look_to_straight_up_is_rejected() {
        let cli = Cli::try_parse_from(["zup", "look-to", "--eye", "0,0,0", "-d", "0,0,5"]).unwrap();
        let output = Output::new(OutputFormat::Text, 6);
        let err = match cli.command {
            Commands::LookTo(args) => commands::view::run_look_to(args, &output).unwrap_err(),
            _ => panic!("expected look-to"),
        };
        assert!(format!("{err:#}").contains("parallel"));
    }

    #[test]
    fn test_rejects_malformed_vector() {
        assert!(Cli::try_parse_from(["zup", "look-to", "--eye", "1,2", "-d", "1,0,0"]).is_err());
    }
}
