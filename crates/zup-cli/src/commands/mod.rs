//! CLI command implementations

pub mod projection;
pub mod rotation;
pub mod view;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;
use zup_math::{Mat4, Quat, Vec3};

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned rows of numbers
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Output settings shared by every command.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    format: OutputFormat,
    precision: usize,
}

#[derive(Serialize)]
struct MatrixReport<'a> {
    kind: &'a str,
    rows: [[f32; 4]; 4],
}

#[derive(Serialize)]
struct QuaternionReport<'a> {
    kind: &'a str,
    quaternion: Quat,
    length: f32,
}

impl Output {
    pub fn new(format: OutputFormat, precision: usize) -> Self {
        Self { format, precision }
    }

    /// Renders a matrix under a `kind` label.
    pub fn render_matrix(&self, kind: &str, m: &Mat4) -> Result<String> {
        match self.format {
            OutputFormat::Text => {
                let cells: Vec<String> = m
                    .m
                    .iter()
                    .flatten()
                    .map(|v| format!("{:.*}", self.precision, v))
                    .collect();
                let width = cells.iter().map(String::len).max().unwrap_or(0);

                let mut out = format!("{kind}\n");
                for row in cells.chunks(4) {
                    let line: Vec<String> = row.iter().map(|c| format!("{c:>width$}")).collect();
                    out.push_str(&format!("  [{}]\n", line.join("  ")));
                }
                Ok(out)
            }
            OutputFormat::Json => {
                let report = MatrixReport { kind, rows: m.m };
                serde_json::to_string_pretty(&report).context("Failed to serialize matrix")
            }
        }
    }

    /// Renders a quaternion under a `kind` label.
    pub fn render_quaternion(&self, kind: &str, q: Quat) -> Result<String> {
        match self.format {
            OutputFormat::Text => {
                let p = self.precision;
                Ok(format!(
                    "{kind}\n  x = {:.p$}\n  y = {:.p$}\n  z = {:.p$}\n  w = {:.p$}\n",
                    q.x, q.y, q.z, q.w
                ))
            }
            OutputFormat::Json => {
                let report = QuaternionReport {
                    kind,
                    quaternion: q,
                    length: q.length(),
                };
                serde_json::to_string_pretty(&report).context("Failed to serialize quaternion")
            }
        }
    }

    pub fn print_matrix(&self, kind: &str, m: &Mat4) -> Result<()> {
        print!("{}", self.terminated(self.render_matrix(kind, m)?));
        Ok(())
    }

    pub fn print_quaternion(&self, kind: &str, q: Quat) -> Result<()> {
        print!("{}", self.terminated(self.render_quaternion(kind, q)?));
        Ok(())
    }

    fn terminated(&self, mut s: String) -> String {
        if !s.ends_with('\n') {
            s.push('\n');
        }
        s
    }
}

/// Parse a vector string like "1,2,3" or "-5, 0, 0.5"
pub fn parse_vec3(s: &str) -> Result<Vec3, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(format!(
            "expected three comma-separated components, got {}",
            parts.len()
        ));
    }

    let mut v = [0.0f32; 3];
    for (slot, part) in v.iter_mut().zip(&parts) {
        *slot = part
            .parse::<f32>()
            .map_err(|e| format!("invalid component '{part}': {e}"))?;
    }
    Ok(Vec3::from_array(v))
}

/// Converts `angle` to radians when `degrees` is set.
pub fn to_radians(angle: f32, degrees: bool) -> f32 {
    if degrees { angle.to_radians() } else { angle }
}
