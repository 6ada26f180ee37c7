use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

use truncplanes::api::{Family323Plus, Family423, Family523, TruncatedTetrahedron};

#[derive(Parser)]
#[command(name = "truncplanes")]
#[command(about = "Vertex generator for truncation-plane shape families")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the vertex set of a family member and emit it as JSON
    Vertices {
        /// Family name: 323plus | 423 | 523 | truncated-tetrahedron
        #[arg(long)]
        family: String,
        /// Distance parameters: `a c` for the two-parameter families,
        /// a single `truncation` for truncated-tetrahedron
        params: Vec<f64>,
        /// Output file; stdout when omitted
        #[arg(long)]
        out: Option<String>,
    },
    /// List known families and their documented parameter intervals
    Families,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Vertices {
            family,
            params,
            out,
        } => vertices(&family, &params, out),
        Action::Families => families(),
    }
}

fn vertices(family: &str, params: &[f64], out: Option<String>) -> Result<()> {
    let verts = match (family, params) {
        ("323plus", [a, c]) => Family323Plus.build(*a, *c)?,
        ("423", [a, c]) => Family423.build(*a, *c)?,
        ("523", [a, c]) => Family523.build(*a, *c)?,
        ("truncated-tetrahedron", [t]) => TruncatedTetrahedron.build(*t)?,
        ("323plus" | "423" | "523", ps) => {
            bail!("family `{family}` takes 2 parameters (a c), got {}", ps.len())
        }
        ("truncated-tetrahedron", ps) => {
            bail!("family `{family}` takes 1 parameter (truncation), got {}", ps.len())
        }
        (name, _) => bail!("unknown family `{name}`; see `families`"),
    };
    tracing::info!(family, n = verts.len(), "vertices");

    let rows: Vec<[f64; 3]> = verts.iter().map(|v| [v.x, v.y, v.z]).collect();
    let doc = serde_json::json!({
        "family": family,
        "params": params,
        "vertices": rows,
    });
    let text = serde_json::to_string_pretty(&doc)?;
    match out {
        Some(path) => {
            if let Some(parent) = Path::new(&path).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(path, text)?;
        }
        None => println!("{text}"),
    }
    Ok(())
}

fn families() -> Result<()> {
    let a523 = Family523::a_range();
    let c523 = Family523::c_range();
    let doc = serde_json::json!({
        "323plus": { "a": [Family323Plus::A.lo, Family323Plus::A.hi],
                     "c": [Family323Plus::C.lo, Family323Plus::C.hi],
                     "b": Family323Plus::B_FIXED },
        "423": { "a": [Family423::A.lo, Family423::A.hi],
                 "c": [Family423::C.lo, Family423::C.hi],
                 "b": Family423::B_FIXED },
        "523": { "a": [a523.lo, a523.hi],
                 "c": [c523.lo, c523.hi],
                 "b": Family523::B_FIXED },
        "truncated-tetrahedron": {
            "truncation": [TruncatedTetrahedron::TRUNCATION.lo,
                           TruncatedTetrahedron::TRUNCATION.hi] },
    });
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
