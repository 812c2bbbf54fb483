use std::collections::HashSet;
use std::env;
use std::process;

use anyhow::{bail, Context, Result};
use opbundle::{extract_ops, KernelOpMap, ModelLoader};

const USAGE: &str = "usage: extract_ops [--mapping <kernel2op.json>] [--json] <model.json>...";

fn main() {
    if let Err(err) = run() {
        eprintln!("extract-ops: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = parse_args(env::args().skip(1))?;

    let loaded;
    let mapping = match &args.mapping {
        Some(path) => {
            loaded = KernelOpMap::open(path)?;
            &loaded
        }
        None => KernelOpMap::builtin(),
    };

    let mut ops = HashSet::new();
    for path in &args.models {
        let model = ModelLoader::open(path)?;
        ops.extend(extract_ops(model.graph(), mapping));
    }

    // Sorted so the output is stable for build scripts.
    let mut sorted: Vec<&str> = ops.iter().map(String::as_str).collect();
    sorted.sort_unstable();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&sorted)?);
    } else {
        for op in sorted {
            println!("{op}");
        }
    }
    Ok(())
}

struct Args {
    mapping: Option<String>,
    json: bool,
    models: Vec<String>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args> {
    let mut mapping = None;
    let mut json = false;
    let mut models = Vec::new();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--mapping" => {
                mapping = Some(args.next().with_context(|| format!("--mapping needs a path\n{USAGE}"))?);
            }
            "--json" => json = true,
            "--help" | "-h" => {
                println!("{USAGE}");
                process::exit(0);
            }
            other if other.starts_with('-') => bail!("unknown flag {other}\n{USAGE}"),
            other => models.push(other.to_string()),
        }
    }
    if models.is_empty() {
        bail!("no model files given\n{USAGE}");
    }
    Ok(Args {
        mapping,
        json,
        models,
    })
}
