use std::env;
use std::process;

use anyhow::{bail, Context, Result};
use opbundle::KernelOpMap;

const USAGE: &str = "usage: list_kernels [--mapping <kernel2op.json>]";

fn main() {
    if let Err(err) = run() {
        eprintln!("list-kernels: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut mapping = None;
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--mapping" => {
                mapping = Some(args.next().with_context(|| format!("--mapping needs a path\n{USAGE}"))?);
            }
            "--help" | "-h" => {
                println!("{USAGE}");
                process::exit(0);
            }
            other => bail!("unexpected argument {other}\n{USAGE}"),
        }
    }

    let loaded;
    let map = match &mapping {
        Some(path) => {
            loaded = KernelOpMap::open(path)?;
            &loaded
        }
        None => KernelOpMap::builtin(),
    };

    let mut kernels: Vec<&str> = map.kernels().collect();
    kernels.sort_unstable();
    for kernel in &kernels {
        println!("{kernel}");
    }
    eprintln!("list-kernels: {} kernels known", kernels.len());
    Ok(())
}
