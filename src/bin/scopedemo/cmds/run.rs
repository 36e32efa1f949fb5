use std::io::{self, Write};

use anyhow::Context;
use tracing::debug;

use crate::scope::{Package, Plan};

pub fn run() -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut pkg = Package::new();
    let observations = pkg
        .main(&Plan::default(), &mut out)
        .context("failed to run scope demo")?;
    out.flush().context("failed to flush stdout")?;

    debug!(observations = observations.len(), level = pkg.level(), "scope demo done");

    Ok(())
}
