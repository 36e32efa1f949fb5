use std::io::Write;

use tracing::debug;

use super::{DemoError, Observation, SharedLabel, Site};

/// Plan holds the values assigned to the package label from each mutation
/// site. `block: None` leaves the nested block read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub main: String,
    pub block: Option<String>,
}

impl Default for Plan {
    fn default() -> Self {
        Self {
            main: "main".to_owned(),
            block: Some("block".to_owned()),
        }
    }
}

/// Package is the top-level scope. It owns the only [SharedLabel] and the
/// routines defined at package level borrow it from there, so what they can
/// see is fixed by where they are defined, not by who calls them.
#[derive(Debug)]
pub struct Package {
    level: SharedLabel,
}

impl Package {
    pub fn new() -> Self {
        Self {
            level: SharedLabel::new("pkg"),
        }
    }

    /// Returns the current value of the package label.
    pub fn level(&self) -> &str {
        self.level.get()
    }

    /// Entry routine. Reassigns the label, enters a nested block that may
    /// reassign it again, and calls [Package::func_scope] from inside that
    /// block.
    pub fn main(
        &mut self,
        plan: &Plan,
        out: &mut impl Write,
    ) -> Result<Vec<Observation>, DemoError> {
        let mut observations = Vec::with_capacity(3);

        self.level.set(plan.main.as_str());
        observations.push(self.observe(Site::Main, out)?);

        {
            // No local `level` here: assignment resolves outward to the
            // package binding.
            if let Some(value) = &plan.block {
                self.level.set(value.as_str());
            }
            observations.push(self.observe(Site::Block, out)?);
            observations.push(self.func_scope(out)?);
        }

        Ok(observations)
    }

    /// Same as [Package::main] but the nested block declares its own `level`
    /// shadowing the package one. The called routine still resolves the
    /// package binding.
    #[cfg(test)]
    pub fn main_shadowed(
        &mut self,
        plan: &Plan,
        out: &mut impl Write,
    ) -> Result<Vec<Observation>, DemoError> {
        let mut observations = Vec::with_capacity(3);

        self.level.set(plan.main.as_str());
        observations.push(self.observe(Site::Main, out)?);

        {
            let level = SharedLabel::new(plan.block.as_deref().unwrap_or("shadow"));
            observations.push(emit(Site::Block, &level, out)?);
            observations.push(self.func_scope(out)?);
        }

        Ok(observations)
    }

    /// Secondary routine. Read only, and only sees the package scope.
    pub fn func_scope(&self, out: &mut impl Write) -> Result<Observation, DemoError> {
        self.observe(Site::FuncScope, out)
    }

    fn observe(&self, site: Site, out: &mut impl Write) -> Result<Observation, DemoError> {
        emit(site, &self.level, out)
    }
}

fn emit(
    site: Site,
    label: &SharedLabel,
    out: &mut impl Write,
) -> Result<Observation, DemoError> {
    let obs = Observation {
        site,
        value: label.get().to_owned(),
    };
    debug!(?site, value = %obs.value, "observed");
    writeln!(out, "{obs}").map_err(|source| DemoError::Write { site, source })?;
    Ok(obs)
}
