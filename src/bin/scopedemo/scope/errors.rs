use std::io;

use super::Site;

#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error("failed to write observation from {site:?} scope")]
    Write {
        site: Site,
        #[source]
        source: io::Error,
    },
}
