//! Output modes of the `apexdoc` command.

use std::io::Write;

use tracing::warn;

use crate::error::{ApexDocError, EntityKind, Result};
use crate::opener::Opener;
use crate::path::QueryPath;
use crate::resolver::{Resolver, Target};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Open the resolved page in a browser.
    #[default]
    Open,
    /// Print every method and property of the resolved class.
    ListMethods,
    /// Print the resolved page's URL.
    ShowUrl,
}

/// Resolve `path` and act on it according to `mode`. Text output goes to `out`.
pub fn run(
    resolver: &Resolver,
    path: &QueryPath,
    mode: Mode,
    out: &mut dyn Write,
    opener: &dyn Opener,
) -> Result<()> {
    let resolved = resolver.resolve(path)?;

    match mode {
        Mode::ListMethods => {
            if resolved.target == Target::Member {
                warn!(path = %path, "Path names a member, listing its class instead");
            }
            let class = resolved
                .class()
                .ok_or_else(|| ApexDocError::not_found(EntityKind::Class, path.to_string()))?;
            for method in resolver.methods(class) {
                writeln!(out, "{method}")?;
            }
        }
        Mode::ShowUrl => {
            let url = resolver.absolute_url(resolved.node)?;
            writeln!(out, "{url}")?;
        }
        Mode::Open => {
            let url = resolver.absolute_url(resolved.node)?;
            opener.open(&url)?;
        }
    }

    Ok(())
}
