use std::ffi::OsStr;
use std::path::PathBuf;

pub const DEFAULT_TOPOLOGY_FILE: &str = "topology.graphml";
pub const DEFAULT_SVG_FILE: &str = "graph.svg";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Resolves `[program, topology_file, svg_file]` to file paths.
///
/// The input defaults to [`DEFAULT_TOPOLOGY_FILE`] when fewer than two arguments are given and
/// the output to [`DEFAULT_SVG_FILE`] when fewer than three are. Supplied values are used
/// verbatim; arguments past the third are ignored.
pub fn resolve_paths<S: AsRef<OsStr>>(argv: &[S]) -> ResolvedPaths {
    let arg = |idx: usize, default: &str| {
        argv.get(idx)
            .map(|a| PathBuf::from(a.as_ref()))
            .unwrap_or_else(|| PathBuf::from(default))
    };
    ResolvedPaths {
        input: arg(1, DEFAULT_TOPOLOGY_FILE),
        output: arg(2, DEFAULT_SVG_FILE),
    }
}
