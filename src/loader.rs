use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::{
    graphs::{social_graph::SocialGraph, Weight},
    utility::get_progressspinner,
};

pub type UserId = u64;

/// Weight of a user whose skill is zero, instead of dividing by zero.
pub const ZERO_SKILL_WEIGHT: Weight = 2.0;

/// One line of a network file, e.g.
/// `{"user": 1, "skill": 4, "friends": [2, 3]}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub user: UserId,
    pub skill: i64,
    #[serde(default)]
    pub friends: Vec<UserId>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Records handed to the graph, overwrites included.
    pub inserted: usize,
    /// Lines that could not be parsed.
    pub skipped: usize,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unable to read network file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Skilled users are cheap to pass through. Skills of zero or below all map to
/// [`ZERO_SKILL_WEIGHT`].
pub fn skill_to_weight(skill: i64) -> Weight {
    if skill <= 0 {
        return ZERO_SKILL_WEIGHT;
    }

    1.0 / skill as Weight
}

/// Inserts every record of `reader` into `graph`.
///
/// Blank lines are ignored and malformed lines are skipped, only an I/O error
/// aborts the read.
pub fn read_network<R: BufRead>(
    reader: R,
    graph: &mut SocialGraph<UserId>,
) -> io::Result<LoadReport> {
    let mut report = LoadReport::default();

    for (line_index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<UserRecord>(&line) {
            Ok(record) => {
                graph.insert(record.user, skill_to_weight(record.skill), record.friends);
                report.inserted += 1;
            }
            Err(error) => {
                warn!(line = line_index + 1, %error, "skipping malformed record");
                report.skipped += 1;
            }
        }
    }

    Ok(report)
}

/// Builds a fresh graph from the network file at `path`.
pub fn load_network(path: &Path) -> Result<(SocialGraph<UserId>, LoadReport), LoadError> {
    let io_error = |source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_error)?;

    let spinner = get_progressspinner("Reading network");
    let mut graph = SocialGraph::new();
    let report = read_network(BufReader::new(file), &mut graph);
    spinner.finish_and_clear();
    let report = report.map_err(io_error)?;

    info!(
        path = %path.display(),
        users = graph.number_of_vertices(),
        skipped = report.skipped,
        "network loaded"
    );

    Ok((graph, report))
}
