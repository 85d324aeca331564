use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{InputKind, Measurement, ScenarioConfig, Status};
use crate::error::{Result, ScenarioError};

/// Width of the longest bar in the ASCII charts.
const CHART_WIDTH: usize = 48;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MedianRow {
    pub size: usize,
    pub kind: InputKind,
    pub sort: String,
    pub seconds: Option<f64>,
    pub status: Status,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RankRow {
    pub size: usize,
    pub kind: InputKind,
    pub sort: String,
    pub seconds: Option<f64>,
    pub status: Status,
    /// 1 is the fastest sort for this size and kind.
    pub rank: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SortSummary {
    pub sort: String,
    /// How often this sort ranked first.
    pub wins: usize,
    pub mean_rank: Option<f64>,
    /// Mean of the median times, skipped combinations excluded.
    pub mean_seconds: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScenarioReport {
    pub config: ScenarioConfig,
    pub measurements: Vec<Measurement>,
    pub medians: Vec<MedianRow>,
    pub ranking: Vec<RankRow>,
    pub summaries: Vec<SortSummary>,
}

impl ScenarioReport {
    pub fn new(
        config: ScenarioConfig,
        measurements: Vec<Measurement>,
        medians: Vec<MedianRow>,
    ) -> Self {
        let ranking = rank(&config, &medians);
        let summaries = summarize(&medians, &ranking);

        Self {
            config,
            measurements,
            medians,
            ranking,
            summaries,
        }
    }

    /// Writes the CSV, JSON and chart files into `dir` and returns their paths.
    pub fn write_to_dir(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(dir).map_err(|err| ScenarioError::io(dir, err))?;

        let mut written = Vec::new();
        let mut write_file = |name: String, content: String| -> Result<()> {
            let path = dir.join(name);
            fs::write(&path, content).map_err(|err| ScenarioError::io(&path, err))?;
            tracing::debug!(path = %path.display(), "wrote scenario output");
            written.push(path);
            Ok(())
        };

        write_file("raw_results.csv".into(), self.raw_csv())?;
        write_file("median_summary.csv".into(), self.median_csv())?;
        write_file("ranking_by_combination.csv".into(), self.ranking_csv())?;
        write_file("report.json".into(), serde_json::to_string_pretty(self)?)?;

        for size in &self.config.sizes {
            write_file(format!("ascii_chart_size_{size}.txt"), self.ascii_chart(*size))?;
        }

        Ok(written)
    }

    pub fn raw_csv(&self) -> String {
        let mut out = String::from("size,kind,sort,attempt,seconds,status\n");
        for m in &self.measurements {
            let _ = writeln!(
                out,
                "{},{},{},{},{},{}",
                m.size,
                m.kind,
                m.sort,
                m.attempt.map(|a| a.to_string()).unwrap_or_default(),
                csv_seconds(m.seconds),
                m.status
            );
        }
        out
    }

    pub fn median_csv(&self) -> String {
        let mut out = String::from("size,kind,sort,seconds,status\n");
        for row in &self.medians {
            let _ = writeln!(
                out,
                "{},{},{},{},{}",
                row.size,
                row.kind,
                row.sort,
                csv_seconds(row.seconds),
                row.status
            );
        }
        out
    }

    pub fn ranking_csv(&self) -> String {
        let mut out = String::from("size,kind,sort,seconds,status,rank\n");
        for row in &self.ranking {
            let _ = writeln!(
                out,
                "{},{},{},{},{},{}",
                row.size,
                row.kind,
                row.sort,
                csv_seconds(row.seconds),
                row.status,
                row.rank
            );
        }
        out
    }

    /// Horizontal bar chart of the median times for one input size, scaled to the slowest sort.
    pub fn ascii_chart(&self, size: usize) -> String {
        let mut rows = self
            .medians
            .iter()
            .filter(|row| row.size == size)
            .collect::<Vec<_>>();
        rows.sort_by(|a, b| (&a.sort, a.kind.as_str()).cmp(&(&b.sort, b.kind.as_str())));

        let max_seconds = rows
            .iter()
            .filter_map(|row| row.seconds)
            .fold(0.0f64, f64::max);

        let mut out = format!("ASCII chart - size {size}\n");
        for row in rows {
            let bar = match row.seconds {
                Some(seconds) => {
                    let width = if max_seconds > 0.0 {
                        ((seconds / max_seconds) * CHART_WIDTH as f64) as usize
                    } else {
                        0
                    };
                    format!("{} {seconds:.6}s", "#".repeat(width.max(1)))
                }
                None => "(skipped)".to_owned(),
            };

            let _ = writeln!(out, "{:15} | {:22} | {bar}", row.sort, row.kind.as_str());
        }
        out
    }

    /// Per sort summary followed by the three fastest sorts of every size and kind combination.
    pub fn render_summary(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(
            out,
            "{:15} | {:7} | {:12} | {:14}",
            "SORT", "WINS", "MEAN_RANK", "MEAN_SECONDS"
        );
        for summary in &self.summaries {
            let _ = writeln!(
                out,
                "{:15} | {:7} | {:12} | {:14}",
                summary.sort,
                summary.wins,
                summary
                    .mean_rank
                    .map(|rank| format!("{rank:.2}"))
                    .unwrap_or_else(|| "N/A".into()),
                summary
                    .mean_seconds
                    .map(|seconds| format!("{seconds:.6}"))
                    .unwrap_or_else(|| "N/A".into()),
            );
        }

        let _ = writeln!(out, "\nTop 3 per combination (size + kind):\n");
        for &size in &self.config.sizes {
            for &kind in &self.config.kinds {
                let _ = writeln!(out, "size={size} kind={kind}:");
                for row in self
                    .ranking
                    .iter()
                    .filter(|row| row.size == size && row.kind == kind)
                    .take(3)
                {
                    let seconds = row
                        .seconds
                        .map(|seconds| format!("{seconds:.6}s"))
                        .unwrap_or_else(|| "skipped".into());
                    let _ = writeln!(
                        out,
                        "  rank {}: {:15} time={seconds} status={}",
                        row.rank, row.sort, row.status
                    );
                }
                out.push('\n');
            }
        }

        out
    }
}

fn csv_seconds(seconds: Option<f64>) -> String {
    seconds.map(|s| format!("{s:.9}")).unwrap_or_default()
}

/// Ranks the medians of every size and kind combination, fastest first and skipped rows last. Ties
/// keep the registration order of the sorts.
fn rank(config: &ScenarioConfig, medians: &[MedianRow]) -> Vec<RankRow> {
    let mut ranking = Vec::with_capacity(medians.len());

    for &size in &config.sizes {
        for &kind in &config.kinds {
            let mut group = medians
                .iter()
                .filter(|row| row.size == size && row.kind == kind)
                .collect::<Vec<_>>();

            group.sort_by(|a, b| {
                let a = a.seconds.unwrap_or(f64::INFINITY);
                let b = b.seconds.unwrap_or(f64::INFINITY);
                a.total_cmp(&b)
            });

            ranking.extend(group.into_iter().enumerate().map(|(i, row)| RankRow {
                size,
                kind,
                sort: row.sort.clone(),
                seconds: row.seconds,
                status: row.status,
                rank: i + 1,
            }));
        }
    }

    ranking
}

fn summarize(medians: &[MedianRow], ranking: &[RankRow]) -> Vec<SortSummary> {
    #[derive(Default)]
    struct Acc {
        first_seen: usize,
        wins: usize,
        rank_sum: usize,
        rank_count: usize,
        seconds_sum: f64,
        seconds_count: usize,
    }

    let mut accs: BTreeMap<&str, Acc> = BTreeMap::new();
    for (i, row) in medians.iter().enumerate() {
        accs.entry(row.sort.as_str()).or_insert_with(|| Acc {
            first_seen: i,
            ..Acc::default()
        });
    }

    for row in ranking {
        let acc = accs.entry(row.sort.as_str()).or_default();
        if row.rank == 1 {
            acc.wins += 1;
        }
        acc.rank_sum += row.rank;
        acc.rank_count += 1;
        if let Some(seconds) = row.seconds {
            acc.seconds_sum += seconds;
            acc.seconds_count += 1;
        }
    }

    let mut accs = accs.into_iter().collect::<Vec<_>>();
    accs.sort_by_key(|(_, acc)| acc.first_seen);

    accs.into_iter()
        .map(|(sort, acc)| SortSummary {
            sort: sort.to_owned(),
            wins: acc.wins,
            mean_rank: (acc.rank_count > 0).then(|| acc.rank_sum as f64 / acc.rank_count as f64),
            mean_seconds: (acc.seconds_count > 0)
                .then(|| acc.seconds_sum / acc.seconds_count as f64),
        })
        .collect()
}
