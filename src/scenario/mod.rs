//! Times every registered sort over a grid of input sizes and input kinds.
//!
//! Each (size, kind, sort) combination is run `repetitions` times on freshly generated input, the
//! result is checked against `slice::sort` and the median time is kept. Quadratic sorts are skipped
//! above `quadratic_size_limit` and show up as skipped rows instead of being dropped.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScenarioError};
use crate::patterns;
use crate::registry::{self, RegisteredSort};

pub mod measure;
pub mod report;

pub use report::{MedianRow, RankRow, ScenarioReport, SortSummary};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    Ascending,
    PartiallySorted,
    Descending,
    Random,
}

impl InputKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputKind::Ascending => "ascending",
            InputKind::PartiallySorted => "partially_sorted",
            InputKind::Descending => "descending",
            InputKind::Random => "random",
        }
    }

    pub fn generate<R: Rng>(&self, rng: &mut R, len: usize, swap_percent: f64) -> Vec<i32> {
        match self {
            InputKind::Ascending => patterns::ascending(len),
            InputKind::PartiallySorted => patterns::partially_shuffled_with(rng, len, swap_percent),
            InputKind::Descending => patterns::descending(len),
            InputKind::Random => (0..len).map(|_| rng.gen::<i32>()).collect(),
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Ok,
    /// The sorted output differed from `slice::sort`.
    Error,
    Skipped,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Ok => "ok",
            Status::Error => "error",
            Status::Skipped => "skipped",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScenarioConfig {
    pub sizes: Vec<usize>,
    pub kinds: Vec<InputKind>,
    pub repetitions: usize,
    /// Quadratic sorts are skipped for inputs larger than this.
    pub quadratic_size_limit: usize,
    /// Share of random swaps applied to ascending input for `partially_sorted`.
    pub partial_swap_percent: f64,
    pub seed: u64,
    pub output_dir: PathBuf,
    /// Short or full sort names, empty selects every sort.
    pub sorts: Vec<String>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            sizes: vec![100, 1_000, 10_000, 100_000],
            kinds: vec![
                InputKind::Ascending,
                InputKind::PartiallySorted,
                InputKind::Descending,
            ],
            repetitions: 3,
            quadratic_size_limit: 1_000,
            partial_swap_percent: 5.0,
            seed: 42,
            output_dir: PathBuf::from("sort_scenarios"),
            sorts: Vec::new(),
        }
    }
}

impl ScenarioConfig {
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|err| ScenarioError::io(path, err))?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            return Err(ScenarioError::InvalidConfig("no input sizes".into()));
        }
        if self.kinds.is_empty() {
            return Err(ScenarioError::InvalidConfig("no input kinds".into()));
        }
        if self.repetitions == 0 {
            return Err(ScenarioError::InvalidConfig(
                "repetitions must be at least 1".into(),
            ));
        }
        if !(0.0..=100.0).contains(&self.partial_swap_percent) {
            return Err(ScenarioError::InvalidConfig(format!(
                "partial_swap_percent {} is outside of 0..=100",
                self.partial_swap_percent
            )));
        }

        Ok(())
    }

    pub fn selected_sorts(&self) -> Result<Vec<RegisteredSort>> {
        if self.sorts.is_empty() {
            return Ok(registry::all_sorts());
        }

        self.sorts
            .iter()
            .map(|name| registry::find_sort(name))
            .collect()
    }
}

/// One timed run, or the placeholder for a skipped combination with `attempt` and `seconds` unset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub size: usize,
    pub kind: InputKind,
    pub sort: String,
    pub attempt: Option<usize>,
    pub seconds: Option<f64>,
    pub status: Status,
}

pub fn run_scenarios(config: &ScenarioConfig) -> Result<ScenarioReport> {
    config.validate()?;
    let sorts = config.selected_sorts()?;

    tracing::info!(
        sizes = ?config.sizes,
        kinds = ?config.kinds,
        repetitions = config.repetitions,
        sort_count = sorts.len(),
        "starting sort scenarios"
    );

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut measurements = Vec::new();
    let mut medians = Vec::new();

    for &size in &config.sizes {
        for &kind in &config.kinds {
            for sort in &sorts {
                let name = sort.short_name().to_owned();

                if sort.quadratic && size > config.quadratic_size_limit {
                    tracing::info!(sort = %name, size, %kind, "skipped quadratic sort");

                    measurements.push(Measurement {
                        size,
                        kind,
                        sort: name.clone(),
                        attempt: None,
                        seconds: None,
                        status: Status::Skipped,
                    });
                    medians.push(MedianRow {
                        size,
                        kind,
                        sort: name,
                        seconds: None,
                        status: Status::Skipped,
                    });
                    continue;
                }

                let mut samples = Vec::with_capacity(config.repetitions);
                let mut all_ok = true;

                for attempt in 1..=config.repetitions {
                    let input = kind.generate(&mut rng, size, config.partial_swap_percent);
                    let (seconds, status) = run_once(sort, input);

                    tracing::debug!(sort = %name, size, %kind, attempt, seconds, %status);

                    all_ok &= status == Status::Ok;
                    samples.push(seconds);
                    measurements.push(Measurement {
                        size,
                        kind,
                        sort: name.clone(),
                        attempt: Some(attempt),
                        seconds: Some(seconds),
                        status,
                    });
                }

                let median_seconds = measure::median(&mut samples);
                let status = if all_ok { Status::Ok } else { Status::Error };

                if status == Status::Error {
                    tracing::warn!(sort = %name, size, %kind, "sort produced wrong output");
                }
                tracing::info!(
                    sort = %name,
                    size,
                    %kind,
                    median_seconds = median_seconds.unwrap_or_default(),
                    %status,
                    "scenario done"
                );

                medians.push(MedianRow {
                    size,
                    kind,
                    sort: name,
                    seconds: median_seconds,
                    status,
                });
            }
        }
    }

    Ok(ScenarioReport::new(config.clone(), measurements, medians))
}

fn run_once(sort: &RegisteredSort, mut input: Vec<i32>) -> (f64, Status) {
    let mut expected = input.clone();
    expected.sort();

    let seconds = measure::measure_seconds(|| (sort.sort)(&mut input));

    let status = if input == expected {
        Status::Ok
    } else {
        Status::Error
    };

    (seconds, status)
}
