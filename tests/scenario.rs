use std::fs;
use std::path::PathBuf;

use sort_basics::error::ScenarioError;
use sort_basics::registry;
use sort_basics::scenario::measure::median;
use sort_basics::scenario::{
    run_scenarios, InputKind, Measurement, MedianRow, ScenarioConfig, ScenarioReport, Status,
};

fn small_config() -> ScenarioConfig {
    ScenarioConfig {
        sizes: vec![10, 200],
        kinds: vec![
            InputKind::Ascending,
            InputKind::PartiallySorted,
            InputKind::Descending,
            InputKind::Random,
        ],
        repetitions: 3,
        quadratic_size_limit: 100,
        ..ScenarioConfig::default()
    }
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("sort_basics_{}_{name}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

fn median_row(size: usize, sort: &str, seconds: Option<f64>) -> MedianRow {
    MedianRow {
        size,
        kind: InputKind::Descending,
        sort: sort.into(),
        seconds,
        status: if seconds.is_some() {
            Status::Ok
        } else {
            Status::Skipped
        },
    }
}

fn descending_config(sizes: Vec<usize>) -> ScenarioConfig {
    ScenarioConfig {
        sizes,
        kinds: vec![InputKind::Descending],
        ..ScenarioConfig::default()
    }
}

#[test]
fn default_config_matches_classroom_script() {
    let config = ScenarioConfig::default();

    assert_eq!(config.sizes, [100, 1_000, 10_000, 100_000]);
    assert_eq!(
        config.kinds,
        [
            InputKind::Ascending,
            InputKind::PartiallySorted,
            InputKind::Descending
        ]
    );
    assert_eq!(config.repetitions, 3);
    assert_eq!(config.quadratic_size_limit, 1_000);
    assert_eq!(config.seed, 42);
    assert!(config.validate().is_ok());
}

#[test]
fn invalid_configs_are_rejected() {
    let no_sizes = ScenarioConfig {
        sizes: Vec::new(),
        ..ScenarioConfig::default()
    };
    assert!(matches!(
        run_scenarios(&no_sizes),
        Err(ScenarioError::InvalidConfig(_))
    ));

    let no_repetitions = ScenarioConfig {
        repetitions: 0,
        ..ScenarioConfig::default()
    };
    assert!(matches!(
        no_repetitions.validate(),
        Err(ScenarioError::InvalidConfig(_))
    ));

    let unknown_sort = ScenarioConfig {
        sorts: vec!["bogosort".into()],
        ..small_config()
    };
    assert!(matches!(
        run_scenarios(&unknown_sort),
        Err(ScenarioError::UnknownSort(name, _)) if name == "bogosort"
    ));
}

#[test]
fn config_from_json_fills_defaults() {
    let dir = scratch_dir("config");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("config.json");
    fs::write(
        &path,
        r#"{ "sizes": [5, 50], "kinds": ["random", "partially_sorted"], "sorts": ["bubble"] }"#,
    )
    .unwrap();

    let config = ScenarioConfig::from_json_file(&path).unwrap();
    assert_eq!(config.sizes, [5, 50]);
    assert_eq!(config.kinds, [InputKind::Random, InputKind::PartiallySorted]);
    assert_eq!(config.sorts, ["bubble"]);
    assert_eq!(config.repetitions, 3);

    fs::write(&path, r#"{ "sizes": [5], "colour": "blue" }"#).unwrap();
    assert!(matches!(
        ScenarioConfig::from_json_file(&path),
        Err(ScenarioError::Json(_))
    ));

    assert!(matches!(
        ScenarioConfig::from_json_file(&dir.join("missing.json")),
        Err(ScenarioError::Io { .. })
    ));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn runs_every_combination() {
    let config = small_config();
    let report = run_scenarios(&config).unwrap();
    let sort_count = registry::all_sorts().len();
    let quadratic_count = registry::all_sorts()
        .iter()
        .filter(|sort| sort.quadratic)
        .count();

    let combinations = config.sizes.len() * config.kinds.len();
    assert_eq!(report.medians.len(), combinations * sort_count);
    assert_eq!(report.ranking.len(), combinations * sort_count);
    assert_eq!(report.summaries.len(), sort_count);

    // Every sort has to produce the reference output.
    assert!(report.medians.iter().all(|row| row.status != Status::Error));

    // Quadratic sorts are only skipped above the limit, once per combination.
    let skipped = report
        .measurements
        .iter()
        .filter(|m| m.status == Status::Skipped)
        .collect::<Vec<_>>();
    assert_eq!(skipped.len(), config.kinds.len() * quadratic_count);
    assert!(skipped
        .iter()
        .all(|m| m.size == 200 && m.attempt.is_none() && m.seconds.is_none()));

    let timed = report
        .measurements
        .iter()
        .filter(|m| m.status == Status::Ok)
        .count();
    assert_eq!(
        timed,
        (combinations * sort_count - config.kinds.len() * quadratic_count) * config.repetitions
    );

    // Skipped sorts rank last in their group.
    for row in report.ranking.iter().filter(|row| row.size == 200) {
        if row.status == Status::Skipped {
            assert!(row.rank > sort_count - quadratic_count);
        }
    }
}

#[test]
fn sort_selection_limits_the_run() {
    let config = ScenarioConfig {
        sorts: vec!["bubble".into(), "merge_stable".into()],
        ..small_config()
    };

    let report = run_scenarios(&config).unwrap();
    let mut names = report
        .summaries
        .iter()
        .map(|summary| summary.sort.as_str())
        .collect::<Vec<_>>();
    names.sort();

    assert_eq!(names, ["bubble", "merge"]);
}

#[test]
fn writes_all_outputs() {
    let dir = scratch_dir("outputs");
    let config = ScenarioConfig {
        sizes: vec![16],
        repetitions: 1,
        output_dir: dir.clone(),
        ..ScenarioConfig::default()
    };

    let report = run_scenarios(&config).unwrap();
    let written = report.write_to_dir(&config.output_dir).unwrap();

    let names = written
        .iter()
        .map(|path| path.file_name().unwrap().to_str().unwrap().to_owned())
        .collect::<Vec<_>>();
    assert_eq!(
        names,
        [
            "raw_results.csv",
            "median_summary.csv",
            "ranking_by_combination.csv",
            "report.json",
            "ascii_chart_size_16.txt"
        ]
    );

    let raw = fs::read_to_string(dir.join("raw_results.csv")).unwrap();
    assert!(raw.starts_with("size,kind,sort,attempt,seconds,status\n"));
    assert_eq!(raw.lines().count(), 1 + report.measurements.len());

    let json = fs::read_to_string(dir.join("report.json")).unwrap();
    let parsed: ScenarioReport = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.medians.len(), report.medians.len());
    assert_eq!(parsed.config, config);

    let chart = fs::read_to_string(dir.join("ascii_chart_size_16.txt")).unwrap();
    assert!(chart.starts_with("ASCII chart - size 16\n"));

    let summary = report.render_summary();
    assert!(summary.contains("size=16 kind=partially_sorted:"));
    assert!(summary.contains("rank 1:"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn median_of_samples() {
    assert_eq!(median(&mut []), None);
    assert_eq!(median(&mut [3.0]), Some(3.0));
    assert_eq!(median(&mut [3.0, 1.0, 2.0]), Some(2.0));
    assert_eq!(median(&mut [4.0, 1.0, 3.0, 2.0]), Some(2.5));
}

#[test]
fn ranks_fastest_first_and_skipped_last() {
    let medians = vec![
        median_row(10, "bubble", None),
        median_row(10, "merge", Some(0.3)),
        median_row(10, "heapsort", Some(0.1)),
    ];

    let report = ScenarioReport::new(descending_config(vec![10]), Vec::new(), medians);

    let order = report
        .ranking
        .iter()
        .map(|row| (row.sort.as_str(), row.rank))
        .collect::<Vec<_>>();
    assert_eq!(order, [("heapsort", 1), ("merge", 2), ("bubble", 3)]);
}

#[test]
fn summary_counts_wins_and_excludes_skipped_time() {
    let medians = vec![
        median_row(10, "bubble", Some(0.1)),
        median_row(10, "merge", Some(0.2)),
        median_row(20, "bubble", None),
        median_row(20, "merge", Some(0.4)),
    ];

    let report = ScenarioReport::new(descending_config(vec![10, 20]), Vec::new(), medians);

    assert_eq!(report.summaries.len(), 2);

    let bubble = &report.summaries[0];
    assert_eq!(bubble.sort, "bubble");
    assert_eq!(bubble.wins, 1);
    assert_eq!(bubble.mean_rank, Some(1.5));
    assert_eq!(bubble.mean_seconds, Some(0.1));

    let merge = &report.summaries[1];
    assert_eq!(merge.wins, 1);
    assert_eq!(merge.mean_rank, Some(1.5));
    assert!((merge.mean_seconds.unwrap() - 0.3).abs() < 1e-12);
}

#[test]
fn chart_scales_to_slowest_and_marks_skipped() {
    let medians = vec![
        median_row(10, "bubble", None),
        median_row(10, "merge", Some(2.0)),
        median_row(10, "quicksort", Some(1.0)),
        median_row(10, "tiny", Some(0.0)),
    ];

    let report = ScenarioReport::new(descending_config(vec![10]), Vec::new(), medians);
    let chart = report.ascii_chart(10);
    let lines = chart.lines().collect::<Vec<_>>();

    assert_eq!(lines[0], "ASCII chart - size 10");
    assert!(lines[1].starts_with("bubble") && lines[1].ends_with("(skipped)"));
    assert!(lines[2].contains(&format!("| {} 2.000000s", "#".repeat(48))));
    assert!(lines[3].contains(&format!("| {} 1.000000s", "#".repeat(24))));
    // Never less than a single mark.
    assert!(lines[4].contains("| # 0.000000s"));
}

#[test]
fn csv_leaves_skipped_values_empty() {
    let measurements = vec![Measurement {
        size: 10,
        kind: InputKind::Ascending,
        sort: "bubble".into(),
        attempt: None,
        seconds: None,
        status: Status::Skipped,
    }];

    let report = ScenarioReport::new(descending_config(vec![10]), measurements, Vec::new());

    assert_eq!(
        report.raw_csv(),
        "size,kind,sort,attempt,seconds,status\n10,ascending,bubble,,,skipped\n"
    );
}

#[test]
fn partially_sorted_input_is_seeded() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let a = InputKind::PartiallySorted.generate(&mut StdRng::seed_from_u64(42), 1_000, 5.0);
    let b = InputKind::PartiallySorted.generate(&mut StdRng::seed_from_u64(42), 1_000, 5.0);
    assert_eq!(a, b);
    assert_ne!(a, InputKind::Ascending.generate(&mut StdRng::seed_from_u64(42), 1_000, 5.0));
}

#[test]
fn registry_keeps_std_baselines_apart() {
    let sorts = registry::all_sorts();
    let mut short_names = sorts
        .iter()
        .map(|sort| sort.short_name())
        .collect::<Vec<_>>();
    short_names.sort();
    short_names.dedup();
    assert_eq!(short_names.len(), sorts.len());

    let unstable = registry::find_sort("rust_std_unstable").unwrap();
    assert_eq!(unstable.short_name(), "rust_std_unstable");
    assert!(!unstable.quadratic);

    assert_eq!(registry::find_sort("bubble").unwrap().name, "bubble_stable");
    assert!(!registry::find_sort("merge").unwrap().quadratic);
    assert!(matches!(
        registry::find_sort("rust_std"),
        Err(ScenarioError::UnknownSort(..))
    ));
}
