use pretty_assertions::assert_eq;
use rstest::*;

use viper_core::{DensityWindow, HotspotError, MutationRecord};
use viper_hotspot::{HotspotConfig, WindowScanner, annotate, detect_hotspots, scan, select};

#[fixture]
fn mutations() -> Vec<MutationRecord> {
    // a dense cluster around 300..340 on a sparse background
    let mut mutations: Vec<MutationRecord> = (0..1000)
        .step_by(97)
        .map(|p| MutationRecord::new(p, 1))
        .collect();
    mutations.extend((300..340).step_by(3).map(|p| MutationRecord::new(p + 1, 2)));
    mutations
}

fn config(window_size: u32, step_size: u32) -> HotspotConfig {
    HotspotConfig {
        window_size,
        step_size,
        ..HotspotConfig::default()
    }
}

#[rstest]
#[case(1000, 100, 25)]
#[case(1000, 50, 50)]
#[case(999, 64, 7)]
#[case(1000, 1000, 3)]
fn test_window_geometry(
    mutations: Vec<MutationRecord>,
    #[case] genome_length: u32,
    #[case] window_size: u32,
    #[case] step_size: u32,
) {
    let windows = scan(&mutations, genome_length, window_size, step_size).unwrap();

    let expected = ((genome_length - window_size) / step_size) as usize + 1;
    assert_eq!(windows.len(), expected);
    assert_eq!(windows[0].start, 0);

    for w in &windows {
        assert!(w.start < w.end);
        assert_eq!(w.end, w.start + window_size);
        assert_eq!(w.midpoint, (w.start + w.end) / 2);
        assert!(w.end <= genome_length);
        assert!((w.density - w.mutation_count as f64 / window_size as f64).abs() < 1e-12);
    }
    for pair in windows.windows(2) {
        assert_eq!(pair[1].start - pair[0].start, step_size);
    }
}

#[rstest]
fn test_single_mutation_contributes_to_covering_windows_only() {
    let position = 37;
    let windows = scan(&[MutationRecord::new(position, 5)], 100, 20, 6).unwrap();
    for w in &windows {
        let expected = if w.contains(position) { 5 } else { 0 };
        assert_eq!(w.mutation_count, expected);
    }
    let covering = windows.iter().filter(|w| w.contains(position)).count() as u64;
    let total: u64 = windows.iter().map(|w| w.mutation_count).sum();
    assert_eq!(total, 5 * covering);
}

#[rstest]
fn test_input_order_does_not_matter(mutations: Vec<MutationRecord>) {
    let mut reversed = mutations.clone();
    reversed.reverse();
    assert_eq!(
        scan(&mutations, 1000, 100, 25).unwrap(),
        scan(&reversed, 1000, 100, 25).unwrap()
    );
}

#[rstest]
fn test_scenario_a() {
    let mutations = vec![MutationRecord::new(1, 1), MutationRecord::new(5, 2)];
    let windows = scan(&mutations, 10, 4, 2).unwrap();
    let starts: Vec<u32> = windows.iter().map(|w| w.start).collect();
    assert_eq!(starts, vec![0, 2, 4, 6]);
    assert_eq!(windows[2], DensityWindow::new(4, 4, 2));
    assert_eq!(windows[2].density, 0.5);
}

#[rstest]
fn test_scenario_b() {
    let result = detect_hotspots(&[], 1000, &HotspotConfig::default());
    assert!(matches!(result, Err(HotspotError::EmptyInput)));
}

#[rstest]
fn test_scenario_c() {
    let err = scan(&[MutationRecord::new(1, 1)], 10, 20, 5).unwrap_err();
    assert!(err.is_window_configuration());
    assert_eq!(err.to_string(), "window_size (20) cannot exceed genome_length (10)");
}

#[rstest]
fn test_percentile_monotonicity(mutations: Vec<MutationRecord>) {
    let annotated = annotate(&scan(&mutations, 1000, 50, 10).unwrap());
    for a in &annotated {
        for b in &annotated {
            if a.density < b.density {
                assert!(a.density_percentile.unwrap() <= b.density_percentile.unwrap());
            }
        }
    }
}

#[rstest]
fn test_threshold_at_maximum_yields_maximal_windows(mutations: Vec<MutationRecord>) {
    let windows = scan(&mutations, 1000, 50, 10).unwrap();
    let max = windows.iter().map(|w| w.density).fold(f64::MIN, f64::max);
    let hotspots = select(&windows, Some(max), 95.0).unwrap();

    assert!(!hotspots.is_empty());
    assert!(hotspots.iter().all(|w| w.density == max));
    assert_eq!(
        hotspots.len(),
        windows.iter().filter(|w| w.density == max).count()
    );
}

#[rstest]
fn test_detect_hotspots_finds_cluster(mutations: Vec<MutationRecord>) {
    let report = detect_hotspots(&mutations, 1000, &config(50, 10)).unwrap();

    assert_eq!(report.profile.len(), 96);
    assert!(report.profile.iter().all(|w| w.density_percentile.is_some()));
    assert!(!report.hotspots.is_empty());
    assert!(report.hotspots.iter().all(|w| w.density >= report.cutoff));

    // every hotspot overlaps the dense cluster
    assert!(report.hotspots.iter().all(|w| w.start < 340 && w.end > 300));

    // hotspots keep profile order and the percentiles of the full profile
    for pair in report.hotspots.windows(2) {
        assert!(pair[0].start < pair[1].start);
    }
    for hotspot in &report.hotspots {
        let source = report
            .profile
            .iter()
            .find(|w| w.start == hotspot.start)
            .unwrap();
        assert_eq!(hotspot, source);
    }
}

#[rstest]
fn test_detect_hotspots_with_explicit_threshold(mutations: Vec<MutationRecord>) {
    let config = HotspotConfig {
        density_threshold: Some(0.0),
        ..config(100, 25)
    };
    let report = detect_hotspots(&mutations, 1000, &config).unwrap();
    assert_eq!(report.cutoff, 0.0);
    assert_eq!(report.hotspots, report.profile);
}

#[rstest]
fn test_scanner_is_reusable_across_genomes(mutations: Vec<MutationRecord>) {
    let scanner = WindowScanner::new(100, 50).unwrap();
    assert_eq!(scanner.scan(&mutations, 1000).unwrap().len(), 19);
    assert_eq!(scanner.scan(&mutations, 500).unwrap().len(), 9);
}
