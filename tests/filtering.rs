use std::time::{Duration, Instant};

use scattergrid::{Dataset, FilterState, Series, TickAction};

fn demo_dataset() -> Dataset {
    Dataset::new(vec![
        Series::new(
            vec![0.0, 1.0, 2.0],
            vec![0.0, 1.0, 2.0],
            vec![1.0, 5.0, 9.0],
        ),
        Series::new(
            vec![10.0, 11.0, 12.0, 13.0],
            vec![5.0, 6.0, 7.0, 8.0],
            vec![2.0, 4.0, 6.0, 8.0],
        ),
    ])
}

#[test]
fn threshold_keeps_points_at_or_above_the_clicked_value() {
    let filtered = demo_dataset().filtered(5.0);
    assert_eq!(filtered.series[0].x, vec![1.0, 2.0]);
    assert_eq!(filtered.series[0].color, vec![5.0, 9.0]);
    assert_eq!(filtered.series[1].x, vec![12.0, 13.0]);
    assert_eq!(filtered.series[1].color, vec![6.0, 8.0]);
}

#[test]
fn every_series_keeps_equal_vector_lengths_after_filtering() {
    let filtered = demo_dataset().filtered(6.0);
    for s in filtered.iter() {
        assert_eq!(s.x.len(), s.y.len());
        assert_eq!(s.x.len(), s.color.len());
    }
}

#[test]
fn legend_domain_spans_every_series() {
    assert_eq!(demo_dataset().color_bounds(), Some((1.0, 9.0)));
}

#[test]
fn tick_values_land_on_round_numbers() {
    // A 1..=9 color domain gets integer ticks, so the midpoint is clickable.
    let ticks = scattergrid::ticks(1.0, 9.0, 6);
    assert!(ticks.contains(&5.0));
    assert_eq!(ticks.first().copied(), Some(1.0));
    assert_eq!(ticks.last().copied(), Some(9.0));
}

#[test]
fn full_click_cycle_filters_then_restores() {
    let mut st = FilterState::new(demo_dataset()).with_delay(Duration::from_millis(10));
    let t0 = Instant::now();

    assert_eq!(st.tick_clicked(5.0, t0), TickAction::Filtered(5.0));
    assert!(st.visible().is_empty(), "plots are gone while the redraw waits");
    assert!(st.poll(t0 + Duration::from_millis(10)));
    assert_eq!(st.visible().total_points(), 4);
    // The legend domain comes from the original dataset, so filtering does
    // not move it.
    assert_eq!(st.original().color_bounds(), Some((1.0, 9.0)));

    // Clicking the same tick again restores the original dataset.
    let t1 = t0 + Duration::from_millis(20);
    assert_eq!(st.tick_clicked(5.0, t1), TickAction::Cleared);
    assert!(st.poll(t1 + Duration::from_millis(10)));
    assert_eq!(st.visible(), st.original());
    assert_eq!(st.visible().total_points(), 7);
}

#[test]
fn filters_derive_from_the_original_dataset() {
    let mut st = FilterState::new(demo_dataset()).with_delay(Duration::ZERO);
    let t0 = Instant::now();
    st.tick_clicked(9.0, t0);
    st.poll(t0);
    assert_eq!(st.visible().total_points(), 1);

    // Lowering the threshold brings back points the 9.0 filter had removed.
    st.tick_clicked(2.0, t0);
    st.poll(t0);
    assert_eq!(st.visible().total_points(), 6);
}

#[test]
fn mismatched_vector_lengths_are_rejected() {
    let result = Series::try_new(vec![0.0, 1.0], vec![0.0], vec![0.0, 1.0]);
    assert!(result.is_err());
}

#[test]
fn dataset_parses_from_plain_json_arrays() {
    let json = r#"[{"x":[0.0,1.0],"y":[2.0,3.0],"color":[0.5,1.5]}]"#;
    let ds = Dataset::from_json_str(json).unwrap();
    assert_eq!(ds.len(), 1);
    assert_eq!(ds.series[0].y, vec![2.0, 3.0]);
}
