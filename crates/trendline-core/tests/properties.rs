// File: crates/trendline-core/tests/properties.rs
// Purpose: Property tests for mapping, hit-testing and curve construction over random series and areas.

use proptest::prelude::*;
use trendline_core::{
    build_path, nearest_index_for_point, point_for_index, CoordinateMapper, DrawArea, EdgePolicy, LinePath,
    LineShape, SampleSeries, ScreenPoint,
};

fn values(min_len: usize) -> impl Strategy<Value = Vec<f64>> {
    proptest::collection::vec(-1_000.0f64..1_000.0, min_len..128)
}

fn area() -> impl Strategy<Value = DrawArea> {
    (-50.0f64..50.0, -50.0f64..50.0, 1.0f64..2_000.0, 1.0f64..1_000.0)
        .prop_map(|(x, y, w, h)| DrawArea::new(x, y, w, h))
}

proptest! {
    #[test]
    fn endpoints_map_to_area_edges(v in values(2), area in area()) {
        let s = SampleSeries::new(v);
        let last = s.count() - 1;
        prop_assert_eq!(point_for_index(&s, 0, area).map(|p| p.x), Some(area.x));
        prop_assert_eq!(point_for_index(&s, last, area).map(|p| p.x), Some(area.right()));
    }

    #[test]
    fn points_stay_inside_the_area(v in values(1), area in area()) {
        let s = SampleSeries::new(v);
        let m = CoordinateMapper::new(&s, area).unwrap();
        for p in m.points() {
            prop_assert!(p.x >= area.x - 1e-9 && p.x <= area.right() + 1e-9);
            prop_assert!(p.y >= area.y - 1e-9 && p.y <= area.bottom() + 1e-9);
        }
    }

    #[test]
    fn hit_test_round_trips(v in values(1), area in area()) {
        let s = SampleSeries::new(v);
        for i in 0..s.count() {
            let p = point_for_index(&s, i, area).unwrap();
            prop_assert_eq!(nearest_index_for_point(&s, p, area), Some(i));
        }
    }

    #[test]
    fn pointers_outside_deselect(v in values(1), area in area(), beyond in 1e-7f64..500.0) {
        let s = SampleSeries::new(v);
        let left = ScreenPoint::new(area.x - beyond, area.y);
        let right = ScreenPoint::new(area.right() + beyond, area.y);
        prop_assert_eq!(nearest_index_for_point(&s, left, area), None);
        prop_assert_eq!(nearest_index_for_point(&s, right, area), None);

        let m = CoordinateMapper::new(&s, area).unwrap();
        prop_assert_eq!(m.nearest_index(left, EdgePolicy::Clamp), Some(0));
        prop_assert_eq!(m.nearest_index(right, EdgePolicy::Clamp), Some(s.count() - 1));
    }

    #[test]
    fn hit_test_is_nearest(v in values(2), area in area(), frac in 0.0f64..=1.0) {
        let s = SampleSeries::new(v);
        let x = area.x + frac * area.width;
        let idx = nearest_index_for_point(&s, ScreenPoint::new(x, 0.0), area).unwrap();
        let chosen = point_for_index(&s, idx, area).unwrap().x;
        let step = area.width / (s.count() - 1) as f64;
        prop_assert!((chosen - x).abs() <= step * 0.5 + 1e-6);
    }

    #[test]
    fn flat_series_is_level(value in -1e6f64..1e6, n in 1usize..64, area in area()) {
        let s = SampleSeries::new(vec![value; n]);
        let mid = area.y + area.height * 0.5;
        for i in 0..n {
            prop_assert_eq!(point_for_index(&s, i, area).unwrap().y, mid);
        }
    }

    #[test]
    fn curved_path_tracks_straight_samples(v in values(2), area in area()) {
        let s = SampleSeries::new(v);
        let straight = build_path(&s, area, LineShape::Straight);
        let LinePath::Curved { segments, .. } = build_path(&s, area, LineShape::Curved) else {
            panic!("expected curved path");
        };
        prop_assert_eq!(straight.anchors(), build_path(&s, area, LineShape::Curved).anchors());

        let mut prev_mid = f64::NEG_INFINITY;
        for seg in &segments {
            prop_assert_eq!(seg.ctrl1.x, seg.ctrl2.x);
            prop_assert!(seg.ctrl1.x > prev_mid);
            prop_assert!(seg.from.x < seg.ctrl1.x && seg.ctrl1.x < seg.to.x);
            prev_mid = seg.ctrl1.x;
        }
    }

    #[test]
    fn extrema_match_linear_scan(v in values(1)) {
        let s = SampleSeries::new(v.clone());
        let mut min_i = 0;
        let mut max_i = 0;
        for (i, &x) in v.iter().enumerate() {
            if x < v[min_i] { min_i = i; }
            if x > v[max_i] { max_i = i; }
        }
        prop_assert_eq!(s.min_index(), Some(min_i));
        prop_assert_eq!(s.max_index(), Some(max_i));
    }
}
