//! Metric compliance test helpers.
//!
//! These functions verify that a [`GridSpec`] satisfies the invariants the
//! tour and compiler stages rely on. Reused across the wrap and clamp test
//! suites.

use crate::metric::GridSpec;
use antgen_core::Point;
use indexmap::IndexSet;

fn all_cells(spec: &GridSpec) -> Vec<Point> {
    let mut out = Vec::with_capacity(spec.cell_count());
    for y in 0..spec.rows() as i32 {
        for x in 0..spec.cols() as i32 {
            out.push(Point::new(x, y));
        }
    }
    out
}

/// Assert that `distance(a, a) == 0` for all cells.
pub fn assert_distance_reflexive(spec: &GridSpec) {
    for p in all_cells(spec) {
        let d = spec.distance(p, p);
        assert_eq!(d, 0, "distance({p}, {p}) = {d}, expected 0");
    }
}

/// Assert that `distance(a, b) == distance(b, a)` for all cell pairs.
pub fn assert_distance_symmetric(spec: &GridSpec) {
    let cells = all_cells(spec);
    for &a in &cells {
        for &b in &cells {
            let dab = spec.distance(a, b);
            let dba = spec.distance(b, a);
            assert_eq!(dab, dba, "distance({a}, {b}) = {dab} != distance({b}, {a}) = {dba}");
        }
    }
}

/// Assert triangle inequality: `d(a, c) <= d(a, b) + d(b, c)` for all triples.
pub fn assert_distance_triangle_inequality(spec: &GridSpec) {
    let cells = all_cells(spec);
    for &a in &cells {
        for &b in &cells {
            for &c in &cells {
                let dac = spec.distance(a, c);
                let dab = spec.distance(a, b);
                let dbc = spec.distance(b, c);
                assert!(
                    dac <= dab + dbc,
                    "triangle inequality violated: d({a},{c})={dac} > d({a},{b})={dab} + d({b},{c})={dbc}"
                );
            }
        }
    }
}

/// Assert that stepping along the expanded moves from `a` lands on `b`.
pub fn assert_moves_reach_target(spec: &GridSpec) {
    let cells = all_cells(spec);
    for &a in &cells {
        for &b in &cells {
            let mut pos = a;
            for m in spec.displacement(a, b).moves() {
                pos = spec.step(pos, m);
            }
            assert_eq!(pos, b, "moves from {a} ended at {pos}, expected {b}");
        }
    }
}

/// Assert that every in-bounds cell normalizes to itself and maps to a
/// unique flat index.
pub fn assert_normalize_identity_and_indexing(spec: &GridSpec) {
    let cells = all_cells(spec);
    let mut seen = IndexSet::new();
    for &p in &cells {
        assert_eq!(spec.normalize(p), p, "in-bounds {p} was moved by normalize");
        assert!(spec.contains(p));
        assert!(seen.insert(spec.index_of(p)), "duplicate flat index for {p}");
    }
    assert_eq!(seen.len(), spec.cell_count());
}

/// Run all compliance checks on a grid spec.
pub fn run_full_compliance(spec: &GridSpec) {
    assert_distance_reflexive(spec);
    assert_distance_symmetric(spec);
    assert_distance_triangle_inequality(spec);
    assert_moves_reach_target(spec);
    assert_normalize_identity_and_indexing(spec);
}
