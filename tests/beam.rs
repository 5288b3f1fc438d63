#![warn(clippy::pedantic)]

use std::collections::BTreeMap;
use std::sync::Arc;

use beamcheck::{
    components, Beam, CodeCheck, Element, HollowCircle, LoadCase, LoadComponent, LoadSample,
    Material, PositionSpec, SectionRef, TensionCheck,
};

/// Case key for the axial ramp shared by the whole member.
const RAMP: u32 = 1;
/// Case key for the stepped load with a mid-element discontinuity.
const STEP: u32 = 2;

fn axial_ramp(n_start: f64, n_end: f64) -> LoadCase {
    LoadCase::new(vec![
        LoadSample::new(0.0, components(0.0, 0.0, n_start, 0.0, 0.0, 0.0)),
        LoadSample::new(1.0, components(0.0, 0.0, n_end, 0.0, 0.0, 0.0)),
    ])
    .expect("valid ramp table")
}

fn stepped_case() -> LoadCase {
    // constant 10 kN up to mid-element, then a jump to 30 kN
    LoadCase::new(vec![
        LoadSample::new(0.0, components(0.0, 0.0, 10.0e3, 0.0, 0.0, 0.0)),
        LoadSample::new(0.5, components(0.0, 0.0, 10.0e3, 0.0, 0.0, 0.0)),
        LoadSample::new(0.5, components(0.0, 0.0, 30.0e3, 0.0, 0.0, 0.0)),
        LoadSample::new(1.0, components(0.0, 0.0, 30.0e3, 0.0, 0.0, 0.0)),
    ])
    .expect("valid stepped table")
}

fn hollow_section() -> SectionRef {
    Arc::new(HollowCircle::new(0.06, 0.05, Material::steel_250()).expect("valid radii"))
}

fn solid_section() -> SectionRef {
    Arc::new(beamcheck::Circle::new(0.03, Material::steel_250()))
}

/// A 6 m member of three elements (2 m + 3 m + 1 m). The hollow section
/// covers the first two elements, the solid section the last.
fn build_beam() -> Beam {
    let first = Element::new(
        BTreeMap::from([
            (RAMP, axial_ramp(0.0, 40.0e3)),
            (STEP, LoadCase::constant_load(components(0.0, 0.0, 10.0e3, 0.0, 0.0, 0.0))),
        ]),
        2.0,
        Some(hollow_section()),
    )
    .expect("valid first element");

    let second = Element::new(
        BTreeMap::from([(RAMP, axial_ramp(40.0e3, 100.0e3)), (STEP, stepped_case())]),
        3.0,
        Some(hollow_section()),
    )
    .expect("valid second element");

    let third = Element::new(
        BTreeMap::from([
            (RAMP, axial_ramp(100.0e3, 0.0)),
            (STEP, LoadCase::constant_load(components(0.0, 0.0, 30.0e3, 0.0, 0.0, 0.0))),
        ]),
        1.0,
        Some(solid_section()),
    )
    .expect("valid third element");

    Beam::new(vec![first, second, third]).expect("consistent elements")
}

fn axial(rows: &[beamcheck::SampledLoad]) -> Vec<f64> {
    rows.iter()
        .map(|row| row.component(LoadComponent::N).expect("axial value known"))
        .collect()
}

#[test]
fn builds_expected_topology() {
    let beam = build_beam();

    assert_eq!(beam.no_elements(), 3);
    assert_eq!(beam.no_load_cases(), 2);
    assert_eq!(beam.load_cases(), vec![RAMP, STEP]);
    assert!((beam.length() - 6.0).abs() < f64::EPSILON);
    assert_eq!(beam.element_ends(), vec![(0.0, 2.0), (2.0, 5.0), (5.0, 6.0)]);
}

#[test]
fn interpolates_global_positions_onto_the_owning_element() {
    let beam = build_beam();

    // 3.5 m is halfway along the second element: 40 + 0.5 * 60 = 70 kN
    let rows = beam
        .get_loads(RAMP, &PositionSpec::at(3.5))
        .expect("interior query succeeds");
    assert_eq!(rows.len(), 1);
    assert!((rows[0].position - 3.5).abs() < f64::EPSILON);
    assert!((axial(&rows)[0] - 70.0e3).abs() < 1.0e-6);
}

#[test]
fn element_joins_return_one_row_per_adjacent_element() {
    let beam = build_beam();

    let rows = beam
        .get_loads(RAMP, &PositionSpec::at(2.0))
        .expect("join query succeeds");
    let values = axial(&rows);

    // the ramp is continuous across the join, so both rows agree
    assert_eq!(rows.len(), 2);
    assert!((values[0] - 40.0e3).abs() < 1.0e-6);
    assert!((values[1] - 40.0e3).abs() < 1.0e-6);
}

#[test]
fn adaptive_grid_preserves_boundaries_and_discontinuities() {
    let beam = build_beam();

    let rows = beam
        .get_loads(STEP, &PositionSpec::MinCount(5))
        .expect("grid query succeeds");
    let positions: Vec<f64> = rows.iter().map(|row| row.position).collect();
    let values = axial(&rows);

    assert_eq!(
        positions,
        vec![0.0, 1.5, 2.0, 2.0, 3.0, 3.5, 3.5, 4.5, 5.0, 5.0, 6.0]
    );
    assert_eq!(
        values,
        vec![
            10.0e3, 10.0e3, 10.0e3, 10.0e3, 10.0e3, 10.0e3, 30.0e3, 30.0e3, 30.0e3, 30.0e3,
            30.0e3
        ]
    );
}

#[test]
fn sections_are_resolved_per_row() {
    let beam = build_beam();

    let (positions, sections) = beam
        .get_section(&PositionSpec::At(vec![1.0, 5.0, 5.5]), None)
        .expect("section query succeeds");

    // 5.0 m sits on the join, so it reports both adjacent sections
    assert_eq!(positions, vec![1.0, 5.0, 5.0, 5.5]);
    let areas: Vec<f64> = sections
        .iter()
        .map(|section| section.as_ref().expect("section assigned").area())
        .collect();

    let hollow = hollow_section().area();
    let solid = solid_section().area();
    assert!((areas[0] - hollow).abs() < 1.0e-12);
    assert!((areas[1] - hollow).abs() < 1.0e-12);
    assert!((areas[2] - solid).abs() < 1.0e-12);
    assert!((areas[3] - solid).abs() < 1.0e-12);
}

#[test]
fn tension_check_finds_the_governing_position() {
    let beam = build_beam();
    let check = TensionCheck::new(beam, 0.9, 1.0);

    // the governing point is the 100 kN peak at 5.0 m, where the weaker
    // solid section starts
    let solid = solid_section();
    let yield_capacity = solid.area() * solid.min_strength_yield();
    let fracture_capacity = 0.85 * solid.area_net() * solid.min_strength_ultimate();
    let factored = 0.9 * yield_capacity.min(fracture_capacity);

    let utilisation = check
        .tension_utilisation(RAMP)
        .expect("utilisation available");
    assert!((utilisation - 100.0e3 / factored).abs() < 1.0e-9);
}

#[test]
fn capacity_checks_consume_only_the_query_surface() {
    let beam = build_beam();
    let check = TensionCheck::new(beam, 0.9, 1.0);

    let (positions, sections) = check
        .get_section(&PositionSpec::at(1.0), None)
        .expect("section passthrough succeeds");
    assert_eq!(positions, vec![1.0]);
    assert!(sections[0].is_some());
    assert_eq!(check.sections().len(), 3);
}

#[test]
fn empty_beam_reports_missing_loads() {
    let beam = Beam::empty_beam(4.0, None).expect("scaffold beam builds");

    let rows = beam
        .get_loads(0, &PositionSpec::at(2.0))
        .expect("query succeeds");
    assert_eq!(rows.len(), 1);
    assert!(rows[0].components.is_none());
}

#[test]
fn load_tables_round_trip_through_serde() {
    let case = stepped_case();
    let json = serde_json::to_string(&case).expect("case serialises");
    let back: LoadCase = serde_json::from_str(&json).expect("case deserialises");
    assert_eq!(case, back);
}
