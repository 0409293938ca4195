use std::f64::consts::PI;

use crater_energy_lib::{
    compute_breakdown, compute_energy, format_energy, CraterGeometry, DisplayMode, Error,
    ImpactType, MaterialTable,
};

fn table() -> &'static MaterialTable {
    MaterialTable::builtin()
}

fn circle(diameter_cm: f64) -> CraterGeometry {
    CraterGeometry::Circular { diameter_cm }
}

#[test]
fn steel_reference_scenario() {
    let breakdown = compute_breakdown(
        5.0,
        &circle(10.0),
        2.0,
        ImpactType::Normal,
        "steel",
        table(),
    )
    .expect("valid inputs");

    assert!((breakdown.contact_radius_m - 0.025).abs() < 1e-15);
    assert!((breakdown.crater_radius_m - 0.05).abs() < 1e-15);
    assert!((breakdown.depth_m - 0.02).abs() < 1e-15);

    let expected_volume = PI * 0.025 * 0.025 * 0.02
        + (PI * 0.02 / 3.0) * (0.05 * 0.05 + 0.05 * 0.025 + 0.025 * 0.025);
    assert!(
        (breakdown.volume_m3 - expected_volume).abs() < 1e-18,
        "expected {expected_volume}, got {}",
        breakdown.volume_m3
    );
    assert!((breakdown.volume_m3 - 1.308_996_938_995_747e-4).abs() < 1e-15);

    assert_eq!(breakdown.strength_pa, 800e6);
    assert!((breakdown.energy_j - 800e6 * expected_volume).abs() < 1e-6);
    assert!((breakdown.energy_j - 104_719.755_119_66).abs() < 1e-4);

    let shown = format_energy(Some(breakdown.energy_j), DisplayMode::Auto);
    assert_eq!(shown.to_string(), "104.72 kJ");
    let full = format_energy(Some(breakdown.energy_j), DisplayMode::Full);
    assert_eq!(full.to_string(), "104,720 J");
}

#[test]
fn equal_radii_collapse_to_double_cylinder() {
    for d in [1.0, 2.5, 8.0, 15.0] {
        let depth_cm = 3.0;
        let breakdown =
            compute_breakdown(d, &circle(d), depth_cm, ImpactType::Normal, "rock", table())
                .expect("equal radii are valid");
        let r = d / 200.0;
        let h = depth_cm / 100.0;
        let expected = 2.0 * PI * r * r * h;
        assert!(
            (breakdown.volume_m3 - expected).abs() < 1e-15,
            "d={d}: expected {expected}, got {}",
            breakdown.volume_m3
        );
    }
}

#[test]
fn crater_too_small_uses_strict_comparison() {
    let err = compute_energy(
        5.0,
        &circle(4.999),
        1.0,
        ImpactType::Normal,
        "wood",
        table(),
    )
    .expect_err("crater narrower than contact");
    match err {
        Error::CraterTooSmall {
            crater_radius_m,
            contact_radius_m,
        } => assert!(crater_radius_m < contact_radius_m),
        other => panic!("unexpected error: {other}"),
    }

    compute_energy(5.0, &circle(5.0), 1.0, ImpactType::Normal, "wood", table())
        .expect("equal radii are valid");
}

#[test]
fn elliptical_crater_too_small_uses_equivalent_radius() {
    // 20 × 1 cm ellipse: equivalent diameter sqrt(20) ≈ 4.47 cm < 5 cm contact
    let crater = CraterGeometry::Elliptical {
        width_cm: 20.0,
        height_cm: 1.0,
    };
    let err = compute_energy(5.0, &crater, 1.0, ImpactType::Clean, "brick", table())
        .expect_err("equivalent radius below contact");
    assert!(matches!(err, Error::CraterTooSmall { .. }));
}

#[test]
fn elliptical_equivalent_radius() {
    let (w, h) = (12.0, 3.0);
    let crater = CraterGeometry::Elliptical {
        width_cm: w,
        height_cm: h,
    };
    let breakdown = compute_breakdown(2.0, &crater, 1.0, ImpactType::Normal, "iron", table())
        .expect("valid ellipse");
    let expected = ((w / 200.0) * (h / 200.0)).sqrt();
    assert!((breakdown.crater_radius_m - expected).abs() < 1e-15);
}

#[test]
fn square_ellipse_matches_circle_for_both_impacts() {
    let ellipse = CraterGeometry::Elliptical {
        width_cm: 9.0,
        height_cm: 9.0,
    };
    for impact in [ImpactType::Normal, ImpactType::Clean] {
        let from_ellipse = compute_energy(2.0, &ellipse, 4.0, impact, "asphalt", table()).unwrap();
        let from_circle = compute_energy(2.0, &circle(9.0), 4.0, impact, "asphalt", table()).unwrap();
        assert!(
            (from_ellipse - from_circle).abs() < 1e-9,
            "{impact:?}: {from_ellipse} vs {from_circle}"
        );
    }
}

#[test]
fn clean_elliptical_volume_uses_true_ellipse_area() {
    let (w, h, depth_cm) = (16.0, 4.0, 2.5);
    let crater = CraterGeometry::Elliptical {
        width_cm: w,
        height_cm: h,
    };
    let breakdown = compute_breakdown(1.0, &crater, depth_cm, ImpactType::Clean, "ceramic", table())
        .expect("valid ellipse");
    let expected = PI * (w / 200.0) * (h / 200.0) * (depth_cm / 100.0);
    assert!((breakdown.volume_m3 - expected).abs() < 1e-15);
    assert!((breakdown.energy_j - 80e6 * expected).abs() < 1e-6);
}

#[test]
fn clean_circular_volume_is_prism() {
    let breakdown =
        compute_breakdown(5.0, &circle(10.0), 2.0, ImpactType::Clean, "steel", table()).unwrap();
    let expected = PI * 0.05 * 0.05 * 0.02;
    assert!((breakdown.volume_m3 - expected).abs() < 1e-15);
}

#[test]
fn energy_is_linear_in_strength() {
    let csv = "name,strength_pa\nsoft,100\nhard,200\n";
    let custom = MaterialTable::from_reader(csv.as_bytes()).expect("valid catalog");
    let crater = circle(7.0);
    let soft = compute_energy(3.0, &crater, 1.5, ImpactType::Normal, "soft", &custom).unwrap();
    let hard = compute_energy(3.0, &crater, 1.5, ImpactType::Normal, "hard", &custom).unwrap();
    assert!((hard - 2.0 * soft).abs() < 1e-15);
}

#[test]
fn invalid_depths_are_rejected() {
    for depth in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let err = compute_energy(5.0, &circle(10.0), depth, ImpactType::Normal, "steel", table())
            .expect_err("invalid depth");
        assert!(matches!(err, Error::InvalidDepth { .. }), "depth={depth}");
    }
}

#[test]
fn invalid_crater_dimensions_are_rejected() {
    let bad = [
        circle(0.0),
        circle(f64::NAN),
        CraterGeometry::Elliptical {
            width_cm: -2.0,
            height_cm: 5.0,
        },
    ];
    for crater in bad {
        let err = compute_energy(5.0, &crater, 1.0, ImpactType::Normal, "steel", table())
            .expect_err("invalid crater");
        assert!(matches!(err, Error::InvalidCraterDimension { .. }), "{crater:?}");
    }
}

#[test]
fn unknown_material_is_reported_with_suggestion() {
    let err = compute_energy(5.0, &circle(10.0), 1.0, ImpactType::Normal, "titanum", table())
        .expect_err("unknown material");
    let message = err.to_string();
    assert!(message.contains("unknown material: titanum"));
    assert!(message.contains("titanium"));
}

#[test]
fn overflowing_volume_is_rejected_instead_of_returning_infinity() {
    let err = compute_breakdown(
        5.0,
        &circle(1e200),
        2.0,
        ImpactType::Normal,
        "steel",
        table(),
    )
    .expect_err("volume overflows f64");
    match err {
        Error::EnergyOverflow { volume_m3, energy_j } => {
            assert!(volume_m3.is_infinite());
            assert!(energy_j.is_infinite());
        }
        other => panic!("expected EnergyOverflow, got {other:?}"),
    }
}

#[test]
fn overflowing_energy_with_finite_volume_is_rejected() {
    // Volume ≈ π·1e151·1e151·1e3 ≈ 3.1e305 m³ is finite; × 1.1 GPa is not.
    let crater = CraterGeometry::Elliptical {
        width_cm: 2e153,
        height_cm: 2e153,
    };
    let err = compute_energy(5.0, &crater, 1e5, ImpactType::Clean, "titanium", table())
        .expect_err("energy overflows f64");
    assert!(matches!(err, Error::EnergyOverflow { .. }), "{err:?}");
    assert!(err.to_string().contains("energy estimate overflowed"));
}
