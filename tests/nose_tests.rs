mod support;

use nalgebra::Point2;
use nosecone::{
    errors::GeometryError,
    float_types::{PI, Real},
    nose::{NoseCone, NoseProfile, NoseStyle, Shoulder, build_profiles},
    traits::Tessellate,
};

const SHOULDER: Shoulder = Shoulder {
    length: 20.0,
    radius: 24.0,
    thickness: 2.0,
};

fn cone() -> NoseCone {
    NoseCone::new(100.0, 25.0, 5.0, 50)
}

fn assert_closed(profile: &NoseProfile) -> Vec<Point2<Real>> {
    let ring = profile.outline(4);
    assert_eq!(ring.first(), ring.last());
    assert_eq!(ring[0], Point2::new(0.0, 0.0));
    assert!(ring.iter().all(|p| p.y >= -1e-9), "ring leaves the meridian half-plane");
    ring
}

#[test]
fn solid_profile_has_outer_curve_only() {
    let profile = cone().profile().unwrap();
    assert_eq!(profile.style(), NoseStyle::Solid);
    assert!(profile.inner().is_none());
    assert!(profile.minor_y().is_none());
    assert_eq!(profile.thickness(), 0.0);

    let ring = assert_closed(&profile);
    assert!(ring.contains(&Point2::new(100.0, 0.0)));
    assert!(support::signed_area(&ring) < 0.0);
}

#[test]
fn hollow_profile_insets_inner_curve() {
    let profile = cone().with_wall(NoseStyle::Hollow, 2.0).profile().unwrap();
    let inner = profile.inner().unwrap();
    assert_eq!(inner.tip(), Point2::new(2.0, 0.0));
    assert!(support::approx_eq(inner.base().x, 100.0, 1e-9));
    assert_eq!(profile.minor_y(), Some(23.0));

    // inner curve of (98, 23, 3)
    let solved = inner.solved.unwrap();
    assert!(solved.tangent_point.y < 23.0);
    assert!(support::approx_eq(solved.tangent_point.y, 2.7454, 1e-3));
    assert_eq!(inner.blunting.unwrap().start, inner.samples()[0]);

    let ring = assert_closed(&profile);
    assert!(!ring.contains(&Point2::new(100.0, 0.0)));
}

#[test]
fn capped_profile_closes_base() {
    let profile = cone().with_wall(NoseStyle::Capped, 2.0).profile().unwrap();
    let inner = profile.inner().unwrap();
    assert!(support::approx_eq(inner.base().x, 98.0, 1e-9));

    let ring = assert_closed(&profile);
    assert!(ring.contains(&Point2::new(100.0, 0.0)));
    assert!(ring.contains(&Point2::new(98.0, 0.0)));
}

#[test]
fn shouldered_variants_extend_past_base() {
    let solid = cone().with_shoulder(SHOULDER).profile().unwrap();
    let ring = assert_closed(&solid);
    assert!(ring.contains(&Point2::new(120.0, 24.0)));
    assert!(ring.contains(&Point2::new(120.0, 0.0)));

    let hollow = cone()
        .with_wall(NoseStyle::Hollow, 2.0)
        .with_shoulder(SHOULDER)
        .profile()
        .unwrap();
    let ring = assert_closed(&hollow);
    assert!(ring.contains(&Point2::new(120.0, 22.0)));
    assert!(ring.contains(&Point2::new(98.0, 22.0)));
    assert!(!ring.contains(&Point2::new(120.0, 0.0)));
    assert!(support::approx_eq(hollow.inner().unwrap().base().x, 98.0, 1e-9));

    let capped = cone()
        .with_wall(NoseStyle::Capped, 2.0)
        .with_shoulder(SHOULDER)
        .profile()
        .unwrap();
    let ring = assert_closed(&capped);
    assert!(ring.contains(&Point2::new(120.0, 0.0)));
    assert!(ring.contains(&Point2::new(118.0, 0.0)));
    assert!(ring.contains(&Point2::new(118.0, 22.0)));

    let bb = support::bounding_box(&ring);
    assert!(support::approx_eq(bb[2], 120.0, 1e-9));
}

#[test]
fn walls_remove_material() {
    let solid = cone().profile().unwrap().to_sketch::<()>(4, None).area();
    let capped = cone()
        .with_wall(NoseStyle::Capped, 2.0)
        .profile()
        .unwrap()
        .to_sketch::<()>(4, None)
        .area();
    let hollow = cone()
        .with_wall(NoseStyle::Hollow, 2.0)
        .profile()
        .unwrap()
        .to_sketch::<()>(4, None)
        .area();
    assert!(solid > capped && capped > hollow && hollow > 0.0);
}

#[test]
fn sketch_area_matches_outline() {
    let profile = cone().with_wall(NoseStyle::Capped, 2.0).profile().unwrap();
    let ring = profile.outline(4);
    let sketch = profile.to_sketch(4, Some("capped"));
    assert_eq!(sketch.metadata, Some("capped"));
    assert!(support::approx_eq(sketch.area(), support::signed_area(&ring).abs(), 1e-6));
}

#[test]
fn revolved_volume_of_solid_nose() {
    let profile = NoseCone::new(100.0, 25.0, 0.0, 200).profile().unwrap();
    let sketch = profile.to_sketch::<()>(8, None);

    // sum of frusta under the outer polyline
    let outer = profile.outer().tessellate(8);
    let frusta: Real = outer
        .windows(2)
        .map(|w| {
            let (a, b) = (w[0], w[1]);
            PI * (b.x - a.x) * (a.y * a.y + a.y * b.y + b.y * b.y) / 3.0
        })
        .sum();
    let volume = sketch.revolved_volume();
    assert!((volume - frusta).abs() < 1e-6 * frusta);
    // below the enclosing cylinder
    assert!(volume < PI * 25.0 * 25.0 * 100.0);
}

#[test]
fn thin_tip_is_swallowed_by_wall() {
    let profile = NoseCone::new(100.0, 25.0, 1.5, 50)
        .with_wall(NoseStyle::Hollow, 2.0)
        .profile()
        .unwrap();
    assert!(profile.outer().blunting.is_some());
    assert!(profile.inner().unwrap().blunting.is_none());
    let tip = profile.inner().unwrap().tip();
    assert_eq!(tip.x, 2.0);
    assert!(tip.y.abs() < 1e-9);
}

#[test]
fn invalid_walls_are_rejected() {
    for thickness in [0.0, -1.0, 25.0, Real::NAN] {
        match cone().with_wall(NoseStyle::Hollow, thickness).profile() {
            Err(GeometryError::InvalidParameter { name, .. }) => assert_eq!(name, "thickness"),
            other => panic!("thickness {thickness} gave {other:?}"),
        }
    }
    // too thick for the capped inner curve to stay a tangent ogive
    assert!(matches!(
        NoseCone::new(30.0, 25.0, 0.0, 20).with_wall(NoseStyle::Capped, 10.0).profile(),
        Err(GeometryError::InvalidParameter { name: "length", .. })
    ));
}

#[test]
fn invalid_shoulders_are_rejected() {
    assert!(matches!(
        cone().solid_shoulder(),
        Err(GeometryError::InvalidParameter { name: "shoulder", .. })
    ));

    let wide = Shoulder {
        radius: 26.0,
        ..SHOULDER
    };
    assert!(matches!(
        cone().with_shoulder(wide).profile(),
        Err(GeometryError::InvalidParameter { name: "shoulder.radius", .. })
    ));

    let solid_wall = Shoulder {
        thickness: 24.0,
        ..SHOULDER
    };
    assert!(cone().with_shoulder(solid_wall).profile().is_ok());
    assert!(matches!(
        cone()
            .with_wall(NoseStyle::Hollow, 2.0)
            .with_shoulder(solid_wall)
            .profile(),
        Err(GeometryError::InvalidParameter { name: "shoulder.thickness", .. })
    ));

    let stub = Shoulder {
        length: 0.0,
        ..SHOULDER
    };
    assert!(matches!(
        cone().with_shoulder(stub).profile(),
        Err(GeometryError::InvalidParameter { name: "shoulder.length", .. })
    ));
}

#[test]
fn oversized_tip_fails_every_variant() {
    let bad = NoseCone::new(100.0, 25.0, 30.0, 50);
    for style in [NoseStyle::Solid, NoseStyle::Hollow, NoseStyle::Capped] {
        assert!(matches!(
            bad.with_wall(style, 2.0).profile(),
            Err(GeometryError::InvalidParameter { name: "tip_radius", .. })
        ));
    }
}

#[test]
fn batch_keeps_order_and_isolates_failures() {
    let cones = [
        cone(),
        NoseCone::new(100.0, 25.0, 30.0, 50),
        cone().with_wall(NoseStyle::Hollow, 2.0),
    ];
    let profiles = build_profiles(&cones);
    assert_eq!(profiles.len(), 3);
    assert_eq!(profiles[0].as_ref().unwrap().style(), NoseStyle::Solid);
    assert!(profiles[1].is_err());
    assert_eq!(profiles[2].as_ref().unwrap().style(), NoseStyle::Hollow);
}

#[cfg(feature = "parallel")]
#[test]
fn parallel_batch_matches_serial() {
    let cones: Vec<NoseCone> = (1..=8)
        .map(|i| NoseCone::new(50.0 + 10.0 * i as Real, 25.0, 0.5 * i as Real, 40))
        .collect();
    let serial = build_profiles(&cones);
    let parallel = nosecone::nose::build_profiles_par(&cones);
    assert_eq!(serial, parallel);
}
