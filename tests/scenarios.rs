//! End-to-end scenarios, invariants, and boundary cases, exercised purely
//! through the public `PhysicsWorld` API — the same integration-test
//! placement `TanTanDev-rapier/src/pipeline/physics_pipeline.rs` uses for
//! its own `RigidBodySet`/`ColliderSet` cross-cutting behavior (its
//! `mod test`, standing in for a `tests/` directory at that crate's scale).

use std::collections::HashSet;

use approx::assert_relative_eq;
use impulse2d::dynamics::BodyBuilder;
use impulse2d::math::vector;
use impulse2d::pipeline::PhysicsWorld;

const DT60: f32 = 1.0 / 60.0;

fn world() -> PhysicsWorld {
    PhysicsWorld::new(DT60)
}

// ---------------------------------------------------------------------
// End-to-end scenarios
// ---------------------------------------------------------------------

#[test]
fn scenario_freefall() {
    let mut w = world();
    w.add_body(
        BodyBuilder::dynamic_box(0, 1.0, 0.5, 0.5)
            .position(vector(0.0, 10.0))
            .acceleration(vector(0.0, -9.8))
            .build(),
    );

    w.update(1.0);

    assert_eq!(w.step_count(), 60);
    assert_relative_eq!(w.position().y, 5.1, epsilon = 0.2);
}

#[test]
fn scenario_wall_stop_never_tunnels() {
    let mut w = world();
    w.add_body(
        BodyBuilder::dynamic_box(0, 1.0, 0.5, 0.5)
            .position(vector(2.0, 2.0))
            .velocity(vector(5.0, 0.0))
            .acceleration(vector(2.0, 0.0))
            .build(),
    );
    w.add_body(BodyBuilder::static_box(1, 0.5, 0.5).position(vector(8.0, 2.0)).build());

    for _ in 0..300 {
        w.update(DT60);
    }

    assert!(w.bodies()[0].position.x <= 8.5, "body tunneled through the wall");
}

#[test]
fn scenario_kinematic_push() {
    let mut w = world();
    w.add_body(
        BodyBuilder::kinematic_box(0, 0.5, 0.5)
            .position(vector(-5.0, 2.0))
            .velocity(vector(5.0, 0.0))
            .build(),
    );
    w.add_body(BodyBuilder::dynamic_box(1, 1.0, 0.5, 0.5).position(vector(0.0, 2.0)).build());

    for _ in 0..120 {
        w.update(DT60);
    }

    assert!(w.bodies()[1].position.x > 0.0, "dynamic body was not pushed");
}

#[test]
fn scenario_warm_start_preserves_accumulated_impulses() {
    let mut w = world();
    w.add_body(
        BodyBuilder::dynamic_box(0, 1.0, 0.5, 0.5)
            .position(vector(7.6, 2.0))
            .velocity(vector(5.0, 0.0))
            .build(),
    );
    w.add_body(BodyBuilder::static_box(1, 0.5, 0.5).position(vector(8.0, 2.0)).build());

    w.update(DT60);
    assert!(!w.manifolds().is_empty(), "expected a contact this step");

    // Inject accumulated impulses directly to simulate a converged solve,
    // then run one more step and confirm the merge preserves them rather
    // than resetting to the fresh manifold's zeroed Pn/Pt.
    //
    // `PhysicsWorld` doesn't expose manifold mutation (manifolds are
    // rebuilt every step by design), so this exercises the merge through
    // `geometry::merge_manifold` directly against the same warm-start
    // contract `PhysicsWorld` relies on internally.
    use impulse2d::geometry::{merge_manifold, ContactManifold, ContactPoint};

    let mut manifolds = vec![ContactManifold::single_point(
        0,
        1,
        ContactPoint {
            position: vector(8.0, 2.0),
            normal: vector(-1.0, 0.0),
            penetration: 0.05,
            pn: 3.0,
            pt: 1.5,
        },
    )];

    let fresh = ContactManifold::single_point(
        0,
        1,
        ContactPoint {
            position: vector(8.0, 2.0),
            normal: vector(-1.0, 0.0),
            penetration: 0.02,
            pn: 0.0,
            pt: 0.0,
        },
    );
    merge_manifold(&mut manifolds, fresh);

    assert_eq!(manifolds.len(), 1);
    assert_eq!(manifolds[0].points[0].pn, 3.0);
    assert_eq!(manifolds[0].points[0].pt, 1.5);
}

#[test]
fn scenario_resting_body_on_ground() {
    let mut w = world();
    w.add_body(
        BodyBuilder::dynamic_box(0, 1.0, 0.5, 0.5)
            .position(vector(0.0, 0.0))
            .velocity(vector(0.0, -5.0))
            .acceleration(vector(0.0, -9.8))
            .build(),
    );

    w.update(DT60);

    let b = w.bodies()[0];
    assert!(b.on_ground);
    assert!(b.velocity.y >= 0.0);
    assert!(b.position.y >= 0.0);
}

#[test]
fn scenario_determinism_across_independent_worlds() {
    let build = || {
        let mut w = world();
        w.add_body(
            BodyBuilder::dynamic_box(0, 1.0, 0.5, 0.5)
                .position(vector(2.0, 5.0))
                .velocity(vector(5.0, 0.0))
                .acceleration(vector(0.0, -9.8))
                .build(),
        );
        w.add_body(BodyBuilder::static_box(1, 0.5, 0.5).position(vector(8.0, 2.0)).build());
        w
    };
    let mut a = build();
    let mut b = build();

    let frame_dts = [DT60, DT60 * 1.3, DT60 * 0.4, DT60 * 2.0, DT60 * 0.7];
    for &fdt in frame_dts.iter().cycle().take(400) {
        a.update(fdt);
        b.update(fdt);
    }

    assert_eq!(a.position(), b.position());
    assert_eq!(a.velocity(), b.velocity());
    assert_eq!(a.step_count(), b.step_count());
}

// ---------------------------------------------------------------------
// Invariants
// ---------------------------------------------------------------------

#[test]
fn invariant_accumulator_stays_in_range() {
    let mut w = world();
    for i in 0..500 {
        w.update(DT60 * (0.3 + (i % 7) as f32 * 0.21));
        assert!(w.accumulator() >= 0.0);
        assert!(w.accumulator() < DT60 + 1e-5);
    }
}

#[test]
fn invariant_step_count_is_monotonic() {
    let mut w = world();
    let mut last = 0;
    for _ in 0..50 {
        w.update(DT60 * 1.5);
        let now = w.step_count();
        assert!(now >= last);
        last = now;
    }
}

#[test]
fn invariant_manifold_impulses_stay_within_friction_cone() {
    let mut w = world();
    w.add_body(
        BodyBuilder::dynamic_box(0, 1.0, 0.5, 0.5)
            .position(vector(7.6, 2.0))
            .velocity(vector(5.0, 0.0))
            .build(),
    );
    w.add_body(BodyBuilder::static_box(1, 0.5, 0.5).position(vector(8.0, 2.0)).build());

    for _ in 0..30 {
        w.update(DT60);
        for m in w.manifolds() {
            let p = m.points[0];
            assert!(p.pn >= 0.0);
            assert!(p.pt.abs() <= 0.5 * p.pn + 1e-4);
        }
    }
}

#[test]
fn invariant_static_body_position_and_velocity_never_change() {
    let mut w = world();
    w.add_body(BodyBuilder::static_box(0, 0.5, 0.5).position(vector(8.0, 2.0)).build());
    w.add_body(
        BodyBuilder::dynamic_box(1, 1.0, 0.5, 0.5)
            .position(vector(0.0, 2.0))
            .velocity(vector(5.0, 0.0))
            .build(),
    );

    for _ in 0..120 {
        w.update(DT60);
    }

    assert_eq!(w.bodies()[0].position, vector(8.0, 2.0));
    assert_eq!(w.bodies()[0].velocity, vector(0.0, 0.0));
}

#[test]
fn invariant_pseudo_velocity_is_zero_at_every_frame_boundary() {
    let mut w = world();
    w.add_body(
        BodyBuilder::dynamic_box(0, 1.0, 0.5, 0.5)
            .position(vector(0.0, 0.0))
            .velocity(vector(0.0, -5.0))
            .acceleration(vector(0.0, -9.8))
            .build(),
    );

    for _ in 0..30 {
        w.update(DT60);
        for b in w.bodies() {
            assert_eq!(b.pseudo_velocity, vector(0.0, 0.0));
        }
    }
}

#[test]
fn invariant_manifold_pairs_are_unique() {
    let mut w = world();
    w.add_body(
        BodyBuilder::dynamic_box(0, 1.0, 0.5, 0.5)
            .position(vector(7.6, 2.0))
            .velocity(vector(5.0, 0.0))
            .build(),
    );
    w.add_body(BodyBuilder::static_box(1, 0.5, 0.5).position(vector(8.0, 2.0)).build());
    w.update(DT60);

    let mut seen = HashSet::new();
    for m in w.manifolds() {
        assert!(seen.insert((m.body_a, m.body_b)), "duplicate manifold pair in one step");
    }
}

// ---------------------------------------------------------------------
// Boundaries
// ---------------------------------------------------------------------

#[test]
fn boundary_frame_dt_below_fixed_dt_grows_accumulator_without_stepping() {
    let mut w = world();
    w.update(DT60 * 0.5);
    assert_eq!(w.step_count(), 0);
    assert_relative_eq!(w.accumulator(), DT60 * 0.5, epsilon = 1e-6);
}

#[test]
fn boundary_frame_dt_is_exact_multiple_of_fixed_dt() {
    let mut w = world();
    w.update(DT60 * 4.0);
    assert_eq!(w.step_count(), 4);
    assert_relative_eq!(w.accumulator(), 0.0, epsilon = 1e-5);
}

#[test]
fn boundary_one_second_frame_at_sixty_hz_yields_sixty_steps() {
    let mut w = world();
    w.update(1.0);
    assert_eq!(w.step_count(), 60);
}
