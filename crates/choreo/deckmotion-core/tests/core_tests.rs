use deckmotion_core::{
    sample_curve, ChoreoConfig, Curve, CurveSpec, Deck, Direction, FlowDecl, Inputs, SlideScene,
    TargetRegistry,
};
use kurbo::Point;

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

fn line_curve(len: f64) -> Curve {
    Curve::from_spec(&CurveSpec::Polyline {
        points: vec![[0.0, 0.0], [len, 0.0]],
    })
}

fn registry_for(scene: &SlideScene) -> TargetRegistry {
    let mut names: Vec<String> = vec![scene.root.clone()];
    names.extend(scene.static_shapes.iter().cloned());
    names.extend(scene.connecting_paths.iter().cloned());
    names.extend(scene.sub_items.iter().cloned());
    names.extend(scene.labels.iter().cloned());
    names.extend(scene.flows.iter().map(|f| f.marker.clone()));
    names.extend(scene.pulses.iter().map(|p| p.target.clone()));
    names.extend(scene.counters.iter().map(|c| c.target.clone()));
    names.extend(scene.highlights.iter().map(|h| h.target.clone()));
    TargetRegistry::identity(names)
}

fn shapes_scene(shapes: &[&str]) -> SlideScene {
    SlideScene {
        name: "s".into(),
        root: "root".into(),
        static_shapes: shapes.iter().map(|s| s.to_string()).collect(),
        ..Default::default()
    }
}

/// it should satisfy the sampler boundary laws at t=0 and t=1
#[test]
fn sampler_boundaries() {
    let c = line_curve(100.0);
    assert_eq!(sample_curve(&c, 0.0, Direction::Forward), c.point_at(0.0));
    assert_eq!(
        sample_curve(&c, 1.0, Direction::Forward),
        c.point_at(c.length())
    );
}

/// it should make reverse sampling the mirror of forward for all t
#[test]
fn sampler_reverse_law() {
    let c = line_curve(100.0);
    for t in [0.0, 0.2, 0.25, 0.5, 0.66, 1.0] {
        let rev = sample_curve(&c, t, Direction::Reverse);
        let fwd = sample_curve(&c, 1.0 - t, Direction::Forward);
        assert!((rev.x - fwd.x).abs() < 1e-9);
        assert!((rev.y - fwd.y).abs() < 1e-9);
    }
}

/// it should return the single endpoint for every t on a zero-length curve
#[test]
fn sampler_degenerate_curve() {
    let c = Curve::polyline(&[Point::new(7.0, 9.0)]);
    for t in [0.0, 0.3, 1.0] {
        let p = sample_curve(&c, t, Direction::Forward);
        assert_eq!(p, Point::new(7.0, 9.0));
    }
}

/// it should compute the reveal total from inserted steps, not a constant
#[test]
fn reveal_total_matches_stagger_math() {
    let cfg = ChoreoConfig::default();
    let scene = shapes_scene(&["a", "b", "c"]);
    let mut reg = registry_for(&scene);
    let mut deck = Deck::new(cfg.clone());
    let id = deck.mount_slide(&scene, &mut reg).unwrap();
    deck.update(0.0, Inputs::default());
    let expected = 2.0 * cfg.shape_stagger + cfg.shape_appear;
    approx(deck.reveal_total(id).unwrap(), expected, 1e-6);
}

/// it should shrink the reveal to the remaining groups when targets are missing
#[test]
fn missing_target_group_shrinks_reveal() {
    let cfg = ChoreoConfig::default();
    let scene = shapes_scene(&["a", "ghost", "b"]);
    // "ghost" is not in the registry, so only two shapes bind.
    let mut reg = TargetRegistry::identity(["root", "a", "b"]);
    let mut deck = Deck::new(cfg.clone());
    let id = deck.mount_slide(&scene, &mut reg).unwrap();
    deck.update(0.0, Inputs::default());
    let expected = cfg.shape_stagger + cfg.shape_appear;
    approx(deck.reveal_total(id).unwrap(), expected, 1e-6);
}

/// it should keep the loop cycle length deterministic (total + pad + delay)
#[test]
fn loop_cycle_len_is_deterministic() {
    let cfg = ChoreoConfig::default();
    let scene = SlideScene {
        name: "s".into(),
        root: "root".into(),
        flows: vec![FlowDecl {
            name: "f".into(),
            marker: "m".into(),
            curve: CurveSpec::Polyline {
                points: vec![[0.0, 0.0], [10.0, 0.0]],
            },
            duration: 1.0,
            start_offset: 0.0,
            reverse: false,
        }],
        ..Default::default()
    };
    let mut reg = registry_for(&scene);
    let mut deck = Deck::new(cfg.clone());
    let id = deck.mount_slide(&scene, &mut reg).unwrap();
    deck.update(0.0, Inputs::default());
    let motion_span = cfg.fade_lead_in + 1.0 + cfg.fade_tail;
    let expected = motion_span + cfg.loop_trailing_pad + cfg.loop_repeat_delay;
    approx(deck.loop_cycle_len(id).unwrap(), expected, 1e-6);
}

/// it should produce identical serialized outputs for identical sequences
#[test]
fn determinism_same_sequence_same_outputs() {
    let scene = shapes_scene(&["a", "b"]);
    let mk = || {
        let mut reg = registry_for(&scene);
        let mut deck = Deck::new(ChoreoConfig::default());
        deck.mount_slide(&scene, &mut reg).unwrap();
        deck
    };
    let mut d1 = mk();
    let mut d2 = mk();
    for dt in [0.0, 0.016, 0.016, 0.1, 0.0, 0.032] {
        let j1 = serde_json::to_string(d1.update(dt, Inputs::default())).unwrap();
        let j2 = serde_json::to_string(d2.update(dt, Inputs::default())).unwrap();
        assert_eq!(j1, j2);
    }
}

/// it should produce empty outputs when the deck has no slides
#[test]
fn update_with_no_slides_is_safe_and_empty() {
    let mut deck = Deck::new(ChoreoConfig::default());
    let out = deck.update(0.016, Inputs::default());
    assert!(out.is_empty());
}

/// it should round-trip config and scene declarations through serde
#[test]
fn config_and_scene_serde_roundtrip() {
    let cfg = ChoreoConfig::default();
    let s = serde_json::to_string(&cfg).unwrap();
    let cfg2: ChoreoConfig = serde_json::from_str(&s).unwrap();
    assert_eq!(cfg, cfg2);

    let scene = shapes_scene(&["a"]);
    let s = serde_json::to_string(&scene).unwrap();
    let scene2: SlideScene = serde_json::from_str(&s).unwrap();
    assert_eq!(scene2.static_shapes, vec!["a".to_string()]);
}
