use deckmotion_core::{
    ChoreoConfig, Deck, DeckEvent, Inputs, Prop, SlideScene, SlideState, TargetRegistry,
};

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

/// it should list every scene fixture in the manifest
#[test]
fn manifest_lists_known_scenes() {
    let mut keys = deckmotion_fixtures::scenes::keys();
    keys.sort();
    assert!(keys.contains(&"minimal".to_string()));
    assert!(keys.contains(&"pipeline".to_string()));
}

/// it should parse the pipeline fixture into a full scene declaration
#[test]
fn pipeline_fixture_parses() {
    let scene: SlideScene = deckmotion_fixtures::scenes::load("pipeline").unwrap();
    assert_eq!(scene.static_shapes.len(), 3);
    assert_eq!(scene.connecting_paths.len(), 2);
    assert_eq!(scene.flows.len(), 2);
    assert!(scene.flows[1].reverse);
    assert_eq!(scene.pulses.len(), 1);
    assert_eq!(scene.counters.len(), 1);
    assert_eq!(scene.highlights.len(), 1);
}

/// it should mount and run the pipeline fixture end to end
#[test]
fn pipeline_fixture_runs() {
    let scene: SlideScene = deckmotion_fixtures::scenes::load("pipeline").unwrap();
    let mut reg = registry_for(&scene);
    let mut deck = Deck::new(ChoreoConfig::default());
    let id = deck.mount_slide(&scene, &mut reg).unwrap();

    deck.update(0.0, Inputs::none());
    assert_eq!(deck.slide_state(id), SlideState::Running);
    assert!(deck.reveal_total(id).unwrap() > 0.0);

    // Play through the reveal and into the loop.
    let mut revealed = false;
    let mut marker_moved = false;
    let mut counter_seen = false;
    for _ in 0..200 {
        let out = deck.update(0.05, Inputs::none());
        revealed |= out
            .events
            .iter()
            .any(|e| matches!(e, DeckEvent::RevealCompleted { .. }));
        marker_moved |= out
            .changes
            .iter()
            .any(|c| c.key == "marker.ticks" && c.prop == Prop::Position);
        counter_seen |= out
            .changes
            .iter()
            .any(|c| c.key == "label.throughput" && c.prop == Prop::Counter);
    }
    assert!(revealed);
    assert!(marker_moved);
    assert!(counter_seen);
}

/// it should run the minimal fixture even with no flows declared
#[test]
fn minimal_fixture_runs_without_loop() {
    let scene: SlideScene = deckmotion_fixtures::scenes::load("minimal").unwrap();
    let mut reg = registry_for(&scene);
    let mut deck = Deck::new(ChoreoConfig::default());
    let id = deck.mount_slide(&scene, &mut reg).unwrap();

    deck.update(0.0, Inputs::none());
    let mut revealed = false;
    let mut cycled = false;
    for _ in 0..40 {
        let out = deck.update(0.05, Inputs::none());
        revealed |= out
            .events
            .iter()
            .any(|e| matches!(e, DeckEvent::RevealCompleted { .. }));
        cycled |= out
            .events
            .iter()
            .any(|e| matches!(e, DeckEvent::LoopCycled { .. }));
    }
    assert!(revealed);
    assert!(!cycled, "empty loop must never cycle");
    assert_eq!(deck.slide_state(id), SlideState::Running);
}
