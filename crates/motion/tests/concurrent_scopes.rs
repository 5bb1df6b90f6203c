use std::sync::Arc;
use std::thread;

use greenwave_motion::{
    MotionHost, ObserverSpec, PlanRecorder, TickerSpec, Timeline, ToggleActions, Tween, TweenVars,
    ViewScope,
};

fn page(host: Arc<PlanRecorder>, cards: usize) -> usize {
    let mut scope = ViewScope::new(host);
    let hero = Timeline::new()
        .then(Tween::new(".hero-title").starting(TweenVars::hidden_below(50.0)))
        .add_at(Tween::new(".hero-subtitle"), "-=0.8")
        .unwrap();
    scope.add_ticker(TickerSpec::new("hero", hero)).unwrap();
    for i in 0..cards {
        let selector = format!("[data-card=\"{i}\"]");
        let spec = ObserverSpec::new(
            selector.clone(),
            "top bottom".parse().unwrap(),
            Tween::new(selector).starting(TweenVars::hidden_below(60.0)),
        )
        .toggle_actions(ToggleActions::PLAY_REVERSE);
        scope.observe(spec).unwrap();
    }
    scope.plan().len()
}

#[test]
fn concurrent_views_leave_no_live_registrations() {
    let recorder = Arc::new(PlanRecorder::new());

    let handles: Vec<_> = (0..8)
        .map(|n| {
            let host = recorder.clone();
            thread::spawn(move || {
                (0..50).map(|_| page(host.clone(), n + 1)).sum::<usize>()
            })
        })
        .collect();

    let planned: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
    // one ticker plus n + 1 cards per page
    assert_eq!(planned, (0..8).map(|n| 50 * (n + 2)).sum::<usize>());
    assert_eq!(recorder.live_count(), 0);
}
