use primitive_mesh::{create_object, Shape, Triangle};
use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::Registry;

/// Records the level and message of every event it sees.
#[derive(Clone, Default)]
struct CaptureLayer {
    events: Arc<Mutex<Vec<(Level, String)>>>,
}

struct MessageVisitor(String);

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{value:?}");
        }
    }
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor(String::new());
        event.record(&mut visitor);
        self.events
            .lock()
            .unwrap()
            .push((*event.metadata().level(), visitor.0));
    }
}

/// Runs `f` under a capturing subscriber and returns its warnings.
fn warnings_during(f: impl FnOnce()) -> Vec<String> {
    let layer = CaptureLayer::default();
    let subscriber = Registry::default().with(layer.clone());
    tracing::subscriber::with_default(subscriber, f);

    let events = layer.events.lock().unwrap();
    events
        .iter()
        .filter(|(level, _)| *level == Level::WARN)
        .map(|(_, message)| message.clone())
        .collect()
}

#[test]
fn unknown_selector_warns_once_and_draws_cube() {
    let mut fallback: Vec<Triangle> = Vec::new();
    let warnings = warnings_during(|| create_object(&mut fallback, 5, 1.0, 3, 2));

    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("Unknown shape '5'"), "{}", warnings[0]);
    assert!(warnings[0].contains("drawing cube"), "{}", warnings[0]);

    let mut cube: Vec<Triangle> = Vec::new();
    create_object(&mut cube, Shape::Cube, 1.0, 3, 2);
    assert_eq!(fallback, cube);
}

#[test]
fn known_shapes_do_not_warn() {
    for shape in Shape::ALL {
        let mut tris: Vec<Triangle> = Vec::new();
        let warnings = warnings_during(|| create_object(&mut tris, shape, 1.0, 4, 2));
        assert!(warnings.is_empty(), "{shape} warned: {warnings:?}");
        assert!(!tris.is_empty());
    }
}

#[test]
fn clamping_does_not_warn() {
    let mut tris: Vec<Triangle> = Vec::new();
    let warnings = warnings_during(|| {
        create_object(&mut tris, Shape::Cube, 1.0, 0, 0);
        create_object(&mut tris, Shape::Cone, 1.0, 0, -3);
    });
    assert!(warnings.is_empty(), "{warnings:?}");
    assert_eq!(tris.len(), 12 + 6);
}
