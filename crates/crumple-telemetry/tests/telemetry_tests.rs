//! Integration tests for crumple-telemetry.

use crumple_telemetry::bus::EventBus;
use crumple_telemetry::events::{DeformationEvent, EventKind};
use crumple_telemetry::sinks::{EventSink, TracingSink, VecSink};
use crumple_types::AnchorId;

fn impact(sequence: u64) -> DeformationEvent {
    DeformationEvent::new(
        sequence,
        EventKind::Impact {
            anchor: AnchorId(0),
            affected: 12,
            frozen: 0,
            newly_exhausted: 1,
            max_displacement: 0.004,
        },
    )
}

#[test]
fn emit_and_flush() {
    let mut bus = EventBus::new();
    let sink = VecSink::new();
    let events = sink.events();
    bus.add_sink(Box::new(sink));

    bus.emit(DeformationEvent::new(0, EventKind::Initialized { vertex_count: 8 }));
    bus.emit(impact(1));

    assert!(events.lock().unwrap().is_empty());
    assert_eq!(bus.flush(), 2);

    let events = events.lock().unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[1], impact(1));
}

#[test]
fn emitter_reaches_bus() {
    let mut bus = EventBus::new();
    let sink = VecSink::new();
    let events = sink.events();
    bus.add_sink(Box::new(sink));

    let emitter = bus.emitter();
    let handle = std::thread::spawn(move || {
        emitter.emit(impact(7));
    });
    handle.join().unwrap();

    bus.flush();
    assert_eq!(events.lock().unwrap()[0].sequence, 7);
}

#[test]
fn disabled_bus_drops_events() {
    let mut bus = EventBus::new();
    let sink = VecSink::new();
    let events = sink.events();
    bus.add_sink(Box::new(sink));

    bus.set_enabled(false);
    assert!(!bus.is_enabled());
    bus.emitter().emit(impact(0));
    assert_eq!(bus.flush(), 0);
    assert!(events.lock().unwrap().is_empty());

    bus.set_enabled(true);
    bus.emit(impact(1));
    assert_eq!(bus.flush(), 1);
}

#[test]
fn multiple_sinks_each_receive() {
    let mut bus = EventBus::new();
    let a = VecSink::new();
    let b = VecSink::new();
    let (ea, eb) = (a.events(), b.events());
    bus.add_sink(Box::new(a));
    bus.add_sink(Box::new(b));
    bus.add_sink(Box::new(TracingSink::new()));
    assert_eq!(bus.sink_count(), 3);

    bus.emit(DeformationEvent::new(0, EventKind::Reset { vertex_count: 4 }));
    bus.finish();
    assert_eq!(ea.lock().unwrap().len(), 1);
    assert_eq!(eb.lock().unwrap().len(), 1);
}

#[test]
fn tracing_sink_without_subscriber() {
    let mut sink = TracingSink::new();
    sink.handle(&impact(0));
    sink.handle(&DeformationEvent::new(1, EventKind::Reset { vertex_count: 4 }));
    sink.finalize();
    assert_eq!(sink.name(), "tracing_sink");
}

#[test]
fn event_serialization() {
    let event = impact(5);
    let json = serde_json::to_string(&event).unwrap();
    let recovered: DeformationEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, event);
}
