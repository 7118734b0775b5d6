//! End-to-end tests for the dashboard side of the event feed.
//!
//! A local tokio-tungstenite server plays the event service. Frames flow
//! through the real client adapter into the same `EventFeed` the binary
//! runs; only the dashboard and the sequence listener are spies.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use futures::{SinkExt, StreamExt};
use tokio::net::TcpListener;
use tokio::sync::Notify;
use tokio_tungstenite::tungstenite::Message;
use wsevents_adapter_ws_client::{ClientConfig, run_reconnecting};
use wsevents_app::event_feed::EventFeed;
use wsevents_app::event_router::EventRouter;
use wsevents_app::ports::{Dashboard, SequenceListener};
use wsevents_app::sequence_engine::SequenceEngine;
use wsevents_domain::event::EventMessage;
use wsevents_domain::sequence::{EventPattern, SequenceDefinition};

// ── Spies ──────────────────────────────────────────────────────────

#[derive(Default)]
struct SpyDashboard {
    calls: Mutex<Vec<String>>,
}

impl SpyDashboard {
    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Dashboard for SpyDashboard {
    fn incoming_call(&self, payload: &EventMessage) {
        self.record(format!(
            "incoming_call {}",
            payload.field_str("number").unwrap_or_default()
        ));
    }

    fn weather_event(&self, _payload: &EventMessage) {
        self.record("weather_event".to_string());
    }

    fn mpd_event(&self, _payload: &EventMessage) {
        self.record("mpd_event".to_string());
    }

    fn aprs_event(&self, _payload: &EventMessage) {
        self.record("aprs_event".to_string());
    }

    fn wemo_event(&self, _payload: &EventMessage) {
        self.record("wemo_event".to_string());
    }

    fn hvac_event(&self, _payload: &EventMessage) {
        self.record("hvac_event".to_string());
    }

    fn reload_mainimg(&self) {
        self.record("reload_mainimg".to_string());
    }

    fn render_region(&self, region: &str, text: &str) {
        self.record(format!("render_region {region} {text}"));
    }
}

#[derive(Default)]
struct SpyListener {
    fired: Mutex<Vec<String>>,
}

impl SequenceListener for SpyListener {
    fn sequence_triggered(&self, name: &str, _last: &EventMessage) {
        self.fired.lock().unwrap().push(name.to_string());
    }
}

// ── Helpers ────────────────────────────────────────────────────────

/// Serve one session that sends `frames`, then closes.
async fn serve(frames: Vec<Message>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (tcp, _) = listener.accept().await.unwrap();
        let mut ws = tokio_tungstenite::accept_async(tcp).await.unwrap();
        for frame in frames {
            ws.send(frame).await.unwrap();
        }
        let _ = ws.close(None).await;
        while let Some(Ok(_)) = ws.next().await {}
    });

    format!("ws://{addr}/events")
}

type Feed = EventFeed<Arc<SpyDashboard>, Arc<SpyListener>>;

fn feed(definitions: Vec<SequenceDefinition>) -> (Feed, Arc<SpyDashboard>, Arc<SpyListener>) {
    let dashboard = Arc::new(SpyDashboard::default());
    let listener = Arc::new(SpyListener::default());
    let feed = EventFeed::new(
        EventRouter::new(Arc::clone(&dashboard)),
        SequenceEngine::new(definitions, Arc::clone(&listener)).unwrap(),
    );
    (feed, dashboard, listener)
}

/// Hand every frame from `url` to `feed` until `expected` frames have been
/// handled.
async fn follow(url: String, feed: &mut Feed, expected: usize) {
    let config = ClientConfig {
        url,
        reconnect_interval_secs: 0,
    };
    let done = Arc::new(Notify::new());
    let mut handled = 0;

    let on_message = {
        let done = Arc::clone(&done);
        move |raw: &str| {
            feed.handle(raw);
            handled += 1;
            if handled == expected {
                done.notify_one();
            }
        }
    };
    let shutdown = {
        let done = Arc::clone(&done);
        async move { done.notified().await }
    };

    tokio::time::timeout(
        Duration::from_secs(5),
        run_reconnecting(&config, on_message, shutdown),
    )
    .await
    .unwrap();
}

// ── Tests ──────────────────────────────────────────────────────────

#[tokio::test]
async fn should_route_every_feed_frame_to_its_handler() {
    let url = serve(vec![
        Message::text(r#"{"sender": "asterisk", "event": "incoming-call", "number": "5551234"}"#),
        Message::text(r#"{"sender": "garagedoor", "state": "open"}"#),
        Message::text("not json at all"),
        Message::binary(br#"{"sender": "lrmotion"}"#.to_vec()),
        Message::text(r#"{"sender": "toaster", "state": "on"}"#),
        Message::text(r#"{"sender": "hvac", "mode": "heat"}"#),
    ])
    .await;

    let (mut feed, dashboard, _listener) = feed(vec![]);

    follow(url, &mut feed, 6).await;

    assert_eq!(
        dashboard.calls(),
        vec![
            "incoming_call 5551234".to_string(),
            "render_region garage OPEN".to_string(),
            "reload_mainimg".to_string(),
            "hvac_event".to_string(),
        ]
    );
}

#[tokio::test]
async fn should_fire_sequence_from_feed() {
    let url = serve(vec![
        Message::text(r#"{"sender": "garagedoor", "state": "open"}"#),
        Message::text(r#"{"sender": "mpd", "song": "Freddie Freeloader"}"#),
        Message::text(r#"{"sender": "lrmotion"}"#),
    ])
    .await;

    let (mut feed, dashboard, listener) = feed(vec![SequenceDefinition::new(
        "arrival",
        vec![
            EventPattern::sender("garagedoor").with_field("state", "open"),
            EventPattern::sender("lrmotion"),
        ],
    )]);

    follow(url, &mut feed, 3).await;

    assert_eq!(*listener.fired.lock().unwrap(), vec!["arrival".to_string()]);
    assert_eq!(dashboard.calls().len(), 3);
}
