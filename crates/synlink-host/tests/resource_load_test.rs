//! Resource retrieval flow tests.

use std::sync::{Arc, Mutex};

use synlink_harness::{FailingFetcher, SimRemote, StaticFetcher};
use synlink_host::{EventKind, HostEvent, LifecyclePhase, Synoptic, TagValue};
use synlink_proto::OutboundMessage;

const PANEL_URL: &str = "http://panels.example/main.svg";
const PANEL_SVG: &str = "<svg><rect id=\"PUMP1\"/></svg>";

fn resources(sent: &[OutboundMessage]) -> Vec<&str> {
    sent.iter()
        .filter_map(|message| match message {
            OutboundMessage::Resource(body) => Some(body.as_str()),
            OutboundMessage::Envelope(_) => None,
        })
        .collect()
}

#[tokio::test]
async fn prefetched_resource_waits_for_bootstrap() {
    let (remote, channel) = SimRemote::new(3);
    let fetcher = StaticFetcher::new().with(PANEL_URL, PANEL_SVG);
    let mut host = Synoptic::new(channel, fetcher, remote.id());
    let mut remote = remote;

    host.load_url(PANEL_URL).await.unwrap();
    // Fetched, but the component has not bootstrapped: payload is cached.
    assert!(remote.sent().is_empty());

    host.handle_inbound(remote.id(), remote.loaded()).await.unwrap();
    assert_eq!(resources(&remote.sent()), vec![PANEL_SVG]);
}

#[tokio::test]
async fn load_after_bootstrap_posts_immediately() {
    let (remote, channel) = SimRemote::new(4);
    let fetcher = StaticFetcher::new().with(PANEL_URL, PANEL_SVG);
    let mut host = Synoptic::new(channel, fetcher, remote.id());
    let mut remote = remote;

    host.handle_inbound(remote.id(), remote.loaded()).await.unwrap();
    assert!(remote.sent().is_empty());

    host.load_url(PANEL_URL).await.unwrap();
    assert_eq!(resources(&remote.sent()), vec![PANEL_SVG]);
}

#[tokio::test]
async fn load_failure_fires_the_error_subscription() {
    let (remote, channel) = SimRemote::new(5);
    let mut host = Synoptic::new(channel, FailingFetcher::status(500), remote.id());

    let errors = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&errors);
    host.on(EventKind::Error, move |event| {
        if let HostEvent::Error(message) = event {
            sink.lock().unwrap().push(message.clone());
        }
    });

    host.load_url(PANEL_URL).await.unwrap();
    let captured = errors.lock().unwrap().clone();
    assert_eq!(captured.len(), 1);
    assert!(captured[0].contains("500"), "got: {}", captured[0]);

    // Lifecycle state is untouched and the load may be retried.
    assert_eq!(host.phase(), LifecyclePhase::Unloaded);
    host.load_url(PANEL_URL).await.unwrap();
    assert_eq!(errors.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn load_failure_without_subscriber_does_not_poison_the_host() {
    let (remote, channel) = SimRemote::new(6);
    let mut host = Synoptic::new(channel, FailingFetcher::transport("dns"), remote.id());

    // Unhandled failure is logged, not raised; the host stays usable.
    host.load_url(PANEL_URL).await.unwrap();
    assert_eq!(host.phase(), LifecyclePhase::Unloaded);
    assert!(!host.store_value("P1", 1.0, false, false, None));
}

#[tokio::test]
async fn bootstrap_retries_the_configured_url_when_nothing_cached() {
    let (remote, channel) = SimRemote::new(8);
    let mut host = Synoptic::new(channel, FailingFetcher::status(502), remote.id());

    let errors = Arc::new(Mutex::new(0_u32));
    let sink = Arc::clone(&errors);
    host.on(EventKind::Error, move |_| *sink.lock().unwrap() += 1);

    // The pre-bootstrap fetch fails, so nothing is cached.
    host.load_url(PANEL_URL).await.unwrap();
    assert_eq!(*errors.lock().unwrap(), 1);

    // Bootstrap finds a configured URL and no cached payload: it retries.
    host.handle_inbound(remote.id(), remote.loaded()).await.unwrap();
    assert_eq!(*errors.lock().unwrap(), 2);
}

#[tokio::test]
async fn reload_keeps_tags_and_reports_readiness_again() {
    let (remote, channel) = SimRemote::new(9);
    let fetcher = StaticFetcher::new().with(PANEL_URL, PANEL_SVG);
    let mut host = Synoptic::new(channel, fetcher, remote.id());
    let mut remote = remote;

    host.store_value("P1", 10.5, false, false, None);
    host.handle_inbound(remote.id(), remote.loaded()).await.unwrap();
    host.handle_inbound(remote.id(), remote.ready("P1")).await.unwrap();
    assert_eq!(host.phase(), LifecyclePhase::ReadyForData);
    remote.sent();

    host.load_url(PANEL_URL).await.unwrap();
    assert_eq!(host.phase(), LifecyclePhase::ComponentLoaded);
    assert_eq!(host.get_value("P1"), Some(&TagValue::Float(10.5)));

    // The component processes the new resource and reports ready; the
    // surviving tag triggers the automatic snapshot again.
    host.handle_inbound(remote.id(), remote.ready("P1,P2")).await.unwrap();
    assert_eq!(host.phase(), LifecyclePhase::ReadyForData);
    assert_eq!(host.tags_list(), "P1,P2");
    assert!(remote.last_tags_handle().is_some());
}
