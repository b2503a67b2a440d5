//! End-to-end display refresh tests.
//!
//! Drives a host instance against the scripted remote component: tag
//! upserts, the readiness transition, the awaited refresh, and every
//! acknowledgement outcome.

use synlink_harness::{SimChannel, SimRemote, StaticFetcher, tags_handle};
use synlink_host::{LifecyclePhase, RefreshError, Synoptic, TagValue};
use synlink_proto::{Command, ValueKind};

fn host_with_remote() -> (Synoptic<SimChannel, StaticFetcher>, SimRemote) {
    let (remote, channel) = SimRemote::new(7);
    let host = Synoptic::new(channel, StaticFetcher::new(), remote.id());
    (host, remote)
}

async fn make_ready(host: &mut Synoptic<SimChannel, StaticFetcher>, remote: &SimRemote) {
    host.handle_inbound(remote.id(), remote.loaded()).await.unwrap();
    host.handle_inbound(remote.id(), remote.ready("")).await.unwrap();
}

#[tokio::test]
async fn refresh_before_ready_rejects_without_sending() {
    let (mut host, mut remote) = host_with_remote();

    assert_eq!(host.refresh_display().await.unwrap_err(), RefreshError::NotReady);
    assert!(remote.sent().is_empty());

    // Still rejected after bootstrap, before readiness.
    host.handle_inbound(remote.id(), remote.loaded()).await.unwrap();
    assert_eq!(host.refresh_display().await.unwrap_err(), RefreshError::NotReady);
    assert!(remote.sent().is_empty());
}

#[tokio::test]
async fn end_to_end_refresh_flow() {
    let (mut host, mut remote) = host_with_remote();

    // Recorded before readiness: stored only, nothing sent.
    assert!(!host.set_value("P1", 10.5, false, false, None).await.unwrap());
    assert!(!host.set_value("P2", true, false, false, None).await.unwrap());
    assert!(remote.sent().is_empty());

    // Readiness pushes the automatic snapshot (tags were recorded).
    make_ready(&mut host, &remote).await;
    assert_eq!(host.phase(), LifecyclePhase::ReadyForData);
    let auto = remote.sent();
    assert_eq!(auto.len(), 1);
    let auto_handle = tags_handle(&auto[0]).unwrap();

    // The refresh sends exactly one tags envelope with both records.
    let ticket = host.refresh_display().await.unwrap();
    let sent = remote.sent();
    assert_eq!(sent.len(), 1);
    let Some(Command::Tags { tags, handle }) = sent[0].as_command() else {
        unreachable!("expected a tags envelope");
    };
    assert!(*handle > auto_handle, "handles ascend across sends");
    assert_eq!(tags.len(), 2);
    assert_eq!(tags[0].path, "P1");
    assert_eq!(tags[0].kind, ValueKind::Float);
    assert!(tags[0].quality);
    assert_eq!(tags[1].path, "P2");
    assert_eq!(tags[1].kind, ValueKind::Bool);
    assert!(tags[1].quality);

    // The matching acknowledgement resolves the refresh.
    host.handle_inbound(remote.id(), remote.ack(*handle)).await.unwrap();
    ticket.wait().await.unwrap();
}

#[tokio::test]
async fn second_refresh_rejects_while_outstanding() {
    let (mut host, mut remote) = host_with_remote();
    make_ready(&mut host, &remote).await;

    let ticket = host.refresh_display().await.unwrap();
    let handle = remote.last_tags_handle().unwrap();

    assert_eq!(
        host.refresh_display().await.unwrap_err(),
        RefreshError::RefreshInProgress
    );
    // The rejection sent nothing and the first refresh still resolves.
    assert!(remote.sent().is_empty());
    host.handle_inbound(remote.id(), remote.ack(handle)).await.unwrap();
    ticket.wait().await.unwrap();
}

#[tokio::test]
async fn stale_ack_leaves_the_refresh_pending() {
    let (mut host, mut remote) = host_with_remote();
    make_ready(&mut host, &remote).await;

    let ticket = host.refresh_display().await.unwrap();
    let handle = remote.last_tags_handle().unwrap();

    // An ack for a superseded handle is ignored.
    let stale = synlink_proto::UpdateHandle::new(handle.raw() + 40);
    host.handle_inbound(remote.id(), remote.ack(stale)).await.unwrap();
    assert_eq!(
        host.refresh_display().await.unwrap_err(),
        RefreshError::RefreshInProgress
    );

    // The real ack still completes it.
    host.handle_inbound(remote.id(), remote.ack(handle)).await.unwrap();
    ticket.wait().await.unwrap();
}

#[tokio::test]
async fn error_ack_rejects_with_the_remote_text() {
    let (mut host, mut remote) = host_with_remote();
    make_ready(&mut host, &remote).await;

    let ticket = host.refresh_display().await.unwrap();
    let handle = remote.last_tags_handle().unwrap();

    host.handle_inbound(remote.id(), remote.ack_error(handle, "render overrun"))
        .await
        .unwrap();
    assert_eq!(
        ticket.wait().await.unwrap_err(),
        RefreshError::RemoteUpdateFailed("render overrun".to_owned())
    );

    // The slot is free for the next refresh.
    assert!(host.refresh_display().await.is_ok());
}

#[tokio::test]
async fn refresh_with_values_stores_and_sends_them() {
    let (mut host, mut remote) = host_with_remote();
    make_ready(&mut host, &remote).await;

    let ticket = host
        .refresh_display_with(vec![
            ("FLOW".to_owned(), TagValue::Float(3.2)),
            ("RUN".to_owned(), TagValue::Bool(true)),
        ])
        .await
        .unwrap();

    let sent = remote.sent();
    let Some(Command::Tags { tags, handle }) = sent[0].as_command() else {
        unreachable!("expected a tags envelope");
    };
    assert_eq!(tags.len(), 2);
    assert_eq!(host.get_value("FLOW"), Some(&TagValue::Float(3.2)));

    host.handle_inbound(remote.id(), remote.ack(*handle)).await.unwrap();
    ticket.wait().await.unwrap();
}

#[tokio::test]
async fn push_values_is_fire_and_forget() {
    let (mut host, mut remote) = host_with_remote();

    // Not ready: nothing stored, no handle.
    let handle = host
        .push_values(vec![("A".to_owned(), TagValue::Float(1.0))])
        .await
        .unwrap();
    assert_eq!(handle, None);
    assert_eq!(host.get_value("A"), None);

    make_ready(&mut host, &remote).await;
    let handle = host
        .push_values(vec![("A".to_owned(), TagValue::Float(1.0))])
        .await
        .unwrap();
    assert!(handle.is_some());
    assert_eq!(remote.last_tags_handle(), handle);

    // No refresh is outstanding: a refresh can start right away.
    assert!(host.refresh_display().await.is_ok());
}

#[tokio::test]
async fn set_value_when_ready_sends_one_record() {
    let (mut host, mut remote) = host_with_remote();
    make_ready(&mut host, &remote).await;

    assert!(host.set_value("PUMP", "running", false, true, Some("Main pump")).await.unwrap());
    let sent = remote.sent();
    let Some(Command::Tags { tags, .. }) = sent[0].as_command() else {
        unreachable!("expected a tags envelope");
    };
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].kind, ValueKind::String);
    assert!(tags[0].parameters.value.alarmed);
    assert_eq!(tags[0].parameters.value.description, "Main pump");
}

#[tokio::test]
async fn closed_channel_fails_the_refresh_and_frees_the_slot() {
    let (mut host, remote) = host_with_remote();
    make_ready(&mut host, &remote).await;
    drop(remote);

    assert_eq!(
        host.refresh_display().await.unwrap_err(),
        RefreshError::ChannelClosed
    );
    // The failed attempt did not leave a dangling outstanding slot.
    assert_eq!(
        host.refresh_display().await.unwrap_err(),
        RefreshError::ChannelClosed
    );
}

#[tokio::test]
async fn dropping_the_host_resolves_the_ticket() {
    let (mut host, mut remote) = host_with_remote();
    make_ready(&mut host, &remote).await;

    let ticket = host.refresh_display().await.unwrap();
    let _handle = remote.last_tags_handle().unwrap();
    drop(host);

    assert_eq!(ticket.wait().await.unwrap_err(), RefreshError::ChannelClosed);
}
