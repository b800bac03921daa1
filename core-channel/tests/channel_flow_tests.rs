//! Integration tests for the full channel flow
//!
//! These tests wire the dispatcher, the query handlers, and the picker
//! session together the way the service façade does, and verify:
//! - the exactly-one-reply contract per dispatched call
//! - the suspended `getDirectoryPath` flow end to end
//! - rejection of a concurrent directory request while one is outstanding
//! - grant lifecycle across selection, replacement, and release

use async_trait::async_trait;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::Mutex as StdMutex;
use tokio::sync::mpsc;

use bridge_traits::error::Result as BridgeResult;
use bridge_traits::picker::{FolderPicker, PickerOptions, PickerOutcome};
use bridge_traits::power::IdleLock;
use bridge_traits::proxy::{ProxyConfig, ProxyResolver};
use bridge_traits::scoped::ScopedAccess;

use core_channel::handlers::{
    GetDirectoryPathHandler, GetProxyHandler, SetScreenOnHandler, StopScopedAccessHandler,
};
use core_channel::{methods, ChannelDispatcher, ChannelReply, MethodCall, PickerSession, PICKER_BUSY};

/// Proxy resolver with a fixed answer.
struct FixedProxy(Option<ProxyConfig>);

#[async_trait]
impl ProxyResolver for FixedProxy {
    async fn http_proxy(&self) -> BridgeResult<Option<ProxyConfig>> {
        Ok(self.0.clone())
    }
}

/// Idle lock recording the last written flag.
#[derive(Default)]
struct FlagLock {
    kept_awake: StdMutex<bool>,
}

#[async_trait]
impl IdleLock for FlagLock {
    async fn set_keep_awake(&self, keep_awake: bool) -> BridgeResult<()> {
        *self.kept_awake.lock().unwrap() = keep_awake;
        Ok(())
    }

    async fn is_kept_awake(&self) -> bool {
        *self.kept_awake.lock().unwrap()
    }
}

/// Scoped access fake that always grants and records call order.
#[derive(Default)]
struct RecordingScopedAccess {
    events: StdMutex<Vec<String>>,
}

impl RecordingScopedAccess {
    fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl ScopedAccess for RecordingScopedAccess {
    async fn begin_access(&self, path: &Path) -> BridgeResult<bool> {
        self.events
            .lock()
            .unwrap()
            .push(format!("begin {}", path.display()));
        Ok(true)
    }

    async fn end_access(&self, path: &Path) -> BridgeResult<()> {
        self.events
            .lock()
            .unwrap()
            .push(format!("end {}", path.display()));
        Ok(())
    }
}

/// Picker driven by the test: signals each presentation, then waits for the
/// test to feed the user's outcome.
struct GatedPicker {
    presented_tx: mpsc::UnboundedSender<()>,
    outcome_rx: tokio::sync::Mutex<mpsc::UnboundedReceiver<PickerOutcome>>,
}

#[async_trait]
impl FolderPicker for GatedPicker {
    async fn pick_directory(&self, _options: PickerOptions) -> BridgeResult<PickerOutcome> {
        self.presented_tx.send(()).expect("test receiver alive");
        let outcome = self
            .outcome_rx
            .lock()
            .await
            .recv()
            .await
            .expect("test feeds an outcome per presentation");
        Ok(outcome)
    }
}

/// Everything a test needs to drive the wired-up channel.
struct Harness {
    dispatcher: ChannelDispatcher,
    session: Arc<PickerSession>,
    scoped: Arc<RecordingScopedAccess>,
    idle_lock: Arc<FlagLock>,
    presented_rx: mpsc::UnboundedReceiver<()>,
    outcome_tx: mpsc::UnboundedSender<PickerOutcome>,
}

fn build_harness(proxy: Option<ProxyConfig>) -> Harness {
    let (presented_tx, presented_rx) = mpsc::unbounded_channel();
    let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();

    let picker = Arc::new(GatedPicker {
        presented_tx,
        outcome_rx: tokio::sync::Mutex::new(outcome_rx),
    });
    let scoped = Arc::new(RecordingScopedAccess::default());
    let idle_lock = Arc::new(FlagLock::default());

    let session = Arc::new(PickerSession::new(
        picker,
        Arc::clone(&scoped) as Arc<dyn ScopedAccess>,
    ));

    let mut dispatcher = ChannelDispatcher::new();
    dispatcher
        .register(
            methods::GET_PROXY,
            Arc::new(GetProxyHandler::new(Arc::new(FixedProxy(proxy)))),
        )
        .unwrap();
    dispatcher
        .register(
            methods::SET_SCREEN_ON,
            Arc::new(SetScreenOnHandler::new(
                Arc::clone(&idle_lock) as Arc<dyn IdleLock>
            )),
        )
        .unwrap();
    dispatcher
        .register(
            methods::GET_DIRECTORY_PATH,
            Arc::new(GetDirectoryPathHandler::new(Arc::clone(&session))),
        )
        .unwrap();
    dispatcher
        .register(
            methods::STOP_ACCESSING_SCOPED_RESOURCE,
            Arc::new(StopScopedAccessHandler::new(Arc::clone(&session))),
        )
        .unwrap();

    Harness {
        dispatcher,
        session,
        scoped,
        idle_lock,
        presented_rx,
        outcome_tx,
    }
}

impl Harness {
    /// Dispatch `getDirectoryPath`, resolve the picker with `outcome`, and
    /// return the reply.
    async fn pick(&mut self, outcome: PickerOutcome) -> ChannelReply {
        let receiver = self
            .dispatcher
            .dispatch(MethodCall::new(methods::GET_DIRECTORY_PATH))
            .await;
        self.presented_rx.recv().await.expect("picker presented");
        self.outcome_tx.send(outcome).unwrap();
        receiver.await.unwrap()
    }
}

#[tokio::test]
async fn test_get_proxy_round_trip() {
    let harness = build_harness(Some(ProxyConfig::new("192.168.1.10", 8888)));
    let reply = harness
        .dispatcher
        .call(MethodCall::new(methods::GET_PROXY))
        .await
        .unwrap();
    assert_eq!(reply, ChannelReply::ok("192.168.1.10:8888"));

    let harness = build_harness(None);
    let reply = harness
        .dispatcher
        .call(MethodCall::new(methods::GET_PROXY))
        .await
        .unwrap();
    assert_eq!(reply, ChannelReply::ok(""));
}

#[tokio::test]
async fn test_set_screen_on_then_off() {
    let harness = build_harness(None);

    for flag in [true, false] {
        let reply = harness
            .dispatcher
            .call(MethodCall::with_args(methods::SET_SCREEN_ON, flag))
            .await
            .unwrap();
        assert_eq!(reply, ChannelReply::ok_empty());
    }

    assert!(!harness.idle_lock.is_kept_awake().await);
}

#[tokio::test]
async fn test_directory_selection_end_to_end() {
    let mut harness = build_harness(None);

    let reply = harness
        .pick(PickerOutcome::Selected(vec![PathBuf::from("/a/b")]))
        .await;

    assert_eq!(reply, ChannelReply::ok("/a/b"));
    assert_eq!(
        harness.session.held_grant().await,
        Some(PathBuf::from("/a/b"))
    );
}

#[tokio::test]
async fn test_directory_cancellation_end_to_end() {
    let mut harness = build_harness(None);

    harness
        .pick(PickerOutcome::Selected(vec![PathBuf::from("/a/b")]))
        .await;
    let reply = harness.pick(PickerOutcome::Cancelled).await;

    assert_eq!(reply, ChannelReply::ok_empty());
    // The earlier grant survives a cancelled re-pick.
    assert_eq!(
        harness.session.held_grant().await,
        Some(PathBuf::from("/a/b"))
    );
}

#[tokio::test]
async fn test_second_selection_replaces_grant_without_leak() {
    let mut harness = build_harness(None);

    harness
        .pick(PickerOutcome::Selected(vec![PathBuf::from("/a/b")]))
        .await;
    harness
        .pick(PickerOutcome::Selected(vec![PathBuf::from("/c/d")]))
        .await;

    assert_eq!(
        harness.session.held_grant().await,
        Some(PathBuf::from("/c/d"))
    );
    assert_eq!(
        harness.scoped.events(),
        vec!["begin /a/b", "begin /c/d", "end /a/b"]
    );
}

#[tokio::test]
async fn test_concurrent_directory_request_rejected() {
    let mut harness = build_harness(None);

    // First request: picker is now up, waiting on the user.
    let first = harness
        .dispatcher
        .dispatch(MethodCall::new(methods::GET_DIRECTORY_PATH))
        .await;
    harness.presented_rx.recv().await.unwrap();

    // Second request while the first is outstanding.
    let second = harness
        .dispatcher
        .call(MethodCall::new(methods::GET_DIRECTORY_PATH))
        .await
        .unwrap();
    match second {
        ChannelReply::Error { code, .. } => assert_eq!(code, PICKER_BUSY),
        other => panic!("expected picker-busy error, got {other:?}"),
    }

    // The first request still resolves normally.
    harness
        .outcome_tx
        .send(PickerOutcome::Selected(vec![PathBuf::from("/a/b")]))
        .unwrap();
    assert_eq!(first.await.unwrap(), ChannelReply::ok("/a/b"));
}

#[tokio::test]
async fn test_release_without_grant_is_no_op() {
    let harness = build_harness(None);

    let reply = harness
        .dispatcher
        .call(MethodCall::new(methods::STOP_ACCESSING_SCOPED_RESOURCE))
        .await
        .unwrap();

    assert_eq!(reply, ChannelReply::ok_empty());
    assert!(harness.scoped.events().is_empty());
}

#[tokio::test]
async fn test_release_ends_held_grant() {
    let mut harness = build_harness(None);

    harness
        .pick(PickerOutcome::Selected(vec![PathBuf::from("/a/b")]))
        .await;
    let reply = harness
        .dispatcher
        .call(MethodCall::new(methods::STOP_ACCESSING_SCOPED_RESOURCE))
        .await
        .unwrap();

    assert_eq!(reply, ChannelReply::ok_empty());
    assert_eq!(harness.session.held_grant().await, None);
    assert_eq!(harness.scoped.events(), vec!["begin /a/b", "end /a/b"]);
}

#[tokio::test]
async fn test_unrecognized_method_not_implemented() {
    let harness = build_harness(None);

    let reply = harness
        .dispatcher
        .call(MethodCall::new("frobnicate"))
        .await
        .unwrap();

    assert_eq!(reply, ChannelReply::NotImplemented);
}
