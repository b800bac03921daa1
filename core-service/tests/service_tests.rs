//! Integration tests for the HostService façade
//!
//! These verify that `HostService::new` registers every channel method and
//! that the façade preserves the channel contracts end to end:
//! - each documented method answers (no `NotImplemented` leaks)
//! - unknown methods get the not-implemented signal
//! - the directory flow resolves through the shared session

use async_trait::async_trait;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::Mutex as StdMutex;

use bridge_traits::error::Result as BridgeResult;
use bridge_traits::picker::{FolderPicker, PickerOptions, PickerOutcome};
use bridge_traits::power::IdleLock;
use bridge_traits::proxy::{ProxyConfig, ProxyResolver};
use bridge_traits::scoped::ScopedAccess;

use core_channel::{methods, ChannelReply, MethodCall};
use core_runtime::config::HostConfig;
use core_service::HostService;

struct StubProxy(Option<ProxyConfig>);

#[async_trait]
impl ProxyResolver for StubProxy {
    async fn http_proxy(&self) -> BridgeResult<Option<ProxyConfig>> {
        Ok(self.0.clone())
    }
}

#[derive(Default)]
struct StubIdleLock {
    kept_awake: StdMutex<bool>,
}

#[async_trait]
impl IdleLock for StubIdleLock {
    async fn set_keep_awake(&self, keep_awake: bool) -> BridgeResult<()> {
        *self.kept_awake.lock().unwrap() = keep_awake;
        Ok(())
    }

    async fn is_kept_awake(&self) -> bool {
        *self.kept_awake.lock().unwrap()
    }
}

struct GrantAll;

#[async_trait]
impl ScopedAccess for GrantAll {
    async fn begin_access(&self, _path: &Path) -> BridgeResult<bool> {
        Ok(true)
    }

    async fn end_access(&self, _path: &Path) -> BridgeResult<()> {
        Ok(())
    }
}

struct ScriptedPicker {
    outcomes: StdMutex<VecDeque<PickerOutcome>>,
}

impl ScriptedPicker {
    fn new(outcomes: Vec<PickerOutcome>) -> Self {
        Self {
            outcomes: StdMutex::new(outcomes.into()),
        }
    }
}

#[async_trait]
impl FolderPicker for ScriptedPicker {
    async fn pick_directory(&self, _options: PickerOptions) -> BridgeResult<PickerOutcome> {
        Ok(self
            .outcomes
            .lock()
            .unwrap()
            .pop_front()
            .expect("picker presented more times than scripted"))
    }
}

fn service_with_picker(proxy: Option<ProxyConfig>, outcomes: Vec<PickerOutcome>) -> HostService {
    let config = HostConfig::builder()
        .proxy_resolver(Arc::new(StubProxy(proxy)))
        .idle_lock(Arc::new(StubIdleLock::default()))
        .scoped_access(Arc::new(GrantAll))
        .folder_picker(Arc::new(ScriptedPicker::new(outcomes)))
        .build()
        .unwrap();
    HostService::new(config).unwrap()
}

#[tokio::test]
async fn test_every_channel_method_is_registered() {
    let service = service_with_picker(None, vec![PickerOutcome::Cancelled]);

    let calls = [
        MethodCall::new(methods::GET_PROXY),
        MethodCall::with_args(methods::SET_SCREEN_ON, true),
        MethodCall::new(methods::GET_DIRECTORY_PATH),
        MethodCall::new(methods::STOP_ACCESSING_SCOPED_RESOURCE),
    ];

    for call in calls {
        let reply = service.invoke(call).await.unwrap();
        assert_ne!(reply, ChannelReply::NotImplemented);
    }
}

#[tokio::test]
async fn test_unknown_method_is_not_implemented() {
    let service = service_with_picker(None, Vec::new());

    let reply = service
        .invoke(MethodCall::new("frobnicate"))
        .await
        .unwrap();
    assert_eq!(reply, ChannelReply::NotImplemented);
}

#[tokio::test]
async fn test_proxy_reply_through_facade() {
    let service = service_with_picker(Some(ProxyConfig::new("10.0.0.1", 7890)), Vec::new());

    let reply = service
        .invoke(MethodCall::new(methods::GET_PROXY))
        .await
        .unwrap();
    assert_eq!(reply, ChannelReply::ok("10.0.0.1:7890"));
}

#[tokio::test]
async fn test_directory_flow_through_facade() {
    let service = service_with_picker(
        None,
        vec![PickerOutcome::Selected(vec![PathBuf::from("/books")])],
    );

    let reply = service
        .invoke(MethodCall::new(methods::GET_DIRECTORY_PATH))
        .await
        .unwrap();
    assert_eq!(reply, ChannelReply::ok("/books"));
    assert_eq!(
        service.session().held_grant().await,
        Some(PathBuf::from("/books"))
    );

    let reply = service
        .invoke(MethodCall::new(methods::STOP_ACCESSING_SCOPED_RESOURCE))
        .await
        .unwrap();
    assert_eq!(reply, ChannelReply::ok_empty());
    assert_eq!(service.session().held_grant().await, None);
}
