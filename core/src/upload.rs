//! Upload coordinator.
//!
//! Sends a selected file to the storage gateway and records the resulting
//! CID. Only one upload runs at a time: a selection made while another
//! upload is pending is rejected with [`UploadError::Busy`].

use async_trait::async_trait;

use crate::error::{UploadError, UploadResult};
use crate::state::StateCell;
use crate::types::{ContentId, FileUpload, UploadState};

/// Content-addressed storage gateway.
#[async_trait(?Send)]
pub trait StorageGateway {
    /// Store `file` and return its content identifier.
    async fn add(&self, file: FileUpload) -> UploadResult<ContentId>;
}

/// Holds `in_flight` for the lifetime of one gateway call.
///
/// Released on drop, so every exit path (success, error, or a dropped
/// future) clears the flag.
struct InFlightGuard<'a, C: StateCell<UploadState>> {
    state: &'a C,
}

impl<'a, C: StateCell<UploadState>> InFlightGuard<'a, C> {
    fn acquire(state: &'a C) -> Option<Self> {
        if state.get().in_flight {
            return None;
        }
        state.update(|s| s.in_flight = true);
        Some(Self { state })
    }
}

impl<C: StateCell<UploadState>> Drop for InFlightGuard<'_, C> {
    fn drop(&mut self) {
        self.state.update(|s| s.in_flight = false);
    }
}

/// Size check shared by the coordinator and by callers that know a file's
/// size before reading its contents.
pub fn check_file_size(size: usize, limit: usize) -> UploadResult<()> {
    if size == 0 {
        return Err(UploadError::EmptyFile);
    }
    if size > limit {
        return Err(UploadError::TooLarge { size, limit });
    }
    Ok(())
}

/// Uploads selected files and keeps the session's upload history.
pub struct UploadCoordinator<G, C> {
    gateway: G,
    state: C,
    max_upload_bytes: usize,
}

impl<G, C> UploadCoordinator<G, C>
where
    G: StorageGateway,
    C: StateCell<UploadState>,
{
    pub fn new(gateway: G, state: C, max_upload_bytes: usize) -> Self {
        Self {
            gateway,
            state,
            max_upload_bytes,
        }
    }

    pub fn is_uploading(&self) -> bool {
        self.state.get().in_flight
    }

    /// Upload the selected file, if any.
    ///
    /// On success the CID becomes the latest one and is appended to the
    /// history. On failure the history and latest CID are untouched.
    /// No retries: the user reselects the file.
    pub async fn select_and_upload(&self, selection: Option<FileUpload>) -> UploadResult<ContentId> {
        let file = selection.ok_or(UploadError::NoFileSelected)?;
        check_file_size(file.len(), self.max_upload_bytes)?;

        let _guard = InFlightGuard::acquire(&self.state).ok_or_else(|| {
            log::warn!("⚠️  Upload of {} rejected, another upload is in progress", file.name);
            UploadError::Busy
        })?;

        log::info!("📤 Uploading {} ({} bytes) to IPFS...", file.name, file.len());

        let cid = match self.gateway.add(file).await {
            Ok(cid) => cid,
            Err(e) => {
                log::error!("❌ Error uploading file to IPFS: {}", e);
                return Err(e);
            }
        };

        self.state.update(|s| {
            s.latest = Some(cid.clone());
            s.history.push(cid.clone());
        });

        log::info!("✅ File uploaded to IPFS: {}", cid);
        Ok(cid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::LocalCell;
    use futures::channel::oneshot;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    /// Gateway double answering from a queue of canned results.
    #[derive(Clone, Default)]
    struct FakeGateway {
        results: Rc<RefCell<VecDeque<UploadResult<ContentId>>>>,
        gate: Rc<RefCell<Option<oneshot::Receiver<()>>>>,
        received: Rc<RefCell<Vec<FileUpload>>>,
    }

    impl FakeGateway {
        fn answering(results: Vec<UploadResult<&str>>) -> Self {
            let gateway = Self::default();
            *gateway.results.borrow_mut() = results
                .into_iter()
                .map(|r| r.map(|cid| ContentId::parse(cid).unwrap()))
                .collect();
            gateway
        }
    }

    #[async_trait(?Send)]
    impl StorageGateway for FakeGateway {
        async fn add(&self, file: FileUpload) -> UploadResult<ContentId> {
            self.received.borrow_mut().push(file);
            let gate = self.gate.borrow_mut().take();
            if let Some(gate) = gate {
                let _ = gate.await;
            }
            self.results
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(UploadError::Network("no canned result".into())))
        }
    }

    /// Records every `in_flight` value written.
    #[derive(Clone)]
    struct TracingCell {
        inner: LocalCell<UploadState>,
        flags: Rc<RefCell<Vec<bool>>>,
    }

    impl StateCell<UploadState> for TracingCell {
        fn get(&self) -> UploadState {
            self.inner.get()
        }

        fn update(&self, f: impl FnOnce(&mut UploadState)) -> bool {
            let written = self.inner.update(f);
            self.flags.borrow_mut().push(self.inner.get().in_flight);
            written
        }
    }

    fn file(name: &str) -> Option<FileUpload> {
        Some(FileUpload::new(name, b"hello ipfs".to_vec()))
    }

    fn cid(raw: &str) -> ContentId {
        ContentId::parse(raw).unwrap()
    }

    fn coordinator(gateway: FakeGateway) -> (UploadCoordinator<FakeGateway, LocalCell<UploadState>>, LocalCell<UploadState>) {
        let state = LocalCell::new(UploadState::default());
        (UploadCoordinator::new(gateway, state.clone(), 1024), state)
    }

    #[tokio::test]
    async fn test_successful_upload() {
        let gateway = FakeGateway::answering(vec![Ok("Qm123")]);
        let (uploads, state) = coordinator(gateway.clone());
        assert!(!uploads.is_uploading());

        let result = uploads.select_and_upload(file("hello.txt")).await.unwrap();

        assert_eq!(result, cid("Qm123"));
        let state = state.get();
        assert_eq!(state.latest, Some(cid("Qm123")));
        assert_eq!(state.history, vec![cid("Qm123")]);
        assert!(!state.in_flight);
        assert_eq!(gateway.received.borrow()[0].name, "hello.txt");
    }

    #[tokio::test]
    async fn test_network_failure_leaves_history() {
        let gateway = FakeGateway::answering(vec![Err(UploadError::Network("connection refused".into()))]);
        let (uploads, state) = coordinator(gateway);

        let result = uploads.select_and_upload(file("hello.txt")).await;

        assert!(matches!(result, Err(UploadError::Network(_))));
        assert_eq!(state.get(), UploadState::default());
    }

    #[tokio::test]
    async fn test_history_in_completion_order() {
        let gateway = FakeGateway::answering(vec![
            Ok("QmFirst"),
            Err(UploadError::Gateway { status: 502, message: "bad gateway".into() }),
            Ok("QmSecond"),
            Ok("QmFirst"),
        ]);
        let (uploads, state) = coordinator(gateway);

        for _ in 0..4 {
            let _ = uploads.select_and_upload(file("a.bin")).await;
        }

        let state = state.get();
        assert_eq!(state.history, vec![cid("QmFirst"), cid("QmSecond"), cid("QmFirst")]);
        assert_eq!(state.latest, Some(cid("QmFirst")));
    }

    #[tokio::test]
    async fn test_failure_keeps_latest() {
        let gateway = FakeGateway::answering(vec![
            Ok("QmKeep"),
            Err(UploadError::InvalidResponse("missing Hash".into())),
        ]);
        let (uploads, state) = coordinator(gateway);

        uploads.select_and_upload(file("a.txt")).await.unwrap();
        assert!(uploads.select_and_upload(file("b.txt")).await.is_err());

        assert_eq!(state.get().latest, Some(cid("QmKeep")));
        assert_eq!(state.get().history.len(), 1);
    }

    #[tokio::test]
    async fn test_in_flight_spans_exactly_one_call() {
        let gateway = FakeGateway::answering(vec![Ok("QmA"), Err(UploadError::Network("reset".into()))]);
        let cell = TracingCell {
            inner: LocalCell::new(UploadState::default()),
            flags: Rc::new(RefCell::new(Vec::new())),
        };
        let uploads = UploadCoordinator::new(gateway, cell.clone(), 1024);

        let _ = uploads.select_and_upload(file("a")).await;
        let _ = uploads.select_and_upload(file("b")).await;

        // success: set, record, release; failure: set, release
        assert_eq!(*cell.flags.borrow(), vec![true, true, false, true, false]);
        assert!(!cell.get().in_flight);
    }

    #[tokio::test]
    async fn test_no_selection_is_a_notice() {
        let (uploads, state) = coordinator(FakeGateway::default());

        let err = uploads.select_and_upload(None).await.unwrap_err();

        assert!(matches!(err, UploadError::NoFileSelected));
        assert!(err.is_notice());
        assert_eq!(state.get(), UploadState::default());
    }

    #[tokio::test]
    async fn test_rejects_empty_and_oversized_files() {
        let gateway = FakeGateway::default();
        let (uploads, state) = coordinator(gateway.clone());

        let empty = uploads.select_and_upload(Some(FileUpload::new("empty", Vec::new()))).await;
        assert!(matches!(empty, Err(UploadError::EmptyFile)));

        let big = uploads.select_and_upload(Some(FileUpload::new("big", vec![0; 2048]))).await;
        assert!(matches!(big, Err(UploadError::TooLarge { size: 2048, limit: 1024 })));

        assert!(gateway.received.borrow().is_empty());
        assert!(!state.get().in_flight);
    }

    #[test]
    fn test_size_check_before_reading() {
        assert!(check_file_size(1, 1024).is_ok());
        assert!(check_file_size(1024, 1024).is_ok());
        assert!(matches!(check_file_size(0, 1024), Err(UploadError::EmptyFile)));

        // A multi-gigabyte selection is refused from its reported size alone.
        let huge = 3 * 1024 * 1024 * 1024_usize;
        match check_file_size(huge, crate::config::MAX_UPLOAD_BYTES) {
            Err(UploadError::TooLarge { size, limit }) => {
                assert_eq!(size, huge);
                assert_eq!(limit, 50 * 1024 * 1024);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_second_selection_while_in_flight_is_rejected() {
        let gateway = FakeGateway::answering(vec![Ok("QmSlow")]);
        let (tx, rx) = oneshot::channel();
        *gateway.gate.borrow_mut() = Some(rx);
        let (uploads, state) = coordinator(gateway.clone());

        let (first, second) = futures::join!(uploads.select_and_upload(file("slow.txt")), async {
            assert!(uploads.is_uploading());
            let second = uploads.select_and_upload(file("fast.txt")).await;
            let _ = tx.send(());
            second
        });

        assert_eq!(first.unwrap(), cid("QmSlow"));
        assert!(matches!(second, Err(UploadError::Busy)));
        assert_eq!(state.get().history, vec![cid("QmSlow")]);
        assert!(!state.get().in_flight);
        assert_eq!(gateway.received.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_dropped_upload_releases_flag() {
        let gateway = FakeGateway::answering(vec![Ok("QmNever")]);
        let (_tx, rx) = oneshot::channel::<()>();
        *gateway.gate.borrow_mut() = Some(rx);
        let (uploads, state) = coordinator(gateway);

        {
            let pending = uploads.select_and_upload(file("abandoned.txt"));
            futures::pin_mut!(pending);
            assert!(futures::poll!(pending.as_mut()).is_pending());
            assert!(state.get().in_flight);
        }

        assert!(!state.get().in_flight);
        assert!(state.get().history.is_empty());
    }
}
