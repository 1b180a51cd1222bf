//! Autosave coordinator for a live editing session.
//!
//! Debounce, not throttle: a save fires one quiet period after the last
//! edit, and any edit inside the window resets the timer, so the store sees
//! roughly one write per pause-in-typing instead of one per keystroke.
//! Saves are fire-and-forget — failures are logged and swallowed, and a
//! failed or missing draft fetch starts the session empty rather than
//! blocking it.
//!
//! Ordering caveat: overlapping in-flight saves may complete out of order.
//! Each save is a full-document upsert, so the worst case is an older
//! snapshot transiently winning; the quiet period makes overlap rare and the
//! design accepts the race (no locking, no version tokens).
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tracing::warn;
use uuid::Uuid;

use crate::drafts::DraftStore;
use crate::resume::ResumeData;

/// Quiet period after the last edit before the draft save fires.
pub const QUIET_PERIOD: Duration = Duration::from_millis(1200);

/// Which part of the workspace is active. Edits only autosave from the live
/// editor; the import and cover-letter views would persist incomplete or
/// irrelevant snapshots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditorView {
    #[default]
    LiveEditor,
    Import,
    CoverLetter,
}

#[derive(Default)]
struct Session {
    current: Option<ResumeData>,
    template_id: Option<String>,
    view: EditorView,
    generating: bool,
    /// Set once an import lands; from then on a late-resolving draft fetch
    /// must not overwrite the editor.
    imported: bool,
    /// Bumped on every scheduled save and on every suppression event. A
    /// sleeping save task only fires if its sequence number is still current.
    seq: u64,
    pending: Option<ResumeData>,
}

/// Owns the autosave lifecycle for one user's editing session.
#[derive(Clone)]
pub struct AutosaveCoordinator {
    inner: Arc<Inner>,
}

struct Inner {
    store: Arc<dyn DraftStore>,
    user_id: Uuid,
    quiet_period: Duration,
    session: Mutex<Session>,
}

impl AutosaveCoordinator {
    pub fn new(store: Arc<dyn DraftStore>, user_id: Uuid) -> Self {
        Self {
            inner: Arc::new(Inner {
                store,
                user_id,
                quiet_period: QUIET_PERIOD,
                session: Mutex::new(Session::default()),
            }),
        }
    }

    /// Seeds the session from the persisted draft. If an import populated
    /// the editor while the fetch was in flight, the imported data wins and
    /// the fetched draft is discarded. Fetch failures degrade to "no draft".
    pub async fn restore_draft(&self) -> Option<ResumeData> {
        let template_id = {
            let session = self.inner.session.lock().await;
            session.template_id.clone()
        };

        let fetched = self
            .inner
            .store
            .latest_draft(self.inner.user_id, template_id.as_deref())
            .await;

        let mut session = self.inner.session.lock().await;
        match fetched {
            Ok(Some(draft)) => {
                if session.imported {
                    return session.current.clone();
                }
                match serde_json::from_value::<ResumeData>(draft.content) {
                    Ok(data) => {
                        session.current = Some(data.clone());
                        Some(data)
                    }
                    Err(e) => {
                        warn!("stored draft did not deserialize, starting empty: {e}");
                        session.current.clone()
                    }
                }
            }
            Ok(None) => session.current.clone(),
            Err(e) => {
                warn!("draft fetch failed, starting empty: {e}");
                session.current.clone()
            }
        }
    }

    /// Replaces the editor state with imported data. Imported data always
    /// wins over a stale persisted draft for the rest of the session.
    pub async fn import(&self, data: ResumeData) {
        let mut session = self.inner.session.lock().await;
        session.imported = true;
        session.current = Some(data);
    }

    pub async fn set_view(&self, view: EditorView) {
        let mut session = self.inner.session.lock().await;
        session.view = view;
        if view != EditorView::LiveEditor {
            // Leaving the editor cancels the pending timer; a save already
            // handed to the store is allowed to complete.
            session.seq += 1;
            session.pending = None;
        }
    }

    pub async fn set_generating(&self, generating: bool) {
        let mut session = self.inner.session.lock().await;
        session.generating = generating;
        if generating {
            session.seq += 1;
            session.pending = None;
        }
    }

    pub async fn set_template(&self, template_id: Option<String>) {
        let mut session = self.inner.session.lock().await;
        session.template_id = template_id;
    }

    /// Records an edit and (re)schedules the debounced save. Suppressed
    /// outside the live editor and while a generation request is in flight.
    pub async fn apply_edit(&self, data: ResumeData) {
        let seq = {
            let mut session = self.inner.session.lock().await;
            session.current = Some(data.clone());
            if session.view != EditorView::LiveEditor || session.generating {
                return;
            }
            session.seq += 1;
            session.pending = Some(data);
            session.seq
        };

        let coordinator = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(coordinator.inner.quiet_period).await;
            coordinator.flush_if_current(seq).await;
        });
    }

    /// The editor state as the session currently sees it.
    pub async fn current(&self) -> Option<ResumeData> {
        self.inner.session.lock().await.current.clone()
    }

    async fn flush_if_current(&self, seq: u64) {
        let (data, template_id) = {
            let mut session = self.inner.session.lock().await;
            if session.seq != seq {
                // Superseded by a newer edit or a suppression event.
                return;
            }
            match session.pending.take() {
                Some(data) => (data, session.template_id.clone()),
                None => return,
            }
        };

        if let Err(e) = self
            .inner
            .store
            .save_draft(self.inner.user_id, template_id.as_deref(), &data)
            .await
        {
            warn!("draft autosave failed: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::DraftRecord;
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex as StdMutex;

    /// In-memory store double. Records every save and can be configured to
    /// fail, return a canned draft, or delay the fetch.
    #[derive(Default)]
    struct RecordingStore {
        saves: StdMutex<Vec<ResumeData>>,
        save_attempts: AtomicUsize,
        fail_saves: bool,
        fail_fetch: bool,
        fetch_result: Option<ResumeData>,
        fetch_delay: Option<Duration>,
    }

    impl RecordingStore {
        fn save_count(&self) -> usize {
            self.saves.lock().unwrap().len()
        }

        fn last_save(&self) -> Option<ResumeData> {
            self.saves.lock().unwrap().last().cloned()
        }
    }

    #[async_trait]
    impl DraftStore for RecordingStore {
        async fn save_draft(
            &self,
            _user_id: Uuid,
            _template_id: Option<&str>,
            content: &ResumeData,
        ) -> anyhow::Result<()> {
            self.save_attempts.fetch_add(1, Ordering::SeqCst);
            if self.fail_saves {
                anyhow::bail!("store unavailable");
            }
            self.saves.lock().unwrap().push(content.clone());
            Ok(())
        }

        async fn latest_draft(
            &self,
            _user_id: Uuid,
            _template_id: Option<&str>,
        ) -> anyhow::Result<Option<DraftRecord>> {
            if let Some(delay) = self.fetch_delay {
                tokio::time::sleep(delay).await;
            }
            if self.fail_fetch {
                anyhow::bail!("store unavailable");
            }
            Ok(self.fetch_result.as_ref().map(|data| DraftRecord {
                id: Uuid::new_v4(),
                template_id: String::new(),
                content: serde_json::to_value(data).unwrap(),
                created_at: Utc::now(),
                updated_at: Utc::now(),
            }))
        }
    }

    fn edit(role: &str) -> ResumeData {
        ResumeData {
            target_role: role.to_string(),
            ..Default::default()
        }
    }

    fn coordinator(store: RecordingStore) -> (AutosaveCoordinator, Arc<RecordingStore>) {
        let store = Arc::new(store);
        let coordinator = AutosaveCoordinator::new(store.clone(), Uuid::new_v4());
        (coordinator, store)
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_edits_collapse_into_one_save_with_final_content() {
        let (coordinator, store) = coordinator(RecordingStore::default());

        for i in 1..=5 {
            coordinator.apply_edit(edit(&format!("edit {i}"))).await;
            tokio::time::sleep(Duration::from_millis(200)).await;
        }
        assert_eq!(store.save_count(), 0, "nothing may fire inside the quiet period");

        tokio::time::sleep(QUIET_PERIOD + Duration::from_millis(100)).await;
        assert_eq!(store.save_count(), 1);
        assert_eq!(store.last_save().unwrap().target_role, "edit 5");
    }

    #[tokio::test(start_paused = true)]
    async fn test_edit_inside_quiet_period_resets_timer() {
        let (coordinator, store) = coordinator(RecordingStore::default());

        coordinator.apply_edit(edit("first")).await;
        tokio::time::sleep(Duration::from_millis(1000)).await;
        coordinator.apply_edit(edit("second")).await;
        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert_eq!(store.save_count(), 0);

        tokio::time::sleep(Duration::from_millis(300)).await;
        assert_eq!(store.save_count(), 1);
        assert_eq!(store.last_save().unwrap().target_role, "second");
    }

    #[tokio::test(start_paused = true)]
    async fn test_separate_pauses_produce_separate_saves() {
        let (coordinator, store) = coordinator(RecordingStore::default());

        coordinator.apply_edit(edit("first")).await;
        tokio::time::sleep(QUIET_PERIOD + Duration::from_millis(100)).await;
        coordinator.apply_edit(edit("second")).await;
        tokio::time::sleep(QUIET_PERIOD + Duration::from_millis(100)).await;

        assert_eq!(store.save_count(), 2);
        assert_eq!(store.last_save().unwrap().target_role, "second");
    }

    #[tokio::test(start_paused = true)]
    async fn test_edits_outside_live_editor_do_not_save() {
        let (coordinator, store) = coordinator(RecordingStore::default());

        coordinator.set_view(EditorView::Import).await;
        coordinator.apply_edit(edit("importing")).await;
        tokio::time::sleep(QUIET_PERIOD * 2).await;

        assert_eq!(store.save_count(), 0);
        // The in-memory state still tracks the edit.
        assert_eq!(coordinator.current().await.unwrap().target_role, "importing");
    }

    #[tokio::test(start_paused = true)]
    async fn test_edits_while_generating_do_not_save() {
        let (coordinator, store) = coordinator(RecordingStore::default());

        coordinator.set_generating(true).await;
        coordinator.apply_edit(edit("mid-generation")).await;
        tokio::time::sleep(QUIET_PERIOD * 2).await;
        assert_eq!(store.save_count(), 0);

        coordinator.set_generating(false).await;
        coordinator.apply_edit(edit("after")).await;
        tokio::time::sleep(QUIET_PERIOD + Duration::from_millis(100)).await;
        assert_eq!(store.save_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_generation_start_cancels_pending_timer() {
        let (coordinator, store) = coordinator(RecordingStore::default());

        coordinator.apply_edit(edit("typed just before generate")).await;
        tokio::time::sleep(Duration::from_millis(500)).await;
        coordinator.set_generating(true).await;
        tokio::time::sleep(QUIET_PERIOD * 2).await;

        assert_eq!(store.save_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_leaving_editor_cancels_pending_timer() {
        let (coordinator, store) = coordinator(RecordingStore::default());

        coordinator.apply_edit(edit("typed")).await;
        coordinator.set_view(EditorView::CoverLetter).await;
        tokio::time::sleep(QUIET_PERIOD * 2).await;

        assert_eq!(store.save_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_imported_data_wins_over_late_draft_fetch() {
        let store = RecordingStore {
            fetch_result: Some(edit("stale draft")),
            fetch_delay: Some(Duration::from_millis(500)),
            ..Default::default()
        };
        let (coordinator, _store) = coordinator(store);

        let fetcher = coordinator.clone();
        let restore = tokio::spawn(async move { fetcher.restore_draft().await });

        // The import lands while the fetch is still in flight.
        tokio::time::sleep(Duration::from_millis(100)).await;
        coordinator.import(edit("imported")).await;

        let restored = restore.await.unwrap();
        assert_eq!(restored.unwrap().target_role, "imported");
        assert_eq!(coordinator.current().await.unwrap().target_role, "imported");
    }

    #[tokio::test(start_paused = true)]
    async fn test_restore_without_import_uses_fetched_draft() {
        let store = RecordingStore {
            fetch_result: Some(edit("persisted")),
            ..Default::default()
        };
        let (coordinator, _store) = coordinator(store);

        let restored = coordinator.restore_draft().await;
        assert_eq!(restored.unwrap().target_role, "persisted");
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_failure_starts_empty() {
        let store = RecordingStore {
            fail_fetch: true,
            ..Default::default()
        };
        let (coordinator, _store) = coordinator(store);

        assert!(coordinator.restore_draft().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_draft_yet_starts_empty() {
        let (coordinator, _store) = coordinator(RecordingStore::default());
        assert!(coordinator.restore_draft().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_save_failure_is_swallowed() {
        let store = RecordingStore {
            fail_saves: true,
            ..Default::default()
        };
        let (coordinator, store) = coordinator(store);

        coordinator.apply_edit(edit("doomed")).await;
        tokio::time::sleep(QUIET_PERIOD + Duration::from_millis(100)).await;

        assert_eq!(store.save_attempts.load(Ordering::SeqCst), 1);
        // The session keeps working; the next pause tries again.
        assert_eq!(coordinator.current().await.unwrap().target_role, "doomed");
    }
}
