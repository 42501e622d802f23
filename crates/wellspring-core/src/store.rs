//! The state store — single authority for the active snapshot.
//!
//! Bridges identity changes, remote load/save, mutation requests from the
//! UI, and the coach round trip. Mutations apply to the in-memory
//! snapshot synchronously; the durable copy trails behind through a
//! debounced save keyed to the identity it was scheduled under.

use chrono::{NaiveDate, Utc};

use crate::event_bus::EventBus;
use crate::ports::{CalendarContextEntry, CoachPort, CoachRequest, CoachResponse, StoragePort};
use wellspring_types::config::{AppConfig, TaskIngestion};
use wellspring_types::event::StoreEvent;
use wellspring_types::identity::Identity;
use wellspring_types::message::Message;
use wellspring_types::model::{
    CalendarDay, JournalEntry, NewJournalEntry, Task, TaskDraft, UserProfile,
};
use wellspring_types::snapshot::Snapshot;
use wellspring_types::{AppError, Result};

/// Profile name used when the identity carries no display name
pub const DEFAULT_PROFILE_NAME: &str = "Friend";

/// Transcript message substituted when the coach call fails
pub const COACH_FALLBACK_REPLY: &str = "I'm having a little trouble connecting \
right now. Please try again in a moment.";

/// How many recent days are projected into the coach prompt
const CONTEXT_DAYS: usize = 7;

/// Handle to a scheduled save. A ticket only flushes while it still
/// matches the store's pending slot — a superseding mutation or an
/// identity switch makes it stale and it is discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveTicket {
    pub key: String,
    pub epoch: u64,
}

/// A serialized snapshot ready for the storage port. Produced under a
/// short store borrow so the write itself runs borrow-free; the write's
/// outcome comes back through [`AppStore::note_save_result`].
#[derive(Debug, Clone)]
pub struct SaveJob {
    pub key: String,
    pub bytes: Vec<u8>,
}

pub struct AppStore {
    config: AppConfig,
    identity: Identity,
    snapshot: Snapshot,
    loading: bool,
    save_epoch: u64,
    pending: Option<SaveTicket>,
    events: EventBus,
}

impl AppStore {
    pub fn new(config: AppConfig, events: EventBus) -> Self {
        Self {
            config,
            identity: Identity::Guest,
            snapshot: Snapshot::default(),
            loading: true,
            save_epoch: 0,
            pending: None,
            events,
        }
    }

    // ─── Read access ─────────────────────────────────────────

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    // ─── Identity lifecycle ──────────────────────────────────

    /// Start switching to `identity`. Any save still pending for the
    /// outgoing identity is turned into a write job under its own key,
    /// so it can never land on top of the incoming identity's freshly
    /// loaded data.
    ///
    /// Returns the new identity's storage key plus that outgoing flush,
    /// if any. The caller runs the port calls between borrows and feeds
    /// the results back through [`note_save_result`] and
    /// [`finish_identity_change`] — the store stays readable (loading
    /// flag, snapshot) the whole time.
    ///
    /// [`note_save_result`]: AppStore::note_save_result
    /// [`finish_identity_change`]: AppStore::finish_identity_change
    pub fn begin_identity_change(&mut self, identity: Identity) -> (String, Option<SaveJob>) {
        self.loading = true;
        let flush = match self.pending.take() {
            Some(ticket) => self.encode_save(&ticket.key),
            None => None,
        };
        self.identity = identity;
        let key = self.identity.storage_key();
        log::info!("loading snapshot {}", key);
        (key, flush)
    }

    /// Adopt the load result for `key`, defaulting when the snapshot is
    /// absent, unreadable, or the read failed. Returns a persist-once
    /// job when this is the identity's first visit; a failed read gets
    /// no such write, so a transient outage cannot clobber the durable
    /// copy.
    pub fn finish_identity_change(
        &mut self,
        key: &str,
        loaded: Result<Option<Vec<u8>>>,
    ) -> Option<SaveJob> {
        let mut first_visit = false;
        self.snapshot = match loaded {
            Ok(Some(bytes)) => match serde_json::from_slice::<Snapshot>(&bytes) {
                Ok(snapshot) => snapshot,
                Err(e) => {
                    log::warn!("stored snapshot {} is unreadable: {}", key, e);
                    self.fresh_snapshot()
                }
            },
            Ok(None) => {
                first_visit = true;
                self.fresh_snapshot()
            }
            Err(e) => {
                log::warn!("loading {} failed, starting fresh: {}", key, e);
                self.fresh_snapshot()
            }
        };

        self.snapshot.calendar.sort_by(|a, b| b.date.cmp(&a.date));
        self.loading = false;
        self.events.emit(StoreEvent::SnapshotLoaded {
            key: key.to_string(),
        });

        if first_visit {
            // Persist the default once so the durable copy exists.
            // Nothing the user typed is at risk yet, so a failure here
            // only logs.
            match serde_json::to_vec(&self.snapshot) {
                Ok(bytes) => {
                    return Some(SaveJob {
                        key: key.to_string(),
                        bytes,
                    })
                }
                Err(e) => log::error!("snapshot serialization failed: {}", e),
            }
        }
        None
    }

    /// The begin/finish pair in one call, for callers that hold the
    /// store exclusively across the port calls.
    pub async fn on_identity_change(&mut self, identity: Identity, storage: &dyn StoragePort) {
        let (key, flush) = self.begin_identity_change(identity);
        if let Some(job) = flush {
            let result = storage.set(&job.key, &job.bytes).await;
            self.note_save_result(&job.key, result);
        }
        let loaded = storage.get(&key).await;
        if let Some(job) = self.finish_identity_change(&key, loaded) {
            if let Err(e) = storage.set(&job.key, &job.bytes).await {
                log::warn!("initial save of {} failed: {}", job.key, e);
            }
        }
    }

    fn fresh_snapshot(&self) -> Snapshot {
        let name = self
            .identity
            .display_name()
            .unwrap_or(DEFAULT_PROFILE_NAME);
        let today = Utc::now().date_naive();
        Snapshot::initial(name, today, self.config.seed_demo_data)
    }

    // ─── Mutations ───────────────────────────────────────────

    /// Record a journal entry for `date`, replacing any existing entry
    /// and mood for that day. Last write wins, no merge.
    pub fn add_journal_entry(&mut self, entry: NewJournalEntry) -> Result<()> {
        if entry.title.trim().is_empty() {
            return Err(AppError::InvalidArgument(
                "journal title must not be empty".to_string(),
            ));
        }
        if entry.content.trim().is_empty() {
            return Err(AppError::InvalidArgument(
                "journal content must not be empty".to_string(),
            ));
        }

        let date = entry.date;
        let mood = entry.mood;
        let journal = JournalEntry::new(entry);

        let day = self.day_mut(date);
        day.journal_entry = Some(journal);
        // The journal entry is the authority for the day's mood.
        day.mood = Some(mood);

        self.schedule_save();
        Ok(())
    }

    /// Append a single task to `date`, creating the day if needed.
    pub fn add_task(
        &mut self,
        content: impl Into<String>,
        completed: bool,
        date: NaiveDate,
    ) -> Result<()> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(AppError::InvalidArgument(
                "task content must not be empty".to_string(),
            ));
        }

        self.day_mut(date).tasks.push(Task::new(content, completed));
        self.schedule_save();
        Ok(())
    }

    /// Append a batch of tasks to `date` in the given order. The whole
    /// batch is validated up front; an invalid draft applies nothing.
    pub fn add_tasks(&mut self, drafts: &[TaskDraft], date: NaiveDate) -> Result<()> {
        if drafts.is_empty() {
            return Ok(());
        }
        if drafts.iter().any(|d| d.content.trim().is_empty()) {
            return Err(AppError::InvalidArgument(
                "task content must not be empty".to_string(),
            ));
        }

        let day = self.day_mut(date);
        for draft in drafts {
            day.tasks.push(Task::new(draft.content.clone(), draft.completed));
        }

        self.schedule_save();
        Ok(())
    }

    /// Flip a task's completion flag. Unknown ids are ignored — task ids
    /// are globally unique, so a miss means the task never existed here.
    pub fn set_task_completed(&mut self, task_id: &str, completed: bool) {
        for day in &mut self.snapshot.calendar {
            if let Some(task) = day.tasks.iter_mut().find(|t| t.id == task_id) {
                task.completed = completed;
                self.schedule_save();
                return;
            }
        }
    }

    /// Full profile replace. Callers merge fields before calling.
    pub fn update_profile(&mut self, profile: UserProfile) {
        self.snapshot.profile = Some(profile);
        self.schedule_save();
    }

    pub fn append_message(&mut self, message: Message) {
        self.snapshot.messages.push(message);
        self.schedule_save();
    }

    /// Wholesale transcript replacement, for callers that compute the
    /// next sequence from the previous one.
    pub fn replace_messages(&mut self, messages: Vec<Message>) {
        self.snapshot.messages = messages;
        self.schedule_save();
    }

    /// Find or insert the day for `date`, keeping the calendar sorted
    /// newest first.
    fn day_mut(&mut self, date: NaiveDate) -> &mut CalendarDay {
        let calendar = &mut self.snapshot.calendar;
        let at = match calendar.iter().position(|d| d.date == date) {
            Some(i) => i,
            None => {
                let at = calendar.partition_point(|d| d.date > date);
                calendar.insert(at, CalendarDay::empty(date));
                at
            }
        };
        &mut calendar[at]
    }

    // ─── Coach round trip ────────────────────────────────────

    /// The seven most recent days projected to date, mood, and journal
    /// title. Full journal bodies and task lists never leave the client.
    pub fn calendar_context(&self) -> Vec<CalendarContextEntry> {
        self.snapshot
            .calendar
            .iter()
            .take(CONTEXT_DAYS)
            .map(|d| CalendarContextEntry {
                date: d.date,
                mood: d.mood,
                journal_title: d.journal_entry.as_ref().map(|e| e.title.clone()),
            })
            .collect()
    }

    /// Start a coach exchange. The user's message lands in the
    /// transcript before the remote call — and stays readable while the
    /// call is out — even if the call ultimately fails. Returns the
    /// request for the caller to send; the outcome comes back through
    /// [`finish_coach_turn`](AppStore::finish_coach_turn).
    pub fn begin_coach_turn(&mut self, text: &str, image: Option<String>) -> CoachRequest {
        let user_message = match &image {
            Some(uri) => Message::user_with_image(text, uri.clone()),
            None => Message::user(text),
        };
        self.append_message(user_message);

        let profile = self.snapshot.profile.clone();
        CoachRequest {
            user_id: self.identity.user_id().to_string(),
            user_name: profile
                .as_ref()
                .map(|p| p.name.clone())
                .unwrap_or_else(|| DEFAULT_PROFILE_NAME.to_string()),
            user_message: text.to_string(),
            preferred_activities: profile
                .map(|p| p.preferred_activities)
                .unwrap_or_default(),
            calendar_context: serde_json::to_string(&self.calendar_context()).ok(),
            image,
        }
    }

    /// Apply a coach outcome: either auto-added tasks or suggestions
    /// plus the assistant reply. Failures become a fallback transcript
    /// message — this never surfaces an error to the caller.
    pub fn finish_coach_turn(&mut self, outcome: Result<CoachResponse>, date: NaiveDate) {
        match outcome {
            Ok(reply) => {
                let drafts = reply.tasks_to_add.unwrap_or_default();
                let mut tasks_added = 0;

                let message = if drafts.is_empty() {
                    Message::assistant(&reply.response)
                } else {
                    match self.config.task_ingestion {
                        TaskIngestion::AutoAdd => {
                            match self.add_tasks(&drafts, date) {
                                Ok(()) => tasks_added = drafts.len(),
                                Err(e) => {
                                    log::warn!("coach returned an unusable task list: {}", e)
                                }
                            }
                            Message::assistant(&reply.response)
                        }
                        TaskIngestion::SuggestOnly => Message::assistant_with_suggestions(
                            &reply.response,
                            drafts.iter().map(|d| d.content.clone()).collect(),
                        ),
                    }
                };

                self.append_message(message);
                self.events.emit(StoreEvent::CoachReplied { tasks_added });
            }
            Err(e) => {
                log::warn!("coach call failed: {}", e);
                self.append_message(Message::assistant(COACH_FALLBACK_REPLY));
                self.events.emit(StoreEvent::CoachUnavailable {
                    message: e.to_string(),
                });
            }
        }
    }

    /// The begin/finish pair in one call, for callers that hold the
    /// store exclusively across the remote call.
    pub async fn run_coach_turn(
        &mut self,
        text: &str,
        image: Option<String>,
        date: NaiveDate,
        coach: &dyn CoachPort,
    ) {
        let request = self.begin_coach_turn(text, image);
        let outcome = coach.converse(request).await;
        self.finish_coach_turn(outcome, date);
    }

    // ─── Debounced persistence ───────────────────────────────

    /// The scheduled-save state machine: every mutation re-arms the
    /// pending slot with a fresh epoch under the active identity's key.
    fn schedule_save(&mut self) {
        self.save_epoch += 1;
        self.pending = Some(SaveTicket {
            key: self.identity.storage_key(),
            epoch: self.save_epoch,
        });
    }

    /// The ticket the debounce driver should arm a timer for, if any.
    pub fn pending_save(&self) -> Option<SaveTicket> {
        self.pending.clone()
    }

    /// Consume the pending save if `ticket` is still it, yielding the
    /// write job. Stale tickets — superseded by a later mutation or an
    /// identity switch — yield nothing and leave the pending slot alone.
    pub fn take_due_save(&mut self, ticket: &SaveTicket) -> Option<SaveJob> {
        if self.pending.as_ref() != Some(ticket) {
            return None;
        }
        // A failed save stays consumed; the next mutation schedules a
        // fresh cycle carrying the latest state.
        self.pending = None;
        self.encode_save(&ticket.key)
    }

    /// Record the outcome of a write job's port call.
    pub fn note_save_result(&mut self, key: &str, result: Result<()>) {
        match result {
            Ok(()) => {
                self.events.emit(StoreEvent::SnapshotSaved {
                    key: key.to_string(),
                });
            }
            Err(e) => {
                log::warn!("saving {} failed: {}", key, e);
                self.events.emit(StoreEvent::SaveFailed {
                    message: e.to_string(),
                });
            }
        }
    }

    /// Take/write/note in one call, for callers that hold the store
    /// exclusively across the port call.
    pub async fn flush_save(&mut self, ticket: &SaveTicket, storage: &dyn StoragePort) {
        if let Some(job) = self.take_due_save(ticket) {
            let result = storage.set(&job.key, &job.bytes).await;
            self.note_save_result(&job.key, result);
        }
    }

    fn encode_save(&mut self, key: &str) -> Option<SaveJob> {
        match serde_json::to_vec(&self.snapshot) {
            Ok(bytes) => Some(SaveJob {
                key: key.to_string(),
                bytes,
            }),
            Err(e) => {
                log::error!("snapshot serialization failed: {}", e);
                self.events.emit(StoreEvent::SaveFailed {
                    message: e.to_string(),
                });
                None
            }
        }
    }
}
