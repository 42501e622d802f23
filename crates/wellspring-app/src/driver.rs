//! Session driver — owns the state store and schedules its async work.
//!
//! The UI calls the synchronous methods here; identity loads, coach
//! turns, and the debounced snapshot save all run through
//! `spawn_local` so the main thread never blocks. Store borrows wrap
//! only the synchronous begin/finish phases, never a suspended port
//! call, so the UI can keep reading the snapshot and loading flag while
//! a load, save, or coach call is in flight. After every store
//! interaction the driver re-arms the debounce timer for whatever save
//! ticket is pending; stale timers are discarded by the store itself.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::Utc;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

use wellspring_core::event_bus::EventBus;
use wellspring_core::ports::{CoachPort, StoragePort};
use wellspring_core::store::AppStore;
use wellspring_types::config::AppConfig;
use wellspring_types::identity::Identity;
use wellspring_types::message::Message;
use wellspring_types::model::{NewJournalEntry, TaskDraft, UserProfile};
use wellspring_types::Result;

pub struct SessionDriver {
    store: Rc<RefCell<AppStore>>,
    storage: Rc<dyn StoragePort>,
    coach: Rc<dyn CoachPort>,
    events: EventBus,
    debounce_ms: u32,
}

impl SessionDriver {
    pub fn new(
        config: AppConfig,
        storage: Rc<dyn StoragePort>,
        coach: Rc<dyn CoachPort>,
    ) -> Self {
        let events = EventBus::new();
        let debounce_ms = config.save_debounce_ms;
        let store = Rc::new(RefCell::new(AppStore::new(config, events.clone())));
        Self {
            store,
            storage,
            coach,
            events,
            debounce_ms,
        }
    }

    /// The store itself, for UI reads (snapshot, loading flag).
    pub fn store(&self) -> Rc<RefCell<AppStore>> {
        self.store.clone()
    }

    /// Bus the UI drains each frame.
    pub fn events(&self) -> EventBus {
        self.events.clone()
    }

    /// Identity resolver callback — reload state for the new identity.
    /// The store flushes any pending save for the outgoing identity first.
    pub fn set_identity(&self, identity: Identity) {
        let store = self.store.clone();
        let storage = self.storage.clone();
        spawn_local(async move {
            let (key, flush) = store.borrow_mut().begin_identity_change(identity);
            if let Some(job) = flush {
                let result = storage.set(&job.key, &job.bytes).await;
                store.borrow_mut().note_save_result(&job.key, result);
            }
            let loaded = storage.get(&key).await;
            let persist = store.borrow_mut().finish_identity_change(&key, loaded);
            if let Some(job) = persist {
                if let Err(e) = storage.set(&job.key, &job.bytes).await {
                    log::warn!("initial save of {} failed: {}", job.key, e);
                }
            }
        });
    }

    // ─── Mutations (synchronous, persisted via debounce) ─────

    pub fn add_journal_entry(&self, entry: NewJournalEntry) -> Result<()> {
        let result = self.store.borrow_mut().add_journal_entry(entry);
        self.arm_debounce();
        result
    }

    pub fn add_task(&self, content: String, completed: bool, date: chrono::NaiveDate) -> Result<()> {
        let result = self.store.borrow_mut().add_task(content, completed, date);
        self.arm_debounce();
        result
    }

    pub fn add_tasks(&self, drafts: &[TaskDraft], date: chrono::NaiveDate) -> Result<()> {
        let result = self.store.borrow_mut().add_tasks(drafts, date);
        self.arm_debounce();
        result
    }

    pub fn set_task_completed(&self, task_id: &str, completed: bool) {
        self.store.borrow_mut().set_task_completed(task_id, completed);
        self.arm_debounce();
    }

    pub fn update_profile(&self, profile: UserProfile) {
        self.store.borrow_mut().update_profile(profile);
        self.arm_debounce();
    }

    pub fn append_message(&self, message: Message) {
        self.store.borrow_mut().append_message(message);
        self.arm_debounce();
    }

    pub fn replace_messages(&self, messages: Vec<Message>) {
        self.store.borrow_mut().replace_messages(messages);
        self.arm_debounce();
    }

    // ─── Coach round trip ────────────────────────────────────

    /// Send a user message (optionally with an image) to the coach.
    /// Tasks land on today's calendar when auto-add is configured.
    pub fn send_to_coach(&self, text: String, image: Option<String>) {
        let store = self.store.clone();
        let storage = self.storage.clone();
        let coach = self.coach.clone();
        let debounce_ms = self.debounce_ms;
        let today = Utc::now().date_naive();

        spawn_local(async move {
            let request = store.borrow_mut().begin_coach_turn(&text, image);
            // The optimistic user message is a mutation of its own;
            // persist it even when the coach is slow.
            arm_debounce_for(store.clone(), storage.clone(), debounce_ms);
            let outcome = coach.converse(request).await;
            store.borrow_mut().finish_coach_turn(outcome, today);
            arm_debounce_for(store, storage, debounce_ms);
        });
    }

    fn arm_debounce(&self) {
        arm_debounce_for(self.store.clone(), self.storage.clone(), self.debounce_ms);
    }
}

/// Arm a timer for the pending save ticket, if any. Each mutation issues
/// a fresh ticket, so an earlier timer that fires after a newer mutation
/// finds its ticket stale and takes nothing. The store is borrowed only
/// for the take and the result bookkeeping, not across the write itself.
fn arm_debounce_for(store: Rc<RefCell<AppStore>>, storage: Rc<dyn StoragePort>, ms: u32) {
    let Some(ticket) = store.borrow().pending_save() else {
        return;
    };
    spawn_local(async move {
        TimeoutFuture::new(ms).await;
        let Some(job) = store.borrow_mut().take_due_save(&ticket) else {
            return;
        };
        let result = storage.set(&job.key, &job.bytes).await;
        store.borrow_mut().note_save_result(&job.key, result);
    });
}
