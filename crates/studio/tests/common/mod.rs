//! Shared fixtures for the studio integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use nemitzam_core::drafts::{CategoryDraft, ProjectDraft};
use nemitzam_db::MemoryGateway;
use nemitzam_events::EventBus;
use nemitzam_studio::{ConfigStore, Notice, NoticeLevel, Prompt};

/// Prompt that records notices and answers confirmations with a fixed
/// value.
#[derive(Default)]
pub struct RecordingPrompt {
    notices: Mutex<Vec<Notice>>,
    answer: AtomicBool,
    questions: AtomicUsize,
}

impl RecordingPrompt {
    pub fn answering(answer: bool) -> Arc<Self> {
        let prompt = Self::default();
        prompt.answer.store(answer, Ordering::SeqCst);
        Arc::new(prompt)
    }

    pub fn set_answer(&self, answer: bool) {
        self.answer.store(answer, Ordering::SeqCst);
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<Notice> {
        self.notices.lock().unwrap().last().cloned()
    }

    pub fn last_level(&self) -> Option<NoticeLevel> {
        self.last().map(|n| n.level)
    }

    pub fn questions_asked(&self) -> usize {
        self.questions.load(Ordering::SeqCst)
    }
}

impl Prompt for RecordingPrompt {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }

    fn confirm(&self, _question: &str) -> bool {
        self.questions.fetch_add(1, Ordering::SeqCst);
        self.answer.load(Ordering::SeqCst)
    }
}

pub fn config_store(gateway: &Arc<MemoryGateway>) -> Arc<ConfigStore> {
    Arc::new(ConfigStore::new(
        Arc::clone(gateway) as Arc<dyn nemitzam_db::Gateway>,
        Arc::new(EventBus::default()),
    ))
}

pub fn project(title: &str, category: &str, order_index: i32) -> ProjectDraft {
    ProjectDraft {
        title: title.to_string(),
        description: String::new(),
        image_url: format!("https://img.example/{title}.jpg"),
        category: category.to_string(),
        order_index,
    }
}

pub fn category(name: &str, slug: &str, display_order: i32) -> CategoryDraft {
    CategoryDraft {
        name: name.to_string(),
        slug: slug.to_string(),
        display_order,
    }
}
