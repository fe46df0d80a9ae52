// src/gui/progress.rs
use std::sync::{ Arc, Mutex };
use crate::progress::Progress;

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    done: usize,
    failed: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, done: 0, failed: 0, total: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn item_done(&mut self, index: usize, _url: &str) {
        self.done += 1;
        self.set_status(format!("Fetched course page {}/{}", index + 1, self.total));
    }
    fn item_failed(&mut self, index: usize, _url: &str, _reason: &str) {
        self.failed += 1;
        self.set_status(format!("No exam text on course page {}/{}", index + 1, self.total));
    }
    fn finish(&mut self) {
        if self.total == 0 {
            self.set_status(s!("Fetch complete")); // no counts if we never began
        } else {
            self.set_status(format!(
                "Fetch complete ({} with exam text, {} without)",
                self.done, self.failed
            ));
        }
    }
}
