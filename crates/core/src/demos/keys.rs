pub const KEY_HISTORY_LIMIT: usize = 10;

/// Most recent key plus the last ten keys, newest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyHistory {
    current: Option<String>,
    recent: Vec<String>,
}

impl KeyHistory {
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    #[must_use]
    pub fn recent(&self) -> &[String] {
        &self.recent
    }

    pub fn record(&mut self, key: impl Into<String>) {
        let key = key.into();
        self.recent.insert(0, key.clone());
        self.recent.truncate(KEY_HISTORY_LIMIT);
        self.current = Some(key);
    }

    pub fn clear(&mut self) {
        self.current = None;
        self.recent.clear();
    }
}
