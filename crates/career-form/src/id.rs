//! Identity for committed collection entries.

use chrono::Utc;

/// Issues `"{prefix}-{millis}"` ids from the wall clock.
///
/// The millisecond component never repeats within one generator, even when
/// two entries are committed inside the same millisecond or the clock steps
/// backwards, so an id is never reissued after its entry is removed.
#[derive(Debug, Clone, Default)]
pub struct EntryIdGenerator {
    last_millis: i64,
}

impl EntryIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&mut self, prefix: &str) -> String {
        let now = Utc::now().timestamp_millis();
        self.next_at(prefix, now)
    }

    fn next_at(&mut self, prefix: &str, now_millis: i64) -> String {
        let millis = now_millis.max(self.last_millis + 1);
        self.last_millis = millis;
        format!("{prefix}-{millis}")
    }
}
