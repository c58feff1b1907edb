use crate::error::{ClosyError, Result};
use crate::types::response::{ResponseEvent, ResponseSource, StyleKey};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Ordered, keyed-by-question-id collection of responses. The only input to scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseLog {
    events: Vec<ResponseEvent>,
    #[serde(default)]
    next_subcategory: u64,
    #[serde(default)]
    next_brand: u64,
}

impl ResponseLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[ResponseEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, question_id: u64) -> Option<&ResponseEvent> {
        self.events
            .iter()
            .find(|event| event.question_id == question_id)
    }

    /// Replaces the event with the same question id in place, or appends.
    pub fn append_or_update(&mut self, event: ResponseEvent) {
        match self
            .events
            .iter_mut()
            .find(|existing| existing.question_id == event.question_id)
        {
            Some(existing) => {
                debug!(question_id = event.question_id, "updating response");
                *existing = event;
            }
            None => {
                debug!(question_id = event.question_id, "appending response");
                self.events.push(event);
            }
        }
    }

    /// Bulk overwrite. Synthetic counters move past every injected id in `events`.
    pub fn replace_all(&mut self, events: Vec<ResponseEvent>) {
        self.events = events;
        self.next_subcategory = 0;
        self.next_brand = 0;
        for index in 0..self.events.len() {
            let event = &self.events[index];
            let source = event.source;
            let Some(offset) = event
                .source
                .synthetic_id_base()
                .and_then(|base| event.question_id.checked_sub(base))
            else {
                continue;
            };
            let counter = self.counter_mut(source);
            *counter = (*counter).max(offset + 1);
        }
    }

    pub fn clear(&mut self) {
        self.events.clear();
        self.next_subcategory = 0;
        self.next_brand = 0;
    }

    /// Appends an injected response under the next free id of its source's range.
    ///
    /// Sources without a synthetic range use the brand range.
    pub fn inject(
        &mut self,
        source: ResponseSource,
        style: impl Into<String>,
        points: f64,
    ) -> Result<u64> {
        let (base, span) = source.synthetic_range();
        let counter = self.counter_mut(source);
        if *counter >= span {
            return Err(ClosyError::InvalidResponse(format!(
                "no synthetic ids left in the range starting at {base}"
            )));
        }
        let question_id = base + *counter;
        *counter += 1;
        self.events.push(ResponseEvent {
            question_id,
            response: points,
            style: StyleKey::new(style),
            source,
        });
        Ok(question_id)
    }

    fn counter_mut(&mut self, source: ResponseSource) -> &mut u64 {
        match source {
            ResponseSource::SubcategoryInjection(_) => &mut self.next_subcategory,
            _ => &mut self.next_brand,
        }
    }

    pub fn any(&self, predicate: impl Fn(&ResponseEvent) -> bool) -> bool {
        self.events.iter().any(predicate)
    }
}
