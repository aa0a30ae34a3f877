/// Key events the core understands. Codes are opaque host strings
/// (e.g. `"KeyD"`, `"Space"`) — the core never reads raw OS key state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A key went down.
    KeyDown { code: String },
    /// A key went up.
    KeyUp { code: String },
}

/// A queue of key events. The host writes events as they arrive; the core
/// drains them synchronously at the start of each frame.
#[derive(Debug)]
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(16),
        }
    }

    /// Push a new key event.
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events in arrival order, clearing the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Whether there are pending events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain_in_order() {
        let mut q = InputQueue::new();
        q.push(InputEvent::KeyDown {
            code: "KeyD".to_string(),
        });
        q.push(InputEvent::KeyUp {
            code: "KeyD".to_string(),
        });
        assert_eq!(q.len(), 2);

        let events = q.drain();
        assert_eq!(
            events[0],
            InputEvent::KeyDown {
                code: "KeyD".to_string()
            }
        );
        assert_eq!(
            events[1],
            InputEvent::KeyUp {
                code: "KeyD".to_string()
            }
        );
        assert!(q.is_empty());
    }
}
