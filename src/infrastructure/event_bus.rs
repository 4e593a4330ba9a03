// SPDX-License-Identifier: MPL-2.0
//! In-process event bus over an unbounded tokio channel.

use crate::application::port::EventBus;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Sending half; cloneable and usable from any thread.
#[derive(Debug, Clone)]
pub struct ChannelEventBus {
    tx: UnboundedSender<String>,
}

/// Receiving half, owned by whoever reacts to published events.
#[derive(Debug)]
pub struct EventReceiver {
    rx: UnboundedReceiver<String>,
}

impl ChannelEventBus {
    #[must_use]
    pub fn channel() -> (Self, EventReceiver) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, EventReceiver { rx })
    }
}

impl EventBus for ChannelEventBus {
    fn publish(&self, event_name: &str) {
        // A dropped receiver means nobody listens any more; that is not an error.
        let _ = self.tx.send(event_name.to_string());
    }
}

impl EventReceiver {
    /// Takes every event published so far, oldest first, without waiting.
    pub fn drain(&mut self) -> Vec<String> {
        let mut events = Vec::new();
        while let Ok(event) = self.rx.try_recv() {
            events.push(event);
        }
        events
    }
}
