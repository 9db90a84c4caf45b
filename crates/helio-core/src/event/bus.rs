// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! A broadcast event bus with independent subscribers.

/// A generic broadcast channel: every subscriber observes every event.
///
/// The bus is generic over the event type `T` so this crate stays
/// decoupled from the event enums defined by higher-level crates. Each
/// [`subscribe`](Self::subscribe) call returns an independent
/// `flume::Receiver`; publishing clones the event to all of them.
/// Subscribers whose receiver has been dropped are pruned on the next
/// publish.
#[derive(Debug)]
pub struct EventBus<T: Clone + Send + 'static> {
    subscribers: Vec<flume::Sender<T>>,
}

impl<T: Clone + Send + 'static> EventBus<T> {
    /// Creates a bus with no subscribers.
    pub fn new() -> Self {
        log::info!("event bus initialized");
        Self {
            subscribers: Vec::new(),
        }
    }

    /// Registers a new observer and returns its receiving end.
    ///
    /// The receiver is unbounded; a subscriber that never drains will
    /// accumulate events, not block publishers.
    pub fn subscribe(&mut self) -> flume::Receiver<T> {
        let (sender, receiver) = flume::unbounded();
        self.subscribers.push(sender);
        log::trace!("event bus gained a subscriber ({})", self.subscribers.len());
        receiver
    }

    /// Broadcasts an event to every live subscriber.
    ///
    /// Disconnected subscribers are dropped from the list; delivery to the
    /// rest is unaffected by them.
    pub fn publish(&mut self, event: T) {
        self.subscribers
            .retain(|sender| sender.send(event.clone()).is_ok());
        log::trace!(
            "event published to {} subscriber(s)",
            self.subscribers.len()
        );
    }

    /// Number of currently connected subscribers.
    ///
    /// Only updated when a publish notices a disconnect, so this may count
    /// subscribers whose receiver is already gone.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl<T: Clone + Send + 'static> Default for EventBus<T> {
    fn default() -> Self {
        Self::new()
    }
}
