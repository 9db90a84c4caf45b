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

//! The window abstraction consumed by graphics backends.
//!
//! Only the interface lives here; concrete windowing (winit, SDL, raw
//! Win32) is a backend crate's concern.

use raw_window_handle::{HasDisplayHandle, HasWindowHandle};
use std::sync::Arc;

/// Combines the windowing handle traits graphics backends require into one
/// object-safe trait, with a blanket impl for anything providing both.
pub trait WindowHandleSource: HasWindowHandle + HasDisplayHandle {}

impl<T: HasWindowHandle + HasDisplayHandle> WindowHandleSource for T {}

/// A shared, thread-safe handle to a platform window, as handed to surface
/// creation.
pub type SharedWindowHandle = Arc<dyn WindowHandleSource + Send + Sync>;

/// Abstracts the behavior of a platform window.
///
/// Any windowing backend can implement this trait to drive the engine;
/// the foundation layer itself never creates windows.
pub trait HelioWindow: HasWindowHandle + HasDisplayHandle + Send + Sync {
    /// Physical dimensions (width, height) of the window's inner area.
    fn inner_size(&self) -> (u32, u32);

    /// The DPI scale factor of the window.
    fn scale_factor(&self) -> f64;

    /// Requests that the window be redrawn.
    fn request_redraw(&self);

    /// Clones a shared handle to the window for the renderer to create a
    /// surface from.
    fn clone_handle(&self) -> SharedWindowHandle;

    /// A unique identifier for the window.
    fn id(&self) -> u64;
}

/// Window lifecycle events, as published over the
/// [`EventBus`](crate::event::EventBus) by whichever backend owns the
/// message loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindowEvent {
    /// The window's inner area changed size.
    Resized {
        /// New width in physical pixels.
        width: u32,
        /// New height in physical pixels.
        height: u32,
    },
    /// The DPI scale factor changed (monitor move, OS setting).
    ScaleFactorChanged(f64),
    /// The window gained or lost keyboard focus.
    FocusChanged(bool),
    /// The user asked to close the window.
    CloseRequested,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventBus;

    #[test]
    fn window_events_travel_over_the_bus() {
        let mut bus = EventBus::new();
        let receiver = bus.subscribe();
        bus.publish(WindowEvent::Resized {
            width: 1280,
            height: 720,
        });
        bus.publish(WindowEvent::CloseRequested);
        assert_eq!(
            receiver.try_recv().unwrap(),
            WindowEvent::Resized {
                width: 1280,
                height: 720
            }
        );
        assert_eq!(receiver.try_recv().unwrap(), WindowEvent::CloseRequested);
    }
}
