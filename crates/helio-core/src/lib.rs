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

//! # Helio Core
//!
//! Foundation layer of the Helio engine: math value types, handle-based
//! object pools, typed registries for primitives and GPU-facing resources,
//! an event broadcast bus, and the window abstraction contract.
//!
//! The load-bearing piece is the [`pool`] module — a dense, reusable
//! backing store handing out stable integer handles — and the registry
//! façades built on it. Everything else consumes those.

#![warn(missing_docs)]

pub mod event;
pub mod math;
pub mod platform;
pub mod pool;
pub mod registry;
pub mod resource;

pub use pool::{Handle, PoolConfig};
pub use registry::Registry;
