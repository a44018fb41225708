// Copyright 2023 drey7925
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
//
// SPDX-License-Identifier: Apache-2.0

//! The gridmenu engine: menu lifecycle, per-user session tracking, and
//! routing of host interaction events to slot handlers.
//!
//! The host (game server, renderer, network stack) sits behind the
//! [presenter::MenuPresenter] trait; this crate never talks to a client
//! directly. Event callbacks are expected to be serialized by the host;
//! the engine's own state is mutex-guarded so a multi-threaded host is
//! also safe.

pub mod menu_state;
pub mod presenter;
