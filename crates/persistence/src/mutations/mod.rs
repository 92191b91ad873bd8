// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend-agnostic write mutations.
//!
//! Most mutations use Diesel DSL, with minimal backend-specific helpers
//! abstracted via the `PersistenceBackend` trait.

pub mod fuel_stops;
pub mod loads;
pub mod settings;
pub mod users;
