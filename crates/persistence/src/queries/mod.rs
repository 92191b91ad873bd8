// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend-agnostic read queries.
//!
//! All queries use Diesel DSL and are generated per backend via the
//! `backend_fn!` macro. Backend dispatch happens exclusively in the
//! `Persistence` adapter.

pub mod fuel_stops;
pub mod loads;
pub mod settings;
pub mod users;
