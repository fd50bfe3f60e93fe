// SPDX-License-Identifier: MIT

pub mod condition;
pub mod context;
pub mod events;
pub mod formulas;
pub mod gamification;
pub mod loader;
pub mod scan;
pub mod settings;
pub mod types;
pub mod wizard;
