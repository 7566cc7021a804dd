// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod candidates;
pub mod cli;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod events;
pub mod feed;
pub mod filter;
pub mod fixtures;
pub mod models;
pub mod page;
pub mod selection;
pub mod session;
pub mod store;
pub mod utils;
