// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod batch;
pub mod catalog;
pub mod cli;
pub mod enrich;
pub mod error;
pub mod ground_truth;
pub mod layout;
pub mod models;
pub mod render;
pub mod scenario;
pub mod utils;
pub mod commands;
