// SPDX-License-Identifier: MPL-2.0
//! Application layer: port definitions for the external collaborators.

pub mod port;
