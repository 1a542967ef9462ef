// SPDX-License-Identifier: MPL-2.0

//! Page view modules for the Multiselect application.
//! Each module contains the view logic for a specific page.

pub mod picker;
pub mod settings;
