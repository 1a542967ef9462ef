// SPDX-License-Identifier: MPL-2.0

//! Custom widgets for the Multiselect application.

pub mod multi_select;

pub use multi_select::{
    MultiSelect, MultiSelectMessage, MultiSelectState, OptionValue, SelectOption,
};
