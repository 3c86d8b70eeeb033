//! Demo data shared by tests across the workspace.

pub mod contact;
