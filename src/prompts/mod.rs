//! Prompt templates for the two generation stages.

pub mod photo;
pub mod recipe;
