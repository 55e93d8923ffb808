// src/scrape/mod.rs
//! Per-document extraction specs. Each submodule knows how to read exactly
//! one snapshot format:
//! - `schedule` — the season schedule page (date headings + game paragraphs)
//! - `day`      — date-filtered view of the same page, plus the
//!   "Today's Games" rewriter
//! - `odds`     — the embedded-JSON odds table
//! - `win_prob` — the win-probability payloads
//!
//! Specs only extract. Staleness decisions live in `store`, sinks in `file`,
//! orchestration in `runner`.

pub mod day;
pub mod game;
pub mod odds;
pub mod schedule;
pub mod win_prob;
