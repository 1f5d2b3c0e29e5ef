//! SQL DDL for the credential store
//!
//! Five tables, created explicitly (no `IF NOT EXISTS`): initializing an
//! already-initialized store is a caller error and must surface as one.
//!
//! The four association tables (favorites and recommendations) are
//! provisioned for callers that persist per-user item lists, but no
//! operation in this crate reads or writes them. They are deliberately
//! kept as documented placeholders; do not add behavior for them here.

/// Statements executed, in order, by [`super::init_schema`]
pub const SCHEMA: &[&str] = &[
    "CREATE TABLE users (
        username TEXT NOT NULL,
        password TEXT NOT NULL
    )",
    "CREATE TABLE fav_restaurants (
        username TEXT NOT NULL,
        restaurant TEXT NOT NULL
    )",
    "CREATE TABLE fav_recipes (
        username TEXT NOT NULL,
        recipe TEXT NOT NULL
    )",
    "CREATE TABLE rec_restaurants (
        username TEXT NOT NULL,
        restaurant TEXT NOT NULL
    )",
    "CREATE TABLE rec_recipes (
        username TEXT NOT NULL,
        recipe TEXT NOT NULL
    )",
];
