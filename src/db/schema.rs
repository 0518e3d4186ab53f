//! Database schema and migrations for Mojo.
//!
//! This module contains all database migrations that will be applied
//! sequentially when the database is first opened or upgraded.

/// Database migrations.
///
/// Each migration is a SQL script that will be executed in order.
/// The schema_version table tracks which migrations have been applied.
pub const MIGRATIONS: &[&str] = &[
    // v1: Initial schema - tags table
    r#"
-- Registered tags. A row is created on a registration request (pending)
-- and gains an owner on confirmation. At most one owner per tag.
CREATE TABLE tags (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    tag           TEXT NOT NULL UNIQUE,
    email         TEXT NOT NULL,            -- email that requested registration
    name          TEXT,
    status        TEXT NOT NULL DEFAULT 'pending',  -- 'pending', 'confirmed'
    owner_email   TEXT,                     -- set on confirmation
    created_at    TEXT NOT NULL DEFAULT (datetime('now')),
    confirmed_at  TEXT
);

CREATE INDEX idx_tags_status ON tags(status);
"#,
    // v2: Confirmation tokens for the registration email link
    r#"
-- One-time confirmation tokens. Consumed (deleted) on first use.
CREATE TABLE confirmation_tokens (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    token       TEXT NOT NULL UNIQUE,
    tag         TEXT NOT NULL,
    email       TEXT NOT NULL,
    created_at  TEXT NOT NULL DEFAULT (datetime('now')),
    expires_at  TEXT NOT NULL
);

CREATE INDEX idx_confirmation_tokens_expires_at ON confirmation_tokens(expires_at);
"#,
    // v3: Messages left for a tag by third parties
    r#"
-- Messages are looked up by tag string, not by foreign key: a message
-- row outlives any change to the tags table.
CREATE TABLE mojo_messages (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    tag_id        TEXT NOT NULL,
    sender_name   TEXT,
    sender_email  TEXT,
    message       TEXT NOT NULL,
    location      TEXT,
    created       TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX idx_mojo_messages_tag_id ON mojo_messages(tag_id);
CREATE INDEX idx_mojo_messages_created ON mojo_messages(created);
"#,
    // v4: Contact form submissions
    r#"
CREATE TABLE contact_messages (
    id       INTEGER PRIMARY KEY AUTOINCREMENT,
    name     TEXT NOT NULL,
    email    TEXT NOT NULL,
    message  TEXT NOT NULL,
    created  TEXT NOT NULL DEFAULT (datetime('now'))
);
"#,
];
