//! SQL schema for the Stacks SQLite store.
//!
//! Executed once at connection startup. Idempotent thanks to
//! `CREATE TABLE IF NOT EXISTS`.

pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- Rows are inserted once by the seeder and never updated or deleted.
CREATE TABLE IF NOT EXISTS books (
    id               INTEGER PRIMARY KEY AUTOINCREMENT,
    title            TEXT NOT NULL CHECK (title  <> ''),
    author           TEXT NOT NULL CHECK (author <> ''),
    isbn             TEXT NOT NULL UNIQUE,
    publication_year INTEGER,          -- negative for BCE
    publisher        TEXT,
    shelf            TEXT NOT NULL,    -- e.g. 'A1'
    location_column  TEXT NOT NULL,    -- e.g. '1'..'5'
    location_row     TEXT NOT NULL,    -- 'Top' | 'Middle' | 'Bottom'
    status           TEXT NOT NULL DEFAULT 'available',
    date_added       TEXT NOT NULL,    -- ISO 8601 UTC; store-assigned
    category         TEXT,
    description      TEXT,
    -- Case-folded copies of the searchable fields, written at insert time.
    title_folded     TEXT NOT NULL,
    author_folded    TEXT NOT NULL,
    isbn_folded      TEXT NOT NULL
);

PRAGMA user_version = 1;
";
