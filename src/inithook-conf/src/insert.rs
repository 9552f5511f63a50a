//! Hook insertion into the boot configuration hook list.

use crate::backup::backup_existing;
use crate::error::{ConfError, ConfResult};
use crate::line::HooksLine;
use std::fs;
use std::path::{Path, PathBuf};

/// Default boot configuration file edited when no path is given.
pub const DEFAULT_CONF_PATH: &str = "/etc/mkinitcpio.conf";

/// The fixed hook after which new hooks are inserted.
pub const ANCHOR_HOOK: &str = "block";

/// Hook enabling logical-volume activation at boot.
pub const LVM_HOOK: &str = "lvm2";

/// Hook enabling encrypted-volume unlocking at boot.
pub const ENCRYPT_HOOK: &str = "encrypt";

/// Which hooks to insert.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InsertOptions {
    /// Insert the `lvm2` hook.
    pub lvm: bool,
    /// Insert the `encrypt` hook.
    pub encrypt: bool,
}

impl InsertOptions {
    /// Options that insert nothing.
    pub fn none() -> Self {
        Self::default()
    }

    /// Request the `lvm2` hook.
    pub fn with_lvm(mut self) -> Self {
        self.lvm = true;
        self
    }

    /// Request the `encrypt` hook.
    pub fn with_encrypt(mut self) -> Self {
        self.encrypt = true;
        self
    }

    /// Whether the operation has nothing to do.
    pub fn is_noop(&self) -> bool {
        !self.lvm && !self.encrypt
    }
}

/// Report of a hook insertion run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InsertReport {
    /// Whether the output file was written.
    pub written: bool,
    /// Path of the backup copy, if one was made.
    pub backup: Option<PathBuf>,
    /// Hooks actually inserted (absent hooks that were requested).
    pub inserted: Vec<&'static str>,
}

impl InsertReport {
    /// Report for the early no-op path.
    pub fn noop() -> Self {
        Self::default()
    }
}

/// Insert the requested hooks into the `HOOKS=(...)` line of `input`,
/// writing the result to `output` (which may equal `input`).
///
/// A pre-existing file at `output` is copied to `<output>.bak` before
/// anything else. The backup deliberately precedes validation of the input,
/// so a run that fails on a malformed file can still leave a fresh backup.
///
/// Requested hooks already present in the list are left alone, making the
/// operation idempotent with respect to presence. When both hooks are
/// inserted, each lands at anchor+1 in turn: `lvm2` first, then `encrypt`,
/// so the final order reads `block encrypt lvm2`.
pub fn insert_hooks(
    input: &Path,
    output: &Path,
    options: &InsertOptions,
) -> ConfResult<InsertReport> {
    if options.is_noop() {
        tracing::info!("no hooks to add");
        return Ok(InsertReport::noop());
    }

    let backup = backup_existing(output)?;

    tracing::info!(input = %input.display(), "reading input file");
    let contents = read_ascii(input)?;

    let mut line =
        HooksLine::find(&contents).ok_or_else(|| ConfError::missing_hooks_line(input))?;

    let anchor = line
        .position(ANCHOR_HOOK)
        .ok_or_else(|| ConfError::anchor_not_found(ANCHOR_HOOK, input))?;

    let mut inserted = Vec::new();
    if options.lvm && !line.contains(LVM_HOOK) {
        line.hooks.insert(anchor + 1, LVM_HOOK.to_owned());
        inserted.push(LVM_HOOK);
    }
    if options.encrypt && !line.contains(ENCRYPT_HOOK) {
        line.hooks.insert(anchor + 1, ENCRYPT_HOOK.to_owned());
        inserted.push(ENCRYPT_HOOK);
    }
    tracing::debug!(?inserted, hooks = %line.render(), "rewrote hook list");

    tracing::info!(output = %output.display(), "writing output file");
    fs::write(output, line.splice(&contents)).map_err(|source| ConfError::Write {
        path: output.to_path_buf(),
        source,
    })?;

    Ok(InsertReport {
        written: true,
        backup,
        inserted,
    })
}

/// Read `path` fully, rejecting any byte outside the ASCII range.
fn read_ascii(path: &Path) -> ConfResult<String> {
    let bytes = fs::read(path).map_err(|source| ConfError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    if let Some(offset) = bytes.iter().position(|b| !b.is_ascii()) {
        return Err(ConfError::NotAscii {
            path: path.to_path_buf(),
            offset,
        });
    }

    // ASCII is valid UTF-8.
    String::from_utf8(bytes).map_err(|_| ConfError::NotAscii {
        path: path.to_path_buf(),
        offset: 0,
    })
}
