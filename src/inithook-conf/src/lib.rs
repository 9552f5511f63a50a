//! Boot configuration hook insertion.
//!
//! Edits a `mkinitcpio.conf`-style boot configuration file, inserting the
//! `lvm2` and/or `encrypt` hooks into the `HOOKS=(...)` list immediately
//! after the `block` anchor hook. Every byte outside the hook list line is
//! preserved, and a pre-existing output file is copied to `<output>.bak`
//! before it is rewritten.
//!
//! # Example
//!
//! ```no_run
//! use inithook_conf::{InsertOptions, insert_hooks};
//! use std::path::Path;
//!
//! let conf = Path::new("/etc/mkinitcpio.conf");
//! let options = InsertOptions::none().with_lvm().with_encrypt();
//! let report = insert_hooks(conf, conf, &options)?;
//! println!("inserted: {:?}", report.inserted);
//! # Ok::<(), inithook_conf::ConfError>(())
//! ```

mod backup;
mod error;
mod insert;
mod line;

pub use backup::{BACKUP_SUFFIX, backup_path};
pub use error::{ConfError, ConfResult};
pub use insert::{
    ANCHOR_HOOK, DEFAULT_CONF_PATH, ENCRYPT_HOOK, InsertOptions, InsertReport, LVM_HOOK,
    insert_hooks,
};
pub use line::HooksLine;
