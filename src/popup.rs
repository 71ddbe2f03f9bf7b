//! The two popup actions: clean the active tab's URL, or clean whatever is
//! on the clipboard. Each produces a [`Notice`] for the user.

use std::fmt;

use log::{debug, error};

use crate::cleaner::clean;
use crate::clipboard::{ClipboardAccess, ClipboardError};

/// User-visible outcome of a popup action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Copied,
    NothingFound,
    ClipboardError,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Notice::Copied => "Cleaned URL copied to clipboard!",
            Notice::NothingFound => "No tracking parameters found.",
            Notice::ClipboardError => "Error reading from clipboard",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Clean the URL of the active tab and copy it if anything was stripped.
///
/// `open_clipboard` is only called when the cleaned URL differs from
/// `tab_url`, so a clean URL never needs a clipboard. Open and write
/// failures are returned to the caller.
pub fn clean_tab_url<C, F>(tab_url: &str, open_clipboard: F) -> Result<Notice, ClipboardError>
where
    C: ClipboardAccess,
    F: FnOnce() -> Result<C, ClipboardError>,
{
    let cleaned = clean(tab_url);
    if cleaned == tab_url {
        return Ok(Notice::NothingFound);
    }
    open_clipboard()?.write_text(&cleaned)?;
    debug!("copied cleaned tab URL {cleaned:?}");
    Ok(Notice::Copied)
}

/// Clean the clipboard text in place.
///
/// Any clipboard failure, on read or on write, is reported as
/// [`Notice::ClipboardError`].
pub fn clean_from_clipboard(clipboard: &mut impl ClipboardAccess) -> Notice {
    match try_clean_from_clipboard(clipboard) {
        Ok(notice) => notice,
        Err(e) => {
            error!("{e}");
            Notice::ClipboardError
        }
    }
}

fn try_clean_from_clipboard(
    clipboard: &mut impl ClipboardAccess,
) -> Result<Notice, ClipboardError> {
    let text = clipboard.read_text()?;
    let cleaned = clean(&text);
    if cleaned == text {
        return Ok(Notice::NothingFound);
    }
    clipboard.write_text(&cleaned)?;
    Ok(Notice::Copied)
}
