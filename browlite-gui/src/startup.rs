//! Pre-window setup.
//!
//! Everything that talks to the console happens here, before eframe starts:
//! the `-favs` bookmark picker and the first-run wizard.

use std::io::{BufRead, Write};

use browlite_core::{
    pick_bookmark, Session, Store, StoreError, BOOKMARKS_TOKEN, NO_BOOKMARKS_MESSAGE,
};
use tracing::info;

/// Everything the window needs to open.
pub struct Startup {
    pub store: Store,
    pub session: Session,
    pub start_url: String,
}

/// Result of the setup phase.
pub enum Outcome {
    /// Open the window.
    Launch(Startup),
    /// Nothing to show; exit without a window.
    Exit,
}

/// Run the setup phase against the given console streams.
pub fn prepare<R: BufRead, W: Write>(
    store: Store,
    target: Option<&str>,
    input: &mut R,
    output: &mut W,
) -> Result<Outcome, StoreError> {
    store.ensure_presets()?;

    let requested = match target {
        Some(BOOKMARKS_TOKEN) => {
            let bookmarks = store.load_bookmarks()?;
            if bookmarks.is_empty() {
                writeln!(output, "{NO_BOOKMARKS_MESSAGE}").map_err(StoreError::Console)?;
                info!("No bookmarks to pick from, exiting");
                return Ok(Outcome::Exit);
            }
            pick_bookmark(&bookmarks, input, output)?
        }
        Some(url) => Some(url.to_string()),
        None => None,
    };

    let settings = store.load_or_initialize(input, output)?;
    let bookmarks = store.load_bookmarks()?;
    let session = Session::new(settings, bookmarks);
    let start_url = session.start_url(requested.as_deref());

    Ok(Outcome::Launch(Startup {
        store,
        session,
        start_url,
    }))
}
