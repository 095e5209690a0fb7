//! Browser object URLs for local document previews.
//!
//! The URL returned by `URL.createObjectURL` pins the file in memory until it
//! is revoked, so it is always wrapped in a [`LocalHandle`] whose drop
//! revokes it.

use crate::state::document::LocalHandle;
use crate::util::intake::SelectedFile;

/// Create an object URL for `selected` and wrap it in an owning handle.
///
/// Outside the browser, or when the URL cannot be created, the handle is
/// detached with an empty URL and the document has no preview.
pub fn local_handle_for(selected: &SelectedFile) -> LocalHandle {
    #[cfg(feature = "hydrate")]
    {
        match web_sys::Url::create_object_url_with_blob(&selected.file) {
            Ok(url) => LocalHandle::new(url, |url| {
                if let Err(e) = web_sys::Url::revoke_object_url(url) {
                    leptos::logging::warn!("revoke object url failed: {e:?}");
                }
            }),
            Err(e) => {
                leptos::logging::warn!("create object url failed for {}: {e:?}", selected.raw.name);
                LocalHandle::detached("")
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = selected;
        LocalHandle::detached("")
    }
}
