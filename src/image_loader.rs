use gtk::{gdk, gio};

use crate::catalog_client;
use crate::constants;
use crate::prelude::*;

/// Fetches and decodes a remote image off the main loop, then hands the
/// texture back on it. The callback receives `None` when the fetch or the
/// decode fails.
pub fn load_texture<F>(uri: &str, on_loaded: F)
where
    F: FnOnce(Option<gdk::Texture>) + 'static,
{
    let uri_owned = uri.to_owned();
    glib::spawn_future_local(async move {
        let result = gio::spawn_blocking(move || catalog_client::get_bytes(&uri_owned)).await;
        let texture = match result {
            Ok(Ok(bytes)) => decode_texture(bytes),
            Ok(Err(error)) => {
                log::debug!("image fetch failed: {error}");
                None
            }
            Err(_) => None,
        };
        on_loaded(texture);
    });
}

/// Fire-and-forget variant for pictures whose image never changes. Empty
/// references and failed loads resolve to the bundled placeholder.
pub fn load_into_picture(picture: &gtk::Picture, uri: &str) {
    if uri.is_empty() {
        picture.set_resource(Some(constants::APP_PLACEHOLDER_RESOURCE));
        return;
    }

    let picture_weak = picture.downgrade();
    load_texture(uri, move |texture| {
        let Some(picture) = picture_weak.upgrade() else { return };
        match texture {
            Some(texture) => picture.set_paintable(Some(&texture)),
            None => picture.set_resource(Some(constants::APP_PLACEHOLDER_RESOURCE)),
        }
    });
}

fn decode_texture(bytes: Vec<u8>) -> Option<gdk::Texture> {
    let bytes = glib::Bytes::from_owned(bytes);
    match gdk::Texture::from_bytes(&bytes) {
        Ok(texture) => Some(texture),
        Err(error) => {
            log::debug!("image decode failed: {error}");
            None
        }
    }
}
