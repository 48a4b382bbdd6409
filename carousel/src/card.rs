use alloc::string::String;

use crate::Item;

/// Background shown behind the video while it loads (or when there is no video).
pub const DEFAULT_THUMBNAIL_GRADIENT: &str = "linear-gradient(135deg, #4E342E 0%, #261815 100%)";

/// The playback surface a card drives (e.g. a video element or decoder).
pub trait MediaHandle {
    fn play(&mut self);
    fn pause(&mut self);
}

impl<H: MediaHandle + ?Sized> MediaHandle for &mut H {
    fn play(&mut self) {
        (**self).play();
    }

    fn pause(&mut self) {
        (**self).pause();
    }
}

/// One playable tile.
///
/// The card owns `is_playing` and nothing else. `is_active` is pushed down by whoever owns the
/// carousel; the card never reports anything back up.
#[derive(Debug)]
pub struct MediaCard<H> {
    index: usize,
    title: String,
    artist: Option<String>,
    thumbnail_gradient: Option<String>,
    source: Option<String>,
    media: Option<H>,
    is_active: bool,
    is_playing: bool,
}

impl<H: MediaHandle> MediaCard<H> {
    /// Creates an idle, inactive card for `item`.
    ///
    /// `source` is the resolved media path; pass `media: None` when there is nothing to play.
    pub fn new(index: usize, item: &Item, source: Option<String>, media: Option<H>) -> Self {
        Self {
            index,
            title: item.title.clone(),
            artist: item.artist.clone(),
            thumbnail_gradient: item.thumbnail_gradient.clone(),
            source,
            media,
            is_active: false,
            is_playing: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn media(&self) -> Option<&H> {
        self.media.as_ref()
    }

    pub fn media_mut(&mut self) -> Option<&mut H> {
        self.media.as_mut()
    }

    /// Updates the `is_active` input.
    ///
    /// On an active → inactive edge the card pauses its media and resets `is_playing`, so at most
    /// one card plays at a time.
    pub fn set_active(&mut self, is_active: bool) {
        let was_active = self.is_active;
        self.is_active = is_active;
        if was_active && !is_active {
            self.on_deactivate();
        }
    }

    fn on_deactivate(&mut self) {
        if let Some(media) = self.media.as_mut() {
            media.pause();
        }
        if self.is_playing {
            cdebug!(index = self.index, "MediaCard: paused on deactivate");
        }
        self.is_playing = false;
    }

    /// Toggles playback of the active card.
    ///
    /// Inactive cards are inert. Returns `true` when the interaction was consumed; a `false`
    /// return lets the click fall through to item selection.
    pub fn toggle_play(&mut self) -> bool {
        if !self.is_active {
            return false;
        }
        let Some(media) = self.media.as_mut() else {
            return true;
        };
        if self.is_playing {
            media.pause();
        } else {
            media.play();
        }
        self.is_playing = !self.is_playing;
        ctrace!(index = self.index, is_playing = self.is_playing, "MediaCard::toggle_play");
        true
    }

    pub fn view(&self) -> CardView<'_> {
        CardView {
            index: self.index,
            title: &self.title,
            artist: self.artist.as_deref(),
            background: self
                .thumbnail_gradient
                .as_deref()
                .unwrap_or(DEFAULT_THUMBNAIL_GRADIENT),
            has_media: self.source.is_some(),
            is_active: self.is_active,
            is_playing: self.is_playing,
            play_indicator_visible: self.is_active && !self.is_playing,
            audio_indicator_opacity: if self.is_active { 1.0 } else { 0.5 },
            glow_opacity: if self.is_active { 1.0 } else { 0.0 },
        }
    }
}

/// What a renderer needs to draw a card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardView<'a> {
    pub index: usize,
    pub title: &'a str,
    pub artist: Option<&'a str>,
    /// CSS-style background used behind the media.
    pub background: &'a str,
    pub has_media: bool,
    pub is_active: bool,
    pub is_playing: bool,
    /// The centered play glyph shows on the active card while paused.
    pub play_indicator_visible: bool,
    pub audio_indicator_opacity: f32,
    pub glow_opacity: f32,
}
