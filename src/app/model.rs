//! Application model types: routes, the two views and `App`.

use crate::audio::AudioBackend;
use crate::error::Result;
use crate::library::{AssetResolver, Track};
use crate::player::{PlaybackSession, StartPosition};
use crate::store::TrackStore;

/// Navigation targets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    /// Now-playing screen for the selected record.
    Player { track: Track },
}

/// The library list.
#[derive(Debug, Default)]
pub struct LibraryView {
    pub tracks: Vec<Track>,
    pub selected: usize,
}

impl LibraryView {
    /// Read every track from `store`.
    pub fn load(store: &TrackStore) -> Result<Self> {
        Ok(Self {
            tracks: store.all()?,
            selected: 0,
        })
    }

    pub fn selected_track(&self) -> Option<&Track> {
        self.tracks.get(self.selected)
    }

    /// Move selection down, wrapping to the top.
    pub fn next(&mut self) {
        if !self.tracks.is_empty() {
            self.selected = (self.selected + 1) % self.tracks.len();
        }
    }

    /// Move selection up, wrapping to the bottom.
    pub fn prev(&mut self) {
        if !self.tracks.is_empty() {
            let len = self.tracks.len();
            self.selected = (self.selected + len - 1) % len;
        }
    }
}

/// The now-playing screen. Dropping it releases any live audio handle.
pub struct PlayerView<B: AudioBackend> {
    pub session: PlaybackSession<B::Handle>,
    /// How the selected identity was resolved when the view was mounted.
    pub start: StartPosition,
}

impl<B: AudioBackend> PlayerView<B> {
    /// Reload the sequence from `store` and position it at `selected`.
    ///
    /// An identity missing from the reloaded sequence starts at the first
    /// track. If the reload fails or comes back empty the selected record is
    /// played on its own.
    pub fn mount(store: &TrackStore, selected: &Track) -> Self {
        let tracks = match store.all() {
            Ok(tracks) if tracks.is_empty() => {
                tracing::warn!(id = %selected.id, "store returned no tracks, playing selection alone");
                vec![selected.clone()]
            }
            Ok(tracks) => tracks,
            Err(e) => {
                tracing::error!(error = %e, "failed to reload tracks for player");
                vec![selected.clone()]
            }
        };

        let start = StartPosition::resolve(&tracks, selected.id);
        let index = match start {
            StartPosition::Found(i) => i,
            StartPosition::NotFound => {
                tracing::warn!(id = %selected.id, "selected track not in store, starting at first track");
                0
            }
        };

        Self {
            session: PlaybackSession::new(tracks, index),
            start,
        }
    }
}

pub enum Screen<B: AudioBackend> {
    Home,
    Player(PlayerView<B>),
}

/// The main application model.
pub struct App<B: AudioBackend> {
    pub(super) store: TrackStore,
    pub(super) audio: B,
    pub assets: AssetResolver,
    pub library: LibraryView,
    pub screen: Screen<B>,
    /// Last failure, shown in the status line until the next action succeeds.
    pub status: Option<String>,
}

impl<B: AudioBackend> App<B> {
    /// Create the app on the home screen with the library loaded from `store`.
    pub fn new(store: TrackStore, audio: B, assets: AssetResolver) -> Self {
        let mut app = Self {
            store,
            audio,
            assets,
            library: LibraryView::default(),
            screen: Screen::Home,
            status: None,
        };
        app.reload_library();
        app
    }

    /// Reload the library list, keeping the prior list when the query fails.
    pub fn reload_library(&mut self) {
        match LibraryView::load(&self.store) {
            Ok(view) => {
                tracing::info!(count = view.tracks.len(), "library loaded");
                self.library = view;
                self.status = None;
            }
            Err(e) => self.report("failed to load library", &e),
        }
    }

    pub fn route(&self) -> Route {
        match &self.screen {
            Screen::Home => Route::Home,
            Screen::Player(view) => match view.session.current() {
                Some(track) => Route::Player {
                    track: track.clone(),
                },
                None => Route::Home,
            },
        }
    }

    /// Switch screens. Leaving the player unmounts it.
    pub fn navigate(&mut self, route: Route) {
        self.screen = match route {
            Route::Home => Screen::Home,
            Route::Player { track } => Screen::Player(PlayerView::mount(&self.store, &track)),
        };
        self.status = None;
        tracing::debug!(route = ?self.route(), "navigated");
    }

    /// Open the player for the selected library row.
    pub fn open_selected(&mut self) {
        if let Some(track) = self.library.selected_track().cloned() {
            self.navigate(Route::Player { track });
        }
    }

    pub fn back(&mut self) {
        if matches!(self.screen, Screen::Player(_)) {
            self.navigate(Route::Home);
        }
    }

    pub fn player(&self) -> Option<&PlayerView<B>> {
        match &self.screen {
            Screen::Player(view) => Some(view),
            Screen::Home => None,
        }
    }

    fn player_mut(&mut self) -> Option<&mut PlayerView<B>> {
        match &mut self.screen {
            Screen::Player(view) => Some(view),
            Screen::Home => None,
        }
    }

    pub fn toggle(&mut self) {
        let Screen::Player(view) = &mut self.screen else {
            return;
        };
        match view.session.toggle(&self.audio) {
            Ok(_) => self.status = None,
            Err(e) => self.report("failed to start playback", &e),
        }
    }

    pub fn next(&mut self) {
        if let Some(view) = self.player_mut() {
            view.session.next();
            self.status = None;
        }
    }

    pub fn previous(&mut self) {
        if let Some(view) = self.player_mut() {
            view.session.previous();
            self.status = None;
        }
    }

    /// Per-frame housekeeping.
    pub fn tick(&mut self) {
        if let Some(view) = self.player_mut() {
            view.session.tick();
        }
    }

    fn report(&mut self, what: &str, err: &crate::error::Error) {
        tracing::error!(error = %err, "{what}");
        self.status = Some(format!("{what}: {err}"));
    }
}
