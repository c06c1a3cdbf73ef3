//! Playback controller behind the sound button.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::ManifestSource;

/// Clips played when the listing cannot be fetched.
///
/// No audio ships with the crate: these URLs only play once the storage
/// directory holds `hell-yeah.mp3` and `no-homo.mp3`, which is what
/// uploading clips titled "Hell Yeah" and "No Homo" produces.
pub const FALLBACK_SOUNDS: [&str; 2] = ["sounds/hell-yeah.mp3", "sounds/no-homo.mp3"];

/// Where the controller's clip list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// Nothing fetched yet.
    Unloaded,
    /// Manifest request in flight.
    Loading,
    /// Holding the server's manifest.
    Ready,
    /// Holding [`FALLBACK_SOUNDS`] after a failed fetch.
    Fallback,
}

/// Something that can play clips by URL.
pub trait ClipPlayer {
    /// Stop the clip if it is playing and seek back to the start.
    fn rewind(&mut self, url: &str);

    /// Start playing the clip.
    fn play(&mut self, url: &str);
}

/// Picks and plays a random clip on every click.
///
/// The manifest is fetched lazily and kept for the life of the controller.
/// A failed fetch switches to the fallback set for good; nothing retries
/// against the server while a non-empty list is held.
pub struct PlaybackController<S, P> {
    source: S,
    player: P,
    state: PlaybackState,
    sounds: Vec<String>,
    rng: StdRng,
}

impl<S: ManifestSource, P: ClipPlayer> PlaybackController<S, P> {
    /// Create an unloaded controller.
    pub fn new(source: S, player: P) -> Self {
        Self::with_rng(source, player, StdRng::from_os_rng())
    }

    /// Create an unloaded controller with a deterministic random sequence.
    pub fn with_seed(source: S, player: P, seed: u64) -> Self {
        Self::with_rng(source, player, StdRng::seed_from_u64(seed))
    }

    fn with_rng(source: S, player: P, rng: StdRng) -> Self {
        Self {
            source,
            player,
            state: PlaybackState::Unloaded,
            sounds: Vec::new(),
            rng,
        }
    }

    /// Current state.
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Clip URLs currently held.
    pub fn sounds(&self) -> &[String] {
        &self.sounds
    }

    /// The player clips are sent to.
    pub fn player(&self) -> &P {
        &self.player
    }

    /// Fetch the manifest, falling back to the bundled clips on failure.
    pub async fn load(&mut self) {
        self.state = PlaybackState::Loading;

        match self.source.fetch().await {
            Ok(sounds) => {
                tracing::debug!(count = sounds.len(), "Loaded sound manifest");
                self.sounds = sounds;
                self.state = PlaybackState::Ready;
            }
            Err(e) => {
                tracing::warn!("Failed to load sound list, using fallback sounds: {}", e);
                self.sounds = FALLBACK_SOUNDS.iter().map(|s| s.to_string()).collect();
                self.state = PlaybackState::Fallback;
            }
        }
    }

    /// Handle a click on the sound button.
    ///
    /// Loads first if no clips are held yet. Returns the URL that was
    /// played, or `None` when there is still nothing to play.
    pub async fn on_click(&mut self) -> Option<String> {
        if self.sounds.is_empty() {
            self.load().await;
        }

        if self.sounds.is_empty() {
            return None;
        }

        let index = self.rng.random_range(0..self.sounds.len());
        let url = self.sounds[index].clone();

        self.player.rewind(&url);
        self.player.play(&url);

        Some(url)
    }
}
