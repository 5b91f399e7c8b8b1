//! Ambience track selection.
//!
//! Tracks start muted (browsers block autoplay with sound) and are unmuted on
//! the first user interaction. Only the selected track is ever playing, so at
//! most one is audible.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Ambience {
    #[default]
    Ocean,
    Rain,
    Bowls,
}

impl Ambience {
    pub const ALL: [Ambience; 3] = [Ambience::Ocean, Ambience::Rain, Ambience::Bowls];

    /// Id of the `<audio>` element carrying this track.
    pub fn element_id(self) -> &'static str {
        match self {
            Ambience::Ocean => "amb-ocean",
            Ambience::Rain => "amb-rain",
            Ambience::Bowls => "amb-bowls",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Ambience::Ocean => "🌊 Ocean ambience",
            Ambience::Rain => "🌧️ Rain ambience",
            Ambience::Bowls => "🔔 Bowls ambience",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Ambience::Ocean => "ocean",
            Ambience::Rain => "rain",
            Ambience::Bowls => "bowls",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AmbienceState {
    current: Option<Ambience>,
    unmuted: bool,
}

impl AmbienceState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `which` the playing track. Returns the track that was replaced,
    /// if any and if different.
    pub fn select(&mut self, which: Ambience) -> Option<Ambience> {
        let prev = self.current.replace(which);
        prev.filter(|p| *p != which)
    }

    pub fn current(&self) -> Option<Ambience> {
        self.current
    }

    pub fn is_unmuted(&self) -> bool {
        self.unmuted
    }

    /// Returns `true` only the first time; later calls are no-ops.
    pub fn unmute(&mut self) -> bool {
        if self.unmuted {
            return false;
        }
        self.unmuted = true;
        true
    }

    /// The track a listener can actually hear right now.
    pub fn audible(&self) -> Option<Ambience> {
        if self.unmuted {
            self.current
        } else {
            None
        }
    }

    pub fn is_audible(&self, which: Ambience) -> bool {
        self.audible() == Some(which)
    }
}
