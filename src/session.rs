//! Meme editing session: the state behind the form controls.
//!
//! Each UI event maps to one method. Methods return the draw commands the
//! surface must replay, and update which controls are enabled.

use core::fmt;

use alloc::string::String;
use alloc::vec::Vec;

use crate::caption::Captions;
use crate::config::CanvasConfig;
use crate::draw::{DrawCommand, image_commands};
use crate::fit::{FitError, FitResult, checked_fit};
use crate::speech::{Utterance, VoiceList, Volume, VolumeLevel};

#[cfg(feature = "query")]
use crate::query::MemeRequest;

/// Which buttons accept clicks.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Controls {
    pub generate: bool,
    pub clear: bool,
    pub read_text: bool,
}

impl Controls {
    /// Nothing on the canvas: only loading an image does anything.
    pub const EMPTY: Self = Self {
        generate: false,
        clear: false,
        read_text: false,
    };
    /// Ready to generate: an image is on the canvas, no captions yet.
    pub const EDITING: Self = Self {
        generate: true,
        clear: false,
        read_text: false,
    };
    /// Captions drawn: can clear or read them aloud.
    pub const GENERATED: Self = Self {
        generate: false,
        clear: true,
        read_text: true,
    };
}

/// Error from a [`MemeSession`] event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionError {
    /// The image dimensions can not be fitted.
    Fit(FitError),
    /// Captions requested before any image was loaded.
    NoImage,
    /// Captions are already drawn; clear or load a new image first.
    AlreadyGenerated,
    /// Read-aloud requested before captions were generated.
    NothingToRead,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fit(e) => write!(f, "image can not be placed: {e}"),
            Self::NoImage => f.write_str("no image loaded"),
            Self::AlreadyGenerated => f.write_str("captions already drawn"),
            Self::NothingToRead => f.write_str("no captions to read"),
        }
    }
}

impl core::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Fit(e) => Some(e),
            _ => None,
        }
    }
}

impl From<FitError> for SessionError {
    fn from(e: FitError) -> Self {
        Self::Fit(e)
    }
}

/// The image currently drawn on the canvas.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LoadedImage {
    pub width: f64,
    pub height: f64,
    pub placement: FitResult<f64>,
}

/// State of one meme editor.
///
/// # Example
///
/// ```
/// use memelayout::{Captions, MemeSession};
///
/// let mut session = MemeSession::default();
/// session.load_image(1200.0, 600.0).unwrap();
/// let cmds = session.generate(Captions::new("top", "bottom")).unwrap();
/// assert_eq!(cmds.len(), 4);
/// assert!(session.controls().read_text);
/// ```
#[derive(Clone, Debug)]
pub struct MemeSession {
    config: CanvasConfig,
    image: Option<LoadedImage>,
    image_alt: Option<String>,
    captions: Option<Captions>,
    voices: VoiceList,
    selected_voice: Option<String>,
    volume: Volume,
    controls: Controls,
}

impl Default for MemeSession {
    fn default() -> Self {
        Self::new(CanvasConfig::default())
    }
}

impl MemeSession {
    pub fn new(config: CanvasConfig) -> Self {
        Self {
            config,
            image: None,
            image_alt: None,
            captions: None,
            voices: VoiceList::default(),
            selected_voice: None,
            volume: Volume::default(),
            controls: Controls::EMPTY,
        }
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn controls(&self) -> Controls {
        self.controls
    }

    pub fn image(&self) -> Option<&LoadedImage> {
        self.image.as_ref()
    }

    /// Alt text derived from the last selected file.
    pub fn image_alt(&self) -> Option<&str> {
        self.image_alt.as_deref()
    }

    /// Captions from the last generate, cleared by [`clear`](Self::clear).
    pub fn captions(&self) -> Option<&Captions> {
        self.captions.as_ref()
    }

    pub fn voices(&self) -> &VoiceList {
        &self.voices
    }

    pub fn volume(&self) -> Volume {
        self.volume
    }

    /// Voice name picked for reading aloud.
    pub fn selected_voice(&self) -> Option<&str> {
        self.selected_voice.as_deref()
    }

    /// A file was picked. Records and returns the alt text: the last path
    /// segment, split on `\` or `/`.
    pub fn select_file(&mut self, path: &str) -> &str {
        let name = path.rsplit(['\\', '/']).next().unwrap_or(path);
        tracing::debug!(name, "file selected");
        self.image_alt.insert(String::from(name))
    }

    /// A new image finished decoding. Paints the background and the fitted
    /// image; previous captions are discarded.
    pub fn load_image(&mut self, width: f64, height: f64) -> Result<Vec<DrawCommand>, SessionError> {
        let (cw, ch) = self.config.size();
        let placement = checked_fit(self.config.fit_policy, cw, ch, width, height)?;
        tracing::debug!(
            width,
            height,
            x = placement.start_x,
            y = placement.start_y,
            "image loaded"
        );
        self.image = Some(LoadedImage {
            width,
            height,
            placement,
        });
        self.captions = None;
        self.controls = Controls::EDITING;
        Ok(image_commands(
            (cw, ch),
            self.config.background,
            (width, height),
            placement,
        )
        .into())
    }

    /// The form was submitted. Draws the captions over the current image.
    ///
    /// Succeeds exactly when [`Controls::generate`] is set.
    pub fn generate(&mut self, captions: Captions) -> Result<Vec<DrawCommand>, SessionError> {
        if self.image.is_none() {
            return Err(SessionError::NoImage);
        }
        if self.captions.is_some() {
            return Err(SessionError::AlreadyGenerated);
        }
        let (cw, ch) = self.config.size();
        let cmds = captions.commands(&self.config.caption, cw, ch);
        tracing::debug!(top = %captions.top, bottom = %captions.bottom, "captions generated");
        self.captions = Some(captions);
        self.controls = Controls::GENERATED;
        Ok(cmds)
    }

    /// The clear button was pressed. Wipes the whole canvas, image included.
    pub fn clear(&mut self) -> Vec<DrawCommand> {
        let (width, height) = self.config.size();
        tracing::debug!("canvas cleared");
        self.image = None;
        self.captions = None;
        self.controls = Controls::EMPTY;
        alloc::vec![DrawCommand::Clear { width, height }]
    }

    /// Replace the voice list, e.g. when the engine reports its voices.
    pub fn set_voices(&mut self, voices: VoiceList) {
        tracing::debug!(count = voices.len(), "voice list updated");
        self.voices = voices;
    }

    /// A voice was picked. `None` goes back to the engine default.
    pub fn select_voice(&mut self, name: Option<&str>) {
        self.selected_voice = name.map(String::from);
    }

    /// The volume slider moved. Returns the indicator level to show.
    pub fn set_volume(&mut self, value: u32) -> VolumeLevel {
        self.volume = Volume::new(value);
        self.volume.level()
    }

    /// Build the utterance for the generated captions. `voice` overrides the
    /// [selected voice](Self::select_voice); an unknown or absent name keeps
    /// the engine default.
    pub fn read_text(&self, voice: Option<&str>) -> Result<Utterance, SessionError> {
        let captions = self.captions.as_ref().ok_or(SessionError::NothingToRead)?;
        let voice = voice
            .or(self.selected_voice.as_deref())
            .and_then(|name| self.voices.find(name))
            .cloned();
        Ok(Utterance {
            text: captions.spoken_text(),
            voice,
            volume: self.volume,
        })
    }

    /// Apply the canvas, voice and volume settings of a parsed query string.
    ///
    /// Canvas changes take effect on the next [`load_image`](Self::load_image).
    /// Captions are not drawn; pass [`MemeRequest::captions`] to
    /// [`generate`](Self::generate).
    #[cfg(feature = "query")]
    pub fn apply_request(&mut self, request: &MemeRequest) {
        self.config = request.apply(self.config.clone());
        if let Some(volume) = request.volume {
            self.volume = volume;
        }
        if let Some(voice) = &request.voice {
            self.selected_voice = Some(voice.clone());
        }
        tracing::debug!(
            width = self.config.width,
            height = self.config.height,
            "request applied"
        );
    }
}
