//! Audio collaborators.
//!
//! Sound cues are fire-and-forget: an implementation reports its own failures
//! through `tracing` and never hands them back to the game.

use std::io::{self, Write};

use tracing::{debug, warn};

use crate::types::SoundCue;

pub trait AudioSink {
    fn play(&mut self, cue: SoundCue);
}

/// Plays nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn play(&mut self, cue: SoundCue) {
        debug!(cue = cue.as_str(), "sound (silent)");
    }
}

/// Terminal bell audio.
///
/// A terminal has exactly one sound, so cues are told apart by bell count:
/// `error` rings once, `complete` rings twice, `correct` stays quiet.
#[derive(Debug)]
pub struct BellAudio<W: Write> {
    out: W,
    muted: bool,
}

impl BellAudio<io::Stdout> {
    pub fn stdout(muted: bool) -> Self {
        Self::new(io::stdout(), muted)
    }
}

impl<W: Write> BellAudio<W> {
    pub fn new(out: W, muted: bool) -> Self {
        Self { out, muted }
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn ring(&mut self, times: usize) -> io::Result<()> {
        for _ in 0..times {
            self.out.write_all(b"\x07")?;
        }
        self.out.flush()
    }
}

/// Bells per cue
pub fn bell_count(cue: SoundCue) -> usize {
    match cue {
        SoundCue::Correct => 0,
        SoundCue::Error => 1,
        SoundCue::Complete => 2,
    }
}

impl<W: Write> AudioSink for BellAudio<W> {
    fn play(&mut self, cue: SoundCue) {
        debug!(cue = cue.as_str(), muted = self.muted, "sound");
        if self.muted {
            return;
        }
        let times = bell_count(cue);
        if times == 0 {
            return;
        }
        if let Err(err) = self.ring(times) {
            warn!(cue = cue.as_str(), error = %err, "failed to play sound");
        }
    }
}
