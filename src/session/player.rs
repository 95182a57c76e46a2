use anyhow::Result;

use crate::morse;

/// Seam for the external playback engine. The session loop only ever talks
/// to this trait; an audio implementation would sit behind it with its own
/// tone settings.
pub trait MorsePlayer {
    fn play(&mut self, text: &str) -> Result<()>;
}

/// Renders the transmission as dit/dah glyphs on the terminal, so the learner
/// copies from symbols instead of tone.
pub struct GlyphPlayer;

impl MorsePlayer for GlyphPlayer {
    fn play(&mut self, text: &str) -> Result<()> {
        println!("  {}", morse::encode(text));
        Ok(())
    }
}
