//! Render context
//!
//! Owns the channel array and the frame buffer. Whoever holds `&mut`
//! to the context is the only stage touching either, which is how the
//! pipeline hands data from classification to rendering to transmission.

use crate::channel::{Channel, LEVELS_PER_CHANNEL, NUM_CHANNELS};
use crate::config::{ConfigError, ControllerConfig};
use crate::render::FrameBuffer;

/// Channels plus the frame drawn from them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    channels: [Channel; NUM_CHANNELS],
    frame: FrameBuffer,
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderContext {
    /// All channels unconfigured, frame blank
    pub const fn new() -> Self {
        Self {
            channels: [Channel::new(); NUM_CHANNELS],
            frame: FrameBuffer::new(),
        }
    }

    /// Configure the channel on `input`
    pub fn configure_channel(
        &mut self,
        input: u8,
        column: u8,
        levels: [u16; LEVELS_PER_CHANNEL],
    ) -> Result<(), ConfigError> {
        let channel = self
            .channels
            .get_mut(input as usize)
            .ok_or(ConfigError::InputOutOfRange(input))?;
        channel.configure(column, levels)
    }

    /// Apply a whole configuration
    ///
    /// Validated up front: either every listed channel is configured or
    /// nothing changes. Inputs not listed keep their current state.
    pub fn apply_config(&mut self, config: &ControllerConfig) -> Result<(), ConfigError> {
        config.validate()?;
        for entry in &config.channels {
            self.channels[entry.input as usize].apply(entry)?;
        }
        Ok(())
    }

    /// Return every channel to the unconfigured state
    pub fn reset_channels(&mut self) {
        for channel in &mut self.channels {
            channel.reset();
        }
    }

    /// Classify one scan's worth of samples, in input order
    ///
    /// Unconfigured channels skip their sample.
    pub fn classify(&mut self, samples: &[u16; NUM_CHANNELS]) {
        for (channel, &sample) in self.channels.iter_mut().zip(samples.iter()) {
            channel.update(sample);
        }
    }

    /// Clear the frame and draw every channel into it
    pub fn render(&mut self) -> &FrameBuffer {
        self.frame.render(&self.channels);
        &self.frame
    }

    /// Channel on `input`
    pub fn channel(&self, input: usize) -> Option<&Channel> {
        self.channels.get(input)
    }

    /// All channels, in input order
    pub fn channels(&self) -> &[Channel; NUM_CHANNELS] {
        &self.channels
    }

    /// Frame from the last render
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::Level;
    use crate::config::ChannelConfig;
    use crate::render::Band;
    use barmatrix_protocol::Color;

    const REFERENCE: [u16; 8] = [347, 640, 890, 1107, 1296, 1462, 1610, 1743];

    #[test]
    fn test_scenario_single_row() {
        let mut ctx = RenderContext::new();
        ctx.configure_channel(0, 0, REFERENCE).unwrap();
        ctx.classify(&[500, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(ctx.channel(0).map(|c| c.level()), Level::new(1));

        let col = ctx.render().column(0);
        assert_eq!(col[0], Band::Low.color());
        assert!(col[1..].iter().all(|&c| c == Color::Blank));
    }

    #[test]
    fn test_scenario_six_rows() {
        let mut ctx = RenderContext::new();
        ctx.configure_channel(0, 0, REFERENCE).unwrap();
        ctx.classify(&[1500, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(ctx.channel(0).map(|c| c.level()), Level::new(6));

        let col = ctx.render().column(0);
        assert_eq!(&col[0..3], &[Band::Low.color(); 3]);
        assert_eq!(&col[3..6], &[Band::Mid.color(); 3]);
        assert_eq!(&col[6..], &[Color::Blank; 2]);
    }

    #[test]
    fn test_high_band_needs_seven_rows() {
        let mut ctx = RenderContext::new();
        ctx.configure_channel(0, 0, REFERENCE).unwrap();
        ctx.classify(&[1700, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(ctx.channel(0).map(|c| c.level()), Level::new(7));

        let col = ctx.render().column(0);
        assert_eq!(col[6], Band::High.color());
        assert_eq!(col[7], Color::Blank);

        ctx.classify(&[4095, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(ctx.render().column(0)[7], Band::High.color());
    }

    #[test]
    fn test_scenario_unconfigured_channel() {
        let mut ctx = RenderContext::new();
        ctx.classify(&[4095; 8]);
        assert!(ctx.render().is_blank());
        assert!(ctx.channels().iter().all(|c| c.level() == Level::EMPTY));
    }

    #[test]
    fn test_configure_bad_input() {
        let mut ctx = RenderContext::new();
        assert_eq!(
            ctx.configure_channel(8, 0, REFERENCE),
            Err(ConfigError::InputOutOfRange(8))
        );
    }

    #[test]
    fn test_apply_config_is_all_or_nothing() {
        let mut config = ControllerConfig::default();
        config
            .channels
            .push(ChannelConfig {
                input: 0,
                column: 0,
                levels: REFERENCE,
            })
            .unwrap();
        config
            .channels
            .push(ChannelConfig {
                input: 1,
                column: 9,
                levels: REFERENCE,
            })
            .unwrap();

        let mut ctx = RenderContext::new();
        assert_eq!(
            ctx.apply_config(&config),
            Err(ConfigError::ColumnOutOfRange(9))
        );
        assert!(ctx.channels().iter().all(|c| !c.is_configured()));

        config.channels[1].column = 1;
        ctx.apply_config(&config).unwrap();
        assert!(ctx.channel(0).unwrap().is_configured());
        assert!(ctx.channel(1).unwrap().is_configured());
        assert!(!ctx.channel(2).unwrap().is_configured());
    }

    #[test]
    fn test_reset_channels() {
        let mut ctx = RenderContext::new();
        ctx.configure_channel(4, 4, REFERENCE).unwrap();
        ctx.reset_channels();
        assert_eq!(ctx, RenderContext::new());
    }
}
