//! Render-cycle controller
//!
//! Owns the peripherals and the render context, and runs one
//! sample → classify → render → transmit pass whenever the tick flag says
//! a cycle is due. Only the main loop touches the controller; the tick
//! interrupt only sees the flag.

use barmatrix_core::{ConfigError, ControllerConfig, FrameBuffer, RenderContext, TickFlag, LEVELS_PER_CHANNEL};
use barmatrix_hal::{AnalogSampler, CountdownTimer, OutputPin, SerialTransceiver};

use crate::delay::Delay;
use crate::sampler::Sampler;
use crate::transmitter::Transmitter;

/// Bar-graph controller
pub struct Controller<A, S, P, T> {
    sampler: Sampler<A>,
    transmitter: Transmitter<S, P>,
    delay: Delay<T>,
    context: RenderContext,
}

impl<A, S, P, T> Controller<A, S, P, T>
where
    A: AnalogSampler,
    S: SerialTransceiver,
    P: OutputPin,
    T: CountdownTimer,
{
    /// Take the peripherals; every channel starts unconfigured
    pub fn new(adc: A, spi: S, select: P, timer: T) -> Self {
        Self {
            sampler: Sampler::new(adc),
            transmitter: Transmitter::new(spi, select),
            delay: Delay::new(timer),
            context: RenderContext::new(),
        }
    }

    /// Configure one channel; see [`RenderContext::configure_channel`]
    ///
    /// A rejected configuration leaves the channel as it was.
    pub fn configure_channel(
        &mut self,
        input: u8,
        column: u8,
        levels: [u16; LEVELS_PER_CHANNEL],
    ) -> Result<(), ConfigError> {
        self.context.configure_channel(input, column, levels)
    }

    /// Apply a whole configuration, all or nothing
    pub fn apply_config(&mut self, config: &ControllerConfig) -> Result<(), ConfigError> {
        self.context.apply_config(config)
    }

    /// Channel mappings and bar state of the most recent cycle
    pub fn context(&self) -> &RenderContext {
        &self.context
    }

    /// Run one full render cycle and return the frame that was sent
    pub fn run_cycle(&mut self) -> &FrameBuffer {
        let samples = self.sampler.sample_all();
        self.context.classify(&samples);
        let frame = self.context.render();
        self.transmitter.send_frame(frame, &mut self.delay);
        #[cfg(feature = "defmt")]
        defmt::trace!("cycle done, samples {}", samples);
        frame
    }

    /// Run a cycle if one is due
    ///
    /// Returns true if a cycle ran. The flag is held in `Rendering` for
    /// the whole cycle, so ticks arriving meanwhile are dropped.
    pub fn poll(&mut self, flag: &TickFlag) -> bool {
        if !flag.try_begin() {
            return false;
        }
        self.run_cycle();
        flag.finish();
        true
    }

    /// Main loop
    pub fn run(&mut self, flag: &TickFlag) -> ! {
        loop {
            if !self.poll(flag) {
                core::hint::spin_loop();
            }
        }
    }

    /// Release the peripherals as `(adc, spi, select, timer)`
    pub fn release(self) -> (A, S, P, T) {
        let (spi, select) = self.transmitter.free();
        (self.sampler.free(), spi, select, self.delay.free())
    }
}
